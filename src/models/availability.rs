use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::vitemadose::constants::{CHRONODOSE_LABEL, TARGET_VACCINE};

/// One département file from the Vite Ma Dose feed.
#[derive(Debug, Deserialize, Clone)]
pub struct AvailabilityDocument {
    pub centres_disponibles: Vec<Centre>,
    #[serde(default, with = "lenient_rfc3339")]
    pub last_updated: Option<DateTime<FixedOffset>>,
}

// Only ever logged, so anything that is not RFC 3339 becomes None
mod lenient_rfc3339 {
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<Value> = Option::deserialize(deserializer)?;
        Ok(match raw {
            Some(Value::String(text)) => DateTime::parse_from_rfc3339(&text).ok(),
            _ => None,
        })
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Centre {
    pub vaccine_type: VaccineTypes,
    pub appointment_schedules: Vec<AppointmentSchedule>,
}

/// The feed lists vaccine types as an array, older files used a bare string
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum VaccineTypes {
    List(Vec<String>),
    Text(String),
}

impl VaccineTypes {
    /// Membership for lists, substring for plain strings.
    pub fn contains(&self, vaccine: &str) -> bool {
        match self {
            VaccineTypes::List(types) => types.iter().any(|t| t == vaccine),
            VaccineTypes::Text(text) => text.contains(vaccine),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppointmentSchedule {
    pub name: String,
    pub total: u64,
}

impl AvailabilityDocument {
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Sums the chronodose totals of every centre offering the target vaccine.
    ///
    /// Saturates at `u64::MAX` rather than overflowing on absurd feed values.
    pub fn chronodose_count(&self) -> u64 {
        self.centres_disponibles
            .iter()
            .filter(|centre| centre.vaccine_type.contains(TARGET_VACCINE))
            .flat_map(|centre| centre.appointment_schedules.iter())
            .filter(|schedule| schedule.name == CHRONODOSE_LABEL)
            .map(|schedule| schedule.total)
            .fold(0, u64::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: serde_json::Value) -> AvailabilityDocument {
        serde_json::from_value(value).expect("valid availability document")
    }

    #[test]
    fn counts_pfizer_chronodoses() {
        let doc = document(json!({
            "centres_disponibles": [{
                "vaccine_type": ["Pfizer-BioNTech"],
                "appointment_schedules": [{ "name": "chronodose", "total": 3 }]
            }]
        }));

        assert_eq!(doc.chronodose_count(), 3);
    }

    #[test]
    fn ignores_other_vaccines() {
        let doc = document(json!({
            "centres_disponibles": [{
                "vaccine_type": ["Moderna"],
                "appointment_schedules": [{ "name": "chronodose", "total": 5 }]
            }]
        }));

        assert_eq!(doc.chronodose_count(), 0);
    }

    #[test]
    fn empty_feed_counts_zero() {
        let doc = document(json!({ "centres_disponibles": [] }));
        assert_eq!(doc.chronodose_count(), 0);
    }

    #[test]
    fn sums_only_chronodose_schedules_across_centres() {
        let doc = document(json!({
            "last_updated": "2021-06-01T10:15:00.123456+02:00",
            "centres_disponibles": [
                {
                    "nom": "Centre A",
                    "vaccine_type": ["Pfizer-BioNTech", "Moderna"],
                    "appointment_schedules": [
                        { "name": "chronodose", "total": 2 },
                        { "name": "1_days", "total": 40 },
                        { "name": "7_days", "total": 12 }
                    ]
                },
                {
                    "nom": "Centre B",
                    "vaccine_type": ["AstraZeneca"],
                    "appointment_schedules": [{ "name": "chronodose", "total": 9 }]
                },
                {
                    "nom": "Centre C",
                    "vaccine_type": ["Pfizer-BioNTech"],
                    "appointment_schedules": [{ "name": "chronodose", "total": 4 }]
                }
            ]
        }));

        assert_eq!(doc.chronodose_count(), 6);
        assert!(doc.last_updated.is_some());
    }

    #[test]
    fn category_label_must_match_exactly() {
        let doc = document(json!({
            "centres_disponibles": [{
                "vaccine_type": ["Pfizer-BioNTech"],
                "appointment_schedules": [
                    { "name": "Chronodose", "total": 8 },
                    { "name": "chronodoses", "total": 8 }
                ]
            }]
        }));

        assert_eq!(doc.chronodose_count(), 0);
    }

    #[test]
    fn string_vaccine_type_matches_on_substring() {
        let types = VaccineTypes::Text("Pfizer-BioNTech, Moderna".to_string());
        assert!(types.contains(TARGET_VACCINE));

        let types = VaccineTypes::List(vec!["Pfizer-BioNTech (rappel)".to_string()]);
        assert!(!types.contains(TARGET_VACCINE));
    }

    #[test]
    fn missing_fields_are_decode_errors() {
        assert!(AvailabilityDocument::from_slice(br#"{"centres": []}"#).is_err());
        assert!(
            AvailabilityDocument::from_slice(
                br#"{"centres_disponibles": [{"vaccine_type": ["Pfizer-BioNTech"]}]}"#
            )
            .is_err()
        );
    }

    #[test]
    fn malformed_timestamp_still_counts() {
        let raw = br#"{"last_updated": "2021-05-05 10:38:16", "centres_disponibles": [{
            "vaccine_type": ["Pfizer-BioNTech"],
            "appointment_schedules": [{"name": "chronodose", "total": 3}]
        }]}"#;

        let doc = AvailabilityDocument::from_slice(raw).unwrap();
        assert_eq!(doc.chronodose_count(), 3);
        assert_eq!(doc.last_updated, None);

        let doc = document(json!({ "last_updated": 1620204000, "centres_disponibles": [] }));
        assert_eq!(doc.last_updated, None);
    }

    #[test]
    fn huge_totals_saturate() {
        let doc = document(json!({
            "centres_disponibles": [
                {
                    "vaccine_type": ["Pfizer-BioNTech"],
                    "appointment_schedules": [{ "name": "chronodose", "total": u64::MAX }]
                },
                {
                    "vaccine_type": ["Pfizer-BioNTech"],
                    "appointment_schedules": [{ "name": "chronodose", "total": 1 }]
                }
            ]
        }));

        assert_eq!(doc.chronodose_count(), u64::MAX);
    }

    #[test]
    fn negative_totals_are_rejected() {
        let raw = br#"{"centres_disponibles": [{
            "vaccine_type": ["Pfizer-BioNTech"],
            "appointment_schedules": [{"name": "chronodose", "total": -1}]
        }]}"#;

        assert!(AvailabilityDocument::from_slice(raw).is_err());
    }
}
