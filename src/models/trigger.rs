use serde::Deserialize;

pub const MISSING_KEY_MESSAGE: &str = "Cannot ping ifttt without API key";
pub const MISSING_TRIGGER_MESSAGE: &str = "Cannot ping ifttt without trigger name";

/// Body of an inbound check request.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct TriggerRequest {
    #[serde(default, with = "string_or_number")]
    pub key: Option<String>,
    #[serde(default, with = "string_or_number")]
    pub trigger: Option<String>,
    #[serde(default, with = "string_or_number")]
    pub departement: Option<String>,
}

// Schedulers send `"departement": 75` as often as `"75"`
mod string_or_number {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) => Ok(Some(text)),
            Some(Value::Number(number)) => Ok(Some(number.to_string())),
            Some(other) => Err(D::Error::custom(format!(
                "expected a string or a number, got {}",
                other
            ))),
        }
    }
}

/// Outcome of a check request, independent of the HTTP framework serving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerResponse {
    /// A required field was missing
    Rejected(&'static str),
    /// The check ran, whether or not a webhook went out
    Accepted,
}

impl TriggerResponse {
    pub fn status(&self) -> u16 {
        match self {
            TriggerResponse::Rejected(_) => 404,
            TriggerResponse::Accepted => 200,
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            TriggerResponse::Rejected(message) => *message,
            TriggerResponse::Accepted => "OK",
        }
    }
}

/// A single webhook ping, built fresh for each check.
#[derive(Debug, Clone)]
pub struct Notification {
    pub count: u64,
    pub departement: String,
    pub key: String,
    pub trigger: String,
}
