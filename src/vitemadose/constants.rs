// Vite Ma Dose static feed, one JSON file per département
pub const FEED_BASE_URL: &str = "https://vitemadose.gitlab.io/vitemadose";

pub const DEFAULT_DEPARTEMENT: &str = "75";

// What we count
pub const TARGET_VACCINE: &str = "Pfizer-BioNTech";
pub const CHRONODOSE_LABEL: &str = "chronodose";
