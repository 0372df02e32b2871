pub mod availability;
pub mod trigger;
