use std::env;

use crate::errors::CheckError;
use crate::ifttt::WEBHOOK_BASE_URL;
use crate::vitemadose::constants::{DEFAULT_DEPARTEMENT, FEED_BASE_URL};

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP trigger listens on
    pub bind_address: String,
    pub port: u16,
    /// Base URL the `<departement>.json` files are fetched from
    pub feed_base_url: String,
    /// Base URL of the IFTTT Maker webhook service
    pub webhook_base_url: String,
    /// Département checked when a request does not name one
    pub default_departement: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            feed_base_url: FEED_BASE_URL.to_string(),
            webhook_base_url: WEBHOOK_BASE_URL.to_string(),
            default_departement: DEFAULT_DEPARTEMENT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, CheckError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, CheckError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(bind_address) = lookup("BIND_ADDRESS") {
            config.bind_address = bind_address;
        }

        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| CheckError::Config(format!("invalid PORT: {}", port)))?;
        }

        if let Some(feed_base_url) = lookup("FEED_BASE_URL") {
            config.feed_base_url = feed_base_url;
        }

        if let Some(webhook_base_url) = lookup("WEBHOOK_BASE_URL") {
            config.webhook_base_url = webhook_base_url;
        }

        if let Some(departement) = lookup("DEFAULT_DEPARTEMENT") {
            config.default_departement = departement;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CheckError> {
        if self.feed_base_url.trim().is_empty() {
            return Err(CheckError::Config("feed_base_url cannot be empty".to_string()));
        }

        if self.webhook_base_url.trim().is_empty() {
            return Err(CheckError::Config(
                "webhook_base_url cannot be empty".to_string(),
            ));
        }

        if self.default_departement.trim().is_empty() {
            return Err(CheckError::Config(
                "default_departement cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
