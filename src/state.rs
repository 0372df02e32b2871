use reqwest::Client;

use crate::config::Config;

/// Shared read-only state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: Client,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}
