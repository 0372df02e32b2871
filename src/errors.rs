use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("failed to fetch availability feed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("unexpected availability document: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ResponseError for CheckError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!("check failed: {}", self);
        HttpResponse::build(self.status_code()).body("Internal Server Error")
    }
}
