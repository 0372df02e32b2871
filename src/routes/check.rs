use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde_json::Value;

use crate::errors::CheckError;
use crate::handlers::check::handle_trigger;
use crate::models::trigger::TriggerRequest;
use crate::state::AppState;

const BAD_BODY_MESSAGE: &str = "Request body must be a JSON object";

/// Parses the body without requiring a JSON content type, schedulers rarely set one.
fn parse_request(body: &[u8]) -> Option<TriggerRequest> {
    match serde_json::from_slice::<Value>(body) {
        Ok(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
        _ => None,
    }
}

async fn check(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, CheckError> {
    let Some(request) = parse_request(&body) else {
        return Ok(HttpResponse::BadRequest().body(BAD_BODY_MESSAGE));
    };

    let response = handle_trigger(&state, request).await?;
    let status = StatusCode::from_u16(response.status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    Ok(HttpResponse::build(status)
        .content_type("text/plain; charset=utf-8")
        .body(response.body()))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::route().to(check)));
}
