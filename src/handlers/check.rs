use tracing::info;

use crate::errors::CheckError;
use crate::ifttt::send_webhook;
use crate::models::trigger::{
    MISSING_KEY_MESSAGE, MISSING_TRIGGER_MESSAGE, Notification, TriggerRequest, TriggerResponse,
};
use crate::state::AppState;
use crate::vitemadose::feed::fetch_availability;

/// Fetches the département feed, counts chronodoses and pings the webhook
/// when there is at least one. Returns the count.
pub async fn run_check(
    state: &AppState,
    key: String,
    trigger: String,
    departement: String,
) -> Result<u64, CheckError> {
    let document =
        fetch_availability(&state.client, &state.config.feed_base_url, &departement).await?;
    let count = document.chronodose_count();

    info!(%departement, count, "counted chronodose slots");

    if count > 0 {
        let notification = Notification {
            count,
            departement,
            key,
            trigger,
        };
        send_webhook(&state.client, &state.config.webhook_base_url, &notification).await;
    }

    Ok(count)
}

pub async fn handle_trigger(
    state: &AppState,
    request: TriggerRequest,
) -> Result<TriggerResponse, CheckError> {
    let Some(key) = request.key else {
        return Ok(TriggerResponse::Rejected(MISSING_KEY_MESSAGE));
    };

    let Some(trigger) = request.trigger else {
        return Ok(TriggerResponse::Rejected(MISSING_TRIGGER_MESSAGE));
    };

    let departement = request
        .departement
        .unwrap_or_else(|| state.config.default_departement.clone());

    run_check(state, key, trigger, departement).await?;

    Ok(TriggerResponse::Accepted)
}
