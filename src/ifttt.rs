use reqwest::Client;
use tracing::{info, warn};
use url::Url;

use crate::errors::CheckError;
use crate::models::trigger::Notification;
use crate::urls::join_segments;

pub const WEBHOOK_BASE_URL: &str = "https://maker.ifttt.com";

/// `<base>/trigger/<trigger>/with/key/<key>`
pub fn webhook_url(base: &str, trigger: &str, key: &str) -> Result<Url, CheckError> {
    join_segments(base, &["trigger", trigger, "with", "key", key])
}

/// Pings the Maker webhook with the count and département as `value1` and `value2`.
///
/// Delivery is fire-and-forget: failures are logged and never reach the caller.
pub async fn send_webhook(client: &Client, base: &str, notification: &Notification) {
    let url = match webhook_url(base, &notification.trigger, &notification.key) {
        Ok(url) => url,
        Err(e) => {
            warn!(trigger = %notification.trigger, "skipping webhook: {}", e);
            return;
        }
    };

    let count = notification.count.to_string();
    let params = [
        ("value1", count.as_str()),
        ("value2", notification.departement.as_str()),
    ];

    match client.get(url).form(&params).send().await {
        Ok(response) => info!(
            trigger = %notification.trigger,
            departement = %notification.departement,
            count = notification.count,
            status = %response.status(),
            "webhook sent"
        ),
        Err(e) => warn!(
            trigger = %notification.trigger,
            departement = %notification.departement,
            "webhook delivery failed: {}",
            e.without_url()
        ),
    }
}
