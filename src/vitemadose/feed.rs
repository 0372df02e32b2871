use reqwest::Client;
use tracing::{debug, info};

use crate::errors::CheckError;
use crate::models::availability::AvailabilityDocument;
use crate::urls::join_segments;

/// Downloads and decodes the availability file of one département.
pub async fn fetch_availability(
    client: &Client,
    feed_base_url: &str,
    departement: &str,
) -> Result<AvailabilityDocument, CheckError> {
    let url = join_segments(feed_base_url, &[&format!("{}.json", departement)])?;
    debug!(%url, "fetching availability feed");

    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    let document = AvailabilityDocument::from_slice(&body)?;

    info!(
        departement,
        centres = document.centres_disponibles.len(),
        last_updated = ?document.last_updated,
        "fetched availability feed"
    );

    Ok(document)
}
