use url::Url;

use crate::errors::CheckError;

/// Appends percent-encoded path segments to `base`, keeping any path it already has.
pub fn join_segments(base: &str, segments: &[&str]) -> Result<Url, CheckError> {
    let mut url = Url::parse(base)
        .map_err(|e| CheckError::Config(format!("invalid base url {}: {}", base, e)))?;

    url.path_segments_mut()
        .map_err(|_| CheckError::Config(format!("base url cannot carry a path: {}", base)))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}
