use log::debug;

use crate::core::{Dataset, SampleKind, StabilityError};
use crate::loaders::text::{ParsedSamples, parse_samples};

/// Downloads a text resource and decodes it.
///
/// The whole body is fetched before decoding; the estimator engine is never
/// involved until the returned samples are loaded into a dataset.
pub async fn fetch_samples(url: &str) -> Result<ParsedSamples, StabilityError> {
    let response = reqwest::get(url)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| StabilityError::Fetch(e.to_string()))?;
    let text = response
        .text()
        .await
        .map_err(|e| StabilityError::Fetch(e.to_string()))?;
    let parsed = parse_samples(&text);
    debug!("{url}: fetched {} sample(s)", parsed.len());
    Ok(parsed)
}

/// Fetches `url` and loads the result into `ds` as `kind`, returning how many
/// lines were skipped.
pub async fn fetch_into(
    ds: &mut Dataset,
    url: &str,
    kind: SampleKind,
) -> Result<usize, StabilityError> {
    let parsed = fetch_samples(url).await?;
    ds.load(kind, parsed.values);
    Ok(parsed.skipped)
}
