use std::fs;
use std::path::Path;

use log::debug;

use crate::core::{Dataset, SampleKind, StabilityError};
use crate::loaders::text::{ParsedSamples, parse_samples};

/// Reads and decodes a sample file.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<ParsedSamples, StabilityError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let parsed = parse_samples(&text);
    debug!("{}: read {} sample(s)", path.display(), parsed.len());
    Ok(parsed)
}

/// Reads a sample file straight into `ds` as `kind`, returning how many lines
/// were skipped.
pub fn load_file_into<P: AsRef<Path>>(
    ds: &mut Dataset,
    path: P,
    kind: SampleKind,
) -> Result<usize, StabilityError> {
    let parsed = load_file(path)?;
    ds.load(kind, parsed.values);
    Ok(parsed.skipped)
}
