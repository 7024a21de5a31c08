use log::warn;

use crate::utils::file_parsing::parse_sample_line;

/// Decoded samples plus the number of lines that were not numeric.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSamples {
    pub values: Vec<f64>,
    pub skipped: usize,
}

impl ParsedSamples {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Decodes a text resource with one value per line, in order.
pub fn parse_samples(text: &str) -> ParsedSamples {
    let mut out = ParsedSamples::default();
    for line in text.lines() {
        match parse_sample_line(line) {
            Some(v) => out.values.push(v),
            None => out.skipped += 1,
        }
    }
    if out.skipped > 0 {
        warn!(
            "skipped {} non-numeric line(s), kept {} sample(s)",
            out.skipped,
            out.values.len()
        );
    }
    out
}
