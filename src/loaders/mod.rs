//! Turning text resources into sample sequences.
//!
//! A resource holds one numeric value per line; anything else is skipped
//! and counted.

mod file;
#[cfg(feature = "remote")]
mod remote;
mod text;

pub use file::{load_file, load_file_into};
#[cfg(feature = "remote")]
pub use remote::{fetch_into, fetch_samples};
pub use text::{ParsedSamples, parse_samples};
