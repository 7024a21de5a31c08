use crate::core::freq_to_phase;

/// Frequency samples of the classic NBS stability test set.
pub const REFERENCE_FREQUENCY: [f64; 9] =
    [892.0, 809.0, 823.0, 798.0, 671.0, 644.0, 883.0, 903.0, 677.0];

/// Constant-frequency phase ramp.
pub const LINEAR_RAMP: [f64; 6] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];

/// [`REFERENCE_FREQUENCY`] integrated to phase with `tau0 = 1`.
pub fn reference_phase() -> Vec<f64> {
    freq_to_phase(&REFERENCE_FREQUENCY, 1.0)
}

/// The reference data as a text resource, interleaved with lines a loader
/// must skip.
pub fn reference_text_with_noise() -> String {
    let mut out = String::from("# NBS frequency data\n");
    for (i, v) in REFERENCE_FREQUENCY.iter().enumerate() {
        out.push_str(&format!("{v}\n"));
        if i == 3 {
            out.push_str("not a number\n\n");
        }
    }
    out
}
