/// Arithmetic mean; `NaN` for an empty slice.
#[inline]
pub fn mean(a: &[f64]) -> f64 {
    if a.is_empty() {
        return f64::NAN;
    }
    a.iter().sum::<f64>() / a.len() as f64
}

/// Largest power of ten not greater than `v` (`v` must be positive).
#[inline]
pub fn decade_floor(v: f64) -> f64 {
    10f64.powi(v.log10().floor() as i32)
}

/// Smallest power of ten not less than `v` (`v` must be positive).
#[inline]
pub fn decade_ceil(v: f64) -> f64 {
    10f64.powi(v.log10().ceil() as i32)
}
