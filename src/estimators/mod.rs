//! Pure estimator kernels over sample slices.
//!
//! Every kernel takes the averaging factor `m` in units of the base sampling
//! interval. Deviation kernels return `0.0` when `MIN_SAMPLES` or fewer
//! accumulation terms are available, and for `m == 0`.

mod classical;
mod total;
mod windowed;

pub use classical::{adev, hdev, mdev, oadev, ohdev, tdev};
pub use total::{MTOTDEV_BIAS, htotdev, mtotdev, totdev, ttotdev};
pub use windowed::{block_average, blocked_std_dev, windowed_average, windowed_max, windowed_min};

/// A deviation needs strictly more accumulation terms than this.
pub const MIN_SAMPLES: usize = 3;

#[inline]
fn gate(n: usize, f: impl FnOnce() -> f64) -> f64 {
    if n > MIN_SAMPLES { f() } else { 0.0 }
}

#[inline]
fn second_difference(x: &[f64], i: usize, m: usize) -> f64 {
    x[i + 2 * m] - 2.0 * x[i + m] + x[i]
}

#[inline]
fn third_difference(x: &[f64], i: usize, m: usize) -> f64 {
    x[i + 3 * m] - 3.0 * x[i + 2 * m] + 3.0 * x[i + m] - x[i]
}
