use crate::utils::math::mean;

/// Mean of the block `a[i..i + m]`.
#[inline]
pub fn block_average(a: &[f64], i: usize, m: usize) -> f64 {
    mean(&a[i..i + m])
}

/// Averages of consecutive non-overlapping blocks of `m` samples, starting at
/// index 0. A trailing partial block is not included.
fn block_averages(a: &[f64], m: usize) -> Option<Vec<f64>> {
    if m == 0 || m > a.len() {
        return None;
    }
    Some(a.chunks_exact(m).map(mean).collect())
}

/// Block-averaged mean, weighted as `sum(block averages) * m / len`.
///
/// When `len` is a multiple of `m` this is the plain mean; otherwise the
/// dropped tail still counts in the denominator.
pub fn windowed_average(a: &[f64], m: usize) -> Option<f64> {
    let blocks = block_averages(a, m)?;
    Some(blocks.iter().sum::<f64>() * m as f64 / a.len() as f64)
}

pub fn windowed_max(a: &[f64], m: usize) -> Option<f64> {
    block_averages(a, m)?.into_iter().reduce(f64::max)
}

pub fn windowed_min(a: &[f64], m: usize) -> Option<f64> {
    block_averages(a, m)?.into_iter().reduce(f64::min)
}

/// Bessel-corrected standard deviation of the block averages.
///
/// Centred on the plain mean of the complete blocks, with divisor
/// `floor(len / m) - 1`. When `len % m != 0` this differs from a divisor of
/// `len / m - 1` and from centring on [`windowed_average`].
/// Returns `Some(0.0)` when only one complete block exists.
pub fn blocked_std_dev(a: &[f64], m: usize) -> Option<f64> {
    let blocks = block_averages(a, m)?;
    let k = blocks.len();
    if k < 2 {
        return Some(0.0);
    }
    let mu = mean(&blocks);
    let ss: f64 = blocks.iter().map(|b| (b - mu) * (b - mu)).sum();
    Some((ss / (k - 1) as f64).sqrt())
}
