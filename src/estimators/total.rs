use super::{block_average, gate, second_difference};
use crate::utils::math::mean;

/// White-FM bias correction applied to MTOTDEV.
pub const MTOTDEV_BIAS: f64 = 0.73;

/// Total deviation.
///
/// The phase series is mirrored about both endpoints
/// (`x*(-i) = 2x[0] - x[i]`, `x*(N-1+i) = 2x[N-1] - x[N-1-i]`) and the
/// centred second difference is taken at every interior point `1..N-1`.
pub fn totdev(x: &[f64], m: usize) -> f64 {
    let len = x.len();
    if m == 0 || len < 3 {
        return 0.0;
    }

    let ext = reflect_ends(x);
    let offset = len - 2;
    let last_centre = offset + len - 2;

    let mut sum = 0.0;
    let mut n = 0usize;
    if last_centre + m < ext.len() {
        for c in offset + 1..=last_centre {
            let v = second_difference(&ext, c - m, m);
            sum += v * v;
            n += 1;
        }
    }
    sum /= 2.0;

    gate(n, || (sum / n as f64).sqrt() / m as f64)
}

/// Modified total deviation, computed from phase.
pub fn mtotdev(x: &[f64], m: usize) -> f64 {
    let (total, count) = reflected_block_sum(x, m);
    gate(count, || {
        let d = total / (12 * count * m) as f64;
        (d / MTOTDEV_BIAS).sqrt() / (m * m) as f64
    })
}

/// Time total deviation, `MTOTDEV(m) * m / sqrt(3)`.
pub fn ttotdev(x: &[f64], m: usize) -> f64 {
    mtotdev(x, m) * m as f64 / 3f64.sqrt()
}

/// Hadamard total deviation, computed from frequency.
///
/// Same windowing as [`mtotdev`] without the `m²` scaling or bias correction.
pub fn htotdev(y: &[f64], m: usize) -> f64 {
    let (total, count) = reflected_block_sum(y, m);
    gate(count, || (total / (12 * count * m) as f64).sqrt())
}

/// Mirror-extends `x` to length `3N - 4` with `x[0]` at index `N - 2`.
fn reflect_ends(x: &[f64]) -> Vec<f64> {
    let len = x.len();
    let first = x[0];
    let last = x[len - 1];

    let mut ext = Vec::with_capacity(3 * len - 4);
    ext.extend((1..len - 1).rev().map(|i| 2.0 * first - x[i]));
    ext.extend_from_slice(x);
    ext.extend((1..len - 1).map(|i| 2.0 * last - x[len - 1 - i]));
    ext
}

/// For every `3m` window: detrend, reflect to `9m`, and sum the squared
/// second differences of `m`-block averages over the first `6m` offsets.
///
/// Returns the grand total and the number of windows.
fn reflected_block_sum(a: &[f64], m: usize) -> (f64, usize) {
    let span = 3 * m;
    if m == 0 || a.len() < span {
        return (0.0, 0);
    }

    let mut total = 0.0;
    let mut count = 0usize;
    for segment in a.windows(span) {
        let zx = remove_half_average_drift(segment);
        let nx = triple_reflect(&zx);

        let mut s = 0.0;
        for j in 0..6 * m {
            let d = block_average(&nx, j, m) - 2.0 * block_average(&nx, j + m, m)
                + block_average(&nx, j + 2 * m, m);
            s += d * d;
        }
        total += s;
        count += 1;
    }
    (total, count)
}

/// Subtracts the linear drift estimated from the difference between the
/// means of the first and second halves of `segment`.
fn remove_half_average_drift(segment: &[f64]) -> Vec<f64> {
    let len = segment.len();
    let half = len / 2;
    let first = mean(&segment[..half]);
    let second = mean(&segment[len - half..]);
    let slope = (second - first) / (len - half) as f64;

    segment
        .iter()
        .enumerate()
        .map(|(i, v)| v - slope * i as f64)
        .collect()
}

/// `reverse(z) ++ z ++ reverse(z)`.
fn triple_reflect(z: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(3 * z.len());
    out.extend(z.iter().rev());
    out.extend_from_slice(z);
    out.extend(z.iter().rev());
    out
}
