use super::{gate, second_difference, third_difference};

/// Allan deviation from phase, advancing the window one sample at a time.
pub fn adev(x: &[f64], m: usize) -> f64 {
    second_difference_dev(x, m, 1)
}

/// Allan deviation from phase, advancing the window by `m` samples.
///
/// The stepping is swapped relative to the usual ADEV/OADEV naming; both
/// routines keep the stepping that existing result sets were produced with.
pub fn oadev(x: &[f64], m: usize) -> f64 {
    second_difference_dev(x, m, m)
}

/// Hadamard deviation from phase, advancing one sample at a time.
pub fn hdev(x: &[f64], m: usize) -> f64 {
    third_difference_dev(x, m, 1)
}

/// Hadamard deviation from phase, advancing by `m` samples.
pub fn ohdev(x: &[f64], m: usize) -> f64 {
    third_difference_dev(x, m, m)
}

/// Modified Allan deviation.
///
/// Keeps a running sum `v` of `m` consecutive second differences. Sliding the
/// sum by one sample adds exactly one third difference, so every window costs
/// O(1) after the first.
pub fn mdev(x: &[f64], m: usize) -> f64 {
    let len = x.len();
    if m == 0 || len < 3 * m + 1 {
        return 0.0;
    }

    let mut v: f64 = (0..m).map(|i| second_difference(x, i, m)).sum();
    let mut sum = v * v;
    let mut n = 1usize;

    for i in 0..len - 3 * m {
        v += third_difference(x, i, m);
        sum += v * v;
        n += 1;
    }

    let mf = m as f64;
    gate(n, || (sum / (2.0 * mf * mf * n as f64)).sqrt() / mf)
}

/// Time deviation, `MDEV(m) * m / sqrt(3)`.
pub fn tdev(x: &[f64], m: usize) -> f64 {
    mdev(x, m) * m as f64 / 3f64.sqrt()
}

fn second_difference_dev(x: &[f64], m: usize, step: usize) -> f64 {
    if m == 0 || x.len() <= 2 * m {
        return 0.0;
    }
    let (sum, n) = (0..x.len() - 2 * m)
        .step_by(step)
        .map(|i| second_difference(x, i, m))
        .fold((0.0, 0usize), |(s, n), v| (s + v * v, n + 1));

    gate(n, || (sum / (2.0 * n as f64)).sqrt() / m as f64)
}

fn third_difference_dev(x: &[f64], m: usize, step: usize) -> f64 {
    if m == 0 || x.len() <= 3 * m {
        return 0.0;
    }
    let (sum, n) = (0..x.len() - 3 * m)
        .step_by(step)
        .map(|i| third_difference(x, i, m))
        .fold((0.0, 0usize), |(s, n), v| (s + v * v, n + 1));

    gate(n, || (sum / (6.0 * n as f64)).sqrt() / m as f64)
}
