/// Differentiates a phase (time-error) series into fractional frequency.
///
/// `y[i] = (x[i + 1] - x[i]) / tau0`, so the result is one sample shorter than
/// the input. Inputs with fewer than two samples yield an empty series.
pub fn phase_to_freq(x: &[f64], tau0: f64) -> Vec<f64> {
    x.windows(2).map(|w| (w[1] - w[0]) / tau0).collect()
}

/// Integrates a fractional frequency series into phase, anchored at zero.
///
/// `x[0] = 0` and `x[i] = x[i - 1] + y[i - 1] * tau0`; the result is one
/// sample longer than the input.
pub fn freq_to_phase(y: &[f64], tau0: f64) -> Vec<f64> {
    let mut x = Vec::with_capacity(y.len() + 1);
    let mut acc = 0.0;
    x.push(acc);
    for &v in y {
        acc += v * tau0;
        x.push(acc);
    }
    x
}
