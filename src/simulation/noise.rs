use std::io::{Error, ErrorKind};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Power-law noise types that can be synthesized as phase samples.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum NoiseKind {
    /// Independent Gaussian phase samples.
    WhitePhase,
    /// Phase is the running sum of Gaussian frequency samples.
    WhiteFrequency,
    /// Frequency itself is a random walk.
    RandomWalkFrequency,
}

/// Seeded generator of simulated clock phase data.
#[derive(Debug)]
pub struct NoiseGenerator {
    seed: u64,
    rng: StdRng,
    kind: NoiseKind,
    amplitude: f64,
    phase: f64,
    frequency: f64,
}

impl NoiseGenerator {
    pub fn new(kind: NoiseKind, amplitude: f64, seed: u64) -> Result<Self, Error> {
        if !amplitude.is_finite() || amplitude < 0.0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Amplitude must be finite and >= 0",
            ));
        }
        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            kind,
            amplitude,
            phase: 0.0,
            frequency: 0.0,
        })
    }

    pub fn kind(&self) -> NoiseKind {
        self.kind
    }

    pub fn next_phase(&mut self) -> f64 {
        let e = self.amplitude * self.rng.sample::<f64, _>(StandardNormal);
        match self.kind {
            NoiseKind::WhitePhase => e,
            NoiseKind::WhiteFrequency => {
                self.phase += e;
                self.phase
            }
            NoiseKind::RandomWalkFrequency => {
                self.frequency += e;
                self.phase += self.frequency;
                self.phase
            }
        }
    }

    /// Next `n` phase samples.
    pub fn phase_samples(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.next_phase()).collect()
    }

    pub fn restart(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.phase = 0.0;
        self.frequency = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dataset;
    use crate::estimators::{adev, mdev};

    #[test]
    fn restart_resets_sequence_with_same_seed() {
        let mut generator = NoiseGenerator::new(NoiseKind::WhiteFrequency, 1.0, 12345).unwrap();
        let first = generator.phase_samples(64);
        generator.restart();
        let second = generator.phase_samples(64);
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_differ() {
        let a = NoiseGenerator::new(NoiseKind::WhitePhase, 1.0, 1)
            .unwrap()
            .phase_samples(16);
        let b = NoiseGenerator::new(NoiseKind::WhitePhase, 1.0, 2)
            .unwrap()
            .phase_samples(16);
        assert_ne!(a, b);
    }

    #[test]
    fn invalid_amplitude_is_rejected() {
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let err = NoiseGenerator::new(NoiseKind::WhitePhase, bad, 1).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn zero_amplitude_is_silent() {
        let mut generator = NoiseGenerator::new(NoiseKind::RandomWalkFrequency, 0.0, 7).unwrap();
        assert!(generator.phase_samples(10).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn white_phase_sample_spread_matches_amplitude() {
        let mut generator = NoiseGenerator::new(NoiseKind::WhitePhase, 2.0, 2025).unwrap();
        let x = generator.phase_samples(20_000);
        let mu = x.iter().sum::<f64>() / x.len() as f64;
        let var = x.iter().map(|v| (v - mu) * (v - mu)).sum::<f64>() / (x.len() - 1) as f64;
        assert!(mu.abs() < 0.1, "mean={mu}");
        assert!((var.sqrt() - 2.0).abs() < 0.1, "sd={}", var.sqrt());
    }

    #[test]
    fn white_frequency_adev_falls_as_inverse_sqrt_tau() {
        let mut generator = NoiseGenerator::new(NoiseKind::WhiteFrequency, 1.0, 42).unwrap();
        let x = generator.phase_samples(20_000);
        let ratio = adev(&x, 16) / adev(&x, 1);
        // expected 1 / sqrt(16)
        assert!((ratio - 0.25).abs() < 0.05, "ratio={ratio}");
    }

    #[test]
    fn white_phase_mdev_falls_faster_than_white_frequency() {
        let wpm = NoiseGenerator::new(NoiseKind::WhitePhase, 1.0, 3)
            .unwrap()
            .phase_samples(8_192);
        let wfm = NoiseGenerator::new(NoiseKind::WhiteFrequency, 1.0, 3)
            .unwrap()
            .phase_samples(8_192);
        let slope = |x: &[f64]| (mdev(x, 8) / mdev(x, 1)).log2() / 3.0;
        // about -1.5 for white PM and -0.5 for white FM
        assert!(slope(&wpm) < -1.2, "wpm slope={}", slope(&wpm));
        assert!(slope(&wfm) > -0.8, "wfm slope={}", slope(&wfm));
    }

    #[test]
    fn generated_samples_load_into_a_dataset() {
        let mut generator = NoiseGenerator::new(NoiseKind::WhiteFrequency, 1e-9, 9).unwrap();
        let mut ds = Dataset::new("sim");
        ds.load_phase(generator.phase_samples(256));
        assert_eq!(ds.frequency().len(), 255);
        assert!(ds.adev(1).unwrap() > 0.0);
        assert!(ds.totdev(4).unwrap() > 0.0);
    }
}
