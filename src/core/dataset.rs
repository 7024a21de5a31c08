use std::collections::HashMap;

use log::debug;

use crate::core::conversion::{freq_to_phase, phase_to_freq};
use crate::core::error::StabilityError;
use crate::core::statistic::{SampleKind, Statistic};
use crate::estimators;

/// Hands out default dataset identifiers (`dataset-1`, `dataset-2`, ...).
///
/// Owned by whoever creates datasets; there is no process-wide counter.
#[derive(Debug, Clone)]
pub struct DatasetIds {
    prefix: String,
    next: u64,
}

impl DatasetIds {
    pub fn new<P: Into<String>>(prefix: P) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

impl Default for DatasetIds {
    fn default() -> Self {
        Self::new("dataset")
    }
}

/// A loaded phase/frequency series plus the memo table of every statistic
/// computed from it.
///
/// Sample arrays only change through the `load_*` methods, which always clear
/// the memo table. Not meant to be shared between threads.
#[derive(Debug, Clone)]
pub struct Dataset {
    id: String,
    tau0: f64,
    phase: Vec<f64>,
    frequency: Vec<f64>,
    cache: HashMap<(Statistic, usize), f64>,
}

impl Dataset {
    /// Empty dataset with a unit base interval.
    pub fn new<I: Into<String>>(id: I) -> Self {
        Self {
            id: id.into(),
            tau0: 1.0,
            phase: Vec::new(),
            frequency: Vec::new(),
            cache: HashMap::new(),
        }
    }

    /// Empty dataset sampled every `tau0` time units.
    pub fn with_tau0<I: Into<String>>(id: I, tau0: f64) -> Result<Self, StabilityError> {
        if !tau0.is_finite() || tau0 <= 0.0 {
            return Err(StabilityError::InvalidTau0(tau0));
        }
        let mut ds = Self::new(id);
        ds.tau0 = tau0;
        Ok(ds)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tau0(&self) -> f64 {
        self.tau0
    }

    pub fn phase(&self) -> &[f64] {
        &self.phase
    }

    pub fn frequency(&self) -> &[f64] {
        &self.frequency
    }

    pub fn is_loaded(&self) -> bool {
        !self.phase.is_empty()
    }

    /// Stores phase samples and derives frequency from them.
    pub fn load_phase(&mut self, x: Vec<f64>) {
        self.frequency = phase_to_freq(&x, self.tau0);
        self.phase = x;
        self.reset_cache();
    }

    /// Stores frequency samples and integrates phase from them (`phase[0] = 0`).
    pub fn load_frequency(&mut self, y: Vec<f64>) {
        self.phase = freq_to_phase(&y, self.tau0);
        self.frequency = y;
        self.reset_cache();
    }

    pub fn load(&mut self, kind: SampleKind, samples: Vec<f64>) {
        match kind {
            SampleKind::Phase => self.load_phase(samples),
            SampleKind::Frequency => self.load_frequency(samples),
        }
    }

    fn reset_cache(&mut self) {
        if !self.cache.is_empty() {
            debug!("{}: reload drops {} cached results", self.id, self.cache.len());
        }
        self.cache.clear();
        debug!(
            "{}: loaded {} phase / {} frequency samples",
            self.id,
            self.phase.len(),
            self.frequency.len()
        );
    }

    /// Returns `stat` at averaging factor `m`, computing and memoizing it on
    /// first request.
    ///
    /// Deviations report `0.0` when too few terms are available; that value
    /// is memoized like any other.
    pub fn statistic(&mut self, stat: Statistic, m: usize) -> Result<f64, StabilityError> {
        if let Some(&v) = self.cache.get(&(stat, m)) {
            return Ok(v);
        }
        let value = match stat {
            Statistic::Tdev => self.statistic(Statistic::Mdev, m)? * self.tau(m) / 3f64.sqrt(),
            Statistic::Ttotdev => {
                self.statistic(Statistic::Mtotdev, m)? * self.tau(m) / 3f64.sqrt()
            }
            _ => self.compute(stat, m)?,
        };
        debug!("{}: {stat}(m={m}) = {value}", self.id);
        self.cache.insert((stat, m), value);
        Ok(value)
    }

    /// Computes `stat` straight from the sample arrays, ignoring and not
    /// touching the memo table.
    pub fn compute(&self, stat: Statistic, m: usize) -> Result<f64, StabilityError> {
        if !self.is_loaded() {
            return Err(StabilityError::EmptyDataset);
        }
        if m == 0 {
            return Err(StabilityError::InvalidAveragingFactor(m));
        }

        let x = &self.phase;
        let y = &self.frequency;
        let per_tau0 = |v: f64| v / self.tau0;
        let blocks = |r: Option<f64>, len: usize| {
            r.ok_or(StabilityError::AveragingFactorTooLarge { m, len })
        };

        let value = match stat {
            Statistic::Adev => per_tau0(estimators::adev(x, m)),
            Statistic::Oadev => per_tau0(estimators::oadev(x, m)),
            Statistic::Mdev => per_tau0(estimators::mdev(x, m)),
            Statistic::Tdev => self.compute(Statistic::Mdev, m)? * self.tau(m) / 3f64.sqrt(),
            Statistic::Hdev => per_tau0(estimators::hdev(x, m)),
            Statistic::Ohdev => per_tau0(estimators::ohdev(x, m)),
            Statistic::Totdev => per_tau0(estimators::totdev(x, m)),
            Statistic::Mtotdev => per_tau0(estimators::mtotdev(x, m)),
            Statistic::Ttotdev => {
                self.compute(Statistic::Mtotdev, m)? * self.tau(m) / 3f64.sqrt()
            }
            Statistic::Htotdev => estimators::htotdev(y, m),
            Statistic::PhaseAverage => blocks(estimators::windowed_average(x, m), x.len())?,
            Statistic::PhaseMax => blocks(estimators::windowed_max(x, m), x.len())?,
            Statistic::PhaseMin => blocks(estimators::windowed_min(x, m), x.len())?,
            Statistic::FrequencyAverage => blocks(estimators::windowed_average(y, m), y.len())?,
            Statistic::FrequencyMax => blocks(estimators::windowed_max(y, m), y.len())?,
            Statistic::FrequencyMin => blocks(estimators::windowed_min(y, m), y.len())?,
            Statistic::FrequencyStdDev => blocks(estimators::blocked_std_dev(y, m), y.len())?,
        };
        Ok(value)
    }

    /// Memoized value, if `stat` has already been computed at `m`.
    pub fn cached(&self, stat: Statistic, m: usize) -> Option<f64> {
        self.cache.get(&(stat, m)).copied()
    }

    /// Every memoized `(m, value)` for `stat`, ordered by `m`.
    pub fn cached_series(&self, stat: Statistic) -> Vec<(usize, f64)> {
        let mut out: Vec<(usize, f64)> = self
            .cache
            .iter()
            .filter(|((s, _), _)| *s == stat)
            .map(|((_, m), v)| (*m, *v))
            .collect();
        out.sort_unstable_by_key(|(m, _)| *m);
        out
    }

    /// Averaging time for factor `m`.
    #[inline]
    pub fn tau(&self, m: usize) -> f64 {
        m as f64 * self.tau0
    }

    pub fn adev(&mut self, m: usize) -> Result<f64, StabilityError> {
        self.statistic(Statistic::Adev, m)
    }

    pub fn oadev(&mut self, m: usize) -> Result<f64, StabilityError> {
        self.statistic(Statistic::Oadev, m)
    }

    pub fn mdev(&mut self, m: usize) -> Result<f64, StabilityError> {
        self.statistic(Statistic::Mdev, m)
    }

    pub fn tdev(&mut self, m: usize) -> Result<f64, StabilityError> {
        self.statistic(Statistic::Tdev, m)
    }

    pub fn hdev(&mut self, m: usize) -> Result<f64, StabilityError> {
        self.statistic(Statistic::Hdev, m)
    }

    pub fn ohdev(&mut self, m: usize) -> Result<f64, StabilityError> {
        self.statistic(Statistic::Ohdev, m)
    }

    pub fn totdev(&mut self, m: usize) -> Result<f64, StabilityError> {
        self.statistic(Statistic::Totdev, m)
    }

    pub fn mtotdev(&mut self, m: usize) -> Result<f64, StabilityError> {
        self.statistic(Statistic::Mtotdev, m)
    }

    pub fn ttotdev(&mut self, m: usize) -> Result<f64, StabilityError> {
        self.statistic(Statistic::Ttotdev, m)
    }

    pub fn htotdev(&mut self, m: usize) -> Result<f64, StabilityError> {
        self.statistic(Statistic::Htotdev, m)
    }

    pub fn phase_average(&mut self, m: usize) -> Result<f64, StabilityError> {
        self.statistic(Statistic::PhaseAverage, m)
    }

    pub fn phase_max(&mut self, m: usize) -> Result<f64, StabilityError> {
        self.statistic(Statistic::PhaseMax, m)
    }

    pub fn phase_min(&mut self, m: usize) -> Result<f64, StabilityError> {
        self.statistic(Statistic::PhaseMin, m)
    }

    pub fn frequency_average(&mut self, m: usize) -> Result<f64, StabilityError> {
        self.statistic(Statistic::FrequencyAverage, m)
    }

    pub fn frequency_max(&mut self, m: usize) -> Result<f64, StabilityError> {
        self.statistic(Statistic::FrequencyMax, m)
    }

    pub fn frequency_min(&mut self, m: usize) -> Result<f64, StabilityError> {
        self.statistic(Statistic::FrequencyMin, m)
    }

    pub fn frequency_std_dev(&mut self, m: usize) -> Result<f64, StabilityError> {
        self.statistic(Statistic::FrequencyStdDev, m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::{LINEAR_RAMP, REFERENCE_FREQUENCY, reference_phase};
    use strum::IntoEnumIterator;

    const EPS: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn reference_dataset() -> Dataset {
        let mut ds = Dataset::new("nbs");
        ds.load_frequency(REFERENCE_FREQUENCY.to_vec());
        ds
    }

    #[test]
    fn ids_are_sequential_per_generator() {
        let mut ids = DatasetIds::default();
        assert_eq!(ids.next_id(), "dataset-1");
        assert_eq!(ids.next_id(), "dataset-2");

        let mut other = DatasetIds::new("clock");
        assert_eq!(other.next_id(), "clock-1");
        assert_eq!(ids.next_id(), "dataset-3");
    }

    #[test]
    fn invalid_tau0_is_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Dataset::with_tau0("x", bad),
                Err(StabilityError::InvalidTau0(_))
            ));
        }
        assert_eq!(Dataset::with_tau0("x", 0.5).unwrap().tau0(), 0.5);
    }

    #[test]
    fn load_frequency_integrates_phase() {
        let ds = reference_dataset();
        assert_eq!(ds.frequency().len(), 9);
        assert_eq!(ds.phase().len(), 10);
        assert_eq!(ds.phase()[0], 0.0);
        assert_eq!(ds.phase()[1], 892.0);
    }

    #[test]
    fn load_phase_derives_frequency() {
        let mut ds = Dataset::new("ramp");
        ds.load_phase(LINEAR_RAMP.to_vec());
        assert_eq!(ds.phase().len(), 6);
        assert_eq!(ds.frequency(), &[1.0; 5]);
    }

    #[test]
    fn empty_dataset_and_zero_m_are_errors() {
        let mut ds = Dataset::new("empty");
        assert!(!ds.is_loaded());
        assert!(matches!(ds.adev(1), Err(StabilityError::EmptyDataset)));
        assert!(matches!(ds.tdev(1), Err(StabilityError::EmptyDataset)));

        let mut ds = reference_dataset();
        assert!(matches!(
            ds.adev(0),
            Err(StabilityError::InvalidAveragingFactor(0))
        ));
        assert!(ds.cached(Statistic::Adev, 0).is_none());
    }

    #[test]
    fn reference_values_through_the_dataset() {
        let mut ds = reference_dataset();
        assert!(approx_eq(ds.adev(1).unwrap(), 91.229_449_740_749_83, EPS));
        assert!(approx_eq(ds.adev(2).unwrap(), 85.952_869_837_681, EPS));
        assert_eq!(ds.adev(4).unwrap(), 0.0);
        assert!(approx_eq(ds.hdev(1).unwrap(), 70.806_073_185_850_38, EPS));
        assert!(approx_eq(ds.hdev(2).unwrap(), 85.614_871_663_747_76, EPS));
        assert_eq!(ds.hdev(4).unwrap(), 0.0);
        assert!(approx_eq(ds.mdev(2).unwrap(), 74.788_493_433_147_86, EPS));
        assert!(approx_eq(ds.totdev(2).unwrap(), 93.903_790_525_196_58, EPS));
        assert!(approx_eq(ds.htotdev(1).unwrap(), 86.719_374_997_747_76, EPS));
    }

    #[test]
    fn repeated_queries_hit_the_cache_and_match_recomputation() {
        for tau0 in [1.0, 2.0, 0.3] {
            let mut ds = Dataset::with_tau0("nbs", tau0).unwrap();
            ds.load_phase(reference_phase());
            for stat in Statistic::iter() {
                for m in 1..=3 {
                    assert!(ds.cached(stat, m).is_none());
                    let first = ds.statistic(stat, m).unwrap();
                    assert_eq!(ds.cached(stat, m), Some(first));
                    let second = ds.statistic(stat, m).unwrap();
                    assert_eq!(first.to_bits(), second.to_bits());
                    let direct = ds.compute(stat, m).unwrap();
                    assert_eq!(
                        direct.to_bits(),
                        first.to_bits(),
                        "tau0={tau0} {stat}(m={m}): cached={first} direct={direct}"
                    );
                }
            }
        }
    }

    #[test]
    fn time_deviations_do_not_depend_on_tau0() {
        let x = reference_phase();
        let mut ds = Dataset::with_tau0("slow", 2.0).unwrap();
        ds.load_phase(x.clone());
        for m in 1..=2 {
            let direct = ds.compute(Statistic::Tdev, m).unwrap();
            assert!(approx_eq(direct, estimators::tdev(&x, m), EPS), "m={m} {direct}");
            let direct = ds.compute(Statistic::Ttotdev, m).unwrap();
            assert!(approx_eq(direct, estimators::ttotdev(&x, m), EPS), "m={m} {direct}");
        }
    }

    #[test]
    fn tdev_and_ttotdev_follow_their_definitions() {
        let mut ds = reference_dataset();
        for m in 1..=4 {
            let mdev = ds.mdev(m).unwrap();
            assert_eq!(ds.tdev(m).unwrap(), mdev * m as f64 / 3f64.sqrt());
            let mtot = ds.mtotdev(m).unwrap();
            assert_eq!(ds.ttotdev(m).unwrap(), mtot * m as f64 / 3f64.sqrt());
        }
    }

    #[test]
    fn reload_clears_the_cache() {
        let mut ds = reference_dataset();
        let before = ds.adev(1).unwrap();
        assert!(before > 0.0);

        ds.load_phase(LINEAR_RAMP.to_vec());
        assert!(ds.cached(Statistic::Adev, 1).is_none());
        assert_eq!(ds.adev(1).unwrap(), 0.0);
    }

    #[test]
    fn descriptive_stats_reject_oversized_m() {
        let mut ds = reference_dataset();
        assert!(approx_eq(ds.frequency_average(1).unwrap(), 7100.0 / 9.0, EPS));
        assert_eq!(ds.frequency_max(2).unwrap(), 893.0);
        assert_eq!(ds.frequency_min(4).unwrap(), 775.25);
        assert_eq!(ds.phase_max(1).unwrap(), 7100.0);
        assert_eq!(ds.phase_min(1).unwrap(), 0.0);
        assert!(approx_eq(ds.phase_average(1).unwrap(), 3611.2, EPS));
        assert!(approx_eq(ds.frequency_std_dev(1).unwrap(), 100.977_032_592_125_18, EPS));

        assert!(matches!(
            ds.frequency_average(10),
            Err(StabilityError::AveragingFactorTooLarge { m: 10, len: 9 })
        ));
        assert!(matches!(
            ds.phase_max(11),
            Err(StabilityError::AveragingFactorTooLarge { m: 11, len: 10 })
        ));
        // Deviations degrade to the zero sentinel instead.
        assert_eq!(ds.adev(50).unwrap(), 0.0);
    }

    #[test]
    fn datasets_own_their_samples() {
        let mut a = Dataset::new("a");
        let b = Dataset::new("b");
        a.load_frequency(vec![1.0, 2.0]);
        assert!(a.is_loaded());
        assert!(!b.is_loaded());
        assert!(b.phase().is_empty());
    }

    #[test]
    fn tau0_scales_phase_deviations() {
        let x = reference_phase();
        let mut unit = Dataset::new("unit");
        unit.load_phase(x.clone());
        let mut slow = Dataset::with_tau0("slow", 2.0).unwrap();
        slow.load_phase(x);

        for m in 1..=3 {
            assert!(approx_eq(slow.adev(m).unwrap(), unit.adev(m).unwrap() / 2.0, EPS));
            assert!(approx_eq(slow.tdev(m).unwrap(), unit.tdev(m).unwrap(), EPS));
            assert_eq!(slow.tau(m), 2.0 * m as f64);
        }
        assert_eq!(slow.frequency()[0], 446.0);
    }

    #[test]
    fn cached_series_is_ordered_by_m() {
        let mut ds = reference_dataset();
        for m in [3, 1, 2] {
            ds.adev(m).unwrap();
        }
        ds.hdev(1).unwrap();
        let series = ds.cached_series(Statistic::Adev);
        let ms: Vec<usize> = series.iter().map(|(m, _)| *m).collect();
        assert_eq!(ms, vec![1, 2, 3]);
    }
}
