use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};

use crate::analysis::TauSweep;
use crate::core::{Dataset, SampleKind, Statistic};

fn default_tau0() -> f64 {
    1.0
}

fn default_statistics() -> Vec<Statistic> {
    vec![
        Statistic::Adev,
        Statistic::Oadev,
        Statistic::Mdev,
        Statistic::Hdev,
    ]
}

/// Settings for a batch stability analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisConfig {
    #[serde(default)]
    #[schemars(
        title = "Input",
        description = "Whether samples are phase (time error) or fractional frequency"
    )]
    pub input: SampleKind,

    #[serde(default = "default_tau0")]
    #[schemars(
        title = "Tau0",
        description = "Base sampling interval, in the time unit of the samples",
        range(min = 0.0)
    )]
    pub tau0: f64,

    #[serde(default = "default_statistics")]
    #[schemars(title = "Statistics", description = "Statistics to evaluate")]
    pub statistics: Vec<Statistic>,

    #[serde(default)]
    #[schemars(title = "Sweep", description = "Averaging factors to evaluate")]
    pub sweep: TauSweep,

    #[serde(default)]
    #[schemars(
        title = "Max m",
        description = "Largest averaging factor; defaults to the frequency sample count",
        range(min = 1)
    )]
    pub max_m: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input: SampleKind::default(),
            tau0: default_tau0(),
            statistics: default_statistics(),
            sweep: TauSweep::default(),
            max_m: None,
        }
    }
}

impl AnalysisConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s).context("invalid analysis config JSON")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("loading config {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.tau0.is_finite() || self.tau0 <= 0.0 {
            bail!("tau0 must be finite and > 0, got {}", self.tau0);
        }
        if self.statistics.is_empty() {
            bail!("at least one statistic must be selected");
        }
        if self.max_m == Some(0) {
            bail!("max_m must be >= 1");
        }
        Ok(())
    }

    /// New dataset with this config's `tau0`, loaded with `samples` as `input`.
    pub fn dataset<I: Into<String>>(&self, id: I, samples: Vec<f64>) -> Result<Dataset> {
        let mut ds = Dataset::with_tau0(id, self.tau0)?;
        ds.load(self.input, samples);
        Ok(ds)
    }
}

/// JSON schema describing [`AnalysisConfig`].
pub fn config_schema() -> Schema {
    schema_for!(AnalysisConfig)
}
