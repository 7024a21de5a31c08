use anyhow::{Context, Result};
use log::debug;

use crate::analysis::AnalysisConfig;
use crate::core::{Dataset, StabilityError};
use crate::plot::SigmaTauPlot;

/// Evaluates every configured statistic across the configured sweep and
/// projects the results.
///
/// Results go through the dataset's memo table, so repeated analyses of the
/// same dataset only compute what is new. Descriptive statistics stop at the
/// first averaging factor with no complete block.
pub fn analyze(ds: &mut Dataset, config: &AnalysisConfig) -> Result<SigmaTauPlot> {
    config.validate()?;
    let bound = config.max_m.unwrap_or(ds.frequency().len());
    let factors = config.sweep.factors(bound);
    debug!(
        "{}: analyzing {} statistic(s) over {} averaging factor(s)",
        ds.id(),
        config.statistics.len(),
        factors.len()
    );

    for &stat in &config.statistics {
        for &m in &factors {
            match ds.statistic(stat, m) {
                Ok(_) => {}
                Err(StabilityError::AveragingFactorTooLarge { .. }) if !stat.is_deviation() => {
                    break;
                }
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("{}: computing {stat} at m={m}", ds.id()));
                }
            }
        }
    }

    Ok(SigmaTauPlot::from_dataset(ds, &config.statistics))
}
