use std::str::FromStr;

use log::trace;
use serde::Serialize;

use crate::core::{Dataset, StabilityError, Statistic};
use crate::utils::math::{decade_ceil, decade_floor};

/// One labelled curve of `(tau, value)` points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// `[1, 10]`, used when an axis has nothing positive to show.
    pub const UNIT_DECADE: AxisRange = AxisRange { min: 1.0, max: 10.0 };

    /// Decade-aligned range covering every positive value, or `None`.
    fn log_decades<I: IntoIterator<Item = f64>>(values: I) -> Option<AxisRange> {
        let (lo, hi) = values
            .into_iter()
            .filter(|v| v.is_finite() && *v > 0.0)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if lo > hi {
            return None;
        }
        Some(AxisRange {
            min: decade_floor(lo),
            max: decade_ceil(hi),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRanges {
    pub x: AxisRange,
    pub y: AxisRange,
}

/// Read-only projection of a dataset's memo table, ready for a log-log
/// sigma-tau chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigmaTauPlot {
    pub series: Vec<Series>,
    pub axis_ranges: AxisRanges,
}

impl SigmaTauPlot {
    pub fn from_dataset(ds: &Dataset, stats: &[Statistic]) -> Self {
        let series: Vec<Series> = stats
            .iter()
            .map(|&stat| {
                let points: Vec<(f64, f64)> = plot_points(ds, stat).collect();
                trace!("{}: {} series with {} points", ds.id(), stat, points.len());
                Series {
                    label: stat.label(),
                    points,
                }
            })
            .collect();

        let all = || series.iter().flat_map(|s| s.points.iter().copied());
        let axis_ranges = AxisRanges {
            x: AxisRange::log_decades(all().map(|(t, _)| t)).unwrap_or(AxisRange::UNIT_DECADE),
            y: AxisRange::log_decades(all().map(|(_, v)| v)).unwrap_or(AxisRange::UNIT_DECADE),
        };

        Self {
            series,
            axis_ranges,
        }
    }

    pub fn series(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.label.eq_ignore_ascii_case(label))
    }
}

/// Lazily yields `(tau, value)` for every memoized value of `stat`, in
/// increasing `m`, skipping zero and non-finite values.
pub fn plot_points(ds: &Dataset, stat: Statistic) -> impl Iterator<Item = (f64, f64)> + '_ {
    ds.cached_series(stat)
        .into_iter()
        .filter(|(_, v)| v.is_finite() && *v != 0.0)
        .map(move |(m, v)| (ds.tau(m), v))
}

impl Dataset {
    /// Builds a [`SigmaTauPlot`] for the named statistics (case-insensitive)
    /// from whatever has already been computed.
    pub fn sigma_tau_plot<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<SigmaTauPlot, StabilityError> {
        let stats = names
            .iter()
            .map(|n| {
                let n = n.as_ref();
                Statistic::from_str(n.trim())
                    .map_err(|_| StabilityError::UnknownStatistic(n.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SigmaTauPlot::from_dataset(self, &stats))
    }
}
