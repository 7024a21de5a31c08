use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Every quantity a [`Dataset`](crate::core::Dataset) can compute and memoize
/// for an averaging factor `m`.
///
/// Names parse case-insensitively (`"ADEV"`, `"adev"` and `"AdEv"` are the
/// same statistic) and render in snake case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Statistic {
    Adev,
    Oadev,
    Mdev,
    Tdev,
    Hdev,
    Ohdev,
    Totdev,
    Mtotdev,
    Ttotdev,
    Htotdev,
    PhaseAverage,
    PhaseMax,
    PhaseMin,
    FrequencyAverage,
    FrequencyMax,
    FrequencyMin,
    FrequencyStdDev,
}

impl Statistic {
    /// Allan-family deviations, as opposed to windowed descriptive statistics.
    pub fn is_deviation(self) -> bool {
        matches!(
            self,
            Statistic::Adev
                | Statistic::Oadev
                | Statistic::Mdev
                | Statistic::Tdev
                | Statistic::Hdev
                | Statistic::Ohdev
                | Statistic::Totdev
                | Statistic::Mtotdev
                | Statistic::Ttotdev
                | Statistic::Htotdev
        )
    }

    /// Upper-case series label, e.g. `ADEV` or `FREQUENCY_STD_DEV`.
    pub fn label(self) -> String {
        let name: &'static str = self.into();
        name.to_ascii_uppercase()
    }
}

/// Which representation a raw sample sequence is given in.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SampleKind {
    #[default]
    Phase,
    Frequency,
}
