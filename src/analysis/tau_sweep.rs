use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which averaging factors an analysis evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TauSweep {
    /// Every `m` from 1 to the bound.
    All,
    /// 1, 2, 4, 8, ...
    #[default]
    Octave,
    /// 1, 10, 100, ...
    Decade,
    /// 1, 2, 5, 10, 20, 50, ...
    Decade125,
    /// 1, 2, 4, 10, 20, 40, ...
    Decade124,
    /// 1, 2, ..., 9, 10, 20, ..., 90, 100, ...
    DecadeDeci,
    /// A single averaging factor.
    Single(usize),
}

impl TauSweep {
    /// Averaging factors in `1..=max`, ascending.
    pub fn factors(self, max: usize) -> Vec<usize> {
        match self {
            TauSweep::All => (1..=max).collect(),
            TauSweep::Octave => std::iter::successors(Some(1usize), |m| m.checked_mul(2))
                .take_while(|&m| m <= max)
                .collect(),
            TauSweep::Decade => decades(max, &[1]),
            TauSweep::Decade125 => decades(max, &[1, 2, 5]),
            TauSweep::Decade124 => decades(max, &[1, 2, 4]),
            TauSweep::DecadeDeci => decades(max, &[1, 2, 3, 4, 5, 6, 7, 8, 9]),
            TauSweep::Single(m) if m >= 1 && m <= max => vec![m],
            TauSweep::Single(_) => Vec::new(),
        }
    }
}

/// `steps` (ascending, all below 10) repeated at every power of ten up to `max`.
fn decades(max: usize, steps: &[usize]) -> Vec<usize> {
    let mut out = Vec::new();
    let mut scale = 1usize;
    loop {
        for &s in steps {
            match s.checked_mul(scale) {
                Some(m) if m <= max => out.push(m),
                _ => return out,
            }
        }
        scale = match scale.checked_mul(10) {
            Some(next) => next,
            None => return out,
        };
    }
}
