mod export;
mod sigma_tau;

pub use export::PlotFormat;
pub use sigma_tau::{AxisRange, AxisRanges, Series, SigmaTauPlot, plot_points};
