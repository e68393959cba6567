//! # Lab1 Benchmark Visualizer
//! Renders the charts for the array sum and inner product benchmark results.
//!
//! Each benchmark category has a `raw_data.csv` (one row per timed run) and a
//! `statistics.csv` (one row per algorithm). The raw data produces box,
//! violin, time series and density charts; the statistics produce a mean bar
//! chart, a grouped min/median/max chart and, for three or more algorithms,
//! a radar chart.

/// Entry points that turn one results table into its set of charts.
pub mod analysis;

/// Shared plotting infrastructure: canvas lifecycle, axes and colours.
pub mod common;

/// Locations of the input tables and output directories.
pub mod config;

/// Typed records of the two result tables, and how they are loaded and grouped.
pub mod data;

pub mod driver;
pub mod error;

/// One module per chart type.
pub mod plots;

pub mod utilities {
    /// Gaussian kernel density estimation for the violin and density charts.
    pub mod kde;

    /// Quartiles and whiskers for the box plot.
    pub mod quantiles;
}

pub use analysis::{plot_raw_data, plot_statistics};
pub use config::VizConfig;
pub use error::{DataError, PlotError, VizError};
