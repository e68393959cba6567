//! Typed rows of the two benchmark result tables.
//!
//! Both tables are produced by the benchmark harness; columns are matched by
//! header name so the order they appear in the file does not matter.

pub mod grouping;
pub mod loading;

use serde::Deserialize;

/// One measured execution of an algorithm (a row of `raw_data.csv`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Algorithm")]
    pub algorithm: String,

    /// 1-based position of this run within the algorithm's series.
    #[serde(rename = "TestNumber")]
    pub test_number: u32,

    #[serde(rename = "Duration(us)")]
    pub duration_us: f64,
}

/// Precomputed summary of one algorithm (a row of `statistics.csv`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatisticsRecord {
    #[serde(rename = "Algorithm")]
    pub algorithm: String,

    #[serde(rename = "Mean(us)")]
    pub mean_us: f64,

    #[serde(rename = "StdDev(us)")]
    pub stddev_us: f64,

    #[serde(rename = "Min(us)")]
    pub min_us: f64,

    #[serde(rename = "Median(us)")]
    pub median_us: f64,

    #[serde(rename = "Max(us)")]
    pub max_us: f64,

    /// Number of runs the summary was computed from, when the harness wrote it.
    #[serde(rename = "Samples", default)]
    pub samples: Option<u32>,
}
