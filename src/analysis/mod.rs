//! Chart generation for the two benchmark result tables.

pub mod raw_data;
pub mod statistics;

pub use raw_data::plot_raw_data;
pub use statistics::plot_statistics;
