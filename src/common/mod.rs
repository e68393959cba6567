//! Plotting infrastructure shared by all chart renderers.

pub mod axis;
pub mod canvas;
pub mod palette;

pub use canvas::{ChartCanvas, Root};
