//! Chart renderers. Each module draws exactly one chart type to a PNG file
//! and exposes the file name it is conventionally saved under.

pub mod boxplot;
pub mod density;
pub mod mean_bar;
pub mod min_median_max;
pub mod radar;
pub mod time_series;
pub mod violin;
