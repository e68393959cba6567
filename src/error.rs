//! Error types shared by the loaders, the chart renderers and the driver.

use plotters::drawing::DrawingAreaErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a results table
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Table contains no rows: {0}")]
    EmptyTable(PathBuf),
}

/// Errors raised by the drawing backend while rendering a chart
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Drawing failed: {0}")]
    Drawing(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for PlotError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        PlotError::Drawing(err.to_string())
    }
}

/// Errors that can occur while generating the charts for a results table
#[derive(Error, Debug)]
pub enum VizError {
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Plot error: {0}")]
    Plot(#[from] PlotError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, VizError>;
