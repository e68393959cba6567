//! One-shot drawing surface backing a single PNG chart.

use crate::error::PlotError;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Root drawing area of a chart.
pub type Root<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// A freshly cleared canvas for exactly one chart.
///
/// The canvas is consumed by [`ChartCanvas::render`], which writes the image
/// to disk, so drawing state can never leak from one chart into the next.
pub struct ChartCanvas<'a> {
    path: &'a Path,
    root: Root<'a>,
}

impl<'a> ChartCanvas<'a> {
    /// Creates a white canvas of `size` pixels that will be saved to `path`.
    /// An existing file at `path` is overwritten when the canvas is rendered.
    pub fn new(path: &'a Path, size: (u32, u32)) -> Result<Self, PlotError> {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE)?;
        Ok(Self { path, root })
    }

    /// Runs `draw` against the canvas, then flushes the image to disk.
    pub fn render<F>(self, draw: F) -> Result<(), PlotError>
    where
        F: FnOnce(&Root<'a>) -> Result<(), PlotError>,
    {
        draw(&self.root)?;
        self.root.present()?;
        tracing::debug!(path = %self.path.display(), "wrote chart");
        Ok(())
    }
}
