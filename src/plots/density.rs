//! Kernel density estimate of run durations, one curve per algorithm.

use crate::common::axis::{bounds, padded_range, FONT, TITLE_SIZE};
use crate::common::palette::series_color;
use crate::common::ChartCanvas;
use crate::data::grouping::AlgorithmSeries;
use crate::error::PlotError;
use crate::utilities::kde::{estimate_density, DensityCurve};
use plotters::prelude::*;
use std::path::Path;

pub const FILE_NAME: &str = "density.png";

const SIZE: (u32, u32) = (1000, 600);
const TITLE: &str = "Execution Time Density Estimation";

/// Bandwidths the curve is extended past the extreme samples.
const CUT: f64 = 3.0;

/// Estimates a curve for every series that has one. Series with fewer than
/// two runs or identical durations are skipped.
fn density_curves<'a>(series: &'a [AlgorithmSeries<'a>]) -> Vec<(usize, &'a str, DensityCurve)> {
    series
        .iter()
        .enumerate()
        .filter_map(|(index, s)| match estimate_density(&s.durations(), CUT) {
            Some(curve) => Some((index, s.name, curve)),
            None => {
                tracing::warn!(
                    algorithm = s.name,
                    runs = s.records.len(),
                    "no variance in durations, skipping density estimate"
                );
                None
            }
        })
        .collect()
}

pub fn draw_density(series: &[AlgorithmSeries<'_>], path: &Path) -> Result<(), PlotError> {
    let curves = density_curves(series);

    let (x_min, x_max) = bounds(curves.iter().flat_map(|(_, _, c)| {
        let (lo, hi) = c.support();
        [lo, hi]
    }))
    .or_else(|| bounds(series.iter().flat_map(|s| s.durations())))
    .unwrap_or((0.0, 1.0));
    let peak = curves.iter().map(|(_, _, c)| c.peak()).fold(0.0, f64::max);
    let y_max = if peak > 0.0 { peak * 1.05 } else { 1.0 };

    ChartCanvas::new(path, SIZE)?.render(|root| {
        let mut chart = ChartBuilder::on(root)
            .caption(TITLE, (FONT, TITLE_SIZE))
            .margin(10)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d(padded_range(x_min, x_max, 0.02), 0.0..y_max)?;

        chart
            .configure_mesh()
            .x_desc("Execution Time (us)")
            .y_desc("Density")
            .y_label_formatter(&|y| format!("{:.2e}", y))
            .draw()?;

        for (index, name, curve) in &curves {
            let color = series_color(*index);
            chart
                .draw_series(LineSeries::new(
                    curve.points.iter().copied(),
                    color.stroke_width(2),
                ))?
                .label(*name)
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
        }

        if !curves.is_empty() {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;
        }

        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::grouping::group_by_algorithm;
    use crate::data::RawRecord;

    fn row(algorithm: &str, test_number: u32, duration_us: f64) -> RawRecord {
        RawRecord {
            algorithm: algorithm.to_string(),
            test_number,
            duration_us,
        }
    }

    #[test]
    fn skips_series_without_variance() {
        let rows = vec![
            row("Flat", 1, 5.0),
            row("Flat", 2, 5.0),
            row("Noisy", 1, 4.0),
            row("Noisy", 2, 6.0),
            row("Single", 1, 3.0),
        ];
        let series = group_by_algorithm(&rows);

        let curves = density_curves(&series);
        assert_eq!(curves.len(), 1);
        assert_eq!(curves[0].0, 1);
        assert_eq!(curves[0].1, "Noisy");
    }
}
