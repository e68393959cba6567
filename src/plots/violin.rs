//! Violin plot of run durations.
//!
//! Each violin is a mirrored kernel density estimate. All violins share one
//! width scale (the tallest density peak across every algorithm fills the
//! slot), so their areas stay comparable.

use crate::common::axis::{
    bounds, padded_range, rotated_label_style, CategoryAxis, FONT, TITLE_SIZE,
};
use crate::common::palette::series_color;
use crate::common::ChartCanvas;
use crate::data::grouping::AlgorithmSeries;
use crate::error::PlotError;
use crate::utilities::kde::{estimate_density, DensityCurve};
use crate::utilities::quantiles::BoxStats;
use plotters::prelude::*;
use std::path::Path;

pub const FILE_NAME: &str = "violinplot.png";

const SIZE: (u32, u32) = (1000, 600);
const TITLE: &str = "Performance Distribution Violin Plot";

/// Bandwidths the density is extended past the extreme samples.
const CUT: f64 = 2.0;

/// Half of the widest violin, in category units.
const MAX_HALF_WIDTH: f64 = 0.4;

struct Violin {
    curve: Option<DensityCurve>,
    stats: Option<BoxStats>,
}

/// Outline of a violin centred on `x`: right edge bottom-to-top, then the
/// left edge top-to-bottom.
fn outline(curve: &DensityCurve, x: f64, scale: f64) -> Vec<(f64, f64)> {
    let right = curve.points.iter().map(|&(y, d)| (x + d * scale, y));
    let left = curve.points.iter().rev().map(|&(y, d)| (x - d * scale, y));
    right.chain(left).collect()
}

/// Draws one violin per series, in series order.
pub fn draw_violin(series: &[AlgorithmSeries<'_>], path: &Path) -> Result<(), PlotError> {
    let names: Vec<&str> = series.iter().map(|s| s.name).collect();
    let violins: Vec<Violin> = series
        .iter()
        .map(|s| {
            let durations = s.durations();
            Violin {
                curve: estimate_density(&durations, CUT),
                stats: BoxStats::from_samples(&durations),
            }
        })
        .collect();

    let peak = violins
        .iter()
        .filter_map(|v| v.curve.as_ref())
        .map(DensityCurve::peak)
        .fold(0.0, f64::max);
    let scale = if peak > 0.0 { MAX_HALF_WIDTH / peak } else { 0.0 };

    let extents = violins.iter().filter_map(|v| v.curve.as_ref()).flat_map(|c| {
        let (lo, hi) = c.support();
        [lo, hi]
    });
    let samples = series.iter().flat_map(|s| s.durations());
    let (min, max) = bounds(extents.chain(samples)).unwrap_or((0.0, 1.0));
    let y_range = padded_range(min, max, 0.05);

    ChartCanvas::new(path, SIZE)?.render(|root| {
        let mut chart = ChartBuilder::on(root)
            .caption(TITLE, (FONT, TITLE_SIZE))
            .margin(10)
            .x_label_area_size(100)
            .y_label_area_size(70)
            .build_cartesian_2d(CategoryAxis::new(names), y_range)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("Algorithm")
            .y_desc("Duration(us)")
            .x_label_style(rotated_label_style())
            .draw()?;

        for (index, violin) in violins.iter().enumerate() {
            let x = index as f64;
            let color = series_color(index);

            if let Some(curve) = &violin.curve {
                let shape = outline(curve, x, scale);
                let mut border = shape.clone();
                border.extend(shape.first().copied());

                chart.draw_series(std::iter::once(Polygon::new(
                    shape,
                    color.mix(0.8).filled(),
                )))?;
                chart.draw_series(std::iter::once(PathElement::new(
                    border,
                    BLACK.stroke_width(1),
                )))?;
            }

            let Some(stats) = &violin.stats else { continue };
            if violin.curve.is_none() {
                // Constant series: nothing to estimate, mark the value instead.
                chart.draw_series(std::iter::once(PathElement::new(
                    vec![(x - MAX_HALF_WIDTH, stats.median), (x + MAX_HALF_WIDTH, stats.median)],
                    color.stroke_width(2),
                )))?;
                continue;
            }

            chart.draw_series([
                PathElement::new(
                    vec![(x, stats.whisker_low), (x, stats.whisker_high)],
                    BLACK.stroke_width(1),
                ),
                PathElement::new(vec![(x, stats.q1), (x, stats.q3)], BLACK.stroke_width(5)),
            ])?;
            chart.draw_series(std::iter::once(Circle::new((x, stats.median), 3, WHITE.filled())))?;
        }

        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_is_mirrored_around_the_centre() {
        let curve = DensityCurve {
            bandwidth: 1.0,
            points: vec![(0.0, 0.1), (1.0, 0.5), (2.0, 0.1)],
        };

        let shape = outline(&curve, 3.0, 2.0);
        let close = |a: (f64, f64), b: (f64, f64)| {
            (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
        };
        assert_eq!(shape.len(), 6);
        assert!(close(shape[1], (4.0, 1.0)));
        assert!(close(shape[4], (2.0, 1.0)));
        assert!(close(shape[2], (3.2, 2.0)));
        assert!(close(shape[3], (2.8, 2.0)));
    }
}
