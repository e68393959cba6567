//! Box plot of run durations, one box per algorithm.

use crate::common::axis::{
    bounds, padded_range, rotated_label_style, CategoryAxis, FONT, TITLE_SIZE,
};
use crate::common::palette::series_color;
use crate::common::ChartCanvas;
use crate::data::grouping::AlgorithmSeries;
use crate::error::PlotError;
use crate::utilities::quantiles::BoxStats;
use plotters::prelude::*;
use std::path::Path;

pub const FILE_NAME: &str = "boxplot.png";

const SIZE: (u32, u32) = (1000, 600);
const TITLE: &str = "Performance Distribution Box Plot";

/// Fraction of a category slot taken by the box.
const BOX_WIDTH: f64 = 0.8;

/// Draws one box per series, in series order.
pub fn draw_boxplot(series: &[AlgorithmSeries<'_>], path: &Path) -> Result<(), PlotError> {
    let names: Vec<&str> = series.iter().map(|s| s.name).collect();
    let boxes: Vec<Option<BoxStats>> = series
        .iter()
        .map(|s| BoxStats::from_samples(&s.durations()))
        .collect();

    let (min, max) = bounds(series.iter().flat_map(|s| s.durations())).unwrap_or((0.0, 1.0));
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

        for (index, stats) in boxes.iter().enumerate() {
            let Some(stats) = stats else { continue };
            let x = index as f64;
            let half = BOX_WIDTH / 2.0;
            let cap = BOX_WIDTH / 4.0;
            let color = series_color(index);

            let body = [(x - half, stats.q3), (x + half, stats.q1)];
            chart.draw_series([
                Rectangle::new(body, color.mix(0.8).filled()),
                Rectangle::new(body, BLACK.stroke_width(1)),
            ])?;

            let line = |points: Vec<(f64, f64)>| PathElement::new(points, BLACK.stroke_width(1));
            chart.draw_series([
                PathElement::new(
                    vec![(x - half, stats.median), (x + half, stats.median)],
                    BLACK.stroke_width(2),
                ),
                line(vec![(x, stats.q3), (x, stats.whisker_high)]),
                line(vec![(x, stats.q1), (x, stats.whisker_low)]),
                line(vec![(x - cap, stats.whisker_high), (x + cap, stats.whisker_high)]),
                line(vec![(x - cap, stats.whisker_low), (x + cap, stats.whisker_low)]),
            ])?;

            chart.draw_series(
                stats
                    .outliers
                    .iter()
                    .map(|&value| Circle::new((x, value), 3, BLACK.stroke_width(1))),
            )?;
        }

        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::grouping::group_by_algorithm;
    use crate::data::RawRecord;
    use tempfile::TempDir;

    #[test]
    fn renders_one_box_per_algorithm() {
        let rows: Vec<RawRecord> = ["Naive", "Unrolled", "Recursive"]
            .iter()
            .enumerate()
            .flat_map(|(i, name)| {
                (1..=5).map(move |run| RawRecord {
                    algorithm: name.to_string(),
                    test_number: run,
                    duration_us: (i as f64 + 1.0) * 10.0 + run as f64,
                })
            })
            .collect();
        let series = group_by_algorithm(&rows);
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(FILE_NAME);

        draw_boxplot(&series, &path).unwrap();

        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
