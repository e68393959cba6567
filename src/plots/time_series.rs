//! Duration of each run against its test number, one line per algorithm.

use crate::common::axis::{bounds, padded_range, FONT, TITLE_SIZE};
use crate::common::palette::series_color;
use crate::common::ChartCanvas;
use crate::data::grouping::AlgorithmSeries;
use crate::error::PlotError;
use plotters::prelude::*;
use std::path::Path;

pub const FILE_NAME: &str = "time_series.png";

const SIZE: (u32, u32) = (1200, 600);
const TITLE: &str = "Execution Time Series Plot";

pub fn draw_time_series(series: &[AlgorithmSeries<'_>], path: &Path) -> Result<(), PlotError> {
    let (x_min, x_max) = bounds(series.iter().flat_map(|s| s.points().map(|(x, _)| x)))
        .unwrap_or((0.0, 1.0));
    let (y_min, y_max) = bounds(series.iter().flat_map(|s| s.durations())).unwrap_or((0.0, 1.0));

    ChartCanvas::new(path, SIZE)?.render(|root| {
        let mut chart = ChartBuilder::on(root)
            .caption(TITLE, (FONT, TITLE_SIZE))
            .margin(10)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(
                padded_range(x_min, x_max, 0.05),
                padded_range(y_min, y_max, 0.05),
            )?;

        chart
            .configure_mesh()
            .x_desc("Test Number")
            .y_desc("Execution Time (us)")
            .draw()?;

        for (index, algorithm) in series.iter().enumerate() {
            let color = series_color(index);
            chart
                .draw_series(LineSeries::new(algorithm.points(), color.stroke_width(2)))?
                .label(algorithm.name)
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        Ok(())
    })
}
