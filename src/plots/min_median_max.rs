//! Grouped Min / Median / Max bars per algorithm.

use crate::common::axis::{
    rotated_label_style, zero_based_range, CategoryAxis, FONT, TITLE_SIZE,
};
use crate::common::palette::series_color;
use crate::common::ChartCanvas;
use crate::data::StatisticsRecord;
use crate::error::PlotError;
use plotters::prelude::*;
use std::path::Path;

pub const FILE_NAME: &str = "min_median_max.png";

const SIZE: (u32, u32) = (1200, 600);
const TITLE: &str = "Performance Statistics (Min/Median/Max)";

/// Width of a single bar; neighbouring bars are offset by the same amount.
const BAR_WIDTH: f64 = 0.25;

/// The three bars of each group, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Metric {
    Min,
    Median,
    Max,
}

impl Metric {
    const ALL: [Metric; 3] = [Metric::Min, Metric::Median, Metric::Max];

    fn label(self) -> &'static str {
        match self {
            Metric::Min => "Min",
            Metric::Median => "Median",
            Metric::Max => "Max",
        }
    }

    fn value(self, record: &StatisticsRecord) -> f64 {
        match self {
            Metric::Min => record.min_us,
            Metric::Median => record.median_us,
            Metric::Max => record.max_us,
        }
    }
}

/// Horizontal span of bar `metric` within the group centred on `group`.
fn bar_span(group: usize, metric: usize) -> (f64, f64) {
    let centre = group as f64 + (metric as f64 - 1.0) * BAR_WIDTH;
    (centre - BAR_WIDTH / 2.0, centre + BAR_WIDTH / 2.0)
}

pub fn draw_min_median_max(records: &[StatisticsRecord], path: &Path) -> Result<(), PlotError> {
    let names: Vec<&str> = records.iter().map(|r| r.algorithm.as_str()).collect();
    let top = records
        .iter()
        .map(|r| r.min_us.max(r.median_us).max(r.max_us))
        .fold(0.0, f64::max);

    ChartCanvas::new(path, SIZE)?.render(|root| {
        let mut chart = ChartBuilder::on(root)
            .caption(TITLE, (FONT, TITLE_SIZE))
            .margin(10)
            .x_label_area_size(100)
            .y_label_area_size(70)
            .build_cartesian_2d(CategoryAxis::new(names), zero_based_range(top))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc("Execution Time (us)")
            .x_label_style(rotated_label_style())
            .draw()?;

        for (index, metric) in Metric::ALL.into_iter().enumerate() {
            let color = series_color(index);
            chart
                .draw_series(records.iter().enumerate().map(|(group, r)| {
                    let (left, right) = bar_span(group, index);
                    Rectangle::new([(left, metric.value(r)), (right, 0.0)], color.filled())
                }))?
                .label(metric.label())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled())
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
