//! Mean duration per algorithm with standard deviation error bars.

use crate::common::axis::{
    rotated_label_style, zero_based_range, CategoryAxis, FONT, LABEL_SIZE, TITLE_SIZE,
};
use crate::common::palette::series_color;
use crate::common::ChartCanvas;
use crate::data::StatisticsRecord;
use crate::error::PlotError;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

pub const FILE_NAME: &str = "mean_bar.png";

const SIZE: (u32, u32) = (1000, 600);
const TITLE: &str = "Average Execution Time (with Standard Deviation)";

const BAR_WIDTH: f64 = 0.8;

/// Half the width of an error bar cap, in category units.
const CAP_HALF_WIDTH: f64 = 0.08;

/// Gap between the top of a bar and its value label, in data units.
const LABEL_OFFSET: f64 = 0.1;

/// Text shown above a bar of the given height.
pub fn bar_label(height: f64) -> String {
    format!("{:.2}", height)
}

pub fn draw_mean_bar(records: &[StatisticsRecord], path: &Path) -> Result<(), PlotError> {
    let names: Vec<&str> = records.iter().map(|r| r.algorithm.as_str()).collect();
    let top = records
        .iter()
        .map(|r| (r.mean_us + r.stddev_us.abs()).max(r.mean_us + LABEL_OFFSET))
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

        let half = BAR_WIDTH / 2.0;
        chart.draw_series(records.iter().enumerate().map(|(index, r)| {
            let x = index as f64;
            Rectangle::new([(x - half, r.mean_us), (x + half, 0.0)], series_color(index).filled())
        }))?;

        for (index, r) in records.iter().enumerate() {
            let x = index as f64;
            let low = r.mean_us - r.stddev_us;
            let high = r.mean_us + r.stddev_us;
            let (left, right) = (x - CAP_HALF_WIDTH, x + CAP_HALF_WIDTH);
            chart.draw_series([
                PathElement::new(vec![(x, low), (x, high)], BLACK.stroke_width(1)),
                PathElement::new(vec![(left, low), (right, low)], BLACK.stroke_width(1)),
                PathElement::new(vec![(left, high), (right, high)], BLACK.stroke_width(1)),
            ])?;
        }

        let text_style = TextStyle::from((FONT, LABEL_SIZE).into_font())
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(records.iter().enumerate().map(|(index, r)| {
            Text::new(
                bar_label(r.mean_us),
                (index as f64, r.mean_us + LABEL_OFFSET),
                text_style.clone(),
            )
        }))?;

        Ok(())
    })
}
