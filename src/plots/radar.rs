//! Radar comparison of algorithms across four summary metrics.
//!
//! Every metric is divided by its maximum across algorithms, so the largest
//! value on each spoke reaches 1.0. Spokes start on the positive x axis and
//! run counter-clockwise.

use crate::common::axis::{FONT, LABEL_SIZE, TITLE_SIZE};
use crate::common::palette::series_color;
use crate::common::ChartCanvas;
use crate::data::StatisticsRecord;
use crate::error::PlotError;
use core::f64::consts::TAU;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

pub const FILE_NAME: &str = "radar.png";

/// Fewest algorithms a radar chart is drawn for.
pub const MIN_ALGORITHMS: usize = 3;

const SIZE: (u32, u32) = (800, 800);
const TITLE: &str = "Performance Comparison Radar Chart (Lower is Better)";

pub const CATEGORIES: [&str; 4] = ["Mean Time", "Std Dev", "Min Time", "Max Time"];

const RADIAL_TICKS: [f64; 4] = [0.2, 0.4, 0.6, 0.8];

const GRID_COLOR: RGBColor = RGBColor(200, 200, 200);
const TICK_COLOR: RGBColor = RGBColor(128, 128, 128);

/// Radius the category names are placed at.
const LABEL_RADIUS: f64 = 1.15;

/// Extent of the (square) coordinate system in each direction.
const EXTENT: f64 = 1.35;

/// Normalised metrics of one algorithm, in [`CATEGORIES`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarProfile<'a> {
    pub name: &'a str,
    pub values: [f64; 4],
}

/// Divides every value by the largest one.
///
/// A column whose maximum is not positive maps to zeros.
pub fn normalize_by_max(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max > 0.0 {
        values.iter().map(|v| v / max).collect()
    } else {
        vec![0.0; values.len()]
    }
}

/// Builds one profile per record, in record order.
pub fn radar_profiles(records: &[StatisticsRecord]) -> Vec<RadarProfile<'_>> {
    let column = |f: fn(&StatisticsRecord) -> f64| {
        normalize_by_max(&records.iter().map(f).collect::<Vec<_>>())
    };
    let mean = column(|r| r.mean_us);
    let stddev = column(|r| r.stddev_us);
    let min = column(|r| r.min_us);
    let max = column(|r| r.max_us);

    records
        .iter()
        .enumerate()
        .map(|(i, r)| RadarProfile {
            name: r.algorithm.as_str(),
            values: [mean[i], stddev[i], min[i], max[i]],
        })
        .collect()
}

/// Angle of spoke `index`, in radians.
fn spoke_angle(index: usize) -> f64 {
    index as f64 / CATEGORIES.len() as f64 * TAU
}

fn polar(angle: f64, radius: f64) -> (f64, f64) {
    (radius * angle.cos(), radius * angle.sin())
}

/// Polygon vertices for `values`, with the first vertex repeated at the end
/// to close the loop.
pub fn closed_polygon(values: &[f64; 4]) -> Vec<(f64, f64)> {
    let mut points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| polar(spoke_angle(i), v))
        .collect();
    points.push(points[0]);
    points
}

fn ring(radius: f64) -> Vec<(f64, f64)> {
    (0..=120)
        .map(|i| polar(i as f64 / 120.0 * TAU, radius))
        .collect()
}

pub fn draw_radar(records: &[StatisticsRecord], path: &Path) -> Result<(), PlotError> {
    let profiles = radar_profiles(records);

    ChartCanvas::new(path, SIZE)?.render(|root| {
        let mut chart = ChartBuilder::on(root)
            .caption(TITLE, (FONT, TITLE_SIZE))
            .margin(20)
            .build_cartesian_2d(-EXTENT..EXTENT, -EXTENT..EXTENT)?;

        chart.draw_series(
            RADIAL_TICKS
                .iter()
                .chain(std::iter::once(&1.0))
                .map(|&r| PathElement::new(ring(r), GRID_COLOR.stroke_width(1))),
        )?;
        chart.draw_series((0..CATEGORIES.len()).map(|i| {
            PathElement::new(
                vec![(0.0, 0.0), polar(spoke_angle(i), 1.0)],
                GRID_COLOR.stroke_width(1),
            )
        }))?;

        let tick_style = TextStyle::from((FONT, LABEL_SIZE - 2).into_font())
            .color(&TICK_COLOR)
            .pos(Pos::new(HPos::Left, VPos::Bottom));
        let tick_angle = TAU / 16.0;
        chart.draw_series(RADIAL_TICKS.iter().map(|&r| {
            Text::new(format!("{:.1}", r), polar(tick_angle, r), tick_style.clone())
        }))?;

        let category_style = TextStyle::from((FONT, LABEL_SIZE).into_font())
            .pos(Pos::new(HPos::Center, VPos::Center));
        chart.draw_series(CATEGORIES.iter().enumerate().map(|(i, name)| {
            Text::new(*name, polar(spoke_angle(i), LABEL_RADIUS), category_style.clone())
        }))?;

        for (index, profile) in profiles.iter().enumerate() {
            let color = series_color(index);
            let outline = closed_polygon(&profile.values);

            chart.draw_series(std::iter::once(Polygon::new(
                outline.clone(),
                color.mix(0.25).filled(),
            )))?;
            chart
                .draw_series(std::iter::once(PathElement::new(outline, color.stroke_width(2))))?
                .label(profile.name)
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
