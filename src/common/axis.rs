//! Axis ranges and label helpers shared by the chart renderers.

use core::ops::Range;
use plotters::coord::ranged1d::{KeyPointHint, NoDefaultFormatting, Ranged, ValueFormatter};
use plotters::coord::types::RangedCoordf64;
use plotters::style::{FontTransform, IntoFont, TextStyle};

/// Font used for every caption, label and annotation.
pub const FONT: &str = "sans-serif";

/// Caption text size in pixels.
pub const TITLE_SIZE: u32 = 24;

/// Tick and annotation text size in pixels.
pub const LABEL_SIZE: u32 = 14;

/// Tick label style for category names, turned sideways so long algorithm
/// names don't overlap.
pub fn rotated_label_style() -> TextStyle<'static> {
    (FONT, LABEL_SIZE)
        .into_font()
        .transform(FontTransform::Rotate90)
        .into()
}

/// Widens `min..max` by `fraction` of its span on each side.
///
/// A zero-width span is widened by `fraction` of its magnitude (or by 1.0 at
/// zero) so the coordinate system stays valid.
pub fn padded_range(min: f64, max: f64, fraction: f64) -> Range<f64> {
    let span = max - min;
    let pad = if span > 0.0 {
        span * fraction
    } else if min != 0.0 {
        min.abs() * fraction
    } else {
        1.0
    };
    (min - pad)..(max + pad)
}

/// Value axis that starts at zero, used for bar charts.
pub fn zero_based_range(max: f64) -> Range<f64> {
    let top = if max > 0.0 { max * 1.1 } else { 1.0 };
    0.0..top
}

/// Categorical x axis: category `i` is centred on `i`, with a tick at each
/// centre and nowhere else. Ticks are labelled with the category names.
#[derive(Clone)]
pub struct CategoryAxis<'a> {
    names: Vec<&'a str>,
    coord: RangedCoordf64,
}

impl<'a> CategoryAxis<'a> {
    pub fn new(names: Vec<&'a str>) -> Self {
        let coord = (-0.5..names.len() as f64 - 0.5).into();
        Self { names, coord }
    }

    /// Name shown at position `x`; empty between category centres.
    pub fn label(&self, x: f64) -> String {
        category_label(&self.names, x)
    }
}

impl Ranged for CategoryAxis<'_> {
    type FormatOption = NoDefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.coord.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        // Centres are bold points only; there are no light points between them.
        if hint.weight().allow_light_points() {
            return Vec::new();
        }
        (0..self.names.len()).map(|i| i as f64).collect()
    }

    fn range(&self) -> Range<f64> {
        self.coord.range()
    }
}

impl ValueFormatter<f64> for CategoryAxis<'_> {
    fn format(value: &f64) -> String {
        value.to_string()
    }

    fn format_ext(&self, value: &f64) -> String {
        self.label(*value)
    }
}

/// Tick label for position `x` on a [`CategoryAxis`] over `names`.
pub fn category_label<S: AsRef<str>>(names: &[S], x: f64) -> String {
    let index = x.round();
    if (x - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    names
        .get(index as usize)
        .map(|name| name.as_ref().to_string())
        .unwrap_or_default()
}

/// Smallest and largest of `values`, or `None` when empty.
pub fn bounds<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotters::coord::ranged1d::{BoldPoints, LightPoints};
    use rstest::rstest;

    #[test]
    fn pads_both_sides() {
        let range = padded_range(10.0, 20.0, 0.05);
        assert!((range.start - 9.5).abs() < 1e-12);
        assert!((range.end - 20.5).abs() < 1e-12);
    }

    #[rstest]
    #[case(5.0, 4.75, 5.25)]
    #[case(0.0, -1.0, 1.0)]
    fn pads_degenerate_span(#[case] value: f64, #[case] start: f64, #[case] end: f64) {
        let range = padded_range(value, value, 0.05);
        assert!((range.start - start).abs() < 1e-12);
        assert!((range.end - end).abs() < 1e-12);
    }

    #[rstest]
    #[case(0.0, "Naive")]
    #[case(1.0, "Unrolled")]
    #[case(0.5, "")]
    #[case(2.0, "")]
    #[case(-1.0, "")]
    fn labels_only_category_centres(#[case] x: f64, #[case] expected: &str) {
        let names = ["Naive", "Unrolled"];
        assert_eq!(category_label(&names, x), expected);
    }

    #[test]
    fn category_ticks_sit_on_centres() {
        let axis = CategoryAxis::new(vec!["Naive", "Unrolled", "Recursive"]);

        let ticks = axis.key_points(BoldPoints(10));
        assert_eq!(ticks, [0.0, 1.0, 2.0]);
        assert!(axis.key_points(LightPoints::new(10, 50)).is_empty());

        let labels: Vec<_> = ticks.iter().map(|x| axis.format_ext(x)).collect();
        assert_eq!(labels, ["Naive", "Unrolled", "Recursive"]);
    }

    #[test]
    fn category_axis_spans_half_a_slot_past_each_end() {
        let axis = CategoryAxis::new(vec!["A", "B", "C"]);
        assert_eq!(axis.range(), -0.5..2.5);

        // Centres divide the pixel range into equal slots.
        assert_eq!(axis.map(&-0.5, (0, 300)), 0);
        assert_eq!(axis.map(&0.0, (0, 300)), 50);
        assert_eq!(axis.map(&2.0, (0, 300)), 250);
        assert_eq!(axis.format_ext(&0.5), "");
    }

    #[test]
    fn bounds_of_values() {
        assert_eq!(bounds([3.0, -1.0, 7.5]), Some((-1.0, 7.5)));
        assert_eq!(bounds(core::iter::empty()), None);
    }

    #[test]
    fn zero_based_range_leaves_headroom() {
        let range = zero_based_range(10.0);
        assert_eq!(range.start, 0.0);
        assert!(range.end > 10.0);
    }
}
