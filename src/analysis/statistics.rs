//! Comparison charts for `statistics.csv`.

use crate::data::loading::load_statistics;
use crate::data::StatisticsRecord;
use crate::error::{PlotError, Result};
use crate::plots::{mean_bar, min_median_max, radar};
use std::path::{Path, PathBuf};

type StatisticsChart = fn(&[StatisticsRecord], &Path) -> core::result::Result<(), PlotError>;

/// Charts produced for every statistics table.
const STATISTICS_CHARTS: [(&str, StatisticsChart); 2] = [
    (mean_bar::FILE_NAME, mean_bar::draw_mean_bar),
    (min_median_max::FILE_NAME, min_median_max::draw_min_median_max),
];

/// Whether a table with `algorithms` rows gets a radar chart.
pub fn has_radar_chart(algorithms: usize) -> bool {
    algorithms >= radar::MIN_ALGORITHMS
}

/// Generate the statistics charts
///
/// Writes `mean_bar.png` and `min_median_max.png` into `output_dir`, plus
/// `radar.png` when the table compares at least three algorithms. Existing
/// files of the same name are replaced.
///
/// # Arguments
/// * `csv_file` - Path to a `statistics.csv` table
/// * `output_dir` - Existing directory the PNG files are written to
///
/// # Returns
/// * `Ok(paths)` - The charts that were written; empty if `csv_file` does not exist
/// * `Err(VizError)` - If the table is malformed or a chart could not be drawn
pub fn plot_statistics(csv_file: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
    if !csv_file.exists() {
        println!("File not found: {}", csv_file.display());
        return Ok(Vec::new());
    }

    let records = load_statistics(csv_file)?;

    let mut written = Vec::with_capacity(STATISTICS_CHARTS.len() + 1);
    for (file_name, draw) in STATISTICS_CHARTS {
        let path = output_dir.join(file_name);
        draw(&records, &path)?;
        written.push(path);
    }

    if has_radar_chart(records.len()) {
        let path = output_dir.join(radar::FILE_NAME);
        radar::draw_radar(&records, &path)?;
        written.push(path);
    } else {
        tracing::debug!(
            algorithms = records.len(),
            "too few algorithms for a radar chart"
        );
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case(1, false)]
    #[case(2, false)]
    #[case(3, true)]
    #[case(8, true)]
    fn radar_needs_more_than_two_algorithms(#[case] algorithms: usize, #[case] expected: bool) {
        assert_eq!(has_radar_chart(algorithms), expected);
    }

    #[test]
    fn missing_table_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let written = plot_statistics(&dir.path().join("statistics.csv"), dir.path()).unwrap();

        assert!(written.is_empty());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
