//! Distribution and trend charts for `raw_data.csv`.

use crate::data::grouping::{group_by_algorithm, AlgorithmSeries};
use crate::data::loading::load_raw_data;
use crate::error::{PlotError, Result};
use crate::plots::{boxplot, density, time_series, violin};
use std::path::{Path, PathBuf};

type RawChart = fn(&[AlgorithmSeries<'_>], &Path) -> core::result::Result<(), PlotError>;

/// Charts produced for the raw data table, with the file names they are saved as.
const RAW_CHARTS: [(&str, RawChart); 4] = [
    (boxplot::FILE_NAME, boxplot::draw_boxplot),
    (violin::FILE_NAME, violin::draw_violin),
    (time_series::FILE_NAME, time_series::draw_time_series),
    (density::FILE_NAME, density::draw_density),
];

/// Generate the raw data charts
///
/// Writes `boxplot.png`, `violinplot.png`, `time_series.png` and `density.png`
/// into `output_dir`, replacing any existing files of the same name.
///
/// # Arguments
/// * `csv_file` - Path to a `raw_data.csv` table
/// * `output_dir` - Existing directory the PNG files are written to
///
/// # Returns
/// * `Ok(paths)` - The charts that were written; empty if `csv_file` does not exist
/// * `Err(VizError)` - If the table is malformed or a chart could not be drawn
pub fn plot_raw_data(csv_file: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
    if !csv_file.exists() {
        println!("File not found: {}", csv_file.display());
        return Ok(Vec::new());
    }

    let records = load_raw_data(csv_file)?;
    let series = group_by_algorithm(&records);

    let mut written = Vec::with_capacity(RAW_CHARTS.len());
    for (file_name, draw) in RAW_CHARTS {
        let path = output_dir.join(file_name);
        draw(&series, &path)?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_table_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let written = plot_raw_data(&dir.path().join("raw_data.csv"), dir.path()).unwrap();

        assert!(written.is_empty());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
