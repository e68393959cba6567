//! Runs both plotters over every configured category.

use crate::analysis::{plot_raw_data, plot_statistics};
use crate::config::{Category, VizConfig};
use crate::error::Result;
use std::fs;
use std::path::PathBuf;

/// Charts generated for one category.
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub category: Category,
    pub viz_dir: PathBuf,
    pub charts: Vec<PathBuf>,
}

/// Creates every output directory, then renders the raw data and statistics
/// charts of each category in turn.
///
/// Missing input tables are reported and skipped; any other failure aborts
/// the run.
pub fn run(config: &VizConfig) -> Result<Vec<CategoryReport>> {
    for category in &config.categories {
        fs::create_dir_all(config.viz_dir(category))?;
    }

    let mut reports = Vec::with_capacity(config.categories.len());
    for category in &config.categories {
        let viz_dir = config.viz_dir(category);
        tracing::info!(category = category.dir_name, "generating charts");

        let mut charts = plot_raw_data(&config.raw_data_path(category), &viz_dir)?;
        charts.extend(plot_statistics(&config.statistics_path(category), &viz_dir)?);

        tracing::info!(
            category = category.dir_name,
            charts = charts.len(),
            "finished category"
        );
        reports.push(CategoryReport {
            category: category.clone(),
            viz_dir,
            charts,
        });
    }

    Ok(reports)
}
