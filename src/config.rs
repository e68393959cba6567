//! Locations of the benchmark result tables and their chart directories.

use std::path::{Path, PathBuf};

/// Results root used when none is given on the command line.
pub const DEFAULT_RESULTS_DIR: &str = "results";

pub const RAW_DATA_FILE: &str = "raw_data.csv";
pub const STATISTICS_FILE: &str = "statistics.csv";

/// Subdirectory of a category that charts are written to.
pub const VIZ_DIR: &str = "viz";

/// One benchmark suite whose results live in their own directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Directory name under the results root, e.g. `array_sum`.
    pub dir_name: &'static str,
    /// Human readable name used in console output.
    pub label: &'static str,
}

/// The benchmark suites, in the order they are processed.
pub const CATEGORIES: [Category; 2] = [
    Category {
        dir_name: "array_sum",
        label: "Array sum",
    },
    Category {
        dir_name: "inner_product",
        label: "Inner product",
    },
];

/// Where to read results from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VizConfig {
    pub results_dir: PathBuf,
    pub categories: Vec<Category>,
}

impl VizConfig {
    /// Configuration for every standard category under `results_dir`.
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
            categories: CATEGORIES.to_vec(),
        }
    }

    pub fn category_dir(&self, category: &Category) -> PathBuf {
        self.results_dir.join(category.dir_name)
    }

    pub fn raw_data_path(&self, category: &Category) -> PathBuf {
        self.category_dir(category).join(RAW_DATA_FILE)
    }

    pub fn statistics_path(&self, category: &Category) -> PathBuf {
        self.category_dir(category).join(STATISTICS_FILE)
    }

    pub fn viz_dir(&self, category: &Category) -> PathBuf {
        self.category_dir(category).join(VIZ_DIR)
    }
}

impl Default for VizConfig {
    fn default() -> Self {
        Self::new(Path::new(DEFAULT_RESULTS_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_match_the_harness_layout() {
        let config = VizConfig::default();
        let array_sum = &config.categories[0];
        let inner_product = &config.categories[1];

        assert_eq!(
            config.raw_data_path(array_sum),
            Path::new("results/array_sum/raw_data.csv")
        );
        assert_eq!(
            config.statistics_path(inner_product),
            Path::new("results/inner_product/statistics.csv")
        );
        assert_eq!(config.viz_dir(array_sum), Path::new("results/array_sum/viz"));
    }

    #[test]
    fn categories_are_processed_in_order() {
        let config = VizConfig::new("/tmp/out");
        let names: Vec<_> = config.categories.iter().map(|c| c.dir_name).collect();
        assert_eq!(names, ["array_sum", "inner_product"]);
    }
}
