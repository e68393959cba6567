//! CSV loading for the raw data and statistics tables.

use super::{RawRecord, StatisticsRecord};
use crate::error::DataError;
use serde::de::DeserializeOwned;
use std::path::Path;

type Result<T> = core::result::Result<T, DataError>;

/// Loads every row of `raw_data.csv`.
///
/// # Errors
///
/// Fails if the file can't be opened, a required column is missing, a value
/// does not parse, or the table has no rows.
pub fn load_raw_data(path: &Path) -> Result<Vec<RawRecord>> {
    load_table(path)
}

/// Loads every row of `statistics.csv`, in file order.
///
/// # Errors
///
/// Same conditions as [`load_raw_data`].
pub fn load_statistics(path: &Path) -> Result<Vec<StatisticsRecord>> {
    load_table(path)
}

fn load_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let with_path = |source: csv::Error| DataError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(with_path)?;

    let rows = reader
        .deserialize()
        .collect::<core::result::Result<Vec<T>, _>>()
        .map_err(with_path)?;

    if rows.is_empty() {
        return Err(DataError::EmptyTable(path.to_path_buf()));
    }

    tracing::debug!(path = %path.display(), rows = rows.len(), "loaded table");
    Ok(rows)
}
