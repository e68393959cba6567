//! Splits the raw data table into one series per algorithm.
//!
//! Algorithms are ordered by the first row they appear in; rows within a
//! series keep their file order.

use super::RawRecord;
use hashbrown::HashMap;

/// All runs of a single algorithm, borrowed from the loaded table.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmSeries<'a> {
    pub name: &'a str,
    pub records: Vec<&'a RawRecord>,
}

impl AlgorithmSeries<'_> {
    /// Measured durations, in file order.
    pub fn durations(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.duration_us).collect()
    }

    /// `(TestNumber, Duration(us))` pairs, in file order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.records
            .iter()
            .map(|r| (r.test_number as f64, r.duration_us))
    }
}

/// Groups rows by algorithm in a single forward scan.
pub fn group_by_algorithm(records: &[RawRecord]) -> Vec<AlgorithmSeries<'_>> {
    // Few algorithms, many runs each.
    let capacity = (records.len() as f64).sqrt() as usize;
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(capacity);
    let mut series: Vec<AlgorithmSeries<'_>> = Vec::with_capacity(capacity);

    for record in records {
        let slot = *index.entry(record.algorithm.as_str()).or_insert_with(|| {
            series.push(AlgorithmSeries {
                name: record.algorithm.as_str(),
                records: Vec::new(),
            });
            series.len() - 1
        });
        series[slot].records.push(record);
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(algorithm: &str, test_number: u32, duration_us: f64) -> RawRecord {
        RawRecord {
            algorithm: algorithm.to_string(),
            test_number,
            duration_us,
        }
    }

    #[test]
    fn keeps_first_seen_order() {
        let rows = vec![
            row("Unrolled", 1, 4.0),
            row("Naive", 1, 9.0),
            row("Unrolled", 2, 5.0),
            row("Recursive", 1, 7.0),
            row("Naive", 2, 8.0),
        ];

        let groups = group_by_algorithm(&rows);
        let names: Vec<_> = groups.iter().map(|g| g.name).collect();
        assert_eq!(names, ["Unrolled", "Naive", "Recursive"]);
        assert_eq!(groups[0].durations(), [4.0, 5.0]);
        assert_eq!(groups[1].durations(), [9.0, 8.0]);
        assert_eq!(groups[2].durations(), [7.0]);
    }

    #[test]
    fn does_not_sort_rows_within_a_series() {
        let rows = vec![row("A", 2, 20.0), row("A", 1, 10.0)];

        let groups = group_by_algorithm(&rows);
        let points: Vec<_> = groups[0].points().collect();
        assert_eq!(points, [(2.0, 20.0), (1.0, 10.0)]);
    }

    #[test]
    fn empty_table_has_no_series() {
        assert!(group_by_algorithm(&[]).is_empty());
    }
}
