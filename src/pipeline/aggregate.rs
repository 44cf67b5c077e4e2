//! Aggregator - the "most popular" table

use crate::dataset::Dataset;
use crate::types::RankedRow;

/// Rank every topic by story count
///
/// Counters are stored log-scaled, so they are exponentiated and rounded
/// back to whole numbers. Ties keep dataset order.
pub fn summarize(dataset: &Dataset) -> Vec<RankedRow> {
    let mut rows: Vec<RankedRow> = dataset
        .topics()
        .iter()
        .map(|topic| RankedRow {
            name: topic.name.clone(),
            stories: unlog(topic.stories),
            writers: unlog(topic.writers),
        })
        .collect();

    // sort_by is stable
    rows.sort_by(|a, b| b.stories.cmp(&a.stories));
    rows
}

/// Inverse of the dataset's log scaling, rounded to the nearest integer
fn unlog(value: f64) -> u64 {
    // saturating cast: NaN -> 0, overflow -> u64::MAX
    value.exp().round() as u64
}
