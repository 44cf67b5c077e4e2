//! Ranked summary rows for the "most popular" table

use serde::{Deserialize, Serialize};

/// One row of the popular-topics table, counters un-log-transformed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedRow {
    #[serde(rename = "Topics")]
    pub name: String,
    #[serde(rename = "Stories")]
    pub stories: u64,
    #[serde(rename = "Writers")]
    pub writers: u64,
}
