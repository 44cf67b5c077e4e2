//! Normalized topic name index
//!
//! Matching is case- and punctuation-insensitive: every run of characters
//! outside `[0-9a-zA-Z]` collapses to one space, then the result is
//! lowercased and trimmed. "Machine-Learning" and "machine learning" both
//! normalize to "machine learning".

use std::collections::HashMap;
use std::sync::OnceLock;

use rayon::prelude::*;
use regex::Regex;

use crate::types::TopicRecord;

/// Dataset size above which names are normalized in parallel
const PARALLEL_INDEX_THRESHOLD: usize = 1000;

fn separator_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("[^0-9a-zA-Z]+").expect("valid separator pattern"))
}

/// Normalize a topic name or query for matching
pub fn normalize_topic(text: &str) -> String {
    separator_pattern()
        .replace_all(text, " ")
        .to_lowercase()
        .trim()
        .to_string()
}

/// Lookup tables over a dataset's topic names
#[derive(Debug, Default, Clone)]
pub struct TopicIndex {
    /// normalized name → row position (first row wins)
    normalized: HashMap<String, usize>,

    /// exact name → row position (first row wins)
    exact: HashMap<String, usize>,
}

impl TopicIndex {
    /// Build the index for a list of topics
    pub fn build(topics: &[TopicRecord]) -> Self {
        let keys: Vec<String> = if topics.len() > PARALLEL_INDEX_THRESHOLD {
            topics.par_iter().map(|t| normalize_topic(&t.name)).collect()
        } else {
            topics.iter().map(|t| normalize_topic(&t.name)).collect()
        };

        let mut index = Self::default();
        for (position, (topic, key)) in topics.iter().zip(keys).enumerate() {
            index.normalized.entry(key).or_insert(position);
            index.exact.entry(topic.name.clone()).or_insert(position);
        }
        index
    }

    /// Position of the topic whose normalized name equals the normalized query
    pub fn find(&self, query: &str) -> Option<usize> {
        self.normalized.get(&normalize_topic(query)).copied()
    }

    /// Position of a topic by its exact name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.exact.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.exact.contains_key(name)
    }
}
