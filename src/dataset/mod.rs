//! Topic dataset - read-only in-memory snapshot
//!
//! The dataset is loaded once at start-up and shared by every query. Rows
//! are validated on construction so the pipeline can assume every record
//! carries `topic`, `stories`, `writers` and `related_topics`.

mod index;
mod loader;

use serde_json::Value;
use tracing::debug;

use crate::types::{MedialError, MedialResult, Row, TopicRecord, REQUIRED_FIELDS};

pub use index::{normalize_topic, TopicIndex};
pub use loader::{load_dataset, parse_dataset};

/// Immutable set of topic records plus its name index
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    topics: Vec<TopicRecord>,
    index: TopicIndex,
}

impl Dataset {
    /// Create a dataset from typed records
    pub fn new(topics: Vec<TopicRecord>) -> Self {
        let index = TopicIndex::build(&topics);
        Self { topics, index }
    }

    /// Create a dataset from raw JSON rows, checking the required fields
    pub fn from_rows(rows: Vec<Row>) -> MedialResult<Self> {
        let mut topics = Vec::with_capacity(rows.len());

        for (position, row) in rows.into_iter().enumerate() {
            if let Some(missing) = REQUIRED_FIELDS.iter().find(|f| !row.contains_key(**f)) {
                return Err(MedialError::schema(format!(
                    "Dataset row {} missing '{}' field",
                    position, missing
                )));
            }

            let topic: TopicRecord = serde_json::from_value(Value::Object(row)).map_err(|e| {
                MedialError::schema(format!("Dataset row {} is malformed: {}", position, e))
            })?;
            topics.push(topic);
        }

        debug!("Validated {} dataset rows", topics.len());
        Ok(Self::new(topics))
    }

    pub fn topics(&self) -> &[TopicRecord] {
        &self.topics
    }

    pub fn index(&self) -> &TopicIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Topic by exact name
    pub fn get(&self, name: &str) -> Option<&TopicRecord> {
        self.index.position(name).map(|i| &self.topics[i])
    }

    /// Topic matching a free-text query (normalized comparison)
    pub fn find(&self, query: &str) -> Option<&TopicRecord> {
        self.index.find(query).map(|i| &self.topics[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_from_rows_keeps_extra_fields() {
        let dataset = Dataset::from_rows(vec![row(json!({
            "topic": "Life",
            "stories": 1.5,
            "writers": 0.5,
            "related_topics": ["Writing"],
            "node_image_url": "https://example.com/life.png"
        }))])
        .unwrap();

        let life = dataset.get("Life").unwrap();
        assert_eq!(life.related_topics, vec!["Writing".to_string()]);
        assert_eq!(life.extra["node_image_url"], "https://example.com/life.png");
    }

    #[test]
    fn test_from_rows_missing_field_is_schema_error() {
        let err = Dataset::from_rows(vec![row(json!({
            "topic": "Life",
            "stories": 1.5,
            "related_topics": []
        }))])
        .unwrap_err();

        assert!(err.is_schema());
        assert!(err.to_string().contains("writers"));
    }

    #[test]
    fn test_from_rows_wrong_type_is_schema_error() {
        let err = Dataset::from_rows(vec![row(json!({
            "topic": "Life",
            "stories": "many",
            "writers": 1.0,
            "related_topics": []
        }))])
        .unwrap_err();

        assert!(err.is_schema());
    }

    #[test]
    fn test_find_by_query() {
        let dataset = Dataset::new(vec![TopicRecord::new("Self Improvement", 0.0, 0.0, vec![])]);
        assert_eq!(dataset.find("self-improvement").unwrap().name, "Self Improvement");
        assert!(dataset.find("improvement").is_none());
    }
}
