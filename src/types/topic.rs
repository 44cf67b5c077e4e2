//! Topic records as loaded from the dataset

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the field holding the topic name in the source dataset
pub const TOPIC_FIELD: &str = "topic";
/// Log-scaled story counter field
pub const STORIES_FIELD: &str = "stories";
/// Log-scaled writer counter field
pub const WRITERS_FIELD: &str = "writers";
/// Related topic names field
pub const RELATED_TOPICS_FIELD: &str = "related_topics";

/// Fields every dataset row must carry
pub const REQUIRED_FIELDS: &[&str] = &[TOPIC_FIELD, STORIES_FIELD, WRITERS_FIELD, RELATED_TOPICS_FIELD];

/// One row of the topic dataset
///
/// `stories` and `writers` are stored log-scaled, exactly as in the source.
/// Any extra scalar fields (for example `node_image_url`) are kept in
/// `extra` and carried through to graph nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicRecord {
    #[serde(rename = "topic")]
    pub name: String,
    pub stories: f64,
    pub writers: f64,
    pub related_topics: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TopicRecord {
    /// Create a topic without extra attributes
    pub fn new(name: impl Into<String>, stories: f64, writers: f64, related_topics: Vec<String>) -> Self {
        Self {
            name: name.into(),
            stories,
            writers,
            related_topics,
            extra: Map::new(),
        }
    }

    /// Attach an extra scalar attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Row for the node table: every field except `related_topics`,
    /// with `topic` renamed to `id`.
    ///
    /// Extras never shadow `id`, `stories` or `writers`.
    pub fn to_node_row(&self) -> Map<String, Value> {
        let mut row = self.extra.clone();
        row.insert("id".to_string(), Value::String(self.name.clone()));
        row.insert(STORIES_FIELD.to_string(), number(self.stories));
        row.insert(WRITERS_FIELD.to_string(), number(self.writers));
        row
    }
}

/// Convert a float into a JSON value, non-finite values become null
fn number(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}
