//! Graph Builder - ego network of one topic
//!
//! The ego network of topic T is T plus every topic listed in T's
//! `related_topics` that exists in the dataset, with an edge for every
//! related-topic link between two of those members. Links are undirected:
//! "A lists B" and "B lists A" collapse into a single edge.

use std::collections::HashSet;

use serde_json::Value;
use tracing::debug;

use crate::dataset::Dataset;
use crate::types::{Row, Table, STORIES_FIELD, WRITERS_FIELD};

/// Unordered pair of topic names, equal regardless of orientation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicPair {
    low: String,
    high: String,
}

impl TopicPair {
    pub fn new(a: &str, b: &str) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Self {
            low: low.to_string(),
            high: high.to_string(),
        }
    }
}

/// Edge and node tables of one ego network
#[derive(Debug, Clone, PartialEq)]
pub struct EgoGraph {
    /// Dataset name of the matched topic
    pub topic: String,
    /// Columns `from`, `to`
    pub edges: Table,
    /// Columns `id`, `stories`, `writers` plus any extra dataset fields
    pub nodes: Table,
}

impl EgoGraph {
    /// Number of topics related to the center
    pub fn related_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Outcome of an ego network lookup
#[derive(Debug, Clone, PartialEq)]
pub enum EgoLookup {
    /// Empty or blank query
    NoSelection,
    /// No topic matches the query
    NotFound,
    Found(EgoGraph),
}

impl EgoLookup {
    pub fn found(self) -> Option<EgoGraph> {
        match self {
            EgoLookup::Found(graph) => Some(graph),
            _ => None,
        }
    }
}

/// Build the ego network of the topic matching `query`
///
/// Matching is normalized (see [`crate::dataset::normalize_topic`]).
/// Nodes come out in dataset order; each edge is oriented the way its
/// first occurrence was listed.
pub fn build_ego_graph(dataset: &Dataset, query: Option<&str>) -> EgoLookup {
    let query = match query.map(str::trim) {
        Some(q) if !q.is_empty() => q,
        _ => return EgoLookup::NoSelection,
    };

    let center = match dataset.find(query) {
        Some(topic) => topic,
        None => {
            debug!("No topic matches query '{}'", query);
            return EgoLookup::NotFound;
        }
    };

    let mut members: HashSet<&str> = HashSet::new();
    members.insert(center.name.as_str());
    for related in &center.related_topics {
        if dataset.index().contains(related) {
            members.insert(related.as_str());
        }
    }

    let mut seen: HashSet<TopicPair> = HashSet::new();
    let mut edges = Table::with_columns(["from", "to"]);
    let mut emitted: HashSet<&str> = HashSet::new();
    let mut nodes = Table::with_columns(["id", STORIES_FIELD, WRITERS_FIELD]);

    for topic in dataset.topics() {
        if !members.contains(topic.name.as_str()) {
            continue;
        }

        for related in &topic.related_topics {
            if *related == topic.name || !members.contains(related.as_str()) {
                continue;
            }
            if seen.insert(TopicPair::new(&topic.name, related)) {
                edges.push(edge_row(&topic.name, related));
            }
        }

        if emitted.insert(topic.name.as_str()) {
            nodes.push(topic.to_node_row());
        }
    }

    debug!(
        "Ego network of '{}': {} nodes, {} edges",
        center.name,
        nodes.len(),
        edges.len()
    );

    EgoLookup::Found(EgoGraph {
        topic: center.name.clone(),
        edges,
        nodes,
    })
}

fn edge_row(from: &str, to: &str) -> Row {
    let mut row = Row::new();
    row.insert("from".to_string(), Value::String(from.to_string()));
    row.insert("to".to_string(), Value::String(to.to_string()));
    row
}
