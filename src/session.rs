//! Presenter session - keeps the last good graph between queries
//!
//! The pipeline itself is stateless. The dashboard, however, keeps showing
//! the previous graph when a search is blank or misses, and re-sizes that
//! graph when only the sizing method changes. `GraphSession` owns that
//! fallback state.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;

use crate::dataset::Dataset;
use crate::pipeline::{explore, rescale_node_sizes, Exploration, SizeConfig};
use crate::types::{GraphPayload, MedialResult, ScalingState, SizeMethod};

/// How the last query was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    Found,
    NotFound,
    NoSelection,
}

/// What the presenter renders after one query
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub status: QueryStatus,
    pub message: String,
    /// Matched topic, when found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub graph: GraphPayload,
}

#[derive(Debug, Clone, Default)]
struct LastGraph {
    payload: GraphPayload,
    scaling: ScalingState,
}

/// Session wrapper over the pipeline with last-known-good fallback
pub struct GraphSession {
    dataset: Arc<Dataset>,
    sizes: SizeConfig,
    last: Mutex<LastGraph>,
}

impl GraphSession {
    /// Create a session seeded with the graph of `initial_topic`
    ///
    /// An unknown initial topic leaves the session with an empty graph.
    pub fn new(dataset: Arc<Dataset>, sizes: SizeConfig, initial_topic: &str) -> MedialResult<Self> {
        let last = match explore(&dataset, Some(initial_topic), None, &sizes)? {
            Exploration::Found { payload, scaling, .. } => LastGraph { payload, scaling },
            _ => {
                debug!("Initial topic '{}' not in dataset, starting empty", initial_topic);
                LastGraph::default()
            }
        };

        Ok(Self {
            dataset,
            sizes,
            last: Mutex::new(last),
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn sizes(&self) -> &SizeConfig {
        &self.sizes
    }

    /// Graph currently on display
    pub fn current(&self) -> GraphPayload {
        self.last.lock().payload.clone()
    }

    /// Run one search/sizing request
    ///
    /// A found topic replaces the stored graph; otherwise the stored graph
    /// is re-sized with `method` and returned.
    pub fn explore(&self, query: Option<&str>, method: Option<SizeMethod>) -> MedialResult<SessionView> {
        let exploration = explore(&self.dataset, query, method, &self.sizes)?;
        let mut last = self.last.lock();

        let (status, topic, message) = match exploration {
            Exploration::Found {
                topic,
                related_count,
                payload,
                scaling,
            } => {
                *last = LastGraph { payload, scaling };
                let message = format!(
                    "Total number of \"{}\" related topics: {}",
                    query.unwrap_or_default().trim(),
                    with_thousands(related_count)
                );
                (QueryStatus::Found, Some(topic), message)
            }
            Exploration::NotFound => (QueryStatus::NotFound, None, "Topic not found.".to_string()),
            Exploration::NoSelection => (
                QueryStatus::NoSelection,
                None,
                "Type a topic you want to find.".to_string(),
            ),
        };

        if status != QueryStatus::Found {
            let payload = std::mem::take(&mut last.payload);
            last.payload = rescale_node_sizes(payload, &last.scaling, method, &self.sizes);
        }

        Ok(SessionView {
            status,
            message,
            topic,
            graph: last.payload.clone(),
        })
    }
}

/// Format a count with comma thousands separators
pub fn with_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
