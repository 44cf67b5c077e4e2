//! Medial - topic relationship graph explorer
//!
//! Turns a dataset of article topics (with log-scaled story/writer counts
//! and related-topic lists) into the data behind a dashboard: a ranked
//! table of popular topics and the ego network of any searched topic,
//! ready for a network widget.
//!
//! # Modules
//!
//! - `types`: Core data structures (TopicRecord, Table, GraphPayload, ScalingState)
//! - `dataset`: Read-only dataset snapshot, loading and normalized name index
//! - `pipeline`: Aggregator, Graph Builder, Scaler and Rescaler
//! - `session`: Last-known-good graph kept between searches
//! - `config`: Environment-driven settings
//! - `api`: HTTP JSON API
//!
//! # Example
//!
//! ```no_run
//! use medial::dataset::load_dataset;
//! use medial::pipeline::{explore, Exploration, SizeConfig};
//! use medial::types::SizeMethod;
//!
//! fn main() -> medial::MedialResult<()> {
//!     let dataset = load_dataset("datasets/medium_topics.json")?;
//!     let sizes = SizeConfig::default();
//!     if let Exploration::Found { payload, .. } =
//!         explore(&dataset, Some("machine learning"), Some(SizeMethod::Stories), &sizes)?
//!     {
//!         println!("{}", serde_json::to_string_pretty(&payload)?);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dataset;
pub mod pipeline;
pub mod session;
pub mod types;

// Re-export commonly used items at crate root
pub use config::AppConfig;
pub use dataset::Dataset;
pub use pipeline::{
    attach_scaling, build_ego_graph, explore, rescale_node_sizes, summarize, EgoLookup,
    Exploration, SizeConfig,
};
pub use session::GraphSession;
pub use types::{
    GraphEdge, GraphNode, GraphPayload, MedialError, MedialResult, RankedRow, ScalingState,
    SizeMethod, TopicRecord,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
