//! Data types for the topic graph explorer
//!
//! This module contains all the core data structures used throughout the application.

mod error;
mod graph;
mod scaling;
mod summary;
mod table;
mod topic;

pub use error::{MedialError, MedialResult};
pub use graph::{
    edge_id, EdgeColor, GraphEdge, GraphNode, GraphPayload, NodeShape, EDGE_COLOR, IMAGE_NODE_SIZE,
};
pub use scaling::{Bounds, ScalingBounds, ScalingState, SizeMethod};
pub use summary::RankedRow;
pub use table::{value_to_string, Row, Table};
pub use topic::{
    TopicRecord, RELATED_TOPICS_FIELD, REQUIRED_FIELDS, STORIES_FIELD, TOPIC_FIELD, WRITERS_FIELD,
};
