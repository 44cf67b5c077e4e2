//! Graph pipeline - Aggregator, Graph Builder, Scaler, Rescaler
//!
//! Every function here is a pure transformation of the read-only dataset:
//! each query builds a complete new payload and nothing is cached between
//! calls.
//!
//! ```text
//! query ──► build_ego_graph ──► attach_scaling ──► rescale_node_sizes ──► payload
//!           (edge/node tables)   (payload+bounds)   (size by attribute)
//! ```

mod aggregate;
mod ego;
mod rescale;
mod scale;

pub use aggregate::summarize;
pub use ego::{build_ego_graph, EgoGraph, EgoLookup, TopicPair};
pub use rescale::{
    rescale_node_sizes, SizeConfig, DEFAULT_NODE_SIZE, MAX_NODE_SIZE, MIN_NODE_SIZE,
};
pub use scale::{attach_scaling, compute_bounds, NODE_IMAGE_FIELD};

use crate::dataset::Dataset;
use crate::types::{GraphPayload, MedialResult, ScalingState, SizeMethod};

/// Result of running the whole pipeline for one query
#[derive(Debug, Clone, PartialEq)]
pub enum Exploration {
    NoSelection,
    NotFound,
    Found {
        /// Dataset name of the matched topic
        topic: String,
        /// Topics linked to the match
        related_count: usize,
        payload: GraphPayload,
        scaling: ScalingState,
    },
}

/// Graph Builder -> Scaler -> Rescaler for one query
pub fn explore(
    dataset: &Dataset,
    query: Option<&str>,
    method: Option<SizeMethod>,
    sizes: &SizeConfig,
) -> MedialResult<Exploration> {
    let graph = match build_ego_graph(dataset, query) {
        EgoLookup::NoSelection => return Ok(Exploration::NoSelection),
        EgoLookup::NotFound => return Ok(Exploration::NotFound),
        EgoLookup::Found(graph) => graph,
    };

    let related_count = graph.related_count();
    let (payload, scaling) = attach_scaling(graph.edges, Some(graph.nodes), sizes)?;
    let payload = rescale_node_sizes(payload, &scaling, method, sizes);

    Ok(Exploration::Found {
        topic: graph.topic,
        related_count,
        payload,
        scaling,
    })
}
