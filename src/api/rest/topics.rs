//! Topic endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use super::{ApiError, ApiResponse, PaginationParams};
use crate::api::state::AppState;
use crate::types::RankedRow;

/// GET /api/topics/popular - Ranked popular-topics table
pub async fn list_popular(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
) -> impl IntoResponse {
    let limit = params.normalized_limit(state.page_size);
    let rows: Vec<RankedRow> = state
        .summary
        .iter()
        .skip(params.offset)
        .take(limit)
        .cloned()
        .collect();

    Json(ApiResponse::with_total(rows, state.summary.len()))
}

/// Response for a single topic
#[derive(Debug, Serialize)]
pub struct TopicDetail {
    #[serde(flatten)]
    pub ranked: RankedRow,
    pub related_topics: Vec<String>,
}

/// GET /api/topics/:name - Single topic, matched like a search
pub async fn get_topic(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let topic = state.dataset().find(&name);
    let ranked = topic.and_then(|t| state.ranked(&t.name));

    match (topic, ranked) {
        (Some(topic), Some(ranked)) => {
            let detail = TopicDetail {
                ranked: ranked.clone(),
                related_topics: topic.related_topics.clone(),
            };
            (StatusCode::OK, Json(ApiResponse::new(detail))).into_response()
        }
        _ => {
            let error = ApiError::not_found(format!("Topic '{}' not found", name));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
    }
}

/// Response for GET /api/stats
#[derive(Debug, Serialize)]
pub struct DatasetStats {
    /// Number of topics that can be searched
    pub topic_count: usize,
    /// Nodes in the graph currently on display
    pub graph_node_count: usize,
    pub graph_edge_count: usize,
}

/// GET /api/stats - Dataset statistics
pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let graph = state.session.current();
    let stats = DatasetStats {
        topic_count: state.dataset().len(),
        graph_node_count: graph.node_count(),
        graph_edge_count: graph.edge_count(),
    };

    Json(ApiResponse::new(stats))
}
