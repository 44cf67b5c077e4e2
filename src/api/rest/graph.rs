//! Graph endpoints - search a topic and size its nodes

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::session::SessionView;
use crate::types::SizeMethod;

/// Query parameters for GET /api/graph
#[derive(Debug, Deserialize)]
pub struct GraphParams {
    /// Free-text topic search
    pub q: Option<String>,
    /// Sizing method label (e.g. "Number of stories")
    pub size_by: Option<String>,
}

/// GET /api/graph - Ego network of the searched topic
///
/// A blank or unknown topic returns the previously shown graph along with
/// the `no_selection`/`not_found` status.
pub async fn get_graph(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GraphParams>,
) -> impl IntoResponse {
    let method = match params.size_by.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(label) => match label.parse::<SizeMethod>() {
            Ok(method) => Some(method),
            Err(e) => {
                debug!("Rejecting size_by '{}'", label);
                return (StatusCode::BAD_REQUEST, Json(ApiError::bad_request(e))).into_response();
            }
        },
    };

    match state.session.explore(params.q.as_deref(), method) {
        Ok(view) => {
            debug!("Graph query {:?}: {:?}", params.q, view.status);
            (StatusCode::OK, Json(ApiResponse::<SessionView>::new(view))).into_response()
        }
        Err(e) => {
            warn!("Graph query {:?} failed: {}", params.q, e);
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}

/// One entry of GET /api/size-methods
#[derive(Debug, Serialize)]
pub struct SizeMethodInfo {
    pub label: &'static str,
    pub attribute: &'static str,
}

/// GET /api/size-methods - Options of the "size topics by" dropdown
pub async fn list_size_methods() -> impl IntoResponse {
    let methods: Vec<SizeMethodInfo> = SizeMethod::ALL
        .into_iter()
        .map(|m| SizeMethodInfo {
            label: m.label(),
            attribute: m.attribute(),
        })
        .collect();

    Json(ApiResponse::new(methods))
}
