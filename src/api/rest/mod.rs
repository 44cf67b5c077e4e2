//! REST API module for HTTP endpoints
//!
//! Provides the JSON endpoints the dashboard renders from:
//! - `GET /api/graph` - Ego network of a searched topic
//! - `GET /api/size-methods` - Node sizing methods
//! - `GET /api/topics/popular` - Ranked popular-topics table
//! - `GET /api/topics/:name` - Single topic
//! - `GET /api/stats` - Dataset statistics

pub mod graph;
pub mod topics;

use serde::{Deserialize, Serialize};

/// Common pagination parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    /// Maximum number of items to return (default: page size, max: 1000)
    pub limit: Option<usize>,
    /// Number of items to skip
    #[serde(default)]
    pub offset: usize,
}

impl PaginationParams {
    /// Normalize limit to max 1000
    pub fn normalized_limit(&self, default: usize) -> usize {
        self.limit.unwrap_or(default).min(1000)
    }
}

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Total count (for paginated responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, total: None }
    }

    pub fn with_total(data: T, total: usize) -> Self {
        Self {
            data,
            total: Some(total),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}
