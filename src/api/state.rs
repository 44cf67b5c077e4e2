//! Shared application state for HTTP handlers

use std::sync::Arc;

use crate::dataset::Dataset;
use crate::pipeline::{summarize, SizeConfig};
use crate::session::GraphSession;
use crate::types::{MedialResult, RankedRow};

/// State shared by every request
pub struct AppState {
    /// Search/sizing session with the last good graph
    pub session: GraphSession,

    /// Popular-topics table, computed once per dataset load
    pub summary: Vec<RankedRow>,

    /// Default rows per page of the popular-topics table
    pub page_size: usize,
}

impl AppState {
    /// Build the state for a loaded dataset
    pub fn new(
        dataset: Arc<Dataset>,
        sizes: SizeConfig,
        initial_topic: &str,
        page_size: usize,
    ) -> MedialResult<Self> {
        let summary = summarize(&dataset);
        let session = GraphSession::new(dataset, sizes, initial_topic)?;

        Ok(Self {
            session,
            summary,
            page_size,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        self.session.dataset()
    }

    /// Ranked row of a topic by exact name
    pub fn ranked(&self, name: &str) -> Option<&RankedRow> {
        self.summary.iter().find(|row| row.name == name)
    }
}
