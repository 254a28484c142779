//! Shared application state for the AuraIO server.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`. It is read-only after construction.

use std::sync::Arc;

use auraio_core::content::LandingContent;
use auraio_core::intake::LeadIntake;
use auraio_storage::LeadStore;

use crate::config::DEFAULT_MAX_BODY_BYTES;

/// Shared application state passed to all HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Lead validation and persistence.
    pub intake: LeadIntake,
    /// Marketing content rendered on the landing page.
    pub content: LandingContent<'static>,
    /// Body limit for lead submissions, in bytes.
    pub max_body_bytes: usize,
}

impl AppState {
    /// State with the agency's content and the default body limit.
    #[must_use]
    pub fn new(store: Arc<dyn LeadStore>) -> Self {
        Self {
            intake: LeadIntake::new(store),
            content: LandingContent::agency(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// Override the intake body limit.
    #[must_use]
    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}
