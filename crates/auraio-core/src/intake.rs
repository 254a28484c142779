//! Lead intake service.
//!
//! Validates a submission and forwards the normalized record to the
//! persistence collaborator. The store is called at most once per
//! submission and never on a validation failure. Failures are not retried.

use std::sync::Arc;

use auraio_storage::{Lead, LeadStore};

use crate::error::IntakeError;
use crate::lead::LeadSubmission;

/// Validates and persists leads.
#[derive(Clone)]
pub struct LeadIntake {
    store: Arc<dyn LeadStore>,
}

impl LeadIntake {
    /// Create an intake service backed by the given store.
    #[must_use]
    pub fn new(store: Arc<dyn LeadStore>) -> Self {
        Self { store }
    }

    /// Parse, validate and persist a raw request body.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Validation`] for a malformed or incomplete
    /// body and [`IntakeError::Store`] if the store rejects the insert.
    pub async fn submit_body(&self, body: &[u8]) -> Result<Lead, IntakeError> {
        let submission = LeadSubmission::from_slice(body)?;
        self.submit(submission).await
    }

    /// Validate and persist an already-parsed submission.
    ///
    /// # Errors
    ///
    /// Same as [`submit_body`](Self::submit_body), minus JSON parsing.
    pub async fn submit(&self, submission: LeadSubmission) -> Result<Lead, IntakeError> {
        let new_lead = submission.validate()?;
        let lead = self.store.create(new_lead).await?;
        tracing::info!(lead_id = %lead.id, updates = lead.updates, "lead recorded");
        Ok(lead)
    }
}

impl std::fmt::Debug for LeadIntake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeadIntake").finish_non_exhaustive()
    }
}
