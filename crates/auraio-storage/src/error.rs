//! Storage error types.
//!
//! Every variant carries the backend's reason so the failure can be
//! diagnosed from the server log alone. Lead field values are never
//! included.

/// Errors that can occur while persisting a lead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to connect to or initialize the backend.
    #[error("failed to open lead store at '{target}': {reason}")]
    Open { target: String, reason: String },

    /// The backend could not be reached for this operation.
    #[error("lead store unavailable: {reason}")]
    Unavailable { reason: String },

    /// The backend rejected the insert (constraint violation, bad data).
    #[error("failed to write lead: {reason}")]
    Write { reason: String },
}
