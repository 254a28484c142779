//! Error types for `auraio-core`.
//!
//! Validation messages are user-facing: the HTTP layer returns them
//! verbatim in the `error` field. Store errors are not: they are logged and
//! replaced by a generic message before reaching the client.

use auraio_storage::StoreError;

/// The body did not match the lead intake schema.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// `name` or `email` is missing, null, empty, or not a string.
    #[error("name and email are required")]
    MissingRequired,

    /// An optional text field held something other than a string or null.
    #[error("{field} must be a string")]
    NotAString { field: &'static str },

    /// The body was not parseable JSON.
    #[error("invalid JSON body")]
    MalformedJson(#[source] serde_json::Error),
}

/// Errors from submitting a lead through [`LeadIntake`](crate::intake::LeadIntake).
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    /// The submission was rejected before reaching the store.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The persistence collaborator failed.
    #[error("lead store error: {0}")]
    Store(#[from] StoreError),
}

/// A sanity constraint on the static marketing content does not hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("at least one process step is required")]
    NoSteps,

    #[error("process step {index} has an empty title")]
    EmptyStepTitle { index: usize },

    #[error("duplicate process step title '{title}'")]
    DuplicateStepTitle { title: String },

    #[error("at least one pricing tier is required")]
    NoTiers,

    #[error("pricing tier {index} has an empty name")]
    EmptyTierName { index: usize },

    #[error("pricing tier {index} has an empty label")]
    EmptyTierLabel { index: usize },

    #[error("duplicate pricing tier label '{label}'")]
    DuplicateTierLabel { label: String },

    #[error("pricing tier '{label}' has no bullets")]
    NoBullets { label: String },

    #[error("pricing tier '{label}' has an empty bullet")]
    EmptyBullet { label: String },

    #[error("pricing tier '{label}' price '{price}' is neither a euro amount nor custom")]
    InvalidPrice { label: String, price: String },

    #[error("{count} pricing tiers are featured, at most one is allowed")]
    MultipleFeatured { count: usize },

    #[error("at least one FAQ entry is required")]
    NoFaqs,

    #[error("FAQ entry {index} has an empty question or answer")]
    EmptyFaq { index: usize },
}
