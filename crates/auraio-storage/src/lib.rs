//! Lead persistence for AuraIO onboarding.
//!
//! This crate defines the [`LeadStore`] trait, the single create-record
//! operation the intake endpoint depends on. It knows nothing about HTTP,
//! request bodies, or validation: callers hand it an already-normalized
//! [`NewLead`] and get back the stored [`Lead`] with its generated id.
//!
//! Two implementations are provided:
//!
//! - [`MemoryLeadStore`] — in-memory, for development and tests
//! - [`PostgresLeadStore`] — backed by PostgreSQL (feature `postgres-backend`)

mod error;
mod memory;
#[cfg(feature = "postgres-backend")]
mod postgres_backend;
mod record;

pub use error::StoreError;
pub use memory::MemoryLeadStore;
#[cfg(feature = "postgres-backend")]
pub use postgres_backend::PostgresLeadStore;
pub use record::{Lead, NewLead};

/// A store that durably records leads and issues their identifiers.
///
/// Records are append-only: there is no update or delete. Concurrent calls
/// to [`create`](LeadStore::create) must each produce an independent record.
///
/// Implementations must be safe to share across async tasks (`Send + Sync`).
#[async_trait::async_trait]
pub trait LeadStore: Send + Sync + 'static {
    /// Insert a new lead and return the stored record.
    ///
    /// The store assigns `id` and `created_at`. Exactly one record exists
    /// after a successful call; none is left behind on error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the backend rejects the insert, or
    /// [`StoreError::Unavailable`] if it cannot be reached.
    async fn create(&self, lead: NewLead) -> Result<Lead, StoreError>;
}
