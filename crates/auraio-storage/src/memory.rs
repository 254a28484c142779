//! In-memory lead store.
//!
//! Keeps every lead in a `Vec` behind a `RwLock`. Nothing is persisted;
//! all leads are lost when the process exits. Use this for local
//! development and for tests that need a real store without a database.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{Lead, LeadStore, NewLead, StoreError};

/// An in-memory lead store.
///
/// Clones share the same underlying records, so a test can keep one handle
/// and give another to the server.
///
/// # Examples
///
/// ```
/// # use auraio_storage::{LeadStore, MemoryLeadStore, NewLead};
/// # #[tokio::main]
/// # async fn main() {
/// let store = MemoryLeadStore::new();
/// let lead = store
///     .create(NewLead {
///         name: "Jane Doe".to_owned(),
///         email: "jane@x.com".to_owned(),
///         company: None,
///         website_type: None,
///         budget: None,
///         goals: None,
///         timeline: None,
///         updates: false,
///     })
///     .await
///     .unwrap();
/// assert_eq!(store.len().await, 1);
/// assert_eq!(lead.name, "Jane Doe");
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryLeadStore {
    leads: Arc<RwLock<Vec<Lead>>>,
}

impl MemoryLeadStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of leads recorded so far.
    pub async fn len(&self) -> usize {
        self.leads.read().await.len()
    }

    /// Whether no lead has been recorded yet.
    pub async fn is_empty(&self) -> bool {
        self.leads.read().await.is_empty()
    }

    /// Copy of every recorded lead, in insertion order.
    pub async fn snapshot(&self) -> Vec<Lead> {
        self.leads.read().await.clone()
    }
}

#[async_trait::async_trait]
impl LeadStore for MemoryLeadStore {
    async fn create(&self, lead: NewLead) -> Result<Lead, StoreError> {
        let record = Lead::from_new(Uuid::new_v4(), Utc::now(), lead);
        self.leads.write().await.push(record.clone());
        tracing::debug!(lead_id = %record.id, "lead stored in memory");
        Ok(record)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn jane() -> NewLead {
        NewLead {
            name: "Jane Doe".to_owned(),
            email: "jane@x.com".to_owned(),
            company: None,
            website_type: None,
            budget: None,
            goals: None,
            timeline: None,
            updates: false,
        }
    }

    #[tokio::test]
    async fn new_store_is_empty() {
        let store = MemoryLeadStore::new();
        assert!(store.is_empty().await);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn create_assigns_id_and_keeps_fields() {
        let store = MemoryLeadStore::new();
        let lead = store.create(jane()).await.unwrap();

        assert!(!lead.id.is_nil());
        assert_eq!(lead.email, "jane@x.com");
        assert_eq!(lead.company, None);
        assert!(!lead.updates);
        assert_eq!(store.snapshot().await, vec![lead]);
    }

    #[tokio::test]
    async fn identical_submissions_create_distinct_records() {
        let store = MemoryLeadStore::new();
        let first = store.create(jane()).await.unwrap();
        let second = store.create(jane()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn concurrent_creates_are_independent() {
        let store = MemoryLeadStore::new();
        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move { store.create(jane()).await }));
        }
        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), 16);
        assert_eq!(store.len().await, 16);
    }

    #[tokio::test]
    async fn clone_shares_records() {
        let store = MemoryLeadStore::new();
        let clone = store.clone();
        store.create(jane()).await.unwrap();
        assert_eq!(clone.len().await, 1);
    }

    #[tokio::test]
    async fn lead_serializes_with_camel_case_keys() {
        let store = MemoryLeadStore::new();
        let mut new_lead = jane();
        new_lead.website_type = Some("SaaS".to_owned());
        let lead = store.create(new_lead).await.unwrap();

        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["websiteType"], "SaaS");
        assert!(json["company"].is_null());
        assert!(json.get("createdAt").is_some());
    }
}
