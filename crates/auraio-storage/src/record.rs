//! Lead records as seen by the store.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A normalized lead, ready to insert.
///
/// Optional text fields are `None` rather than empty strings; `updates` is
/// already a plain boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub website_type: Option<String>,
    pub budget: Option<String>,
    pub goals: Option<String>,
    pub timeline: Option<String>,
    pub updates: bool,
}

/// A stored lead. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "postgres-backend", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub website_type: Option<String>,
    pub budget: Option<String>,
    pub goals: Option<String>,
    pub timeline: Option<String>,
    pub updates: bool,
    pub created_at: DateTime<Utc>,
}

impl Lead {
    /// Build a stored record from a new lead and the store-assigned fields.
    #[must_use]
    pub fn from_new(id: Uuid, created_at: DateTime<Utc>, lead: NewLead) -> Self {
        let NewLead {
            name,
            email,
            company,
            website_type,
            budget,
            goals,
            timeline,
            updates,
        } = lead;

        Self {
            id,
            name,
            email,
            company,
            website_type,
            budget,
            goals,
            timeline,
            updates,
            created_at,
        }
    }
}
