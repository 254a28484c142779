//! PostgreSQL lead store.
//!
//! Stores leads in a single `leads` table. Ids are generated by the
//! database (`gen_random_uuid()`), timestamps by `now()`.
//!
//! Feature-gated behind `postgres-backend`. Uses `sqlx` with the Tokio
//! runtime for fully async operations.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::{Lead, LeadStore, NewLead, StoreError};

/// A lead store backed by PostgreSQL.
///
/// Thread-safe via `PgPool` (connection pool).
///
/// # Examples
///
/// ```no_run
/// # use auraio_storage::PostgresLeadStore;
/// # #[tokio::main]
/// # async fn main() {
/// let store = PostgresLeadStore::connect("postgres://localhost/auraio", 5).await.unwrap();
/// # }
/// ```
#[derive(Clone)]
pub struct PostgresLeadStore {
    pool: PgPool,
}

impl std::fmt::Debug for PostgresLeadStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresLeadStore")
            .field("pool", &"[PgPool]")
            .finish_non_exhaustive()
    }
}

impl PostgresLeadStore {
    /// Connect to PostgreSQL and run the initial migration.
    ///
    /// Creates the `leads` table if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Open`] if the connection or migration fails.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| StoreError::Open {
                target: "[redacted]".to_owned(),
                reason: e.to_string(),
            })?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS leads (\
                id           UUID        PRIMARY KEY DEFAULT gen_random_uuid(), \
                name         TEXT        NOT NULL, \
                email        TEXT        NOT NULL, \
                company      TEXT, \
                website_type TEXT, \
                budget       TEXT, \
                goals        TEXT, \
                timeline     TEXT, \
                updates      BOOLEAN     NOT NULL DEFAULT FALSE, \
                created_at   TIMESTAMPTZ NOT NULL DEFAULT now()\
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Open {
            target: "leads".to_owned(),
            reason: format!("migration failed: {e}"),
        })?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl LeadStore for PostgresLeadStore {
    async fn create(&self, lead: NewLead) -> Result<Lead, StoreError> {
        let record = sqlx::query_as::<_, Lead>(
            r"INSERT INTO leads (name, email, company, website_type, budget, goals, timeline, updates)
              VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
              RETURNING id, name, email, company, website_type, budget, goals, timeline, updates, created_at",
        )
        .bind(&lead.name)
        .bind(&lead.email)
        .bind(&lead.company)
        .bind(&lead.website_type)
        .bind(&lead.budget)
        .bind(&lead.goals)
        .bind(&lead.timeline)
        .bind(lead.updates)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        tracing::debug!(lead_id = %record.id, "lead stored in postgres");
        Ok(record)
    }
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => StoreError::Write {
            reason: db_err.to_string(),
        },
        conn_err @ (sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)) => {
            StoreError::Unavailable {
                reason: conn_err.to_string(),
            }
        }
        other => StoreError::Write {
            reason: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_failures_map_to_unavailable() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            StoreError::Unavailable { .. }
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolClosed),
            StoreError::Unavailable { .. }
        ));
    }

    #[test]
    fn other_failures_map_to_write() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            StoreError::Write { .. }
        ));
    }
}
