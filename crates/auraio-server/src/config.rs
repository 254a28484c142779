//! Server configuration for AuraIO onboarding.
//!
//! Loads configuration from environment variables with sensible defaults.
//! All settings can be overridden via `AURAIO_*` environment variables.

use std::net::SocketAddr;

/// Default request body limit for the intake endpoint (16 KiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;

const DEFAULT_PORT: u16 = 3000;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Where leads are persisted.
    pub storage_backend: StorageBackendType,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
    /// Maximum accepted size of a lead submission body, in bytes.
    pub max_body_bytes: usize,
}

/// Supported lead store backends.
#[derive(Clone, PartialEq, Eq)]
pub enum StorageBackendType {
    /// In-memory (development only, leads lost on restart).
    Memory,
    /// PostgreSQL.
    Postgres { url: String, max_connections: u32 },
}

impl std::fmt::Debug for StorageBackendType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => f.write_str("Memory"),
            Self::Postgres {
                max_connections, ..
            } => f
                .debug_struct("Postgres")
                .field("url", &"[redacted]")
                .field("max_connections", max_connections)
                .finish(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT` — port to bind on (PaaS convention, binds to `0.0.0.0`)
    /// - `AURAIO_BIND_ADDR` — full bind address (overrides `PORT`, default: `127.0.0.1:3000`)
    /// - `AURAIO_STORAGE` — `memory` or `postgres` (default: `memory`)
    /// - `DATABASE_URL` — PostgreSQL connection string (used when `AURAIO_STORAGE=postgres`)
    /// - `AURAIO_DB_MAX_CONNECTIONS` — pool size (default: `5`)
    /// - `AURAIO_LOG_LEVEL` — log filter (default: `info`)
    /// - `AURAIO_MAX_BODY_BYTES` — intake body limit (default: `16384`)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default_addr = SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT));

        // Priority: AURAIO_BIND_ADDR > PORT > default 127.0.0.1:3000
        let bind_addr = if let Some(addr) = lookup("AURAIO_BIND_ADDR") {
            addr.parse().unwrap_or(default_addr)
        } else if let Some(port_str) = lookup("PORT") {
            let port: u16 = port_str.parse().unwrap_or(DEFAULT_PORT);
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            default_addr
        };

        let storage_backend = match lookup("AURAIO_STORAGE")
            .unwrap_or_else(|| "memory".to_owned())
            .to_lowercase()
            .as_str()
        {
            "postgres" | "postgresql" => StorageBackendType::Postgres {
                url: lookup("DATABASE_URL")
                    .unwrap_or_else(|| "postgres://localhost/auraio".to_owned()),
                max_connections: lookup("AURAIO_DB_MAX_CONNECTIONS")
                    .and_then(|v| v.parse().ok())
                    .filter(|n| *n > 0)
                    .unwrap_or(5),
            },
            _ => StorageBackendType::Memory,
        };

        let log_level = lookup("AURAIO_LOG_LEVEL").unwrap_or_else(|| "info".to_owned());

        let max_body_bytes = lookup("AURAIO_MAX_BODY_BYTES")
            .and_then(|v| v.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_BODY_BYTES);

        Self {
            bind_addr,
            storage_backend,
            log_level,
            max_body_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg.bind_addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(cfg.storage_backend, StorageBackendType::Memory);
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn port_binds_all_interfaces() {
        let cfg = config(&[("PORT", "8080")]);
        assert_eq!(cfg.bind_addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
    }

    #[test]
    fn bind_addr_overrides_port() {
        let cfg = config(&[("PORT", "8080"), ("AURAIO_BIND_ADDR", "127.0.0.1:9000")]);
        assert_eq!(cfg.bind_addr, SocketAddr::from(([127, 0, 0, 1], 9000)));
    }

    #[test]
    fn invalid_bind_addr_falls_back_to_default() {
        let cfg = config(&[("AURAIO_BIND_ADDR", "not-an-addr")]);
        assert_eq!(cfg.bind_addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
    }

    #[test]
    fn postgres_backend_reads_database_url() {
        let cfg = config(&[
            ("AURAIO_STORAGE", "Postgres"),
            ("DATABASE_URL", "postgres://db/leads"),
            ("AURAIO_DB_MAX_CONNECTIONS", "12"),
        ]);
        assert_eq!(
            cfg.storage_backend,
            StorageBackendType::Postgres {
                url: "postgres://db/leads".to_owned(),
                max_connections: 12,
            }
        );
    }

    #[test]
    fn debug_output_redacts_database_url() {
        let cfg = config(&[
            ("AURAIO_STORAGE", "postgres"),
            ("DATABASE_URL", "postgres://user:hunter2@db/leads"),
        ]);
        let rendered = format!("{:?}", cfg.storage_backend);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[redacted]"));
    }

    #[test]
    fn zero_body_limit_is_ignored() {
        let cfg = config(&[("AURAIO_MAX_BODY_BYTES", "0")]);
        assert_eq!(cfg.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }
}
