//! AuraIO onboarding HTTP server.
//!
//! Wires together the core library, the lead store, and HTTP routes into a
//! running Axum server. Serves the landing page at `/` and the intake API at
//! `/api/leads`.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
