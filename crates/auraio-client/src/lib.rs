//! AuraIO onboarding client for Rust.
//!
//! Submits project briefs to the lead intake endpoint and turns the result
//! into what the visitor is shown: a confirmation that resets the form, or a
//! failure message that keeps it.
//!
//! # Example
//!
//! ```rust,no_run
//! use auraio_client::LeadClient;
//! use auraio_core::form::{FormField, LeadForm};
//!
//! # async fn example() -> Result<(), auraio_client::ClientError> {
//! let client = LeadClient::new()?;
//! let mut form = LeadForm::new();
//! form.set(FormField::Name, "Jane Doe");
//! form.set(FormField::Email, "jane@x.com");
//!
//! let outcome = client.submit_form(&mut form).await;
//! tracing::info!(message = %outcome.message(), "brief submitted");
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod types;

pub use error::ClientError;
pub use types::LeadReceipt;

use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the [`LeadClient`].
///
/// Empty or zero fields fall back to the environment and then to defaults
/// when the client is built.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Server base URL. Falls back to `AURAIO_URL`, then `http://127.0.0.1:3000`.
    pub base_url: String,
    /// Request timeout. Default: 10 seconds.
    pub timeout: Duration,
}

/// Client for the lead intake endpoint.
///
/// Each submission is sent exactly once; failures are reported, never
/// retried.
#[derive(Debug, Clone)]
pub struct LeadClient {
    base_url: String,
    client: reqwest::Client,
}
