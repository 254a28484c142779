//! `LeadClient` implementation.

use auraio_core::form::{LeadForm, SubmissionOutcome};

use crate::error::ClientError;
use crate::types::{ApiErrorBody, LeadReceipt, PingResponse};
use crate::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, LeadClient};

const LEADS_PATH: &str = "/api/leads";

impl LeadClient {
    /// Create a client from `AURAIO_URL` or the default local address.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the resolved base URL is not HTTP(S).
    pub fn new() -> Result<Self, ClientError> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client talking to `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if `base_url` is not HTTP(S).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_config(ClientConfig {
            base_url: base_url.into(),
            ..Default::default()
        })
    }

    /// Create a client with full configuration.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the base URL is not HTTP(S), or
    /// `ClientError::Network` if the HTTP client cannot be built.
    #[allow(clippy::needless_pass_by_value)]
    pub fn with_config(cfg: ClientConfig) -> Result<Self, ClientError> {
        let base_url = first_non_empty(&[
            &cfg.base_url,
            &std::env::var("AURAIO_URL").unwrap_or_default(),
            DEFAULT_BASE_URL,
        ])
        .trim_end_matches('/')
        .to_owned();

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base URL must start with http:// or https://, got \"{base_url}\""
            )));
        }

        let timeout = if cfg.timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            cfg.timeout
        };

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("auraio-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self { base_url, client })
    }

    /// The base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check that the intake endpoint is reachable.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server answers with a
    /// non-success status.
    pub async fn ping(&self) -> Result<bool, ClientError> {
        let response = self
            .client
            .get(self.url(LEADS_PATH))
            .send()
            .await
            .map_err(transport_error)?;
        let body: PingResponse = read_json(response).await?;
        Ok(body.ok)
    }

    /// Submit the full form state once.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` for a non-success status (with the
    /// server's `error` text when present), a transport error if the server
    /// is unreachable, `ClientError::Json` if a success body is malformed, or
    /// `ClientError::Unconfirmed` if it reports `ok: false`.
    pub async fn submit(&self, form: &LeadForm) -> Result<LeadReceipt, ClientError> {
        let response = self
            .client
            .post(self.url(LEADS_PATH))
            .json(&form.to_payload())
            .send()
            .await
            .map_err(transport_error)?;
        let receipt: LeadReceipt = read_json(response).await?;
        if !receipt.ok {
            return Err(ClientError::Unconfirmed);
        }
        Ok(receipt)
    }

    /// Submit the form and apply the outcome to it.
    ///
    /// On success the form is reset and the outcome carries the new lead's
    /// id. On any failure the form is left as it was and the outcome carries
    /// the best available error text.
    pub async fn submit_form(&self, form: &mut LeadForm) -> SubmissionOutcome {
        let outcome = match self.submit(form).await {
            Ok(receipt) => SubmissionOutcome::Confirmed { id: receipt.id },
            Err(err) => {
                tracing::warn!(error = %err, "lead submission failed");
                let reason = err.reason();
                SubmissionOutcome::failed(&[Some(reason.as_str())])
            }
        };
        form.apply(&outcome);
        outcome
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn transport_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout
    } else {
        ClientError::Network(err)
    }
}

/// Decode a success body, or turn a failure status into `ClientError::Api`.
async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    let text = response.text().await.map_err(transport_error)?;

    if status.is_success() {
        return serde_json::from_str(&text).map_err(ClientError::Json);
    }

    // Most specific first: the body's `error`, then the status reason.
    let message = serde_json::from_str::<ApiErrorBody>(&text)
        .ok()
        .and_then(|body| body.error)
        .filter(|msg| !msg.trim().is_empty())
        .or_else(|| status.canonical_reason().map(str::to_owned))
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

    Err(ClientError::Api {
        status_code: status.as_u16(),
        message,
    })
}

fn first_non_empty(vals: &[&str]) -> String {
    vals.iter()
        .find(|v| !v.is_empty())
        .map(|v| (*v).to_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = LeadClient::with_base_url("http://localhost:3000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url(LEADS_PATH), "http://localhost:3000/api/leads");
    }

    #[test]
    fn non_http_base_url_is_a_config_error() {
        let err = LeadClient::with_base_url("ftp://example.com").unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn zero_timeout_uses_default() {
        let client = LeadClient::with_config(ClientConfig {
            base_url: "https://auraio.dev".to_owned(),
            timeout: Duration::ZERO,
        });
        assert!(client.is_ok());
    }

    #[test]
    fn first_non_empty_skips_blanks() {
        assert_eq!(first_non_empty(&["", "b", "c"]), "b");
        assert_eq!(first_non_empty(&["", ""]), "");
    }
}
