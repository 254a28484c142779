//! Error types for the AuraIO client.

/// All errors that can occur when talking to the intake endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Invalid client configuration.
    #[error("auraio config error: {0}")]
    Config(String),

    /// The server answered with a non-success status.
    #[error("auraio API error {status_code}: {message}")]
    Api {
        /// HTTP status code.
        status_code: u16,
        /// The response's `error` field, else the status reason.
        message: String,
    },

    /// A success status whose body reported `ok: false`.
    #[error("auraio server did not confirm the submission")]
    Unconfirmed,

    /// Request timed out.
    #[error("auraio request timed out")]
    Timeout,

    /// Network or HTTP client error.
    #[error("auraio network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not the expected JSON.
    #[error("auraio json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Text to show the visitor after a failed submission.
    ///
    /// API errors yield the server's message alone; transport errors yield
    /// their own description.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Config(msg) => msg.clone(),
            Self::Unconfirmed => "submission was not confirmed".to_owned(),
            Self::Timeout => "request timed out".to_owned(),
            Self::Network(err) => err.to_string(),
            Self::Json(err) => err.to_string(),
        }
    }
}
