//! Wire types for the intake endpoint.

use serde::Deserialize;

/// Body of a `201 Created` answer to a submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LeadReceipt {
    pub ok: bool,
    /// Identifier the server assigned to the recorded lead.
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PingResponse {
    pub ok: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: Option<String>,
}
