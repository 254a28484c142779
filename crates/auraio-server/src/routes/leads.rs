//! Lead intake routes.
//!
//! - `GET  /api/leads` — reachability check, always `{"ok": true}`
//! - `POST /api/leads` — validate and record a lead, `201 {"ok": true, "id": ...}`

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

/// Response for the reachability check.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub ok: bool,
}

/// Response for a recorded lead.
#[derive(Debug, Serialize)]
pub struct LeadCreatedResponse {
    pub ok: bool,
    pub id: Uuid,
}

/// Upper bound on intake requests handled at once.
const MAX_CONCURRENT_SUBMISSIONS: usize = 64;

/// Build the leads router.
pub fn router(max_body_bytes: usize) -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/leads", get(ping).post(create_lead))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_SUBMISSIONS))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}

/// `GET /api/leads` — confirm the endpoint is reachable.
async fn ping() -> Json<PingResponse> {
    Json(PingResponse { ok: true })
}

/// `POST /api/leads` — record a lead.
///
/// The body is read as raw bytes and parsed here rather than through the
/// `Json` extractor, so a missing `Content-Type` is accepted and malformed
/// JSON gets the same `{"error"}` shape as every other failure.
async fn create_lead(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<LeadCreatedResponse>), AppError> {
    let lead = state.intake.submit_body(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(LeadCreatedResponse {
            ok: true,
            id: lead.id,
        }),
    ))
}
