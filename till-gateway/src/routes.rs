//! Axum route handlers for the receipt API.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use till_core::{ReceiptId, ReceiptPayload, ReceiptProcessor};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::GatewayError;

// ── Shared state ─────────────────────────────────────────────────────────────

type Processor = Arc<ReceiptProcessor>;

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

// ── Router ───────────────────────────────────────────────────────────────────

/// Build the application router around the given processor.
pub fn create_router(processor: Processor) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .route("/receipts/{id}/breakdown", get(get_breakdown))
        .route("/health", get(health))
        .with_state(processor)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// `GET /health`: liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `POST /receipts/process`: validate and store a receipt, returning its ID.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if the body is not receipt JSON,
/// or [`GatewayError::Receipt`] with the first validation failure.
pub async fn process_receipt(
    State(processor): State<Processor>,
    body: Result<Json<ReceiptPayload>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    let Json(payload) = body.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    let id = processor.process(&payload)?;
    Ok(Json(ProcessResponse { id }))
}

/// `GET /receipts/{id}/points`: points awarded for a stored receipt.
///
/// # Errors
/// Returns [`GatewayError::UnknownReceipt`] or [`GatewayError::Receipt`] if
/// no receipt is stored under `id`.
pub async fn get_points(
    State(processor): State<Processor>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let points = processor.points(parse_id(id)?)?;
    Ok(Json(PointsResponse { points }))
}

/// `GET /receipts/{id}/breakdown`: per-rule contributions for a stored receipt.
///
/// # Errors
/// Same as [`get_points`].
pub async fn get_breakdown(
    State(processor): State<Processor>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let breakdown = processor.breakdown(parse_id(id)?)?;
    Ok(Json(breakdown))
}

fn parse_id(raw: String) -> Result<ReceiptId, GatewayError> {
    raw.parse().map_err(|_| GatewayError::UnknownReceipt(raw))
}
