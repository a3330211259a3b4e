//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use till_core::ReceiptError;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// A validation failure or unknown ID reported by the core engine.
    #[error(transparent)]
    Receipt(#[from] ReceiptError),

    /// The path segment is not a well-formed receipt ID, so nothing can be
    /// stored under it.
    #[error("receipt not found: {0}")]
    UnknownReceipt(String),

    /// The request body is not valid JSON for a receipt.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl GatewayError {
    /// HTTP status reported for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            // Unknown IDs are client errors here, never 404.
            GatewayError::Receipt(_)
            | GatewayError::UnknownReceipt(_)
            | GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
