//! Error types for the status service.
//!
//! Handlers resolve failures into fallback output themselves; these
//! variants are the last resort once even the fallback asset is gone.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Status service error type.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// A required static asset (and its fallback) could not be read.
    #[error("asset missing: {0}")]
    AssetMissing(String),

    /// Image composition failed outright.
    #[error("render failure: {0}")]
    Render(#[from] anyhow::Error),
}

impl IntoResponse for ServeError {
    fn into_response(self) -> Response {
        match self {
            Self::AssetMissing(what) => {
                tracing::error!(asset = %what, "asset missing with no fallback");
                (StatusCode::NOT_FOUND, format!("{what} not found")).into_response()
            }
            Self::Render(err) => {
                tracing::error!(error = %err, "preview image render failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"error": "Failed to generate preview image"})),
                )
                    .into_response()
            }
        }
    }
}
