//! Tier status icon endpoint.

use std::path::Path;

use axum::extract::State;
use axum::response::Response;
use dtcle_core::Severity;

use crate::error::ServeError;
use crate::routes::png_response;
use crate::state::AppState;
use crate::status::read_snapshot;

/// Handle `GET /favicon` (and the conventional `/favicon.ico`).
///
/// The icon tracks today's tier. An absent snapshot classifies as the
/// quiet tier, so the site keeps a sensible icon while the scraper is
/// down.
pub async fn favicon(State(state): State<AppState>) -> Result<Response, ServeError> {
    let snapshot = read_snapshot(&state.config.status_path).await;
    let severity = Severity::of(snapshot.as_ref());

    let bytes = read_icon(&state.config.assets_dir, severity).await?;
    Ok(png_response(bytes))
}

/// Read the tier icon, falling back to the quiet-tier icon when the
/// tier-specific asset is unreadable.
async fn read_icon(assets_dir: &Path, severity: Severity) -> Result<Vec<u8>, ServeError> {
    let icon = assets_dir.join(format!("{}.png", severity.icon_stem()));
    match tokio::fs::read(&icon).await {
        Ok(bytes) => return Ok(bytes),
        Err(err) => {
            tracing::warn!(
                path = %icon.display(),
                error = %err,
                "tier favicon unavailable, falling back"
            );
        }
    }

    let fallback = assets_dir.join(format!("{}.png", Severity::None.icon_stem()));
    match tokio::fs::read(&fallback).await {
        Ok(bytes) => Ok(bytes),
        Err(err) => {
            tracing::error!(
                path = %fallback.display(),
                error = %err,
                "fallback favicon unavailable"
            );
            Err(ServeError::AssetMissing("Favicon".to_string()))
        }
    }
}
