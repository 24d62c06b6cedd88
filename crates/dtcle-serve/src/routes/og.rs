//! Social preview image endpoint.

use axum::extract::State;
use axum::response::Response;
use dtcle_core::Severity;

use crate::error::ServeError;
use crate::render::card;
use crate::routes::png_response;
use crate::state::AppState;
use crate::status::read_snapshot;

/// Handle `GET /og.png`.
///
/// With a readable snapshot the card is composed fresh. Without one, the
/// pre-rendered static fallback is preferred; only when that is also
/// missing do we generate the apology card. A generation failure is the
/// single path that surfaces as an error response.
pub async fn preview_image(State(state): State<AppState>) -> Result<Response, ServeError> {
    let snapshot = read_snapshot(&state.config.status_path).await;

    let Some(snapshot) = snapshot else {
        let fallback = state.config.assets_dir.join("og.png");
        match tokio::fs::read(&fallback).await {
            Ok(bytes) => return Ok(png_response(bytes)),
            Err(err) => {
                tracing::warn!(
                    path = %fallback.display(),
                    error = %err,
                    "static preview fallback unavailable, generating apology card"
                );
                let bytes = card::apology_card(&state.fonts)?;
                return Ok(png_response(bytes));
            }
        }
    };

    let severity = Severity::of(Some(&snapshot));
    let bytes = card::status_card(severity, &state.fonts)?;
    Ok(png_response(bytes))
}
