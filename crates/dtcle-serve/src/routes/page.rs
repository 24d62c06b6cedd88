//! The root status page.

use axum::extract::State;
use maud::Markup;

use crate::render;
use crate::state::AppState;
use crate::status::read_snapshot;

/// Handle `GET /`.
///
/// Reads the snapshot fresh and renders the page; an unreadable snapshot
/// renders the apology page instead of an error.
pub async fn status_page(State(state): State<AppState>) -> Markup {
    let snapshot = read_snapshot(&state.config.status_path).await;

    render::page::render(
        &state.config.base_url,
        &state.config.site_name,
        snapshot.as_ref(),
    )
}
