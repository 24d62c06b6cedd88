//! Route definitions for the status service.
//!
//! ## Routes
//!
//! - `GET /` - The status page
//! - `GET /og.png` - Social preview image (1200×630 PNG)
//! - `GET /favicon`, `GET /favicon.ico` - Tier status icon
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions

mod favicon;
mod health;
mod og;
mod page;

use axum::Router;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::state::AppState;

/// Build the complete status service router.
///
/// `/favicon.ico` is the conventional root icon path browsers request
/// unprompted; it resolves to the same handler as `/favicon`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::status_page))
        .route("/og.png", get(og::preview_image))
        .route("/favicon", get(favicon::favicon))
        .route("/favicon.ico", get(favicon::favicon))
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .with_state(state)
}

/// Serve robots.txt allowing all crawlers.
///
/// Link-preview bots need to fetch the page and the OG image.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nAllow: /\n",
    )
}

/// Build an HTTP response with PNG content and the shared one-hour cache
/// policy.
pub(crate) fn png_response(png_bytes: Vec<u8>) -> Response {
    let headers = [
        (header::CONTENT_TYPE, HeaderValue::from_static("image/png")),
        (
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600"),
        ),
    ];

    (StatusCode::OK, headers, png_bytes).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_response_headers() {
        let response = png_response(vec![0x89, b'P', b'N', b'G']);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/png"
        );
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=3600"
        );
    }
}
