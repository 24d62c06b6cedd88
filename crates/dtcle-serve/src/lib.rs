//! dtcle-serve — the HTTP face of "Is downtown Cleveland busy today?".
//!
//! A small axum service that re-reads the scraper's status snapshot on
//! every request and renders it three ways:
//!
//! - `GET /` — the answer as an HTML page
//! - `GET /og.png` — a 1200×630 social preview image
//! - `GET /favicon` (and `/favicon.ico`) — a tier-colored status icon
//!
//! # Architecture
//!
//! - **Status**: each request reads `status.json` fresh; a missing or
//!   malformed file is a first-class "absent" state, not an error
//! - **Classify**: `dtcle_core::Severity` is the single source of the
//!   event-count thresholds and display tokens, so the page, the image,
//!   and the icon can never disagree
//! - **Render**: HTML via maud (compile-time templates, automatic
//!   escaping), preview PNG via an in-memory SVG rasterized with resvg
//!
//! Every surface degrades to a fallback (apology page, pre-rendered image,
//! quiet-tier icon) rather than failing the request.

pub mod config;
pub mod error;
pub mod fonts;
pub mod render;
pub mod routes;
pub mod state;
pub mod status;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
