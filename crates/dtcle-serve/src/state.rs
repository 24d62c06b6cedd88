//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::fonts::DisplayFonts;

/// Shared application state available to all request handlers.
///
/// Deliberately cache-free: the snapshot is re-read on every request so a
/// scraper update shows up immediately. Only immutable startup resources
/// (configuration, the font database) live here.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,

    /// Font faces for preview-image generation.
    pub fonts: DisplayFonts,
}

impl AppState {
    /// Create a new application state from configuration.
    pub fn new(config: Config) -> Self {
        let fonts = DisplayFonts::load(&config.assets_dir);

        tracing::info!(
            bundled_fonts = fonts.is_bundled(),
            "application state initialized"
        );

        Self {
            config: Arc::new(config),
            fonts,
        }
    }
}
