//! Display font loading for preview-image generation.
//!
//! The bundled InterDisplay faces are an optional enhancement: when the
//! TTFs are missing or unreadable, rendering carries on with whatever the
//! host offers and degraded typography, never an error.

use std::path::Path;
use std::sync::Arc;

use resvg::usvg::fontdb;

/// Bundled display faces, relative to the assets `fonts/` subdirectory.
const DISPLAY_FACES: &[&str] = &["InterDisplay-Bold.ttf", "InterDisplay-Black.ttf"];

/// Family name carried by the bundled faces.
const DISPLAY_FAMILY: &str = "Inter Display";

/// Generic stack used when the bundled faces are unavailable.
const FALLBACK_FAMILY: &str = "sans-serif";

/// Font faces available to the SVG rasterizer.
#[derive(Clone)]
pub struct DisplayFonts {
    db: Arc<fontdb::Database>,
    bundled: bool,
}

impl DisplayFonts {
    /// Load the bundled display faces from `{assets_dir}/fonts`.
    ///
    /// System fonts are always registered as a backstop; `bundled` records
    /// whether at least one display face actually loaded.
    pub fn load(assets_dir: &Path) -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();

        let mut bundled = false;
        for face in DISPLAY_FACES {
            let path = assets_dir.join("fonts").join(face);
            match std::fs::read(&path) {
                Ok(bytes) => {
                    db.load_font_data(bytes);
                    bundled = true;
                }
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "display font unavailable, typography will degrade"
                    );
                }
            }
        }

        tracing::info!(faces = db.len(), bundled, "font database loaded");

        Self {
            db: Arc::new(db),
            bundled,
        }
    }

    /// Font family to name in generated SVG text.
    pub fn family(&self) -> &'static str {
        if self.bundled {
            DISPLAY_FAMILY
        } else {
            FALLBACK_FAMILY
        }
    }

    /// Whether the bundled display faces loaded.
    pub fn is_bundled(&self) -> bool {
        self.bundled
    }

    /// The font database, shared with `usvg::Options`.
    pub fn database(&self) -> Arc<fontdb::Database> {
        Arc::clone(&self.db)
    }
}
