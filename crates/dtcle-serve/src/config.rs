//! Application configuration loaded from environment variables.

use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Path to the snapshot the scraper materializes.
    pub status_path: PathBuf,

    /// Directory holding the favicon variants, the fallback preview image,
    /// and the `fonts/` subdirectory.
    pub assets_dir: PathBuf,

    /// Base URL for this site (used in OG tags).
    pub base_url: String,

    /// Site name shown in page titles and OG tags.
    pub site_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All keys are optional, with local-development defaults:
    /// - `DTCLE_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `DTCLE_STATUS_PATH`: Snapshot path (default: "public/data/status.json")
    /// - `DTCLE_ASSETS_DIR`: Static assets directory (default: "public")
    /// - `DTCLE_BASE_URL`: Base URL for OG tags (default: "http://localhost:8080")
    /// - `DTCLE_SITE_NAME`: Site name (default: "Is downtown Cleveland busy today?")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("DTCLE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let status_path: PathBuf = std::env::var("DTCLE_STATUS_PATH")
            .unwrap_or_else(|_| "public/data/status.json".to_string())
            .into();

        let assets_dir: PathBuf = std::env::var("DTCLE_ASSETS_DIR")
            .unwrap_or_else(|_| "public".to_string())
            .into();

        let base_url = std::env::var("DTCLE_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .trim_end_matches('/')
            .to_string();

        let site_name = std::env::var("DTCLE_SITE_NAME")
            .unwrap_or_else(|_| "Is downtown Cleveland busy today?".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            status_path = %status_path.display(),
            assets_dir = %assets_dir.display(),
            base_url = %base_url,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            status_path,
            assets_dir,
            base_url,
            site_name,
        })
    }
}
