use anyhow::{Context, Result};

/// 5 MiB, the editor's upload ceiling for a single image.
const DEFAULT_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Per-image ceiling for embedded photos and project images.
    pub max_image_bytes: usize,
    /// Template used when a record references an unknown template id.
    pub default_template_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_image_bytes: match std::env::var("MAX_IMAGE_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("MAX_IMAGE_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_IMAGE_BYTES,
            },
            default_template_id: std::env::var("DEFAULT_TEMPLATE_ID")
                .unwrap_or_else(|_| crate::portfolio::models::DEFAULT_TEMPLATE_ID.to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
            default_template_id: crate::portfolio::models::DEFAULT_TEMPLATE_ID.to_string(),
        }
    }
}
