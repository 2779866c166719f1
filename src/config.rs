use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default search radius in miles when neither the config file nor
/// the command line sets one.
pub const DEFAULT_RADIUS_MILES: f64 = 50.0;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Google Maps JS API key for the rendered map page. Without one
    /// the map step is skipped.
    pub maps_api_key: Option<String>,
    /// Default search radius in miles.
    pub radius_miles: Option<f64>,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Load the config file if it exists, falling back to defaults and
    /// the GOOGLE_MAPS_API_KEY environment variable otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            Self::load_from_file(path)?
        } else {
            debug!("No config file at {}, using defaults", path.display());
            Self::default()
        };
        if config.maps_api_key.is_none() {
            config.maps_api_key = std::env::var("GOOGLE_MAPS_API_KEY").ok();
        }
        Ok(config)
    }
}
