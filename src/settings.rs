//! Run settings layered from built-in defaults, an optional `igra.toml`
//! (or an explicit file) and `IGRA_*` environment variables.

use crate::error::Result;
use crate::processors::ConversionConfig;
use crate::utils::constants::{
    DEFAULT_DATA_URL, DEFAULT_OUTPUT_DIR, DEFAULT_SETTINGS_FILE, DEFAULT_STATIONS_URL,
    SURFACE_LEVEL,
};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Source level code; 9999 selects surface observations
    pub level: i32,
    pub output_dir: PathBuf,
    pub data_url: String,
    pub stations_url: String,
}

impl Settings {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let builder = Config::builder()
            .set_default("level", SURFACE_LEVEL as i64)?
            .set_default("output_dir", DEFAULT_OUTPUT_DIR)?
            .set_default("data_url", DEFAULT_DATA_URL)?
            .set_default("stations_url", DEFAULT_STATIONS_URL)?;

        let builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_SETTINGS_FILE).required(false)),
        };

        let settings: Settings = builder
            .add_source(Environment::with_prefix("IGRA"))
            .build()?
            .try_deserialize()?;

        debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    /// Validated conversion parameters for these settings
    pub fn conversion_config(&self) -> Result<ConversionConfig> {
        ConversionConfig::from_level_code(self.level)
    }
}
