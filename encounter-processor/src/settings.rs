use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Passage to process, by id or export filename.
    pub passage: String,
    pub passages_dir: PathBuf,
    pub vessel_data_dir: PathBuf,
    #[serde(default, with = "humantime_serde::option")]
    pub segment_gap: Option<std::time::Duration>,
    pub calculate_distances: Option<bool>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/encounter-processor").required(false))
            .add_source(
                Environment::with_prefix("ENCOUNTER_PROCESSOR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
