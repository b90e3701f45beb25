//! Server settings
//!
//! Loaded from (highest precedence first):
//! 1. Environment variables prefixed with `HELPING_HAND_`
//! 2. `helping-hand.toml` in the working directory, if present
//! 3. Built-in defaults

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional settings file name
pub const SETTINGS_FILE: &str = "helping-hand.toml";

const ENV_PREFIX: &str = "HELPING_HAND";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub bind_address: String,
    /// Directory holding `config.json` and `stories.json`
    pub data_dir: PathBuf,
    /// Defaults to `<data_dir>/submissions`
    pub submissions_dir: Option<PathBuf>,
    pub static_dir: PathBuf,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("data_dir", DEFAULT_DATA_DIR)?
            .set_default("static_dir", DEFAULT_STATIC_DIR)?
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }

    pub fn submissions_dir(&self) -> PathBuf {
        self.submissions_dir
            .clone()
            .unwrap_or_else(|| self.data_dir.join("submissions"))
    }
}
