//! Screener configuration loaded from TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::Tab;

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "screenlab.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// User-tunable screener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenerConfig {
    /// Tab shown when no tab is given; also omitted from shared URLs.
    pub default_tab: Tab,

    /// Dataset file (JSON or CSV). `None` uses the bundled sample.
    pub dataset: Option<PathBuf>,

    /// Where user presets are persisted. `None` uses the platform config dir.
    pub presets_file: Option<PathBuf>,

    /// Cap on rows printed by the table renderer.
    pub max_rows: Option<usize>,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            default_tab: Tab::Overview,
            dataset: None,
            presets_file: None,
            max_rows: None,
        }
    }
}

impl ScreenerConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Defaults when `path` does not exist; a present but malformed file is
    /// still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// The presets file, falling back to `<config dir>/screenlab/presets.json`.
    pub fn presets_path(&self) -> Option<PathBuf> {
        self.presets_file
            .clone()
            .or_else(|| dirs::config_dir().map(|d| d.join("screenlab").join("presets.json")))
    }
}
