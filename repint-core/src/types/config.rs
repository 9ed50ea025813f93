//! repint configuration, stored in `repint.toml`.

use std::path::{Path, PathBuf};

use fs_err as fs;
use serde::{Deserialize, Serialize};

use crate::RepError;

/// Name of the configuration file searched for by [`Config::find`].
pub const CONFIG_FILE_NAME: &str = "repint.toml";

const DEFAULT_REGION_PREVIEW: usize = 6;

/// Runtime configuration for repeat vectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Upper bound on the number of elements a handle may materialize.
    /// `None` means unbounded.
    #[serde(default)]
    pub max_materialize_len: Option<u64>,

    /// How many buffer elements introspection reports.
    #[serde(default = "default_region_preview")]
    pub region_preview: usize,
}

fn default_region_preview() -> usize {
    DEFAULT_REGION_PREVIEW
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_materialize_len: None,
            region_preview: DEFAULT_REGION_PREVIEW,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, RepError> {
        let config: Config = toml::from_str(content)?;
        if config.max_materialize_len == Some(0) {
            return Err(RepError::config_error(
                "max_materialize_len must be positive when set",
            ));
        }
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RepError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Save configuration as TOML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RepError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        log::info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Search `start` and its ancestors for `repint.toml`.
    ///
    /// Returns `None` if no file is found, `Some(Err(..))` if one is found
    /// but cannot be loaded.
    pub fn find(start: impl AsRef<Path>) -> Option<Result<Self, RepError>> {
        let path = find_config_file(start.as_ref())?;
        Some(Self::load(path))
    }
}

fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(d) = dir {
        let candidate = d.join(CONFIG_FILE_NAME);
        log::debug!("Looking for config at {}", candidate.display());
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = d.parent();
    }
    None
}
