//! Configuration for fringe
//!
//! Read from `fringe.toml` (or an explicit `--config` path). Every field is
//! optional; missing fields fall back to the defaults in [`types`].

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{FringeError, Result};

pub use types::{FringeConfig, MakeConfig, TripConfig, CONFIG_FILE_NAME, CONFIG_FORMAT_VERSION};

impl FringeConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| FringeError::io_operation("read", path.display(), e))?;
        let config: FringeConfig = toml::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            tracing::warn!(
                version = config.version,
                supported = CONFIG_FORMAT_VERSION,
                "configuration is newer than this build understands"
            );
        }

        Ok(config)
    }

    /// Load `fringe.toml` from `dir` if present, otherwise the defaults
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading configuration");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}
