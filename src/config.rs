// SPDX-License-Identifier: GPL-3.0-only

use crate::constants::{APP_DIR_NAME, DEFAULT_SEARCH_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL used when a scanned payload is not itself a URL
    pub search_url: String,
    /// Allow clearing the captured photo history
    ///
    /// The barcode history always has a clear operation. Photo history
    /// clearing is opt-in and only reachable through the CLI, never
    /// from a live session.
    pub allow_photo_clear: bool,
    /// Override for the history data directory (default: platform data dir)
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            allow_photo_clear: false,
            data_dir: None,
        }
    }
}

impl Config {
    /// Path of the persisted configuration file
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("config.json"))
    }

    /// Load the configuration from the default location
    pub fn load() -> Self {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load the configuration from `path`, falling back to defaults
    ///
    /// A missing file is normal on first run. A corrupt file is logged
    /// and replaced by defaults rather than failing startup.
    pub fn load_from(path: &Path) -> Self {
        let Ok(raw) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Corrupt config, using defaults");
                Self::default()
            }
        }
    }

    /// Persist the configuration to the default location
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = Self::path() else {
            return Err(std::io::Error::other("no config directory available"));
        };
        self.save_to(&path)
    }

    /// Persist the configuration as pretty-printed JSON at `path`
    ///
    /// Parent directories are created as needed.
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, raw)
    }
}
