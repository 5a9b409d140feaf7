//! CLI configuration.
//!
//! Settings live in a small JSON file. `--config` points at one explicitly;
//! otherwise `<config dir>/tangle/config.json` is used when it exists, and
//! built-in defaults apply when it does not.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tangle_graph::HOTSPOT_COUNT;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// User-tunable defaults for the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Depth used by `children` when `--depth` is not given.
    pub default_depth: usize,

    /// Number of vertices `hotspots` prints when `--limit` is not given.
    pub hotspot_limit: usize,

    /// Colorize output other than tree and vertex lines.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_depth: 3,
            hotspot_limit: HOTSPOT_COUNT,
            color: true,
        }
    }
}

impl Config {
    /// The per-user config location, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tangle").join("config.json"))
    }

    /// Loads the explicit config if given, else the per-user file if present,
    /// else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Reads a config file. Missing keys take their default.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Writes this config as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, text).map_err(io_err)
    }
}
