#![deny(missing_docs)]
//! Resolution of the config file used by the demo.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::config::{Config, ParseError};

/// Error type for [`read_config`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigReaderError {
    /// No config file found among the default locations
    #[error("No config file found")]
    NoConfigFile,
    /// Config parse error. See [`ParseError`]
    #[error("Parse error {0}")]
    Parse(#[from] ParseError),
}

/// Result type for [`read_config`]
pub type Result<T> = std::result::Result<T, ConfigReaderError>;

/// Locations searched, in order, when no explicit config file is given.
fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![];

    if let Some(base_dirs) = BaseDirs::new() {
        paths.push(base_dirs.config_dir().join("dense3d").join("config.toml"));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("config/config.toml"));
    }

    paths
}

/// Read the config at `path`, or the first existing file among the default
/// locations when `path` is `None`.
///
/// # Errors
///
/// Will return `Err` if an explicit `path` cannot be read or parsed, if the
/// file found cannot be parsed, or if no file is found.
pub fn read_config<P: AsRef<Path>>(path: Option<P>) -> Result<Config> {
    if let Some(path) = path {
        tracing::debug!(path = %path.as_ref().display(), "reading explicit config file");
        return Ok(Config::from_file(path)?);
    }

    read_first_existing(default_paths())
}

fn read_first_existing(paths: Vec<PathBuf>) -> Result<Config> {
    let Some(path) = paths.into_iter().find(|p| {
        tracing::debug!(path = %p.display(), exists = p.exists(), "probing config location");
        p.exists()
    }) else {
        return Err(ConfigReaderError::NoConfigFile);
    };

    tracing::debug!(path = %path.display(), "reading config file");
    Ok(Config::from_file(path)?)
}
