//! Resolves where the video file lives.

use crate::api::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage file used when nothing else is configured.
pub const DEFAULT_STORAGE_FILE: &str = "youtube.txt";
/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "video-catalog.toml";

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct Config {
    storage_path: Option<PathBuf>,
}

/// Picks the storage path: explicit flag, then the config file, then the default.
///
/// An explicit `config` path must exist. The default config file is optional.
/// A relative `storage_path` in a config file is taken relative to that file.
pub fn resolve_storage_path(
    file: Option<&Path>,
    config: Option<&Path>,
) -> Result<PathBuf, ConfigError> {
    if let Some(file) = file {
        return Ok(file.to_path_buf());
    }

    let config_path = match config {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                return Ok(PathBuf::from(DEFAULT_STORAGE_FILE));
            }
            default
        }
    };

    let cfg = read_config(&config_path)?;
    Ok(match cfg.storage_path {
        Some(p) if p.is_relative() => match config_path.parent() {
            Some(dir) => dir.join(p),
            None => p,
        },
        Some(p) => p,
        None => PathBuf::from(DEFAULT_STORAGE_FILE),
    })
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
