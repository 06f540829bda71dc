//! Error types for the library API.

use std::path::PathBuf;
use thiserror::Error;

/// Errors related to the storage file backing the catalog.
///
/// A missing file is not represented here: it simply loads as an empty catalog.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The storage file exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The storage file does not hold a list of `{Name, Time}` records.
    #[error("Video file {} is corrupted: {source}", path.display())]
    Corrupted {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The catalog could not be encoded.
    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The storage file could not be written or replaced.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors returned by catalog operations before anything is mutated.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A required field was empty after trimming.
    #[error("Video {0} cannot be empty")]
    Validation(&'static str),

    /// The given position is not a number or is outside `1..=len`.
    #[error("Invalid video number '{raw}' ({len} videos stored)")]
    Index { raw: String, len: usize },
}

/// Errors loading the optional TOML config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
