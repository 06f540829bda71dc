pub mod api;
pub mod cli;
pub mod commands;
pub mod core;

pub use crate::api::{Applied, CatalogError, CatalogStore, ConfigError, Listing, StorageError};
pub use crate::core::storage::Video;
