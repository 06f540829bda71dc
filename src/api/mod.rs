//! Library API for the video catalog.

mod error;
mod store;

pub use error::{CatalogError, ConfigError, StorageError};
pub use store::{Applied, CatalogStore, Listing, Row};
