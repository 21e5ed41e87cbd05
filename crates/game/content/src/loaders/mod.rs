//! Content loaders for reading game data from files.
//!
//! This module provides loaders that convert RON/TOML files into the types
//! the core's oracles consume.

pub mod config;
pub mod questions;

pub use config::ConfigLoader;
pub use questions::CatalogLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
