//! Data-driven question content and loaders.
//!
//! This crate houses the default question catalog and provides loaders for
//! RON/TOML data files:
//! - Question catalogs (data-driven via RON)
//! - Game configuration overrides (data-driven via TOML)
//!
//! Content is consumed by the core's oracles and never appears in session
//! state. All loaders use game-core types directly with serde for RON/TOML
//! deserialization.

pub mod catalog;
pub mod loaders;

pub use catalog::StaticCatalog;
pub use loaders::{CatalogLoader, ConfigLoader, LoadResult};

/// Default catalog source, compiled into the binary.
pub const EMBEDDED_QUESTIONS: &str = include_str!("../data/questions.ron");
