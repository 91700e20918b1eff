//! Content loaders for reading match data from files.
//!
//! Templates and board layouts are RON, rules configuration is TOML. Every
//! loader returns core types directly.

pub mod board;
pub mod config;
pub mod factory;
pub mod templates;

pub use board::{BoardLayout, BoardLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use templates::{TemplateFile, TemplateLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
