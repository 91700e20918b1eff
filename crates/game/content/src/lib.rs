//! Data-driven match content and loaders.
//!
//! This crate reads the static data a match is built from:
//! - Creature and spell templates (RON), including HP-conditional rules in
//!   either authored shape
//! - Board terrain layouts (RON)
//! - Rules configuration (TOML)
//!
//! Content is consumed through `arena-core` types and never changes during a
//! match.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    BoardLayout, BoardLoader, ConfigLoader, ContentFactory, LoadResult, TemplateFile,
    TemplateLoader,
};
