//! Content factory for loading match content from a data directory.

use std::path::{Path, PathBuf};

use arena_core::{Board, MatchState, RulesConfig, TemplateCatalog};

use crate::loaders::{BoardLoader, ConfigLoader, LoadResult, TemplateLoader};

/// Content factory that loads all match content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── rules.toml
/// ├── templates.ron
/// └── boards/
///     ├── classic.ron
///     └── volcano.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load rules configuration from `rules.toml`, or the defaults when the
    /// file does not exist.
    pub fn load_config(&self) -> LoadResult<RulesConfig> {
        let path = self.data_dir.join("rules.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no rules file, using defaults");
            return Ok(RulesConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the template catalog from `templates.ron`.
    pub fn load_templates(&self) -> LoadResult<TemplateCatalog> {
        let path = self.data_dir.join("templates.ron");
        TemplateLoader::load(&path)
    }

    /// Load a board from `boards/{board_name}.ron`.
    pub fn load_board(&self, board_name: &str) -> LoadResult<Board> {
        let path = self
            .data_dir
            .join("boards")
            .join(format!("{}.ron", board_name));
        BoardLoader::load(&path)
    }

    /// Fresh match on the named board with both players at `starting_mana`.
    pub fn new_match(&self, board_name: &str, starting_mana: i32) -> LoadResult<MatchState> {
        let board = self.load_board(board_name)?;
        Ok(MatchState::new(board).with_mana([starting_mana; RulesConfig::PLAYER_COUNT]))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_rules_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), RulesConfig::default());
        assert!(factory.load_templates().is_err());
    }
}
