//! Board layout loader.
//!
//! A layout is the terrain of the 3x3 grid, row by row from the top. Units
//! are never part of a layout; they arrive through summoning.

use std::path::Path;

use arena_core::config::RulesConfig;
use arena_core::{Board, BoardPos, Element};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Board layout structure for RON files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Rows from the top, each listing its cells from the left.
    pub elements: Vec<Vec<Element>>,
}

impl BoardLayout {
    /// Empty board with this layout's terrain. Fails unless the layout is
    /// exactly 3x3.
    pub fn to_board(&self) -> LoadResult<Board> {
        anyhow::ensure!(
            self.elements.len() == RulesConfig::BOARD_ROWS,
            "board layout must have {} rows (got {})",
            RulesConfig::BOARD_ROWS,
            self.elements.len()
        );

        let mut board = Board::new();
        for (row, cells) in self.elements.iter().enumerate() {
            anyhow::ensure!(
                cells.len() == RulesConfig::BOARD_COLS,
                "board row {} must have {} cells (got {})",
                row,
                RulesConfig::BOARD_COLS,
                cells.len()
            );
            for (col, &element) in cells.iter().enumerate() {
                board.set_element(BoardPos::new(row, col)?, element);
            }
        }
        Ok(board)
    }
}

/// Loader for board layouts from RON files.
pub struct BoardLoader;

impl BoardLoader {
    /// Load a board layout from a RON file and build an empty board from it.
    pub fn load(path: &Path) -> LoadResult<Board> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load board {}: {}", path.display(), e))
    }

    /// Parse a board layout from RON text.
    pub fn parse(content: &str) -> LoadResult<Board> {
        let layout: BoardLayout = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse board RON: {}", e))?;
        let board = layout.to_board()?;

        tracing::debug!(rows = layout.elements.len(), "loaded board layout");
        Ok(board)
    }
}
