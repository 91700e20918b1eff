//! Board errors.
//!
//! Errors related to cell addressing and occupancy changes made by the
//! orchestrator.

use crate::error::{ErrorSeverity, GameError};
use crate::state::BoardPos;

/// Errors that occur when addressing or mutating board cells.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardError {
    /// Coordinates fall outside the 3x3 grid.
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    /// Target cell already holds a unit.
    #[error("cell {0} is already occupied")]
    CellOccupied(BoardPos),

    /// Target cell holds no unit.
    #[error("cell {0} is empty")]
    CellEmpty(BoardPos),
}

impl GameError for BoardError {
    fn severity(&self) -> ErrorSeverity {
        use BoardError::*;
        match self {
            OutOfBounds { .. } => ErrorSeverity::Validation,
            // Caller can pick another cell
            CellOccupied(_) => ErrorSeverity::Recoverable,
            // Orchestrator believed a unit was there
            CellEmpty(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use BoardError::*;
        match self {
            OutOfBounds { .. } => "BOARD_OUT_OF_BOUNDS",
            CellOccupied(_) => "BOARD_CELL_OCCUPIED",
            CellEmpty(_) => "BOARD_CELL_EMPTY",
        }
    }
}
