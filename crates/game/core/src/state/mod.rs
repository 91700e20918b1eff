//! Mutable match state.
//!
//! The board, the units standing on it, per-player mana, and the summoning
//! lock flag. The orchestrator owns this state and hands it to the rules
//! components one call at a time; nothing here is shared across threads.
mod board;
mod error;
mod player;
mod unit;

pub use board::{Board, BoardPos, Cell};
pub use error::BoardError;
pub use player::{MatchState, PlayerIndex, PlayerState};
pub use unit::{Direction, DodgeState, UnitState};
