//! Match-wide summoning lock.
//!
//! The lock is a one-way switch on [`MatchState::summoning_unlocked`]: it
//! starts locked and lifts for good once enough creatures share the board.
//! The orchestrator calls [`maybe_unlock`] after every placement.

use crate::config::RulesConfig;
use crate::state::{Board, MatchState};

/// Number of occupied cells.
pub fn count_units(board: &Board) -> usize {
    board.cells().filter(|(_, cell)| cell.is_occupied()).count()
}

/// Lifts the lock when at least four creatures are on the board.
///
/// Returns true only on the call that flips the flag.
pub fn maybe_unlock(state: Option<&mut MatchState>) -> bool {
    maybe_unlock_with(state, RulesConfig::DEFAULT_SUMMON_UNLOCK_THRESHOLD)
}

/// [`maybe_unlock`] with a configured threshold.
pub fn maybe_unlock_with(state: Option<&mut MatchState>, threshold: usize) -> bool {
    let Some(state) = state else {
        return false;
    };
    if state.summoning_unlocked {
        return false;
    }

    let units = count_units(&state.board);
    if units < threshold {
        return false;
    }

    state.summoning_unlocked = true;
    tracing::info!(units, threshold, "summoning lock lifted");
    true
}
