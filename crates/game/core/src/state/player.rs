use std::fmt;

use crate::config::RulesConfig;
use crate::state::{Board, Direction};

/// Seat of a player in the match (0 or 1).
///
/// Not validated on construction: death records may name an owner that no
/// longer exists, and lookups simply miss.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerIndex(pub u8);

impl PlayerIndex {
    pub const FIRST: Self = Self(0);
    pub const SECOND: Self = Self(1);

    pub const fn opponent(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Facing given to freshly summoned units of this player.
    pub const fn home_facing(self) -> Direction {
        if self.0 == 0 { Direction::N } else { Direction::S }
    }
}

impl fmt::Display for PlayerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Per-player state touched by the rules core. Mana is the only field it mutates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub mana: i32,
}

impl PlayerState {
    pub const fn new(mana: i32) -> Self {
        Self { mana }
    }

    /// Adds `amount` and clamps the pool to `[0, max_mana]`.
    ///
    /// Returns `(before, after)`.
    pub fn add_mana_clamped(&mut self, amount: i32, max_mana: i32) -> (i32, i32) {
        let before = self.mana;
        self.mana = before.saturating_add(amount).clamp(0, max_mana.max(0));
        (before, self.mana)
    }
}

/// The slice of a match the rules core reads and mutates.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub board: Board,
    pub players: [PlayerState; RulesConfig::PLAYER_COUNT],
    /// Summoning lock flag. Starts `false` and never returns to `false`.
    pub summoning_unlocked: bool,
}

impl MatchState {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            ..Self::default()
        }
    }

    pub fn with_mana(mut self, mana: [i32; RulesConfig::PLAYER_COUNT]) -> Self {
        for (player, amount) in self.players.iter_mut().zip(mana) {
            player.mana = amount;
        }
        self
    }

    pub fn player(&self, index: PlayerIndex) -> Option<&PlayerState> {
        self.players.get(index.0 as usize)
    }

    pub fn player_mut(&mut self, index: PlayerIndex) -> Option<&mut PlayerState> {
        self.players.get_mut(index.0 as usize)
    }
}
