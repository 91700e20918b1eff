//! Reward formulas used by abilities that scale death mana with the board.
//!
//! These only compute a number. Callers put it into
//! [`DeathRecord::mana_reward`](super::DeathRecord::mana_reward) or
//! [`ManaGainContext::gain_per_death`](super::ManaGainContext::gain_per_death)
//! before running the engine.

use crate::env::Element;
use crate::state::{Board, PlayerIndex};

/// One mana per unit of `owner`'s opponent currently on the board.
pub fn per_enemy_unit(board: &Board, owner: PlayerIndex) -> i32 {
    to_reward(board.count_units_of(owner.opponent()))
}

/// One mana per board cell carrying `element`.
pub fn per_element_tile(board: &Board, element: Element) -> i32 {
    to_reward(board.count_elements(element))
}

fn to_reward(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Template;
    use crate::state::{BoardPos, UnitState};

    #[test]
    fn counts_only_enemy_units() {
        let template = Template::new("AIR_HARPY", 2, 1);
        let mut board = Board::new();
        for (index, owner) in [(0, 0), (1, 1), (2, 1), (4, 0)] {
            let pos = BoardPos::from_index(index).unwrap();
            let owner = PlayerIndex(owner);
            board
                .place(pos, UnitState::spawn(&template, owner, owner.home_facing()))
                .unwrap();
        }

        assert_eq!(per_enemy_unit(&board, PlayerIndex::FIRST), 2);
        assert_eq!(per_enemy_unit(&board, PlayerIndex::SECOND), 2);
        assert_eq!(per_enemy_unit(&Board::new(), PlayerIndex::FIRST), 0);
    }

    #[test]
    fn counts_matching_tiles() {
        use Element::{Earth, Fire, Neutral};
        let board = Board::with_elements([
            [Earth, Fire, Earth],
            [Neutral, Earth, Neutral],
            [Fire, Fire, Fire],
        ]);

        assert_eq!(per_element_tile(&board, Earth), 3);
        assert_eq!(per_element_tile(&board, Fire), 4);
        assert_eq!(per_element_tile(&board, Element::Mech), 0);
    }
}
