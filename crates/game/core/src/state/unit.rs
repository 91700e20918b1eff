use crate::effects::DodgeBonus;
use crate::env::{Template, TemplateId};
use crate::state::PlayerIndex;

/// Cardinal direction on the board. Used for unit facing and, relative to
/// facing, for attack descriptors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    #[default]
    N,
    E,
    S,
    W,
}

impl Direction {
    pub const fn rotate_cw(self) -> Self {
        match self {
            Direction::N => Direction::E,
            Direction::E => Direction::S,
            Direction::S => Direction::W,
            Direction::W => Direction::N,
        }
    }

    /// Turns a facing-relative direction into an absolute one.
    ///
    /// `N` means "straight ahead", so `N.relative_to(W) == W`.
    pub const fn relative_to(self, facing: Direction) -> Self {
        let mut dir = self;
        let mut steps = match facing {
            Direction::N => 0,
            Direction::E => 1,
            Direction::S => 2,
            Direction::W => 3,
        };
        while steps > 0 {
            dir = dir.rotate_cw();
            steps -= 1;
        }
        dir
    }
}

/// Dodge bookkeeping carried by a unit.
///
/// `remaining == None` means the unit has no finite attempt limit. A finite
/// counter never goes below zero.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DodgeState {
    pub remaining: Option<u32>,
    pub chance: f64,
}

impl DodgeState {
    /// No dodge at all.
    pub const NONE: Self = Self {
        remaining: Some(0),
        chance: 0.0,
    };

    pub fn unlimited(chance: f64) -> Self {
        Self {
            remaining: None,
            chance: sanitize_chance(chance),
        }
    }

    pub fn limited(attempts: u32, chance: f64) -> Self {
        Self {
            remaining: Some(attempts),
            chance: sanitize_chance(chance),
        }
    }

    /// Adds the bonus attempts and adopts the bonus chance.
    pub fn grant(&mut self, bonus: &DodgeBonus) {
        self.remaining = self
            .remaining
            .map(|left| left.saturating_add(bonus.attempts));
        self.chance = sanitize_chance(bonus.chance);
    }

    pub fn can_dodge(&self) -> bool {
        self.chance > 0.0 && self.remaining != Some(0)
    }

    /// Spends one attempt. Returns false when no attempt was available.
    pub fn consume_attempt(&mut self) -> bool {
        match self.remaining {
            None => true,
            Some(0) => false,
            Some(left) => {
                self.remaining = Some(left - 1);
                true
            }
        }
    }
}

impl Default for DodgeState {
    fn default() -> Self {
        Self::NONE
    }
}

fn sanitize_chance(chance: f64) -> f64 {
    if chance.is_finite() {
        chance.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// A live creature occupying a board cell.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitState {
    pub template_id: TemplateId,
    pub owner: PlayerIndex,
    pub current_hp: i32,
    pub facing: Direction,
    /// Turn on which the unit last rotated, if ever.
    pub last_rotate_turn: Option<u32>,
    pub dodge: DodgeState,
}

impl UnitState {
    /// Creates a fresh unit at full template HP.
    pub fn spawn(template: &Template, owner: PlayerIndex, facing: Direction) -> Self {
        Self {
            template_id: template.id.clone(),
            owner,
            current_hp: template.hp,
            facing,
            last_rotate_turn: None,
            dodge: DodgeState::NONE,
        }
    }

    pub fn with_hp(mut self, hp: i32) -> Self {
        self.current_hp = hp;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }
}
