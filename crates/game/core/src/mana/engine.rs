//! Death records to mana.
//!
//! The engine aggregates the deaths of one resolution step into per-player
//! mana grants. Reward math beyond the flat default or a per-record override
//! belongs to the ability layer (see [`super::rewards`]).
//!
//! There is no deduplication: every record passed in is paid out. Callers
//! must deliver each death at most once.

use crate::config::RulesConfig;
use crate::env::{Element, TemplateId};
use crate::state::{Board, BoardPos, MatchState, PlayerIndex, UnitState};

/// One creature death, produced once by the combat orchestrator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeathRecord {
    /// Player who receives the mana.
    pub owner: PlayerIndex,
    pub pos: BoardPos,
    pub template_id: TemplateId,
    /// Terrain under the creature when it died.
    pub element: Option<Element>,
    /// Explicit reward, wins over the context's flat reward.
    pub mana_reward: Option<i32>,
}

impl DeathRecord {
    pub fn new(owner: PlayerIndex, pos: BoardPos, template_id: impl Into<TemplateId>) -> Self {
        Self {
            owner,
            pos,
            template_id: template_id.into(),
            element: None,
            mana_reward: None,
        }
    }

    /// Record for `unit` dying at `pos`, with the terrain taken from `board`.
    pub fn from_unit(pos: BoardPos, unit: &UnitState, board: &Board) -> Self {
        Self::new(unit.owner, pos, unit.template_id.clone()).with_element(board.element(pos))
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    pub fn with_reward(mut self, reward: i32) -> Self {
        self.mana_reward = Some(reward);
        self
    }
}

/// Caller-supplied parameters for one batch of deaths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManaGainContext {
    /// Flat reward for records without an override. `None` means one mana.
    pub gain_per_death: Option<i32>,
    /// Free-form tag copied onto every event (e.g. the ability that fired).
    pub cause: Option<String>,
    pub max_mana: i32,
}

impl ManaGainContext {
    pub fn from_config(config: &RulesConfig) -> Self {
        Self {
            gain_per_death: Some(config.gain_per_death),
            cause: None,
            max_mana: config.max_mana,
        }
    }

    pub fn with_gain_per_death(mut self, gain: i32) -> Self {
        self.gain_per_death = Some(gain);
        self
    }

    pub fn with_cause(mut self, cause: &str) -> Self {
        self.cause = Some(cause.to_string());
        self
    }

    /// Reward for `record` before clamping. Never negative.
    pub fn reward_for(&self, record: &DeathRecord) -> i32 {
        record
            .mana_reward
            .or(self.gain_per_death)
            .unwrap_or(RulesConfig::DEFAULT_GAIN_PER_DEATH)
            .max(0)
    }
}

impl Default for ManaGainContext {
    fn default() -> Self {
        Self {
            gain_per_death: None,
            cause: None,
            max_mana: RulesConfig::DEFAULT_MAX_MANA,
        }
    }
}

/// Mana actually granted for one death.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManaGainEvent {
    pub owner: PlayerIndex,
    /// `after - before`; smaller than the reward when the cap was hit.
    pub amount: i32,
    pub before: i32,
    pub after: i32,
    pub death: DeathRecord,
    pub element: Option<Element>,
    pub cause: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManaGainOutcome {
    pub events: Vec<ManaGainEvent>,
    /// Sum of every event's `amount`.
    pub total: i32,
}

impl ManaGainOutcome {
    /// Total granted to one player.
    pub fn total_for(&self, owner: PlayerIndex) -> i32 {
        self.events
            .iter()
            .filter(|event| event.owner == owner)
            .map(|event| event.amount)
            .sum()
    }
}

/// Pays out `deaths` in order, clamping each owner's pool to
/// `[0, context.max_mana]`.
///
/// Deaths whose owner has no seat, or whose reward is zero, produce no event.
pub fn apply_mana_gain_on_deaths(
    state: &mut MatchState,
    deaths: &[DeathRecord],
    context: &ManaGainContext,
) -> ManaGainOutcome {
    let mut outcome = ManaGainOutcome::default();

    for death in deaths {
        let Some(player) = state.player_mut(death.owner) else {
            tracing::trace!(owner = %death.owner, template = %death.template_id, "death owner has no seat");
            continue;
        };

        let reward = context.reward_for(death);
        if reward == 0 {
            tracing::trace!(owner = %death.owner, template = %death.template_id, "death grants no mana");
            continue;
        }

        let (before, after) = player.add_mana_clamped(reward, context.max_mana);
        let amount = after - before;
        tracing::debug!(
            owner = %death.owner,
            template = %death.template_id,
            pos = %death.pos,
            reward,
            amount,
            before,
            after,
            "mana granted for death"
        );

        outcome.total += amount;
        outcome.events.push(ManaGainEvent {
            owner: death.owner,
            amount,
            before,
            after,
            element: death.element,
            cause: context.cause.clone(),
            death: death.clone(),
        });
    }

    outcome
}
