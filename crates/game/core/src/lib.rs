//! Rules core of a two-player 3x3 card battle.
//!
//! `arena-core` owns the decisions of a match that are more than glue: which
//! attack profile a creature uses on its cell ([`attack`]), the bonuses a
//! creature gains at exact HP values ([`effects`]), the mana players earn
//! from deaths ([`mana`]), and the one-way summoning lock ([`summon`]).
//!
//! Every operation is synchronous and either pure or mutates only the
//! [`MatchState`] it is handed. Template data is read-only ([`env`]).
pub mod attack;
pub mod config;
pub mod effects;
pub mod env;
pub mod error;
pub mod mana;
pub mod state;
pub mod summon;

pub use attack::{AttackProfile, ProfileContext, resolve_attack_profile};
pub use config::RulesConfig;
pub use effects::{
    AttackBonus, DodgeBonus, HpRule, HpRuleSet, compute_attack_bonus, compute_dodge_bonus,
};
pub use env::{
    AttackDescriptor, AttackScheme, AttackType, CatalogError, Element, ForcedSchemeRule,
    MagicArea, Template, TemplateCatalog, TemplateId, TemplateOracle, TerrainLookup,
};
pub use error::{ErrorSeverity, GameError};
pub use mana::{
    DeathRecord, ManaGainContext, ManaGainEvent, ManaGainOutcome, apply_mana_gain_on_deaths,
};
pub use state::{
    Board, BoardError, BoardPos, Cell, Direction, DodgeState, MatchState, PlayerIndex,
    PlayerState, UnitState,
};
pub use summon::{count_units, maybe_unlock, maybe_unlock_with};
