//! Mana produced by creature deaths.
mod engine;
pub mod rewards;

pub use engine::{
    DeathRecord, ManaGainContext, ManaGainEvent, ManaGainOutcome, apply_mana_gain_on_deaths,
};
