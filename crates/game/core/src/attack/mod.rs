//! Attack profile resolution.
//!
//! Picks the attack profile a creature uses this turn: its base profile or a
//! named scheme selected by an explicit override or by terrain.
mod profile;

pub use profile::{AttackProfile, ProfileContext, forced_scheme_for, resolve_attack_profile};
