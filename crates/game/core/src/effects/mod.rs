//! Conditional effects keyed on a creature's own HP.
//!
//! [`rules`] turns authored rule data into one schema; [`engine`] evaluates
//! that schema into attack and dodge bonuses. Evaluation is pure and reads
//! only the unit/template pair.
pub mod engine;
pub mod rules;

pub use engine::{
    AttackBonus, DodgeBonus, HpEvaluation, attack_bonus_from_rules, compute_attack_bonus,
    compute_dodge_bonus, compute_dodge_bonus_with, current_hp, dodge_bonus_from_rules, evaluate,
};
pub use rules::{HpRule, HpRuleSet, HpRuleSource, RawHpRule};
