//! HP-conditional bonus evaluation.
//!
//! A single pure evaluator runs over normalized [`HpRuleSet`]s. Every rule
//! whose threshold equals the creature's current HP exactly contributes:
//! attack bonuses and dodge attempts sum across matches, while the dodge
//! chance of the last matching rule that sets one wins. The configured
//! default chance is only used when no matching rule sets a chance.

use crate::config::RulesConfig;
use crate::env::Template;
use crate::state::UnitState;

use super::rules::HpRuleSet;

/// Attack modifier granted at the current HP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackBonus {
    pub amount: i32,
    /// HP value the bonus was evaluated at.
    pub hp: i32,
}

/// Dodge modifier granted at the current HP.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DodgeBonus {
    pub attempts: u32,
    pub chance: f64,
    /// HP value the bonus was evaluated at.
    pub hp: i32,
}

/// Aggregate of every rule matching one HP value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HpEvaluation {
    pub attack_bonus: i32,
    pub dodge_attempts: u32,
    /// Last explicitly set chance among the matching rules.
    pub dodge_chance: Option<f64>,
}

/// Folds all rules matching `hp`, in declaration order.
pub fn evaluate(rules: &HpRuleSet, hp: i32) -> HpEvaluation {
    rules
        .matching(hp)
        .fold(HpEvaluation::default(), |mut acc, rule| {
            acc.attack_bonus = acc.attack_bonus.saturating_add(rule.attack_bonus);
            acc.dodge_attempts = acc
                .dodge_attempts
                .saturating_add(rule.dodge_attempts.unwrap_or(0));
            if rule.dodge_chance.is_some() {
                acc.dodge_chance = rule.dodge_chance;
            }
            acc
        })
}

/// Current HP used for evaluation: the unit's, else the template's base HP.
pub fn current_hp(unit: Option<&UnitState>, template: Option<&Template>) -> Option<i32> {
    unit.map(|unit| unit.current_hp)
        .or_else(|| template.map(|template| template.hp))
}

/// Attack bonus for `unit` at its current HP, or `None` when nothing applies.
pub fn compute_attack_bonus(
    unit: Option<&UnitState>,
    template: Option<&Template>,
) -> Option<AttackBonus> {
    let template = template?;
    let hp = current_hp(unit, Some(template))?;
    attack_bonus_from_rules(&template.hp_effects, hp)
}

/// Attack bonus from an explicit rule set at `hp`.
pub fn attack_bonus_from_rules(rules: &HpRuleSet, hp: i32) -> Option<AttackBonus> {
    let amount = evaluate(rules, hp).attack_bonus;
    (amount != 0).then_some(AttackBonus { amount, hp })
}

/// Dodge bonus for `unit` at its current HP, using the default dodge chance
/// for rules that grant attempts without a chance.
pub fn compute_dodge_bonus(
    unit: Option<&UnitState>,
    template: Option<&Template>,
) -> Option<DodgeBonus> {
    compute_dodge_bonus_with(unit, template, RulesConfig::DEFAULT_DODGE_CHANCE)
}

/// [`compute_dodge_bonus`] with a configured default dodge chance.
pub fn compute_dodge_bonus_with(
    unit: Option<&UnitState>,
    template: Option<&Template>,
    default_dodge_chance: f64,
) -> Option<DodgeBonus> {
    let template = template?;
    let hp = current_hp(unit, Some(template))?;
    dodge_bonus_from_rules(&template.hp_effects, hp, default_dodge_chance)
}

/// Dodge bonus from an explicit rule set at `hp`.
pub fn dodge_bonus_from_rules(
    rules: &HpRuleSet,
    hp: i32,
    default_dodge_chance: f64,
) -> Option<DodgeBonus> {
    let evaluation = evaluate(rules, hp);
    if evaluation.dodge_attempts == 0 && evaluation.dodge_chance.is_none() {
        return None;
    }
    // Attempts are non-zero here whenever no rule set a chance
    Some(DodgeBonus {
        attempts: evaluation.dodge_attempts,
        chance: evaluation.dodge_chance.unwrap_or(default_dodge_chance),
        hp,
    })
}
