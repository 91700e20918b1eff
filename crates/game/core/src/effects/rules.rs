//! HP-conditional rule schema and its normalization boundary.
//!
//! Card data describes these rules in two historical shapes: a list of
//! generic per-creature entries, and a single "equals" object attached to a
//! named ability. Both are accepted as [`HpRuleSource`], with the field
//! synonyms below, and normalized into one [`HpRuleSet`]:
//!
//! | Field            | Accepted names                                   |
//! |------------------|--------------------------------------------------|
//! | `hp_equals`      | `eq`, `equals`, `value`, `hp`                    |
//! | `attack_bonus`   | `amount`, `plus`, `add`, `attack`                |
//! | `dodge_attempts` | `attempts`, `count`, `limit`                     |
//! | `dodge_chance`   | `chance`, `probability`, `rate`                  |
//!
//! Thresholds and counts are truncated toward zero, counts are floored at
//! zero, chances are clamped to `[0, 1]`, and non-finite numbers are treated
//! as absent. An entry without a usable threshold is dropped, and so is one
//! that is not an object or names the same field twice.

/// One normalized rule: grants bonuses while current HP equals `hp_equals`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HpRule {
    pub hp_equals: i32,
    /// Attack bonus; zero means the rule grants none.
    pub attack_bonus: i32,
    pub dodge_attempts: Option<u32>,
    /// Explicit dodge chance in `[0, 1]`. When no matching rule sets one and
    /// attempts were granted, evaluation substitutes the configured default.
    pub dodge_chance: Option<f64>,
}

impl HpRule {
    pub const fn at_hp(hp_equals: i32) -> Self {
        Self {
            hp_equals,
            attack_bonus: 0,
            dodge_attempts: None,
            dodge_chance: None,
        }
    }

    pub const fn with_attack_bonus(mut self, amount: i32) -> Self {
        self.attack_bonus = amount;
        self
    }

    pub const fn with_dodge_attempts(mut self, attempts: u32) -> Self {
        self.dodge_attempts = Some(attempts);
        self
    }

    pub fn with_dodge_chance(mut self, chance: f64) -> Self {
        self.dodge_chance = normalize_chance(Some(chance));
        self
    }
}

/// A rule as authored, before normalization. Every field is optional and
/// numeric values may be fractional or out of range.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RawHpRule {
    pub hp_equals: Option<f64>,
    pub attack_bonus: Option<f64>,
    pub dodge_attempts: Option<f64>,
    pub dodge_chance: Option<f64>,
    /// Set when the entry could not be read as a rule (not an object, or two
    /// names for the same field). Malformed entries never normalize.
    pub malformed: bool,
}

impl RawHpRule {
    /// Placeholder for an entry that could not be read as a rule.
    pub fn malformed() -> Self {
        Self {
            malformed: true,
            ..Self::default()
        }
    }

    /// Normalizes this entry, or returns `None` when it has no usable threshold.
    pub fn normalize(&self) -> Option<HpRule> {
        if self.malformed {
            return None;
        }
        let hp_equals = truncate(self.hp_equals)?;
        Some(HpRule {
            hp_equals,
            attack_bonus: truncate(self.attack_bonus).unwrap_or(0),
            dodge_attempts: truncate(self.dodge_attempts).map(|n| n.max(0) as u32),
            dodge_chance: normalize_chance(self.dodge_chance),
        })
    }
}

/// Either authored shape of HP rules.
#[derive(Clone, Debug, PartialEq)]
pub enum HpRuleSource {
    /// Single-object shorthand (`{ equals: 1, plus: 2 }`).
    One(RawHpRule),
    /// Generic list form.
    Many(Vec<RawHpRule>),
}

impl HpRuleSource {
    pub fn entries(&self) -> &[RawHpRule] {
        match self {
            HpRuleSource::One(rule) => core::slice::from_ref(rule),
            HpRuleSource::Many(rules) => rules,
        }
    }

    /// Normalizes every entry, dropping the ones without a threshold.
    pub fn normalize(&self) -> HpRuleSet {
        let entries = self.entries();
        let rules: Vec<HpRule> = entries.iter().filter_map(RawHpRule::normalize).collect();
        if rules.len() < entries.len() {
            tracing::debug!(
                dropped = entries.len() - rules.len(),
                kept = rules.len(),
                "dropped malformed HP rules or rules without a usable threshold"
            );
        }
        HpRuleSet::new(rules)
    }
}

/// Normalized HP-conditional rules of one template, in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HpRuleSet {
    rules: Vec<HpRule>,
}

impl HpRuleSet {
    pub fn new(rules: Vec<HpRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[HpRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules whose threshold equals `hp` exactly, in declaration order.
    pub fn matching(&self, hp: i32) -> impl Iterator<Item = &HpRule> {
        self.rules.iter().filter(move |rule| rule.hp_equals == hp)
    }
}

impl From<Vec<HpRule>> for HpRuleSet {
    fn from(rules: Vec<HpRule>) -> Self {
        Self::new(rules)
    }
}

impl From<HpRuleSource> for HpRuleSet {
    fn from(source: HpRuleSource) -> Self {
        source.normalize()
    }
}

fn truncate(value: Option<f64>) -> Option<i32> {
    value
        .filter(|v| v.is_finite())
        .map(|v| v.trunc().clamp(i32::MIN as f64, i32::MAX as f64) as i32)
}

fn normalize_chance(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite()).map(|v| v.clamp(0.0, 1.0))
}

#[cfg(feature = "serde")]
mod de {
    //! Lenient deserialization of authored HP rules.
    //!
    //! Nothing in here fails on odd values: unreadable numbers become absent,
    //! unreadable entries become malformed rules that normalization drops.
    //! Only syntax errors of the surrounding format still propagate.

    use core::fmt;

    use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

    use super::{HpRuleSet, HpRuleSource, RawHpRule};

    #[derive(Clone, Copy)]
    enum Field {
        HpEquals,
        AttackBonus,
        DodgeAttempts,
        DodgeChance,
    }

    impl Field {
        fn from_key(key: &str) -> Option<Self> {
            match key {
                "hp_equals" | "eq" | "equals" | "value" | "hp" => Some(Field::HpEquals),
                "attack_bonus" | "amount" | "plus" | "add" | "attack" => Some(Field::AttackBonus),
                "dodge_attempts" | "attempts" | "count" | "limit" => Some(Field::DodgeAttempts),
                "dodge_chance" | "chance" | "probability" | "rate" => Some(Field::DodgeChance),
                _ => None,
            }
        }
    }

    /// Numeric field value: integers, floats, or numeric strings.
    struct Number(Option<f64>);

    impl<'de> serde::Deserialize<'de> for Number {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(NumberVisitor).map(Number)
        }
    }

    struct NumberVisitor;

    impl<'de> Visitor<'de> for NumberVisitor {
        type Value = Option<f64>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v as f64))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v as f64))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        // Unparsable text counts as an absent value
        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(v.trim().parse::<f64>().ok())
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(None)
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(None)
        }
    }

    /// Reads one rule object. Unknown keys are skipped; a field named twice
    /// (directly or through a synonym) marks the entry malformed.
    struct RuleVisitor;

    impl<'de> Visitor<'de> for RuleVisitor {
        type Value = RawHpRule;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an HP rule object")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut rule = RawHpRule::default();
            let mut seen = [false; 4];
            while let Some(key) = map.next_key::<String>()? {
                let Some(field) = Field::from_key(&key) else {
                    map.next_value::<IgnoredAny>()?;
                    continue;
                };
                let Number(value) = map.next_value()?;
                let index = field as usize;
                if seen[index] {
                    rule.malformed = true;
                }
                seen[index] = true;
                let slot = match field {
                    Field::HpEquals => &mut rule.hp_equals,
                    Field::AttackBonus => &mut rule.attack_bonus,
                    Field::DodgeAttempts => &mut rule.dodge_attempts,
                    Field::DodgeChance => &mut rule.dodge_chance,
                };
                *slot = value;
            }
            Ok(rule)
        }
    }

    impl<'de> serde::Deserialize<'de> for RawHpRule {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(RuleVisitor)
        }
    }

    /// List element: a rule object, or anything else as a malformed rule.
    struct Entry(RawHpRule);

    impl<'de> serde::Deserialize<'de> for Entry {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(SourceVisitor).map(|source| match source {
                HpRuleSource::One(rule) => Entry(rule),
                HpRuleSource::Many(_) => Entry(RawHpRule::malformed()),
            })
        }
    }

    struct SourceVisitor;

    impl SourceVisitor {
        fn malformed() -> HpRuleSource {
            HpRuleSource::One(RawHpRule::malformed())
        }
    }

    impl<'de> Visitor<'de> for SourceVisitor {
        type Value = HpRuleSource;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an HP rule or a list of HP rules")
        }

        fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            RuleVisitor.visit_map(map).map(HpRuleSource::One)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut rules = Vec::new();
            while let Some(Entry(rule)) = seq.next_element()? {
                rules.push(rule);
            }
            Ok(HpRuleSource::Many(rules))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(HpRuleSource::Many(Vec::new()))
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(HpRuleSource::Many(Vec::new()))
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
            Ok(Self::malformed())
        }

        fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
            Ok(Self::malformed())
        }

        fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
            Ok(Self::malformed())
        }

        fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
            Ok(Self::malformed())
        }

        fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
            Ok(Self::malformed())
        }
    }

    impl<'de> serde::Deserialize<'de> for HpRuleSource {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(SourceVisitor)
        }
    }

    impl<'de> serde::Deserialize<'de> for HpRuleSet {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            <HpRuleSource as serde::Deserialize>::deserialize(deserializer)
                .map(|source| source.normalize())
        }
    }
}
