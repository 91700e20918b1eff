//! Creature and spell templates.
//!
//! A `Template` is immutable reference data shared by every unit of its kind:
//! base HP, the base attack profile, optional named attack schemes with the
//! terrain rules that force them, and the HP-conditional effect rules.
//! Templates are usually loaded from RON catalogs by `arena-content`.

use crate::effects::HpRuleSet;
use crate::state::Direction;

/// Identifier of a template in the catalog (e.g. `"FIRE_FLAME_LIZARD"`).
pub type TemplateId = String;

/// How a creature delivers its attack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "UPPERCASE")]
pub enum AttackType {
    /// Physical attack along the attack descriptors, relative to facing.
    #[default]
    Standard,
    /// Magic attack that picks any cell and hits the magic area around it.
    Magic,
}

/// One attack line of a profile: a direction relative to the creature's
/// facing, the distances it reaches, and an optional damage override.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackDescriptor {
    pub dir: Direction,
    #[cfg_attr(feature = "serde", serde(default = "AttackDescriptor::default_ranges"))]
    pub ranges: Vec<u8>,
    /// Damage dealt by this line. `None` uses the creature's attack stat.
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage: Option<i32>,
}

impl AttackDescriptor {
    fn default_ranges() -> Vec<u8> {
        vec![1]
    }

    /// Adjacent attack in `dir`.
    pub fn adjacent(dir: Direction) -> Self {
        Self {
            dir,
            ranges: Self::default_ranges(),
            damage: None,
        }
    }

    pub fn with_ranges(mut self, ranges: &[u8]) -> Self {
        self.ranges = ranges.to_vec();
        self
    }

    pub fn with_damage(mut self, damage: i32) -> Self {
        self.damage = Some(damage);
        self
    }
}

/// Area hit by a magic attack around the chosen cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MagicArea {
    /// Only the chosen cell.
    Single,
    /// The chosen cell and its orthogonal neighbours.
    Cross,
    /// Every cell in the chosen cell's row.
    Row,
    /// Every cell in the chosen cell's column.
    Column,
    /// Every cell on the board.
    Board,
}

/// A named alternate attack profile.
///
/// Unset fields fall back to the owning template's base values when the
/// scheme is selected; an empty attack list also falls back.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttackScheme {
    pub key: String,
    pub label: Option<String>,
    pub attack_type: Option<AttackType>,
    pub choose_dir: Option<bool>,
    pub attacks: Vec<AttackDescriptor>,
    pub magic_area: Option<MagicArea>,
}

impl AttackScheme {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_attack_type(mut self, attack_type: AttackType) -> Self {
        self.attack_type = Some(attack_type);
        self
    }

    pub fn with_choose_dir(mut self, choose_dir: bool) -> Self {
        self.choose_dir = Some(choose_dir);
        self
    }

    pub fn with_attacks(mut self, attacks: Vec<AttackDescriptor>) -> Self {
        self.attacks = attacks;
        self
    }

    pub fn with_magic_area(mut self, area: MagicArea) -> Self {
        self.magic_area = Some(area);
        self
    }
}

/// Selects a named scheme whenever the creature stands on one of `elements`.
///
/// Element tags are kept as authored and compared case-insensitively.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForcedSchemeRule {
    pub elements: Vec<String>,
    pub scheme: String,
}

impl ForcedSchemeRule {
    pub fn new<I, S>(elements: I, scheme: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: elements.into_iter().map(Into::into).collect(),
            scheme: scheme.to_string(),
        }
    }
}

/// Immutable definition of a creature or spell kind.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Template {
    pub id: TemplateId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Base HP; also the fallback when a unit's current HP is unknown.
    pub hp: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack_type: AttackType,
    /// Whether the owner picks the attack direction each turn.
    #[cfg_attr(feature = "serde", serde(default))]
    pub choose_dir: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attacks: Vec<AttackDescriptor>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub magic_area: Option<MagicArea>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub schemes: Vec<AttackScheme>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub forced_schemes: Vec<ForcedSchemeRule>,
    /// HP-conditional attack and dodge rules. Accepts the generic list form
    /// as well as the single-object shorthand used by named abilities.
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "conditional_effects", alias = "self_hp_effects")
    )]
    pub hp_effects: HpRuleSet,
}

impl Template {
    pub fn new(id: &str, hp: i32, attack: i32) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            hp,
            attack,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_attack_type(mut self, attack_type: AttackType) -> Self {
        self.attack_type = attack_type;
        self
    }

    pub fn with_choose_dir(mut self, choose_dir: bool) -> Self {
        self.choose_dir = choose_dir;
        self
    }

    pub fn with_attacks(mut self, attacks: Vec<AttackDescriptor>) -> Self {
        self.attacks = attacks;
        self
    }

    pub fn with_magic_area(mut self, area: MagicArea) -> Self {
        self.magic_area = Some(area);
        self
    }

    pub fn with_scheme(mut self, scheme: AttackScheme) -> Self {
        self.schemes.push(scheme);
        self
    }

    pub fn with_forced_scheme(mut self, rule: ForcedSchemeRule) -> Self {
        self.forced_schemes.push(rule);
        self
    }

    pub fn with_hp_effects(mut self, rules: HpRuleSet) -> Self {
        self.hp_effects = rules;
        self
    }

    /// Looks up a named scheme by exact key. Unknown keys yield `None`.
    pub fn scheme(&self, key: &str) -> Option<&AttackScheme> {
        self.schemes.iter().find(|scheme| scheme.key == key)
    }
}
