//! Effective attack profile of a creature for one turn.
//!
//! A template carries a base profile and optional named schemes. Which one
//! applies depends on an explicit override from the caller or on the terrain
//! element under the creature:
//!
//! 1. `force_scheme_key`, if it names a scheme on the template
//! 2. the first forced-scheme rule whose elements contain the cell's element
//! 3. the template's base profile
//!
//! An unresolvable forced key skips step 2 and goes straight to the base
//! profile. Resolution never fails; missing data yields the default profile.

use crate::env::{AttackDescriptor, AttackScheme, AttackType, Element, MagicArea, Template, TerrainLookup};
use crate::state::BoardPos;

/// Attack profile handed to hit computation and targeting UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackProfile {
    pub attack_type: AttackType,
    pub choose_dir: bool,
    pub attacks: Vec<AttackDescriptor>,
    /// Key of the selected scheme, `None` for the base profile.
    pub scheme_key: Option<String>,
    pub magic_area: Option<MagicArea>,
}

impl AttackProfile {
    /// Base profile of a template, no scheme applied.
    pub fn base(template: &Template) -> Self {
        Self {
            attack_type: template.attack_type,
            choose_dir: template.choose_dir,
            attacks: template.attacks.clone(),
            scheme_key: None,
            magic_area: template.magic_area,
        }
    }

    /// Template base profile with the scheme's set fields layered on top.
    pub fn with_scheme(template: &Template, scheme: &AttackScheme) -> Self {
        let attacks = if scheme.attacks.is_empty() {
            template.attacks.clone()
        } else {
            scheme.attacks.clone()
        };
        Self {
            attack_type: scheme.attack_type.unwrap_or(template.attack_type),
            choose_dir: scheme.choose_dir.unwrap_or(template.choose_dir),
            attacks,
            scheme_key: Some(scheme.key.clone()),
            magic_area: scheme.magic_area.or(template.magic_area),
        }
    }

    /// True for the "no creature" profile.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Caller-supplied context for profile resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileContext {
    /// Explicit scheme override, looked up by exact key.
    pub force_scheme_key: Option<String>,
    /// Cell the creature stands on, used with the terrain lookup.
    pub pos: Option<BoardPos>,
    /// Pre-resolved terrain element; wins over the lookup.
    pub element: Option<Element>,
}

impl ProfileContext {
    pub fn at(pos: BoardPos) -> Self {
        Self {
            pos: Some(pos),
            ..Self::default()
        }
    }

    pub fn on_element(element: Element) -> Self {
        Self {
            element: Some(element),
            ..Self::default()
        }
    }

    pub fn forced(key: &str) -> Self {
        Self {
            force_scheme_key: Some(key.to_string()),
            ..Self::default()
        }
    }

    pub fn with_pos(mut self, pos: BoardPos) -> Self {
        self.pos = Some(pos);
        self
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    /// Element under the creature, from the context or the lookup.
    pub fn resolve_element(&self, terrain: Option<&dyn TerrainLookup>) -> Option<Element> {
        self.element
            .or_else(|| terrain.zip(self.pos).and_then(|(terrain, pos)| terrain.element_at(pos)))
    }
}

/// Scheme selected by the first forced-scheme rule matching `element`.
///
/// A matching rule that names an unknown scheme counts as no match and
/// scanning continues with the next rule.
pub fn forced_scheme_for<'t>(template: &'t Template, element: Element) -> Option<&'t AttackScheme> {
    template
        .forced_schemes
        .iter()
        .filter(|rule| rule.elements.iter().any(|tag| element.matches_tag(tag)))
        .find_map(|rule| {
            let scheme = template.scheme(&rule.scheme);
            if scheme.is_none() {
                tracing::debug!(
                    template = %template.id,
                    scheme = %rule.scheme,
                    %element,
                    "forced-scheme rule names an unknown scheme"
                );
            }
            scheme
        })
}

/// Resolves the effective attack profile of `template` for this turn.
pub fn resolve_attack_profile(
    terrain: Option<&dyn TerrainLookup>,
    template: Option<&Template>,
    context: &ProfileContext,
) -> AttackProfile {
    let Some(template) = template else {
        return AttackProfile::default();
    };

    if let Some(key) = context.force_scheme_key.as_deref() {
        return match template.scheme(key) {
            Some(scheme) => {
                tracing::debug!(template = %template.id, scheme = key, "forced scheme selected");
                AttackProfile::with_scheme(template, scheme)
            }
            None => {
                tracing::debug!(
                    template = %template.id,
                    scheme = key,
                    "forced scheme not found, using base profile"
                );
                AttackProfile::base(template)
            }
        };
    }

    let scheme = context
        .resolve_element(terrain)
        .and_then(|element| forced_scheme_for(template, element));

    match scheme {
        Some(scheme) => {
            tracing::debug!(
                template = %template.id,
                scheme = %scheme.key,
                "terrain selected attack scheme"
            );
            AttackProfile::with_scheme(template, scheme)
        }
        None => AttackProfile::base(template),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ForcedSchemeRule;
    use crate::state::{Board, Direction};

    fn pos(row: usize, col: usize) -> BoardPos {
        BoardPos::new(row, col).unwrap()
    }

    fn lizard() -> Template {
        Template::new("FIRE_LIZARD", 3, 2)
            .with_attacks(vec![AttackDescriptor::adjacent(Direction::N)])
            .with_magic_area(MagicArea::Single)
            .with_scheme(
                AttackScheme::new("FLAME_LINE")
                    .with_label("Flame line")
                    .with_attacks(vec![
                        AttackDescriptor::adjacent(Direction::N).with_ranges(&[1, 2]),
                    ])
                    .with_choose_dir(true),
            )
            .with_scheme(AttackScheme::new("ARCANE").with_attack_type(AttackType::Magic))
            .with_forced_scheme(ForcedSchemeRule::new(["fire", "Earth"], "FLAME_LINE"))
            .with_forced_scheme(ForcedSchemeRule::new(["WATER"], "ARCANE"))
    }

    #[test]
    fn missing_template_yields_default_profile() {
        let profile = resolve_attack_profile(None, None, &ProfileContext::forced("FLAME_LINE"));

        assert!(profile.is_default());
        assert_eq!(profile.attack_type, AttackType::Standard);
        assert!(!profile.choose_dir);
        assert!(profile.attacks.is_empty());
    }

    #[test]
    fn template_without_rules_uses_base_profile() {
        let template = Template::new("AIR_SPRITE", 2, 1)
            .with_attack_type(AttackType::Magic)
            .with_choose_dir(true)
            .with_magic_area(MagicArea::Cross);
        let board = Board::with_elements([[Element::Fire; 3]; 3]);

        let profile =
            resolve_attack_profile(Some(&board), Some(&template), &ProfileContext::at(pos(0, 0)));
        assert_eq!(profile, AttackProfile::base(&template));
        assert_eq!(profile.scheme_key, None);
    }

    #[test]
    fn terrain_selects_scheme_case_insensitively() {
        let template = lizard();
        let board = Board::with_elements([[Element::Earth; 3]; 3]);

        let profile =
            resolve_attack_profile(Some(&board), Some(&template), &ProfileContext::at(pos(1, 2)));
        assert_eq!(profile.scheme_key.as_deref(), Some("FLAME_LINE"));
        assert!(profile.choose_dir);
        assert_eq!(profile.attacks[0].ranges, vec![1, 2]);
        // Unset scheme fields fall back to the template
        assert_eq!(profile.attack_type, AttackType::Standard);
        assert_eq!(profile.magic_area, Some(MagicArea::Single));
    }

    #[test]
    fn scheme_without_attacks_keeps_base_attacks() {
        let template = lizard();
        let profile =
            resolve_attack_profile(None, Some(&template), &ProfileContext::on_element(Element::Water));

        assert_eq!(profile.scheme_key.as_deref(), Some("ARCANE"));
        assert_eq!(profile.attack_type, AttackType::Magic);
        assert_eq!(profile.attacks, template.attacks);
    }

    #[test]
    fn context_element_wins_over_lookup() {
        let template = lizard();
        let lookup = |_: BoardPos| Some(Element::Fire);
        let context = ProfileContext::at(pos(0, 0)).with_element(Element::Forest);

        let profile = resolve_attack_profile(Some(&lookup), Some(&template), &context);
        assert_eq!(profile.scheme_key, None);
    }

    #[test]
    fn forced_key_wins_over_terrain() {
        let template = lizard();
        let context = ProfileContext::forced("ARCANE").with_element(Element::Fire);

        let profile = resolve_attack_profile(None, Some(&template), &context);
        assert_eq!(profile.scheme_key.as_deref(), Some("ARCANE"));
    }

    #[test]
    fn unknown_forced_key_skips_terrain_rules() {
        let template = lizard();
        let context = ProfileContext::forced("MISSING").with_element(Element::Fire);

        let profile = resolve_attack_profile(None, Some(&template), &context);
        assert_eq!(profile, AttackProfile::base(&template));
    }

    #[test]
    fn rule_with_unknown_scheme_is_skipped() {
        let template = Template::new("MECH_DRONE", 2, 1)
            .with_scheme(AttackScheme::new("SWEEP").with_choose_dir(true))
            .with_forced_scheme(ForcedSchemeRule::new(["MECH"], "GONE"))
            .with_forced_scheme(ForcedSchemeRule::new(["mech"], "SWEEP"));

        let profile =
            resolve_attack_profile(None, Some(&template), &ProfileContext::on_element(Element::Mech));
        assert_eq!(profile.scheme_key.as_deref(), Some("SWEEP"));
    }

    #[test]
    fn first_matching_rule_wins() {
        let template = Template::new("FOREST_ENT", 4, 1)
            .with_scheme(AttackScheme::new("ROOTS"))
            .with_scheme(AttackScheme::new("THORNS"))
            .with_forced_scheme(ForcedSchemeRule::new(["FOREST"], "ROOTS"))
            .with_forced_scheme(ForcedSchemeRule::new(["FOREST", "EARTH"], "THORNS"));

        let forest = ProfileContext::on_element(Element::Forest);
        let earth = ProfileContext::on_element(Element::Earth);
        assert_eq!(
            resolve_attack_profile(None, Some(&template), &forest).scheme_key.as_deref(),
            Some("ROOTS")
        );
        assert_eq!(
            resolve_attack_profile(None, Some(&template), &earth).scheme_key.as_deref(),
            Some("THORNS")
        );
    }

    #[test]
    fn forcing_a_scheme_key_round_trips() {
        let template = lizard();
        for scheme in &template.schemes {
            let profile =
                resolve_attack_profile(None, Some(&template), &ProfileContext::forced(&scheme.key));
            assert_eq!(profile.scheme_key.as_deref(), Some(scheme.key.as_str()));
            assert_eq!(profile, AttackProfile::with_scheme(&template, scheme));
        }
    }
}
