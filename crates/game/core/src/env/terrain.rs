use crate::state::BoardPos;

/// Read-only access to the terrain element under a board cell.
///
/// The attack profile resolver takes this instead of a whole match so it can
/// be driven by a live [`Board`](crate::state::Board), a snapshot, or a plain
/// closure in tests.
pub trait TerrainLookup {
    fn element_at(&self, pos: BoardPos) -> Option<Element>;
}

impl<F> TerrainLookup for F
where
    F: Fn(BoardPos) -> Option<Element>,
{
    fn element_at(&self, pos: BoardPos) -> Option<Element> {
        self(pos)
    }
}

/// Canonical element tags carried by board cells.
///
/// Parsing and display are case-insensitive upper-case tags (`"FIRE"`,
/// `"forest"` and `"Forest"` all parse to [`Element::Forest`]).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Element {
    Fire,
    Water,
    Earth,
    Forest,
    Air,
    Biolith,
    Mech,
    Neutral,
}

impl Element {
    /// Returns true if `tag` names this element, ignoring ASCII case and
    /// surrounding whitespace.
    pub fn matches_tag(self, tag: &str) -> bool {
        self.as_ref().eq_ignore_ascii_case(tag.trim())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Element {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_ref())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Element {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        tag.trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("unknown element '{tag}'")))
    }
}
