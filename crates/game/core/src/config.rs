/// Rules configuration constants and tunable parameters.
///
/// Board geometry and player count are fixed at compile time. Balance values
/// (mana cap, unlock threshold, flat death reward, default dodge chance) can be
/// overridden per match, typically from a TOML file loaded by `arena-content`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    /// Upper bound of a player's mana pool.
    pub max_mana: i32,

    /// Number of creatures on the board that lifts the summoning lock.
    pub summon_unlock_threshold: usize,

    /// Mana awarded per death when neither the death record nor the caller
    /// supplies a reward.
    pub gain_per_death: i32,

    /// Dodge chance used by HP rules that grant attempts without a chance.
    ///
    /// Kept at 0.5 for parity with existing card data; whether this is
    /// intended balance has not been confirmed by design.
    pub default_dodge_chance: f64,
}

impl RulesConfig {
    // ===== compile-time constants =====
    pub const BOARD_ROWS: usize = 3;
    pub const BOARD_COLS: usize = 3;
    pub const BOARD_CELLS: usize = Self::BOARD_ROWS * Self::BOARD_COLS;
    pub const PLAYER_COUNT: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_MANA: i32 = 10;
    pub const DEFAULT_SUMMON_UNLOCK_THRESHOLD: usize = 4;
    pub const DEFAULT_GAIN_PER_DEATH: i32 = 1;
    pub const DEFAULT_DODGE_CHANCE: f64 = 0.5;

    pub fn new() -> Self {
        Self {
            max_mana: Self::DEFAULT_MAX_MANA,
            summon_unlock_threshold: Self::DEFAULT_SUMMON_UNLOCK_THRESHOLD,
            gain_per_death: Self::DEFAULT_GAIN_PER_DEATH,
            default_dodge_chance: Self::DEFAULT_DODGE_CHANCE,
        }
    }

    pub fn with_max_mana(mut self, max_mana: i32) -> Self {
        self.max_mana = max_mana.max(0);
        self
    }

    pub fn with_summon_unlock_threshold(mut self, threshold: usize) -> Self {
        self.summon_unlock_threshold = threshold;
        self
    }

    pub fn with_gain_per_death(mut self, gain: i32) -> Self {
        self.gain_per_death = gain;
        self
    }

    pub fn with_default_dodge_chance(mut self, chance: f64) -> Self {
        self.default_dodge_chance = if chance.is_finite() {
            chance.clamp(0.0, 1.0)
        } else {
            Self::DEFAULT_DODGE_CHANCE
        };
        self
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}
