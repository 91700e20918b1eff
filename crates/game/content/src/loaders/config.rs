//! Rules configuration loader.

use std::path::Path;

use arena_core::RulesConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for rules configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their defaults. Out-of-range balance values are
    /// rejected rather than silently clamped.
    pub fn load(path: &Path) -> LoadResult<RulesConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse rules configuration from TOML text.
    pub fn parse(content: &str) -> LoadResult<RulesConfig> {
        let config: RulesConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        anyhow::ensure!(
            config.max_mana >= 0,
            "max_mana must not be negative (got {})",
            config.max_mana
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&config.default_dodge_chance),
            "default_dodge_chance must be within [0, 1] (got {})",
            config.default_dodge_chance
        );

        tracing::debug!(
            max_mana = config.max_mana,
            summon_unlock_threshold = config.summon_unlock_threshold,
            gain_per_death = config.gain_per_death,
            default_dodge_chance = config.default_dodge_chance,
            "loaded rules config"
        );
        Ok(config)
    }
}
