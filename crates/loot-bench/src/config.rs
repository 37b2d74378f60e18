//! # Bench Configuration
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable          | Default | Meaning                              |
//! |-------------------|---------|--------------------------------------|
//! | `LOOT_CAPACITY`   | 20      | Array collection capacity            |
//! | `LOOT_ITEM_COUNT` | 20      | Records generated (≤ capacity)       |
//! | `LOOT_SEED`       | 42      | Generator seed                       |
//! | `LOOT_STRATEGIES` | all     | Comma list: name, category, priority |

use std::env;
use std::str::FromStr;

use loot_core::{SortStrategy, COMPONENT_CAPACITY};
use serde::Serialize;

use crate::error::ConfigError;

pub const CAPACITY_VAR: &str = "LOOT_CAPACITY";
pub const ITEM_COUNT_VAR: &str = "LOOT_ITEM_COUNT";
pub const SEED_VAR: &str = "LOOT_SEED";
pub const STRATEGIES_VAR: &str = "LOOT_STRATEGIES";

/// Settings for one bench run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchConfig {
    pub capacity: usize,
    pub item_count: usize,
    pub seed: u64,
    pub strategies: Vec<SortStrategy>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            capacity: COMPONENT_CAPACITY,
            item_count: COMPONENT_CAPACITY,
            seed: 42,
            strategies: SortStrategy::ALL.to_vec(),
        }
    }
}

impl BenchConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup (the environment, or a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = BenchConfig::default();

        let capacity = parse_or(&lookup, CAPACITY_VAR, defaults.capacity)?;
        let item_count = match lookup(ITEM_COUNT_VAR) {
            Some(raw) => parse_value(ITEM_COUNT_VAR, &raw)?,
            // Fill whatever capacity was chosen.
            None => capacity,
        };
        let seed = parse_or(&lookup, SEED_VAR, defaults.seed)?;
        let strategies = match lookup(STRATEGIES_VAR) {
            Some(raw) if !raw.trim().is_empty() => parse_strategies(&raw)?,
            _ => defaults.strategies,
        };

        let config = BenchConfig {
            capacity,
            item_count,
            seed,
            strategies,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.item_count > self.capacity {
            return Err(ConfigError::TooManyItems {
                item_count: self.item_count,
                capacity: self.capacity,
            });
        }
        if self.strategies.is_empty() {
            return Err(ConfigError::NoStrategies);
        }
        Ok(())
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: raw.to_string(),
    })
}

/// Parses `"name, priority"` into strategies, skipping empty entries.
pub fn parse_strategies(raw: &str) -> Result<Vec<SortStrategy>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<SortStrategy>().map_err(ConfigError::from))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
