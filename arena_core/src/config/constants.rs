//! Run constants configuration

use super::{load_toml, parse_toml, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable run constants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConstants {
    /// Consecutive victories that complete a run
    #[serde(default = "default_victories_to_win")]
    pub victories_to_win: u32,
    /// Cap on the sum of class levels
    #[serde(default = "default_max_total_level")]
    pub max_total_level: u32,
    #[serde(default)]
    pub stat_roll: StatRollConstants,
}

impl Default for GameConstants {
    fn default() -> Self {
        GameConstants {
            victories_to_win: default_victories_to_win(),
            max_total_level: default_max_total_level(),
            stat_roll: StatRollConstants::default(),
        }
    }
}

impl GameConstants {
    /// Load constants from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let constants: GameConstants = load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Load constants from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let constants: GameConstants = parse_toml(content)?;
        constants.validate()?;
        Ok(constants)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.victories_to_win == 0 {
            return Err(ConfigError::ValidationError(
                "victories_to_win must be at least 1".to_string(),
            ));
        }
        if self.max_total_level == 0 {
            return Err(ConfigError::ValidationError(
                "max_total_level must be at least 1".to_string(),
            ));
        }
        if self.stat_roll.min < 1 || self.stat_roll.min > self.stat_roll.max {
            return Err(ConfigError::ValidationError(format!(
                "stat_roll range {}..={} must start at 1 or above and be non-empty",
                self.stat_roll.min, self.stat_roll.max
            )));
        }
        Ok(())
    }
}

fn default_victories_to_win() -> u32 {
    5
}
fn default_max_total_level() -> u32 {
    3
}

/// Range each attribute of a new character is rolled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRollConstants {
    #[serde(default = "default_stat_min")]
    pub min: i32,
    #[serde(default = "default_stat_max")]
    pub max: i32,
}

impl Default for StatRollConstants {
    fn default() -> Self {
        StatRollConstants {
            min: default_stat_min(),
            max: default_stat_max(),
        }
    }
}

fn default_stat_min() -> i32 {
    1
}
fn default_stat_max() -> i32 {
    3
}
