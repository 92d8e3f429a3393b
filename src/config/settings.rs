//! Runtime game configuration.
//!
//! Defaults come from `config::game`. A JSON file named by `TREASURE_HUNT_CONFIG`
//! may override any subset of fields.

use std::path::Path;
use std::{env, fs, io};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::game::{
    CONFIG_ENV_VAR, DEFAULT_PLAYERS, GRID_SIZE, INITIAL_HEALTH, MAX_GRID_SIZE, NUM_KEYS, NUM_LOCKED_TREASURES,
    NUM_POWERUPS, NUM_TRAPS, NUM_TREASURES,
};
use crate::game::types::Cell;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// What happens to the turn when a player submits something unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidActionPolicy {
    /// The turn is spent, same as any other action.
    #[default]
    AdvanceTurn,
    /// The same player acts again.
    RetryTurn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_size: usize,
    pub treasures: usize,
    pub locked_treasures: usize,
    pub traps: usize,
    pub power_ups: usize,
    pub keys: usize,
    pub initial_health: i32,
    pub player_names: Vec<String>,
    pub invalid_action_policy: InvalidActionPolicy,
    /// Fixed seed for a reproducible board.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            treasures: NUM_TREASURES,
            locked_treasures: NUM_LOCKED_TREASURES,
            traps: NUM_TRAPS,
            power_ups: NUM_POWERUPS,
            keys: NUM_KEYS,
            initial_health: INITIAL_HEALTH,
            player_names: DEFAULT_PLAYERS.iter().map(|name| name.to_string()).collect(),
            invalid_action_policy: InvalidActionPolicy::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load from the file named by `TREASURE_HUNT_CONFIG`, or use defaults when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        info!("[Config] Loaded {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Item counts in placement order.
    pub fn placements(&self) -> [(Cell, usize); 5] {
        [
            (Cell::Treasure, self.treasures),
            (Cell::LockedTreasure, self.locked_treasures),
            (Cell::Trap, self.traps),
            (Cell::PowerUp, self.power_ups),
            (Cell::Key, self.keys),
        ]
    }

    /// Sum of all item counts, or `None` if it overflows.
    pub fn total_items(&self) -> Option<usize> {
        self.placements()
            .iter()
            .try_fold(0usize, |total, (_, count)| total.checked_add(*count))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::Invalid(format!(
                "grid_size must be between 1 and {MAX_GRID_SIZE}"
            )));
        }
        if self.player_names.is_empty() {
            return Err(ConfigError::Invalid("at least one player is required".into()));
        }
        if self.initial_health <= 0 {
            return Err(ConfigError::Invalid("initial_health must be positive".into()));
        }
        let total = self
            .total_items()
            .ok_or_else(|| ConfigError::Invalid("item counts overflow".into()))?;
        let capacity = self.grid_size * self.grid_size;
        if total > capacity {
            return Err(ConfigError::Invalid(format!(
                "{} items do not fit on a {}x{} grid",
                total, self.grid_size, self.grid_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 5);
        assert_eq!(config.total_items(), Some(10));
        assert_eq!(config.player_names, vec!["Player 1", "Player 2"]);
        assert_eq!(config.invalid_action_policy, InvalidActionPolicy::AdvanceTurn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(
            r#"{"treasures": 1, "player_names": ["Ann"], "invalid_action_policy": "retry_turn", "seed": 7}"#,
        )
        .unwrap();
        assert_eq!(config.treasures, 1);
        assert_eq!(config.traps, 3);
        assert_eq!(config.player_names, vec!["Ann"]);
        assert_eq!(config.invalid_action_policy, InvalidActionPolicy::RetryTurn);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_rejects_overfull_grid() {
        let result = GameConfig::from_json(r#"{"grid_size": 2, "treasures": 5}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_overflowing_counts() {
        assert!(matches!(
            GameConfig::from_json(r#"{"treasures": 18446744073709551615, "keys": 1}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{"grid_size": 4294967296}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{"grid_size": 60000}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(GameConfig::from_json(r#"{"grid_size": 64}"#).is_ok());
    }

    #[test]
    fn test_rejects_empty_roster_and_bad_health() {
        assert!(matches!(
            GameConfig::from_json(r#"{"player_names": []}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{"initial_health": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(GameConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }
}
