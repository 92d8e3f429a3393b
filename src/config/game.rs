//! Game configuration constants.
//!
//! This module defines the default gameplay parameters: board size,
//! how many of each item is hidden on the board, and starting health.
//! `GameConfig` falls back to these when no config file overrides them.

/// Side length of the square grid.
pub const GRID_SIZE: usize = 5;

/// Largest side length a configured grid may have.
pub const MAX_GRID_SIZE: usize = 64;

/// Number of plain treasures hidden on the board.
pub const NUM_TREASURES: usize = 3;

/// Number of locked treasures (need a key to open).
pub const NUM_LOCKED_TREASURES: usize = 1;

/// Number of traps.
pub const NUM_TRAPS: usize = 3;

/// Number of health power-ups.
pub const NUM_POWERUPS: usize = 2;

/// Number of keys.
pub const NUM_KEYS: usize = 1;

/// Health every player starts with.
pub const INITIAL_HEALTH: i32 = 10;

/// Default roster when no names are configured.
pub const DEFAULT_PLAYERS: [&str; 2] = ["Player 1", "Player 2"];

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "TREASURE_HUNT_CONFIG";
