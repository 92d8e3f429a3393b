//! Error taxonomy for the game engine.
//!
//! None of these are fatal to a running game: `GameState::submit_action` embeds
//! them in the `ActionResult` it returns. Only construction (`GameState::new`,
//! `Grid::generate`) surfaces them as `Err`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::types::{Direction, Position};

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    #[error("invalid move: {direction} from {from} leaves the grid")]
    InvalidMove { from: Position, direction: Direction },

    #[error("invalid action: {0}")]
    InvalidAction(String),

    #[error("locked treasure at {at} needs a key")]
    NoKeyForLock { at: Position },

    #[error("row {row} is outside a grid of size {size}")]
    RowOutOfBounds { row: usize, size: usize },

    #[error("cannot place {requested} items, only {available} free cells")]
    Placement { requested: usize, available: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("the game is over")]
    GameOver,
}

/// Convenience Result type for game operations
pub type Result<T> = std::result::Result<T, GameError>;
