//! Player movement system.
//!
//! This module handles moving players on the grid.

use crate::game::errors::{GameError, Result};
use crate::game::types::{Direction, Player, Position};

/// Move the player one cell in the given direction.
/// Returns the new position, or `InvalidMove` with the position untouched if it would leave the grid.
pub fn move_player(player: &mut Player, direction: Direction, grid_size: usize) -> Result<Position> {
    let new_pos = player
        .pos
        .step(direction, grid_size)
        .ok_or(GameError::InvalidMove { from: player.pos, direction })?;

    player.pos = new_pos;
    Ok(new_pos)
}
