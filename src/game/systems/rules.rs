use crate::game::errors::GameError;
use crate::game::grid::Grid;
use crate::game::types::{Cell, Effect, Player};

/// Resolve the cell the player just landed on.
///
/// Applies exactly one effect and clears the cell. A locked treasure met
/// without a key is left in place and reported as `NoKeyForLock`.
pub fn apply_cell_effect(grid: &mut Grid, player: &mut Player) -> Result<Effect, GameError> {
    let pos = player.pos;
    grid.reveal(pos);

    let effect = match grid.cell_at(pos) {
        Cell::Empty => return Ok(Effect::Nothing),
        Cell::Treasure => {
            player.score += 1;
            Effect::FoundTreasure
        }
        Cell::LockedTreasure if player.keys > 0 => {
            player.score += 2;
            player.keys -= 1;
            Effect::UnlockedTreasure
        }
        Cell::LockedTreasure => return Err(GameError::NoKeyForLock { at: pos }),
        Cell::Trap => {
            player.health -= 1;
            Effect::HitTrap
        }
        Cell::PowerUp => {
            player.health += 1;
            Effect::PowerUp
        }
        Cell::Key => {
            player.keys += 1;
            Effect::FoundKey
        }
    };

    grid.clear_cell(pos);
    Ok(effect)
}

/// Game ends once nobody is left or no plain treasure remains. Locked treasures do not count.
pub fn is_game_over(grid: &Grid, players: &[Player]) -> bool {
    players.is_empty() || !grid.has_any(Cell::Treasure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Position;

    fn land(cell: Cell, keys: u32) -> (Grid, Player, Result<Effect, GameError>) {
        let mut grid = Grid::empty(3);
        let mut player = Player::new("Ann", 10);
        player.keys = keys;
        player.pos = Position::new(1, 1);
        grid.set_cell(player.pos, cell);
        let effect = apply_cell_effect(&mut grid, &mut player);
        (grid, player, effect)
    }

    #[test]
    fn test_effect_table() {
        let (grid, player, effect) = land(Cell::Treasure, 0);
        assert_eq!(effect, Ok(Effect::FoundTreasure));
        assert_eq!(player.score, 1);
        assert_eq!(grid.cell_at(player.pos), Cell::Empty);

        let (grid, player, effect) = land(Cell::LockedTreasure, 2);
        assert_eq!(effect, Ok(Effect::UnlockedTreasure));
        assert_eq!((player.score, player.keys), (2, 1));
        assert_eq!(grid.cell_at(player.pos), Cell::Empty);

        let (grid, player, effect) = land(Cell::Trap, 0);
        assert_eq!(effect, Ok(Effect::HitTrap));
        assert_eq!(player.health, 9);
        assert_eq!(grid.cell_at(player.pos), Cell::Empty);

        let (_, player, effect) = land(Cell::PowerUp, 0);
        assert_eq!(effect, Ok(Effect::PowerUp));
        assert_eq!(player.health, 11);

        let (_, player, effect) = land(Cell::Key, 0);
        assert_eq!(effect, Ok(Effect::FoundKey));
        assert_eq!(player.keys, 1);

        let (_, player, effect) = land(Cell::Empty, 0);
        assert_eq!(effect, Ok(Effect::Nothing));
        assert_eq!((player.health, player.score, player.keys), (10, 0, 0));
    }

    #[test]
    fn test_locked_treasure_without_key_is_untouched() {
        let (grid, player, effect) = land(Cell::LockedTreasure, 0);
        assert_eq!(effect, Err(GameError::NoKeyForLock { at: Position::new(1, 1) }));
        assert_eq!((player.score, player.keys), (0, 0));
        assert_eq!(grid.cell_at(player.pos), Cell::LockedTreasure);
        assert!(grid.is_revealed(player.pos));
    }

    #[test]
    fn test_game_over_ignores_locked_treasures() {
        let mut grid = Grid::empty(3);
        grid.set_cell(Position::new(0, 1), Cell::LockedTreasure);
        let players = vec![Player::new("Ann", 10)];
        assert!(is_game_over(&grid, &players));

        grid.set_cell(Position::new(2, 2), Cell::Treasure);
        assert!(!is_game_over(&grid, &players));
        assert!(is_game_over(&grid, &[]));
    }
}
