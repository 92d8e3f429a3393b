//! Grid model.
//!
//! Owns the square board of cell contents plus the mask of cells a player has
//! already landed on. Only `GameState` mutates a grid after generation.

use log::debug;
use rand::Rng;
use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};

use crate::config::game::MAX_GRID_SIZE;
use crate::game::errors::{GameError, Result};
use crate::game::types::{Cell, Position};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<Cell>>,
    revealed: Vec<Vec<bool>>,
}

impl Grid {
    /// An all-empty `size`x`size` grid.
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![Cell::Empty; size]; size],
            revealed: vec![vec![false; size]; size],
        }
    }

    /// Build a grid from explicit rows. Rows must form a non-empty square.
    #[cfg(test)]
    pub fn from_cells(cells: Vec<Vec<Cell>>) -> Result<Self> {
        let size = cells.len();
        if size == 0 || cells.iter().any(|row| row.len() != size) {
            return Err(GameError::InvalidConfig("grid rows must form a non-empty square".into()));
        }
        Ok(Self {
            size,
            cells,
            revealed: vec![vec![false; size]; size],
        })
    }

    /// Generate a grid with `count` items of each kind at distinct random cells.
    ///
    /// Items are placed in the order given. Each one lands on a cell chosen
    /// uniformly among the cells still empty, so generation always terminates.
    pub fn generate<R: Rng + ?Sized>(size: usize, placements: &[(Cell, usize)], rng: &mut R) -> Result<Self> {
        if size == 0 || size > MAX_GRID_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "grid size must be between 1 and {MAX_GRID_SIZE}"
            )));
        }
        let capacity = size * size;
        let requested = placements
            .iter()
            .try_fold(0usize, |total, (_, count)| total.checked_add(*count))
            .ok_or(GameError::Placement { requested: usize::MAX, available: capacity })?;
        if requested > capacity {
            return Err(GameError::Placement { requested, available: capacity });
        }

        let mut grid = Grid::empty(size);
        for &(item, count) in placements {
            if item.is_empty() {
                continue;
            }
            for _ in 0..count {
                grid.place_random(item, rng)?;
            }
        }
        Ok(grid)
    }

    fn place_random<R: Rng + ?Sized>(&mut self, item: Cell, rng: &mut R) -> Result<Position> {
        let free_positions: Vec<Position> = self
            .positions()
            .filter(|pos| self.cell_at(*pos).is_empty())
            .collect();

        match free_positions.iter().choose(rng) {
            Some(&pos) => {
                self.cells[pos.row][pos.col] = item;
                debug!("[Grid] Placed {} at {} ({} free left)", item, pos, free_positions.len() - 1);
                Ok(pos)
            }
            None => Err(GameError::Placement { requested: 1, available: 0 }),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Every coordinate in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Current content of `pos`. Out-of-bounds reads as `Empty`.
    pub fn cell_at(&self, pos: Position) -> Cell {
        self.cells
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .copied()
            .unwrap_or_default()
    }

    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        self.cells.get(row).map(Vec::as_slice)
    }

    pub fn set_cell(&mut self, pos: Position, cell: Cell) {
        if self.contains(pos) {
            self.cells[pos.row][pos.col] = cell;
        }
    }

    /// Empty the cell at `pos`. Idempotent.
    pub fn clear_cell(&mut self, pos: Position) {
        self.set_cell(pos, Cell::Empty);
    }

    pub fn has_any(&self, item: Cell) -> bool {
        self.cells.iter().flatten().any(|cell| *cell == item)
    }

    #[cfg(test)]
    pub fn count(&self, item: Cell) -> usize {
        self.cells.iter().flatten().filter(|cell| **cell == item).count()
    }

    pub fn reveal(&mut self, pos: Position) {
        if self.contains(pos) {
            self.revealed[pos.row][pos.col] = true;
        }
    }

    pub fn is_revealed(&self, pos: Position) -> bool {
        self.contains(pos) && self.revealed[pos.row][pos.col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    const DEFAULT_PLACEMENTS: [(Cell, usize); 5] = [
        (Cell::Treasure, 3),
        (Cell::LockedTreasure, 1),
        (Cell::Trap, 3),
        (Cell::PowerUp, 2),
        (Cell::Key, 1),
    ];

    /// Always yields zero. Rejection sampling would spin forever on this.
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    #[test]
    fn test_grid_generation_counts() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = Grid::generate(5, &DEFAULT_PLACEMENTS, &mut rng).unwrap();

            assert_eq!(grid.size(), 5);
            for (item, count) in DEFAULT_PLACEMENTS {
                assert_eq!(grid.count(item), count, "seed {seed}: wrong count for {item}");
            }
            let non_empty = grid.positions().filter(|p| !grid.cell_at(*p).is_empty()).count();
            assert_eq!(non_empty, 10);
        }
    }

    #[test]
    fn test_generation_is_reproducible_from_seed() {
        let a = Grid::generate(5, &DEFAULT_PLACEMENTS, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Grid::generate(5, &DEFAULT_PLACEMENTS, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_grid_terminates_with_degenerate_rng() {
        let placements = [(Cell::Treasure, 2), (Cell::Trap, 2)];
        let grid = Grid::generate(2, &placements, &mut ZeroRng).unwrap();
        assert_eq!(grid.count(Cell::Treasure), 2);
        assert_eq!(grid.count(Cell::Trap), 2);
        assert!(!grid.has_any(Cell::Empty));
    }

    #[test]
    fn test_overfull_request_is_rejected() {
        let placements = [(Cell::Treasure, 3), (Cell::Key, 2)];
        let result = Grid::generate(2, &placements, &mut StdRng::seed_from_u64(1));
        assert_eq!(result, Err(GameError::Placement { requested: 5, available: 4 }));
    }

    #[test]
    fn test_size_out_of_range_is_rejected() {
        let result = Grid::generate(0, &[], &mut StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));

        let result = Grid::generate(MAX_GRID_SIZE + 1, &[], &mut StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_overflowing_counts_are_rejected() {
        let placements = [(Cell::Treasure, usize::MAX), (Cell::Key, 1)];
        let result = Grid::generate(5, &placements, &mut StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(GameError::Placement { available: 25, .. })));
    }

    #[test]
    fn test_clear_cell_is_idempotent() {
        let mut grid = Grid::empty(3);
        let pos = Position::new(1, 2);
        grid.set_cell(pos, Cell::Treasure);
        assert!(grid.has_any(Cell::Treasure));

        grid.clear_cell(pos);
        grid.clear_cell(pos);
        assert_eq!(grid.cell_at(pos), Cell::Empty);
        assert!(!grid.has_any(Cell::Treasure));
    }

    #[test]
    fn test_from_cells_requires_square() {
        assert!(Grid::from_cells(vec![vec![Cell::Empty; 3]; 2]).is_err());
        assert!(Grid::from_cells(vec![]).is_err());
        assert!(Grid::from_cells(vec![vec![Cell::Empty; 2]; 2]).is_ok());
    }

    #[test]
    fn test_reveal_and_bounds() {
        let mut grid = Grid::empty(2);
        grid.reveal(Position::new(0, 1));
        grid.reveal(Position::new(5, 5));
        assert!(grid.is_revealed(Position::new(0, 1)));
        assert!(!grid.is_revealed(Position::new(0, 0)));
        assert!(!grid.is_revealed(Position::new(5, 5)));
        assert_eq!(grid.cell_at(Position::new(9, 9)), Cell::Empty);
    }
}
