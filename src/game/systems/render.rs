use crate::game::grid::Grid;
use crate::game::types::{CellView, GridSnapshot, Player};

/// Build the display grid: players first, then cells already landed on, everything else hidden.
pub fn build_snapshot(grid: &Grid, players: &[Player]) -> GridSnapshot {
    let size = grid.size();
    let mut cells = vec![vec![CellView::Hidden; size]; size];

    for pos in grid.positions() {
        if grid.is_revealed(pos) {
            cells[pos.row][pos.col] = CellView::Revealed(grid.cell_at(pos));
        }
    }

    for player in players.iter().filter(|p| grid.contains(p.pos)) {
        let view = &mut cells[player.pos.row][player.pos.col];
        match view {
            CellView::Occupied(names) => names.push(player.name.clone()),
            _ => *view = CellView::Occupied(vec![player.name.clone()]),
        }
    }

    GridSnapshot { size, cells }
}
