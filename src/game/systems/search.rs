//! Search system.
//!
//! Three read-only queries over the grid. BFS and DFS share one traversal that
//! differs only in which end of the frontier is popped. Binary search bisects
//! a single row and assumes it is sorted by `Cell` order; the grid never
//! sorts its rows, so a present target can be missed.

use std::collections::{HashSet, VecDeque};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::game::errors::{GameError, Result};
use crate::game::grid::Grid;
use crate::game::types::{Cell, Direction, Position, SearchAlgorithm};

/// Result of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub found: Option<Position>,
    /// Distinct cells processed (graph searches) or comparisons made (binary search).
    pub processed: usize,
}

/// First cell holding `target` in breadth-first visitation order from `start`.
pub fn bfs_search(grid: &Grid, start: Position, target: Cell) -> SearchReport {
    traverse(grid, start, target, SearchAlgorithm::BreadthFirst)
}

/// First cell holding `target` in depth-first visitation order from `start`.
///
/// Neighbours are pushed up, down, left, right, so they are explored right, left, down, up.
pub fn dfs_search(grid: &Grid, start: Position, target: Cell) -> SearchReport {
    traverse(grid, start, target, SearchAlgorithm::DepthFirst)
}

pub fn graph_search(grid: &Grid, start: Position, target: Cell, algorithm: SearchAlgorithm) -> SearchReport {
    match algorithm {
        SearchAlgorithm::BreadthFirst => bfs_search(grid, start, target),
        SearchAlgorithm::DepthFirst => dfs_search(grid, start, target),
    }
}

fn traverse(grid: &Grid, start: Position, target: Cell, algorithm: SearchAlgorithm) -> SearchReport {
    let mut report = SearchReport { found: None, processed: 0 };
    if !grid.contains(start) {
        return report;
    }

    let mut frontier = VecDeque::from([start]);
    let mut visited = HashSet::new();

    loop {
        let next = match algorithm {
            SearchAlgorithm::BreadthFirst => frontier.pop_front(),
            SearchAlgorithm::DepthFirst => frontier.pop_back(),
        };
        let Some(pos) = next else { break };

        // Duplicates may sit in the frontier; they are skipped here, not at push time.
        if !visited.insert(pos) {
            continue;
        }
        report.processed += 1;

        if grid.cell_at(pos) == target {
            report.found = Some(pos);
            break;
        }

        for direction in Direction::ALL {
            if let Some(neighbour) = pos.step(direction, grid.size()) {
                frontier.push_back(neighbour);
            }
        }
    }

    debug!(
        "[Search] {} from {} for {}: {:?} after {} cells",
        algorithm, start, target, report.found, report.processed
    );
    report
}

/// Bisect `row` looking for `target`, comparing by `Cell` order.
pub fn binary_search(grid: &Grid, row: usize, target: Cell) -> Result<SearchReport> {
    let cells = grid
        .row(row)
        .ok_or(GameError::RowOutOfBounds { row, size: grid.size() })?;

    let mut report = SearchReport { found: None, processed: 0 };
    // `high` is exclusive; `mid` matches an inclusive (low + high) / 2 bisection.
    let (mut low, mut high) = (0, cells.len());
    while low < high {
        let mid = (low + high - 1) / 2;
        report.processed += 1;
        match cells[mid].cmp(&target) {
            std::cmp::Ordering::Equal => {
                report.found = Some(Position::new(row, mid));
                break;
            }
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
        }
    }

    debug!(
        "[Search] Binary row {} for {}: {:?} after {} comparisons",
        row, target, report.found, report.processed
    );
    Ok(report)
}
