//! Terminal rendering for the prompt loop.
//!
//! Formatting is kept in pure functions so it can be tested; the `print_*`
//! helpers just write the result to stdout.

use crate::game::errors::GameError;
use crate::game::types::{ActionResult, CellView, Effect, GridSnapshot, Outcome, Player};

pub const INSTRUCTIONS: &str = "\
Welcome to the Treasure Hunt Game!
Instructions:
- Move using commands: 'up', 'down', 'left', or 'right'.
- Use search commands: 'search bfs', 'search dfs', or 'search bs'.
- Find treasures (T), avoid traps (X), and collect power-ups (U) and keys (K)!
- Locked treasures (L) need keys to unlock.
- Your position is marked as 'P' on the grid. Hidden cells are shown as '?'.
- Type 'quit' to leave. Good luck and enjoy the game!
";

pub fn format_grid(snapshot: &GridSnapshot) -> String {
    let mut out = String::from("Grid:\n");
    for row in &snapshot.cells {
        for view in row {
            let symbol = match view {
                CellView::Occupied(_) => 'P',
                CellView::Hidden => '?',
                CellView::Revealed(cell) if cell.is_empty() => '.',
                CellView::Revealed(cell) => cell.symbol(),
            };
            out.push(symbol);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

pub fn format_player_state(player: &Player) -> String {
    format!(
        "{}'s turn. Health: {}, Score: {}, Keys: {}, Position: {}",
        player.name, player.health, player.score, player.keys, player.pos
    )
}

/// Player-facing lines describing one resolved action.
pub fn describe_result(result: &ActionResult) -> Vec<String> {
    let mut lines = Vec::new();

    let line = match &result.outcome {
        Outcome::Moved { effect, .. } => match effect {
            Ok(Effect::FoundTreasure) => "You found a treasure!".to_string(),
            Ok(Effect::UnlockedTreasure) => "You unlocked a locked treasure! Bonus points!".to_string(),
            Ok(Effect::HitTrap) => "You hit a trap!".to_string(),
            Ok(Effect::PowerUp) => "You collected a power-up!".to_string(),
            Ok(Effect::FoundKey) => "You found a key!".to_string(),
            Ok(Effect::Nothing) => "Nothing here.".to_string(),
            Err(GameError::NoKeyForLock { .. }) => "You need a key to unlock this treasure.".to_string(),
            Err(err) => err.to_string(),
        },
        Outcome::Searched { kind, target, found } => match found {
            Some(pos) => format!("{kind} Search result: {target} at {pos}"),
            None => format!("{kind} Search result: no {target} found"),
        },
        Outcome::Rejected(GameError::InvalidMove { .. }) => "Invalid move. You hit the boundary!".to_string(),
        Outcome::Rejected(GameError::InvalidAction(_)) => {
            "Invalid action! Please choose a valid move or search.".to_string()
        }
        Outcome::Rejected(err) => format!("Invalid action! {err}"),
    };
    lines.push(line);

    if let Some(name) = &result.eliminated {
        lines.push(format!("{name} is eliminated!"));
    }
    if result.game_over {
        lines.push("Game Over!".to_string());
    }
    lines
}

pub fn format_standings(standings: &[Player]) -> String {
    let mut out = String::from("Final scores:\n");
    for (rank, player) in standings.iter().enumerate() {
        out.push_str(&format!("{}. {} - {} points\n", rank + 1, player.name, player.score));
    }
    out
}

pub fn print_grid(snapshot: &GridSnapshot) {
    println!("\n{}", format_grid(snapshot));
}

pub fn print_player_state(player: &Player) {
    println!("{}", format_player_state(player));
}
