//! Text command grammar for the prompt loop.
//!
//! ```text
//! up | down | left | right
//! search bfs <T|L|X|U|K>
//! search dfs <T|L|X|U|K>
//! search bs  <T|L|X|U|K> <row>
//! quit
//! ```
//!
//! Anything else becomes `Action::Unrecognized` so it still goes through the game's turn accounting.

use crate::game::types::{Action, Cell, Direction, SearchAlgorithm};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Act(Action),
}

/// Follow-up questions the shell asks when a search command is incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Target,
    Row,
}

impl Prompt {
    pub fn text(self, size: usize) -> String {
        match self {
            Prompt::Target => "Enter the target item to search (T, L, X, U, K): ".to_string(),
            Prompt::Row => format!("Enter the row to search (0-{}): ", size.saturating_sub(1)),
        }
    }
}

/// Which fields a partial search command still needs, in the order they should be asked.
pub fn pending_prompts(input: &str) -> Vec<Prompt> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    match tokens.as_slice() {
        ["search", "bfs" | "dfs"] => vec![Prompt::Target],
        ["search", "bs"] => vec![Prompt::Target, Prompt::Row],
        ["search", "bs", _] => vec![Prompt::Row],
        _ => vec![],
    }
}

pub fn parse_command(input: &str) -> Command {
    let normalized = input.trim().to_lowercase();
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    let action = match tokens.as_slice() {
        ["quit" | "exit"] => return Command::Quit,
        [direction] => parse_direction(direction).map(Action::Move),
        ["search", "bfs", target] => parse_target(target).map(|target| Action::Search {
            algorithm: SearchAlgorithm::BreadthFirst,
            target,
        }),
        ["search", "dfs", target] => parse_target(target).map(|target| Action::Search {
            algorithm: SearchAlgorithm::DepthFirst,
            target,
        }),
        ["search", "bs", target, row] => parse_target(target)
            .zip(row.parse::<usize>().ok())
            .map(|(target, row)| Action::SearchRow { target, row }),
        _ => None,
    };

    Command::Act(action.unwrap_or_else(|| Action::Unrecognized(input.trim().to_string())))
}

fn parse_direction(token: &str) -> Option<Direction> {
    match token {
        "up" => Some(Direction::Up),
        "down" => Some(Direction::Down),
        "left" => Some(Direction::Left),
        "right" => Some(Direction::Right),
        _ => None,
    }
}

fn parse_target(token: &str) -> Option<Cell> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Cell::from_symbol(symbol),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        assert_eq!(parse_command("up"), Command::Act(Action::Move(Direction::Up)));
        assert_eq!(parse_command("  Right \n"), Command::Act(Action::Move(Direction::Right)));
        assert_eq!(parse_command("quit"), Command::Quit);
    }

    #[test]
    fn test_parse_searches() {
        assert_eq!(
            parse_command("search bfs t"),
            Command::Act(Action::Search { algorithm: SearchAlgorithm::BreadthFirst, target: Cell::Treasure })
        );
        assert_eq!(
            parse_command("SEARCH DFS K"),
            Command::Act(Action::Search { algorithm: SearchAlgorithm::DepthFirst, target: Cell::Key })
        );
        assert_eq!(
            parse_command("search bs x 3"),
            Command::Act(Action::SearchRow { target: Cell::Trap, row: 3 })
        );
    }

    #[test]
    fn test_unrecognized_input() {
        for input in ["jump", "search astar t", "search bfs q", "search bs t row", "up up", ""] {
            assert_eq!(parse_command(input), Command::Act(Action::Unrecognized(input.to_string())));
        }
    }

    #[test]
    fn test_pending_prompts() {
        assert_eq!(pending_prompts("search bfs"), vec![Prompt::Target]);
        assert_eq!(pending_prompts("search bs"), vec![Prompt::Target, Prompt::Row]);
        assert_eq!(pending_prompts("search bs t"), vec![Prompt::Row]);
        assert!(pending_prompts("search dfs t").is_empty());
        assert!(pending_prompts("left").is_empty());
    }
}
