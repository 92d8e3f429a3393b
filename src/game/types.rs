use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::errors::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring position in `direction`, or `None` if it falls off a `size`x`size` board.
    pub fn step(self, direction: Direction, size: usize) -> Option<Position> {
        let Position { row, col } = self;
        match direction {
            Direction::Up if row > 0 => Some(Position::new(row - 1, col)),
            Direction::Down if row + 1 < size => Some(Position::new(row + 1, col)),
            Direction::Left if col > 0 => Some(Position::new(row, col - 1)),
            Direction::Right if col + 1 < size => Some(Position::new(row, col + 1)),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbour expansion order shared by the graph searches.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Content of one grid position.
///
/// Variant order is the ordering binary search compares with. It matches the
/// board symbols sorted as text: `' ' < 'K' < 'L' < 'T' < 'U' < 'X'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Key,
    LockedTreasure,
    Treasure,
    PowerUp,
    Trap,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Key => 'K',
            Cell::LockedTreasure => 'L',
            Cell::Treasure => 'T',
            Cell::PowerUp => 'U',
            Cell::Trap => 'X',
        }
    }

    /// Parse an item letter (case-insensitive). `Empty` has no letter.
    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol.to_ascii_uppercase() {
            'K' => Some(Cell::Key),
            'L' => Some(Cell::LockedTreasure),
            'T' => Some(Cell::Treasure),
            'U' => Some(Cell::PowerUp),
            'X' => Some(Cell::Trap),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cell::Empty => "empty",
            Cell::Key => "key",
            Cell::LockedTreasure => "locked treasure",
            Cell::Treasure => "treasure",
            Cell::PowerUp => "power-up",
            Cell::Trap => "trap",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub health: i32,
    pub score: u32,
    pub keys: u32,
    pub pos: Position,
}

impl Player {
    pub fn new(name: impl Into<String>, health: i32) -> Self {
        Self {
            name: name.into(),
            health,
            score: 0,
            keys: 0,
            pos: Position::default(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchAlgorithm {
    BreadthFirst,
    DepthFirst,
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchAlgorithm::BreadthFirst => f.write_str("BFS"),
            SearchAlgorithm::DepthFirst => f.write_str("DFS"),
        }
    }
}

/// One player action, as submitted to the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Move(Direction),
    Search { algorithm: SearchAlgorithm, target: Cell },
    SearchRow { target: Cell, row: usize },
    /// Input the shell could not turn into an action. Kept so that it still goes through turn accounting.
    Unrecognized(String),
}

/// What landing on a cell did to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    FoundTreasure,
    UnlockedTreasure,
    HitTrap,
    PowerUp,
    FoundKey,
    Nothing,
}

/// Which search produced a `Searched` outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchKind {
    Graph(SearchAlgorithm),
    Binary { row: usize },
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchKind::Graph(algorithm) => write!(f, "{algorithm}"),
            SearchKind::Binary { .. } => f.write_str("Binary"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// The player moved to `to`. `effect` is `Err(NoKeyForLock)` when a locked treasure stayed shut.
    Moved { to: Position, effect: Result<Effect, GameError> },
    Searched { kind: SearchKind, target: Cell, found: Option<Position> },
    Rejected(GameError),
}

/// Everything the shell needs to report back after one action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    pub player: String,
    pub outcome: Outcome,
    pub eliminated: Option<String>,
    pub turn_consumed: bool,
    pub game_over: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    AwaitingAction { player: usize },
    GameOver,
}

/// Per-cell view handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Revealed(Cell),
    Occupied(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub size: usize,
    pub cells: Vec<Vec<CellView>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameView {
    pub snapshot: GridSnapshot,
    pub players: Vec<Player>,
    pub eliminated: Vec<Player>,
    pub current: Option<Player>,
    pub turn: u32,
    pub phase: GamePhase,
}
