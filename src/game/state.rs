//! Game state and turn controller.
//!
//! `GameState` is the only thing that mutates the grid or the roster. One call
//! to `submit_action` resolves one action for the current player: apply it,
//! drop the player if their health ran out, check for the end of the game,
//! then hand the turn on.

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::{Rng, rng};
use serde::{Deserialize, Serialize};

use crate::config::{GameConfig, InvalidActionPolicy};
use crate::game::entities::spawn_roster;
use crate::game::errors::{GameError, Result};
use crate::game::grid::Grid;
use crate::game::systems::{apply_cell_effect, binary_search, build_snapshot, graph_search, is_game_over, move_player};
use crate::game::types::{Action, ActionResult, GamePhase, GameView, GridSnapshot, Outcome, Player, SearchKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    /// Active roster in turn order.
    pub players: Vec<Player>,
    /// Players removed from the roster, in elimination order.
    pub eliminated: Vec<Player>,
    /// Completed actions so far.
    pub turn: u32,
    pub phase: GamePhase,
    pub invalid_action_policy: InvalidActionPolicy,
}

impl GameState {
    /// Start a game from `config`, drawing the board from its seed or the thread RNG.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        match config.seed {
            Some(seed) => Self::new(config, &mut StdRng::seed_from_u64(seed)),
            None => Self::new(config, &mut rng()),
        }
    }

    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self> {
        config
            .validate()
            .map_err(|e| GameError::InvalidConfig(e.to_string()))?;

        let grid = Grid::generate(config.grid_size, &config.placements(), rng)?;
        let players = spawn_roster(&config.player_names, config.initial_health);
        Self::with_grid(grid, players, config.invalid_action_policy)
    }

    /// Start a game on a prepared grid. The first player in `players` moves first.
    pub fn with_grid(grid: Grid, players: Vec<Player>, invalid_action_policy: InvalidActionPolicy) -> Result<Self> {
        if players.is_empty() {
            return Err(GameError::InvalidConfig("at least one player is required".into()));
        }
        if let Some(p) = players.iter().find(|p| !grid.contains(p.pos)) {
            return Err(GameError::InvalidConfig(format!("{} starts outside the grid at {}", p.name, p.pos)));
        }

        info!(
            "[GameState] New game: {}x{} grid, players={:?}",
            grid.size(),
            grid.size(),
            players.iter().map(|p| &p.name).collect::<Vec<_>>()
        );

        Ok(GameState {
            grid,
            players,
            eliminated: Vec::new(),
            turn: 0,
            phase: GamePhase::AwaitingAction { player: 0 },
            invalid_action_policy,
        })
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn current_player(&self) -> Option<&Player> {
        match self.phase {
            GamePhase::AwaitingAction { player } => self.players.get(player),
            GamePhase::GameOver => None,
        }
    }

    /// Resolve one action for the current player.
    pub fn submit_action(&mut self, action: Action) -> ActionResult {
        let GamePhase::AwaitingAction { player: index } = self.phase else {
            warn!("[GameState] Action received after game over: {:?}", action);
            return ActionResult {
                player: String::new(),
                outcome: Outcome::Rejected(GameError::GameOver),
                eliminated: None,
                turn_consumed: false,
                game_over: true,
            };
        };

        let size = self.grid.size();
        let advance_on_invalid = self.invalid_action_policy == InvalidActionPolicy::AdvanceTurn;
        let player = &mut self.players[index];
        let name = player.name.clone();

        let (outcome, turn_consumed) = match action {
            Action::Move(direction) => match move_player(player, direction, size) {
                Ok(to) => {
                    let effect = apply_cell_effect(&mut self.grid, player);
                    (Outcome::Moved { to, effect }, true)
                }
                Err(err) => (Outcome::Rejected(err), true),
            },
            Action::Search { algorithm, target } => {
                let report = graph_search(&self.grid, player.pos, target, algorithm);
                let outcome = Outcome::Searched {
                    kind: SearchKind::Graph(algorithm),
                    target,
                    found: report.found,
                };
                (outcome, true)
            }
            Action::SearchRow { target, row } => match binary_search(&self.grid, row, target) {
                Ok(report) => {
                    let outcome = Outcome::Searched {
                        kind: SearchKind::Binary { row },
                        target,
                        found: report.found,
                    };
                    (outcome, true)
                }
                Err(err) => (Outcome::Rejected(err), advance_on_invalid),
            },
            Action::Unrecognized(input) => (Outcome::Rejected(GameError::InvalidAction(input)), advance_on_invalid),
        };

        match &outcome {
            Outcome::Rejected(err) => warn!("[GameState] {} rejected: {}", name, err),
            _ => debug!("[GameState] turn={} {} -> {:?}", self.turn, name, outcome),
        }

        if !turn_consumed {
            return ActionResult {
                player: name,
                outcome,
                eliminated: None,
                turn_consumed,
                game_over: false,
            };
        }

        let eliminated = self.resolve_turn(index);
        ActionResult {
            player: name,
            outcome,
            eliminated,
            turn_consumed,
            game_over: self.is_over(),
        }
    }

    /// Eliminate the acting player if needed, check for game end, and pick who acts next.
    fn resolve_turn(&mut self, index: usize) -> Option<String> {
        self.turn += 1;

        let mut eliminated = None;
        if !self.players[index].is_alive() {
            let mut out = self.players.remove(index);
            out.health = out.health.max(0);
            info!("[GameState] {} is eliminated (score {})", out.name, out.score);
            eliminated = Some(out.name.clone());
            self.eliminated.push(out);
        }

        if is_game_over(&self.grid, &self.players) {
            self.phase = GamePhase::GameOver;
            info!("[GameState] Game over after {} turns", self.turn);
        } else {
            // After a removal the next player has slid into `index`.
            let next = if eliminated.is_some() { index } else { index + 1 };
            self.phase = GamePhase::AwaitingAction { player: next % self.players.len() };
        }

        eliminated
    }

    pub fn render(&self) -> GridSnapshot {
        build_snapshot(&self.grid, &self.players)
    }

    pub fn view(&self) -> GameView {
        GameView {
            snapshot: self.render(),
            players: self.players.clone(),
            eliminated: self.eliminated.clone(),
            current: self.current_player().cloned(),
            turn: self.turn,
            phase: self.phase,
        }
    }

    /// Every player who took part, best score first. Ties keep roster order, eliminated players last.
    pub fn standings(&self) -> Vec<Player> {
        let mut all: Vec<Player> = self.players.iter().chain(self.eliminated.iter()).cloned().collect();
        all.sort_by(|a, b| b.score.cmp(&a.score));
        all
    }
}
