use actix::prelude::*;

use crate::game::types::{Action, ActionResult, GameView, Player};

/// Submit one action for whoever currently holds the turn.
#[derive(Message)]
#[rtype(result = "ActionResult")]
pub struct SubmitAction {
    pub action: Action,
}

/// Read-only snapshot of the game for display.
#[derive(Message)]
#[rtype(result = "GameView")]
pub struct GetView;

/// Final ranking, best score first.
#[derive(Message)]
#[rtype(result = "Vec<Player>")]
pub struct GetStandings;
