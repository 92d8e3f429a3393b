//! Game session actor.
//!
//! Owns one `GameState`. Every action goes through the actor's mailbox, so
//! turns are resolved strictly one at a time no matter how many callers hold
//! the address.

use actix::prelude::*;
use actix::MessageResult;
use log::{debug, info};
use uuid::Uuid;

use crate::game::state::GameState;
use crate::session::messages::{GetStandings, GetView, SubmitAction};

pub struct GameSession {
    pub game_id: Uuid,
    game_state: GameState,
}

impl GameSession {
    pub fn new(game_state: GameState) -> Self {
        Self {
            game_id: Uuid::new_v4(),
            game_state,
        }
    }
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn started(&mut self, _: &mut Self::Context) {
        info!(
            "[GameSession] Started game_id={} players={:?}",
            self.game_id,
            self.game_state.players.iter().map(|p| &p.name).collect::<Vec<_>>()
        );
    }

    fn stopped(&mut self, _: &mut Self::Context) {
        info!("[GameSession] Stopped game_id={} after {} turns", self.game_id, self.game_state.turn);
    }
}

impl Handler<SubmitAction> for GameSession {
    type Result = MessageResult<SubmitAction>;

    fn handle(&mut self, msg: SubmitAction, _: &mut Context<Self>) -> Self::Result {
        debug!("[GameSession] game_id={} turn={} action={:?}", self.game_id, self.game_state.turn, msg.action);
        MessageResult(self.game_state.submit_action(msg.action))
    }
}

impl Handler<GetView> for GameSession {
    type Result = MessageResult<GetView>;

    fn handle(&mut self, _: GetView, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.game_state.view())
    }
}

impl Handler<GetStandings> for GameSession {
    type Result = MessageResult<GetStandings>;

    fn handle(&mut self, _: GetStandings, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.game_state.standings())
    }
}
