//! Main entry point for the treasure hunt game.
//!
//! Initializes logging, loads the game configuration, starts the game session
//! actor, and hands control to the interactive prompt loop.

use std::io;

use actix::Actor;
use log::error;

use crate::config::GameConfig;
use crate::game::state::GameState;
use crate::session::GameSession;

mod cli;
mod config;
mod game;
mod session;

#[actix::main]
async fn main() -> io::Result<()> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    let config = GameConfig::from_env().map_err(|e| {
        error!("[Main] {}", e);
        io::Error::other(e)
    })?;

    let game_state = GameState::from_config(&config).map_err(|e| {
        error!("[Main] Could not start a game: {}", e);
        io::Error::other(e)
    })?;

    // Every action goes through this actor, one at a time.
    let session = GameSession::new(game_state).start();

    cli::game_loop::run_game_loop(session).await
}
