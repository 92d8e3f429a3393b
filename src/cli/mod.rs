//! Text shell for local play: command parsing, terminal rendering, and the prompt loop.

pub mod command;
pub mod game_loop;
pub mod render;
