//! Session layer.
//!
//! Wraps a game in an actor so actions from any caller are applied one after another.

pub mod messages;
pub mod server;

pub use server::GameSession;
