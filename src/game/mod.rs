//! Game engine: grid model, search, player movement, and the turn controller.

pub mod errors;
pub mod state;
pub mod types;

pub mod entities;
pub mod grid;
pub mod systems;
