/// Main configuration module.
///
/// Re-exports the gameplay constants and the runtime game configuration.
pub mod game;
pub mod settings;

pub use settings::{ConfigError, GameConfig, InvalidActionPolicy};
