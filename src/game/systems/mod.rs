pub mod movement;
pub mod render;
pub mod rules;
pub mod search;

pub use movement::*;
pub use render::*;
pub use rules::*;
pub use search::*;
