pub mod behaviours;
pub mod context;
pub mod events;
pub mod player;
pub mod strategies;

pub use behaviours::*;
pub use context::*;
pub use player::*;
