pub mod ball;
pub mod context;
pub mod engine;
pub mod events;
pub mod field;
pub mod player;
pub mod tactics;

pub use context::*;
pub use engine::*;
pub use field::*;

pub use player::{
    ControlMode, MatchPlayer, MatchPlayerLite, PlayerRole, PlayerSide, PlayerTickContext, SteeringBehavior,
    SteeringOutput,
};
