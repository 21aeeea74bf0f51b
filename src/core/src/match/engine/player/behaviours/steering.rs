use crate::r#match::MatchPlayer;
use crate::utils::VectorExtensions;
use nalgebra::Vector2;

pub enum SteeringBehavior {
    /// Straight line towards `target`; no movement once there.
    Seek { target: Vector2<f32> },
    /// Raw direction from a controller, axes in {-1, 0, +1}.
    Drive { direction: Vector2<f32> },
}

impl SteeringBehavior {
    pub fn calculate(&self, player: &MatchPlayer, max_speed: f32) -> SteeringOutput {
        match self {
            SteeringBehavior::Seek { target } => {
                SteeringOutput::new(player.position.direction_to(target) * max_speed)
            }
            SteeringBehavior::Drive { direction } => SteeringOutput::new(direction * max_speed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringOutput {
    pub velocity: Vector2<f32>,
}

impl SteeringOutput {
    pub fn new(velocity: Vector2<f32>) -> Self {
        SteeringOutput { velocity }
    }
}
