use nalgebra::Vector2;

#[derive(Debug, Clone, Copy)]
pub struct ShootingEventContext {
    pub from_player_id: u32,
    /// Goal mouth midpoint the shot was aimed at.
    pub target: Vector2<f32>,
    pub velocity: Vector2<f32>,
}

impl ShootingEventContext {
    pub fn new(from_player_id: u32, target: Vector2<f32>, velocity: Vector2<f32>) -> Self {
        ShootingEventContext {
            from_player_id,
            target,
            velocity,
        }
    }
}
