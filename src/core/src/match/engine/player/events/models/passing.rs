use crate::r#match::ball::PassReceiver;
use nalgebra::Vector2;

#[derive(Debug, Clone, Copy)]
pub struct PassingEventContext {
    pub from_player_id: u32,
    pub receiver: PassReceiver,
    pub velocity: Vector2<f32>,
}

impl PassingEventContext {
    pub fn new(from_player_id: u32, receiver: PassReceiver, velocity: Vector2<f32>) -> Self {
        PassingEventContext {
            from_player_id,
            receiver,
            velocity,
        }
    }
}
