use crate::r#match::PlayerSide;
use nalgebra::Vector2;

/// Normalised per-tick intent for the human-controlled agent of a squad.
///
/// Directional flags are level-triggered, `pass` and `shoot` are edge-triggered:
/// true only on the tick the underlying control goes from released to pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub pass: bool,
    pub shoot: bool,
}

impl PlayerIntent {
    /// Movement direction with each axis in {-1, 0, +1}; y grows downwards.
    pub fn movement(&self) -> Vector2<f32> {
        let axis = |negative: bool, positive: bool| match (negative, positive) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };

        Vector2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquadInput {
    pub intent: PlayerIntent,
    /// Edge-triggered: advance the human designation to the next roster slot.
    pub select: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchInput {
    pub left: SquadInput,
    pub right: SquadInput,
}

impl MatchInput {
    pub fn new(left: SquadInput, right: SquadInput) -> Self {
        MatchInput { left, right }
    }

    pub fn for_side(&self, side: PlayerSide) -> &SquadInput {
        match side {
            PlayerSide::Left => &self.left,
            PlayerSide::Right => &self.right,
        }
    }
}

/// Level state of one controller as read by an input collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerState {
    pub axis_x: f32,
    pub axis_y: f32,
    pub pass: bool,
    pub shoot: bool,
    pub select: bool,
}

/// Turns raw controller levels into a [`SquadInput`]: analog axes past the dead zone
/// become directional flags, buttons become rising-edge signals.
#[derive(Debug, Default)]
pub struct ControllerLatch {
    previous: ControllerState,
}

impl ControllerLatch {
    pub fn new() -> Self {
        ControllerLatch::default()
    }

    pub fn next(&mut self, state: ControllerState, dead_zone: f32) -> SquadInput {
        let input = SquadInput {
            intent: PlayerIntent {
                up: state.axis_y < -dead_zone,
                down: state.axis_y > dead_zone,
                left: state.axis_x < -dead_zone,
                right: state.axis_x > dead_zone,
                pass: state.pass && !self.previous.pass,
                shoot: state.shoot && !self.previous.shoot,
            },
            select: state.select && !self.previous.select,
        };

        self.previous = state;

        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_axes() {
        let intent = PlayerIntent {
            up: true,
            right: true,
            ..Default::default()
        };

        assert_eq!(intent.movement(), Vector2::new(1.0, -1.0));
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let intent = PlayerIntent {
            left: true,
            right: true,
            down: true,
            ..Default::default()
        };

        assert_eq!(intent.movement(), Vector2::new(0.0, 1.0));
    }

    #[test]
    fn test_latch_dead_zone() {
        let mut latch = ControllerLatch::new();

        let input = latch.next(
            ControllerState {
                axis_x: 0.15,
                axis_y: -0.9,
                ..Default::default()
            },
            0.2,
        );

        assert!(!input.intent.left);
        assert!(!input.intent.right);
        assert!(input.intent.up);
        assert!(!input.intent.down);
    }

    #[test]
    fn test_latch_buttons_fire_on_rising_edge_only() {
        let mut latch = ControllerLatch::new();
        let pressed = ControllerState {
            pass: true,
            select: true,
            ..Default::default()
        };

        let first = latch.next(pressed, 0.2);
        let held = latch.next(pressed, 0.2);
        let released = latch.next(ControllerState::default(), 0.2);
        let again = latch.next(pressed, 0.2);

        assert!(first.intent.pass && first.select);
        assert!(!held.intent.pass && !held.select);
        assert!(!released.intent.pass && !released.select);
        assert!(again.intent.pass && again.select);
        assert!(!again.intent.shoot);
    }
}
