use football_core::r#match::input::{ControllerLatch, ControllerState, SquadInput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MIN_HOLD_TICKS: u32 = 10;
const MAX_HOLD_TICKS: u32 = 60;

const PASS_PRESS_CHANCE: f64 = 0.04;
const SHOOT_PRESS_CHANCE: f64 = 0.02;
const SELECT_PRESS_CHANCE: f64 = 0.005;

/// Seeded stand-in for a human at the pad: holds a random stick direction for a
/// while and occasionally presses the buttons.
pub struct ScriptedPad {
    rng: StdRng,
    latch: ControllerLatch,
    state: ControllerState,
    hold_ticks: u32,
}

impl ScriptedPad {
    pub fn new(seed: u64) -> Self {
        ScriptedPad {
            rng: StdRng::seed_from_u64(seed),
            latch: ControllerLatch::new(),
            state: ControllerState::default(),
            hold_ticks: 0,
        }
    }

    pub fn next(&mut self, dead_zone: f32) -> SquadInput {
        if self.hold_ticks == 0 {
            self.state.axis_x = self.rng.random_range(-1.0..=1.0);
            self.state.axis_y = self.rng.random_range(-1.0..=1.0);
            self.hold_ticks = self.rng.random_range(MIN_HOLD_TICKS..=MAX_HOLD_TICKS);
        }

        self.hold_ticks -= 1;

        self.state.pass = self.rng.random_bool(PASS_PRESS_CHANCE);
        self.state.shoot = self.rng.random_bool(SHOOT_PRESS_CHANCE);
        self.state.select = self.rng.random_bool(SELECT_PRESS_CHANCE);

        self.latch.next(self.state, dead_zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_script() {
        let mut first = ScriptedPad::new(42);
        let mut second = ScriptedPad::new(42);

        for _ in 0..500 {
            assert_eq!(first.next(0.2), second.next(0.2));
        }
    }

    #[test]
    fn test_direction_is_held_between_changes() {
        let mut pad = ScriptedPad::new(3);

        let first = pad.next(0.2);
        for _ in 1..MIN_HOLD_TICKS {
            let input = pad.next(0.2);

            assert_eq!(input.intent.movement(), first.intent.movement());
        }
    }
}
