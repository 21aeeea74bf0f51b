use crate::r#match::ball::events::{BallEvent, GoalSide};
use crate::r#match::events::EventCollection;
use crate::r#match::{MatchSettings, PlayerSide};
use nalgebra::Vector2;

/// Designated target of a pass; interception legality depends on its side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassReceiver {
    pub player_id: u32,
    pub side: PlayerSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlightState {
    /// Loose on the pitch or held by a carrier.
    #[default]
    Idle,
    /// Propelled by a pass (with receiver) or a shot (without one).
    InFlight { receiver: Option<PassReceiver> },
}

#[derive(Debug, Clone)]
pub struct Ball {
    pub start_position: Vector2<f32>,
    pub position: Vector2<f32>,
    pub velocity: Vector2<f32>,
    pub radius: f32,

    pub flight: FlightState,
    /// Ticks during which only the designated receiver may take the ball.
    pub cooldown: u32,
}

impl Ball {
    pub fn with_coord(field_width: f32, field_height: f32, radius: f32) -> Self {
        let center = Vector2::new(field_width / 2.0, field_height / 2.0);

        Ball {
            start_position: center,
            position: center,
            velocity: Vector2::zeros(),
            radius,
            flight: FlightState::Idle,
            cooldown: 0,
        }
    }

    pub fn update(
        &mut self,
        settings: &MatchSettings,
        carrier: Option<Vector2<f32>>,
        events: &mut EventCollection,
    ) {
        match carrier {
            Some(carrier_position) => self.carry(carrier_position),
            None => self.update_velocity(settings),
        }

        if self.cooldown > 0 {
            self.cooldown -= 1;
        }

        self.settle_if_stopped(settings);

        if self.check_goal(settings, events) {
            return;
        }

        self.check_boundary_collision(settings);
    }

    fn update_velocity(&mut self, settings: &MatchSettings) {
        self.position += self.velocity;
        self.velocity *= settings.ball.friction;
    }

    /// Pins the ball to its carrier for this tick.
    pub fn carry(&mut self, carrier_position: Vector2<f32>) {
        self.position = carrier_position;
        self.velocity = Vector2::zeros();
    }

    fn settle_if_stopped(&mut self, settings: &MatchSettings) {
        let epsilon = settings.ball.stop_epsilon;

        if self.velocity.x.abs() < epsilon && self.velocity.y.abs() < epsilon {
            self.velocity = Vector2::zeros();
            self.flight = FlightState::Idle;
        }
    }

    /// Tests both goal lines. Returns true when a goal was scored; the caller resets the
    /// match and no further boundary handling applies this tick.
    pub fn check_goal(&mut self, settings: &MatchSettings, events: &mut EventCollection) -> bool {
        let crossed_left = self.position.x - self.radius < 0.0;
        let crossed_right = self.position.x + self.radius > settings.field.width;

        if !(crossed_left || crossed_right) || !settings.is_within_goal_aperture(self.position.y) {
            return false;
        }

        let side = if crossed_left {
            GoalSide::Left
        } else {
            GoalSide::Right
        };

        events.add_ball_event(BallEvent::Goal(side));

        true
    }

    /// Bounces off goal lines outside the aperture and off the top and bottom margins.
    pub fn check_boundary_collision(&mut self, settings: &MatchSettings) {
        let restitution = settings.ball.restitution;
        let field_width = settings.field.width;
        let field_height = settings.field.height;
        let margin = settings.field.margin;

        if self.position.x - self.radius < 0.0 {
            self.velocity.x = self.velocity.x.abs() * restitution;
            self.position.x = self.radius;
        }

        if self.position.x + self.radius > field_width {
            self.velocity.x = -self.velocity.x.abs() * restitution;
            self.position.x = field_width - self.radius;
        }

        if self.position.y - self.radius < margin {
            self.velocity.y = self.velocity.y.abs() * restitution;
            self.position.y = margin + self.radius;
        }

        if self.position.y + self.radius > field_height - margin {
            self.velocity.y = -self.velocity.y.abs() * restitution;
            self.position.y = field_height - margin - self.radius;
        }
    }

    /// Sends the ball off with `velocity` and opens the post-touch window.
    pub fn kick(&mut self, velocity: Vector2<f32>, receiver: Option<PassReceiver>, cooldown: u32) {
        self.velocity = velocity;
        self.flight = FlightState::InFlight { receiver };
        self.cooldown = cooldown;
    }

    /// Brings the ball under control of whoever just captured it.
    pub fn settle(&mut self) {
        self.velocity = Vector2::zeros();
        self.flight = FlightState::Idle;
        self.cooldown = 0;
    }

    #[inline]
    pub fn receiver(&self) -> Option<PassReceiver> {
        match self.flight {
            FlightState::InFlight { receiver } => receiver,
            FlightState::Idle => None,
        }
    }

    #[inline]
    pub fn is_in_flight(&self) -> bool {
        matches!(self.flight, FlightState::InFlight { .. })
    }

    /// While the cooldown runs only the designated receiver may touch the ball.
    pub fn is_locked_for(&self, player_id: u32) -> bool {
        self.cooldown > 0 && self.receiver().map(|r| r.player_id) != Some(player_id)
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.norm()
    }

    pub fn reset(&mut self) {
        self.position = self.start_position;
        self.velocity = Vector2::zeros();
        self.flight = FlightState::Idle;
        self.cooldown = 0;
    }
}
