use crate::r#match::ball::{Ball, FlightState, PassReceiver};
use crate::r#match::events::EventCollection;
use crate::r#match::player::behaviours::SteeringBehavior;
use crate::r#match::player::events::{PassingEventContext, PlayerEvent, ShootingEventContext};
use crate::r#match::player::PlayerTickContext;
use crate::r#match::MatchSettings;
use crate::utils::VectorExtensions;
use nalgebra::Vector2;
use std::cmp::Ordering;

/// Half of the pitch a squad defends. The left squad attacks the right goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum PlayerSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum PlayerRole {
    Field,
    Keeper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ControlMode {
    Human,
    Autonomous,
}

#[derive(Debug, Clone)]
pub struct MatchPlayer {
    pub id: u32,
    pub side: PlayerSide,
    pub role: PlayerRole,
    pub position: Vector2<f32>,
    /// Formation slot; kickoff position and defensive target.
    pub start_position: Vector2<f32>,
    pub velocity: Vector2<f32>,
    pub radius: f32,
    pub control: ControlMode,
    pub has_possession: bool,
}

impl MatchPlayer {
    pub fn new(id: u32, side: PlayerSide, role: PlayerRole, position: Vector2<f32>, radius: f32) -> Self {
        MatchPlayer {
            id,
            side,
            role,
            position,
            start_position: position,
            velocity: Vector2::zeros(),
            radius,
            control: ControlMode::Autonomous,
            has_possession: false,
        }
    }

    pub fn update(&mut self, ball: &Ball, ctx: &PlayerTickContext) -> EventCollection {
        let mut events = EventCollection::new();

        if let Some(event) = self.check_ball_collision(ball, ctx) {
            events.add_player_event(event);
        }

        match self.control {
            ControlMode::Human => {
                let speed = ctx.settings.player.speed;
                let steering = SteeringBehavior::Drive {
                    direction: ctx.intent.movement(),
                };

                self.velocity = steering.calculate(self, speed).velocity;
                self.move_to();

                if let Some(event) = self.process_actions(ctx) {
                    events.add_player_event(event);
                }
            }
            ControlMode::Autonomous => {
                let speed = ctx.settings.player.speed * ctx.settings.ai.approach_fraction;
                let team_has_ball = self.has_possession || ctx.teammate_has_ball();
                let steering = SteeringBehavior::Seek {
                    target: self.role.target_position(self, team_has_ball, ctx.settings),
                };

                self.velocity = steering.calculate(self, speed).velocity;
                self.move_to();
            }
        }

        self.check_boundary_collision(ctx.settings);

        events
    }

    /// Recomputes possession against the ball as left by agents processed earlier this tick.
    fn check_ball_collision(&mut self, ball: &Ball, ctx: &PlayerTickContext) -> Option<PlayerEvent> {
        if ball.is_locked_for(self.id) {
            self.has_possession = false;
            return None;
        }

        let distance = self.position.distance_to(&ball.position);
        if distance >= self.radius + ball.radius {
            self.has_possession = false;
            return None;
        }

        if ctx.ball_claimed_by.is_some_and(|owner_id| owner_id != self.id) {
            self.has_possession = false;
            return None;
        }

        let can_take_ball = match ball.flight {
            FlightState::Idle => true,
            FlightState::InFlight { receiver: None } => true,
            FlightState::InFlight {
                receiver: Some(receiver),
            } => receiver.player_id == self.id || receiver.side != self.side,
        };

        self.has_possession = can_take_ball;

        if can_take_ball {
            Some(PlayerEvent::ClaimBall(self.id))
        } else {
            None
        }
    }

    fn process_actions(&mut self, ctx: &PlayerTickContext) -> Option<PlayerEvent> {
        if !self.has_possession {
            return None;
        }

        if ctx.intent.pass {
            self.pass(ctx)
        } else if ctx.intent.shoot {
            self.shoot(ctx.settings)
        } else {
            None
        }
    }

    /// Passes to the closest teammate; silently keeps the ball when there is nobody to pass to.
    fn pass(&mut self, ctx: &PlayerTickContext) -> Option<PlayerEvent> {
        let receiver = ctx.teammates.iter().min_by(|a, b| {
            let distance_a = a.position.distance_to(&self.position);
            let distance_b = b.position.distance_to(&self.position);

            distance_a.partial_cmp(&distance_b).unwrap_or(Ordering::Equal)
        })?;

        let settings = ctx.settings;
        let velocity = self.position.direction_to(&receiver.position)
            * settings.ball.speed
            * settings.kick.pass_multiplier;

        self.has_possession = false;

        Some(PlayerEvent::PassTo(PassingEventContext::new(
            self.id,
            PassReceiver {
                player_id: receiver.id,
                side: receiver.side,
            },
            velocity,
        )))
    }

    fn shoot(&mut self, settings: &MatchSettings) -> Option<PlayerEvent> {
        let target = self.opponent_goal_position(settings);

        if self.position.distance_to(&target) == 0.0 {
            return None;
        }

        let velocity = self.position.direction_to(&target)
            * settings.ball.speed
            * settings.kick.shoot_multiplier;

        self.has_possession = false;

        Some(PlayerEvent::Shoot(ShootingEventContext::new(
            self.id, target, velocity,
        )))
    }

    fn move_to(&mut self) {
        if !self.velocity.x.is_nan() {
            self.position.x += self.velocity.x;
        }

        if !self.velocity.y.is_nan() {
            self.position.y += self.velocity.y;
        }
    }

    fn check_boundary_collision(&mut self, settings: &MatchSettings) {
        let (min, max) = Self::bounds(self.radius, settings);

        self.position = self.position.clamp_to(&min, &max);
    }

    /// Corners of the area an agent's center may occupy.
    pub fn bounds(radius: f32, settings: &MatchSettings) -> (Vector2<f32>, Vector2<f32>) {
        let inset = settings.field.margin + radius;

        (
            Vector2::new(inset, inset),
            Vector2::new(settings.field.width - inset, settings.field.height - inset),
        )
    }

    /// Midpoint of the goal mouth this player attacks.
    pub fn opponent_goal_position(&self, settings: &MatchSettings) -> Vector2<f32> {
        let half_goal = settings.goal.width / 2.0;
        let y = settings.field.height / 2.0;

        match self.side {
            PlayerSide::Left => Vector2::new(settings.field.width - settings.field.margin - half_goal, y),
            PlayerSide::Right => Vector2::new(settings.field.margin + half_goal, y),
        }
    }

    #[inline]
    pub fn is_human(&self) -> bool {
        self.control == ControlMode::Human
    }

    pub fn reset_position(&mut self) {
        self.position = self.start_position;
        self.velocity = Vector2::zeros();
        self.has_possession = false;
    }
}

#[derive(Debug, Copy, Clone)]
pub struct MatchPlayerLite {
    pub id: u32,
    pub side: PlayerSide,
    pub position: Vector2<f32>,
    pub has_possession: bool,
}

impl From<&MatchPlayer> for MatchPlayerLite {
    fn from(player: &MatchPlayer) -> Self {
        MatchPlayerLite {
            id: player.id,
            side: player.side,
            position: player.position,
            has_possession: player.has_possession,
        }
    }
}
