use crate::r#match::ball::Ball;
use crate::r#match::tactics::Lineup;
use crate::r#match::{MatchPlayer, MatchSettings, MatchSquad, PlayerSide};
use nalgebra::Vector2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchFieldSize {
    pub width: f32,
    pub height: f32,
}

impl MatchFieldSize {
    pub fn new(width: f32, height: f32) -> Self {
        MatchFieldSize { width, height }
    }
}

pub struct MatchField {
    pub size: MatchFieldSize,
    pub ball: Ball,
    pub left_squad: MatchSquad,
    pub right_squad: MatchSquad,
}

impl MatchField {
    pub fn new(settings: &MatchSettings, left_squad: MatchSquad, right_squad: MatchSquad) -> Self {
        let size = MatchFieldSize::new(settings.field.width, settings.field.height);

        MatchField {
            size,
            ball: Ball::with_coord(size.width, size.height, settings.ball.radius),
            left_squad,
            right_squad,
        }
    }

    /// Player ids are assigned in roster order, left squad first, starting at 1.
    pub fn with_lineup(settings: &MatchSettings, lineup: &Lineup) -> Self {
        let right_first_id = lineup.left.len() as u32 + 1;

        let left_squad = MatchSquad::from_lineup(PlayerSide::Left, &lineup.left, 1, settings);
        let right_squad = MatchSquad::from_lineup(PlayerSide::Right, &lineup.right, right_first_id, settings);

        Self::new(settings, left_squad, right_squad)
    }

    pub fn with_default_lineup(settings: &MatchSettings) -> Self {
        Self::with_lineup(settings, &Lineup::default())
    }

    /// Kickoff after a goal: ball to the center, every agent home without the ball.
    /// Control designations are kept.
    pub fn reset_positions(&mut self) {
        self.ball.reset();
        self.left_squad.reset_positions();
        self.right_squad.reset_positions();
    }

    pub fn squad(&self, side: PlayerSide) -> &MatchSquad {
        match side {
            PlayerSide::Left => &self.left_squad,
            PlayerSide::Right => &self.right_squad,
        }
    }

    pub fn squad_mut(&mut self, side: PlayerSide) -> &mut MatchSquad {
        match side {
            PlayerSide::Left => &mut self.left_squad,
            PlayerSide::Right => &mut self.right_squad,
        }
    }

    /// All agents in update order.
    pub fn players(&self) -> impl Iterator<Item = &MatchPlayer> {
        self.left_squad.players.iter().chain(self.right_squad.players.iter())
    }

    pub fn players_mut(&mut self) -> impl Iterator<Item = &mut MatchPlayer> {
        self.left_squad
            .players
            .iter_mut()
            .chain(self.right_squad.players.iter_mut())
    }

    pub fn get_player(&self, id: u32) -> Option<&MatchPlayer> {
        self.players().find(|p| p.id == id)
    }

    pub fn get_player_mut(&mut self, id: u32) -> Option<&mut MatchPlayer> {
        self.players_mut().find(|p| p.id == id)
    }

    pub fn possessor(&self) -> Option<&MatchPlayer> {
        self.players().find(|p| p.has_possession)
    }

    /// Where the ball is pinned this tick, if anyone holds it.
    pub fn carrier_position(&self) -> Option<Vector2<f32>> {
        self.possessor().map(|p| p.position)
    }
}
