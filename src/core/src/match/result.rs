use crate::r#match::{MatchField, MatchPlayer, PlayerRole, PlayerSide};
use itertools::Itertools;
use nalgebra::Vector2;
use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalDetail {
    pub side: PlayerSide,
    pub tick: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TeamScore {
    score: u32,
}

impl TeamScore {
    #[inline]
    pub fn get(&self) -> u32 {
        self.score
    }

    fn increment(&mut self) {
        self.score += 1;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Score {
    pub left: TeamScore,
    pub right: TeamScore,
    pub details: Vec<GoalDetail>,
}

impl Score {
    pub fn new() -> Self {
        Score::default()
    }

    pub fn add_goal(&mut self, side: PlayerSide, tick: u64) {
        match side {
            PlayerSide::Left => self.left.increment(),
            PlayerSide::Right => self.right.increment(),
        }

        self.details.push(GoalDetail { side, tick });
    }

    pub fn get(&self, side: PlayerSide) -> u32 {
        match side {
            PlayerSide::Left => self.left.get(),
            PlayerSide::Right => self.right.get(),
        }
    }

    /// Goals in the order they were scored, e.g. `Left@120, Right@415`.
    pub fn timeline(&self) -> String {
        self.details
            .iter()
            .map(|goal| format!("{:?}@{}", goal.side, goal.tick))
            .join(", ")
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.left.get(), self.right.get())
    }
}

/// Read-only view of the match for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSnapshot {
    pub tick: u64,
    pub ball: BallSnapshot,
    pub players: Vec<PlayerSnapshot>,
    pub left_score: u32,
    pub right_score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallSnapshot {
    pub position: Vector2<f32>,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerSnapshot {
    pub id: u32,
    pub side: PlayerSide,
    pub role: PlayerRole,
    pub position: Vector2<f32>,
    pub radius: f32,
    pub is_human: bool,
    pub has_possession: bool,
}

impl From<&MatchPlayer> for PlayerSnapshot {
    fn from(player: &MatchPlayer) -> Self {
        PlayerSnapshot {
            id: player.id,
            side: player.side,
            role: player.role,
            position: player.position,
            radius: player.radius,
            is_human: player.is_human(),
            has_possession: player.has_possession,
        }
    }
}

impl MatchSnapshot {
    pub fn capture(field: &MatchField, score: &Score, tick: u64) -> Self {
        MatchSnapshot {
            tick,
            ball: BallSnapshot {
                position: field.ball.position,
                radius: field.ball.radius,
            },
            players: field.players().map(PlayerSnapshot::from).collect(),
            left_score: score.left.get(),
            right_score: score.right.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::MatchSettings;

    #[test]
    fn test_score_increment_and_display() {
        let mut score = Score::new();

        score.add_goal(PlayerSide::Right, 120);
        score.add_goal(PlayerSide::Right, 415);
        score.add_goal(PlayerSide::Left, 900);

        assert_eq!(score.get(PlayerSide::Left), 1);
        assert_eq!(score.get(PlayerSide::Right), 2);
        assert_eq!(score.to_string(), "1:2");
        assert_eq!(score.timeline(), "Right@120, Right@415, Left@900");
    }

    #[test]
    fn test_snapshot_mirrors_field() {
        let field = MatchField::with_default_lineup(&MatchSettings::default());
        let mut score = Score::new();
        score.add_goal(PlayerSide::Left, 3);

        let snapshot = MatchSnapshot::capture(&field, &score, 7);

        assert_eq!(snapshot.tick, 7);
        assert_eq!(snapshot.left_score, 1);
        assert_eq!(snapshot.right_score, 0);
        assert_eq!(snapshot.ball.radius, 3.0);
        assert_eq!(snapshot.players.len(), 10);
        assert_eq!(snapshot.players.iter().filter(|p| p.is_human).count(), 2);
        assert_eq!(snapshot.players[4].role, PlayerRole::Keeper);
    }

    #[test]
    fn test_snapshot_serializes() {
        let field = MatchField::with_default_lineup(&MatchSettings::default());
        let snapshot = MatchSnapshot::capture(&field, &Score::new(), 0);

        let json = serde_json::to_string(&snapshot).unwrap();

        assert!(json.contains("\"left_score\":0"));
        assert!(json.contains("\"is_human\":true"));
    }
}
