use crate::r#match::{MatchPlayer, MatchSettings, PlayerSide};
use nalgebra::Vector2;

pub struct FieldPlayerStrategy;

impl FieldPlayerStrategy {
    /// Attack along the own lane while the squad has the ball, otherwise fall back home.
    pub fn target_position(player: &MatchPlayer, team_has_ball: bool, settings: &MatchSettings) -> Vector2<f32> {
        if team_has_ball {
            Vector2::new(Self::attacking_x(player.side, settings), player.position.y)
        } else {
            player.start_position
        }
    }

    fn attacking_x(side: PlayerSide, settings: &MatchSettings) -> f32 {
        let depth = settings.field.margin + settings.goal.width + settings.ai.attacking_offset;

        match side {
            PlayerSide::Left => settings.field.width - depth,
            PlayerSide::Right => depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::PlayerRole;

    fn field_player(side: PlayerSide, x: f32, y: f32) -> MatchPlayer {
        MatchPlayer::new(1, side, PlayerRole::Field, Vector2::new(x, y), 4.0)
    }

    #[test]
    fn test_attacking_point_keeps_lane() {
        let settings = MatchSettings::default();

        let mut left = field_player(PlayerSide::Left, 50.0, 70.0);
        left.position = Vector2::new(90.0, 64.0);
        let right = field_player(PlayerSide::Right, 200.0, 130.0);

        assert_eq!(
            FieldPlayerStrategy::target_position(&left, true, &settings),
            Vector2::new(229.0, 64.0)
        );
        assert_eq!(
            FieldPlayerStrategy::target_position(&right, true, &settings),
            Vector2::new(27.0, 130.0)
        );
    }

    #[test]
    fn test_home_position_without_ball() {
        let settings = MatchSettings::default();

        let mut player = field_player(PlayerSide::Right, 220.0, 100.0);
        player.position = Vector2::new(120.0, 40.0);

        assert_eq!(
            FieldPlayerStrategy::target_position(&player, false, &settings),
            Vector2::new(220.0, 100.0)
        );
    }
}
