use crate::r#match::{MatchPlayer, MatchSettings, PlayerSide};
use nalgebra::Vector2;

pub struct GoalkeeperStrategy;

impl GoalkeeperStrategy {
    /// Keepers hold a station in front of their own goal regardless of possession.
    pub fn target_position(player: &MatchPlayer, settings: &MatchSettings) -> Vector2<f32> {
        let inset = settings.field.margin + player.radius + settings.ai.keeper_offset;

        let x = match player.side {
            PlayerSide::Left => inset,
            PlayerSide::Right => settings.field.width - inset,
        };

        Vector2::new(x, settings.field.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::PlayerRole;

    #[test]
    fn test_keeper_station() {
        let settings = MatchSettings::default();

        let left = MatchPlayer::new(5, PlayerSide::Left, PlayerRole::Keeper, Vector2::new(10.0, 90.0), 4.0);
        let right = MatchPlayer::new(10, PlayerSide::Right, PlayerRole::Keeper, Vector2::new(240.0, 90.0), 4.0);

        assert_eq!(GoalkeeperStrategy::target_position(&left, &settings), Vector2::new(11.0, 96.0));
        assert_eq!(GoalkeeperStrategy::target_position(&right, &settings), Vector2::new(245.0, 96.0));
    }

    #[test]
    fn test_keeper_ignores_possession() {
        let settings = MatchSettings::default();
        let keeper = MatchPlayer::new(5, PlayerSide::Left, PlayerRole::Keeper, Vector2::new(10.0, 90.0), 4.0);

        assert_eq!(
            PlayerRole::Keeper.target_position(&keeper, true, &settings),
            PlayerRole::Keeper.target_position(&keeper, false, &settings)
        );
    }
}
