pub mod field_players;
pub mod goalkeepers;

use crate::r#match::{MatchPlayer, MatchSettings, PlayerRole};
use field_players::FieldPlayerStrategy;
use goalkeepers::GoalkeeperStrategy;
use nalgebra::Vector2;

impl PlayerRole {
    /// Point an autonomous agent of this role heads for this tick.
    pub fn target_position(&self, player: &MatchPlayer, team_has_ball: bool, settings: &MatchSettings) -> Vector2<f32> {
        match self {
            PlayerRole::Field => FieldPlayerStrategy::target_position(player, team_has_ball, settings),
            PlayerRole::Keeper => GoalkeeperStrategy::target_position(player, settings),
        }
    }
}
