use crate::r#match::tactics::LineupSlot;
use crate::r#match::{ControlMode, MatchPlayer, MatchPlayerLite, MatchSettings, PlayerSide};
use crate::utils::VectorExtensions;
use log::debug;
use nalgebra::Vector2;

#[derive(Debug, Clone)]
pub struct MatchSquad {
    pub side: PlayerSide,
    pub players: Vec<MatchPlayer>,
    /// Roster slot currently driven by the human controller.
    pub controlled_index: usize,
}

impl MatchSquad {
    /// Builds the squad with the first roster slot under human control.
    pub fn new(side: PlayerSide, players: Vec<MatchPlayer>) -> Self {
        let mut squad = MatchSquad {
            side,
            players,
            controlled_index: 0,
        };

        squad.apply_control();
        squad
    }

    /// Slots outside the playable area are pulled onto its edge, so home positions
    /// always satisfy the field clamp.
    pub fn from_lineup(side: PlayerSide, lineup: &[LineupSlot], first_id: u32, settings: &MatchSettings) -> Self {
        let radius = settings.player.radius;
        let (min, max) = MatchPlayer::bounds(radius, settings);

        let players = lineup
            .iter()
            .zip(first_id..)
            .map(|(slot, id)| {
                let home = Vector2::new(slot.x, slot.y).clamp_to(&min, &max);

                MatchPlayer::new(id, side, slot.role, home, radius)
            })
            .collect();

        Self::new(side, players)
    }

    /// Moves human control to the next roster slot, wrapping at the end.
    pub fn cycle_control(&mut self) {
        if self.players.is_empty() {
            return;
        }

        self.controlled_index = (self.controlled_index + 1) % self.players.len();
        self.apply_control();
    }

    pub fn give_control_to(&mut self, player_id: u32) {
        if let Some(index) = self.players.iter().position(|p| p.id == player_id) {
            self.controlled_index = index;
            self.apply_control();
        }
    }

    fn apply_control(&mut self) {
        for (index, player) in self.players.iter_mut().enumerate() {
            player.control = if index == self.controlled_index {
                ControlMode::Human
            } else {
                ControlMode::Autonomous
            };
        }

        if let Some(player) = self.controlled() {
            debug!("{:?} squad control moves to player {}", self.side, player.id);
        }
    }

    pub fn controlled(&self) -> Option<&MatchPlayer> {
        self.players.get(self.controlled_index)
    }

    pub fn possessor(&self) -> Option<&MatchPlayer> {
        self.players.iter().find(|p| p.has_possession)
    }

    /// Lightweight view of the roster without `player_id`, in roster order.
    pub fn teammates_of(&self, player_id: u32) -> Vec<MatchPlayerLite> {
        self.players
            .iter()
            .filter(|p| p.id != player_id)
            .map(MatchPlayerLite::from)
            .collect()
    }

    pub fn reset_positions(&mut self) {
        self.players.iter_mut().for_each(|p| p.reset_position());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::tactics::Lineup;
    use crate::r#match::PlayerRole;

    fn default_squad(side: PlayerSide) -> MatchSquad {
        let lineup = Lineup::default();

        let settings = MatchSettings::default();

        match side {
            PlayerSide::Left => MatchSquad::from_lineup(side, &lineup.left, 1, &settings),
            PlayerSide::Right => MatchSquad::from_lineup(side, &lineup.right, 6, &settings),
        }
    }

    fn humans(squad: &MatchSquad) -> Vec<u32> {
        squad.players.iter().filter(|p| p.is_human()).map(|p| p.id).collect()
    }

    #[test]
    fn test_first_slot_starts_human() {
        let squad = default_squad(PlayerSide::Right);

        assert_eq!(squad.controlled_index, 0);
        assert_eq!(humans(&squad), vec![6]);
        assert_eq!(squad.players[4].role, PlayerRole::Keeper);
    }

    #[test]
    fn test_cycle_wraps_to_first_slot() {
        let mut squad = default_squad(PlayerSide::Left);
        squad.controlled_index = 4;
        squad.apply_control();

        squad.cycle_control();

        assert_eq!(squad.controlled_index, 0);
        assert_eq!(humans(&squad), vec![1]);
    }

    #[test]
    fn test_cycle_ignores_possession() {
        let mut squad = default_squad(PlayerSide::Left);
        squad.players[0].has_possession = true;

        squad.cycle_control();

        assert_eq!(squad.controlled_index, 1);
        assert_eq!(humans(&squad), vec![2]);
        assert!(squad.players[0].has_possession);
    }

    #[test]
    fn test_cycle_on_empty_squad_is_noop() {
        let mut squad = MatchSquad::new(PlayerSide::Left, Vec::new());

        squad.cycle_control();

        assert_eq!(squad.controlled_index, 0);
        assert!(squad.controlled().is_none());
    }

    #[test]
    fn test_give_control_to_unknown_player_is_ignored() {
        let mut squad = default_squad(PlayerSide::Left);

        squad.give_control_to(42);

        assert_eq!(humans(&squad), vec![1]);
    }

    #[test]
    fn test_slots_outside_playable_area_are_clamped() {
        let settings = MatchSettings::default();
        let lineup = [
            LineupSlot::new(PlayerRole::Field, 2.0, 2.0),
            LineupSlot::new(PlayerRole::Keeper, 300.0, 96.0),
        ];

        let squad = MatchSquad::from_lineup(PlayerSide::Left, &lineup, 1, &settings);

        assert_eq!(squad.players[0].start_position, Vector2::new(9.0, 9.0));
        assert_eq!(squad.players[0].position, Vector2::new(9.0, 9.0));
        assert_eq!(squad.players[1].start_position, Vector2::new(247.0, 96.0));
    }

    #[test]
    fn test_teammates_exclude_self_and_keep_roster_order() {
        let squad = default_squad(PlayerSide::Left);

        let ids: Vec<u32> = squad.teammates_of(3).iter().map(|m| m.id).collect();

        assert_eq!(ids, vec![1, 2, 4, 5]);
    }
}
