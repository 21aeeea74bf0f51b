use crate::r#match::PlayerRole;

/// Home position and role of one roster slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineupSlot {
    pub role: PlayerRole,
    pub x: f32,
    pub y: f32,
}

impl LineupSlot {
    pub const fn new(role: PlayerRole, x: f32, y: f32) -> Self {
        LineupSlot { role, x, y }
    }
}

/// Five a side: four field players and a keeper, mirrored across the halfway line.
pub const LEFT_LINEUP: [LineupSlot; 5] = [
    LineupSlot::new(PlayerRole::Field, 30.0, 50.0),
    LineupSlot::new(PlayerRole::Field, 50.0, 70.0),
    LineupSlot::new(PlayerRole::Field, 30.0, 100.0),
    LineupSlot::new(PlayerRole::Field, 50.0, 130.0),
    LineupSlot::new(PlayerRole::Keeper, 10.0, 90.0),
];

pub const RIGHT_LINEUP: [LineupSlot; 5] = [
    LineupSlot::new(PlayerRole::Field, 220.0, 50.0),
    LineupSlot::new(PlayerRole::Field, 200.0, 70.0),
    LineupSlot::new(PlayerRole::Field, 220.0, 100.0),
    LineupSlot::new(PlayerRole::Field, 200.0, 130.0),
    LineupSlot::new(PlayerRole::Keeper, 240.0, 90.0),
];

/// Rosters for both squads; the first slot of each starts under human control.
#[derive(Debug, Clone, PartialEq)]
pub struct Lineup {
    pub left: Vec<LineupSlot>,
    pub right: Vec<LineupSlot>,
}

impl Default for Lineup {
    fn default() -> Self {
        Lineup {
            left: LEFT_LINEUP.to_vec(),
            right: RIGHT_LINEUP.to_vec(),
        }
    }
}
