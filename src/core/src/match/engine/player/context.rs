use crate::r#match::input::PlayerIntent;
use crate::r#match::{MatchPlayerLite, MatchSettings};

/// What an agent may observe while it updates.
pub struct PlayerTickContext<'s> {
    pub settings: &'s MatchSettings,
    /// Own squad in roster order, the updating agent excluded.
    pub teammates: Vec<MatchPlayerLite>,
    /// Agent that took the ball earlier in the current tick.
    pub ball_claimed_by: Option<u32>,
    /// Squad intent; only consulted for human-controlled agents.
    pub intent: PlayerIntent,
}

impl<'s> PlayerTickContext<'s> {
    pub fn new(
        settings: &'s MatchSettings,
        teammates: Vec<MatchPlayerLite>,
        ball_claimed_by: Option<u32>,
        intent: PlayerIntent,
    ) -> Self {
        PlayerTickContext {
            settings,
            teammates,
            ball_claimed_by,
            intent,
        }
    }

    pub fn teammate_has_ball(&self) -> bool {
        self.teammates.iter().any(|teammate| teammate.has_possession)
    }
}
