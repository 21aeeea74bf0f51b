use crate::r#match::{MatchSettings, Score};

pub struct MatchContext {
    pub settings: MatchSettings,
    pub score: Score,
    /// Ticks started so far.
    pub tick: u64,
    /// First agent to take the ball in the current tick.
    pub ball_claimed_by: Option<u32>,
}

impl MatchContext {
    pub fn new(settings: MatchSettings) -> Self {
        MatchContext {
            settings,
            score: Score::new(),
            tick: 0,
            ball_claimed_by: None,
        }
    }

    pub fn begin_tick(&mut self) {
        self.tick += 1;
        self.ball_claimed_by = None;
    }
}
