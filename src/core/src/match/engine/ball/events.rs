use crate::r#match::{MatchContext, MatchField, PlayerSide};
use log::{debug, info};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BallEvent {
    Goal(GoalSide),
}

/// Goal line the ball crossed inside the aperture.
#[derive(Copy, Clone, Debug, PartialOrd, PartialEq)]
pub enum GoalSide {
    Left,
    Right,
}

impl GoalSide {
    /// The squad credited with a goal on this line.
    pub fn scoring_side(&self) -> PlayerSide {
        match self {
            GoalSide::Left => PlayerSide::Right,
            GoalSide::Right => PlayerSide::Left,
        }
    }
}

pub struct BallEventDispatcher;

impl BallEventDispatcher {
    pub fn dispatch(event: BallEvent, field: &mut MatchField, context: &mut MatchContext) {
        debug!("Ball event: {:?}", event);

        match event {
            BallEvent::Goal(goal_side) => {
                let scoring_side = goal_side.scoring_side();

                context.score.add_goal(scoring_side, context.tick);

                info!(
                    "goal for {:?} at tick {}, score {}",
                    scoring_side, context.tick, context.score
                );

                field.reset_positions();
            }
        }
    }
}
