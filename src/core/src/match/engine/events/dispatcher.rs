use crate::r#match::ball::events::{BallEvent, BallEventDispatcher};
use crate::r#match::player::events::{PlayerEvent, PlayerEventDispatcher};
use crate::r#match::{MatchContext, MatchField};

#[derive(Debug)]
pub enum Event {
    BallEvent(BallEvent),
    PlayerEvent(PlayerEvent),
}

#[derive(Debug, Default)]
pub struct EventCollection {
    events: Vec<Event>,
}

impl EventCollection {
    pub fn new() -> Self {
        EventCollection { events: Vec::new() }
    }

    pub fn add_ball_event(&mut self, event: BallEvent) {
        self.events.push(Event::BallEvent(event));
    }

    pub fn add_player_event(&mut self, event: PlayerEvent) {
        self.events.push(Event::PlayerEvent(event));
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn into_vec(self) -> Vec<Event> {
        self.events
    }
}

pub struct EventDispatcher;

impl EventDispatcher {
    /// Applies events in the order they were raised.
    pub fn dispatch(events: EventCollection, field: &mut MatchField, context: &mut MatchContext) {
        for event in events.into_vec() {
            match event {
                Event::BallEvent(ball_event) => {
                    BallEventDispatcher::dispatch(ball_event, field, context);
                }
                Event::PlayerEvent(player_event) => {
                    PlayerEventDispatcher::dispatch(player_event, field, context);
                }
            }
        }
    }
}
