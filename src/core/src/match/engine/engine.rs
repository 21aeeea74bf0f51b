use crate::r#match::engine::events::dispatcher::EventCollection;
use crate::r#match::events::EventDispatcher;
use crate::r#match::field::MatchField;
use crate::r#match::input::{MatchInput, PlayerIntent};
use crate::r#match::{MatchContext, PlayerSide, PlayerTickContext};

pub struct FootballEngine;

impl FootballEngine {
    /// Advances the match by one fixed step.
    ///
    /// Squad selection is applied first, then every agent updates in roster order
    /// (left squad, then right squad) and the ball moves last. Events raised by an
    /// agent are applied before the next agent looks at the ball.
    pub fn game_tick(field: &mut MatchField, context: &mut MatchContext, input: &MatchInput) {
        context.begin_tick();

        Self::play_control(field, input);
        Self::play_players(field, context, input);
        Self::play_ball(field, context);
    }

    fn play_control(field: &mut MatchField, input: &MatchInput) {
        for side in [PlayerSide::Left, PlayerSide::Right] {
            if input.for_side(side).select {
                field.squad_mut(side).cycle_control();
            }
        }
    }

    fn play_players(field: &mut MatchField, context: &mut MatchContext, input: &MatchInput) {
        for side in [PlayerSide::Left, PlayerSide::Right] {
            let intent = input.for_side(side).intent;

            for index in 0..field.squad(side).players.len() {
                let events = Self::play_player(field, context, side, index, intent);

                EventDispatcher::dispatch(events, field, context);

                let player = &field.squad(side).players[index];
                if player.has_possession {
                    let position = player.position;
                    field.ball.carry(position);
                }
            }
        }
    }

    fn play_player(
        field: &mut MatchField,
        context: &MatchContext,
        side: PlayerSide,
        index: usize,
        intent: PlayerIntent,
    ) -> EventCollection {
        let MatchField {
            ball,
            left_squad,
            right_squad,
            ..
        } = field;

        let squad = match side {
            PlayerSide::Left => left_squad,
            PlayerSide::Right => right_squad,
        };

        let teammates = squad.teammates_of(squad.players[index].id);
        let tick_context = PlayerTickContext::new(&context.settings, teammates, context.ball_claimed_by, intent);

        squad.players[index].update(ball, &tick_context)
    }

    fn play_ball(field: &mut MatchField, context: &mut MatchContext) {
        let mut events = EventCollection::new();

        let carrier_position = field.carrier_position();
        field.ball.update(&context.settings, carrier_position, &mut events);

        EventDispatcher::dispatch(events, field, context);
    }
}
