use crate::r#match::player::events::{PassingEventContext, ShootingEventContext};
use crate::r#match::{MatchContext, MatchField};
use log::debug;

#[derive(Debug)]
pub enum PlayerEvent {
    /// The agent took the ball this tick.
    ClaimBall(u32),
    PassTo(PassingEventContext),
    Shoot(ShootingEventContext),
}

pub struct PlayerEventDispatcher;

impl PlayerEventDispatcher {
    pub fn dispatch(event: PlayerEvent, field: &mut MatchField, context: &mut MatchContext) {
        match event {
            PlayerEvent::ClaimBall(player_id) => {
                Self::handle_claim_ball_event(player_id, field, context);
            }
            PlayerEvent::PassTo(pass_event_model) => {
                debug!("Player event: {:?}", pass_event_model);
                Self::handle_pass_to_event(pass_event_model, field, context);
            }
            PlayerEvent::Shoot(shoot_event_model) => {
                debug!("Player event: {:?}", shoot_event_model);
                Self::handle_shoot_event(shoot_event_model, field, context);
            }
        }
    }

    fn handle_claim_ball_event(player_id: u32, field: &mut MatchField, context: &mut MatchContext) {
        if field.ball.is_in_flight() {
            match field.ball.receiver() {
                Some(receiver) if receiver.player_id == player_id => {
                    debug!("player {} received the pass", player_id);
                }
                Some(receiver) => {
                    debug!("player {} intercepted the pass to {}", player_id, receiver.player_id);
                }
                None => {
                    debug!("player {} took the loose ball", player_id);
                }
            }
        }

        field.ball.settle();

        for player in field.players_mut() {
            if player.id != player_id {
                player.has_possession = false;
            }
        }

        context.ball_claimed_by = Some(player_id);
    }

    fn handle_pass_to_event(event_model: PassingEventContext, field: &mut MatchField, context: &mut MatchContext) {
        let receiver = event_model.receiver;

        field.ball.kick(
            event_model.velocity,
            Some(receiver),
            context.settings.kick.cooldown_ticks,
        );

        field.squad_mut(receiver.side).give_control_to(receiver.player_id);

        context.ball_claimed_by = None;
    }

    fn handle_shoot_event(event_model: ShootingEventContext, field: &mut MatchField, context: &mut MatchContext) {
        field.ball.kick(event_model.velocity, None, context.settings.kick.cooldown_ticks);

        context.ball_claimed_by = None;
    }
}
