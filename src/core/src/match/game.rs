use crate::r#match::input::MatchInput;
use crate::r#match::tactics::Lineup;
use crate::r#match::{
    FootballEngine, MatchContext, MatchField, MatchPlayer, MatchSettings, MatchSnapshot, PlayerSide, Score,
};
use log::info;

/// A running match: owns the field and the scoring context and advances them one tick at a time.
pub struct FootballMatch {
    pub field: MatchField,
    pub context: MatchContext,
}

impl FootballMatch {
    pub fn new(settings: MatchSettings) -> Self {
        Self::with_lineup(settings, &Lineup::default())
    }

    pub fn with_lineup(settings: MatchSettings, lineup: &Lineup) -> Self {
        let field = MatchField::with_lineup(&settings, lineup);

        info!(
            "match created: {} vs {} players on a {}x{} field",
            field.left_squad.players.len(),
            field.right_squad.players.len(),
            settings.field.width,
            settings.field.height
        );

        FootballMatch {
            field,
            context: MatchContext::new(settings),
        }
    }

    pub fn tick(&mut self, input: &MatchInput) {
        FootballEngine::game_tick(&mut self.field, &mut self.context, input);
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::capture(&self.field, &self.context.score, self.context.tick)
    }

    #[inline]
    pub fn score(&self) -> &Score {
        &self.context.score
    }

    #[inline]
    pub fn settings(&self) -> &MatchSettings {
        &self.context.settings
    }

    pub fn possessor(&self) -> Option<&MatchPlayer> {
        self.field.possessor()
    }

    pub fn team_in_possession(&self) -> Option<PlayerSide> {
        self.possessor().map(|p| p.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::ball::FlightState;
    use crate::r#match::input::{PlayerIntent, SquadInput};
    use nalgebra::Vector2;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_squad_input(rng: &mut StdRng) -> SquadInput {
        SquadInput {
            intent: PlayerIntent {
                up: rng.random_bool(0.3),
                down: rng.random_bool(0.3),
                left: rng.random_bool(0.3),
                right: rng.random_bool(0.3),
                pass: rng.random_bool(0.05),
                shoot: rng.random_bool(0.05),
            },
            select: rng.random_bool(0.02),
        }
    }

    fn random_input(rng: &mut StdRng) -> MatchInput {
        MatchInput::new(random_squad_input(rng), random_squad_input(rng))
    }

    #[test]
    fn test_new_match_starts_at_kickoff() {
        let game = FootballMatch::new(MatchSettings::default());
        let snapshot = game.snapshot();

        assert_eq!(snapshot.tick, 0);
        assert_eq!(snapshot.players.len(), 10);
        assert!(game.team_in_possession().is_none());
        assert_eq!(game.score().to_string(), "0:0");
    }

    #[test]
    fn test_at_most_one_holder_and_one_human_per_squad() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = FootballMatch::new(MatchSettings::default());

        for _ in 0..3000 {
            game.tick(&random_input(&mut rng));

            assert!(game.field.players().filter(|p| p.has_possession).count() <= 1);

            for side in [PlayerSide::Left, PlayerSide::Right] {
                let squad = game.field.squad(side);
                assert_eq!(squad.players.iter().filter(|p| p.is_human()).count(), 1);
                assert!(squad.players[squad.controlled_index].is_human());
            }
        }
    }

    #[test]
    fn test_agents_stay_inside_clamp_and_ball_is_pinned_to_holder() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut game = FootballMatch::new(MatchSettings::default());

        for _ in 0..3000 {
            game.tick(&random_input(&mut rng));

            let (min, max) = MatchPlayer::bounds(game.settings().player.radius, game.settings());
            for player in game.field.players() {
                assert!(player.position.x >= min.x && player.position.x <= max.x);
                assert!(player.position.y >= min.y && player.position.y <= max.y);
            }

            if let Some(holder) = game.possessor() {
                assert_eq!(game.field.ball.position, holder.position);
                assert_eq!(game.field.ball.velocity.norm(), 0.0);
                assert_eq!(game.field.ball.flight, FlightState::Idle);
            }
        }
    }

    #[test]
    fn test_ball_never_leaves_field_vertically() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut game = FootballMatch::new(MatchSettings::default());

        for _ in 0..3000 {
            game.tick(&random_input(&mut rng));

            let ball = &game.field.ball;
            let settings = game.settings();

            assert!(ball.position.y - ball.radius >= settings.field.margin - 1e-3);
            assert!(ball.position.y + ball.radius <= settings.field.height - settings.field.margin + 1e-3);
            assert!(ball.position.x >= 0.0 && ball.position.x <= settings.field.width);
        }
    }

    #[test]
    fn test_score_only_grows_and_matches_timeline() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut game = FootballMatch::new(MatchSettings::default());
        let mut previous = (0, 0);

        for _ in 0..5000 {
            game.tick(&random_input(&mut rng));

            let current = (game.score().get(PlayerSide::Left), game.score().get(PlayerSide::Right));
            assert!(current.0 >= previous.0 && current.1 >= previous.1);
            previous = current;
        }

        assert_eq!(game.score().details.len() as u32, previous.0 + previous.1);
    }

    #[test]
    fn test_shot_recaptured_only_after_cooldown() {
        let mut game = FootballMatch::new(MatchSettings::default());

        // Shooter stands on the ball with nobody else around it.
        if let Some(player) = game.field.get_player_mut(1) {
            player.position = Vector2::new(128.0, 150.0);
        }
        game.field.ball.position = Vector2::new(128.0, 150.0);

        let shoot = MatchInput::new(
            SquadInput {
                intent: PlayerIntent {
                    shoot: true,
                    ..Default::default()
                },
                select: false,
            },
            SquadInput::default(),
        );

        game.tick(&shoot);

        assert!(game.possessor().is_none());
        assert_eq!(game.field.ball.flight, FlightState::InFlight { receiver: None });
        assert!(game.field.ball.velocity.x > 0.0);
        assert!(game.field.ball.velocity.y < 0.0);

        // Drag the shooter along with the ball: the cooldown keeps it locked out.
        for _ in 0..8 {
            let ball_position = game.field.ball.position;
            if let Some(player) = game.field.get_player_mut(1) {
                player.position = ball_position;
            }

            game.tick(&MatchInput::default());
            assert!(game.possessor().is_none());
        }

        // Cooldown is over after the tenth ball update.
        game.tick(&MatchInput::default());
        let ball_position = game.field.ball.position;
        if let Some(player) = game.field.get_player_mut(1) {
            player.position = ball_position;
        }
        game.tick(&MatchInput::default());

        assert_eq!(game.possessor().map(|p| p.id), Some(1));
        assert_eq!(game.field.ball.flight, FlightState::Idle);
    }
}
