mod pad;

use env_logger::Env;
use football_core::r#match::input::MatchInput;
use football_core::r#match::{FootballMatch, MatchSettings};
use football_core::utils::TimeEstimation;
use log::info;
use pad::ScriptedPad;
use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_TICKS: u64 = 3600;
const DEFAULT_SEED: u64 = 1;
const TICK_RATE: f64 = 60.0;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = match env::var("SETTINGS") {
        Ok(path) => {
            info!("loading settings from {}", path);
            MatchSettings::load(&path)?
        }
        Err(_) => MatchSettings::default(),
    };

    let ticks: u64 = env_or("TICKS", DEFAULT_TICKS)?;
    let seed: u64 = env_or("SEED", DEFAULT_SEED)?;
    let is_realtime = env::var("MODE") == Ok(String::from("REALTIME"));

    let dead_zone = settings.input.dead_zone;
    let mut game = FootballMatch::new(settings);
    let mut pads = [ScriptedPad::new(seed), ScriptedPad::new(seed.wrapping_add(1))];

    if is_realtime {
        info!("realtime match started: {} ticks at {} Hz", ticks, TICK_RATE);

        let mut interval = tokio::time::interval(Duration::from_secs_f64(1.0 / TICK_RATE));

        for _ in 0..ticks {
            interval.tick().await;
            step(&mut game, &mut pads, dead_zone);
        }
    } else {
        let (_, estimated) = TimeEstimation::estimate(|| {
            for _ in 0..ticks {
                step(&mut game, &mut pads, dead_zone);
            }
        });

        info!("match played: {} ticks in {} ms", ticks, estimated);
    }

    info!("final score {} [{}]", game.score(), game.score().timeline());

    println!("{}", serde_json::to_string_pretty(&game.snapshot())?);

    Ok(())
}

fn step(game: &mut FootballMatch, pads: &mut [ScriptedPad; 2], dead_zone: f32) {
    let [left, right] = pads;
    let input = MatchInput::new(left.next(dead_zone), right.next(dead_zone));

    game.tick(&input);
}

fn env_or<T>(name: &str, default: T) -> color_eyre::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => Ok(value.parse()?),
        Err(_) => Ok(default),
    }
}
