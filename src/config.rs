use std::{env, str::FromStr, time::Duration};

use crate::font::MAX_DIGIT;

pub const WIDTH: usize = 800;
pub const HEIGHT: usize = 600;
pub const TITLE: &str = "Pong";

pub const DEFAULT_WIN_SCORE: u32 = 3;
// Matches a 5ms minimum frame time.
pub const DEFAULT_TICK_RATE: f64 = 200.0;
pub const MIN_TICK_RATE: f64 = 1.0;
pub const MAX_TICK_RATE: f64 = 10_000.0;
pub const DEFAULT_MIN_FRAME: Duration = Duration::from_millis(5);
// Longer gaps than this are treated as a stall, not as time to catch up on.
pub const DEFAULT_MAX_BACKLOG: Duration = Duration::from_millis(250);

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub title: String,
    /// A serve after either player reaches this score starts a new match.
    pub win_score: u32,
    /// Simulation ticks per second, within `MIN_TICK_RATE..=MAX_TICK_RATE`.
    pub tick_rate: f64,
    pub min_frame: Duration,
    pub max_backlog: Duration,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            title: TITLE.to_string(),
            win_score: DEFAULT_WIN_SCORE,
            tick_rate: DEFAULT_TICK_RATE,
            min_frame: DEFAULT_MIN_FRAME,
            max_backlog: DEFAULT_MAX_BACKLOG,
        }
    }
}
impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        let win_score = read_var(&lookup, "PONG_WIN_SCORE", DEFAULT_WIN_SCORE);
        config.win_score = win_score.clamp(1, MAX_DIGIT);
        if config.win_score != win_score {
            log::warn!(
                "PONG_WIN_SCORE ({win_score}) has no glyph, using {}",
                config.win_score
            );
        }

        let tick_rate = read_var(&lookup, "PONG_TICK_RATE", DEFAULT_TICK_RATE);
        config.tick_rate = if (MIN_TICK_RATE..=MAX_TICK_RATE).contains(&tick_rate) {
            tick_rate
        } else {
            log::warn!(
                "PONG_TICK_RATE ({tick_rate}) must be in [{MIN_TICK_RATE}..={MAX_TICK_RATE}]. Falling back to default."
            );
            DEFAULT_TICK_RATE
        };

        config
    }

    pub fn tick(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate)
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    let Some(raw) = lookup(name) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            log::warn!("{name}={raw:?} is not valid. Falling back to default.");
            default
        }
    }
}
