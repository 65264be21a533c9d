#![warn(trivial_casts)]
#![deny(unused, unused_extern_crates, unused_import_braces)]

use std::{
    env,
    ops::RangeInclusive,
    path::{Path, PathBuf},
    process
};

use rand::{rngs::StdRng, thread_rng, SeedableRng};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation}
};
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter
};

use mafia::{
    game::{self, Game},
    handler::{CliInput, CliOutput, Input, Output, RandomSource, RngSource, TracingLogger}
};

/// Player counts the console game accepts.
const SUPPORTED_PLAYERS: RangeInclusive<usize> = 7..=10;

#[derive(Debug, thiserror::Error)]
enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {flag}: {value:?}")]
    InvalidValue {
        flag: &'static str,
        value: String
    },
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
    #[error("the game needs between {min} and {max} players, got {found}")]
    PlayerCount {
        min: usize,
        max: usize,
        found: usize
    }
}

#[derive(Debug)]
struct Config {
    players: Option<usize>,
    seed: Option<u64>,
    log_dir: PathBuf
}

impl Config {
    fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Config, ConfigError> {
        let mut config = Config {
            players: None,
            seed: None,
            log_dir: PathBuf::from(".")
        };
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match &arg[..] {
                "--players" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--players"))?;
                    let players = value.parse().map_err(|_| ConfigError::InvalidValue { flag: "--players", value })?;
                    config.players = Some(check_player_count(players)?);
                }
                "--seed" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--seed"))?;
                    config.seed = Some(value.parse().map_err(|_| ConfigError::InvalidValue { flag: "--seed", value })?);
                }
                "--log-dir" => {
                    config.log_dir = args.next().ok_or(ConfigError::MissingValue("--log-dir"))?.into();
                }
                _ => return Err(ConfigError::UnknownArgument(arg))
            }
        }
        Ok(config)
    }
}

fn check_player_count(players: usize) -> Result<usize, ConfigError> {
    if SUPPORTED_PLAYERS.contains(&players) {
        Ok(players)
    } else {
        Err(ConfigError::PlayerCount { min: *SUPPORTED_PLAYERS.start(), max: *SUPPORTED_PLAYERS.end(), found: players })
    }
}

/// Sends game log events to `mafia.log` in the given directory. The log level can be changed with `RUST_LOG`.
///
/// The game still runs if the log file can't be opened.
fn setup_logging(log_dir: &Path) -> Option<WorkerGuard> {
    let file_appender = match RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("mafia.log")
        .build(log_dir)
    {
        Ok(file_appender) => file_appender,
        Err(e) => {
            eprintln!("[ !! ] failed to open log file in {}: {}", log_dir.display(), e);
            return None;
        }
    };
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();
    tracing::info!("Logging initialized in {}", log_dir.display());
    Some(guard)
}

fn main() {
    let config = Config::from_args(env::args().skip(1)).unwrap_or_else(|e| {
        eprintln!("[ !! ] {}", e);
        eprintln!("usage: mafia [--players N] [--seed S] [--log-dir DIR]");
        process::exit(2);
    });
    let _guard = setup_logging(&config.log_dir);
    let mut input = CliInput::new();
    let mut output = CliOutput::new();
    let player_count = config.players.unwrap_or_else(|| {
        output.write_line(&format!("How many players? ({}-{})", SUPPORTED_PLAYERS.start(), SUPPORTED_PLAYERS.end()));
        input.read_int_in_range(*SUPPORTED_PLAYERS.start(), *SUPPORTED_PLAYERS.end())
    });
    let mut random: Box<dyn RandomSource> = match config.seed {
        Some(seed) => Box::new(RngSource(StdRng::seed_from_u64(seed))),
        None => Box::new(RngSource(thread_rng()))
    };
    let mut game = Game::new_random(player_count, TracingLogger, &mut *random).unwrap_or_else(|e| {
        eprintln!("[ !! ] {}", e);
        process::exit(1);
    });
    let winner = game::run(&mut game, &mut input, &mut output);
    tracing::info!(%winner, day = game.day(), "game finished");
}
