//! Contains the traits the game uses to talk to the outside world, and some implementations.
//!
//! The rules engine never touches the terminal, the log file or a global random number generator directly. It is handed an `Input`, an `Output`, a `Logger` and a `RandomSource` instead, so that a game can be replayed deterministically.

pub mod cli;
pub mod scripted;

use rand::Rng;

pub use self::cli::{CliInput, CliOutput};

/// Where player choices come from.
pub trait Input {
    /// Reads one line of raw text.
    fn read_line(&mut self) -> String;

    /// Blocks until the user acknowledges whatever is on screen.
    fn await_acknowledgement(&mut self);

    /// Returns a number `v` with `min <= v <= max`.
    ///
    /// Implementations are responsible for filtering invalid input, for example by asking again.
    fn read_int_in_range(&mut self, min: usize, max: usize) -> usize;
}

/// Where game messages go.
pub trait Output {
    /// Writes a line of text followed by a newline.
    fn write_line(&mut self, line: &str);

    /// Writes text without a trailing newline.
    fn write(&mut self, text: &str);

    /// Clears the screen, for example to hide one player's night action from the next.
    fn clear_screen(&mut self);
}

/// An append-only game log.
///
/// Logging must never interrupt the game, so there is no way to report failure.
pub trait Logger {
    /// Appends a message to the log.
    fn log(&self, message: &str);
}

/// A source of random numbers, substitutable for deterministic play.
pub trait RandomSource {
    /// Returns a number in `0..bound`. `bound` must be positive.
    fn next_int(&mut self, bound: usize) -> usize;

    /// Returns a number in `min..max`. `max` must be greater than `min`.
    fn next_int_in(&mut self, min: usize, max: usize) -> usize {
        min + self.next_int(max - min)
    }
}

/// Adapts any `rand` generator into a `RandomSource`.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_int(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }

    fn next_int_in(&mut self, min: usize, max: usize) -> usize {
        self.0.gen_range(min..max)
    }
}

/// A logger which emits every message as a `tracing` event.
///
/// Where the events end up (and with which timestamp) is decided by the installed subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!(target: "mafia::game", "{}", message);
    }
}
