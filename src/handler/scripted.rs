//! Deterministic implementations of the handler traits, for replaying a game from a fixed script.

use std::{
    cell::RefCell,
    collections::VecDeque,
    rc::Rc
};

use crate::handler::{Input, Logger, Output, RandomSource};

/// Replays a fixed sequence of answers.
///
/// Out-of-range or missing answers resolve to the smallest allowed value, so a script can never stall a game.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    prompts: usize
}

impl ScriptedInput {
    /// Creates an input which answers number prompts with the given values, in order.
    pub fn new<I: IntoIterator<Item = usize>>(answers: I) -> ScriptedInput {
        ScriptedInput {
            answers: answers.into_iter().map(|answer| answer.to_string()).collect(),
            prompts: 0
        }
    }

    /// Appends an answer to the script.
    pub fn push(&mut self, answer: usize) {
        self.answers.push_back(answer.to_string());
    }

    /// The number of answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// How many times a number was asked for.
    pub fn prompts(&self) -> usize {
        self.prompts
    }
}

impl Input for ScriptedInput {
    fn read_line(&mut self) -> String {
        self.answers.pop_front().unwrap_or_else(|| "1".to_owned())
    }

    fn await_acknowledgement(&mut self) {}

    fn read_int_in_range(&mut self, min: usize, max: usize) -> usize {
        self.prompts += 1;
        self.answers.pop_front()
            .and_then(|answer| crate::util::parse_choice(&answer, min, max))
            .unwrap_or(min)
    }
}

/// Collects everything written to it.
#[derive(Debug, Default)]
pub struct RecordingOutput {
    lines: Vec<String>
}

impl RecordingOutput {
    /// Marker recorded for each `clear_screen` call.
    pub const CLEAR: &'static str = "[CLEAR]";

    /// Creates an empty recording.
    pub fn new() -> RecordingOutput {
        RecordingOutput::default()
    }

    /// Everything written so far, one entry per call.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns `true` if any recorded entry contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl Output for RecordingOutput {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }

    fn write(&mut self, text: &str) {
        self.lines.push(text.to_owned());
    }

    fn clear_screen(&mut self) {
        self.lines.push(RecordingOutput::CLEAR.to_owned());
    }
}

/// A logger that keeps its entries in memory.
///
/// Clones share the same entries, so a test can hand one clone to a `Game` and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogger(Rc<RefCell<Vec<String>>>);

impl MemoryLogger {
    /// Creates an empty log.
    pub fn new() -> MemoryLogger {
        MemoryLogger::default()
    }

    /// All entries logged so far.
    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    /// Returns `true` if any entry contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.0.borrow().iter().any(|entry| entry.contains(needle))
    }
}

impl Logger for MemoryLogger {
    fn log(&self, message: &str) {
        self.0.borrow_mut().push(message.to_owned());
    }
}

/// Replays a fixed sequence of random numbers, reduced into the requested range. Returns the lowest value once exhausted.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    values: VecDeque<usize>
}

impl ScriptedRandom {
    /// Creates a source yielding the given values, in order.
    pub fn new<I: IntoIterator<Item = usize>>(values: I) -> ScriptedRandom {
        ScriptedRandom { values: values.into_iter().collect() }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_int(&mut self, bound: usize) -> usize {
        self.values.pop_front().map_or(0, |value| value % bound)
    }
}
