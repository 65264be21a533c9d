//! Handlers which use the command line.

use console::Term;

use crate::{
    handler::{Input, Output},
    util
};

/// Reads player choices from standard input.
#[derive(Debug)]
pub struct CliInput {
    term: Term
}

impl CliInput {
    /// Creates an input which reports invalid choices on stdout.
    pub fn new() -> CliInput {
        CliInput { term: Term::stdout() }
    }
}

impl Default for CliInput {
    fn default() -> CliInput {
        CliInput::new()
    }
}

fn invalid_choice(min: usize, max: usize) -> String {
    format!("[ !! ] please enter a number from {} to {}", min, max)
}

impl Input for CliInput {
    fn read_line(&mut self) -> String {
        util::input("")
    }

    fn await_acknowledgement(&mut self) {
        util::input("press Enter to continue");
    }

    fn read_int_in_range(&mut self, min: usize, max: usize) -> usize {
        loop {
            let line = util::input(&format!("choose {}-{}", min, max));
            if let Some(choice) = util::parse_choice(&line, min, max) {
                break choice;
            }
            self.term.write_line(&invalid_choice(min, max)).expect("failed to write to terminal");
        }
    }
}

/// Writes game messages to the terminal.
#[derive(Debug)]
pub struct CliOutput {
    term: Term
}

impl CliOutput {
    /// Creates an output writing to stdout.
    pub fn new() -> CliOutput {
        CliOutput { term: Term::stdout() }
    }
}

impl Default for CliOutput {
    fn default() -> CliOutput {
        CliOutput::new()
    }
}

impl Output for CliOutput {
    fn write_line(&mut self, line: &str) {
        self.term.write_line(line).expect("failed to write to terminal");
    }

    fn write(&mut self, text: &str) {
        self.term.write_str(text).expect("failed to write to terminal");
    }

    fn clear_screen(&mut self) {
        self.term.clear_screen().expect("failed to clear terminal");
    }
}
