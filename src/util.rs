use std::io::{
    prelude::*,
    stdin,
    stdout
};

/// Prompts on stdout and reads one line from stdin, without the line terminator.
pub fn input(msg: &str) -> String {
    if msg.is_empty() {
        print!("[ ?? ] ");
    } else {
        print!("[ ?? ] {}: ", msg);
    }
    stdout().flush().expect("failed to flush stdout");
    let mut result = String::new();
    let read = stdin().read_line(&mut result).expect("failed to read from stdin");
    assert!(read > 0, "stdin was closed");
    result.trim_end_matches(&['\r', '\n'][..]).to_owned()
}

/// Parses a menu choice, accepting it only if `min <= choice <= max`.
pub fn parse_choice(line: &str, min: usize, max: usize) -> Option<usize> {
    line.trim().parse().ok().filter(|choice| (min..=max).contains(choice))
}
