//! A local, single-session implementation of Mafia: hidden roles, role-specific night actions, and elimination votes during the day.
//!
//! The rules engine lives in [`game`]. Everything it needs from the outside world (keyboard input, screen output, logging and randomness) goes through the traits in [`handler`].

#![cfg_attr(test, deny(warnings))]
#![warn(trivial_casts)]
#![deny(missing_docs, unused, unused_extern_crates, unused_import_braces)]

pub mod game;
pub mod handler;
pub mod player;
mod util;

pub use crate::{
    game::{Game, NewGameError},
    player::{Player, PlayerId}
};
