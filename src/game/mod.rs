//! Core game logic.

pub mod actions;
pub mod state;
mod types;
pub mod vote;

use crate::{
    handler::{Input, Output},
    player::PlayerId
};
pub use self::{
    state::{Game, NewGameError},
    types::*
};

/// The order in which roles act during a night. The Courtesan goes first so that a block applies to everyone acting later that night.
pub const NIGHT_ORDER: [Role; 4] = [Role::Courtesan, Role::Mafia, Role::Doctor, Role::Detective];

/// Moderates a game of Mafia until one side has won.
///
/// The roster and roles are revealed first. Day 1 is for introductions only, with no vote. After that, each night every living role-holder acts in `NIGHT_ORDER`, and each day starts by applying the night's outcome, followed by an elimination vote unless the game is already over.
///
/// Returns the winning side.
pub fn run(game: &mut Game, input: &mut dyn Input, output: &mut dyn Output) -> Side {
    output.write_line("Players:");
    for player in game.players() {
        output.write_line(&player.to_string());
    }
    input.await_acknowledgement();
    output.clear_screen();
    output.write_line("Day 1: the town gets to know each other. There is no vote today.");
    game.log("Day 1 is for introductions");
    let change = game.next_phase();
    output.write_line(&change.to_string());
    let winner = loop {
        if let Some(winner) = game.is_game_over() {
            break winner;
        }
        match game.phase() {
            Phase::Day => run_day(game, input, output),
            Phase::Night => run_night(game, input, output)
        }
    };
    output.write_line(&format!("Game over! The {} win.", winner));
    game.log(&format!("Game over on day {}: the {} win", game.day(), winner));
    winner
}

fn run_day(game: &mut Game, input: &mut dyn Input, output: &mut dyn Output) {
    match game.resolve_night() {
        NightOutcome::Quiet => output.write_line("Nobody was attacked last night."),
        NightOutcome::Saved(id) => output.write_line(&format!("The Mafia attacked {}, but they were saved by the Doctor.", game.player(id).name())),
        NightOutcome::Killed(id) => output.write_line(&format!("{} was killed during the night.", game.player(id))),
    }
    if game.is_game_over().is_some() { return; }
    vote::run_vote(game, input, output);
    let change = game.next_phase();
    output.write_line(&change.to_string());
}

fn run_night(game: &mut Game, input: &mut dyn Input, output: &mut dyn Output) {
    for role in NIGHT_ORDER.iter().copied() {
        for actor in game.alive_with_role(role) {
            night_turn(game, actor, input, output);
        }
    }
    let change = game.next_phase();
    output.write_line(&change.to_string());
}

/// Hides the screen between players so each night action stays private.
fn night_turn(game: &mut Game, actor: PlayerId, input: &mut dyn Input, output: &mut dyn Output) {
    output.clear_screen();
    output.write_line(&format!("{}, wake up. You are the {}.", game.player(actor).name(), game.player(actor).role()));
    input.await_acknowledgement();
    actions::perform_night_action(game, actor, input, output);
    input.await_acknowledgement();
    output.clear_screen();
}
