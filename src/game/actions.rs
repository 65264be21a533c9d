//! Night actions for each role.

use crate::{
    game::{Game, Role},
    handler::{Input, Output},
    player::PlayerId
};

/// Shown to a player whose night action was blocked by the Courtesan.
pub const BLOCKED_NOTICE: &str = "You were visited by the Courtesan. You cannot act tonight.";

/// Shown when a Doctor or Courtesan picks the same player as last night.
pub const REPEAT_TARGET_NOTICE: &str = "You cannot choose the same player two nights in a row. Choose someone else.";

/// Lets the given player perform their role's night action.
///
/// Does nothing if the player is dead or has no night action. A blocked player is told so and does nothing. Otherwise the player is shown a numbered list of eligible targets and picks one through `input`:
///
/// * The Mafia picks a non-Mafia victim. Each Mafia member overwrites the previous choice, so the last one to act decides.
/// * The Detective picks another player and learns whether they are Mafia.
/// * The Doctor picks any living player, themselves included, to heal.
/// * The Courtesan picks another player and blocks their night action.
///
/// The Doctor and Courtesan may not pick the player they picked on their previous action. A repeated pick is rejected and asked again, at most as many times as there are eligible targets, after which the action is skipped.
pub fn perform_night_action(game: &mut Game, actor: PlayerId, input: &mut dyn Input, output: &mut dyn Output) {
    let player = game.player(actor);
    let role = player.role();
    if !player.is_alive() || !role.has_night_action() { return; }
    if player.is_blocked() {
        output.write_line(BLOCKED_NOTICE);
        game.log(&format!("{} ({}) was blocked by the Courtesan and could not act", player.name(), role));
        return;
    }
    let eligible = eligible_targets(game, actor, role);
    if eligible.is_empty() { return; }
    let target = match role {
        Role::Doctor | Role::Courtesan => choose_new_target(game, actor, role, &eligible, input, output),
        _ => Some(choose_target(game, role, &eligible, None, input, output))
    };
    if let Some(target) = target {
        apply(game, actor, role, target, output);
    }
}

/// The players the given actor may target tonight, in roster order.
pub fn eligible_targets(game: &Game, actor: PlayerId, role: Role) -> Vec<PlayerId> {
    match role {
        Role::Civilian => Vec::default(),
        Role::Mafia => game.civilian_side(),
        Role::Doctor => game.alive(),
        Role::Detective | Role::Courtesan => game.alive().into_iter().filter(|&id| id != actor).collect()
    }
}

fn prompt(role: Role) -> &'static str {
    match role {
        Role::Mafia => "Choose a victim:",
        Role::Detective => "Choose a player to investigate:",
        Role::Doctor => "Choose a player to heal:",
        Role::Courtesan => "Choose a player to visit:",
        Role::Civilian => "Choose a player:"
    }
}

fn choose_target(game: &Game, role: Role, eligible: &[PlayerId], last: Option<PlayerId>, input: &mut dyn Input, output: &mut dyn Output) -> PlayerId {
    output.write_line(prompt(role));
    for (idx, &id) in eligible.iter().enumerate() {
        let marker = if Some(id) == last { " (chosen last night)" } else { "" };
        output.write_line(&format!("{}. {}{}", idx + 1, game.player(id).name(), marker));
    }
    eligible[input.read_int_in_range(1, eligible.len()) - 1]
}

fn choose_new_target(game: &Game, actor: PlayerId, role: Role, eligible: &[PlayerId], input: &mut dyn Input, output: &mut dyn Output) -> Option<PlayerId> {
    let last = game.player(actor).character().last_target();
    if eligible.iter().all(|&id| Some(id) == last) {
        game.log(&format!("{} ({}) has nobody new to choose", game.player(actor).name(), role));
        return None;
    }
    for _ in 0..eligible.len() {
        let target = choose_target(game, role, eligible, last, input, output);
        if Some(target) != last {
            return Some(target);
        }
        output.write_line(REPEAT_TARGET_NOTICE);
    }
    game.log(&format!("{} ({}) kept choosing last night's target and skipped their action", game.player(actor).name(), role));
    None
}

fn apply(game: &mut Game, actor: PlayerId, role: Role, target: PlayerId, output: &mut dyn Output) {
    let actor_name = game.player(actor).name().to_owned();
    let target_name = game.player(target).name().to_owned();
    match role {
        Role::Civilian => {}
        Role::Mafia => {
            game.set_victim(target);
            output.write_line(&format!("You chose {} as your victim", target_name));
            game.log(&format!("Mafia member {} chose {} as the victim", actor_name, target_name));
        }
        Role::Detective => {
            let verdict = if game.player(target).role() == Role::Mafia { "MAFIA" } else { "NOT MAFIA" };
            output.write_line(&format!("Investigation result: {} is {}", target_name, verdict));
            game.log(&format!("Detective {} investigated {}: {}", actor_name, target_name, verdict));
        }
        Role::Doctor => {
            game.set_healed(target);
            game.player_mut(actor).remember_target(target);
            output.write_line(&format!("You healed {}", target_name));
            game.log(&format!("Doctor {} healed {}", actor_name, target_name));
        }
        Role::Courtesan => {
            game.player_mut(target).set_blocked(true);
            game.player_mut(actor).remember_target(target);
            output.write_line(&format!("You visited {}", target_name));
            game.log(&format!("Courtesan {} visited and blocked {}", actor_name, target_name));
        }
    }
}
