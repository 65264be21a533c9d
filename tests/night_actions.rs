use mafia::{
    game::{
        actions::{perform_night_action, BLOCKED_NOTICE, REPEAT_TARGET_NOTICE},
        Game,
        Phase,
        Role
    },
    handler::scripted::{MemoryLogger, RecordingOutput, ScriptedInput, ScriptedRandom},
    player::Player
};

const DETECTIVE: usize = 0;
const DOCTOR: usize = 1;
const COURTESAN: usize = 2;
const MAFIA: usize = 3;

/// With all shuffle keys equal, roles stay in distribution order:
/// detective, doctor, courtesan, mafia, then civilians.
fn night_game(player_count: usize) -> (Game, MemoryLogger) {
    let logger = MemoryLogger::new();
    let mut game = Game::new_random(player_count, logger.clone(), &mut ScriptedRandom::default()).expect("failed to create game");
    game.set_phase(Phase::Night);
    (game, logger)
}

#[test]
fn detective_spots_the_mafia() {
    let (mut game, logger) = night_game(7);
    let mut output = RecordingOutput::new();
    // eligible: everyone but the detective, so choice 3 is the mafia
    perform_night_action(&mut game, DETECTIVE, &mut ScriptedInput::new(vec![3]), &mut output);
    assert!(output.contains(&format!("{} is MAFIA", game.player(MAFIA).name())));
    assert!(logger.contains("investigated"));
}

#[test]
fn detective_clears_a_civilian() {
    let (mut game, _) = night_game(7);
    let mut output = RecordingOutput::new();
    perform_night_action(&mut game, DETECTIVE, &mut ScriptedInput::new(vec![4]), &mut output);
    assert!(output.contains(&format!("{} is NOT MAFIA", game.player(4).name())));
}

#[test]
fn courtesan_blocks_the_chosen_player() {
    let (mut game, _) = night_game(7);
    perform_night_action(&mut game, COURTESAN, &mut ScriptedInput::new(vec![3]), &mut RecordingOutput::new());
    assert!(game.player(MAFIA).is_blocked());
    assert_eq!(game.players().iter().filter(|player| player.is_blocked()).count(), 1);
}

#[test]
fn mafia_picks_from_the_civilian_side() {
    let (mut game, _) = night_game(7);
    // eligible: [detective, doctor, courtesan, civilian 4, civilian 5, civilian 6]
    perform_night_action(&mut game, MAFIA, &mut ScriptedInput::new(vec![4]), &mut RecordingOutput::new());
    assert_eq!(game.victim(), Some(4));
}

#[test]
fn blocked_mafia_does_nothing() {
    let (mut game, logger) = night_game(7);
    perform_night_action(&mut game, COURTESAN, &mut ScriptedInput::new(vec![3]), &mut RecordingOutput::new());
    let mut input = ScriptedInput::new(vec![1]);
    let mut output = RecordingOutput::new();
    perform_night_action(&mut game, MAFIA, &mut input, &mut output);
    assert_eq!(game.victim(), None);
    assert_eq!(input.prompts(), 0);
    assert!(output.contains(BLOCKED_NOTICE));
    assert!(logger.contains("blocked by the Courtesan"));
    assert!(game.player(MAFIA).is_blocked());
}

#[test]
fn last_mafia_member_decides() {
    let (mut game, _) = night_game(8);
    assert_eq!(game.mafia(), vec![3, 4]);
    perform_night_action(&mut game, 3, &mut ScriptedInput::new(vec![1]), &mut RecordingOutput::new());
    assert_eq!(game.victim(), Some(0));
    perform_night_action(&mut game, 4, &mut ScriptedInput::new(vec![2]), &mut RecordingOutput::new());
    assert_eq!(game.victim(), Some(1));
}

#[test]
fn doctor_cannot_heal_the_same_player_twice_in_a_row() {
    let (mut game, _) = night_game(7);
    perform_night_action(&mut game, DOCTOR, &mut ScriptedInput::new(vec![5]), &mut RecordingOutput::new());
    assert_eq!(game.healed(), Some(4));
    game.next_phase();
    game.resolve_night();
    game.next_phase();
    let mut input = ScriptedInput::new(vec![5, 6]);
    let mut output = RecordingOutput::new();
    perform_night_action(&mut game, DOCTOR, &mut input, &mut output);
    assert_eq!(input.prompts(), 2);
    assert!(output.contains(REPEAT_TARGET_NOTICE));
    assert!(output.contains("(chosen last night)"));
    assert_eq!(game.healed(), Some(5));
    assert_eq!(game.player(DOCTOR).character().last_target(), Some(5));
}

#[test]
fn courtesan_cannot_visit_the_same_player_twice_in_a_row() {
    let (mut game, _) = night_game(7);
    perform_night_action(&mut game, COURTESAN, &mut ScriptedInput::new(vec![4]), &mut RecordingOutput::new());
    assert!(game.player(4).is_blocked());
    game.next_phase();
    assert!(!game.player(4).is_blocked());
    game.next_phase();
    let mut input = ScriptedInput::new(vec![4, 1]);
    let mut output = RecordingOutput::new();
    perform_night_action(&mut game, COURTESAN, &mut input, &mut output);
    assert_eq!(input.prompts(), 2);
    assert!(output.contains(REPEAT_TARGET_NOTICE));
    assert!(!game.player(4).is_blocked());
    assert!(game.player(DETECTIVE).is_blocked());
}

#[test]
fn injected_roster_from_json() {
    let players: Vec<Player> = serde_json::from_str(r#"[
        {"name": "Anna", "role": "mafia"},
        {"name": "Bohdan", "role": "doctor", "last_healed": 2},
        {"name": "Vira", "role": "civilian"},
        {"name": "Hanna", "role": "detective", "alive": false}
    ]"#).expect("invalid roster");
    let game = Game::from_roster(players, MemoryLogger::new());
    assert_eq!(game.player(0).role(), Role::Mafia);
    assert_eq!(game.player(1).character().last_target(), Some(2));
    assert_eq!(game.alive(), vec![0, 1, 2]);
    assert_eq!((game.phase(), game.day()), (Phase::Day, 1));
}
