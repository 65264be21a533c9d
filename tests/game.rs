use mafia::{
    game::{
        self,
        actions::{perform_night_action, BLOCKED_NOTICE},
        vote::{run_vote, SELF_VOTE_NOTICE},
        Game,
        NightOutcome,
        Phase,
        Role,
        Side
    },
    handler::scripted::{MemoryLogger, RecordingOutput, ScriptedInput, ScriptedRandom},
    player::Player
};

fn roster(roles: &[Role]) -> Vec<Player> {
    roles.iter().enumerate().map(|(idx, &role)| Player::new(format!("P{}", idx), role)).collect()
}

/// Detective, doctor, courtesan, mafia, then three civilians.
fn seven_players(logger: &MemoryLogger) -> Game {
    Game::new_random(7, logger.clone(), &mut ScriptedRandom::default()).expect("failed to create game")
}

#[test]
fn full_game_civilians_win() {
    let logger = MemoryLogger::new();
    let mut game = seven_players(&logger);
    let mut input = ScriptedInput::new(vec![
        // night 1: courtesan visits civilian 4, mafia targets civilian 5, doctor heals themself, detective checks the mafia
        4, 5, 2, 3,
        // day 2: everyone votes for the mafia, who votes for the detective
        4, 4, 4, 1, 4, 4
    ]);
    let mut output = RecordingOutput::new();
    let winner = game::run(&mut game, &mut input, &mut output);
    assert_eq!(winner, Side::Civilians);
    assert_eq!(input.remaining(), 0);
    assert!(!game.player(5).is_alive());
    assert!(!game.player(3).is_alive());
    assert_eq!(game.alive(), vec![0, 1, 2, 4, 6]);
    assert_eq!((game.phase(), game.day()), (Phase::Night, 2));
    assert!(output.contains("There is no vote today"));
    assert!(output.contains(&format!("{} is MAFIA", game.player(3).name())));
    assert!(output.contains(&format!("{} was killed during the night", game.player(5))));
    assert!(output.contains("Game over! The civilians win."));
    assert!(logger.contains("the civilians win"));
}

#[test]
fn full_game_mafia_wins_on_parity() {
    let mut game = Game::from_roster(roster(&[Role::Mafia, Role::Doctor, Role::Courtesan, Role::Detective]), MemoryLogger::new());
    let mut input = ScriptedInput::new(vec![
        // night 1: courtesan blocks the doctor, mafia targets the doctor, detective checks the mafia
        2, 1, 1,
        // day 2: the courtesan is voted out
        2, 3, 2
    ]);
    let mut output = RecordingOutput::new();
    let winner = game::run(&mut game, &mut input, &mut output);
    assert_eq!(winner, Side::Mafia);
    assert!(output.contains(BLOCKED_NOTICE));
    assert!(!game.player(1).is_alive());
    assert!(!game.player(2).is_alive());
    assert_eq!(game.alive(), vec![0, 3]);
}

#[test]
fn game_already_decided_never_prompts() {
    let mut game = Game::from_roster(roster(&[Role::Mafia, Role::Civilian]), MemoryLogger::new());
    let mut input = ScriptedInput::default();
    assert_eq!(game::run(&mut game, &mut input, &mut RecordingOutput::new()), Side::Mafia);
    assert_eq!(input.prompts(), 0);
}

fn night_one(game: &mut Game, victim_choice: usize, heal_choice: usize) {
    game.next_phase();
    let mut output = RecordingOutput::new();
    // mafia eligible: [detective, doctor, courtesan, civilian 4, civilian 5, civilian 6]
    perform_night_action(game, 3, &mut ScriptedInput::new(vec![victim_choice]), &mut output);
    perform_night_action(game, 1, &mut ScriptedInput::new(vec![heal_choice]), &mut output);
    game.next_phase();
}

#[test]
fn unhealed_victim_dies_at_dawn() {
    let logger = MemoryLogger::new();
    let mut game = seven_players(&logger);
    night_one(&mut game, 5, 7);
    assert_eq!((game.victim(), game.healed()), (Some(5), Some(6)));
    assert_eq!(game.resolve_night(), NightOutcome::Killed(5));
    assert!(!game.player(5).is_alive());
    assert!(logger.contains("killed by the Mafia"));
}

#[test]
fn healed_victim_survives() {
    let logger = MemoryLogger::new();
    let mut game = seven_players(&logger);
    night_one(&mut game, 5, 6);
    assert_eq!(game.resolve_night(), NightOutcome::Saved(5));
    assert!(game.player(5).is_alive());
    assert!(logger.contains("saved by the Doctor"));
    assert!(!logger.contains("killed"));
    assert_eq!((game.victim(), game.healed()), (None, None));
}

#[test]
fn majority_vote_eliminates_one_player() {
    let mut game = Game::from_roster(roster(&[Role::Mafia, Role::Civilian, Role::Doctor, Role::Detective, Role::Civilian]), MemoryLogger::new());
    let mut input = ScriptedInput::new(vec![2, 1, 2, 2, 1]);
    let mut output = RecordingOutput::new();
    assert_eq!(run_vote(&mut game, &mut input, &mut output), Some(1));
    assert_eq!(game.alive(), vec![0, 2, 3, 4]);
    assert!(output.contains("P1 was voted out with 3 votes"));
}

#[test]
fn tied_vote_eliminates_the_earliest_player() {
    let mut game = Game::from_roster(roster(&[Role::Mafia, Role::Civilian, Role::Doctor, Role::Detective]), MemoryLogger::new());
    // P2 and P3 get two votes each
    let mut input = ScriptedInput::new(vec![3, 4, 4, 3]);
    assert_eq!(run_vote(&mut game, &mut input, &mut RecordingOutput::new()), Some(2));
    assert_eq!(game.alive(), vec![0, 1, 3]);
}

#[test]
fn self_votes_are_asked_again() {
    let logger = MemoryLogger::new();
    let mut game = Game::from_roster(roster(&[Role::Mafia, Role::Civilian, Role::Doctor]), logger.clone());
    let mut input = ScriptedInput::new(vec![1, 2, 1, 1]);
    let mut output = RecordingOutput::new();
    assert_eq!(run_vote(&mut game, &mut input, &mut output), Some(0));
    assert_eq!(input.prompts(), 4);
    assert!(output.contains(SELF_VOTE_NOTICE));
    assert!(logger.contains("P0 voted for P1"));
}

#[test]
fn repeated_self_votes_keep_being_asked() {
    let logger = MemoryLogger::new();
    let mut game = Game::from_roster(roster(&[Role::Mafia, Role::Civilian, Role::Doctor]), logger.clone());
    let mut input = ScriptedInput::new(vec![1, 1, 1]);
    // P0 finally picks P2, then both others vote for P0
    input.push(3);
    input.push(1);
    input.push(1);
    let mut output = RecordingOutput::new();
    assert_eq!(run_vote(&mut game, &mut input, &mut output), Some(0));
    assert_eq!(input.remaining(), 0);
    assert_eq!(input.prompts(), 6);
    assert_eq!(output.lines().iter().filter(|line| *line == SELF_VOTE_NOTICE).count(), 3);
    assert!(logger.contains("P0 voted for P2"));
    assert!(!logger.contains("abstained"));
}

#[test]
fn night_kill_ending_the_game_skips_the_vote() {
    let mut game = Game::from_roster(roster(&[Role::Mafia, Role::Courtesan, Role::Civilian]), MemoryLogger::new());
    // courtesan visits the civilian, mafia kills the courtesan
    let mut input = ScriptedInput::new(vec![2, 1]);
    let mut output = RecordingOutput::new();
    assert_eq!(game::run(&mut game, &mut input, &mut output), Side::Mafia);
    assert_eq!(input.prompts(), 2);
    assert_eq!(game.day(), 2);
    assert!(!game.player(1).is_alive());
    assert!(!output.contains("vote for a player"));
}
