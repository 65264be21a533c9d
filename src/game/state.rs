//! Game state representation.

use std::{cmp, iter};
use crate::{
    game::{NightOutcome, Phase, PhaseChange, Role, Side},
    handler::{Logger, RandomSource},
    player::{self, Player, PlayerId}
};

/// The minimum number of players required to create a game: the Detective, Doctor and Courtesan plus at least one Mafia member.
pub const MIN_PLAYERS: usize = 4;

/// The possible errors returned by `Game::new_random`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NewGameError {
    /// There are less than the required number of players.
    #[error("failed to create game: not enough players ({required} required, {found} requested)")]
    NotEnoughPlayers {
        /// This many players are required to create a game.
        required: usize,
        /// But only this many were requested.
        found: usize
    }
}

/// Returns the roles handed out in a game with the given number of players, before shuffling.
///
/// There is always one Detective, one Doctor and one Courtesan, a quarter of the players (rounded down, but at least one) are Mafia, and everyone else is a Civilian.
pub fn role_distribution(player_count: usize) -> Result<Vec<Role>, NewGameError> {
    if player_count < MIN_PLAYERS {
        return Err(NewGameError::NotEnoughPlayers { required: MIN_PLAYERS, found: player_count });
    }
    let num_mafia = cmp::max(player_count / 4, 1);
    let mut roles = vec![Role::Detective, Role::Doctor, Role::Courtesan];
    roles.extend(iter::repeat(Role::Mafia).take(num_mafia));
    roles.extend(iter::repeat(Role::Civilian).take(player_count - num_mafia - 3));
    Ok(roles)
}

/// This represents the state of a game: the roster, the current phase, and the outcome of the current night so far.
pub struct Game {
    players: Vec<Player>,
    day: u32,
    phase: Phase,
    victim: Option<PlayerId>,
    healed: Option<PlayerId>,
    logger: Box<dyn Logger>
}

impl Game {
    /// Creates a game with `player_count` players and randomly assigned roles.
    ///
    /// Each role is given a random key in `0..player_count` and the roles are stably sorted by that key, so equal keys keep the order of `role_distribution`. Player names are taken from `player::NAME_POOL`.
    ///
    /// # Errors
    ///
    /// Returns an error if `player_count` is less than `MIN_PLAYERS`.
    pub fn new_random(player_count: usize, logger: impl Logger + 'static, random: &mut dyn RandomSource) -> Result<Game, NewGameError> {
        let roles = role_distribution(player_count)?;
        let len = roles.len();
        let mut keyed = roles.into_iter()
            .map(|role| (random.next_int(len), role))
            .collect::<Vec<_>>();
        keyed.sort_by_key(|&(key, _)| key);
        for (idx, &(_, role)) in keyed.iter().enumerate() {
            logger.log(&format!("{} was assigned the role {}", player::pool_name(idx), role));
        }
        let players = keyed.into_iter()
            .enumerate()
            .map(|(idx, (_, role))| Player::new(player::pool_name(idx), role))
            .collect();
        Ok(Game::from_roster(players, logger))
    }

    /// Creates a game from a pre-built roster, skipping random role assignment.
    ///
    /// The game starts on day 1, in the day phase.
    pub fn from_roster(players: Vec<Player>, logger: impl Logger + 'static) -> Game {
        let roster = players.iter().map(Player::to_string).collect::<Vec<_>>().join(", ");
        logger.log(&format!("Game created with {} players: {}", players.len(), roster));
        Game {
            players,
            day: 1,
            phase: Phase::Day,
            victim: None,
            healed: None,
            logger: Box::new(logger)
        }
    }

    /// The full roster, in its original order, including eliminated players.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID is not part of the roster.
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// The IDs of all living players, in roster order.
    pub fn alive(&self) -> Vec<PlayerId> {
        self.alive_where(|_| true)
    }

    /// The IDs of all living Mafia members, in roster order.
    pub fn mafia(&self) -> Vec<PlayerId> {
        self.alive_where(|player| player.role() == Role::Mafia)
    }

    /// The IDs of all living players not in the Mafia, in roster order. This includes the Detective, Doctor and Courtesan.
    pub fn civilian_side(&self) -> Vec<PlayerId> {
        self.alive_where(|player| player.role() != Role::Mafia)
    }

    /// The IDs of all living players with the given role, in roster order.
    pub fn alive_with_role(&self, role: Role) -> Vec<PlayerId> {
        self.alive_where(|player| player.role() == role)
    }

    fn alive_where(&self, mut filter: impl FnMut(&Player) -> bool) -> Vec<PlayerId> {
        self.players.iter()
            .enumerate()
            .filter(|&(_, player)| player.is_alive() && filter(player))
            .map(|(id, _)| id)
            .collect()
    }

    /// The current day number, starting at 1. A night shares the number of the day before it.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player the Mafia has chosen tonight, if any.
    pub fn victim(&self) -> Option<PlayerId> {
        self.victim
    }

    /// The player the Doctor has healed tonight, if any.
    pub fn healed(&self) -> Option<PlayerId> {
        self.healed
    }

    pub(crate) fn set_victim(&mut self, victim: PlayerId) {
        self.victim = Some(victim);
    }

    pub(crate) fn set_healed(&mut self, healed: PlayerId) {
        self.healed = Some(healed);
    }

    /// Appends a message to the game log.
    pub fn log(&self, message: &str) {
        self.logger.log(message);
    }

    /// Forces the game into the given phase, without touching the day counter or any player state.
    pub fn set_phase(&mut self, phase: Phase) -> PhaseChange {
        self.phase = phase;
        self.log(&format!("Phase set to {} (day {})", phase, self.day));
        self.phase_change()
    }

    /// Advances from day to night, or from night to the next day.
    ///
    /// A new day increments the day counter and lifts every Courtesan block.
    pub fn next_phase(&mut self) -> PhaseChange {
        match self.phase {
            Phase::Day => {
                self.phase = Phase::Night;
                self.log(&format!("Night {} falls", self.day));
            }
            Phase::Night => {
                self.phase = Phase::Day;
                self.day += 1;
                for player in &mut self.players {
                    player.set_blocked(false);
                }
                self.log(&format!("Day {} begins", self.day));
            }
        }
        self.phase_change()
    }

    fn phase_change(&self) -> PhaseChange {
        PhaseChange { phase: self.phase, day: self.day }
    }

    /// Applies the outcome of the past night and clears the victim and healed slots.
    ///
    /// The victim dies unless the Doctor healed the same player.
    pub fn resolve_night(&mut self) -> NightOutcome {
        let healed = self.healed.take();
        match self.victim.take() {
            None => NightOutcome::Quiet,
            Some(victim) if healed == Some(victim) => {
                self.log(&format!("{} was attacked by the Mafia but saved by the Doctor", self.players[victim].name()));
                NightOutcome::Saved(victim)
            }
            Some(victim) => {
                self.players[victim].kill();
                self.log(&format!("{} was killed by the Mafia", self.players[victim].name()));
                NightOutcome::Killed(victim)
            }
        }
    }

    /// Removes a player from play. They stay in the roster.
    pub fn eliminate(&mut self, id: PlayerId) {
        self.players[id].kill();
        self.log(&format!("{} was eliminated", self.players[id]));
    }

    /// Checks whether either side has won.
    ///
    /// The civilians win once no Mafia member is alive. The Mafia wins as soon as it is at least as large as the civilian side, even if civilians are still alive. Returns `None` while the game continues.
    pub fn is_game_over(&self) -> Option<Side> {
        let num_mafia = self.mafia().len();
        if num_mafia == 0 {
            Some(Side::Civilians)
        } else if num_mafia >= self.civilian_side().len() {
            Some(Side::Mafia)
        } else {
            None
        }
    }
}
