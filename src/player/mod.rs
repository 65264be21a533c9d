//! Contains the `Player` type, which combines a player's identity, role and status.

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::game::Role;

/// Players are identified by their position in the game's roster, which never changes.
pub type PlayerId = usize;

/// Display names handed out by `Game::new_random`, in order. Once the pool is exhausted it is reused with a numeric suffix.
pub const NAME_POOL: [&str; 10] = ["Anna", "Bohdan", "Vira", "Hanna", "Dmytro", "Olena", "Ivan", "Kateryna", "Maksym", "Sofia"];

/// Returns the display name for the player at the given roster position.
pub fn pool_name(index: usize) -> String {
    let name = NAME_POOL[index % NAME_POOL.len()];
    match index / NAME_POOL.len() {
        0 => name.to_owned(),
        round => format!("{} {}", name, round + 1)
    }
}

/// A role together with the night memory that role needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Character {
    /// See `Role::Civilian`.
    Civilian,
    /// See `Role::Mafia`.
    Mafia,
    /// See `Role::Detective`.
    Detective,
    /// See `Role::Doctor`.
    Doctor {
        /// The player healed on the Doctor's most recent successful night action.
        #[serde(default)]
        last_healed: Option<PlayerId>
    },
    /// See `Role::Courtesan`.
    Courtesan {
        /// The player visited on the Courtesan's most recent successful night action.
        #[serde(default)]
        last_visited: Option<PlayerId>
    }
}

impl Character {
    /// The role tag of this character.
    pub fn role(&self) -> Role {
        match *self {
            Character::Civilian => Role::Civilian,
            Character::Mafia => Role::Mafia,
            Character::Detective => Role::Detective,
            Character::Doctor { .. } => Role::Doctor,
            Character::Courtesan { .. } => Role::Courtesan
        }
    }

    /// The player this character may not target tonight, if any.
    pub fn last_target(&self) -> Option<PlayerId> {
        match *self {
            Character::Doctor { last_healed } => last_healed,
            Character::Courtesan { last_visited } => last_visited,
            _ => None
        }
    }

    fn remember(&mut self, target: PlayerId) {
        match self {
            Character::Doctor { last_healed } => *last_healed = Some(target),
            Character::Courtesan { last_visited } => *last_visited = Some(target),
            _ => {}
        }
    }
}

impl From<Role> for Character {
    fn from(role: Role) -> Character {
        match role {
            Role::Civilian => Character::Civilian,
            Role::Mafia => Character::Mafia,
            Role::Detective => Character::Detective,
            Role::Doctor => Character::Doctor { last_healed: None },
            Role::Courtesan => Character::Courtesan { last_visited: None }
        }
    }
}

fn alive_by_default() -> bool { true }

/// A participant in the game.
///
/// The name and role never change. `alive` only ever goes from `true` to `false`. `blocked` is set by a Courtesan's visit and cleared when the next day begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    #[serde(flatten)]
    character: Character,
    #[serde(default = "alive_by_default")]
    alive: bool,
    #[serde(default)]
    blocked: bool
}

impl Player {
    /// Creates a living, unblocked player.
    pub fn new(name: impl Into<String>, role: Role) -> Player {
        Player {
            name: name.into(),
            character: Character::from(role),
            alive: true,
            blocked: false
        }
    }

    /// The player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's role.
    pub fn role(&self) -> Role {
        self.character.role()
    }

    /// The player's role along with its night memory.
    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Returns `false` once the player has been eliminated.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Returns `true` if a Courtesan visited this player during the current night.
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    pub(crate) fn kill(&mut self) {
        self.alive = false;
    }

    pub(crate) fn set_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
    }

    pub(crate) fn remember_target(&mut self, target: PlayerId) {
        self.character.remember(target);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.role())
    }
}
