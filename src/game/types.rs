//! Data types used in game state representation.

use std::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};
use crate::player::PlayerId;

/// The side a player wins or loses with. It is derived from the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Every role other than Mafia.
    Civilians,
    /// The Mafia members.
    Mafia
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Side::Civilians => write!(f, "civilians"),
            Side::Mafia => write!(f, "mafia")
        }
    }
}

/// A Mafia player role. Assigned once at game creation and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A regular civilian with no night action.
    Civilian,
    /// A Mafia member. Chooses a non-Mafia victim each night.
    Mafia,
    /// Part of the civilian side. Checks whether another player is Mafia each night.
    Detective,
    /// Part of the civilian side. Heals a player each night, saving them if they are the victim. May not heal the same player two nights in a row.
    Doctor,
    /// Part of the civilian side. Visits another player each night, blocking their night action. May not visit the same player two nights in a row.
    Courtesan
}

impl Role {
    /// The side this role plays for.
    pub fn side(self) -> Side {
        match self {
            Role::Mafia => Side::Mafia,
            Role::Civilian | Role::Detective | Role::Doctor | Role::Courtesan => Side::Civilians
        }
    }

    /// Whether this role does anything at night.
    pub fn has_night_action(self) -> bool {
        self != Role::Civilian
    }
}

/// Returned when parsing an unknown role name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no such role: {0}")]
pub struct UnknownRole(String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Role, UnknownRole> {
        match &s.to_lowercase()[..] {
            "civilian" => Ok(Role::Civilian),
            "mafia" => Ok(Role::Mafia),
            "detective" => Ok(Role::Detective),
            "doctor" => Ok(Role::Doctor),
            "courtesan" => Ok(Role::Courtesan),
            _ => Err(UnknownRole(s.to_owned()))
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Role::Civilian => write!(f, "civilian"),
            Role::Mafia => write!(f, "mafia"),
            Role::Detective => write!(f, "detective"),
            Role::Doctor => write!(f, "doctor"),
            Role::Courtesan => write!(f, "courtesan")
        }
    }
}

/// The two alternating phases of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Public discussion and the elimination vote.
    Day,
    /// Secret night actions.
    Night
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Phase::Day => write!(f, "day"),
            Phase::Night => write!(f, "night")
        }
    }
}

/// Reported whenever the phase changes, in place of a change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChange {
    /// The phase that was entered.
    pub phase: Phase,
    /// The day counter after the change.
    pub day: u32
}

impl fmt::Display for PhaseChange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.phase {
            Phase::Day => write!(f, "Day {} begins", self.day),
            Phase::Night => write!(f, "Night {} falls", self.day)
        }
    }
}

/// What happened to the Mafia's victim, resolved at the start of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NightOutcome {
    /// Nobody was targeted.
    Quiet,
    /// The victim was healed by the Doctor and survives.
    Saved(PlayerId),
    /// The victim died.
    Killed(PlayerId)
}
