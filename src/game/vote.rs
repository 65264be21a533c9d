//! The daytime elimination vote.

use crate::{
    game::Game,
    handler::{Input, Output},
    player::PlayerId
};

/// Shown when a player tries to vote for themselves.
pub const SELF_VOTE_NOTICE: &str = "You cannot vote for yourself.";

/// Vote counts for a set of candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    votes: Vec<(PlayerId, u32)> // sorted by roster position
}

impl Tally {
    /// Starts a tally with zero votes for each candidate.
    pub fn new<I: IntoIterator<Item = PlayerId>>(candidates: I) -> Tally {
        let mut votes = candidates.into_iter().map(|id| (id, 0)).collect::<Vec<_>>();
        votes.sort_by_key(|&(id, _)| id);
        votes.dedup_by_key(|&mut (id, _)| id);
        Tally { votes }
    }

    /// Adds one vote for the given candidate.
    ///
    /// Returns `false` if that player is not a candidate.
    pub fn cast(&mut self, candidate: PlayerId) -> bool {
        match self.votes.iter_mut().find(|(id, _)| *id == candidate) {
            Some((_, count)) => {
                *count += 1;
                true
            }
            None => false
        }
    }

    /// The number of votes the given player has received.
    pub fn votes_for(&self, candidate: PlayerId) -> u32 {
        self.votes.iter().find(|&&(id, _)| id == candidate).map_or(0, |&(_, count)| count)
    }

    /// The candidate with the most votes. On a tie, the one earliest in the roster.
    ///
    /// Returns `None` if no votes were cast.
    pub fn leader(&self) -> Option<PlayerId> {
        self.votes.iter()
            .fold(None, |best: Option<(PlayerId, u32)>, &(id, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((id, count))
            })
            .filter(|&(_, count)| count > 0)
            .map(|(id, _)| id)
    }
}

/// Runs a full voting round and eliminates the leader of the tally.
///
/// Every living player votes once, in roster order, for any other living player. A vote for oneself is rejected and asked again until the voter picks someone else. Returns the eliminated player, if anyone was eliminated.
pub fn run_vote(game: &mut Game, input: &mut dyn Input, output: &mut dyn Output) -> Option<PlayerId> {
    let alive = game.alive();
    let mut tally = Tally::new(alive.iter().copied());
    for &voter in &alive {
        output.write_line(&format!("{}, vote for a player to eliminate:", game.player(voter).name()));
        for (idx, &id) in alive.iter().enumerate() {
            output.write_line(&format!("{}. {}", idx + 1, game.player(id).name()));
        }
        let candidate = loop {
            let candidate = alive[input.read_int_in_range(1, alive.len()) - 1];
            if candidate != voter {
                break candidate;
            }
            output.write_line(SELF_VOTE_NOTICE);
        };
        tally.cast(candidate);
        game.log(&format!("{} voted for {}", game.player(voter).name(), game.player(candidate).name()));
    }
    let eliminated = tally.leader();
    match eliminated {
        Some(id) => {
            game.eliminate(id);
            output.write_line(&format!("{} was voted out with {} votes", game.player(id).name(), tally.votes_for(id)));
        }
        None => output.write_line("Nobody was voted out")
    }
    eliminated
}
