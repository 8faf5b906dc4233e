//! Roster lifecycle: create, update, remove, sort.
//!
//! The roster owns the canonical record sequence and is only mutated through
//! these operations. Drafts are expected to have passed validation before
//! they reach `create`/`update`; a score that still fails to parse surfaces
//! as a `RosterError` rather than a panic.

pub mod validation;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, RosterError};
use crate::models::{Player, PlayerDraft};

/// The hard-coded startup roster (ids 1-4).
pub fn seed_roster() -> Vec<Player> {
    vec![
        Player::new(1, "John", "Smith", 30),
        Player::new(2, "David", "Jones", 55),
        Player::new(3, "Michael", "Johnson", 30),
        Player::new(4, "Chris", "Lee", 30),
    ]
}

/// Ordered collection of player records with a monotonic id counter.
///
/// Ids are never reused: removing a record does not free its id for later
/// creates, so an id identifies one record for the life of the roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerRoster {
    players: Vec<Player>,
    next_id: u32,
}

impl Default for PlayerRoster {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerRoster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self { players: Vec::new(), next_id: 1 }
    }

    /// Adopt an existing record sequence; the id counter continues after the
    /// highest id present.
    pub fn with_players(players: Vec<Player>) -> Self {
        let next_id = players.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self { players, next_id }
    }

    /// The startup roster of four records.
    pub fn seeded() -> Self {
        Self::with_players(seed_roster())
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Append a new record built from the draft. Names are copied as given;
    /// the score string is parsed to an integer.
    pub fn create(&mut self, draft: &PlayerDraft) -> Result<Player> {
        let score = parse_score(&draft.score)?;
        let player =
            Player::new(self.next_id, draft.first_name.clone(), draft.last_name.clone(), score);
        self.next_id += 1;
        self.players.push(player.clone());
        debug!(id = player.id, "created player");
        Ok(player)
    }

    /// Overwrite the record with the given id in place. An unknown id is
    /// silently ignored.
    pub fn update(&mut self, id: u32, draft: &PlayerDraft) -> Result<()> {
        let score = parse_score(&draft.score)?;
        match self.players.iter_mut().find(|p| p.id == id) {
            Some(player) => {
                player.first_name = draft.first_name.clone();
                player.last_name = draft.last_name.clone();
                player.score = score;
                debug!(id, "updated player");
            }
            None => debug!(id, "update for unknown player id ignored"),
        }
        Ok(())
    }

    /// Remove and return the record with the given id; `None` if absent.
    pub fn remove(&mut self, id: u32) -> Option<Player> {
        match self.players.iter().position(|p| p.id == id) {
            Some(idx) => {
                debug!(id, "removed player");
                Some(self.players.remove(idx))
            }
            None => {
                debug!(id, "remove for unknown player id ignored");
                None
            }
        }
    }

    /// Records in standing order; the roster's own sequence is untouched.
    pub fn sorted(&self) -> Vec<Player> {
        let mut players = self.players.clone();
        sort_players(&mut players);
        players
    }
}

/// Stable standing order: score descending, then last name ascending.
/// Records tied on both keys keep their original relative order.
pub fn sort_players(players: &mut [Player]) {
    players.sort_by(standing_order);
}

fn standing_order(a: &Player, b: &Player) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.last_name.cmp(&b.last_name))
}

fn parse_score(raw: &str) -> Result<u8> {
    raw.trim().parse::<u8>().map_err(|_| RosterError::InvalidScore { raw: raw.to_string() })
}
