//! Match Registry
//!
//! Append-only arena of matches keyed by their sequential id, plus the
//! derived set of ids still open for joining. Matches are never deleted,
//! only transitioned, so an id stays resolvable forever.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::game::state::{Match, MatchId};

/// Owns every match ever created.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MatchRegistry {
    /// Arena indexed by `MatchId`; position k holds the match with id k.
    matches: Vec<Match>,
    /// Ids currently `Open`. BTreeSet iterates ascending.
    open: BTreeSet<MatchId>,
}

impl MatchRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next inserted match will receive.
    pub fn next_id(&self) -> MatchId {
        self.matches.len() as MatchId
    }

    /// Insert a new open match built by `make` from its assigned id.
    pub fn insert_open(&mut self, make: impl FnOnce(MatchId) -> Match) -> MatchId {
        let id = self.next_id();
        let m = make(id);
        debug_assert_eq!(m.id, id);
        self.matches.push(m);
        self.open.insert(id);
        id
    }

    /// Look up a match.
    pub fn get(&self, id: MatchId) -> Option<&Match> {
        self.matches.get(id as usize)
    }

    /// Look up a match mutably.
    pub fn get_mut(&mut self, id: MatchId) -> Option<&mut Match> {
        self.matches.get_mut(id as usize)
    }

    /// Ids currently open, ascending.
    pub fn open_matches(&self) -> Vec<MatchId> {
        self.open.iter().copied().collect()
    }

    /// Remove an id from the open set (on join or cancel).
    pub fn close_open(&mut self, id: MatchId) {
        self.open.remove(&id);
    }

    /// Total matches ever created.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Has any match been created?
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Iterate over all matches in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter()
    }
}
