//! Engine Events
//!
//! Notifications emitted on successful state transitions, queued on the
//! engine and drained by whatever transport layer sits above it.

use serde::{Deserialize, Serialize};

use crate::core::address::Address;
use crate::game::state::{Amount, MatchId, PlayerNum};

/// A notification emitted by a successful engine call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineEvent {
    /// A new match was opened.
    MatchCreated {
        /// Id of the new match.
        match_id: MatchId,
    },

    /// A second player joined; the match is now in progress.
    MatchJoined {
        /// Id of the joined match.
        match_id: MatchId,
    },

    /// A move was placed on the board.
    MoveMade {
        /// Id of the match.
        match_id: MatchId,
        /// Who moved.
        player: PlayerNum,
        /// Cell index 0..=8.
        cell: u8,
    },

    /// A line was completed; the match is finished.
    MatchFinished {
        /// Id of the match.
        match_id: MatchId,
        /// The winning player.
        winner: PlayerNum,
        /// Address the pot was credited to.
        winner_address: Address,
        /// Pot amount credited.
        pot: Amount,
    },

    /// The board filled with no line; stakes returned.
    MatchDrawn {
        /// Id of the match.
        match_id: MatchId,
    },

    /// The waiting player claimed a stall and took the pot.
    MatchTimedOut {
        /// Id of the match.
        match_id: MatchId,
        /// Address the pot was forfeited to.
        claimed_by: Address,
        /// Pot amount credited.
        pot: Amount,
    },

    /// The creator withdrew an open match and was refunded.
    MatchCancelled {
        /// Id of the match.
        match_id: MatchId,
    },
}

impl EngineEvent {
    /// The match this event concerns.
    pub fn match_id(&self) -> MatchId {
        match self {
            EngineEvent::MatchCreated { match_id }
            | EngineEvent::MatchJoined { match_id }
            | EngineEvent::MoveMade { match_id, .. }
            | EngineEvent::MatchFinished { match_id, .. }
            | EngineEvent::MatchDrawn { match_id }
            | EngineEvent::MatchTimedOut { match_id, .. }
            | EngineEvent::MatchCancelled { match_id } => *match_id,
        }
    }
}
