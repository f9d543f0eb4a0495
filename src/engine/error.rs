//! Engine Errors
//!
//! Every failure aborts the whole call before any state or funds move, so
//! a rejected call is always a clean no-op.

use crate::game::state::{Amount, MatchId};

/// Reasons an engine call can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// No match has been assigned this id.
    #[error("match {0} not found")]
    MatchNotFound(MatchId),

    /// The match is past `Open` (or was cancelled).
    #[error("match {0} is not open")]
    MatchNotOpen(MatchId),

    /// The match is not `InProgress`.
    #[error("match {0} is not in progress")]
    MatchNotInProgress(MatchId),

    /// The attached deposit does not equal the match's wager.
    #[error("wager mismatch: match requires {expected}, got {got}")]
    WagerMismatch {
        /// Stake the match was created with.
        expected: Amount,
        /// Deposit attached to the call.
        got: Amount,
    },

    /// The caller is seated but it is the opponent's turn.
    #[error("not your turn")]
    NotYourTurn,

    /// The target cell already carries a mark.
    #[error("cell {0} is occupied")]
    CellOccupied(u8),

    /// The cell index is outside 0..=8.
    #[error("invalid cell index {0}")]
    InvalidCell(u8),

    /// The creator tried to join their own match.
    #[error("cannot join own match")]
    SelfJoin,

    /// The timeout duration has not yet elapsed.
    #[error("timeout not elapsed: {remaining}s remaining")]
    TimeoutNotElapsed {
        /// Seconds left until the claim becomes valid.
        remaining: i64,
    },

    /// The caller is not entitled to this action.
    #[error("unauthorized")]
    Unauthorized,

    /// The nickname is empty.
    #[error("invalid nickname")]
    InvalidNickname,
}

/// Result type for engine calls.
pub type EngineResult<T> = Result<T, EngineError>;
