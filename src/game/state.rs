//! Match State Definitions
//!
//! The match record and its closed status machine. Only the transitions
//! enumerated on `MatchStatus` are legal; everything else is rejected by
//! the engine before any state is touched.

use serde::{Deserialize, Serialize};

use crate::core::address::Address;
use crate::core::hash::Commitment;
use crate::game::board::Board;

/// Sequential match identifier, assigned from 0 and never reused.
pub type MatchId = u64;

/// Unix timestamp in seconds.
pub type Timestamp = i64;

/// Monetary amount in the ledger's native unit.
pub type Amount = u128;

/// Which of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum PlayerNum {
    /// The match creator.
    One = 1,
    /// The joiner.
    Two = 2,
}

impl PlayerNum {
    /// The opposing player.
    pub fn other(self) -> PlayerNum {
        match self {
            PlayerNum::One => PlayerNum::Two,
            PlayerNum::Two => PlayerNum::One,
        }
    }
}

/// Lifecycle status of a match.
///
/// Transitions: `Open -> InProgress` (join), `Open -> Cancelled` (cancel),
/// `InProgress -> Finished | Drawn` (move), `InProgress -> TimedOut`
/// (timeout claim). Terminal statuses never transition again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum MatchStatus {
    /// Waiting for a second player.
    Open = 0,
    /// Both players seated, moves being played.
    InProgress = 1,
    /// A line was completed; the mover won the pot.
    Finished = 2,
    /// Board filled with no line; stakes returned.
    Drawn = 3,
    /// The waiting player claimed a stall; pot forfeited to them.
    TimedOut = 4,
    /// Creator withdrew before anyone joined.
    Cancelled = 5,
}

impl MatchStatus {
    /// Is this a terminal status (no further transitions, escrow settled)?
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            MatchStatus::Finished
                | MatchStatus::Drawn
                | MatchStatus::TimedOut
                | MatchStatus::Cancelled
        )
    }
}

/// One seated player: account address plus display nickname.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PlayerSlot {
    /// Account address (zero while the slot is unfilled).
    pub address: Address,
    /// Display nickname (empty while the slot is unfilled).
    pub nickname: String,
}

impl PlayerSlot {
    /// A filled slot.
    pub fn new(address: Address, nickname: impl Into<String>) -> Self {
        Self {
            address,
            nickname: nickname.into(),
        }
    }

    /// An unfilled slot (zero address, empty nickname).
    pub fn vacant() -> Self {
        Self::default()
    }
}

/// One match instance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Match {
    /// Sequential identifier.
    pub id: MatchId,
    /// The 3x3 grid.
    pub board: Board,
    /// Lifecycle status.
    pub status: MatchStatus,
    /// Opaque creation-binding hash supplied by the creator.
    pub commitment: Commitment,
    /// Stake per player, fixed by the creator's deposit.
    pub wager: Amount,
    /// The creator.
    pub player1: PlayerSlot,
    /// The joiner (vacant while `Open`).
    pub player2: PlayerSlot,
    /// Time of the last state-changing action on this match.
    pub last_action_at: Timestamp,
    /// Who must move next (meaningful only while `InProgress`).
    pub turn_of: PlayerNum,
}

impl Match {
    /// Create a freshly opened match.
    pub fn open(
        id: MatchId,
        commitment: Commitment,
        creator: PlayerSlot,
        wager: Amount,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            board: Board::empty(),
            status: MatchStatus::Open,
            commitment,
            wager,
            player1: creator,
            player2: PlayerSlot::vacant(),
            last_action_at: now,
            turn_of: PlayerNum::One,
        }
    }

    /// Which player an address is seated as, if any.
    pub fn player_of(&self, address: Address) -> Option<PlayerNum> {
        if self.player1.address == address {
            Some(PlayerNum::One)
        } else if !self.player2.address.is_zero() && self.player2.address == address {
            Some(PlayerNum::Two)
        } else {
            None
        }
    }

    /// Address of a seated player.
    pub fn address_of(&self, player: PlayerNum) -> Address {
        match player {
            PlayerNum::One => self.player1.address,
            PlayerNum::Two => self.player2.address,
        }
    }

    /// Total pot owed at resolution of an in-progress match.
    pub fn pot(&self) -> Amount {
        self.wager * 2
    }
}

/// Read-only snapshot of a match as exposed to callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchInfo {
    /// Cells as raw u8 values, row-major.
    pub board: [u8; 9],
    /// Lifecycle status.
    pub status: MatchStatus,
    /// Stake per player.
    pub wager: Amount,
    /// Creator nickname.
    pub nick1: String,
    /// Joiner nickname (empty while `Open`).
    pub nick2: String,
}

impl From<&Match> for MatchInfo {
    fn from(m: &Match) -> Self {
        Self {
            board: m.board.to_u8_array(),
            status: m.status,
            wager: m.wager,
            nick1: m.player1.nickname.clone(),
            nick2: m.player2.nickname.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hash::salted_hash;

    fn sample_match() -> Match {
        Match::open(
            0,
            salted_hash(123, "my salt 1"),
            PlayerSlot::new(Address::new([1; 20]), "John"),
            0,
            1000,
        )
    }

    #[test]
    fn test_open_match_shape() {
        let m = sample_match();
        assert_eq!(m.status, MatchStatus::Open);
        assert_eq!(m.board, Board::empty());
        assert_eq!(m.player2, PlayerSlot::vacant());
        assert!(m.player2.address.is_zero());
        assert_eq!(m.turn_of, PlayerNum::One);
    }

    #[test]
    fn test_player_lookup() {
        let mut m = sample_match();
        let p1 = Address::new([1; 20]);
        let p2 = Address::new([2; 20]);

        assert_eq!(m.player_of(p1), Some(PlayerNum::One));
        // Vacant slot must not match the zero address
        assert_eq!(m.player_of(Address::ZERO), None);

        m.player2 = PlayerSlot::new(p2, "Jane");
        assert_eq!(m.player_of(p2), Some(PlayerNum::Two));
        assert_eq!(m.player_of(Address::new([3; 20])), None);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!MatchStatus::Open.is_terminal());
        assert!(!MatchStatus::InProgress.is_terminal());
        assert!(MatchStatus::Finished.is_terminal());
        assert!(MatchStatus::Drawn.is_terminal());
        assert!(MatchStatus::TimedOut.is_terminal());
        assert!(MatchStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_turn_flip() {
        assert_eq!(PlayerNum::One.other(), PlayerNum::Two);
        assert_eq!(PlayerNum::Two.other(), PlayerNum::One);
    }

    #[test]
    fn test_match_info_snapshot() {
        let m = sample_match();
        let info = MatchInfo::from(&m);
        assert_eq!(info.board, [0; 9]);
        assert_eq!(info.status, MatchStatus::Open);
        assert_eq!(info.wager, 0);
        assert_eq!(info.nick1, "John");
        assert_eq!(info.nick2, "");
    }
}
