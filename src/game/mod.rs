//! Match State Module
//!
//! Pure match data and rules; no money moves here.
//!
//! - `board`: the 3x3 grid and line evaluation
//! - `state`: match record and status machine
//! - `registry`: append-only match arena and open set
//! - `events`: notifications emitted on transitions

pub mod board;
pub mod events;
pub mod registry;
pub mod state;

// Re-export key types
pub use board::{Board, BoardOutcome, Cell, BOARD_CELLS, LINES};
pub use events::EngineEvent;
pub use registry::MatchRegistry;
pub use state::{Amount, Match, MatchId, MatchInfo, MatchStatus, PlayerNum, PlayerSlot, Timestamp};
