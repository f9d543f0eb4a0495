//! # Gridstake Match Engine
//!
//! Turn-based 3x3 match engine with per-match wager escrow and
//! timeout-based forfeiture.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     GRIDSTAKE ENGINE                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── hash.rs     - Salted SHA-256 commitment hash            │
//! │  └── address.rs  - 20-byte account addresses                 │
//! │                                                              │
//! │  game/           - Match state (no money)                    │
//! │  ├── board.rs    - 3x3 grid, line evaluation                 │
//! │  ├── state.rs    - Match record and status machine           │
//! │  ├── registry.rs - Append-only match arena + open set        │
//! │  └── events.rs   - Notifications for transitions             │
//! │                                                              │
//! │  ledger/         - Funds                                     │
//! │  └── escrow.rs   - Held stakes and payout balances           │
//! │                                                              │
//! │  engine/         - Serialized call surface                   │
//! │  ├── context.rs  - Caller, deposit, call time                │
//! │  ├── error.rs    - Rejection taxonomy                        │
//! │  └── calls.rs    - GameEngine operations                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Safety Model
//!
//! Calls are admitted one at a time (`&mut self`) and validate every
//! precondition before mutating anything: a rejected call changes no state
//! and moves no funds. Escrow conservation holds after every call; matches
//! are never deleted, only transitioned to a terminal status.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod engine;
pub mod game;
pub mod ledger;

// Re-export commonly used types
pub use crate::core::address::Address;
pub use crate::core::hash::{salted_hash, Commitment};
pub use crate::engine::{CallContext, EngineConfig, EngineError, EngineResult, GameEngine};
pub use crate::game::{Board, EngineEvent, MatchId, MatchInfo, MatchStatus, PlayerNum};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default stall timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: i64 = 300;
