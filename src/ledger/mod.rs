//! Funds Ledger Module
//!
//! Escrow accounting. Money only moves here, and only together with the
//! status transition that justifies it.

pub mod escrow;

pub use escrow::EscrowLedger;
