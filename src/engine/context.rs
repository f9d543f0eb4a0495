//! Call Context
//!
//! The ledger environment admits calls one at a time; each carries the
//! caller's identity, any value attached to the call, and the time at
//! which the call was ordered. Packaging these keeps the engine free of
//! ambient clocks and lets tests drive time explicitly.

use crate::core::address::Address;
use crate::game::state::{Amount, Timestamp};

/// Context of one admitted call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallContext {
    /// The calling account.
    pub caller: Address,
    /// Value attached to the call (zero for plain calls).
    pub deposit: Amount,
    /// Unix time at which the call was admitted.
    pub now: Timestamp,
}

impl CallContext {
    /// A plain call with no attached value.
    pub fn new(caller: Address, now: Timestamp) -> Self {
        Self {
            caller,
            deposit: 0,
            now,
        }
    }

    /// A call carrying an attached deposit.
    pub fn with_deposit(caller: Address, deposit: Amount, now: Timestamp) -> Self {
        Self {
            caller,
            deposit,
            now,
        }
    }
}
