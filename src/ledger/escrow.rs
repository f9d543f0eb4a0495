//! Escrow Ledger
//!
//! Tracks the stakes held per match and the payout balances credited at
//! resolution. Each match's escrow is partitioned: no operation may touch
//! another match's funds. Payouts are pull-based so the engine never
//! pushes value to an address mid-call.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::address::Address;
use crate::game::state::{Amount, MatchId};

/// Funds held and owed by the engine.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EscrowLedger {
    /// Stake currently held per match. An entry is removed when the match
    /// settles, so the map only ever lists live escrow.
    held: BTreeMap<MatchId, Amount>,
    /// Winnings and refunds credited per address, awaiting withdrawal.
    payouts: BTreeMap<Address, Amount>,
}

impl EscrowLedger {
    /// Empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stake to a match's escrow.
    pub fn deposit(&mut self, match_id: MatchId, amount: Amount) {
        if amount == 0 {
            return;
        }
        *self.held.entry(match_id).or_insert(0) += amount;
    }

    /// Stake currently held for one match.
    pub fn held_for(&self, match_id: MatchId) -> Amount {
        self.held.get(&match_id).copied().unwrap_or(0)
    }

    /// Total funds held across all matches.
    pub fn held_total(&self) -> Amount {
        self.held.values().sum()
    }

    /// Settle a match by crediting its entire escrow to one address.
    ///
    /// Zeroes the match's escrow. Used for wins and timeout forfeitures.
    pub fn settle_to(&mut self, match_id: MatchId, recipient: Address) -> Amount {
        let amount = self.held.remove(&match_id).unwrap_or(0);
        self.credit(recipient, amount);
        amount
    }

    /// Settle a match by splitting its escrow between the two players.
    ///
    /// Each receives exactly half; the pot is two equal stakes so the
    /// split never leaves a remainder. Used for draws.
    pub fn settle_split(&mut self, match_id: MatchId, a: Address, b: Address) {
        let amount = self.held.remove(&match_id).unwrap_or(0);
        debug_assert_eq!(amount % 2, 0, "pot is always two equal stakes");
        let half = amount / 2;
        self.credit(a, half);
        self.credit(b, amount - half);
    }

    /// Balance credited to an address and not yet withdrawn.
    pub fn payout_balance(&self, address: Address) -> Amount {
        self.payouts.get(&address).copied().unwrap_or(0)
    }

    /// Withdraw an address's full payout balance, returning the amount.
    pub fn withdraw_payout(&mut self, address: Address) -> Amount {
        self.payouts.remove(&address).unwrap_or(0)
    }

    /// Total credited across all addresses and not yet withdrawn.
    pub fn payouts_total(&self) -> Amount {
        self.payouts.values().sum()
    }

    fn credit(&mut self, address: Address, amount: Amount) {
        if amount == 0 {
            return;
        }
        *self.payouts.entry(address).or_insert(0) += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Address = Address([1; 20]);
    const B: Address = Address([2; 20]);

    #[test]
    fn test_deposit_and_totals() {
        let mut ledger = EscrowLedger::new();
        assert_eq!(ledger.held_total(), 0);

        ledger.deposit(0, 100);
        ledger.deposit(0, 100);
        ledger.deposit(1, 50);

        assert_eq!(ledger.held_for(0), 200);
        assert_eq!(ledger.held_for(1), 50);
        assert_eq!(ledger.held_total(), 250);
    }

    #[test]
    fn test_zero_deposit_is_noop() {
        let mut ledger = EscrowLedger::new();
        ledger.deposit(0, 0);
        assert_eq!(ledger.held_for(0), 0);
        assert_eq!(ledger.held_total(), 0);
    }

    #[test]
    fn test_settle_to_winner() {
        let mut ledger = EscrowLedger::new();
        ledger.deposit(0, 100);
        ledger.deposit(0, 100);

        let paid = ledger.settle_to(0, A);
        assert_eq!(paid, 200);
        assert_eq!(ledger.held_for(0), 0);
        assert_eq!(ledger.payout_balance(A), 200);
        assert_eq!(ledger.payout_balance(B), 0);
    }

    #[test]
    fn test_settle_split() {
        let mut ledger = EscrowLedger::new();
        ledger.deposit(3, 100);
        ledger.deposit(3, 100);

        ledger.settle_split(3, A, B);
        assert_eq!(ledger.held_for(3), 0);
        assert_eq!(ledger.payout_balance(A), 100);
        assert_eq!(ledger.payout_balance(B), 100);
    }

    #[test]
    fn test_settlement_is_partitioned_per_match() {
        let mut ledger = EscrowLedger::new();
        ledger.deposit(0, 100);
        ledger.deposit(1, 70);

        ledger.settle_to(0, A);
        // Match 1's escrow is untouched
        assert_eq!(ledger.held_for(1), 70);
        assert_eq!(ledger.held_total(), 70);
        assert_eq!(ledger.payout_balance(A), 100);
    }

    #[test]
    fn test_withdraw_payout() {
        let mut ledger = EscrowLedger::new();
        ledger.deposit(0, 40);
        ledger.settle_to(0, A);

        assert_eq!(ledger.withdraw_payout(A), 40);
        assert_eq!(ledger.payout_balance(A), 0);
        assert_eq!(ledger.withdraw_payout(A), 0);
    }

    #[test]
    fn test_settle_missing_match_is_noop() {
        let mut ledger = EscrowLedger::new();
        assert_eq!(ledger.settle_to(9, A), 0);
        assert_eq!(ledger.payout_balance(A), 0);
    }
}
