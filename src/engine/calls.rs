//! Engine Call Surface
//!
//! One `GameEngine` owns the registry, the escrow ledger, and the pending
//! event queue. Every public operation validates its full precondition set
//! before mutating anything, so a rejected call leaves state and funds
//! untouched. Calls are admitted one at a time; `&mut self` enforces the
//! serialized execution order the ledger environment guarantees.

use tracing::{debug, info};

use crate::core::address::Address;
use crate::core::hash::{self, Commitment};
use crate::engine::context::CallContext;
use crate::engine::error::{EngineError, EngineResult};
use crate::game::board::{BoardOutcome, Cell, BOARD_CELLS};
use crate::game::events::EngineEvent;
use crate::game::registry::MatchRegistry;
use crate::game::state::{
    Amount, Match, MatchId, MatchInfo, MatchStatus, PlayerNum, PlayerSlot, Timestamp,
};
use crate::ledger::escrow::EscrowLedger;

/// Engine configuration, fixed at initialization.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Stall duration after which the waiting player may claim the pot.
    /// Applies uniformly to every match.
    pub timeout_secs: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// The match engine: registry, escrow, and event queue behind one surface.
#[derive(Debug, Default)]
pub struct GameEngine {
    config: EngineConfig,
    registry: MatchRegistry,
    escrow: EscrowLedger,
    pending_events: Vec<EngineEvent>,
}

impl GameEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        info!(timeout_secs = config.timeout_secs, "engine initialized");
        Self {
            config,
            registry: MatchRegistry::new(),
            escrow: EscrowLedger::new(),
            pending_events: Vec::new(),
        }
    }

    /// Create an engine with just a timeout duration.
    pub fn with_timeout(timeout_secs: i64) -> Self {
        Self::new(EngineConfig { timeout_secs })
    }

    /// The configured timeout duration in seconds.
    pub fn timeout_secs(&self) -> i64 {
        self.config.timeout_secs
    }

    // =========================================================================
    // STATE-CHANGING OPERATIONS
    // =========================================================================

    /// Open a new match staked with the caller's attached deposit.
    ///
    /// The deposit becomes the match wager (zero is allowed) and is held in
    /// escrow until the match settles.
    pub fn create_match(
        &mut self,
        ctx: &CallContext,
        commitment: Commitment,
        nickname: &str,
    ) -> EngineResult<MatchId> {
        if nickname.is_empty() {
            return Err(EngineError::InvalidNickname);
        }

        let creator = PlayerSlot::new(ctx.caller, nickname);
        let wager = ctx.deposit;
        let match_id = self
            .registry
            .insert_open(|id| Match::open(id, commitment, creator, wager, ctx.now));
        self.escrow.deposit(match_id, wager);

        info!(match_id, wager, caller = %ctx.caller, "match created");
        self.emit(EngineEvent::MatchCreated { match_id });
        Ok(match_id)
    }

    /// Join an open match by matching its wager exactly.
    pub fn join_match(
        &mut self,
        ctx: &CallContext,
        match_id: MatchId,
        nickname: &str,
    ) -> EngineResult<()> {
        let m = self
            .registry
            .get_mut(match_id)
            .ok_or(EngineError::MatchNotFound(match_id))?;

        if m.status != MatchStatus::Open {
            return Err(EngineError::MatchNotOpen(match_id));
        }
        if nickname.is_empty() {
            return Err(EngineError::InvalidNickname);
        }
        if m.player1.address == ctx.caller {
            return Err(EngineError::SelfJoin);
        }
        if ctx.deposit != m.wager {
            return Err(EngineError::WagerMismatch {
                expected: m.wager,
                got: ctx.deposit,
            });
        }

        m.player2 = PlayerSlot::new(ctx.caller, nickname);
        m.status = MatchStatus::InProgress;
        m.turn_of = PlayerNum::One;
        m.last_action_at = ctx.now;
        self.registry.close_open(match_id);
        self.escrow.deposit(match_id, ctx.deposit);

        info!(match_id, caller = %ctx.caller, "match joined");
        self.emit(EngineEvent::MatchJoined { match_id });
        Ok(())
    }

    /// Place the caller's mark on a cell.
    ///
    /// After marking, the whole board is evaluated: a completed line
    /// finishes the match and pays the full pot to the mover; a full board
    /// with no line draws the match and returns both stakes.
    pub fn play_move(&mut self, ctx: &CallContext, match_id: MatchId, cell: u8) -> EngineResult<()> {
        let m = self
            .registry
            .get_mut(match_id)
            .ok_or(EngineError::MatchNotFound(match_id))?;

        if m.status != MatchStatus::InProgress {
            return Err(EngineError::MatchNotInProgress(match_id));
        }
        if cell as usize >= BOARD_CELLS {
            return Err(EngineError::InvalidCell(cell));
        }
        let mover = m.player_of(ctx.caller).ok_or(EngineError::NotYourTurn)?;
        if mover != m.turn_of {
            return Err(EngineError::NotYourTurn);
        }
        if m.board.cell(cell as usize) != Some(Cell::Empty) {
            return Err(EngineError::CellOccupied(cell));
        }

        m.board.set(cell as usize, mover);
        m.last_action_at = ctx.now;
        m.turn_of = mover.other();

        let outcome = m.board.evaluate();
        match outcome {
            BoardOutcome::Won(_) => m.status = MatchStatus::Finished,
            BoardOutcome::Drawn => m.status = MatchStatus::Drawn,
            BoardOutcome::Undecided => {}
        }
        let (p1, p2) = (m.player1.address, m.player2.address);

        debug!(match_id, ?mover, cell, "move placed");
        self.emit(EngineEvent::MoveMade {
            match_id,
            player: mover,
            cell,
        });

        match outcome {
            BoardOutcome::Won(winner) => {
                debug_assert_eq!(winner, mover, "only the mover can complete a line");
                let winner_address = match winner {
                    PlayerNum::One => p1,
                    PlayerNum::Two => p2,
                };
                let pot = self.escrow.settle_to(match_id, winner_address);
                info!(match_id, ?winner, pot, "match finished");
                self.emit(EngineEvent::MatchFinished {
                    match_id,
                    winner,
                    winner_address,
                    pot,
                });
            }
            BoardOutcome::Drawn => {
                self.escrow.settle_split(match_id, p1, p2);
                info!(match_id, "match drawn");
                self.emit(EngineEvent::MatchDrawn { match_id });
            }
            BoardOutcome::Undecided => {}
        }
        Ok(())
    }

    /// Forfeit a stalled match to the waiting player.
    ///
    /// Only the player who is *not* on turn may claim: the staller must
    /// not be able to forfeit themselves out of a loss they see coming.
    pub fn claim_timeout(&mut self, ctx: &CallContext, match_id: MatchId) -> EngineResult<()> {
        let timeout_secs = self.config.timeout_secs;
        let m = self
            .registry
            .get_mut(match_id)
            .ok_or(EngineError::MatchNotFound(match_id))?;

        if m.status != MatchStatus::InProgress {
            return Err(EngineError::MatchNotInProgress(match_id));
        }
        let claimant = m.player_of(ctx.caller).ok_or(EngineError::Unauthorized)?;
        if claimant == m.turn_of {
            return Err(EngineError::Unauthorized);
        }
        let elapsed = ctx.now - m.last_action_at;
        if elapsed < timeout_secs {
            return Err(EngineError::TimeoutNotElapsed {
                remaining: timeout_secs - elapsed,
            });
        }

        m.status = MatchStatus::TimedOut;
        m.last_action_at = ctx.now;
        let pot = self.escrow.settle_to(match_id, ctx.caller);

        info!(match_id, claimed_by = %ctx.caller, pot, "match timed out");
        self.emit(EngineEvent::MatchTimedOut {
            match_id,
            claimed_by: ctx.caller,
            pot,
        });
        Ok(())
    }

    /// Withdraw a still-open match, refunding the creator's stake.
    pub fn cancel_match(&mut self, ctx: &CallContext, match_id: MatchId) -> EngineResult<()> {
        let m = self
            .registry
            .get_mut(match_id)
            .ok_or(EngineError::MatchNotFound(match_id))?;

        if m.status != MatchStatus::Open {
            return Err(EngineError::MatchNotOpen(match_id));
        }
        if m.player1.address != ctx.caller {
            return Err(EngineError::Unauthorized);
        }

        m.status = MatchStatus::Cancelled;
        m.last_action_at = ctx.now;
        self.registry.close_open(match_id);
        self.escrow.settle_to(match_id, ctx.caller);

        info!(match_id, "match cancelled");
        self.emit(EngineEvent::MatchCancelled { match_id });
        Ok(())
    }

    /// Withdraw the caller's full payout balance, returning the amount.
    pub fn withdraw_payout(&mut self, ctx: &CallContext) -> Amount {
        let amount = self.escrow.withdraw_payout(ctx.caller);
        if amount > 0 {
            info!(caller = %ctx.caller, amount, "payout withdrawn");
        }
        amount
    }

    // =========================================================================
    // READ-ONLY ACCESSORS
    // =========================================================================

    /// Ids of matches currently open for joining, ascending.
    pub fn open_matches(&self) -> Vec<MatchId> {
        self.registry.open_matches()
    }

    /// Snapshot of a match: board, status, wager, nicknames.
    pub fn match_info(&self, match_id: MatchId) -> EngineResult<MatchInfo> {
        self.registry
            .get(match_id)
            .map(MatchInfo::from)
            .ok_or(EngineError::MatchNotFound(match_id))
    }

    /// Time of the last state-changing action on a match.
    pub fn match_timestamp(&self, match_id: MatchId) -> EngineResult<Timestamp> {
        self.registry
            .get(match_id)
            .map(|m| m.last_action_at)
            .ok_or(EngineError::MatchNotFound(match_id))
    }

    /// Player addresses of a match (zero address for a vacant slot).
    pub fn match_players(&self, match_id: MatchId) -> EngineResult<(Address, Address)> {
        self.registry
            .get(match_id)
            .map(|m| (m.player1.address, m.player2.address))
            .ok_or(EngineError::MatchNotFound(match_id))
    }

    /// The salted commitment hash, exposed through the engine surface.
    ///
    /// Delegates to [`crate::core::hash::salted_hash`]; both paths return
    /// bit-identical output for identical inputs.
    pub fn salted_hash(&self, value: u64, salt: &str) -> Commitment {
        hash::salted_hash(value, salt)
    }

    /// Total funds currently held in escrow.
    pub fn held_total(&self) -> Amount {
        self.escrow.held_total()
    }

    /// Payout balance credited to an address.
    pub fn payout_balance(&self, address: Address) -> Amount {
        self.escrow.payout_balance(address)
    }

    /// Verify escrow conservation: funds held must equal the stakes of all
    /// non-terminal matches (one stake while `Open`, two while
    /// `InProgress`).
    pub fn check_conservation(&self) -> bool {
        let expected: Amount = self
            .registry
            .iter()
            .map(|m| match m.status {
                MatchStatus::Open => m.wager,
                MatchStatus::InProgress => m.pot(),
                _ => 0,
            })
            .sum();
        expected == self.escrow.held_total()
    }

    /// Drain the pending event queue.
    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn emit(&mut self, event: EngineEvent) {
        self.pending_events.push(event);
    }
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    const P1: Address = Address([1; 20]);
    const P2: Address = Address([2; 20]);

    /// One caller action chosen by the fuzzer.
    #[derive(Debug, Clone)]
    enum Action {
        Create { wager: u64 },
        Join { id: u64, deposit: u64 },
        Move { player: bool, id: u64, cell: u8 },
        Timeout { player: bool, id: u64 },
        Cancel { player: bool, id: u64 },
    }

    fn action_strategy() -> impl Strategy<Value = Action> {
        prop_oneof![
            (0u64..1000).prop_map(|wager| Action::Create { wager }),
            (0u64..8, 0u64..1000).prop_map(|(id, deposit)| Action::Join { id, deposit }),
            (any::<bool>(), 0u64..8, 0u8..12)
                .prop_map(|(player, id, cell)| Action::Move { player, id, cell }),
            (any::<bool>(), 0u64..8).prop_map(|(player, id)| Action::Timeout { player, id }),
            (any::<bool>(), 0u64..8).prop_map(|(player, id)| Action::Cancel { player, id }),
        ]
    }

    proptest! {
        /// Escrow conservation holds after every call, successful or not,
        /// and settled funds always end up in payout balances.
        #[test]
        fn conservation_under_random_call_sequences(
            actions in proptest::collection::vec(action_strategy(), 1..60)
        ) {
            let mut engine = GameEngine::with_timeout(5);
            let mut deposited: Amount = 0;
            let mut now = 1_000_000i64;

            for action in actions {
                now += 3;
                match action {
                    Action::Create { wager } => {
                        let ctx = CallContext::with_deposit(P1, wager as Amount, now);
                        if engine
                            .create_match(&ctx, crate::core::hash::salted_hash(7, "s"), "John")
                            .is_ok()
                        {
                            deposited += wager as Amount;
                        }
                    }
                    Action::Join { id, deposit } => {
                        let ctx = CallContext::with_deposit(P2, deposit as Amount, now);
                        if engine.join_match(&ctx, id, "Jane").is_ok() {
                            deposited += deposit as Amount;
                        }
                    }
                    Action::Move { player, id, cell } => {
                        let caller = if player { P1 } else { P2 };
                        let _ = engine.play_move(&CallContext::new(caller, now), id, cell);
                    }
                    Action::Timeout { player, id } => {
                        let caller = if player { P1 } else { P2 };
                        now += 10;
                        let _ = engine.claim_timeout(&CallContext::new(caller, now), id);
                    }
                    Action::Cancel { player, id } => {
                        let caller = if player { P1 } else { P2 };
                        let _ = engine.cancel_match(&CallContext::new(caller, now), id);
                    }
                }

                prop_assert!(engine.check_conservation());
                // Nothing leaks: whatever went in is either still held or
                // credited as a payout.
                prop_assert_eq!(
                    engine.held_total() + engine.escrow.payouts_total(),
                    deposited
                );
            }
        }
    }
}
