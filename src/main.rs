//! Gridstake Demo
//!
//! Drives one staked match through the public engine surface and prints
//! the emitted events.

use anyhow::Result;
use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gridstake::{Address, CallContext, EngineConfig, GameEngine, VERSION};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("Gridstake Engine v{}", VERSION);

    let mut engine = GameEngine::new(EngineConfig { timeout_secs: 2 });

    let alice = Address::new([0xa1; 20]);
    let bob = Address::new([0xb2; 20]);
    let now = Utc::now().timestamp();

    // Alice opens a match bound to her commitment, staking 1000 units.
    let commitment = engine.salted_hash(123, "my salt 1");
    info!("commitment: {}", commitment);

    let match_id = engine.create_match(
        &CallContext::with_deposit(alice, 1000, now),
        commitment,
        "Alice",
    )?;
    info!("open matches: {:?}", engine.open_matches());

    // Bob joins by matching the wager.
    engine.join_match(&CallContext::with_deposit(bob, 1000, now + 1), match_id, "Bob")?;
    info!("escrow holds {} units", engine.held_total());

    // Alice takes the top row; Bob answers in the middle row.
    let moves = [(alice, 0u8), (bob, 3), (alice, 1), (bob, 4), (alice, 2)];
    for (i, &(player, cell)) in moves.iter().enumerate() {
        engine.play_move(&CallContext::new(player, now + 2 + i as i64), match_id, cell)?;
    }

    let info = engine.match_info(match_id)?;
    info!("final status: {:?}", info.status);
    info!("alice payout balance: {}", engine.payout_balance(alice));

    for event in engine.take_events() {
        info!("event: {}", serde_json::to_string(&event)?);
    }

    assert!(engine.check_conservation());
    Ok(())
}
