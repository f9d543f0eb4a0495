//! Engine Layer
//!
//! The serialized call surface over registry and ledger. Calls execute to
//! completion one at a time; a rejected call is a clean no-op.

pub mod calls;
pub mod context;
pub mod error;

pub use calls::{EngineConfig, GameEngine};
pub use context::CallContext;
pub use error::{EngineError, EngineResult};
