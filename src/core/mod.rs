//! Core deterministic primitives.
//!
//! Types in this module carry no game knowledge; they are the identity and
//! hashing foundation the engine and its callers share.

pub mod address;
pub mod hash;

// Re-export core types
pub use address::Address;
pub use hash::{salted_hash, Commitment};
