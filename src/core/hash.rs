//! Salted Commitment Hashing
//!
//! Deterministic SHA-256 hash used to bind a match to its creation
//! commitment. Callers recompute the same hash off-engine to verify a
//! commitment, so there is exactly one implementation here and every
//! surface (standalone utility, engine accessor) delegates to it.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Domain separator for commitment hashes.
const COMMITMENT_DOMAIN: &[u8] = b"GRIDSTAKE_COMMIT_V1";

/// A 256-bit commitment hash.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Commitment(pub [u8; 32]);

impl Commitment {
    /// Commitment with all bytes zero (placeholder, never produced by hashing).
    pub const ZERO: Commitment = Commitment([0; 32]);

    /// Raw hash bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex string of the hash.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for Commitment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::fmt::Debug for Commitment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Commitment({})", self.to_hex())
    }
}

/// Compute the salted hash of a value.
///
/// Fully deterministic: identical `(value, salt)` pairs always hash to the
/// same output, and the domain separator keeps outputs disjoint from any
/// other SHA-256 use in the system. The value is hashed in little-endian
/// byte order, then the salt bytes.
pub fn salted_hash(value: u64, salt: &str) -> Commitment {
    let mut hasher = Sha256::new();
    hasher.update(COMMITMENT_DOMAIN);
    hasher.update(value.to_le_bytes());
    hasher.update(salt.as_bytes());
    Commitment(hasher.finalize().into())
}
