//! Player Addresses
//!
//! 20-byte account identifiers in the style of a ledger account key.
//! The zero address marks an unfilled player slot.

use serde::{Deserialize, Serialize};

/// A 20-byte account address.
///
/// Implements Ord so addresses can key BTreeMaps deterministically.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The zero address, used for the empty player-two slot.
    pub const ZERO: Address = Address([0; 20]);

    /// Create from raw bytes.
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Parse from a hex string (with or without `0x` prefix).
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).ok()?;
        if bytes.len() != 20 {
            return None;
        }
        let mut arr = [0u8; 20];
        arr.copy_from_slice(&bytes);
        Some(Self(arr))
    }

    /// Is this the zero address?
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl std::fmt::Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Short form keeps log lines readable.
        write!(f, "0x{}..", hex::encode(&self.0[..4]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_address() {
        assert!(Address::ZERO.is_zero());
        assert!(!Address::new([1; 20]).is_zero());
        assert_eq!(Address::default(), Address::ZERO);
    }

    #[test]
    fn test_hex_roundtrip() {
        let addr = Address::new([0xab; 20]);
        let parsed = Address::from_hex(&addr.to_string()).unwrap();
        assert_eq!(parsed, addr);

        // Without the 0x prefix too
        assert_eq!(Address::from_hex(&hex::encode([0xab; 20])), Some(addr));
    }

    #[test]
    fn test_hex_rejects_bad_input() {
        assert_eq!(Address::from_hex("0x1234"), None);
        assert_eq!(Address::from_hex("not hex"), None);
    }

    #[test]
    fn test_address_ordering() {
        let a = Address::new([0; 20]);
        let b = Address::new([1; 20]);
        assert!(a < b);
    }
}
