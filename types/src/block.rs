//! Block hashes and sync checkpoints.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte block hash, stored in display order (the byte order block
/// explorers render).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockHash([u8; 32]);

impl BlockHash {
    pub const ZERO: Self = Self([0u8; 32]);

    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse a 64-character hex literal. Evaluable in const context, so the
    /// per-network genesis hashes can live in static profile tables; a
    /// malformed literal fails the build.
    pub const fn from_hex_lit(s: &str) -> Self {
        let hex = s.as_bytes();
        assert!(hex.len() == 64, "block hash literal must be 64 hex chars");
        let mut out = [0u8; 32];
        let mut i = 0;
        while i < 32 {
            out[i] = (hex_val(hex[2 * i]) << 4) | hex_val(hex[2 * i + 1]);
            i += 1;
        }
        Self(out)
    }

    /// Parse a 64-character hex string at runtime. Returns `None` on wrong
    /// length or invalid characters.
    pub fn from_hex(s: &str) -> Option<Self> {
        if s.len() != 64 {
            return None;
        }
        let mut out = [0u8; 32];
        for (i, chunk) in s.as_bytes().chunks_exact(2).enumerate() {
            let hi = (chunk[0] as char).to_digit(16)?;
            let lo = (chunk[1] as char).to_digit(16)?;
            out[i] = ((hi << 4) | lo) as u8;
        }
        Some(Self(out))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

const fn hex_val(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex digit in block hash literal"),
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

// Inline hex encoding to avoid adding the `hex` crate as a dependency of types.
mod hex {
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

/// A known-good (height, hash) pair used to bound initial sync work.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Block height of the checkpoint.
    pub height: u32,
    /// Hash of the block at `height`.
    pub hash: BlockHash,
    /// Unix timestamp of the block at `height`.
    pub timestamp: u64,
}

impl Checkpoint {
    pub const fn new(height: u32, hash: BlockHash, timestamp: u64) -> Self {
        Self {
            height,
            hash,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_lit_matches_runtime_parse() {
        let s = "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f";
        assert_eq!(BlockHash::from_hex_lit(s), BlockHash::from_hex(s).unwrap());
    }

    #[test]
    fn display_round_trips() {
        let s = "0f9188f13cb7b2c71f2a335e3a4fc328bf5beb436012afca590b1a11466e2206";
        let hash = BlockHash::from_hex(s).unwrap();
        assert_eq!(hash.to_string(), s);
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        assert!(BlockHash::from_hex("abc").is_none());
        assert!(BlockHash::from_hex(&"zz".repeat(32)).is_none());
    }

    #[test]
    fn zero_is_zero() {
        assert!(BlockHash::ZERO.is_zero());
        assert!(!BlockHash::from_hex(&"11".repeat(32)).unwrap().is_zero());
    }
}
