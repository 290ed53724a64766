//! Content Hashing
//!
//! Fingerprints a validated dataset so reports and logs can name exactly
//! which content a playthrough ran against.
//!
//! Strings are length-prefixed so that field boundaries are part of the
//! hash: `("ab", "c")` and `("a", "bc")` never collide.

use sha2::{Sha256, Digest};

/// Hash output type (256 bits / 32 bytes)
pub type ContentHash = [u8; 32];

/// Deterministic hasher for round content.
///
/// Wraps SHA-256 with a domain separator. Order of updates is significant.
pub struct ContentHasher {
    hasher: Sha256,
}

impl ContentHasher {
    /// Create a new hasher with domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Create hasher for a round dataset.
    pub fn for_rounds() -> Self {
        Self::new(b"MINDPATCH_ROUNDS_V1")
    }

    /// Update with a u64 value (little-endian).
    #[inline]
    pub fn update_u64(&mut self, value: u64) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with a length-prefixed UTF-8 string.
    #[inline]
    pub fn update_str(&mut self, value: &str) {
        self.update_u64(value.len() as u64);
        self.hasher.update(value.as_bytes());
    }

    /// Finalize and return the hash.
    pub fn finalize(self) -> ContentHash {
        self.hasher.finalize().into()
    }
}

/// Render a hash as lowercase hex.
pub fn to_hex(hash: &ContentHash) -> String {
    hex::encode(hash)
}
