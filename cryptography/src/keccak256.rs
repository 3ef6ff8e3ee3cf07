//! Keccak-256 (the pre-standard SHA-3 variant used by Ethereum).
//!
//! # Example
//! ```rust
//! use blockscan_cryptography::hash;
//!
//! let digest = hash(b"hello world");
//! assert_eq!(digest.len(), 32);
//! ```

use alloy_primitives::{keccak256, B256};

/// Digest of a Keccak-256 hashing operation.
pub type Digest = B256;

/// Generate a Keccak-256 digest from a message.
pub fn hash(message: &[u8]) -> Digest {
    keccak256(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockscan_utils::hex;
    use test_case::test_case;

    #[test_case(b"", "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"; "empty")]
    #[test_case(b"hello world", "47173285a8d7341e5e972fc677286384f802f8ef42a5ec5f03bbfa254cb01fad"; "text")]
    fn test_keccak256(message: &[u8], expected: &str) {
        assert_eq!(hex(hash(message).as_slice()), expected);
    }

    #[test]
    fn test_display() {
        let digest = hash(b"");
        assert_eq!(digest.to_string(), format!("0x{}", hex(digest.as_slice())));
    }
}
