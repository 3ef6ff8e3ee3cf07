//! Keccak-256 digests and the log bloom used to validate block headers.
//!
//! The [LogsBloom] implemented here is the one consulted by header validation in the ingestion
//! pipeline. Anything that needs to produce a bloom (including test fixtures) must call into this
//! crate rather than re-deriving the bit layout.

use thiserror::Error;

pub mod keccak256;
pub use keccak256::{hash, Digest};
pub mod bloom;
pub use bloom::LogsBloom;

/// Errors returned when converting raw bytes into fixed-width primitives.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid bloom length: {0}")]
    InvalidBloomLength(usize),
}
