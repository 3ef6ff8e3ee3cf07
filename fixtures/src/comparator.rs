//! Byte-level equality of records under the canonical codec.
//!
//! Two records are considered equal when they encode to the same bytes. Failures report where
//! the encodings first diverge so a test can point at the offending field.

use blockscan_codec::Encode;
use blockscan_types::Block;
use blockscan_utils::{hex, right_aligned};
use thiserror::Error;
use tracing::warn;

/// Length hashes are normalized to before comparison.
const NORMALIZED_HASH_LENGTH: usize = 32;

/// Describes the first difference found between two records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Mismatch {
    #[error("encoded length differs: left={left} right={right}")]
    Length { left: usize, right: usize },
    #[error("encoded byte {offset} differs: left={left:#04x} right={right:#04x}")]
    Byte { offset: usize, left: u8, right: u8 },
    #[error("sequence length differs: left={left} right={right}")]
    SequenceLength { left: usize, right: usize },
    #[error("index {index}: {field} differs: left={left} right={right}")]
    Field {
        index: usize,
        field: &'static str,
        left: String,
        right: String,
    },
    #[error("index {index}: {field} differs: {source}")]
    Entry {
        index: usize,
        field: &'static str,
        #[source]
        source: Box<Mismatch>,
    },
}

/// Compares the canonical encodings of `left` and `right`.
///
/// A length difference is reported before any byte difference.
pub fn compare_encoded<T: Encode>(left: &T, right: &T) -> Result<(), Mismatch> {
    let left = left.encode();
    let right = right.encode();
    if left.len() != right.len() {
        return Err(Mismatch::Length {
            left: left.len(),
            right: right.len(),
        });
    }
    match left.iter().zip(right.iter()).position(|(l, r)| l != r) {
        Some(offset) => Err(Mismatch::Byte {
            offset,
            left: left[offset],
            right: right[offset],
        }),
        None => Ok(()),
    }
}

/// Panics if `left` and `right` do not encode to the same bytes.
#[track_caller]
pub fn assert_encoded_eq<T: Encode>(left: &T, right: &T) {
    if let Err(err) = compare_encoded(left, right) {
        panic!("records differ: {err}");
    }
}

/// Renders a hash as `0x`-prefixed lowercase hex of exactly 32 bytes.
///
/// Shorter values are left-padded with zeros and longer values keep their last 32 bytes, so
/// hashes that differ only in leading zeros compare equal.
pub fn normalize_hash(bytes: &[u8]) -> String {
    format!(
        "0x{}",
        hex(&right_aligned::<NORMALIZED_HASH_LENGTH>(bytes))
    )
}

/// Compares two block sequences, stopping at the first difference.
///
/// Identity fields are checked first so a failure names the field that diverged. The header and
/// then the whole block are then compared byte-for-byte.
pub fn compare_blocks(initial: &[Block], result: &[Block]) -> Result<(), Mismatch> {
    if initial.len() != result.len() {
        let err = Mismatch::SequenceLength {
            left: initial.len(),
            right: result.len(),
        };
        warn!(%err, "block sequences differ");
        return Err(err);
    }
    for (index, (left, right)) in initial.iter().zip(result).enumerate() {
        if let Err(err) = compare_block(index, left, right) {
            warn!(index, %err, "block sequences differ");
            return Err(err);
        }
    }
    Ok(())
}

fn compare_block(index: usize, left: &Block, right: &Block) -> Result<(), Mismatch> {
    let check = |field, left: String, right: String| {
        if left == right {
            Ok(())
        } else {
            Err(Mismatch::Field {
                index,
                field,
                left,
                right,
            })
        }
    };
    check(
        "blockchain_name",
        left.header.blockchain_name.clone(),
        right.header.blockchain_name.clone(),
    )?;
    check(
        "block_height",
        left.header.block_height.to_string(),
        right.header.block_height.to_string(),
    )?;
    check(
        "block_hash",
        normalize_hash(&left.header.block_hash),
        normalize_hash(&right.header.block_hash),
    )?;

    let entry = |field, source| Mismatch::Entry {
        index,
        field,
        source: Box::new(source),
    };
    compare_encoded(&left.header, &right.header).map_err(|source| entry("header", source))?;
    compare_encoded(left, right).map_err(|source| entry("block", source))
}

/// Panics if the two block sequences differ.
#[track_caller]
pub fn check_blocks(initial: &[Block], result: &[Block]) {
    if let Err(err) = compare_blocks(initial, result) {
        panic!("blocks differ: {err}");
    }
}
