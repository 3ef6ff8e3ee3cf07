//! The 2048-bit log bloom carried in every Ethereum-style block header.
//!
//! Each inserted item sets (at most) three bits. The bits are chosen from the Keccak-256 digest of
//! the item: each of the first three big-endian byte pairs, masked to 11 bits, selects one bit of
//! the filter. Bit `b` lives in byte `255 - b / 8` at position `b % 8`, so the filter reads as a
//! big-endian 2048-bit integer.
//!
//! Headers are only valid if their bloom matches the one recomputed from the block's logs, so the
//! bit layout is taken from [alloy_primitives::Bloom] rather than derived here.

use crate::Error;
use alloy_primitives::{Bloom, BloomInput};
use blockscan_codec::{Error as CodecError, FixedSize, Read, ReadExt, Write};
use blockscan_utils::hex;
use bytes::{Buf, BufMut};
use std::fmt::{Debug, Display};

/// Length of a [LogsBloom] in bytes.
pub const BLOOM_LENGTH: usize = 256;

/// A 2048-bit log bloom.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LogsBloom(Bloom);

impl LogsBloom {
    /// Returns an empty bloom.
    pub const fn new() -> Self {
        Self(Bloom::new([0u8; BLOOM_LENGTH]))
    }

    /// Records `item` (an emitting address or a topic) in the bloom.
    pub fn insert(&mut self, item: &[u8]) {
        self.0.accrue(BloomInput::Raw(item));
    }

    /// Returns `true` if `item` may have been inserted, `false` if it definitely was not.
    pub fn contains(&self, item: &[u8]) -> bool {
        self.0.contains_input(BloomInput::Raw(item))
    }

    /// Merges every bit of `other` into this bloom.
    pub fn accrue(&mut self, other: &LogsBloom) {
        self.0.accrue_bloom(&other.0);
    }

    /// Returns `true` if no bit is set.
    pub fn is_empty(&self) -> bool {
        self.as_bytes().iter().all(|byte| *byte == 0)
    }

    pub fn as_bytes(&self) -> &[u8; BLOOM_LENGTH] {
        self.0.data()
    }
}

impl From<[u8; BLOOM_LENGTH]> for LogsBloom {
    fn from(value: [u8; BLOOM_LENGTH]) -> Self {
        Self(Bloom::new(value))
    }
}

impl TryFrom<&[u8]> for LogsBloom {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; BLOOM_LENGTH] = value
            .try_into()
            .map_err(|_| Error::InvalidBloomLength(value.len()))?;
        Ok(Self::from(array))
    }
}

impl AsRef<[u8]> for LogsBloom {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Write for LogsBloom {
    fn write(&self, buf: &mut impl BufMut) {
        self.as_bytes().write(buf);
    }
}

impl Read for LogsBloom {
    type Cfg = ();

    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, CodecError> {
        <[u8; BLOOM_LENGTH]>::read(buf).map(Self::from)
    }
}

impl FixedSize for LogsBloom {
    const SIZE: usize = BLOOM_LENGTH;
}

impl Debug for LogsBloom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogsBloom({})", hex(self.as_bytes()))
    }
}

impl Display for LogsBloom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex(self.as_bytes()))
    }
}
