//! Variable-length integer encoding (LEB128) used for length prefixes.
//!
//! Each byte carries 7 bits of the value, least significant group first, and sets its high bit
//! when more bytes follow. Only the minimal encoding of a value is accepted when reading, so every
//! value has exactly one valid encoding.

use crate::Error;
use bytes::{Buf, BufMut};

const DATA_BITS_PER_BYTE: u32 = 7;
const DATA_BITS_MASK: u8 = 0x7F;
const CONTINUATION_BIT_MASK: u8 = 0x80;

/// Maximum number of bytes in the encoding of a `u64`.
pub const MAX_SIZE: usize = 10;

/// Writes `value` as a varint.
pub fn write(value: u64, buf: &mut impl BufMut) {
    let mut value = value;
    while value >= u64::from(CONTINUATION_BIT_MASK) {
        buf.put_u8((value as u8 & DATA_BITS_MASK) | CONTINUATION_BIT_MASK);
        value >>= DATA_BITS_PER_BYTE;
    }
    buf.put_u8(value as u8);
}

/// Returns the number of bytes [write] produces for `value`.
pub fn size(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    bits.div_ceil(DATA_BITS_PER_BYTE as usize).max(1)
}

/// Reads a varint, rejecting overflowing and non-minimal encodings.
pub fn read(buf: &mut impl Buf) -> Result<u64, Error> {
    let mut result = 0u64;
    for index in 0..MAX_SIZE {
        if !buf.has_remaining() {
            return Err(Error::EndOfBuffer);
        }
        let byte = buf.get_u8();
        let shift = index as u32 * DATA_BITS_PER_BYTE;

        // The tenth byte may only contribute the single remaining bit.
        if index == MAX_SIZE - 1 && byte > 1 {
            return Err(Error::InvalidVarint);
        }
        result |= u64::from(byte & DATA_BITS_MASK) << shift;

        if byte & CONTINUATION_BIT_MASK == 0 {
            // A zero final byte after the first means a shorter encoding existed.
            if index > 0 && byte == 0 {
                return Err(Error::InvalidVarint);
            }
            return Ok(result);
        }
    }
    Err(Error::InvalidVarint)
}
