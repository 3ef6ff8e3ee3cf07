//! Helpers shared by codec implementations.

use crate::{varint, Error, RangeCfg};
use bytes::{Buf, BufMut};

/// Fails with [Error::EndOfBuffer] unless `buf` holds at least `len` more bytes.
#[inline]
pub fn at_least(buf: &impl Buf, len: usize) -> Result<(), Error> {
    if buf.remaining() < len {
        return Err(Error::EndOfBuffer);
    }
    Ok(())
}

/// Writes a collection length prefix.
///
/// Panics if `len` does not fit in a `u32`, keeping the format identical across architectures.
#[inline]
pub fn write_len(len: usize, buf: &mut impl BufMut) {
    let len = u32::try_from(len).expect("length exceeds u32");
    varint::write(u64::from(len), buf);
}

/// Returns the size of a collection length prefix.
#[inline]
pub fn len_size(len: usize) -> usize {
    let len = u32::try_from(len).expect("length exceeds u32");
    varint::size(u64::from(len))
}

/// Reads a collection length prefix and checks it against `range`.
#[inline]
pub fn read_len(buf: &mut impl Buf, range: &RangeCfg) -> Result<usize, Error> {
    let len = varint::read(buf)?;
    let len = u32::try_from(len).map_err(|_| Error::InvalidVarint)?;
    let len = usize::try_from(len).map_err(|_| Error::InvalidVarint)?;
    if !range.contains(&len) {
        return Err(Error::InvalidLength(len));
    }
    Ok(len)
}
