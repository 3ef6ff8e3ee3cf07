//! Core codec traits.

use crate::error::Error;
use bytes::{Buf, BufMut, BytesMut};

/// Types that can be written (encoded) to a buffer.
pub trait Write {
    /// Appends the canonical encoding of this value to `buf`.
    ///
    /// Implementations may panic if `buf` cannot grow.
    fn write(&self, buf: &mut impl BufMut);
}

/// Types that know the exact length of their encoding.
pub trait EncodeSize {
    /// Returns the number of bytes [Write::write] will produce.
    fn encode_size(&self) -> usize;
}

/// Types with a constant encoded length.
pub trait FixedSize {
    /// The length of every encoded value of this type.
    const SIZE: usize;
}

impl<T: FixedSize> EncodeSize for T {
    #[inline]
    fn encode_size(&self) -> usize {
        Self::SIZE
    }
}

/// Types that can be encoded into a freshly allocated buffer.
pub trait Encode: Write + EncodeSize {
    /// Encodes this value.
    ///
    /// Panics if [Write::write] does not produce exactly [EncodeSize::encode_size] bytes.
    fn encode(&self) -> BytesMut {
        let len = self.encode_size();
        let mut buf = BytesMut::with_capacity(len);
        self.write(&mut buf);
        assert_eq!(buf.len(), len, "write() did not write expected bytes");
        buf
    }
}

impl<T: Write + EncodeSize> Encode for T {}

/// Types that can be read (decoded) from a buffer.
pub trait Read: Sized {
    /// Limits applied while reading, typically the maximum lengths of nested collections.
    ///
    /// Use `()` for types that need no configuration.
    type Cfg: Clone;

    /// Reads a value from `buf`, consuming exactly the bytes of its encoding.
    fn read_cfg(buf: &mut impl Buf, cfg: &Self::Cfg) -> Result<Self, Error>;
}

/// Ergonomic [Read] for types that need no configuration.
pub trait ReadExt: Read<Cfg = ()> {
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        Self::read_cfg(buf, &())
    }
}

impl<T: Read<Cfg = ()>> ReadExt for T {}

/// Types that can be decoded from a buffer holding exactly one encoded value.
pub trait Decode: Read {
    /// Decodes a value, failing if any bytes remain afterwards.
    fn decode_cfg(mut buf: impl Buf, cfg: &Self::Cfg) -> Result<Self, Error> {
        let value = Self::read_cfg(&mut buf, cfg)?;
        let remaining = buf.remaining();
        if remaining > 0 {
            return Err(Error::ExtraData(remaining));
        }
        Ok(value)
    }
}

impl<T: Read> Decode for T {}

/// Ergonomic [Decode] for types that need no configuration.
pub trait DecodeExt: Decode<Cfg = ()> {
    fn decode(buf: impl Buf) -> Result<Self, Error> {
        Self::decode_cfg(buf, &())
    }
}

impl<T: Decode<Cfg = ()>> DecodeExt for T {}
