//! Codec implementation for [`Bytes`], the representation of every opaque byte field.

use crate::{
    util::{at_least, len_size, read_len, write_len},
    EncodeSize, Error, RangeCfg, Read, Write,
};
use bytes::{Buf, BufMut, Bytes};

impl Write for Bytes {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        write_len(self.len(), buf);
        buf.put_slice(self);
    }
}

impl EncodeSize for Bytes {
    #[inline]
    fn encode_size(&self) -> usize {
        len_size(self.len()) + self.len()
    }
}

impl Read for Bytes {
    type Cfg = RangeCfg;

    #[inline]
    fn read_cfg(buf: &mut impl Buf, range: &RangeCfg) -> Result<Self, Error> {
        let len = read_len(buf, range)?;
        at_least(buf, len)?;
        Ok(buf.copy_to_bytes(len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{varint, Decode, Encode};

    #[test]
    fn test_bytes() {
        let values = [
            Bytes::new(),
            Bytes::from_static(&[1, 2, 3]),
            Bytes::from(vec![0; 300]),
        ];
        for value in values {
            let encoded = value.encode();
            assert_eq!(encoded.len(), varint::size(value.len() as u64) + value.len());

            let len = value.len();
            let decoded = Bytes::decode_cfg(encoded, &RangeCfg::exact(len)).unwrap();
            assert_eq!(value, decoded);

            assert_eq!(
                Bytes::decode_cfg(value.encode(), &(len + 1..).into()),
                Err(Error::InvalidLength(len))
            );
        }
    }

    #[test]
    fn test_truncated_payload() {
        // Prefix promises four bytes, only two follow.
        let encoded = Bytes::from_static(&[0x04, 0xAA, 0xBB]);
        assert_eq!(
            Bytes::decode_cfg(encoded, &(..).into()),
            Err(Error::EndOfBuffer)
        );
    }
}
