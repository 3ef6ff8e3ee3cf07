//! Codec implementation for `Vec<T>`.

use crate::{
    util::{len_size, read_len, write_len},
    EncodeSize, Error, RangeCfg, Read, Write,
};
use bytes::{Buf, BufMut};

impl<T: Write> Write for Vec<T> {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        write_len(self.len(), buf);
        for item in self {
            item.write(buf);
        }
    }
}

impl<T: EncodeSize> EncodeSize for Vec<T> {
    #[inline]
    fn encode_size(&self) -> usize {
        len_size(self.len()) + self.iter().map(EncodeSize::encode_size).sum::<usize>()
    }
}

impl<T: Read> Read for Vec<T> {
    type Cfg = (RangeCfg, T::Cfg);

    #[inline]
    fn read_cfg(buf: &mut impl Buf, (range, cfg): &Self::Cfg) -> Result<Self, Error> {
        let len = read_len(buf, range)?;
        let mut items = Vec::with_capacity(len);
        for _ in 0..len {
            items.push(T::read_cfg(buf, cfg)?);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decode, Encode};
    use bytes::Bytes;

    #[test]
    fn test_vec() {
        let values = [vec![], vec![1u32], vec![1u32, 2, 3]];
        for value in values {
            let encoded = value.encode();
            assert_eq!(encoded.len(), value.len() * 4 + 1);

            let len = value.len();
            let decoded = Vec::<u32>::decode_cfg(encoded, &(RangeCfg::exact(len), ())).unwrap();
            assert_eq!(value, decoded);
        }
    }

    #[test]
    fn test_vec_too_long() {
        let value = vec![1u32, 2, 3];
        assert_eq!(
            Vec::<u32>::decode_cfg(value.encode(), &((..=2).into(), ())),
            Err(Error::InvalidLength(3))
        );
    }

    #[test]
    fn test_nested() {
        let value = vec![Bytes::from_static(b"topic-a"), Bytes::new()];
        let cfg = ((..=4).into(), (..=32).into());
        let decoded = Vec::<Bytes>::decode_cfg(value.encode(), &cfg).unwrap();
        assert_eq!(value, decoded);
    }
}
