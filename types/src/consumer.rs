use crate::read_name;
use blockscan_codec::{EncodeSize, Error, Read, Write};
use bytes::{Buf, BufMut};

/// A registered subscriber to the blocks of one blockchain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockConsumer {
    pub blockchain_name: String,
    pub consumer_name: String,

    /// Owner of the subscription (hex-encoded).
    pub user_id: String,
}

impl Write for BlockConsumer {
    fn write(&self, buf: &mut impl BufMut) {
        self.blockchain_name.write(buf);
        self.consumer_name.write(buf);
        self.user_id.write(buf);
    }
}

impl EncodeSize for BlockConsumer {
    fn encode_size(&self) -> usize {
        self.blockchain_name.encode_size()
            + self.consumer_name.encode_size()
            + self.user_id.encode_size()
    }
}

impl Read for BlockConsumer {
    type Cfg = ();

    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        let blockchain_name = read_name(buf)?;
        let consumer_name = read_name(buf)?;
        let user_id = read_name(buf)?;
        Ok(Self {
            blockchain_name,
            consumer_name,
            user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockscan_codec::{DecodeExt, Encode};

    #[test]
    fn test_roundtrip() {
        let consumer = BlockConsumer {
            blockchain_name: "TESTchain".to_string(),
            consumer_name: "test-consumer".to_string(),
            user_id: "ab".repeat(32),
        };
        let encoded = consumer.encode();
        assert_eq!(encoded.len(), 10 + 14 + 65);
        assert_eq!(BlockConsumer::decode(encoded).unwrap(), consumer);
    }
}
