use crate::{read_word, LogCfg, MAX_WORD_LENGTH};
use blockscan_codec::{EncodeSize, Error, RangeCfg, Read, ReadExt, Write};
use bytes::{Buf, BufMut, Bytes};

/// An event emitted by a contract while executing a transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EthLog {
    /// Address of the emitting contract.
    pub address: Bytes,

    /// Indexed topics, in emission order.
    pub topics: Vec<Bytes>,

    /// Non-indexed payload.
    pub data: Bytes,

    /// Position of the log within its transaction.
    pub log_index: u64,

    /// Set when the log was dropped by a chain reorganization.
    pub removed: bool,
}

impl Write for EthLog {
    fn write(&self, buf: &mut impl BufMut) {
        self.address.write(buf);
        self.topics.write(buf);
        self.data.write(buf);
        self.log_index.write(buf);
        self.removed.write(buf);
    }
}

impl EncodeSize for EthLog {
    fn encode_size(&self) -> usize {
        self.address.encode_size()
            + self.topics.encode_size()
            + self.data.encode_size()
            + self.log_index.encode_size()
            + self.removed.encode_size()
    }
}

impl Read for EthLog {
    type Cfg = LogCfg;

    fn read_cfg(buf: &mut impl Buf, cfg: &LogCfg) -> Result<Self, Error> {
        let address = read_word(buf)?;
        let topics = Vec::<Bytes>::read_cfg(
            buf,
            &(
                RangeCfg::from(..=cfg.max_topics),
                RangeCfg::from(..=MAX_WORD_LENGTH),
            ),
        )?;
        let data = Bytes::read_cfg(buf, &RangeCfg::from(..=cfg.max_data))?;
        let log_index = u64::read(buf)?;
        let removed = bool::read(buf)?;
        Ok(Self {
            address,
            topics,
            data,
            log_index,
            removed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockscan_codec::{Decode, Encode};

    fn sample() -> EthLog {
        EthLog {
            address: Bytes::from(vec![0x11; 20]),
            topics: vec![Bytes::from(vec![0x22; 32]), Bytes::from(vec![0x33; 32])],
            data: Bytes::from(vec![0x44; 40]),
            log_index: 5,
            removed: false,
        }
    }

    #[test]
    fn test_roundtrip() {
        let log = sample();
        let encoded = log.encode();
        // 21 (address) + 1 + 2 * 33 (topics) + 41 (data) + 8 (index) + 1 (removed)
        assert_eq!(encoded.len(), 138);
        let decoded = EthLog::decode_cfg(encoded, &LogCfg::default()).unwrap();
        assert_eq!(log, decoded);
    }

    #[test]
    fn test_too_many_topics() {
        let mut log = sample();
        log.topics = vec![Bytes::from(vec![0x22; 32]); 5];
        assert_eq!(
            EthLog::decode_cfg(log.encode(), &LogCfg::default()),
            Err(Error::InvalidLength(5))
        );
    }

    #[test]
    fn test_data_too_large() {
        let log = sample();
        let cfg = LogCfg {
            max_topics: 4,
            max_data: 39,
        };
        assert_eq!(
            EthLog::decode_cfg(log.encode(), &cfg),
            Err(Error::InvalidLength(40))
        );
    }
}
