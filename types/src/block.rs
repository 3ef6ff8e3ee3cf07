use crate::{read_name, read_word, BlockCfg, Transaction, MAX_UNCLES, MAX_WORD_LENGTH};
use blockscan_codec::{EncodeSize, Error, RangeCfg, Read, ReadExt, Write};
use blockscan_cryptography::LogsBloom;
use bytes::{Buf, BufMut, Bytes};

/// Folds the address and every topic of every log emitted by `transactions` into a bloom.
///
/// This is the bloom a header must carry to pass [Block::verify_logs_bloom].
pub fn logs_bloom(transactions: &[Transaction]) -> LogsBloom {
    let mut bloom = LogsBloom::new();
    for log in transactions.iter().flat_map(Transaction::logs) {
        bloom.insert(&log.address);
        for topic in &log.topics {
            bloom.insert(topic);
        }
    }
    bloom
}

/// A block and the transactions it includes, in execution order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Returns true if the header's bloom matches the logs of the included transactions.
    pub fn verify_logs_bloom(&self) -> bool {
        match &self.header.specific {
            HeaderSpecific::Eth(eth) => eth.logs_bloom == logs_bloom(&self.transactions),
        }
    }

    /// Returns true if the header's transaction count matches the included transactions.
    pub fn verify_transactions_count(&self) -> bool {
        u64::try_from(self.transactions.len())
            .is_ok_and(|len| len == self.header.transactions_count)
    }
}

/// Chain-agnostic header fields of a [Block].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockHeader {
    pub blockchain_name: String,
    pub block_height: u64,
    pub block_hash: Bytes,
    pub parent_hash: Bytes,
    pub timestamp: u64,
    pub transactions_count: u64,
    pub specific: HeaderSpecific,
}

/// Chain-specific part of a [BlockHeader].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderSpecific {
    Eth(EthBlock),
}

/// Header fields of an Ethereum-style block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EthBlock {
    pub nonce: Bytes,
    pub sha3_uncles: Bytes,
    pub transactions_root: Bytes,
    pub state_root: Bytes,
    pub miner: Bytes,
    pub difficulty: Bytes,
    pub total_difficulty: Bytes,
    pub extra_data: Bytes,
    pub size: u64,
    pub gas_limit: u64,
    pub gas_used: u64,
    pub uncles: Vec<Bytes>,
    pub logs_bloom: LogsBloom,
}

impl Write for EthBlock {
    fn write(&self, buf: &mut impl BufMut) {
        self.nonce.write(buf);
        self.sha3_uncles.write(buf);
        self.transactions_root.write(buf);
        self.state_root.write(buf);
        self.miner.write(buf);
        self.difficulty.write(buf);
        self.total_difficulty.write(buf);
        self.extra_data.write(buf);
        self.size.write(buf);
        self.gas_limit.write(buf);
        self.gas_used.write(buf);
        self.uncles.write(buf);
        self.logs_bloom.write(buf);
    }
}

impl EncodeSize for EthBlock {
    fn encode_size(&self) -> usize {
        self.nonce.encode_size()
            + self.sha3_uncles.encode_size()
            + self.transactions_root.encode_size()
            + self.state_root.encode_size()
            + self.miner.encode_size()
            + self.difficulty.encode_size()
            + self.total_difficulty.encode_size()
            + self.extra_data.encode_size()
            + self.size.encode_size()
            + self.gas_limit.encode_size()
            + self.gas_used.encode_size()
            + self.uncles.encode_size()
            + self.logs_bloom.encode_size()
    }
}

impl Read for EthBlock {
    type Cfg = ();

    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        let nonce = read_word(buf)?;
        let sha3_uncles = read_word(buf)?;
        let transactions_root = read_word(buf)?;
        let state_root = read_word(buf)?;
        let miner = read_word(buf)?;
        let difficulty = read_word(buf)?;
        let total_difficulty = read_word(buf)?;
        let extra_data = read_word(buf)?;
        let size = u64::read(buf)?;
        let gas_limit = u64::read(buf)?;
        let gas_used = u64::read(buf)?;
        let uncles = Vec::<Bytes>::read_cfg(
            buf,
            &(
                RangeCfg::from(..=MAX_UNCLES),
                RangeCfg::from(..=MAX_WORD_LENGTH),
            ),
        )?;
        let logs_bloom = LogsBloom::read(buf)?;
        Ok(Self {
            nonce,
            sha3_uncles,
            transactions_root,
            state_root,
            miner,
            difficulty,
            total_difficulty,
            extra_data,
            size,
            gas_limit,
            gas_used,
            uncles,
            logs_bloom,
        })
    }
}

impl Write for HeaderSpecific {
    fn write(&self, buf: &mut impl BufMut) {
        match self {
            HeaderSpecific::Eth(block) => {
                0u8.write(buf);
                block.write(buf);
            }
        }
    }
}

impl EncodeSize for HeaderSpecific {
    fn encode_size(&self) -> usize {
        // 1 byte for the discriminant
        1 + match self {
            HeaderSpecific::Eth(block) => block.encode_size(),
        }
    }
}

impl Read for HeaderSpecific {
    type Cfg = ();

    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        match u8::read(buf)? {
            0 => Ok(HeaderSpecific::Eth(EthBlock::read(buf)?)),
            other => Err(Error::InvalidEnum(other)),
        }
    }
}

impl Write for BlockHeader {
    fn write(&self, buf: &mut impl BufMut) {
        self.blockchain_name.write(buf);
        self.block_height.write(buf);
        self.block_hash.write(buf);
        self.parent_hash.write(buf);
        self.timestamp.write(buf);
        self.transactions_count.write(buf);
        self.specific.write(buf);
    }
}

impl EncodeSize for BlockHeader {
    fn encode_size(&self) -> usize {
        self.blockchain_name.encode_size()
            + self.block_height.encode_size()
            + self.block_hash.encode_size()
            + self.parent_hash.encode_size()
            + self.timestamp.encode_size()
            + self.transactions_count.encode_size()
            + self.specific.encode_size()
    }
}

impl Read for BlockHeader {
    type Cfg = ();

    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        let blockchain_name = read_name(buf)?;
        let block_height = u64::read(buf)?;
        let block_hash = read_word(buf)?;
        let parent_hash = read_word(buf)?;
        let timestamp = u64::read(buf)?;
        let transactions_count = u64::read(buf)?;
        let specific = HeaderSpecific::read(buf)?;
        Ok(Self {
            blockchain_name,
            block_height,
            block_hash,
            parent_hash,
            timestamp,
            transactions_count,
            specific,
        })
    }
}

impl Write for Block {
    fn write(&self, buf: &mut impl BufMut) {
        self.header.write(buf);
        self.transactions.write(buf);
    }
}

impl EncodeSize for Block {
    fn encode_size(&self) -> usize {
        self.header.encode_size() + self.transactions.encode_size()
    }
}

impl Read for Block {
    type Cfg = BlockCfg;

    fn read_cfg(buf: &mut impl Buf, cfg: &BlockCfg) -> Result<Self, Error> {
        let header = BlockHeader::read(buf)?;
        let transactions = Vec::<Transaction>::read_cfg(
            buf,
            &(
                RangeCfg::from(..=cfg.max_transactions),
                cfg.transaction.clone(),
            ),
        )?;
        Ok(Self {
            header,
            transactions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EthLog, EthTransaction, TransactionSpecific};
    use blockscan_codec::{Decode, DecodeExt, Encode};

    fn transaction(index: u64, logs: Vec<EthLog>) -> Transaction {
        Transaction {
            blockchain_name: "TESTchain".to_string(),
            transaction_hash: Bytes::from(vec![index as u8; 32]),
            block_hash: Bytes::from(vec![0xBB; 32]),
            block_height: 10,
            transaction_index: index,
            timestamp: 0,
            specific: TransactionSpecific::Eth(EthTransaction {
                nonce: index,
                from: Bytes::from(vec![0x01; 20]),
                to: Bytes::from(vec![0x02; 20]),
                value: Bytes::from(vec![0x00; 32]),
                gas: 21_000,
                gas_price: Bytes::from(vec![0x00; 32]),
                input: Bytes::new(),
                contract_address: Bytes::new(),
                cumulative_gas_used: 21_000,
                gas_used: 21_000,
                status: 1,
                logs,
            }),
        }
    }

    fn log(seed: u8) -> EthLog {
        EthLog {
            address: Bytes::from(vec![seed; 20]),
            topics: vec![
                Bytes::from(vec![seed.wrapping_add(1); 32]),
                Bytes::from(vec![seed.wrapping_add(2); 32]),
            ],
            data: Bytes::from(vec![seed; 8]),
            log_index: 0,
            removed: false,
        }
    }

    fn block(transactions: Vec<Transaction>) -> Block {
        Block {
            header: BlockHeader {
                blockchain_name: "TESTchain".to_string(),
                block_height: 10,
                block_hash: Bytes::from(vec![0xBB; 32]),
                parent_hash: Bytes::from(vec![0xAA; 32]),
                timestamp: 1_700_000_000,
                transactions_count: transactions.len() as u64,
                specific: HeaderSpecific::Eth(EthBlock {
                    nonce: Bytes::from(vec![0x00; 8]),
                    sha3_uncles: Bytes::from(vec![0x11; 32]),
                    transactions_root: Bytes::from(vec![0x12; 32]),
                    state_root: Bytes::from(vec![0x13; 32]),
                    miner: Bytes::from(vec![0x14; 20]),
                    difficulty: Bytes::from(vec![0x15; 32]),
                    total_difficulty: Bytes::from(vec![0x16; 32]),
                    extra_data: Bytes::new(),
                    size: 1024,
                    gas_limit: 30_000_000,
                    gas_used: 42_000,
                    uncles: vec![],
                    logs_bloom: logs_bloom(&transactions),
                }),
            },
            transactions,
        }
    }

    #[test]
    fn test_logs_bloom() {
        let transactions = vec![
            transaction(0, vec![log(0x20), log(0x30)]),
            transaction(1, vec![]),
            transaction(2, vec![log(0x40)]),
        ];
        let bloom = logs_bloom(&transactions);
        for log in transactions.iter().flat_map(Transaction::logs) {
            assert!(bloom.contains(&log.address));
            for topic in &log.topics {
                assert!(bloom.contains(topic));
            }
        }

        // Data is not indexed
        let mut indexed = LogsBloom::new();
        for seed in [0x20u8, 0x30, 0x40] {
            indexed.insert(&[seed; 20]);
            indexed.insert(&[seed.wrapping_add(1); 32]);
            indexed.insert(&[seed.wrapping_add(2); 32]);
        }
        assert_eq!(bloom, indexed);
    }

    #[test]
    fn test_logs_bloom_empty() {
        assert!(logs_bloom(&[]).is_empty());
        assert!(logs_bloom(&[transaction(0, vec![])]).is_empty());
    }

    #[test]
    fn test_verify_logs_bloom() {
        let mut block = block(vec![transaction(0, vec![log(0x20)])]);
        assert!(block.verify_logs_bloom());

        // Dropping a log invalidates the header
        let TransactionSpecific::Eth(tx) = &mut block.transactions[0].specific;
        tx.logs.clear();
        assert!(!block.verify_logs_bloom());
    }

    #[test]
    fn test_verify_transactions_count() {
        let mut block = block(vec![transaction(0, vec![]), transaction(1, vec![])]);
        assert!(block.verify_transactions_count());
        block.transactions.pop();
        assert!(!block.verify_transactions_count());
    }

    #[test]
    fn test_roundtrip() {
        let block = block(vec![
            transaction(0, vec![log(0x20), log(0x30)]),
            transaction(1, vec![log(0x40)]),
        ]);
        let encoded = block.encode();
        let decoded = Block::decode_cfg(encoded, &BlockCfg::default()).unwrap();
        assert_eq!(block, decoded);

        let header = BlockHeader::decode(block.header.encode()).unwrap();
        assert_eq!(block.header, header);
    }

    #[test]
    fn test_too_many_transactions() {
        let block = block(vec![transaction(0, vec![]), transaction(1, vec![])]);
        let cfg = BlockCfg {
            max_transactions: 1,
            ..BlockCfg::default()
        };
        assert_eq!(
            Block::decode_cfg(block.encode(), &cfg),
            Err(Error::InvalidLength(2))
        );
    }

    #[test]
    fn test_trailing_bytes() {
        let block = block(vec![]);
        let mut encoded = block.encode();
        encoded.extend_from_slice(&[0xFF]);
        assert_eq!(
            Block::decode_cfg(encoded, &BlockCfg::default()),
            Err(Error::ExtraData(1))
        );
    }
}
