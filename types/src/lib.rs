//! Records produced by the blockscan ingestion pipeline.
//!
//! Every record implements the canonical codec from [blockscan_codec]. Decoding is bounded by the
//! `*Cfg` structs defined here so that a corrupt or hostile buffer cannot trigger unbounded
//! allocation.

use blockscan_codec::{Error, RangeCfg, Read};
use bytes::{Buf, Bytes};

mod block;
pub use block::{logs_bloom, Block, BlockHeader, EthBlock, HeaderSpecific};
mod consumer;
pub use consumer::BlockConsumer;
mod currency;
pub use currency::CurrencyDetails;
mod log;
pub use log::EthLog;
mod transaction;
pub use transaction::{EthTransaction, Transaction, TransactionSpecific};

/// Maximum length of a blockchain, consumer, currency, or user name.
pub const MAX_NAME_LENGTH: usize = 256;

/// Maximum length of a short byte field (hashes, addresses, 256-bit integers, extra data).
pub const MAX_WORD_LENGTH: usize = 64;

/// Maximum number of uncles referenced by a header.
pub const MAX_UNCLES: usize = 16;

/// Limits applied while decoding an [EthLog].
#[derive(Clone, Debug)]
pub struct LogCfg {
    /// Maximum number of topics.
    pub max_topics: usize,

    /// Maximum length of the data payload.
    pub max_data: usize,
}

impl Default for LogCfg {
    fn default() -> Self {
        Self {
            max_topics: 4,
            max_data: 128 * 1024,
        }
    }
}

/// Limits applied while decoding a [Transaction].
#[derive(Clone, Debug)]
pub struct TransactionCfg {
    /// Maximum length of the call input.
    pub max_input: usize,

    /// Maximum number of logs.
    pub max_logs: usize,

    pub log: LogCfg,
}

impl Default for TransactionCfg {
    fn default() -> Self {
        Self {
            max_input: 4 * 1024 * 1024,
            max_logs: 1024,
            log: LogCfg::default(),
        }
    }
}

/// Limits applied while decoding a [Block].
#[derive(Clone, Debug)]
pub struct BlockCfg {
    /// Maximum number of transactions.
    pub max_transactions: usize,

    pub transaction: TransactionCfg,
}

impl Default for BlockCfg {
    fn default() -> Self {
        Self {
            max_transactions: 16 * 1024,
            transaction: TransactionCfg::default(),
        }
    }
}

/// Reads a short byte field.
pub(crate) fn read_word(buf: &mut impl Buf) -> Result<Bytes, Error> {
    Bytes::read_cfg(buf, &RangeCfg::from(..=MAX_WORD_LENGTH))
}

/// Reads a name.
pub(crate) fn read_name(buf: &mut impl Buf) -> Result<String, Error> {
    String::read_cfg(buf, &RangeCfg::from(..=MAX_NAME_LENGTH))
}
