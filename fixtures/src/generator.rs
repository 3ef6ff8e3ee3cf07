//! Randomized construction of blockchain records.
//!
//! Field values are random, but the structure of what is produced always satisfies what the
//! ingestion pipeline checks: headers count their transactions, blooms are recomputed from the
//! logs, and sequences are chained by parent hash.
//!
//! # Limitations
//!
//! Names produced by [Generator::blockchain_name] and [Generator::currency_name] are not checked
//! for uniqueness. Collisions are unlikely within a single test but are not prevented.

use crate::Config;
use blockscan_types::{
    logs_bloom, Block, BlockConsumer, BlockHeader, CurrencyDetails, EthBlock, EthLog,
    EthTransaction, HeaderSpecific, Transaction, TransactionSpecific,
};
use blockscan_utils::hex;
use bytes::Bytes;
use rand::Rng;
use tracing::debug;

/// Length of a generated address.
pub const ADDRESS_LENGTH: usize = 20;

/// Length of a generated hash.
pub const HASH_LENGTH: usize = 32;

const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const BLOCKCHAIN_NAME_LENGTH: usize = 10;
const BLOCKCHAIN_NAME_SUFFIX: &str = "chain";
const CURRENCY_NAME_LENGTH: usize = 3;
const CURRENCY_NAME_SUFFIX: &str = "currency";
const CONSUMER_NAME: &str = "test-consumer";

/// Where a generated transaction is placed.
#[derive(Clone, Debug)]
pub struct TxLocation {
    pub blockchain_name: String,
    pub block_height: u64,
    pub block_hash: Bytes,
    pub transaction_hash: Bytes,
    pub transaction_index: u64,
}

/// Produces randomized records from an injected source of randomness.
///
/// Seed the source (e.g. `StdRng::seed_from_u64`) to make a test reproducible.
pub struct Generator<R: Rng> {
    rng: R,
    cfg: Config,
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R, cfg: Config) -> Self {
        Self { rng, cfg }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Returns `size` random bytes.
    pub fn bytes(&mut self, size: usize) -> Bytes {
        let mut bytes = vec![0u8; size];
        self.rng.fill_bytes(&mut bytes);
        Bytes::from(bytes)
    }

    /// Returns a random 20-byte address.
    pub fn address(&mut self) -> Bytes {
        self.bytes(ADDRESS_LENGTH)
    }

    /// Returns a random 32-byte hash.
    pub fn hash(&mut self) -> Bytes {
        self.bytes(HASH_LENGTH)
    }

    /// Returns a random height that fits in a `u32`, leaving room to count upwards without
    /// overflowing.
    pub fn block_height(&mut self) -> u64 {
        u64::from(self.rng.gen::<u32>())
    }

    /// Returns ten random uppercase letters followed by `chain`.
    pub fn blockchain_name(&mut self) -> String {
        self.name(BLOCKCHAIN_NAME_LENGTH, BLOCKCHAIN_NAME_SUFFIX)
    }

    /// Returns three random uppercase letters followed by `currency`.
    pub fn currency_name(&mut self) -> String {
        self.name(CURRENCY_NAME_LENGTH, CURRENCY_NAME_SUFFIX)
    }

    fn name(&mut self, len: usize, suffix: &str) -> String {
        let mut name: String = (0..len)
            .map(|_| char::from(LETTERS[self.rng.gen_range(0..LETTERS.len())]))
            .collect();
        name.push_str(suffix);
        name
    }

    /// Returns a log with two random topics and `data_size` bytes of data.
    pub fn log(&mut self, log_index: u64, data_size: usize) -> EthLog {
        EthLog {
            address: self.address(),
            topics: vec![self.hash(), self.hash()],
            data: self.bytes(data_size),
            log_index,
            removed: false,
        }
    }

    /// Returns a successful transaction at `location` emitting `logs_count` fresh logs.
    pub fn transaction(
        &mut self,
        location: TxLocation,
        input_size: usize,
        logs_count: usize,
        log_data_size: usize,
    ) -> Transaction {
        let logs = (0..logs_count)
            .map(|index| self.log(index as u64, log_data_size))
            .collect();
        self.transaction_with_logs(location, input_size, logs)
    }

    /// Returns a successful transaction at `location` emitting the given `logs`.
    pub fn transaction_with_logs(
        &mut self,
        location: TxLocation,
        input_size: usize,
        logs: Vec<EthLog>,
    ) -> Transaction {
        Transaction {
            blockchain_name: location.blockchain_name,
            transaction_hash: location.transaction_hash,
            block_hash: location.block_hash,
            block_height: location.block_height,
            transaction_index: location.transaction_index,
            timestamp: self.rng.gen(),
            specific: TransactionSpecific::Eth(EthTransaction {
                nonce: self.rng.gen(),
                from: self.address(),
                to: self.address(),
                value: self.hash(),
                gas: self.rng.gen(),
                gas_price: self.hash(),
                input: self.bytes(input_size),
                contract_address: self.address(),
                cumulative_gas_used: self.rng.gen(),
                gas_used: self.rng.gen(),
                status: 1,
                logs,
            }),
        }
    }

    /// Returns a block wrapping `transactions`.
    ///
    /// Header fields are random except for the transaction count and the logs bloom, which are
    /// derived from `transactions` exactly as header validation expects.
    pub fn block(
        &mut self,
        blockchain_name: &str,
        block_height: u64,
        block_hash: Bytes,
        parent_hash: Bytes,
        transactions: Vec<Transaction>,
    ) -> Block {
        let header = BlockHeader {
            blockchain_name: blockchain_name.to_string(),
            block_height,
            block_hash,
            parent_hash,
            timestamp: self.rng.gen(),
            transactions_count: transactions.len() as u64,
            specific: HeaderSpecific::Eth(EthBlock {
                nonce: self.address(),
                sha3_uncles: self.hash(),
                transactions_root: self.hash(),
                state_root: self.hash(),
                miner: self.address(),
                difficulty: self.hash(),
                total_difficulty: self.hash(),
                extra_data: self.hash(),
                size: self.rng.gen(),
                gas_limit: self.rng.gen(),
                gas_used: self.rng.gen(),
                uncles: vec![self.hash(), self.hash()],
                logs_bloom: logs_bloom(&transactions),
            }),
        };
        debug!(
            blockchain_name,
            block_height,
            transactions = transactions.len(),
            "generated block"
        );
        Block {
            header,
            transactions,
        }
    }

    /// Returns a block holding `transactions_count` transactions sized by the [Config].
    pub fn block_with_transactions(
        &mut self,
        blockchain_name: &str,
        block_height: u64,
        block_hash: Bytes,
        parent_hash: Bytes,
        transactions_count: usize,
    ) -> Block {
        let input_size = self.cfg.input_size;
        let transactions = self.transactions(
            blockchain_name,
            block_height,
            &block_hash,
            transactions_count,
            input_size,
        );
        self.block(
            blockchain_name,
            block_height,
            block_hash,
            parent_hash,
            transactions,
        )
    }

    /// Returns a block (with a random parent) holding `transactions_count` transactions, each
    /// carrying `input_size` bytes of input.
    pub fn block_with_large_transactions(
        &mut self,
        blockchain_name: &str,
        block_height: u64,
        block_hash: Bytes,
        transactions_count: usize,
        input_size: usize,
    ) -> Block {
        let transactions = self.transactions(
            blockchain_name,
            block_height,
            &block_hash,
            transactions_count,
            input_size,
        );
        let parent_hash = self.hash();
        self.block(
            blockchain_name,
            block_height,
            block_hash,
            parent_hash,
            transactions,
        )
    }

    fn transactions(
        &mut self,
        blockchain_name: &str,
        block_height: u64,
        block_hash: &Bytes,
        count: usize,
        input_size: usize,
    ) -> Vec<Transaction> {
        let logs_count = self.cfg.logs_per_transaction;
        let log_data_size = self.cfg.log_data_size;
        (0..count)
            .map(|index| {
                let location = TxLocation {
                    blockchain_name: blockchain_name.to_string(),
                    block_height,
                    block_hash: block_hash.clone(),
                    transaction_hash: self.hash(),
                    transaction_index: index as u64,
                };
                self.transaction(location, input_size, logs_count, log_data_size)
            })
            .collect()
    }

    /// Returns `count` blocks chained by parent hash, earliest first.
    ///
    /// The first block uses `start_hash` and `start_parent_hash` at `start_height`. Every later
    /// block sits one height above its predecessor, has a fresh random hash, and points at its
    /// predecessor's hash. Heights wrap around at `u64::MAX`.
    pub fn sequence(
        &mut self,
        count: usize,
        blockchain_name: &str,
        start_height: u64,
        start_hash: Bytes,
        start_parent_hash: Bytes,
        transactions_count: usize,
    ) -> Vec<Block> {
        let mut blocks = Vec::with_capacity(count);
        let mut block_hash = start_hash;
        let mut parent_hash = start_parent_hash;
        for offset in 0..count {
            let block = self.block_with_transactions(
                blockchain_name,
                start_height.wrapping_add(offset as u64),
                block_hash.clone(),
                parent_hash,
                transactions_count,
            );
            blocks.push(block);
            parent_hash = block_hash;
            block_hash = self.hash();
        }
        debug!(blockchain_name, start_height, count, "generated sequence");
        blocks
    }

    /// Returns currency metadata with a random name and symbol.
    pub fn currency(
        &mut self,
        blockchain_name: &str,
        address: Bytes,
        decimals: u64,
    ) -> CurrencyDetails {
        CurrencyDetails {
            blockchain_name: blockchain_name.to_string(),
            address,
            name: self.currency_name(),
            decimals,
            symbol: self.currency_name(),
        }
    }

    /// Returns a consumer owned by a random user.
    pub fn consumer(&mut self, blockchain_name: &str) -> BlockConsumer {
        BlockConsumer {
            blockchain_name: blockchain_name.to_string(),
            consumer_name: CONSUMER_NAME.to_string(),
            user_id: hex(&self.hash()),
        }
    }
}

/// Returns the hash of the last block of a sequence, to extend it with another
/// [Generator::sequence].
pub fn last_block_hash(blocks: &[Block]) -> Option<&Bytes> {
    blocks.last().map(|block| &block.header.block_hash)
}
