//! Generate randomized blockchain records and compare them byte-for-byte in tests.
//!
//! The [Generator] builds structurally valid blocks, transactions, logs, currencies, and
//! consumers from an injected source of randomness. The comparator functions check that two
//! records (or two block sequences) encode to identical bytes and report where they diverge.
//!
//! # Example
//!
//! ```rust
//! use blockscan_fixtures::{check_blocks, last_block_hash, Config, Generator};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut generator = Generator::new(StdRng::seed_from_u64(0), Config::default());
//! let blockchain = generator.blockchain_name();
//! let hash = generator.hash();
//! let parent = generator.hash();
//!
//! // Three chained blocks at heights 100..=102, two transactions each
//! let blocks = generator.sequence(3, &blockchain, 100, hash, parent, 2);
//! assert_eq!(blocks[2].header.block_height, 102);
//! assert_eq!(blocks[1].header.parent_hash, blocks[0].header.block_hash);
//! assert!(blocks.iter().all(|block| block.verify_logs_bloom()));
//!
//! // Continue the chain from its tip
//! let tip = last_block_hash(&blocks).unwrap().clone();
//! let next = generator.hash();
//! let more = generator.sequence(1, &blockchain, 103, next, tip, 2);
//! assert_eq!(more[0].header.parent_hash, blocks[2].header.block_hash);
//!
//! check_blocks(&blocks, &blocks.clone());
//! ```

mod comparator;
pub use comparator::{
    assert_encoded_eq, check_blocks, compare_blocks, compare_encoded, normalize_hash, Mismatch,
};
mod generator;
pub use generator::{last_block_hash, Generator, TxLocation, ADDRESS_LENGTH, HASH_LENGTH};

/// Sizes used when the [Generator] fills blocks with transactions.
#[derive(Clone, Debug)]
pub struct Config {
    /// Length of each transaction's call input.
    pub input_size: usize,

    /// Number of logs emitted by each transaction.
    pub logs_per_transaction: usize,

    /// Length of each log's data payload.
    pub log_data_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_size: 500,
            logs_per_transaction: 10,
            log_data_size: 40,
        }
    }
}
