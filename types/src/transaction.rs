use crate::{read_name, read_word, EthLog, TransactionCfg};
use blockscan_codec::{EncodeSize, Error, RangeCfg, Read, ReadExt, Write};
use bytes::{Buf, BufMut, Bytes};

/// A transaction included in a block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub blockchain_name: String,
    pub transaction_hash: Bytes,
    pub block_hash: Bytes,
    pub block_height: u64,

    /// Position of the transaction within its block.
    pub transaction_index: u64,

    pub timestamp: u64,
    pub specific: TransactionSpecific,
}

impl Transaction {
    /// Logs emitted by the transaction, in emission order.
    pub fn logs(&self) -> &[EthLog] {
        match &self.specific {
            TransactionSpecific::Eth(tx) => &tx.logs,
        }
    }
}

/// Chain-specific part of a [Transaction].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionSpecific {
    Eth(EthTransaction),
}

/// Execution details of an Ethereum-style transaction and its receipt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EthTransaction {
    pub nonce: u64,
    pub from: Bytes,
    pub to: Bytes,
    pub value: Bytes,
    pub gas: u64,
    pub gas_price: Bytes,
    pub input: Bytes,

    /// Address of the created contract, if any.
    pub contract_address: Bytes,

    pub cumulative_gas_used: u64,
    pub gas_used: u64,

    /// Receipt status: `1` on success, `0` on failure.
    pub status: u64,

    pub logs: Vec<EthLog>,
}

impl Write for EthTransaction {
    fn write(&self, buf: &mut impl BufMut) {
        self.nonce.write(buf);
        self.from.write(buf);
        self.to.write(buf);
        self.value.write(buf);
        self.gas.write(buf);
        self.gas_price.write(buf);
        self.input.write(buf);
        self.contract_address.write(buf);
        self.cumulative_gas_used.write(buf);
        self.gas_used.write(buf);
        self.status.write(buf);
        self.logs.write(buf);
    }
}

impl EncodeSize for EthTransaction {
    fn encode_size(&self) -> usize {
        self.nonce.encode_size()
            + self.from.encode_size()
            + self.to.encode_size()
            + self.value.encode_size()
            + self.gas.encode_size()
            + self.gas_price.encode_size()
            + self.input.encode_size()
            + self.contract_address.encode_size()
            + self.cumulative_gas_used.encode_size()
            + self.gas_used.encode_size()
            + self.status.encode_size()
            + self.logs.encode_size()
    }
}

impl Read for EthTransaction {
    type Cfg = TransactionCfg;

    fn read_cfg(buf: &mut impl Buf, cfg: &TransactionCfg) -> Result<Self, Error> {
        let nonce = u64::read(buf)?;
        let from = read_word(buf)?;
        let to = read_word(buf)?;
        let value = read_word(buf)?;
        let gas = u64::read(buf)?;
        let gas_price = read_word(buf)?;
        let input = Bytes::read_cfg(buf, &RangeCfg::from(..=cfg.max_input))?;
        let contract_address = read_word(buf)?;
        let cumulative_gas_used = u64::read(buf)?;
        let gas_used = u64::read(buf)?;
        let status = u64::read(buf)?;
        let logs =
            Vec::<EthLog>::read_cfg(buf, &(RangeCfg::from(..=cfg.max_logs), cfg.log.clone()))?;
        Ok(Self {
            nonce,
            from,
            to,
            value,
            gas,
            gas_price,
            input,
            contract_address,
            cumulative_gas_used,
            gas_used,
            status,
            logs,
        })
    }
}

impl Write for TransactionSpecific {
    fn write(&self, buf: &mut impl BufMut) {
        match self {
            TransactionSpecific::Eth(tx) => {
                0u8.write(buf);
                tx.write(buf);
            }
        }
    }
}

impl EncodeSize for TransactionSpecific {
    fn encode_size(&self) -> usize {
        // 1 byte for the discriminant
        1 + match self {
            TransactionSpecific::Eth(tx) => tx.encode_size(),
        }
    }
}

impl Read for TransactionSpecific {
    type Cfg = TransactionCfg;

    fn read_cfg(buf: &mut impl Buf, cfg: &TransactionCfg) -> Result<Self, Error> {
        match u8::read(buf)? {
            0 => Ok(TransactionSpecific::Eth(EthTransaction::read_cfg(buf, cfg)?)),
            other => Err(Error::InvalidEnum(other)),
        }
    }
}

impl Write for Transaction {
    fn write(&self, buf: &mut impl BufMut) {
        self.blockchain_name.write(buf);
        self.transaction_hash.write(buf);
        self.block_hash.write(buf);
        self.block_height.write(buf);
        self.transaction_index.write(buf);
        self.timestamp.write(buf);
        self.specific.write(buf);
    }
}

impl EncodeSize for Transaction {
    fn encode_size(&self) -> usize {
        self.blockchain_name.encode_size()
            + self.transaction_hash.encode_size()
            + self.block_hash.encode_size()
            + self.block_height.encode_size()
            + self.transaction_index.encode_size()
            + self.timestamp.encode_size()
            + self.specific.encode_size()
    }
}

impl Read for Transaction {
    type Cfg = TransactionCfg;

    fn read_cfg(buf: &mut impl Buf, cfg: &TransactionCfg) -> Result<Self, Error> {
        let blockchain_name = read_name(buf)?;
        let transaction_hash = read_word(buf)?;
        let block_hash = read_word(buf)?;
        let block_height = u64::read(buf)?;
        let transaction_index = u64::read(buf)?;
        let timestamp = u64::read(buf)?;
        let specific = TransactionSpecific::read_cfg(buf, cfg)?;
        Ok(Self {
            blockchain_name,
            transaction_hash,
            block_hash,
            block_height,
            transaction_index,
            timestamp,
            specific,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockscan_codec::{Decode, Encode, FixedSize};

    fn sample() -> Transaction {
        Transaction {
            blockchain_name: "TESTchain".to_string(),
            transaction_hash: Bytes::from(vec![0x01; 32]),
            block_hash: Bytes::from(vec![0x02; 32]),
            block_height: 100,
            transaction_index: 3,
            timestamp: 1_700_000_000,
            specific: TransactionSpecific::Eth(EthTransaction {
                nonce: 9,
                from: Bytes::from(vec![0x03; 20]),
                to: Bytes::from(vec![0x04; 20]),
                value: Bytes::from(vec![0x05; 32]),
                gas: 21_000,
                gas_price: Bytes::from(vec![0x06; 32]),
                input: Bytes::from(vec![0x07; 500]),
                contract_address: Bytes::new(),
                cumulative_gas_used: 42_000,
                gas_used: 21_000,
                status: 1,
                logs: vec![EthLog {
                    address: Bytes::from(vec![0x08; 20]),
                    topics: vec![Bytes::from(vec![0x09; 32])],
                    data: Bytes::new(),
                    log_index: 0,
                    removed: false,
                }],
            }),
        }
    }

    #[test]
    fn test_roundtrip() {
        let tx = sample();
        let encoded = tx.encode();
        let decoded = Transaction::decode_cfg(encoded, &TransactionCfg::default()).unwrap();
        assert_eq!(tx, decoded);
        assert_eq!(decoded.logs().len(), 1);
    }

    #[test]
    fn test_unknown_specific() {
        let tx = sample();
        let mut encoded = tx.encode();

        // The discriminant follows the fixed header fields.
        let offset = tx.blockchain_name.encode_size()
            + tx.transaction_hash.encode_size()
            + tx.block_hash.encode_size()
            + 3 * u64::SIZE;
        encoded[offset] = 7;
        assert_eq!(
            Transaction::decode_cfg(encoded, &TransactionCfg::default()),
            Err(Error::InvalidEnum(7))
        );
    }

    #[test]
    fn test_input_too_large() {
        let tx = sample();
        let cfg = TransactionCfg {
            max_input: 499,
            ..TransactionCfg::default()
        };
        assert_eq!(
            Transaction::decode_cfg(tx.encode(), &cfg),
            Err(Error::InvalidLength(500))
        );
    }
}
