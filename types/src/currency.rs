use crate::{read_name, read_word};
use blockscan_codec::{EncodeSize, Error, Read, ReadExt, Write};
use bytes::{Buf, BufMut, Bytes};

/// Metadata of a token (or the native coin) tracked on a blockchain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyDetails {
    pub blockchain_name: String,

    /// Contract address of the token; empty for the native coin.
    pub address: Bytes,

    pub name: String,
    pub decimals: u64,
    pub symbol: String,
}

impl Write for CurrencyDetails {
    fn write(&self, buf: &mut impl BufMut) {
        self.blockchain_name.write(buf);
        self.address.write(buf);
        self.name.write(buf);
        self.decimals.write(buf);
        self.symbol.write(buf);
    }
}

impl EncodeSize for CurrencyDetails {
    fn encode_size(&self) -> usize {
        self.blockchain_name.encode_size()
            + self.address.encode_size()
            + self.name.encode_size()
            + self.decimals.encode_size()
            + self.symbol.encode_size()
    }
}

impl Read for CurrencyDetails {
    type Cfg = ();

    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        let blockchain_name = read_name(buf)?;
        let address = read_word(buf)?;
        let name = read_name(buf)?;
        let decimals = u64::read(buf)?;
        let symbol = read_name(buf)?;
        Ok(Self {
            blockchain_name,
            address,
            name,
            decimals,
            symbol,
        })
    }
}
