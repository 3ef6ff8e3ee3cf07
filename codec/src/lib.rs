//! Canonical binary encoding of ingested blockchain records.
//!
//! # Overview
//!
//! Every record that crosses the ingestion pipeline (on the wire or into storage) is written with
//! this codec. The encoding is canonical: two logically equal values always produce the same
//! bytes, which makes a byte comparison of two encodings a strict equality check.
//!
//! # Format
//!
//! - Fixed-width integers are written big-endian.
//! - `bool` is a single byte, `0` or `1`.
//! - `[u8; N]` is written raw.
//! - `Bytes`, `String`, and `Vec<T>` are prefixed with their length as a varint `u32`.
//! - Struct fields are written in declaration order, with no tags and no skipped defaults.
//!
//! # Example
//!
//! ```
//! use blockscan_codec::{DecodeExt, Encode, EncodeSize, Error, Read, ReadExt, Write};
//! use bytes::{Buf, BufMut};
//!
//! #[derive(Debug, PartialEq)]
//! struct Checkpoint {
//!     height: u64,
//!     finalized: bool,
//! }
//!
//! impl Write for Checkpoint {
//!     fn write(&self, buf: &mut impl BufMut) {
//!         self.height.write(buf);
//!         self.finalized.write(buf);
//!     }
//! }
//!
//! impl EncodeSize for Checkpoint {
//!     fn encode_size(&self) -> usize {
//!         self.height.encode_size() + self.finalized.encode_size()
//!     }
//! }
//!
//! impl Read for Checkpoint {
//!     type Cfg = ();
//!
//!     fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
//!         let height = u64::read(buf)?;
//!         let finalized = bool::read(buf)?;
//!         Ok(Self { height, finalized })
//!     }
//! }
//!
//! let checkpoint = Checkpoint { height: 7, finalized: true };
//! let encoded = checkpoint.encode();
//! assert_eq!(encoded.len(), 9);
//! assert_eq!(Checkpoint::decode(encoded).unwrap(), checkpoint);
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod types;
pub mod util;
pub mod varint;

pub use codec::{Decode, DecodeExt, Encode, EncodeSize, FixedSize, Read, ReadExt, Write};
pub use config::RangeCfg;
pub use error::Error;
