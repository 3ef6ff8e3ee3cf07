//! Error types for codec operations

use thiserror::Error;

/// Errors returned while decoding a canonical encoding.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
    #[error("invalid length: {0}")]
    InvalidLength(usize),
    #[error("invalid varint")]
    InvalidVarint,
    #[error("invalid bool")]
    InvalidBool,
    #[error("invalid enum discriminant: {0}")]
    InvalidEnum(u8),
    #[error("invalid utf-8")]
    InvalidUtf8,
}
