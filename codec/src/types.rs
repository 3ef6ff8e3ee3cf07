//! Codec implementations for the building blocks of ingested records.

pub mod bytes;
pub mod primitives;
pub mod string;
pub mod vec;
