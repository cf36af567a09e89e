//! Binary cursor decoder
//!
//! This module provides the sequential fixed-width reader, its configuration
//! and error types, and the field-by-field construction trait built on it.

mod cursor;
mod error;
mod init;
mod types;
mod writer;

pub use cursor::BinaryCursor;
pub use error::{DecodeError, Result};
pub use init::BinaryInitialization;
pub use types::{ByteOrder, DecoderConfig, FixedWidth, host_is_big_endian};
pub use writer::BinaryWriter;
