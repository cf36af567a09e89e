//! binary-cursor - Sequential fixed-width binary decoding with explicit byte order
//!
//! This library reads numeric values out of a borrowed byte buffer one after
//! another, reversing byte order when the data's declared endianness differs
//! from the host's.
//!
//! # Quick Start
//!
//! ```rust
//! use binary_cursor::BinaryCursor;
//!
//! let data = [0x00, 0x00, 0x09, 0xCA, 0x42, 0xC5, 0x33, 0x33];
//! let mut cursor = BinaryCursor::new(&data, true);
//!
//! let count: u32 = cursor.next()?;
//! let temperature: f32 = cursor.next()?;
//!
//! assert_eq!(count, 2506);
//! assert_eq!(temperature, 98.6);
//! # Ok::<(), binary_cursor::DecodeError>(())
//! ```
//!
//! # Features
//!
//! - **Zero-copy reads** - The cursor borrows its buffer and never mutates it
//! - **Host-independent byte order** - Swapping is decided per build target
//! - **Distinct failures** - Exhaustion and copy failures are separate errors
//! - **Struct decoding** - [`binary_initializable!`] reads fields in declaration order
//! - **`serde` feature** - Serializable [`DecoderConfig`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod decoder;

pub use decoder::{
    BinaryCursor, BinaryInitialization, BinaryWriter, ByteOrder, DecodeError, DecoderConfig,
    FixedWidth, Result, host_is_big_endian,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
