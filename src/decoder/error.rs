//! Decoder error types

use thiserror::Error;

/// Errors produced while reading values out of a [`BinaryCursor`](super::BinaryCursor)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer bytes remain than the requested type occupies
    #[error("data exhausted at offset {offset}: need {needed} bytes, {remaining} remaining")]
    DataExhausted {
        /// Cursor position when the read was attempted
        offset: usize,
        /// Width of the requested type
        needed: usize,
        /// Bytes left in the buffer
        remaining: usize,
    },

    /// The byte transfer into the value's storage moved the wrong number of bytes
    #[error("copy failure: expected {expected} bytes, copied {copied}")]
    CopyFailure {
        /// Width of the requested type
        expected: usize,
        /// Bytes actually transferred
        copied: usize,
    },
}

impl DecodeError {
    /// Check if this error signals an exhausted buffer
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::DataExhausted { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DecodeError>;
