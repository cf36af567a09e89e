//! Fixed-width value writer
//!
//! The mirror image of [`BinaryCursor`](super::BinaryCursor): values are
//! appended in call order, each laid out in the requested byte order.

use bytes::{BufMut, Bytes, BytesMut};

use super::{ByteOrder, DecoderConfig, FixedWidth};

/// Append-only encoder producing buffers a cursor with the same byte order reads back
#[derive(Debug, Default)]
pub struct BinaryWriter {
    buf: BytesMut,
    byte_order: ByteOrder,
}

impl BinaryWriter {
    /// Create an empty writer
    #[must_use]
    pub fn new(big_endian: bool) -> Self {
        Self::with_order(ByteOrder::from_big_endian(big_endian))
    }

    /// Create an empty writer with an explicit byte order
    #[must_use]
    pub fn with_order(byte_order: ByteOrder) -> Self {
        Self {
            buf: BytesMut::new(),
            byte_order,
        }
    }

    /// Create an empty writer from a decoder configuration
    #[must_use]
    pub fn with_config(config: DecoderConfig) -> Self {
        Self::with_order(config.byte_order)
    }

    /// Create an empty writer with room for `capacity` bytes
    #[must_use]
    pub fn with_capacity(capacity: usize, big_endian: bool) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
            byte_order: ByteOrder::from_big_endian(big_endian),
        }
    }

    /// Append one value
    pub fn put<T: FixedWidth>(&mut self, value: T) -> &mut Self {
        let mut repr = value.to_ne_repr();
        if self.byte_order.needs_swap() {
            repr.as_mut().reverse();
        }
        self.buf.put_slice(repr.as_ref());
        self
    }

    /// Bytes written so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if nothing has been written
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Byte order values are written in
    #[must_use]
    pub const fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// View the encoded bytes
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Finish writing and return the encoded bytes
    #[must_use]
    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }

    /// Finish writing and return the encoded bytes as a vector
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.buf.to_vec()
    }
}
