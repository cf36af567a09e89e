//! Sequential fixed-width value reader
//!
//! A [`BinaryCursor`] walks a borrowed byte buffer front to back, handing out
//! one numeric value per call. Byte order is fixed when the cursor is built.

use tracing::{debug, trace};

use super::{ByteOrder, DecodeError, DecoderConfig, FixedWidth, Result};

/// Stateful reader over an immutable byte buffer
///
/// The buffer is borrowed, never copied or modified. The read position starts
/// at zero and only moves forward, by exactly the width of each value read
/// successfully. A failed read leaves the position where it was, so
/// `position() <= len()` always holds and retrying fails the same way.
///
/// [`next`](Self::next) takes `&mut self`; sharing one cursor across threads
/// needs external locking. Separate cursors over the same buffer are
/// independent.
///
/// # Example
///
/// ```rust
/// use binary_cursor::BinaryCursor;
///
/// let data = [0x34, 0x00, 0x00, 0x00, 0xFB, 0xFF];
/// let mut cursor = BinaryCursor::new(&data, false);
///
/// let id: u32 = cursor.next()?;
/// let delta: i16 = cursor.next()?;
///
/// assert_eq!((id, delta), (52, -5));
/// assert!(cursor.is_exhausted());
/// # Ok::<(), binary_cursor::DecodeError>(())
/// ```
#[derive(Debug)]
pub struct BinaryCursor<'a> {
    data: &'a [u8],
    byte_order: ByteOrder,
    position: usize,
}

impl<'a> BinaryCursor<'a> {
    /// Create a cursor at the start of `data`
    ///
    /// `big_endian` declares the byte order the data was written in.
    #[must_use]
    pub fn new(data: &'a [u8], big_endian: bool) -> Self {
        Self::with_order(data, ByteOrder::from_big_endian(big_endian))
    }

    /// Create a cursor with an explicit byte order
    #[must_use]
    pub fn with_order(data: &'a [u8], byte_order: ByteOrder) -> Self {
        Self {
            data,
            byte_order,
            position: 0,
        }
    }

    /// Create a cursor from a decoder configuration
    #[must_use]
    pub fn with_config(data: &'a [u8], config: DecoderConfig) -> Self {
        Self::with_order(data, config.byte_order)
    }

    /// Read the next value of type `T`
    ///
    /// Consumes `T::WIDTH` bytes. The bytes are reversed first when the
    /// requested byte order differs from the host's, then reinterpreted as
    /// the in-memory representation of `T`.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::DataExhausted`] if fewer than `T::WIDTH` bytes remain
    /// - [`DecodeError::CopyFailure`] if the value's storage did not receive
    ///   exactly `T::WIDTH` bytes
    #[allow(clippy::should_implement_trait)]
    pub fn next<T: FixedWidth>(&mut self) -> Result<T> {
        let offset = self.position;

        let Some(bytes) = offset
            .checked_add(T::WIDTH)
            .and_then(|end| self.data.get(offset..end))
        else {
            let remaining = self.remaining();
            debug!(offset, needed = T::WIDTH, remaining, "binary cursor exhausted");
            return Err(DecodeError::DataExhausted {
                offset,
                needed: T::WIDTH,
                remaining,
            });
        };

        let mut repr = T::Repr::default();
        let copied = if self.byte_order.needs_swap() {
            copy_into(repr.as_mut(), bytes.iter().rev())
        } else {
            copy_into(repr.as_mut(), bytes.iter())
        };

        if copied != T::WIDTH || repr.as_ref().len() != T::WIDTH {
            debug!(offset, expected = T::WIDTH, copied, "binary cursor copy failure");
            return Err(DecodeError::CopyFailure {
                expected: T::WIDTH,
                copied,
            });
        }

        self.position += bytes.len();
        trace!(offset, width = T::WIDTH, byte_order = %self.byte_order, "decoded value");

        Ok(T::from_ne_repr(repr))
    }

    /// Current read offset
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Bytes not yet consumed
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Total buffer length
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the buffer is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if every byte has been consumed
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Requested byte order
    #[must_use]
    pub const fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Check if big-endian data was requested
    #[must_use]
    pub const fn is_big_endian(&self) -> bool {
        self.byte_order.is_big_endian()
    }

    /// Check if reads reverse bytes before loading them
    #[must_use]
    pub const fn needs_swap(&self) -> bool {
        self.byte_order.needs_swap()
    }
}

/// Copy bytes from `src` into `dst`, returning how many were transferred
fn copy_into<'s>(dst: &mut [u8], src: impl Iterator<Item = &'s u8>) -> usize {
    let mut copied = 0;
    for (slot, byte) in dst.iter_mut().zip(src) {
        *slot = *byte;
        copied += 1;
    }
    copied
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO_LE: [u8; 28] = [
        0x34, 0x00, 0x00, 0x00, // 52
        0xCA, 0x09, 0x00, 0x00, // 2506
        0x33, 0x33, 0xC5, 0x42, // 98.6f32
        0xCD, 0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0x3C, 0x40, // 28.8f64
        0xFB, 0xFF, 0xFF, 0xFF, // -5
        0xED, 0x5F, 0x84, 0x00, // 8675309
    ];

    const SCENARIO_BE: [u8; 28] = [
        0x00, 0x00, 0x00, 0x34, //
        0x00, 0x00, 0x09, 0xCA, //
        0x42, 0xC5, 0x33, 0x33, //
        0x40, 0x3C, 0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0xCD, //
        0xFF, 0xFF, 0xFF, 0xFB, //
        0x00, 0x84, 0x5F, 0xED, //
    ];

    fn decode_scenario(cursor: &mut BinaryCursor<'_>) -> Result<(u32, u32, f32, f64, i32, u32)> {
        Ok((
            cursor.next()?,
            cursor.next()?,
            cursor.next()?,
            cursor.next()?,
            cursor.next()?,
            cursor.next()?,
        ))
    }

    #[test]
    fn test_scenario_little_endian() {
        let mut cursor = BinaryCursor::new(&SCENARIO_LE, false);
        let values = decode_scenario(&mut cursor).unwrap();

        assert_eq!(values, (52, 2506, 98.6, 28.8, -5, 8_675_309));
        assert_eq!(cursor.position(), 28);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_scenario_big_endian() {
        let mut cursor = BinaryCursor::new(&SCENARIO_BE, true);
        let values = decode_scenario(&mut cursor).unwrap();

        assert_eq!(values, (52, 2506, 98.6, 28.8, -5, 8_675_309));
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_wrong_order_reverses_bytes() {
        let data = 0x1234_5678_u32.to_be_bytes();

        let mut cursor = BinaryCursor::new(&data, true);
        assert_eq!(cursor.next::<u32>().unwrap(), 0x1234_5678);

        let mut cursor = BinaryCursor::new(&data, false);
        assert_eq!(cursor.next::<u32>().unwrap(), 0x7856_3412);
    }

    #[test]
    fn test_single_byte_ignores_order() {
        let data = [0xFE];
        assert_eq!(BinaryCursor::new(&data, false).next::<i8>().unwrap(), -2);
        assert_eq!(BinaryCursor::new(&data, true).next::<i8>().unwrap(), -2);
    }

    #[test]
    fn test_exhaustion_boundary() {
        let data = [0u8; 6];
        let mut cursor = BinaryCursor::new(&data, false);

        assert_eq!(cursor.next::<u32>().unwrap(), 0);
        assert_eq!(cursor.next::<u16>().unwrap(), 0);
        assert!(cursor.is_exhausted());

        let err = cursor.next::<u8>().unwrap_err();
        assert_eq!(
            err,
            DecodeError::DataExhausted {
                offset: 6,
                needed: 1,
                remaining: 0,
            }
        );
    }

    #[test]
    fn test_failed_read_keeps_position() {
        let data = [1u8, 2, 3];
        let mut cursor = BinaryCursor::new(&data, false);

        assert_eq!(cursor.next::<u8>().unwrap(), 1);
        let first = cursor.next::<u32>().unwrap_err();
        assert_eq!(cursor.position(), 1);

        let second = cursor.next::<u32>().unwrap_err();
        assert_eq!(first, second);
        assert_eq!(cursor.position(), 1);

        // smaller reads still fit
        assert_eq!(cursor.next::<u16>().unwrap(), u16::from_le_bytes([2, 3]));
    }

    #[test]
    fn test_empty_buffer() {
        let mut cursor = BinaryCursor::new(&[], true);
        assert!(cursor.is_empty());
        assert!(cursor.is_exhausted());
        assert!(cursor.next::<u8>().unwrap_err().is_exhausted());
    }

    #[test]
    fn test_sequential_matches_subslices() {
        let mut cursor = BinaryCursor::new(&SCENARIO_LE, false);
        let _: u32 = cursor.next().unwrap();
        let _: u32 = cursor.next().unwrap();
        let _: f32 = cursor.next().unwrap();
        let start = cursor.position();
        let in_sequence: f64 = cursor.next().unwrap();

        let mut alone = BinaryCursor::new(&SCENARIO_LE[start..start + 8], false);
        assert_eq!(alone.next::<f64>().unwrap().to_bits(), in_sequence.to_bits());
    }

    #[test]
    fn test_config_constructors() {
        let data = [0u8; 2];
        let cursor = BinaryCursor::with_config(&data, DecoderConfig::big_endian());
        assert!(cursor.is_big_endian());
        assert_eq!(cursor.byte_order(), ByteOrder::Big);
        assert_eq!(cursor.len(), 2);

        let cursor = BinaryCursor::with_order(&data, ByteOrder::NATIVE);
        assert!(!cursor.needs_swap());
    }

    /// Deliberately inconsistent: claims four bytes but stores three.
    #[derive(Clone, Copy, Debug)]
    struct Truncated(u32);

    impl FixedWidth for Truncated {
        const WIDTH: usize = 4;
        type Repr = [u8; 3];

        fn from_ne_repr(repr: Self::Repr) -> Self {
            Self(u32::from_ne_bytes([repr[0], repr[1], repr[2], 0]))
        }

        fn to_ne_repr(self) -> Self::Repr {
            let [a, b, c, _] = self.0.to_ne_bytes();
            [a, b, c]
        }
    }

    #[test]
    fn test_copy_failure_is_distinct() {
        let data = [1u8, 2, 3, 4, 5];
        let mut cursor = BinaryCursor::new(&data, false);

        let err = cursor.next::<Truncated>().unwrap_err();
        assert_eq!(
            err,
            DecodeError::CopyFailure {
                expected: 4,
                copied: 3,
            }
        );
        assert!(!err.is_exhausted());
        assert_eq!(cursor.position(), 0);
    }

    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: values written in an order decode back bit-exactly in that order
            #[test]
            fn prop_roundtrip_both_orders(a in any::<u64>(), b in any::<i32>(), c in any::<f64>(), d in any::<i16>()) {
                let mut le = Vec::new();
                le.extend_from_slice(&a.to_le_bytes());
                le.extend_from_slice(&b.to_le_bytes());
                le.extend_from_slice(&c.to_le_bytes());
                le.extend_from_slice(&d.to_le_bytes());

                let mut be = Vec::new();
                be.extend_from_slice(&a.to_be_bytes());
                be.extend_from_slice(&b.to_be_bytes());
                be.extend_from_slice(&c.to_be_bytes());
                be.extend_from_slice(&d.to_be_bytes());

                for (data, big_endian) in [(&le, false), (&be, true)] {
                    let mut cursor = BinaryCursor::new(data, big_endian);
                    prop_assert_eq!(cursor.next::<u64>().unwrap(), a);
                    prop_assert_eq!(cursor.next::<i32>().unwrap(), b);
                    prop_assert_eq!(cursor.next::<f64>().unwrap().to_bits(), c.to_bits());
                    prop_assert_eq!(cursor.next::<i16>().unwrap(), d);
                    prop_assert!(cursor.is_exhausted());
                }
            }

            /// Property: reading with the opposite order yields the byte-swapped value
            #[test]
            fn prop_opposite_order_swaps(v in any::<u32>()) {
                let data = v.to_be_bytes();
                let mut cursor = BinaryCursor::new(&data, false);
                prop_assert_eq!(cursor.next::<u32>().unwrap(), v.swap_bytes());
            }

            /// Property: a buffer of N bytes yields exactly N single-byte reads
            #[test]
            fn prop_exhaustion_boundary(data in prop::collection::vec(any::<u8>(), 0..256)) {
                let mut cursor = BinaryCursor::new(&data, true);
                for expected in &data {
                    prop_assert_eq!(cursor.next::<u8>().unwrap(), *expected);
                }
                prop_assert_eq!(cursor.position(), data.len());
                prop_assert!(cursor.next::<u8>().unwrap_err().is_exhausted());
            }

            /// Property: position never passes the end of the buffer
            #[test]
            fn prop_position_bounded(len in 0usize..64, reads in prop::collection::vec(0u8..4, 0..32)) {
                let data = vec![0u8; len];
                let mut cursor = BinaryCursor::new(&data, false);
                for width in reads {
                    let before = cursor.position();
                    let result = match width {
                        0 => cursor.next::<u8>().map(|_| 1),
                        1 => cursor.next::<u16>().map(|_| 2),
                        2 => cursor.next::<u32>().map(|_| 4),
                        _ => cursor.next::<u64>().map(|_| 8),
                    };
                    match result {
                        Ok(size) => prop_assert_eq!(cursor.position(), before + size),
                        Err(_) => prop_assert_eq!(cursor.position(), before),
                    }
                    prop_assert!(cursor.position() <= cursor.len());
                }
            }
        }
    }
}
