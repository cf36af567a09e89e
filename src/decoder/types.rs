//! Fixed-width value types and byte order configuration

use std::fmt;

/// Numeric types with a statically known byte width.
///
/// A value is produced from its native-order byte representation, so the
/// conversion is a bit-pattern reinterpretation (two's-complement for signed
/// integers, IEEE-754 for floats) rather than a numeric cast.
pub trait FixedWidth: Copy {
    /// Size of the type in bytes
    const WIDTH: usize;

    /// Byte storage holding exactly `WIDTH` bytes
    type Repr: AsRef<[u8]> + AsMut<[u8]> + Default;

    /// Build a value from its native-order bytes
    fn from_ne_repr(repr: Self::Repr) -> Self;

    /// Native-order bytes of the value
    fn to_ne_repr(self) -> Self::Repr;
}

macro_rules! impl_fixed_width {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FixedWidth for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();
                type Repr = [u8; std::mem::size_of::<$ty>()];

                #[inline]
                fn from_ne_repr(repr: Self::Repr) -> Self {
                    <$ty>::from_ne_bytes(repr)
                }

                #[inline]
                fn to_ne_repr(self) -> Self::Repr {
                    self.to_ne_bytes()
                }
            }
        )*
    };
}

impl_fixed_width!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);

/// Check whether the build target stores multi-byte values big-endian
#[must_use]
pub const fn host_is_big_endian() -> bool {
    cfg!(target_endian = "big")
}

/// Byte order the source data was written in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ByteOrder {
    /// Least significant byte first
    #[default]
    Little,
    /// Most significant byte first
    Big,
}

impl ByteOrder {
    /// Byte order of the build target
    pub const NATIVE: Self = if host_is_big_endian() {
        Self::Big
    } else {
        Self::Little
    };

    /// Convert from a "big-endian requested" flag
    #[must_use]
    pub const fn from_big_endian(big_endian: bool) -> Self {
        if big_endian { Self::Big } else { Self::Little }
    }

    /// Check if this is big-endian
    #[must_use]
    pub const fn is_big_endian(self) -> bool {
        matches!(self, Self::Big)
    }

    /// Check if bytes in this order must be reversed to load them natively
    #[must_use]
    pub const fn needs_swap(self) -> bool {
        self.is_big_endian() != host_is_big_endian()
    }
}

impl From<bool> for ByteOrder {
    fn from(big_endian: bool) -> Self {
        Self::from_big_endian(big_endian)
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Little => "little-endian",
            Self::Big => "big-endian",
        };
        write!(f, "{name}")
    }
}

/// Cursor configuration
///
/// One configuration applies to every value read by a cursor; there is no
/// per-field override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecoderConfig {
    /// Byte order of the source data
    pub byte_order: ByteOrder,
}

impl DecoderConfig {
    /// Little-endian configuration (the default)
    #[must_use]
    pub const fn little_endian() -> Self {
        Self {
            byte_order: ByteOrder::Little,
        }
    }

    /// Big-endian configuration
    #[must_use]
    pub const fn big_endian() -> Self {
        Self {
            byte_order: ByteOrder::Big,
        }
    }

    /// Replace the byte order
    #[must_use]
    pub const fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Check if big-endian data is expected
    #[must_use]
    pub const fn is_big_endian(&self) -> bool {
        self.byte_order.is_big_endian()
    }
}

impl From<bool> for DecoderConfig {
    fn from(big_endian: bool) -> Self {
        Self::default().with_byte_order(ByteOrder::from_big_endian(big_endian))
    }
}

impl From<ByteOrder> for DecoderConfig {
    fn from(byte_order: ByteOrder) -> Self {
        Self { byte_order }
    }
}
