//! Field-by-field construction of aggregates from bytes
//!
//! An aggregate is decoded by reading each instance field from one cursor in
//! declaration order. Any read failure aborts the whole construction; there
//! is never a partially built value.

/// Types that can be built from a byte buffer
///
/// Implement by hand with a [`BinaryCursor`](crate::BinaryCursor), or let
/// [`binary_initializable!`](crate::binary_initializable) generate the
/// implementation.
///
/// ```rust
/// use binary_cursor::{BinaryCursor, BinaryInitialization, Result};
///
/// struct Sample {
///     id: u16,
///     value: f32,
/// }
///
/// impl BinaryInitialization for Sample {
///     fn from_binary(data: &[u8]) -> Result<Self> {
///         let mut cursor = BinaryCursor::new(data, true);
///         Ok(Self {
///             id: cursor.next()?,
///             value: cursor.next()?,
///         })
///     }
/// }
///
/// let sample = Sample::from_binary(&[0x00, 0x07, 0x3F, 0x80, 0x00, 0x00])?;
/// assert_eq!(sample.id, 7);
/// assert_eq!(sample.value, 1.0);
/// # Ok::<(), binary_cursor::DecodeError>(())
/// ```
pub trait BinaryInitialization: Sized {
    /// Build a value by reading its fields from `data` in order
    fn from_binary(data: &[u8]) -> super::Result<Self>;
}

/// Define a struct and implement [`BinaryInitialization`] for it
///
/// Each named field is read once, in the order written, with the field's own
/// type deciding the width. Associated constants and other items in separate
/// `impl` blocks are not fields and are never read. A struct with no fields
/// decodes from any buffer without reading.
///
/// Data is little-endian unless the invocation starts with
/// `big_endian = true;`. The setting applies to every field.
///
/// ```rust
/// use binary_cursor::{binary_initializable, BinaryInitialization};
///
/// binary_initializable! {
///     big_endian = true;
///
///     #[derive(Debug, PartialEq)]
///     pub struct Reading {
///         pub sensor: u8,
///         pub celsius: i16,
///     }
/// }
///
/// let reading = Reading::from_binary(&[0x02, 0xFF, 0xF6])?;
/// assert_eq!(reading, Reading { sensor: 2, celsius: -10 });
/// # Ok::<(), binary_cursor::DecodeError>(())
/// ```
#[macro_export]
macro_rules! binary_initializable {
    (
        @define $big_endian:literal;
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$field_meta:meta])* $field_vis:vis $field:ident : $ty:ty ),*
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $(#[$field_meta])* $field_vis $field : $ty, )*
        }

        impl $crate::BinaryInitialization for $name {
            #[allow(unused_mut, unused_variables)]
            fn from_binary(data: &[u8]) -> $crate::Result<Self> {
                let mut cursor = $crate::BinaryCursor::new(data, $big_endian);
                ::core::result::Result::Ok(Self {
                    $( $field: cursor.next::<$ty>()?, )*
                })
            }
        }
    };

    (
        big_endian = $big_endian:literal;
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$field_meta:meta])* $field_vis:vis $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $crate::binary_initializable! {
            @define $big_endian;
            $(#[$meta])*
            $vis struct $name {
                $( $(#[$field_meta])* $field_vis $field : $ty ),*
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$field_meta:meta])* $field_vis:vis $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $crate::binary_initializable! {
            @define false;
            $(#[$meta])*
            $vis struct $name {
                $( $(#[$field_meta])* $field_vis $field : $ty ),*
            }
        }
    };
}
