//! Bounds-checked little-endian primitives for resource decoding.
//!
//! Every resource format handled by this crate is stored little-endian, with the single exception
//! of the occasional big-endian magic comparison in tests. The functions here are the lowest layer
//! of the byte cursor: they take a buffer and an explicit offset, decode a fixed-width integer and
//! advance the offset by the width of the value.
//!
//! # Key Components
//!
//! - [`crate::file::io::RsrcIO`] - Sealed trait over the integer types a resource can contain
//! - [`crate::file::io::read_le`] - Read a value from the start of a buffer
//! - [`crate::file::io::read_le_at`] - Read a value at an offset and advance it
//! - [`crate::file::io::read_be_at`] - Big-endian twin of [`crate::file::io::read_le_at`]
//!
//! # Usage Examples
//!
//! ```rust
//! use rsrcscope::file::io::read_le_at;
//!
//! let data = [0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x00, 0x00];
//! let mut offset = 0;
//!
//! let first: u16 = read_le_at(&data, &mut offset)?;  // offset: 0 -> 2
//! let second: u16 = read_le_at(&data, &mut offset)?; // offset: 2 -> 4
//! let third: u32 = read_le_at(&data, &mut offset)?;  // offset: 4 -> 8
//!
//! assert_eq!((first, second, third), (1, 2, 3));
//! assert_eq!(offset, 8);
//! # Ok::<(), rsrcscope::Error>(())
//! ```
//!
//! # Error Handling
//!
//! All functions return [`crate::Error::OutOfBounds`] when the buffer holds fewer bytes than the
//! value needs. The offset is left untouched on failure.
//!
//! # Thread Safety
//!
//! All functions are pure. The offset is caller-owned, so concurrent decodes over the same buffer
//! are safe as long as each one uses its own offset variable.

use crate::{Error::OutOfBounds, Result};

mod sealed {
    pub trait Sealed {}
}

/// Trait for integer types that can be decoded from a resource blob.
///
/// The associated `Bytes` type is the fixed-size byte array backing the value, for example
/// `[u8; 4]` for `u32`.
pub trait RsrcIO: Sized + sealed::Sealed {
    /// Associated type representing the byte array type for this numeric type.
    type Bytes: Sized + for<'a> TryFrom<&'a [u8]>;

    /// Read T from a byte buffer in little-endian
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
    /// Read T from a byte buffer in big-endian
    fn from_be_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_rsrc_io {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl RsrcIO for $ty {
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                fn from_le_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_le_bytes(bytes)
                }

                fn from_be_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_be_bytes(bytes)
                }
            }
        )*
    };
}

impl_rsrc_io!(u8, i8, u16, i16, u32, i32, u64, i64);

/// Safely reads a value of type `T` in little-endian byte order from the start of a buffer.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
pub fn read_le<T: RsrcIO>(data: &[u8]) -> Result<T> {
    let mut offset = 0_usize;
    read_le_at(data, &mut offset)
}

/// Safely reads a value of type `T` in little-endian byte order at `offset`, advancing the offset
/// by the width of `T`.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
pub fn read_le_at<T: RsrcIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let bytes = take::<T>(data, *offset)?;
    *offset += std::mem::size_of::<T>();
    Ok(T::from_le_bytes(bytes))
}

/// Safely reads a value of type `T` in big-endian byte order at `offset`, advancing the offset by
/// the width of `T`.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
pub fn read_be_at<T: RsrcIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let bytes = take::<T>(data, *offset)?;
    *offset += std::mem::size_of::<T>();
    Ok(T::from_be_bytes(bytes))
}

fn take<T: RsrcIO>(data: &[u8], offset: usize) -> Result<T::Bytes> {
    let type_len = std::mem::size_of::<T>();
    let end = offset.checked_add(type_len).ok_or(OutOfBounds)?;
    if end > data.len() {
        return Err(OutOfBounds);
    }

    data[offset..end].try_into().map_err(|_| OutOfBounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const TEST_BUFFER: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

    #[test]
    fn read_le_widths() {
        assert_eq!(read_le::<u8>(&TEST_BUFFER).unwrap(), 0x01);
        assert_eq!(read_le::<u16>(&TEST_BUFFER).unwrap(), 0x0201);
        assert_eq!(read_le::<u32>(&TEST_BUFFER).unwrap(), 0x0403_0201);
        assert_eq!(read_le::<u64>(&TEST_BUFFER).unwrap(), 0x0807_0605_0403_0201);
        assert_eq!(read_le::<i16>(&[0xFF, 0xFF]).unwrap(), -1);
    }

    #[test]
    fn read_at_advances() {
        let mut offset = 2;
        assert_eq!(read_le_at::<u16>(&TEST_BUFFER, &mut offset).unwrap(), 0x0403);
        assert_eq!(offset, 4);
        assert_eq!(read_be_at::<u32>(&TEST_BUFFER, &mut offset).unwrap(), 0x0506_0708);
        assert_eq!(offset, 8);
    }

    #[test]
    fn out_of_bounds_leaves_offset() {
        let mut offset = 6;
        assert!(matches!(
            read_le_at::<u32>(&TEST_BUFFER, &mut offset),
            Err(Error::OutOfBounds)
        ));
        assert_eq!(offset, 6);

        let mut offset = usize::MAX;
        assert!(read_le_at::<u8>(&TEST_BUFFER, &mut offset).is_err());
    }
}
