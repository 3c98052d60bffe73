//! Cursor-based byte parser shared by every resource decoder.
//!
//! This module provides the [`crate::file::parser::Parser`] type, a bounds-checked cursor over a
//! borrowed resource blob. Decoders create one parser per top-level call, pass it by `&mut` into
//! nested decoders, and never touch the underlying bytes directly.
//!
//! # Architecture
//!
//! The parser keeps a single `position` into an immutable slice:
//!
//! - **Position tracking** - the cursor only moves forward during a top-level decode, except for
//!   explicit [`Parser::seek`] calls made by formats that store absolute offsets
//! - **Bounds checking** - every read validates data availability before touching the slice
//! - **Peeking** - [`Parser::peek_le`], [`Parser::peek_at`] and [`Parser::peek_wide_string`]
//!   inspect upcoming data without committing the cursor, which is how the resource formats
//!   select between variants that carry no explicit tag
//! - **Alignment** - [`Parser::align`] skips padding up to a WORD/DWORD boundary but never past
//!   the end of the buffer
//!
//! # Usage Examples
//!
//! ```rust
//! use rsrcscope::Parser;
//!
//! // "Hi" as UTF-16LE, terminator, one padding word, then a u32
//! let data = [b'H', 0, b'i', 0, 0, 0, 0, 0, 0x2A, 0, 0, 0];
//! let mut parser = Parser::new(&data);
//!
//! let (peeked, consumed) = parser.peek_wide_string()?;
//! assert_eq!((peeked.as_str(), consumed, parser.pos()), ("Hi", 6, 0));
//!
//! assert_eq!(parser.read_wide_string()?, "Hi");
//! parser.align(4);
//! assert_eq!(parser.read_le::<u32>()?, 42);
//! # Ok::<(), rsrcscope::Error>(())
//! ```

use widestring::U16Str;

use crate::{
    file::io::{read_le_at, RsrcIO},
    Result,
};

/// A bounds-checked cursor over a resource blob.
///
/// `Parser` never owns the data it reads; decoded values copy what they need, so the blob only
/// has to outlive the decode call.
pub struct Parser<'a> {
    /// The binary data being parsed
    data: &'a [u8],
    /// Current position within the data buffer
    position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new [`crate::file::parser::Parser`] from a byte slice.
    ///
    /// # Arguments
    /// * `data` - The byte slice to read from
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser { data, position: 0 }
    }

    /// Returns the length of the underlying data buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the parser has no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if the cursor is before the end of the data buffer.
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Get the current position of the parser within the data buffer.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Get access to the underlying data buffer.
    #[must_use]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the number of bytes remaining from the current position.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Move the current position to the specified index.
    ///
    /// Seeking to exactly the end of the buffer is allowed; it leaves nothing to read.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if `pos` is beyond the data length.
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > self.data.len() {
            return Err(out_of_bounds_error!());
        }

        self.position = pos;
        Ok(())
    }

    /// Move the position forward by the specified number of bytes.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if advancing by step would exceed the data length.
    pub fn advance_by(&mut self, step: usize) -> Result<()> {
        let end = self.calc_end_position(step)?;
        self.position = end;
        Ok(())
    }

    /// Ensures that at least `needed` bytes are available from the current position.
    ///
    /// Decoders call this before looping over a count read from the stream, so a count that
    /// cannot possibly fit is rejected before any allocation happens.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `needed` bytes remain.
    pub fn ensure_remaining(&self, needed: usize) -> Result<()> {
        if self.remaining() < needed {
            return Err(out_of_bounds_error!());
        }
        Ok(())
    }

    /// Calculates `position + length`, checking for overflow and the end of the data.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the calculation would overflow or if the resulting
    /// position exceeds the data length.
    pub fn calc_end_position(&self, length: usize) -> Result<usize> {
        let end = self
            .position
            .checked_add(length)
            .ok_or(out_of_bounds_error!())?;

        if end > self.data.len() {
            return Err(out_of_bounds_error!());
        }

        Ok(end)
    }

    /// Skip padding until the position is a multiple of `alignment`.
    ///
    /// Padding is consumed one byte at a time and stops at the end of the buffer, so a structure
    /// that ends flush with the blob never fails for lack of trailing padding. The skipped bytes
    /// are returned; some formats keep them.
    ///
    /// # Arguments
    /// * `alignment` - The boundary to align to, usually 2 (WORD) or 4 (DWORD)
    pub fn align(&mut self, alignment: usize) -> &'a [u8] {
        let start = self.position;
        if alignment > 1 {
            while self.position % alignment != 0 && self.position < self.data.len() {
                self.position += 1;
            }
        }
        &self.data[start..self.position]
    }

    /// Peek at a value of type `T` in little-endian format without advancing the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading `T` would exceed the data length.
    pub fn peek_le<T: RsrcIO>(&self) -> Result<T> {
        let mut temp_position = self.position;
        read_le_at::<T>(self.data, &mut temp_position)
    }

    /// Peek at a value of type `T` at an absolute position without touching the cursor.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading `T` at `pos` would exceed the data length.
    pub fn peek_at<T: RsrcIO>(&self, pos: usize) -> Result<T> {
        let mut temp_position = pos;
        read_le_at::<T>(self.data, &mut temp_position)
    }

    /// Execute a closure transactionally, rolling back the position on failure.
    ///
    /// # Errors
    /// Returns any error produced by the closure `f`, after restoring the position.
    pub fn transactional<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let saved_position = self.position;
        let result = f(self);
        if result.is_err() {
            self.position = saved_position;
        }
        result
    }

    /// Read a type `T` from the current position in little-endian format and advance the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading would exceed the data length.
    pub fn read_le<T: RsrcIO>(&mut self) -> Result<T> {
        read_le_at::<T>(self.data, &mut self.position)
    }

    /// Reads a slice of bytes of the specified length from the current position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading `length` bytes would exceed the data.
    pub fn read_bytes(&mut self, length: usize) -> Result<&'a [u8]> {
        let end = self.calc_end_position(length)?;
        let bytes = &self.data[self.position..end];
        self.position = end;
        Ok(bytes)
    }

    /// Read a NUL-terminated UTF-16LE string and advance past its terminator.
    ///
    /// A string that runs into the end of the buffer without a terminator ends there. Unpaired
    /// surrogates are replaced with U+FFFD.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the cursor is already at the end of the data.
    pub fn read_wide_string(&mut self) -> Result<String> {
        let (value, consumed) = self.peek_wide_string()?;
        self.position += consumed;
        Ok(value)
    }

    /// Decode the NUL-terminated UTF-16LE string at the cursor without consuming it.
    ///
    /// Returns the decoded string together with the number of bytes a subsequent
    /// [`Parser::read_wide_string`] would consume, terminator included.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than two bytes remain.
    pub fn peek_wide_string(&self) -> Result<(String, usize)> {
        self.ensure_remaining(2)?;

        let mut units = Vec::new();
        let mut cursor = self.position;
        while cursor + 2 <= self.data.len() {
            let unit = u16::from_le_bytes([self.data[cursor], self.data[cursor + 1]]);
            cursor += 2;
            if unit == 0 {
                break;
            }
            units.push(unit);
        }

        Ok((decode_utf16(&units), cursor - self.position))
    }

    /// Read exactly `count` UTF-16LE code units and decode them.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if `count * 2` bytes are not available.
    pub fn read_wide_string_units(&mut self, count: usize) -> Result<String> {
        let byte_len = count.checked_mul(2).ok_or(out_of_bounds_error!())?;
        let bytes = self.read_bytes(byte_len)?;
        let units: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        Ok(decode_utf16(&units))
    }

    /// Read a NUL-terminated single-byte string and advance past its terminator.
    ///
    /// Bytes are mapped one-to-one to characters (Latin-1), which is how the debug and overlay
    /// records store their ASCII names. A string without terminator ends at the end of the data.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the cursor is already at the end of the data.
    pub fn read_ascii_string(&mut self) -> Result<String> {
        if !self.has_more_data() {
            return Err(out_of_bounds_error!());
        }

        let start = self.position;
        let end = self.data[start..]
            .iter()
            .position(|&b| b == 0)
            .map_or(self.data.len(), |nul| start + nul);

        self.position = if end < self.data.len() { end + 1 } else { end };
        Ok(decode_ascii(&self.data[start..end]))
    }

    /// Read a string prefixed by a one-byte length.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the prefix or the string body is truncated.
    pub fn read_prefixed_ascii(&mut self) -> Result<String> {
        self.transactional(|p| {
            let length = p.read_le::<u8>()?;
            let bytes = p.read_bytes(usize::from(length))?;
            Ok(decode_ascii(bytes))
        })
    }

    /// Read a fixed-width, NUL-padded single-byte string field of `length` bytes.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if `length` bytes are not available.
    pub fn read_fixed_ascii(&mut self, length: usize) -> Result<String> {
        let bytes = self.read_bytes(length)?;
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        Ok(decode_ascii(&bytes[..end]))
    }

    /// Decode `bytes` either as UTF-16LE or as single-byte text.
    pub(crate) fn decode_text(bytes: &[u8], wide: bool) -> String {
        if wide {
            let units: Vec<u16> = bytes
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                .collect();
            decode_utf16(&units)
        } else {
            decode_ascii(bytes)
        }
    }
}

fn decode_utf16(units: &[u16]) -> String {
    U16Str::from_slice(units).to_string_lossy()
}

fn decode_ascii(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
