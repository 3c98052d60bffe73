//! String tables (`RT_STRING`).
//!
//! A string-table resource holds one block of up to 16 strings. Each slot is a u16 length in
//! UTF-16 code units followed by that many units, without terminator. A length of 0 marks an
//! unused slot.
//!
//! Block `n` (the resource name, counted from 1) stores the strings with ids `(n - 1) * 16`
//! through `(n - 1) * 16 + 15`; see [`StringTable::string_id`].

use crate::{file::parser::Parser, DecoderConfig, Error, Result};

/// Placeholder recorded for a slot with length 0.
pub const EMPTY_STRING_MARKER: &str = "[EMPTY]";

/// A decoded string-table block.
///
/// Line breaks inside entries are escaped to the two-character sequences `\n` and `\r`, so
/// every entry fits on one line when printed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringTable {
    /// Entries in slot order; unused slots hold [`EMPTY_STRING_MARKER`]
    pub entries: Vec<String>,
}

impl StringTable {
    /// Strings per block.
    pub const STRINGS_PER_BLOCK: u32 = 16;

    /// Compute the string id of slot `index` in block `block_id`.
    ///
    /// Block ids start at 1; block 0 is treated as block 1.
    ///
    /// ```rust
    /// use rsrcscope::resources::StringTable;
    ///
    /// assert_eq!(StringTable::string_id(1, 0), 0);
    /// assert_eq!(StringTable::string_id(7, 3), 99);
    /// ```
    #[must_use]
    pub fn string_id(block_id: u32, index: u32) -> u32 {
        block_id
            .saturating_sub(1)
            .saturating_mul(Self::STRINGS_PER_BLOCK)
            .saturating_add(index)
    }

    /// Returns the number of slots in this block.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the block has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry in slot `index`, or `None` for an unused or missing slot.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries
            .get(index)
            .map(String::as_str)
            .filter(|entry| *entry != EMPTY_STRING_MARKER)
    }

    /// Iterate `(string id, entry)` pairs for the used slots, given the block id of this table.
    pub fn strings(&self, block_id: u32) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.as_str() != EMPTY_STRING_MARKER)
            .map(move |(index, entry)| {
                let index = u32::try_from(index).unwrap_or(u32::MAX);
                (Self::string_id(block_id, index), entry.as_str())
            })
    }
}

/// Decode a string-table block with the default [`DecoderConfig`].
///
/// # Errors
/// Returns [`crate::Error::Empty`] if `data` is empty.
pub fn decode_string_table(data: &[u8]) -> Result<StringTable> {
    decode_string_table_with(data, &DecoderConfig::default())
}

/// Decode a string-table block.
///
/// A slot whose declared length runs past the end of the buffer is clamped to the code units
/// that remain when `config.clamp_string_lengths` is set, and logged at `warn`.
///
/// # Errors
/// - [`crate::Error::Empty`] if `data` is empty
/// - [`crate::Error::OutOfBounds`] if a slot overruns the buffer and clamping is disabled
pub fn decode_string_table_with(data: &[u8], config: &DecoderConfig) -> Result<StringTable> {
    if data.is_empty() {
        return Err(Error::Empty);
    }

    let mut parser = Parser::new(data);
    let mut entries = Vec::new();

    while parser.remaining() >= 2 {
        let declared = usize::from(parser.read_le::<u16>()?);
        if declared == 0 {
            entries.push(EMPTY_STRING_MARKER.to_string());
            continue;
        }

        let available = parser.remaining() / 2;
        let length = if declared > available {
            if !config.clamp_string_lengths {
                return Err(out_of_bounds_error!());
            }

            log::warn!(
                "String table slot {} declares {} units at offset 0x{:X}, only {} remain",
                entries.len(),
                declared,
                parser.pos(),
                available
            );
            available
        } else {
            declared
        };

        let value = parser.read_wide_string_units(length)?;
        entries.push(value.replace('\n', "\\n").replace('\r', "\\r"));
    }

    if parser.has_more_data() {
        log::trace!("Ignoring trailing byte at the end of a string table");
    }

    Ok(StringTable { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::BlobBuilder;

    #[test]
    fn slots_and_markers() {
        let mut b = BlobBuilder::new();
        b.u16(0).u16(5).wide_raw("Hello").u16(0).u16(4).wide_raw("a\r\nb");
        let table = decode_string_table(&b.build()).unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(table.entries[0], EMPTY_STRING_MARKER);
        assert_eq!(table.entries[1], "Hello");
        assert_eq!(table.entries[3], "a\\r\\nb");

        assert_eq!(table.get(0), None);
        assert_eq!(table.get(1), Some("Hello"));
        assert_eq!(table.get(16), None);

        let ids: Vec<(u32, &str)> = table.strings(2).collect();
        assert_eq!(ids, vec![(17, "Hello"), (19, "a\\r\\nb")]);
    }

    #[test]
    fn overrun_is_clamped() {
        let mut b = BlobBuilder::new();
        b.u16(100).wide_raw("abc");
        let data = b.build();

        let table = decode_string_table(&data).unwrap();
        assert_eq!(table.entries, vec!["abc".to_string()]);

        assert!(matches!(
            decode_string_table_with(&data, &DecoderConfig::strict()),
            Err(Error::OutOfBounds)
        ));
    }

    #[test]
    fn odd_trailing_byte() {
        let mut b = BlobBuilder::new();
        b.u16(1).wide_raw("x").u8(0xFF);
        let table = decode_string_table(&b.build()).unwrap();
        assert_eq!(table.entries, vec!["x".to_string()]);
    }

    #[test]
    fn string_ids() {
        assert_eq!(StringTable::string_id(1, 15), 15);
        assert_eq!(StringTable::string_id(2, 0), 16);
        assert_eq!(StringTable::string_id(0, 4), 4);
    }
}
