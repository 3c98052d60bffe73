//! Message tables (`RT_MESSAGETABLE`).
//!
//! The resource starts with a `MESSAGE_RESOURCE_DATA` header: a block count followed by one
//! `MESSAGE_RESOURCE_BLOCK` per block, each naming an inclusive id range and the offset of its
//! entries. Decoding is two-pass: all block headers are read first, then the decoder seeks to
//! each block's entries and reads one `MESSAGE_RESOURCE_ENTRY` per id.
//!
//! Entries of all blocks land in one map keyed by message id. If two blocks cover the same id,
//! the block that comes later in the header wins.
//!
//! The work done is bounded by the input: the ids of all blocks together may not exceed
//! `max_declared_count`, and the entries read across all blocks may not add up to more bytes
//! than the resource holds, so blocks that alias the same entries cannot multiply the work.

use std::collections::BTreeMap;

use crate::{file::parser::Parser, DecoderConfig, Error, Result};

/// Entry flag marking UTF-16 text.
const MESSAGE_RESOURCE_UNICODE: u16 = 0x0001;

/// Size of the fixed part of a `MESSAGE_RESOURCE_ENTRY`.
const ENTRY_HEADER_SIZE: u16 = 4;

/// A `MESSAGE_RESOURCE_BLOCK` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageBlock {
    /// First message id of the block
    pub low_id: u32,
    /// Last message id of the block, inclusive
    pub high_id: u32,
    /// Offset of the block's first entry from the start of the resource
    pub offset_to_entries: u32,
}

/// A `MESSAGE_RESOURCE_ENTRY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    /// Size of the entry in bytes, header included
    pub length: u16,
    /// Encoding flags; `0x0001` is UTF-16, anything else single-byte text
    pub flags: u16,
    /// The message text with trailing NULs removed
    pub text: String,
}

impl MessageEntry {
    /// Returns `true` if the text was stored as UTF-16.
    #[must_use]
    pub fn is_unicode(&self) -> bool {
        self.flags == MESSAGE_RESOURCE_UNICODE
    }
}

/// A decoded message table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageTable {
    /// Block headers in stored order
    pub blocks: Vec<MessageBlock>,
    /// All entries, keyed by message id
    pub entries: BTreeMap<u32, MessageEntry>,
}

impl MessageTable {
    /// Get the text of message `id`.
    #[must_use]
    pub fn message(&self, id: u32) -> Option<&str> {
        self.entries.get(&id).map(|entry| entry.text.as_str())
    }
}

/// Decode a message table with the default [`DecoderConfig`].
///
/// # Errors
/// See [`decode_message_table_with`].
pub fn decode_message_table(data: &[u8]) -> Result<MessageTable> {
    decode_message_table_with(data, &DecoderConfig::default())
}

/// Decode a message table.
///
/// # Errors
/// - [`crate::Error::Empty`] if `data` is empty
/// - [`crate::Error::LimitExceeded`] if the block count, the id span of a block or the total
///   id count exceeds the configured limits, or if the blocks' entries add up to more bytes than
///   `data` holds
/// - [`crate::Error::Malformed`] if a block's range is inverted or an entry is shorter than its
///   header
/// - [`crate::Error::OutOfBounds`] if a block header, offset or entry runs past the buffer
pub fn decode_message_table_with(data: &[u8], config: &DecoderConfig) -> Result<MessageTable> {
    if data.is_empty() {
        return Err(Error::Empty);
    }

    let mut parser = Parser::new(data);

    let block_count = parser.read_le::<u32>()?;
    config.check_count("message block", block_count)?;
    parser.ensure_remaining((block_count as usize).saturating_mul(12))?;

    let mut blocks = Vec::with_capacity(block_count as usize);
    let mut total_ids = 0u64;
    for _ in 0..block_count {
        let block = MessageBlock {
            low_id: parser.read_le::<u32>()?,
            high_id: parser.read_le::<u32>()?,
            offset_to_entries: parser.read_le::<u32>()?,
        };

        if block.high_id < block.low_id {
            return Err(malformed_error!(
                "Message block range {}..={} is inverted",
                block.low_id,
                block.high_id
            ));
        }

        let span = u64::from(block.high_id - block.low_id) + 1;
        if span > u64::from(config.max_message_ids_per_block) {
            return Err(Error::LimitExceeded {
                what: "message id",
                declared: span,
                limit: u64::from(config.max_message_ids_per_block),
            });
        }

        total_ids += span;
        blocks.push(block);
    }

    if total_ids > u64::from(config.max_declared_count) {
        return Err(Error::LimitExceeded {
            what: "message id",
            declared: total_ids,
            limit: u64::from(config.max_declared_count),
        });
    }

    let limit = u64::try_from(data.len()).unwrap_or(u64::MAX);
    let mut consumed = 0u64;
    let mut entries = BTreeMap::new();
    for block in &blocks {
        parser.seek(block.offset_to_entries as usize)?;
        let span = (block.high_id - block.low_id) as usize + 1;
        parser.ensure_remaining(span.saturating_mul(usize::from(ENTRY_HEADER_SIZE)))?;
        log::trace!(
            "Message block {}..={} at 0x{:X}",
            block.low_id,
            block.high_id,
            block.offset_to_entries
        );

        for id in block.low_id..=block.high_id {
            let entry = read_entry(&mut parser)?;
            consumed += u64::from(entry.length);
            if consumed > limit {
                return Err(Error::LimitExceeded {
                    what: "message entry bytes",
                    declared: consumed,
                    limit,
                });
            }
            entries.insert(id, entry);
        }
    }

    Ok(MessageTable { blocks, entries })
}

fn read_entry(parser: &mut Parser) -> Result<MessageEntry> {
    let length = parser.read_le::<u16>()?;
    let flags = parser.read_le::<u16>()?;

    if length < ENTRY_HEADER_SIZE {
        return Err(malformed_error!(
            "Message entry at 0x{:X} declares length {}",
            parser.pos() - 4,
            length
        ));
    }

    let bytes = parser.read_bytes(usize::from(length - ENTRY_HEADER_SIZE))?;
    let text = Parser::decode_text(bytes, flags == MESSAGE_RESOURCE_UNICODE);

    Ok(MessageEntry {
        length,
        flags,
        text: text.trim_end_matches('\0').to_string(),
    })
}
