//! Accelerator tables (`RT_ACCELERATOR`).
//!
//! An accelerator table is a flat array of fixed 8-byte `ACCELTABLEENTRY` records. The last
//! record carries the `0x80` end marker in its flags, but the table length is what bounds the
//! decode.

use bitflags::bitflags;

use crate::{file::parser::Parser, DecoderConfig, Error, Result};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Accelerator key flags (`fFlags`)
    pub struct AcceleratorFlags: u16 {
        /// The `ansi` field is a virtual-key code, not a character
        const FVIRTKEY = 0x0001;
        /// No top-level menu item is highlighted when the accelerator is used
        const FNOINVERT = 0x0002;
        /// SHIFT must be held
        const FSHIFT = 0x0004;
        /// CTRL must be held
        const FCONTROL = 0x0008;
        /// ALT must be held
        const FALT = 0x0010;
        /// Last entry of the table
        const END = 0x0080;
    }
}

/// One `ACCELTABLEENTRY` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceleratorTableEntry {
    /// Modifier and interpretation flags
    pub flags: AcceleratorFlags,
    /// Character code or virtual-key code, depending on [`AcceleratorFlags::FVIRTKEY`]
    pub ansi: u16,
    /// Command identifier sent when the accelerator fires
    pub id: u16,
    /// Padding to the 8-byte record size
    pub padding: u16,
}

impl AcceleratorTableEntry {
    /// Size of a record on disk.
    pub const SIZE: usize = 8;

    fn read(parser: &mut Parser) -> Result<Self> {
        Ok(AcceleratorTableEntry {
            flags: AcceleratorFlags::from_bits_retain(parser.read_le::<u16>()?),
            ansi: parser.read_le::<u16>()?,
            id: parser.read_le::<u16>()?,
            padding: parser.read_le::<u16>()?,
        })
    }
}

/// Decode an accelerator table with the default [`DecoderConfig`].
///
/// # Errors
/// - [`crate::Error::Empty`] if `data` is empty
/// - [`crate::Error::Malformed`] if the length is not a multiple of 8
pub fn decode_accelerators(data: &[u8]) -> Result<Vec<AcceleratorTableEntry>> {
    decode_accelerators_with(data, &DecoderConfig::default())
}

/// Decode an accelerator table.
///
/// # Errors
/// See [`decode_accelerators`]; additionally [`crate::Error::LimitExceeded`] if the table holds
/// more records than `config.max_declared_count`.
pub fn decode_accelerators_with(
    data: &[u8],
    config: &DecoderConfig,
) -> Result<Vec<AcceleratorTableEntry>> {
    if data.is_empty() {
        return Err(Error::Empty);
    }

    if data.len() % AcceleratorTableEntry::SIZE != 0 {
        return Err(malformed_error!(
            "Accelerator table length {} is not a multiple of {}",
            data.len(),
            AcceleratorTableEntry::SIZE
        ));
    }

    let count = data.len() / AcceleratorTableEntry::SIZE;
    config.check_len("accelerator", count)?;

    let mut parser = Parser::new(data);
    let mut entries = Vec::with_capacity(count);
    for _ in 0..count {
        entries.push(AcceleratorTableEntry::read(&mut parser)?);
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_entries() {
        #[rustfmt::skip]
        let data = [
            0x09, 0x00, 0x41, 0x00, 0x64, 0x00, 0x00, 0x00, // FVIRTKEY|FCONTROL, 'A', 100
            0x81, 0x00, 0x74, 0x00, 0x65, 0x00, 0xCC, 0xDD, // FVIRTKEY|END, VK_F5, 101
        ];

        let entries = decode_accelerators(&data).unwrap();
        assert_eq!(entries.len(), 2);

        assert_eq!(
            entries[0].flags,
            AcceleratorFlags::FVIRTKEY | AcceleratorFlags::FCONTROL
        );
        assert_eq!(entries[0].ansi, 0x41);
        assert_eq!(entries[0].id, 100);
        assert_eq!(entries[0].padding, 0);

        assert!(entries[1].flags.contains(AcceleratorFlags::END));
        assert_eq!(entries[1].ansi, 0x74);
        assert_eq!(entries[1].id, 101);
        assert_eq!(entries[1].padding, 0xDDCC);
    }

    #[test]
    fn length_not_multiple_of_eight() {
        assert!(matches!(
            decode_accelerators(&[0u8; 15]),
            Err(Error::Malformed { .. })
        ));
        assert!(matches!(decode_accelerators(&[]), Err(Error::Empty)));
    }

    #[test]
    fn count_limit() {
        let config = DecoderConfig {
            max_declared_count: 1,
            ..DecoderConfig::default()
        };
        assert!(matches!(
            decode_accelerators_with(&[0u8; 16], &config),
            Err(Error::LimitExceeded { declared: 2, .. })
        ));
    }
}
