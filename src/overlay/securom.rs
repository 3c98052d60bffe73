use crate::{file::parser::Parser, DecoderConfig, Error, Result};

/// Size of a single table entry.
const ENTRY_SIZE: usize = 44;

/// Width of the filename field at the end of each entry.
const FILENAME_SIZE: usize = 12;

/// Offset the header continues at when the version string is empty.
const EMPTY_VERSION_RESUME: usize = 0x10;

/// One file described by the `AddD` table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SecuRomAddDEntry {
    /// File offset of the payload
    pub physical_offset: u32,
    /// Length of the payload in bytes
    pub length: u32,
    /// Undocumented fields
    pub unknown: [u32; 6],
    /// NUL-padded file name
    pub filename: String,
}

impl SecuRomAddDEntry {
    fn read(parser: &mut Parser) -> Result<Self> {
        let physical_offset = parser.read_le::<u32>()?;
        let length = parser.read_le::<u32>()?;

        let mut unknown = [0u32; 6];
        for field in &mut unknown {
            *field = parser.read_le::<u32>()?;
        }

        Ok(SecuRomAddDEntry {
            physical_offset,
            length,
            unknown,
            filename: parser.read_fixed_ascii(FILENAME_SIZE)?,
        })
    }
}

/// The SecuROM `AddD` overlay header and its entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SecuRomAddD {
    /// `AddD` as a little-endian u32
    pub signature: u32,
    /// Declared number of entries
    pub entry_count: u32,
    /// Wrapper version, for example `4.85.07`
    pub version: String,
    /// Build identifier
    pub build: [u8; 4],
    /// Undocumented block between header and entries, 44 or 112 bytes
    pub unknown: Vec<u8>,
    /// Table entries
    pub entries: Vec<SecuRomAddDEntry>,
}

impl SecuRomAddD {
    /// `"AddD"` read as a little-endian u32.
    pub const SIGNATURE: u32 = u32::from_le_bytes(*b"AddD");

    /// Size of the block preceding the entries for a given wrapper version.
    ///
    /// Versions 3.x and 4.47 as well as tables without a version carry the short block.
    ///
    /// ```rust
    /// use rsrcscope::overlay::SecuRomAddD;
    ///
    /// assert_eq!(SecuRomAddD::unknown_block_size(""), 44);
    /// assert_eq!(SecuRomAddD::unknown_block_size("3.17.00"), 44);
    /// assert_eq!(SecuRomAddD::unknown_block_size("4.47.00"), 44);
    /// assert_eq!(SecuRomAddD::unknown_block_size("4.85.07"), 112);
    /// ```
    #[must_use]
    pub fn unknown_block_size(version: &str) -> usize {
        if version.is_empty() || version.starts_with('3') || version.starts_with("4.47") {
            44
        } else {
            112
        }
    }

    /// Look up an entry by file name.
    #[must_use]
    pub fn entry(&self, filename: &str) -> Option<&SecuRomAddDEntry> {
        self.entries.iter().find(|entry| entry.filename == filename)
    }
}

/// Decode an `AddD` table with the default [`DecoderConfig`].
///
/// # Errors
/// See [`decode_securom_addd_with`].
pub fn decode_securom_addd(data: &[u8]) -> Result<SecuRomAddD> {
    decode_securom_addd_with(data, &DecoderConfig::default())
}

/// Decode an `AddD` table.
///
/// # Errors
/// - [`crate::Error::Empty`] if `data` is empty
/// - [`crate::Error::SignatureMismatch`] if the data does not start with `AddD`
/// - [`crate::Error::LimitExceeded`] if the entry count exceeds `max_declared_count`
/// - [`crate::Error::OutOfBounds`] if the header or the declared entries are truncated
pub fn decode_securom_addd_with(data: &[u8], config: &DecoderConfig) -> Result<SecuRomAddD> {
    if data.is_empty() {
        return Err(Error::Empty);
    }

    let mut parser = Parser::new(data);
    let signature = parser.read_le::<u32>()?;
    if signature != SecuRomAddD::SIGNATURE {
        return Err(Error::SignatureMismatch {
            expected: SecuRomAddD::SIGNATURE,
            found: signature,
        });
    }

    let entry_count = parser.read_le::<u32>()?;
    config.check_count("AddD entry", entry_count)?;

    let version = parser.read_ascii_string()?;
    if version.is_empty() {
        parser.seek(EMPTY_VERSION_RESUME)?;
    }

    let mut build = [0u8; 4];
    build.copy_from_slice(parser.read_bytes(4)?);

    let unknown = parser
        .read_bytes(SecuRomAddD::unknown_block_size(&version))?
        .to_vec();

    let count = usize::try_from(entry_count)
        .map_err(|_| malformed_error!("AddD entry count {} does not fit", entry_count))?;
    parser.ensure_remaining(count.saturating_mul(ENTRY_SIZE))?;

    let mut entries = Vec::with_capacity(count);
    for _ in 0..count {
        entries.push(SecuRomAddDEntry::read(&mut parser)?);
    }

    Ok(SecuRomAddD {
        signature,
        entry_count,
        version,
        build,
        unknown,
        entries,
    })
}
