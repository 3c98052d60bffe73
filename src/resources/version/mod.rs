//! Version information (`RT_VERSION`).
//!
//! A version resource is a tree of length-prefixed blocks. Every block starts with the same
//! header (`wLength`, `wValueLength`, `wType`, a NUL-terminated UTF-16 key) and is DWORD aligned:
//!
//! ```text
//! VS_VERSION_INFO
//! ├── VS_FIXEDFILEINFO            (if wValueLength > 0)
//! ├── StringFileInfo
//! │   └── StringTable "040904B0"  (one per language/code page)
//! │       └── String "ProductName" = "..."
//! └── VarFileInfo
//!     └── Var "Translation" = [0x0409, 0x04B0], ...
//! ```
//!
//! The root may carry zero, one or two children in either order. Which one follows is not
//! tagged; the decoder peeks at the child's key (six bytes into the block) before committing.
//!
//! # Key Components
//!
//! - [`crate::resources::VersionInfo`] - The decoded root block with convenience accessors
//! - [`crate::resources::FixedFileInfo`] - The binary `VS_FIXEDFILEINFO` block
//! - [`crate::resources::StringFileInfo`] / [`crate::resources::VarFileInfo`] - The two children
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use rsrcscope::resources::decode_version_info;
//!
//! let data = std::fs::read("version.bin")?;
//! let info = decode_version_info(&data)?;
//!
//! if let Some((major, minor, build, revision)) = info.file_version() {
//!     println!("{major}.{minor}.{build}.{revision}");
//! }
//! println!("{:?}", info.string_value("CompanyName"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod fixed;
mod stringfileinfo;
mod varfileinfo;

pub use fixed::{FileFlags, FixedFileInfo};
pub use stringfileinfo::{StringData, StringFileInfo, StringTableBlock};
pub use varfileinfo::{LanguageCodePage, VarData, VarFileInfo};

use crate::{file::parser::Parser, DecoderConfig, Error, Result};

const VS_VERSION_INFO_KEY: &str = "VS_VERSION_INFO";
const STRING_FILE_INFO_KEY: &str = "StringFileInfo";
const VAR_FILE_INFO_KEY: &str = "VarFileInfo";

/// The header shared by every block of a version resource.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VersionHeader {
    /// Length of the block in bytes, children included
    pub length: u16,
    /// Length of the value; bytes for binary values, UTF-16 units for text
    pub value_length: u16,
    /// 1 for text values, 0 for binary values
    pub value_type: u16,
    /// The block key
    pub key: String,
}

impl VersionHeader {
    fn read(parser: &mut Parser) -> Result<Self> {
        Ok(VersionHeader {
            length: parser.read_le::<u16>()?,
            value_length: parser.read_le::<u16>()?,
            value_type: parser.read_le::<u16>()?,
            key: parser.read_wide_string()?,
        })
    }

    /// Read a header and require its key to be `expected`.
    fn read_expecting(parser: &mut Parser, expected: &'static str) -> Result<Self> {
        let header = Self::read(parser)?;
        if header.key != expected {
            return Err(Error::KeyMismatch {
                expected,
                found: header.key,
            });
        }
        Ok(header)
    }

    /// Absolute end offset of the block that started at `start`.
    fn end(&self, start: usize, parser: &Parser) -> Result<usize> {
        let end = start
            .checked_add(usize::from(self.length))
            .ok_or(out_of_bounds_error!())?;
        if end > parser.len() {
            return Err(out_of_bounds_error!());
        }
        Ok(end)
    }
}

/// Move past the end of a block that started at `start` and align to the next DWORD.
///
/// Never moves backwards, so a block whose declared length undershoots its content still makes
/// progress.
fn finish_block(parser: &mut Parser, start: usize, header: &VersionHeader) -> Result<()> {
    let end = header.end(start, parser)?;
    if end > parser.pos() {
        parser.seek(end)?;
    }
    parser.align(4);
    Ok(())
}

/// A decoded `VS_VERSIONINFO` resource.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VersionInfo {
    /// Root block header; its key is always `VS_VERSION_INFO`
    pub header: VersionHeader,
    /// Padding between the header and the fixed file info
    pub padding1: Vec<u8>,
    /// The fixed file info, present when the root's value length is non-zero
    pub fixed_file_info: Option<FixedFileInfo>,
    /// Padding between the fixed file info and the children
    pub padding2: Vec<u8>,
    /// String information child
    pub string_file_info: Option<StringFileInfo>,
    /// Variable information child
    pub var_file_info: Option<VarFileInfo>,
}

impl VersionInfo {
    /// The file version from the fixed file info as `(major, minor, build, revision)`.
    #[must_use]
    pub fn file_version(&self) -> Option<(u16, u16, u16, u16)> {
        self.fixed_file_info.as_ref().map(FixedFileInfo::file_version)
    }

    /// The product version from the fixed file info as `(major, minor, build, revision)`.
    #[must_use]
    pub fn product_version(&self) -> Option<(u16, u16, u16, u16)> {
        self.fixed_file_info
            .as_ref()
            .map(FixedFileInfo::product_version)
    }

    /// Look up a string value such as `"ProductName"` across all string tables.
    ///
    /// The first table that defines `key` wins.
    #[must_use]
    pub fn string_value(&self, key: &str) -> Option<&str> {
        self.string_file_info
            .as_ref()?
            .tables
            .iter()
            .find_map(|table| table.get(key))
    }

    /// All language/code page pairs announced by the `Translation` entries.
    #[must_use]
    pub fn translations(&self) -> Vec<LanguageCodePage> {
        self.var_file_info
            .as_ref()
            .map(|info| {
                info.children
                    .iter()
                    .flat_map(|var| var.translations.iter().copied())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Decode a version resource with the default [`DecoderConfig`].
///
/// # Errors
/// See [`decode_version_info_with`].
pub fn decode_version_info(data: &[u8]) -> Result<VersionInfo> {
    decode_version_info_with(data, &DecoderConfig::default())
}

/// Decode a version resource.
///
/// # Errors
/// - [`crate::Error::Empty`] if `data` is empty
/// - [`crate::Error::KeyMismatch`] if the root key is not `VS_VERSION_INFO`, or a
///   `StringFileInfo`, `VarFileInfo` or `Translation` block is keyed differently
/// - [`crate::Error::SignatureMismatch`] if the fixed file info does not start with `0xFEEF04BD`
/// - [`crate::Error::LimitExceeded`] if a block has more children than `max_declared_count`
/// - [`crate::Error::OutOfBounds`] if any block is truncated
pub fn decode_version_info_with(data: &[u8], config: &DecoderConfig) -> Result<VersionInfo> {
    if data.is_empty() {
        return Err(Error::Empty);
    }

    let mut parser = Parser::new(data);
    let start = parser.pos();

    let header = VersionHeader::read_expecting(&mut parser, VS_VERSION_INFO_KEY)?;
    let padding1 = parser.align(4).to_vec();

    let fixed_file_info = if header.value_length > 0 {
        Some(FixedFileInfo::read(&mut parser)?)
    } else {
        None
    };
    let padding2 = parser.align(4).to_vec();

    let end = header.end(start, &parser)?;
    let mut string_file_info = None;
    let mut var_file_info = None;

    for _ in 0..2 {
        if parser.pos() >= end {
            break;
        }

        let Some(key) = peek_child_key(&parser) else {
            break;
        };

        match key.as_str() {
            STRING_FILE_INFO_KEY => {
                log::debug!("StringFileInfo at 0x{:X}", parser.pos());
                string_file_info = Some(StringFileInfo::read(&mut parser, config)?);
            }
            VAR_FILE_INFO_KEY => {
                log::debug!("VarFileInfo at 0x{:X}", parser.pos());
                var_file_info = Some(VarFileInfo::read(&mut parser, config)?);
            }
            other => {
                log::warn!(
                    "Unknown version info child '{}' at 0x{:X}",
                    other,
                    parser.pos()
                );
                break;
            }
        }
    }

    Ok(VersionInfo {
        header,
        padding1,
        fixed_file_info,
        padding2,
        string_file_info,
        var_file_info,
    })
}

/// Read the key of the block at the cursor without moving it.
fn peek_child_key(parser: &Parser) -> Option<String> {
    let mut probe = Parser::new(parser.data());
    probe.seek(parser.pos().checked_add(6)?).ok()?;
    probe.peek_wide_string().ok().map(|(key, _)| key)
}
