use bitflags::bitflags;

use crate::{file::parser::Parser, Error, Result};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// File attribute flags of a `VS_FIXEDFILEINFO` (`dwFileFlags`)
    pub struct FileFlags: u32 {
        /// The file contains debugging information
        const DEBUG = 0x0000_0001;
        /// The file is a development version
        const PRERELEASE = 0x0000_0002;
        /// The file has been modified and differs from the original shipping file
        const PATCHED = 0x0000_0004;
        /// The file was not built using standard release procedures
        const PRIVATEBUILD = 0x0000_0008;
        /// The version structure was created dynamically
        const INFOINFERRED = 0x0000_0010;
        /// A variation of the normal file of the same version number
        const SPECIALBUILD = 0x0000_0020;
    }
}

/// A `VS_FIXEDFILEINFO` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedFileInfo {
    /// Always `0xFEEF04BD`
    pub signature: u32,
    /// Structure version, high word major, low word minor
    pub struct_version: u32,
    /// High 32 bits of the file version
    pub file_version_ms: u32,
    /// Low 32 bits of the file version
    pub file_version_ls: u32,
    /// High 32 bits of the product version
    pub product_version_ms: u32,
    /// Low 32 bits of the product version
    pub product_version_ls: u32,
    /// Which bits of `file_flags` are valid
    pub file_flags_mask: u32,
    /// File attribute flags
    pub file_flags: FileFlags,
    /// Target operating system (`VOS_*`)
    pub file_os: u32,
    /// General file type (`VFT_*`)
    pub file_type: u32,
    /// File subtype, meaning depends on `file_type`
    pub file_subtype: u32,
    /// High 32 bits of the creation timestamp
    pub file_date_ms: u32,
    /// Low 32 bits of the creation timestamp
    pub file_date_ls: u32,
}

impl FixedFileInfo {
    /// Magic value every `VS_FIXEDFILEINFO` starts with.
    pub const SIGNATURE: u32 = 0xFEEF_04BD;

    /// Size of the block on disk.
    pub const SIZE: usize = 52;

    pub(crate) fn read(parser: &mut Parser) -> Result<Self> {
        let signature = parser.read_le::<u32>()?;
        if signature != Self::SIGNATURE {
            return Err(Error::SignatureMismatch {
                expected: Self::SIGNATURE,
                found: signature,
            });
        }

        Ok(FixedFileInfo {
            signature,
            struct_version: parser.read_le::<u32>()?,
            file_version_ms: parser.read_le::<u32>()?,
            file_version_ls: parser.read_le::<u32>()?,
            product_version_ms: parser.read_le::<u32>()?,
            product_version_ls: parser.read_le::<u32>()?,
            file_flags_mask: parser.read_le::<u32>()?,
            file_flags: FileFlags::from_bits_retain(parser.read_le::<u32>()?),
            file_os: parser.read_le::<u32>()?,
            file_type: parser.read_le::<u32>()?,
            file_subtype: parser.read_le::<u32>()?,
            file_date_ms: parser.read_le::<u32>()?,
            file_date_ls: parser.read_le::<u32>()?,
        })
    }

    /// File version as `(major, minor, build, revision)`.
    #[must_use]
    pub fn file_version(&self) -> (u16, u16, u16, u16) {
        split_version(self.file_version_ms, self.file_version_ls)
    }

    /// Product version as `(major, minor, build, revision)`.
    #[must_use]
    pub fn product_version(&self) -> (u16, u16, u16, u16) {
        split_version(self.product_version_ms, self.product_version_ls)
    }

    /// The file flags restricted to the bits marked valid by `file_flags_mask`.
    #[must_use]
    pub fn effective_flags(&self) -> FileFlags {
        FileFlags::from_bits_retain(self.file_flags.bits() & self.file_flags_mask)
    }

    /// The 64-bit creation timestamp.
    #[must_use]
    pub fn file_date(&self) -> u64 {
        (u64::from(self.file_date_ms) << 32) | u64::from(self.file_date_ls)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn split_version(ms: u32, ls: u32) -> (u16, u16, u16, u16) {
    (
        (ms >> 16) as u16,
        (ms & 0xFFFF) as u16,
        (ls >> 16) as u16,
        (ls & 0xFFFF) as u16,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::factories;

    #[test]
    fn read_fixed_file_info() {
        let data = factories::fixed_file_info(0x000A_0002, 0x4A61_0001, 0x000A_0000, 0, 0x3F);
        let mut parser = Parser::new(&data);
        let info = FixedFileInfo::read(&mut parser).unwrap();

        assert_eq!(parser.pos(), FixedFileInfo::SIZE);
        assert_eq!(info.file_version(), (10, 2, 0x4A61, 1));
        assert_eq!(info.product_version(), (10, 0, 0, 0));
        assert_eq!(info.file_flags, FileFlags::all());
        assert_eq!(
            info.effective_flags(),
            FileFlags::DEBUG | FileFlags::PRERELEASE
        );
        assert_eq!(info.file_date(), 0);
    }
}
