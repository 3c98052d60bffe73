//! Section headers and RVA to file offset translation.

use crate::{file::parser::Parser, Error, Result};

/// The subset of an `IMAGE_SECTION_HEADER` needed to translate addresses.
///
/// Values are plain copies; the header can be built by hand, decoded from the 40-byte on-disk
/// record with [`SectionHeader::read`], or converted from a `goblin` section table entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionHeader {
    /// Section name with trailing NUL bytes removed
    pub name: String,
    /// Size of the section once loaded into memory
    pub virtual_size: u32,
    /// Address of the section relative to the image base
    pub virtual_address: u32,
    /// Size of the initialized data on disk
    pub size_of_raw_data: u32,
    /// File offset of the section data, 0 for sections without raw data
    pub pointer_to_raw_data: u32,
}

impl SectionHeader {
    /// Size of an `IMAGE_SECTION_HEADER` record on disk.
    pub const SIZE: usize = 40;

    /// Create a section header from its individual fields.
    #[must_use]
    pub fn new(
        name: &str,
        virtual_address: u32,
        virtual_size: u32,
        size_of_raw_data: u32,
        pointer_to_raw_data: u32,
    ) -> Self {
        SectionHeader {
            name: name.to_string(),
            virtual_size,
            virtual_address,
            size_of_raw_data,
            pointer_to_raw_data,
        }
    }

    /// Decode one `IMAGE_SECTION_HEADER` at the parser position.
    ///
    /// The relocation, line-number and characteristics fields are consumed but not kept.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than 40 bytes remain.
    pub fn read(parser: &mut Parser) -> Result<Self> {
        parser.ensure_remaining(Self::SIZE)?;

        let name = parser.read_fixed_ascii(8)?;
        let virtual_size = parser.read_le::<u32>()?;
        let virtual_address = parser.read_le::<u32>()?;
        let size_of_raw_data = parser.read_le::<u32>()?;
        let pointer_to_raw_data = parser.read_le::<u32>()?;
        // PointerToRelocations, PointerToLinenumbers, the two counts and Characteristics
        parser.advance_by(16)?;

        Ok(SectionHeader {
            name,
            virtual_size,
            virtual_address,
            size_of_raw_data,
            pointer_to_raw_data,
        })
    }

    /// Decode `count` consecutive section headers from `data`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the table is truncated.
    pub fn read_table(data: &[u8], count: usize) -> Result<Vec<Self>> {
        let mut parser = Parser::new(data);
        parser.ensure_remaining(count.saturating_mul(Self::SIZE))?;

        let mut sections = Vec::with_capacity(count);
        for _ in 0..count {
            sections.push(Self::read(&mut parser)?);
        }
        Ok(sections)
    }

    fn translate(&self, rva: u32) -> Result<u32> {
        let offset = u64::from(rva) - u64::from(self.virtual_address)
            + u64::from(self.pointer_to_raw_data);
        u32::try_from(offset).map_err(|_| {
            malformed_error!(
                "Section {} maps RVA 0x{:X} past the 32-bit file range",
                self.name,
                rva
            )
        })
    }

    fn contains(&self, rva: u32, size: u32) -> bool {
        let start = u64::from(self.virtual_address);
        let end = start + u64::from(size);
        (start..=end).contains(&u64::from(rva))
    }
}

impl From<&goblin::pe::section_table::SectionTable> for SectionHeader {
    fn from(section: &goblin::pe::section_table::SectionTable) -> Self {
        let name = section.real_name.clone().unwrap_or_else(|| {
            String::from_utf8_lossy(&section.name)
                .trim_end_matches('\0')
                .to_string()
        });

        SectionHeader {
            name,
            virtual_size: section.virtual_size,
            virtual_address: section.virtual_address,
            size_of_raw_data: section.size_of_raw_data,
            pointer_to_raw_data: section.pointer_to_raw_data,
        }
    }
}

/// Converts a relative virtual address (RVA) to a file offset.
///
/// Resolution order is fixed and acts as the tie-break between overlapping sections:
///
/// 1. A section whose `virtual_address` equals `rva` exactly wins, regardless of its sizes. If
///    that section has no raw data (`pointer_to_raw_data == 0`) the RVA is not mapped.
/// 2. Otherwise sections are scanned in table order, skipping those with
///    `pointer_to_raw_data == 0`. The first section whose `[virtual_address, virtual_address +
///    virtual_size]` range (when `virtual_size != 0`) or `[virtual_address, virtual_address +
///    size_of_raw_data]` range (when `size_of_raw_data != 0`) contains `rva` wins. Both bounds
///    are inclusive.
///
/// # Arguments
///
/// * `rva` - The relative virtual address to convert
/// * `sections` - The section table of the image
///
/// # Errors
///
/// - [`crate::Error::InvalidRva`] if `rva` is 0
/// - [`crate::Error::Empty`] if `sections` is empty
/// - [`crate::Error::RvaNotMapped`] if no section maps `rva`
pub fn rva_to_offset(rva: u32, sections: &[SectionHeader]) -> Result<u32> {
    if rva == 0 {
        return Err(Error::InvalidRva);
    }

    if sections.is_empty() {
        return Err(Error::Empty);
    }

    if let Some(section) = sections.iter().find(|s| s.virtual_address == rva) {
        if section.pointer_to_raw_data == 0 {
            log::debug!(
                "RVA 0x{rva:08X} starts section {}, which has no raw data",
                section.name
            );
            return Err(Error::RvaNotMapped(rva));
        }
        return section.translate(rva);
    }

    for section in sections {
        if section.pointer_to_raw_data == 0 {
            continue;
        }

        if section.virtual_size != 0 && section.contains(rva, section.virtual_size) {
            return section.translate(rva);
        }

        if section.size_of_raw_data != 0 && section.contains(rva, section.size_of_raw_data) {
            return section.translate(rva);
        }
    }

    log::debug!("RVA 0x{rva:08X} is not covered by any of {} sections", sections.len());
    Err(Error::RvaNotMapped(rva))
}
