use uguid::Guid;

use crate::{file::parser::Parser, Error, Result};

/// A PDB 7.0 `RSDS` CodeView record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsdsProgramDatabase {
    /// `RSDS` as a little-endian u32
    pub signature: u32,
    /// Unique identifier shared with the PDB
    pub guid: Guid,
    /// Incremented on each PDB update
    pub age: u32,
    /// Path of the PDB at link time
    pub path: String,
}

impl RsdsProgramDatabase {
    /// `"RSDS"` read as a little-endian u32.
    pub const SIGNATURE: u32 = u32::from_le_bytes(*b"RSDS");

    /// The identifier symbol servers file this PDB under: the GUID as 32 upper-case hex digits
    /// without separators, followed by the age in hex.
    ///
    /// ```rust
    /// use rsrcscope::debug::RsdsProgramDatabase;
    ///
    /// let record = RsdsProgramDatabase {
    ///     signature: RsdsProgramDatabase::SIGNATURE,
    ///     guid: uguid::guid!("01234567-89ab-cdef-0123-456789abcdef"),
    ///     age: 26,
    ///     path: "app.pdb".to_string(),
    /// };
    /// assert_eq!(record.symbol_server_id(), "0123456789ABCDEF0123456789ABCDEF1A");
    /// ```
    #[must_use]
    pub fn symbol_server_id(&self) -> String {
        let guid: String = self
            .guid
            .to_string()
            .chars()
            .filter(|c| *c != '-')
            .collect();
        format!("{}{:X}", guid.to_ascii_uppercase(), self.age)
    }
}

/// Decode an `RSDS` record.
///
/// # Errors
/// - [`crate::Error::Empty`] if `data` is empty
/// - [`crate::Error::SignatureMismatch`] if the record does not start with `RSDS`
/// - [`crate::Error::OutOfBounds`] if the GUID, the age or the path is missing
pub fn decode_rsds(data: &[u8]) -> Result<RsdsProgramDatabase> {
    if data.is_empty() {
        return Err(Error::Empty);
    }

    let mut parser = Parser::new(data);
    let signature = parser.read_le::<u32>()?;
    if signature != RsdsProgramDatabase::SIGNATURE {
        return Err(Error::SignatureMismatch {
            expected: RsdsProgramDatabase::SIGNATURE,
            found: signature,
        });
    }

    let mut guid_bytes = [0u8; 16];
    guid_bytes.copy_from_slice(parser.read_bytes(16)?);

    Ok(RsdsProgramDatabase {
        signature,
        guid: Guid::from_bytes(guid_bytes),
        age: parser.read_le::<u32>()?,
        path: parser.read_ascii_string()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::factories;

    #[test]
    fn rsds_record() {
        let record = decode_rsds(&factories::rsds_record()).unwrap();
        assert_eq!(record.signature, 0x5344_5352);
        assert_eq!(record.guid, factories::RSDS_GUID);
        assert_eq!(record.age, 1);
        assert_eq!(record.path, "D:\\a\\_work\\out\\tool.pdb");
        assert_eq!(
            record.symbol_server_id(),
            "0123456789ABCDEF0123456789ABCDEF1"
        );
    }

    #[test]
    fn nb10_is_not_rsds() {
        assert!(matches!(
            decode_rsds(&factories::nb10_record()),
            Err(Error::SignatureMismatch { .. })
        ));
    }

    #[test]
    fn truncated_guid() {
        assert!(matches!(
            decode_rsds(b"RSDS\x01\x02\x03"),
            Err(Error::OutOfBounds)
        ));
    }
}
