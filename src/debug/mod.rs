//! CodeView program-database references.
//!
//! The `IMAGE_DEBUG_TYPE_CODEVIEW` entry of a PE debug directory points at a small record naming
//! the PDB that holds the image's symbols. Two layouts are in use:
//!
//! - [`crate::debug::Nb10ProgramDatabase`] - the PDB 2.0 `NB10` record, keyed by a timestamp
//! - [`crate::debug::RsdsProgramDatabase`] - the PDB 7.0 `RSDS` record, keyed by a GUID
//!
//! [`crate::debug::decode_codeview`] picks the layout from the leading signature.
//!
//! # Usage Examples
//!
//! ```rust
//! use rsrcscope::debug::{decode_codeview, CodeViewRecord};
//!
//! let mut data = b"NB10".to_vec();
//! data.extend_from_slice(&[0; 4]);                   // offset
//! data.extend_from_slice(&0x3A1B_2C4Du32.to_le_bytes()); // timestamp
//! data.extend_from_slice(&2u32.to_le_bytes());       // age
//! data.extend_from_slice(b"app.pdb\0");
//!
//! match decode_codeview(&data)? {
//!     CodeViewRecord::Nb10(record) => assert_eq!(record.pdb_name, "app.pdb"),
//!     CodeViewRecord::Rsds(_) => unreachable!(),
//! }
//! # Ok::<(), rsrcscope::Error>(())
//! ```

mod nb10;
mod rsds;

pub use nb10::{decode_nb10, Nb10ProgramDatabase};
pub use rsds::{decode_rsds, RsdsProgramDatabase};

use crate::{file::io::read_le, Error, Result};

/// Either CodeView layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeViewRecord {
    /// PDB 2.0 reference
    Nb10(Nb10ProgramDatabase),
    /// PDB 7.0 reference
    Rsds(RsdsProgramDatabase),
}

impl CodeViewRecord {
    /// Path or file name of the referenced PDB.
    #[must_use]
    pub fn pdb_path(&self) -> &str {
        match self {
            CodeViewRecord::Nb10(record) => &record.pdb_name,
            CodeViewRecord::Rsds(record) => &record.path,
        }
    }

    /// Age of the referenced PDB.
    #[must_use]
    pub fn age(&self) -> u32 {
        match self {
            CodeViewRecord::Nb10(record) => record.age,
            CodeViewRecord::Rsds(record) => record.age,
        }
    }
}

/// Decode a CodeView record of either layout.
///
/// # Errors
/// - [`crate::Error::Empty`] if `data` is empty
/// - [`crate::Error::NotSupported`] for any other signature (for example `NB09` or `NB11`)
/// - [`crate::Error::OutOfBounds`] if the record is truncated
pub fn decode_codeview(data: &[u8]) -> Result<CodeViewRecord> {
    if data.is_empty() {
        return Err(Error::Empty);
    }

    match read_le::<u32>(data)? {
        Nb10ProgramDatabase::SIGNATURE => decode_nb10(data).map(CodeViewRecord::Nb10),
        RsdsProgramDatabase::SIGNATURE => decode_rsds(data).map(CodeViewRecord::Rsds),
        other => {
            log::debug!("Unsupported CodeView signature 0x{other:08X}");
            Err(Error::NotSupported)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::factories;

    #[test]
    fn dispatch_by_signature() {
        let nb10 = decode_codeview(&factories::nb10_record()).unwrap();
        assert_eq!(nb10.pdb_path(), "C:\\build\\app.pdb");
        assert_eq!(nb10.age(), 3);

        let rsds = decode_codeview(&factories::rsds_record()).unwrap();
        assert!(matches!(rsds, CodeViewRecord::Rsds(_)));
        assert_eq!(rsds.age(), 1);

        assert!(matches!(
            decode_codeview(b"NB09\0\0\0\0"),
            Err(Error::NotSupported)
        ));
        assert!(matches!(decode_codeview(b"RS"), Err(Error::OutOfBounds)));
        assert!(matches!(decode_codeview(&[]), Err(Error::Empty)));
    }
}
