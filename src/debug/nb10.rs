use crate::{file::parser::Parser, Error, Result};

/// A PDB 2.0 `NB10` CodeView record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Nb10ProgramDatabase {
    /// `NB10` as a little-endian u32
    pub signature: u32,
    /// Offset of the debug information, always 0 for a separate PDB
    pub offset: u32,
    /// Timestamp shared with the PDB
    pub timestamp: u32,
    /// Incremented on each PDB update
    pub age: u32,
    /// File name or path of the PDB
    pub pdb_name: String,
}

impl Nb10ProgramDatabase {
    /// `"NB10"` read as a little-endian u32.
    pub const SIGNATURE: u32 = u32::from_le_bytes(*b"NB10");
}

/// Decode an `NB10` record.
///
/// # Errors
/// - [`crate::Error::Empty`] if `data` is empty
/// - [`crate::Error::SignatureMismatch`] if the record does not start with `NB10`
/// - [`crate::Error::OutOfBounds`] if the fixed fields or the name are missing
pub fn decode_nb10(data: &[u8]) -> Result<Nb10ProgramDatabase> {
    if data.is_empty() {
        return Err(Error::Empty);
    }

    let mut parser = Parser::new(data);
    let signature = parser.read_le::<u32>()?;
    if signature != Nb10ProgramDatabase::SIGNATURE {
        return Err(Error::SignatureMismatch {
            expected: Nb10ProgramDatabase::SIGNATURE,
            found: signature,
        });
    }

    Ok(Nb10ProgramDatabase {
        signature,
        offset: parser.read_le::<u32>()?,
        timestamp: parser.read_le::<u32>()?,
        age: parser.read_le::<u32>()?,
        pdb_name: parser.read_ascii_string()?,
    })
}
