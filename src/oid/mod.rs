//! Object identifier arc decoding.
//!
//! Authenticode signatures and version-info extensions embed ASN.1 object identifiers. The
//! content octets of an `OBJECT IDENTIFIER` are a run of base-128 subidentifiers, big-endian,
//! where every byte except the last of a subidentifier has its high bit set. The first byte
//! packs the first two arcs together as `(byte / 40, byte % 40)`.
//!
//! This module decodes those content octets into arcs and renders them in dotted form. Names
//! are resolved through an [`crate::oid::OidNameProvider`], so the lookup table stays outside
//! of the decoder.
//!
//! # Usage Examples
//!
//! ```rust
//! use rsrcscope::oid::{parse_arcs, to_dotted, OidNameProvider, StaticOidNames};
//!
//! let data = [0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D];
//! let arcs = parse_arcs(&data, data.len())?;
//! assert_eq!(arcs, vec![1, 2, 840, 113_549]);
//!
//! let dotted = to_dotted(&arcs);
//! assert_eq!(dotted, "1.2.840.113549");
//! assert_eq!(StaticOidNames::well_known().name(&dotted), Some("rsadsi"));
//! # Ok::<(), rsrcscope::Error>(())
//! ```

mod names;

pub use names::{describe, OidNameProvider, StaticOidNames};

use crate::{file::parser::Parser, Error, Result};

/// Decode the content octets of an `OBJECT IDENTIFIER` into its arcs.
///
/// Only the first `declared_len` bytes of `data` belong to the identifier; a subidentifier
/// whose continuation runs past them is an error even when `data` itself is longer.
///
/// # Errors
/// - [`crate::Error::Empty`] if `declared_len` is zero
/// - [`crate::Error::OutOfBounds`] if `declared_len` exceeds `data`, or a subidentifier is
///   still continued at the declared end
/// - [`crate::Error::Malformed`] if a subidentifier does not fit 64 bits
pub fn parse_arcs(data: &[u8], declared_len: usize) -> Result<Vec<u64>> {
    if declared_len == 0 {
        return Err(Error::Empty);
    }
    if declared_len > data.len() {
        return Err(out_of_bounds_error!());
    }

    let mut parser = Parser::new(&data[..declared_len]);

    let first = parser.read_le::<u8>()?;
    let mut arcs = vec![u64::from(first / 40), u64::from(first % 40)];
    while parser.has_more_data() {
        arcs.push(read_subidentifier(&mut parser)?);
    }

    Ok(arcs)
}

fn read_subidentifier(parser: &mut Parser) -> Result<u64> {
    let mut value = 0u64;

    loop {
        let byte = parser.read_le::<u8>()?;
        if value > (u64::MAX >> 7) {
            return Err(malformed_error!(
                "OID subidentifier exceeds 64 bits at offset {}",
                parser.pos() - 1
            ));
        }

        value = (value << 7) | u64::from(byte & 0x7F);
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }
}

/// Join arcs with dots, e.g. `1.3.6.1.4.1.311`.
#[must_use]
pub fn to_dotted(arcs: &[u64]) -> String {
    arcs.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(".")
}
