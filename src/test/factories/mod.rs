//! Complete, well-formed blobs for every format the crate decodes.

mod records;
mod resources;

pub use records::*;
pub use resources::*;
