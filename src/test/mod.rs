//! Crafted resource blobs for unit tests.
//!
//! [`BlobBuilder`] writes little-endian fields, UTF-16 and ASCII strings and alignment padding;
//! [`factories`] uses it to assemble complete resources of every kind the crate decodes.

pub mod factories;

pub use builders::BlobBuilder;
