//! Byte-level access and address translation for resource decoding.
//!
//! This module holds the pieces every decoder builds on:
//!
//! - [`crate::file::io`] - Bounds-checked fixed-width integer reads with explicit offsets
//! - [`crate::file::parser`] - The [`crate::file::parser::Parser`] cursor with peeking, alignment
//!   and string readers
//! - [`crate::file::SectionHeader`] / [`crate::file::rva_to_offset`] - Translation of relative
//!   virtual addresses into file offsets through a section table
//!
//! Locating resource blobs inside a PE or NE container is left to the caller; the section table
//! can be taken straight from `goblin` through the provided `From` conversion.
//!
//! # Examples
//!
//! ```rust
//! use rsrcscope::file::{rva_to_offset, SectionHeader};
//!
//! let sections = [
//!     SectionHeader::new(".text", 0x1000, 0x1000, 0x1000, 0x400),
//!     SectionHeader::new(".rsrc", 0x2000, 0x800, 0x800, 0x1400),
//! ];
//!
//! assert_eq!(rva_to_offset(0x2010, &sections)?, 0x1410);
//! # Ok::<(), rsrcscope::Error>(())
//! ```

pub mod io;
pub mod parser;
mod section;

pub use section::{rva_to_offset, SectionHeader};
