// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # rsrcscope
//!
//! Structural decoders for the resource formats found inside Windows executables. Given the raw
//! bytes of one resource, `rsrcscope` produces a fully owned, typed record: dialog templates,
//! menus, version-info trees, message tables, string tables, font groups and accelerator tables,
//! plus a few auxiliary records that scanners meet next to resources (CodeView program-database
//! records and the SecuROM `AddD` overlay table).
//!
//! ## Features
//!
//! - **Bounds-checked everywhere** - declared counts and lengths are never trusted; a truncated
//!   or adversarial blob yields [`Error::OutOfBounds`] or [`Error::LimitExceeded`], never a panic
//! - **Variant sniffing** - extended dialog and menu templates, version-info children and
//!   resource fields are told apart by peeking sentinel values, exactly as the formats require
//! - **Owned output** - decoded records never borrow the input buffer
//! - **Address translation** - RVA to file offset translation through a section table that can
//!   come straight from `goblin`
//! - **OID arcs** - base-128 arc decoding with an injectable name lookup
//!
//! ## Quick Start
//!
//! ```rust
//! use rsrcscope::prelude::*;
//!
//! // Two accelerators: Ctrl+A -> 100, F5 -> 101
//! let data = [
//!     0x09, 0x00, 0x41, 0x00, 0x64, 0x00, 0x00, 0x00,
//!     0x81, 0x00, 0x74, 0x00, 0x65, 0x00, 0x00, 0x00,
//! ];
//!
//! match decode_resource(ResourceType::Accelerator, &data, &DecoderConfig::default())? {
//!     DecodedResource::Accelerators(entries) => assert_eq!(entries.len(), 2),
//!     other => panic!("unexpected {other:?}"),
//! }
//! # Ok::<(), rsrcscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`file`] - byte primitives, the [`Parser`] cursor and the section table
//! - [`resources`] - one decoder per resource kind plus [`resources::decode_resource`]
//! - [`debug`] - `NB10` and `RSDS` CodeView records
//! - [`overlay`] - the SecuROM `AddD` table
//! - [`oid`] - Object Identifier arc decoding
//! - [`prelude`] - convenient re-exports
//!
//! Locating resources inside a PE or NE container is out of scope; pair this crate with a
//! container parser such as `goblin` and hand the resource bytes to the decoders here.
//!
//! ## Logging
//!
//! Diagnostics are emitted through the [`log`](https://docs.rs/log) facade. Recoverable
//! conditions (clamped string-table entries, unknown version-info children) are logged at `warn`,
//! variant selection at `debug`. The crate never installs a logger.

#[macro_use]
pub(crate) mod error;
mod config;

/// Shared functionality which is used in unit tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use rsrcscope::prelude::*;
///
/// let entries = decode_accelerators(&[0u8; 16])?;
/// assert_eq!(entries.len(), 2);
/// # Ok::<(), rsrcscope::Error>(())
/// ```
pub mod prelude;

/// Byte-level primitives, the cursor parser and RVA translation.
pub mod file;

/// Decoders for the Win32 resource formats.
///
/// Each resource kind has its own submodule and a `decode_*` entry point taking the raw resource
/// bytes. [`resources::decode_resource`] dispatches on a [`resources::ResourceType`].
pub mod resources;

/// CodeView debug records (`NB10` and `RSDS` program-database references).
pub mod debug;

/// Overlay tables appended to protected executables.
pub mod overlay;

/// Object Identifier arc decoding and name lookup.
pub mod oid;

/// `rsrcscope` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use rsrcscope::{resources::decode_version_info, Result};
///
/// fn product(data: &[u8]) -> Result<Option<String>> {
///     let info = decode_version_info(data)?;
///     Ok(info.string_value("ProductName").map(str::to_string))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `rsrcscope` Error type
///
/// The main error type for all operations in this crate. Every decoder either returns a fully
/// populated record or one of these errors.
///
/// # Examples
///
/// ```rust
/// use rsrcscope::{resources::decode_version_info, Error};
///
/// match decode_version_info(&[0u8; 4]) {
///     Ok(info) => println!("{:?}", info.file_version()),
///     Err(Error::KeyMismatch { found, .. }) => println!("not a version resource: {found}"),
///     Err(e) => println!("Error: {e}"),
/// }
/// ```
pub use error::Error;

/// Limits applied while decoding.
///
/// See [`DecoderConfig`] for the available presets.
pub use config::DecoderConfig;

/// Low-level cursor used by every decoder.
///
/// Exposed for callers that need to decode records embedded at arbitrary offsets.
pub use file::parser::Parser;

/// Section table entry and RVA translation.
pub use file::{rva_to_offset, SectionHeader};
