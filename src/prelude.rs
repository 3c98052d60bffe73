//! # rsrcscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and functions
//! from the rsrcscope library. Import this module to get quick access to every decoder entry
//! point and the structures they return.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all rsrcscope operations
pub use crate::Error;

/// The result type used throughout rsrcscope
pub use crate::Result;

/// Limits applied while decoding untrusted data
pub use crate::DecoderConfig;

// ================================================================================================
// Low-level Parsing
// ================================================================================================

/// Cursor over a resource buffer
pub use crate::Parser;

/// Section headers and RVA translation
pub use crate::{rva_to_offset, SectionHeader};

// ================================================================================================
// Resource Dispatch
// ================================================================================================

/// Decode a resource by its `RT_*` type
pub use crate::resources::{decode_resource, DecodedResource, ResourceType};

// ================================================================================================
// Resource Decoders
// ================================================================================================

/// Accelerator tables
pub use crate::resources::{decode_accelerators, AcceleratorFlags, AcceleratorTableEntry};

/// Dialog templates
pub use crate::resources::{decode_dialog, Dialog, DialogStyle, ResourceField};

/// Font directories
pub use crate::resources::{decode_font_group, FontGroupHeader};

/// Menu templates
pub use crate::resources::{decode_menu, Menu, MenuFlags, MenuItem, MenuItemEx};

/// Message tables
pub use crate::resources::{decode_message_table, MessageTable};

/// String tables
pub use crate::resources::{decode_string_table, StringTable};

/// Version information
pub use crate::resources::{decode_version_info, FixedFileInfo, VersionInfo};

// ================================================================================================
// Auxiliary Records
// ================================================================================================

/// CodeView debug records
pub use crate::debug::{decode_codeview, CodeViewRecord, Nb10ProgramDatabase, RsdsProgramDatabase};

/// SecuROM overlay table
pub use crate::overlay::{decode_securom_addd, SecuRomAddD};

/// Object identifier arcs
pub use crate::oid::{parse_arcs, to_dotted, OidNameProvider, StaticOidNames};
