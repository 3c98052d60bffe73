//! Win32 resource decoders.
//!
//! Resources are the typed data blobs a Windows executable carries in its resource directory:
//! dialog and menu templates, string tables, version information and more. Each submodule here
//! decodes exactly one resource kind from its raw bytes; none of them needs the surrounding
//! container.
//!
//! # Key Components
//!
//! - [`crate::resources::ResourceType`] - The standard `RT_*` resource type identifiers
//! - [`crate::resources::decode_resource`] - Dispatch raw bytes to the decoder of a type
//! - [`crate::resources::DecodedResource`] - The decoded result of any supported type
//!
//! | Type              | Decoder                                       | Result                     |
//! |-------------------|-----------------------------------------------|----------------------------|
//! | `RT_MENU`         | [`decode_menu`]                               | [`Menu`]                   |
//! | `RT_DIALOG`       | [`decode_dialog`]                             | [`Dialog`]                 |
//! | `RT_STRING`       | [`decode_string_table`]                       | [`StringTable`]            |
//! | `RT_FONTDIR`      | [`decode_font_group`]                         | [`FontGroupHeader`]        |
//! | `RT_ACCELERATOR`  | [`decode_accelerators`]                       | [`AcceleratorTableEntry`]s |
//! | `RT_MESSAGETABLE` | [`decode_message_table`]                      | [`MessageTable`]           |
//! | `RT_VERSION`      | [`decode_version_info`]                       | [`VersionInfo`]            |
//!
//! # Usage Examples
//!
//! ```rust
//! use rsrcscope::resources::{decode_resource, DecodedResource, ResourceType};
//! use rsrcscope::DecoderConfig;
//!
//! // One string-table slot: "OK"
//! let data = [0x02, 0x00, b'O', 0x00, b'K', 0x00];
//!
//! let ty = ResourceType::from_id(6).unwrap();
//! if let DecodedResource::StringTable(table) = decode_resource(ty, &data, &DecoderConfig::default())? {
//!     assert_eq!(table.entries, vec!["OK".to_string()]);
//! }
//! # Ok::<(), rsrcscope::Error>(())
//! ```
//!
//! # Error Handling
//!
//! A resource either decodes completely or fails as a whole. Callers scanning many resources
//! should treat an `Err` as "this resource could not be interpreted" and continue with the next.

mod accelerator;
mod dialog;
mod fontgroup;
mod menu;
mod messagetable;
mod stringtable;
mod version;

pub use accelerator::{
    decode_accelerators, decode_accelerators_with, AcceleratorFlags, AcceleratorTableEntry,
};
pub use dialog::{
    decode_dialog, decode_dialog_with, Dialog, DialogFont, DialogItemTemplate,
    DialogItemTemplateEx, DialogStyle, DialogTemplate, DialogTemplateEx, ExtendedWindowStyle,
    ResourceField, WindowStyle,
};
pub use fontgroup::{
    decode_font_group, decode_font_group_with, FontDirEntry, FontGroupEntry, FontGroupHeader,
};
pub use menu::{
    decode_menu, decode_menu_with, Menu, MenuFlags, MenuHeader, MenuHeaderEx, MenuItem,
    MenuItemEx, NormalMenuItem, PopupMenuItem,
};
pub use messagetable::{
    decode_message_table, decode_message_table_with, MessageBlock, MessageEntry, MessageTable,
};
pub use stringtable::{
    decode_string_table, decode_string_table_with, StringTable, EMPTY_STRING_MARKER,
};
pub use version::{
    decode_version_info, decode_version_info_with, FileFlags, FixedFileInfo, LanguageCodePage,
    StringData, StringFileInfo, StringTableBlock, VarData, VarFileInfo, VersionHeader,
    VersionInfo,
};

use strum::{Display, EnumIter, FromRepr};

use crate::{DecoderConfig, Error, Result};

/// The predefined Win32 resource types (`RT_*`).
///
/// The numeric value of each variant is the integer id the resource directory uses for it.
///
/// ```rust
/// use rsrcscope::resources::ResourceType;
///
/// assert_eq!(ResourceType::from_id(16), Some(ResourceType::Version));
/// assert_eq!(ResourceType::Version.id(), 16);
/// assert_eq!(ResourceType::from_id(13), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display, FromRepr)]
#[repr(u16)]
pub enum ResourceType {
    /// `RT_CURSOR` - hardware-dependent cursor
    Cursor = 1,
    /// `RT_BITMAP`
    Bitmap = 2,
    /// `RT_ICON` - hardware-dependent icon
    Icon = 3,
    /// `RT_MENU`
    Menu = 4,
    /// `RT_DIALOG`
    Dialog = 5,
    /// `RT_STRING` - a block of 16 strings
    String = 6,
    /// `RT_FONTDIR` - the font group header
    FontDir = 7,
    /// `RT_FONT`
    Font = 8,
    /// `RT_ACCELERATOR`
    Accelerator = 9,
    /// `RT_RCDATA` - application-defined raw data
    RcData = 10,
    /// `RT_MESSAGETABLE`
    MessageTable = 11,
    /// `RT_GROUP_CURSOR`
    GroupCursor = 12,
    /// `RT_GROUP_ICON`
    GroupIcon = 14,
    /// `RT_VERSION`
    Version = 16,
    /// `RT_DLGINCLUDE`
    DlgInclude = 17,
    /// `RT_PLUGPLAY`
    PlugPlay = 19,
    /// `RT_VXD`
    Vxd = 20,
    /// `RT_ANICURSOR`
    AniCursor = 21,
    /// `RT_ANIICON`
    AniIcon = 22,
    /// `RT_HTML`
    Html = 23,
    /// `RT_MANIFEST` - side-by-side assembly manifest
    Manifest = 24,
}

impl ResourceType {
    /// Look up the resource type for an integer id from the resource directory.
    #[must_use]
    pub fn from_id(id: u32) -> Option<Self> {
        u16::try_from(id).ok().and_then(Self::from_repr)
    }

    /// The integer id of this resource type.
    #[must_use]
    pub fn id(self) -> u16 {
        self as u16
    }

    /// Returns `true` if [`decode_resource`] has a decoder for this type.
    #[must_use]
    pub fn is_decodable(self) -> bool {
        matches!(
            self,
            ResourceType::Menu
                | ResourceType::Dialog
                | ResourceType::String
                | ResourceType::FontDir
                | ResourceType::Accelerator
                | ResourceType::MessageTable
                | ResourceType::Version
        )
    }
}

/// A decoded resource of any supported type.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedResource {
    /// `RT_MENU`
    Menu(Menu),
    /// `RT_DIALOG`
    Dialog(Dialog),
    /// `RT_STRING`
    StringTable(StringTable),
    /// `RT_FONTDIR`
    FontGroup(FontGroupHeader),
    /// `RT_ACCELERATOR`
    Accelerators(Vec<AcceleratorTableEntry>),
    /// `RT_MESSAGETABLE`
    MessageTable(MessageTable),
    /// `RT_VERSION`
    VersionInfo(VersionInfo),
}

impl DecodedResource {
    /// The resource type this value was decoded as.
    #[must_use]
    pub fn resource_type(&self) -> ResourceType {
        match self {
            DecodedResource::Menu(_) => ResourceType::Menu,
            DecodedResource::Dialog(_) => ResourceType::Dialog,
            DecodedResource::StringTable(_) => ResourceType::String,
            DecodedResource::FontGroup(_) => ResourceType::FontDir,
            DecodedResource::Accelerators(_) => ResourceType::Accelerator,
            DecodedResource::MessageTable(_) => ResourceType::MessageTable,
            DecodedResource::VersionInfo(_) => ResourceType::Version,
        }
    }
}

/// Decode the raw bytes of a resource according to its type.
///
/// # Arguments
/// * `resource_type` - The type the resource directory declares for `data`
/// * `data` - The raw resource bytes
/// * `config` - Decoding limits
///
/// # Errors
/// Returns [`crate::Error::NotSupported`] for types without a decoder (bitmaps, icons, raw data,
/// manifests, ...), otherwise whatever the selected decoder returns.
pub fn decode_resource(
    resource_type: ResourceType,
    data: &[u8],
    config: &DecoderConfig,
) -> Result<DecodedResource> {
    log::debug!(
        "Decoding {} resource ({} bytes)",
        resource_type,
        data.len()
    );

    match resource_type {
        ResourceType::Menu => decode_menu_with(data, config).map(DecodedResource::Menu),
        ResourceType::Dialog => decode_dialog_with(data, config).map(DecodedResource::Dialog),
        ResourceType::String => {
            decode_string_table_with(data, config).map(DecodedResource::StringTable)
        }
        ResourceType::FontDir => {
            decode_font_group_with(data, config).map(DecodedResource::FontGroup)
        }
        ResourceType::Accelerator => {
            decode_accelerators_with(data, config).map(DecodedResource::Accelerators)
        }
        ResourceType::MessageTable => {
            decode_message_table_with(data, config).map(DecodedResource::MessageTable)
        }
        ResourceType::Version => {
            decode_version_info_with(data, config).map(DecodedResource::VersionInfo)
        }
        _ => Err(Error::NotSupported),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn resource_type_ids() {
        for ty in ResourceType::iter() {
            assert_eq!(ResourceType::from_id(u32::from(ty.id())), Some(ty));
        }
        assert_eq!(ResourceType::from_id(0), None);
        assert_eq!(ResourceType::from_id(15), None);
        assert_eq!(ResourceType::from_id(0x1_0005), None);
        assert_eq!(ResourceType::MessageTable.to_string(), "MessageTable");
    }

    #[test]
    fn decodable_matches_dispatch() {
        let config = DecoderConfig::default();
        for ty in ResourceType::iter() {
            let result = decode_resource(ty, &[], &config);
            if ty.is_decodable() {
                assert!(matches!(result, Err(Error::Empty)), "{ty}");
            } else {
                assert!(matches!(result, Err(Error::NotSupported)), "{ty}");
            }
        }
    }

    #[test]
    fn dispatch_accelerators() {
        let data = [0x01, 0x00, 0x70, 0x00, 0x0A, 0x00, 0x00, 0x00];
        let decoded =
            decode_resource(ResourceType::Accelerator, &data, &DecoderConfig::default()).unwrap();
        assert_eq!(decoded.resource_type(), ResourceType::Accelerator);
        let DecodedResource::Accelerators(entries) = decoded else {
            panic!("wrong variant");
        };
        assert_eq!(entries[0].id, 10);
    }
}
