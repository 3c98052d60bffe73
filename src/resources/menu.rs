//! Menu templates (`RT_MENU`).
//!
//! The word at offset 2 selects the layout: `0x0001` marks a `MENUEX_TEMPLATE_HEADER`, anything
//! else is decoded as a classic menu. The version word at offset 0 plays no part. Extended items
//! start at the absolute buffer offset held in the header's offset field.
//!
//! Both layouts are decoded into flat item lists running to the end of the buffer. The popup
//! hierarchy is not rebuilt; it stays visible through the [`MenuFlags::MF_POPUP`] and
//! [`MenuFlags::MF_END`] bits on each item.

use bitflags::bitflags;

use crate::{file::parser::Parser, DecoderConfig, Error, Result};

/// Offset-2 value that marks the extended layout.
const EXTENDED_MARKER: u16 = 0x0001;

/// Smallest possible classic item: flags and an empty string.
const MIN_NORMAL_ITEM: usize = 4;

/// Smallest possible extended item: fixed part and an empty string.
const MIN_EXTENDED_ITEM: usize = 16;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Menu item flags (`MF_*`)
    pub struct MenuFlags: u32 {
        /// Item is grayed
        const MF_GRAYED = 0x0001;
        /// Item is disabled
        const MF_DISABLED = 0x0002;
        /// Item is an owner-drawn bitmap
        const MF_BITMAP = 0x0004;
        /// Item has a check mark
        const MF_CHECKED = 0x0008;
        /// Item opens a submenu
        const MF_POPUP = 0x0010;
        /// Item starts a new column separated by a bar
        const MF_MENUBARBREAK = 0x0020;
        /// Item starts a new column
        const MF_MENUBREAK = 0x0040;
        /// Last item of the current menu level
        const MF_END = 0x0080;
        /// Item is owner drawn
        const MF_OWNERDRAW = 0x0100;
        /// Item is a separator
        const MF_SEPARATOR = 0x0800;
        /// Item is the default item
        const MF_DEFAULT = 0x1000;
        /// Item is highlighted
        const MF_HILITE = 0x0080_0000;
    }
}

/// A classic `MENUHEADER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuHeader {
    /// Version, 0
    pub version: u16,
    /// Size of the header extension, 0
    pub header_size: u16,
}

/// A classic popup item: four DWORD fields and the caption.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PopupMenuItem {
    /// Item type flags
    pub item_type: MenuFlags,
    /// Item state flags
    pub state: MenuFlags,
    /// Item identifier
    pub id: u32,
    /// Resource flags, carries [`MenuFlags::MF_POPUP`] and [`MenuFlags::MF_END`]
    pub res_info: MenuFlags,
    /// Caption
    pub text: String,
}

/// A classic command item: the flags word and the caption.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalMenuItem {
    /// Resource flags
    pub res_info: MenuFlags,
    /// Caption
    pub text: String,
}

/// An item of a classic menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    /// Item with [`MenuFlags::MF_POPUP`] set
    Popup(PopupMenuItem),
    /// Any other item
    Normal(NormalMenuItem),
}

impl MenuItem {
    /// The caption of the item.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            MenuItem::Popup(item) => &item.text,
            MenuItem::Normal(item) => &item.text,
        }
    }
}

/// A `MENUEX_TEMPLATE_HEADER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuHeaderEx {
    /// Version
    pub version: u16,
    /// Buffer offset of the first item
    pub offset: u16,
    /// Help context identifier
    pub help_id: u32,
}

/// A `MENUEX_TEMPLATE_ITEM`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuItemEx {
    /// Item type (`MFT_*`, shares bits with [`MenuFlags`])
    pub item_type: MenuFlags,
    /// Item state (`MFS_*`, shares bits with [`MenuFlags`])
    pub state: MenuFlags,
    /// Item identifier
    pub id: u32,
    /// Resource flags; `0x01` opens a submenu, `0x80` ends a level
    pub flags: u16,
    /// Caption
    pub text: String,
}

/// A decoded menu template in either layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Menu {
    /// Classic layout
    Normal {
        /// Header
        header: MenuHeader,
        /// Items in stored order
        items: Vec<MenuItem>,
    },
    /// Extended layout
    Extended {
        /// Header
        header: MenuHeaderEx,
        /// Items in stored order
        items: Vec<MenuItemEx>,
    },
}

impl Menu {
    /// Returns `true` for the extended layout.
    #[must_use]
    pub fn is_extended(&self) -> bool {
        matches!(self, Menu::Extended { .. })
    }

    /// Number of decoded items.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Menu::Normal { items, .. } => items.len(),
            Menu::Extended { items, .. } => items.len(),
        }
    }

    /// Returns `true` if no item was decoded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Captions of all items in stored order.
    #[must_use]
    pub fn captions(&self) -> Vec<&str> {
        match self {
            Menu::Normal { items, .. } => items.iter().map(MenuItem::text).collect(),
            Menu::Extended { items, .. } => items.iter().map(|item| item.text.as_str()).collect(),
        }
    }
}

/// Decode a menu template with the default [`DecoderConfig`].
///
/// # Errors
/// See [`decode_menu_with`].
pub fn decode_menu(data: &[u8]) -> Result<Menu> {
    decode_menu_with(data, &DecoderConfig::default())
}

/// Decode a menu template.
///
/// # Errors
/// - [`crate::Error::Empty`] if `data` is empty
/// - [`crate::Error::OutOfBounds`] if the header is truncated, the extended item offset points
///   past the buffer, or an item is cut off
/// - [`crate::Error::LimitExceeded`] if more than `max_declared_count` items are decoded
pub fn decode_menu_with(data: &[u8], config: &DecoderConfig) -> Result<Menu> {
    if data.is_empty() {
        return Err(Error::Empty);
    }

    let mut parser = Parser::new(data);
    if parser.peek_at::<u16>(2)? == EXTENDED_MARKER {
        log::debug!("Extended menu template ({} bytes)", data.len());
        read_extended(&mut parser, config)
    } else {
        log::debug!("Menu template ({} bytes)", data.len());
        read_normal(&mut parser, config)
    }
}

fn read_normal(parser: &mut Parser, config: &DecoderConfig) -> Result<Menu> {
    let header = MenuHeader {
        version: parser.read_le::<u16>()?,
        header_size: parser.read_le::<u16>()?,
    };

    let mut items = Vec::new();
    while has_item(parser, MIN_NORMAL_ITEM) {
        config.check_len("menu item", items.len())?;

        let res_info = MenuFlags::from_bits_retain(u32::from(parser.peek_le::<u16>()?));
        let item = if res_info.contains(MenuFlags::MF_POPUP) {
            MenuItem::Popup(PopupMenuItem {
                item_type: MenuFlags::from_bits_retain(parser.read_le::<u32>()?),
                state: MenuFlags::from_bits_retain(parser.read_le::<u32>()?),
                id: parser.read_le::<u32>()?,
                res_info: MenuFlags::from_bits_retain(parser.read_le::<u32>()?),
                text: parser.read_wide_string()?,
            })
        } else {
            MenuItem::Normal(NormalMenuItem {
                res_info: MenuFlags::from_bits_retain(u32::from(parser.read_le::<u16>()?)),
                text: parser.read_wide_string()?,
            })
        };
        parser.align(4);

        items.push(item);
    }

    Ok(Menu::Normal { header, items })
}

fn read_extended(parser: &mut Parser, config: &DecoderConfig) -> Result<Menu> {
    let header = MenuHeaderEx {
        version: parser.read_le::<u16>()?,
        offset: parser.read_le::<u16>()?,
        help_id: parser.read_le::<u32>()?,
    };

    let mut items = Vec::new();
    parser.seek(usize::from(header.offset))?;
    while has_item(parser, MIN_EXTENDED_ITEM) {
        config.check_len("menu item", items.len())?;

        items.push(MenuItemEx {
            item_type: MenuFlags::from_bits_retain(parser.read_le::<u32>()?),
            state: MenuFlags::from_bits_retain(parser.read_le::<u32>()?),
            id: parser.read_le::<u32>()?,
            flags: parser.read_le::<u16>()?,
            text: parser.read_wide_string()?,
        });
        parser.align(4);
    }

    Ok(Menu::Extended { header, items })
}

/// Returns `true` while another item can follow; a shorter tail is logged and ignored.
fn has_item(parser: &Parser, min_size: usize) -> bool {
    match parser.remaining() {
        0 => false,
        remaining if remaining < min_size => {
            log::warn!(
                "Ignoring {} trailing bytes after the last menu item at 0x{:X}",
                remaining,
                parser.pos()
            );
            false
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{factories, BlobBuilder};

    #[test]
    fn normal_menu() {
        let data = factories::menu_normal();
        let menu = decode_menu(&data).unwrap();
        assert!(!menu.is_extended());
        assert_eq!(menu.captions(), vec!["&File", "&Open", "E&xit"]);

        let Menu::Normal { header, items } = menu else {
            unreachable!();
        };
        assert_eq!(header, MenuHeader::default());

        let MenuItem::Popup(popup) = &items[0] else {
            panic!("first item is the popup");
        };
        assert!(popup.item_type.contains(MenuFlags::MF_POPUP));
        assert_eq!(popup.id, 0);
        assert!(popup.res_info.contains(MenuFlags::MF_END));

        let MenuItem::Normal(last) = &items[2] else {
            panic!("last item is a command");
        };
        assert!(last.res_info.contains(MenuFlags::MF_END));
    }

    #[test]
    fn extended_menu() {
        let data = factories::menu_extended();
        let menu = decode_menu(&data).unwrap();
        assert!(menu.is_extended());
        assert_eq!(menu.len(), 2);

        let Menu::Extended { header, items } = menu else {
            unreachable!();
        };
        assert_eq!(header.version, 0);
        assert_eq!(header.offset, 1);
        assert_eq!(header.help_id, 0);

        assert_eq!(items[0].item_type.bits(), 0x100);
        assert_eq!(items[0].id, 100);
        assert_eq!(items[0].text, "&Edit");
        assert_eq!(items[0].flags, 0x01);
        assert_eq!(items[1].id, 200);
        assert!(items[1].state.contains(MenuFlags::MF_CHECKED));
        assert_eq!(items[1].text, "&Copy");
        assert_eq!(items[1].flags, 0x80);
    }

    #[test]
    fn offset_two_marker_selects_extended() {
        // Items would start at offset 1, leaving less than one item
        let menu = decode_menu(&[0, 0, 1, 0, 0, 0, 0, 0]).unwrap();
        assert!(menu.is_extended());
        assert!(menu.is_empty());

        let menu = decode_menu(&[0, 0, 0, 0, 0x80, 0, 0, 0]).unwrap();
        assert!(!menu.is_extended());
    }

    #[test]
    fn version_word_does_not_select_extended() {
        let mut b = BlobBuilder::new();
        b.u16(1).u16(0).u16(0x80).wide("A").zeros(2);
        let menu = decode_menu(&b.build()).unwrap();

        assert!(!menu.is_extended());
        assert_eq!(menu.captions(), vec!["A"]);
        let Menu::Normal { header, .. } = menu else {
            unreachable!();
        };
        assert_eq!(header.version, 1);
    }

    #[test]
    fn extended_header_truncated() {
        assert!(matches!(
            decode_menu(&[0, 0, 1, 0, 0, 0]),
            Err(Error::OutOfBounds)
        ));
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut b = BlobBuilder::new();
        b.u16(0).u16(0).u16(0x80).wide("Only").zeros(2).u8(0xFF);
        let menu = decode_menu(&b.build()).unwrap();
        assert_eq!(menu.captions(), vec!["Only"]);
    }

    #[test]
    fn truncated_popup() {
        let mut b = BlobBuilder::new();
        b.u16(0).u16(0).u32(0x10).u32(0);
        assert!(matches!(decode_menu(&b.build()), Err(Error::OutOfBounds)));
    }
}
