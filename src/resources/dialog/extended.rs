use crate::{
    file::parser::Parser,
    resources::dialog::{
        read_field, DialogFont, DialogStyle, ExtendedWindowStyle, FieldRule, ResourceField,
        WindowStyle,
    },
    DecoderConfig, Result,
};

/// Size of the fixed part of a `DLGITEMTEMPLATEEX`.
const ITEM_FIXED_SIZE: usize = 24;

/// An extended `DLGTEMPLATEEX` with its controls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DialogTemplateEx {
    /// Template version, 1
    pub version: u16,
    /// Always `0xFFFF`
    pub signature: u16,
    /// Help context identifier
    pub help_id: u32,
    /// Extended window style
    pub ext_style: ExtendedWindowStyle,
    /// Dialog and window style bits
    pub style: DialogStyle,
    /// Number of controls declared by the header
    pub item_count: u16,
    /// Left edge in dialog units
    pub x: i16,
    /// Top edge in dialog units
    pub y: i16,
    /// Width in dialog units
    pub cx: i16,
    /// Height in dialog units
    pub cy: i16,
    /// Menu resource
    pub menu: ResourceField,
    /// Window class
    pub class: ResourceField,
    /// Caption
    pub title: ResourceField,
    /// Font block, present with `DS_SETFONT` or `DS_SHELLFONT`
    pub font: Option<DialogFont>,
    /// The controls
    pub items: Vec<DialogItemTemplateEx>,
}

/// An extended `DLGITEMTEMPLATEEX`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DialogItemTemplateEx {
    /// Help context identifier
    pub help_id: u32,
    /// Extended window style
    pub ext_style: ExtendedWindowStyle,
    /// Window and control style bits
    pub style: WindowStyle,
    /// Left edge in dialog units
    pub x: i16,
    /// Top edge in dialog units
    pub y: i16,
    /// Width in dialog units
    pub cx: i16,
    /// Height in dialog units
    pub cy: i16,
    /// Control identifier, 32 bits wide in this layout
    pub id: u32,
    /// Window class, often a predefined class ordinal
    pub class: ResourceField,
    /// Text or resource ordinal
    pub title: ResourceField,
    /// Data passed to the control on creation
    pub creation_data: Vec<u8>,
}

impl DialogTemplateEx {
    pub(crate) fn read(parser: &mut Parser, config: &DecoderConfig) -> Result<Self> {
        let version = parser.read_le::<u16>()?;
        let signature = parser.read_le::<u16>()?;
        let help_id = parser.read_le::<u32>()?;
        let ext_style = ExtendedWindowStyle::from_bits_retain(parser.read_le::<u32>()?);
        let style = DialogStyle::from_bits_retain(parser.read_le::<u32>()?);
        let item_count = parser.read_le::<u16>()?;
        let x = parser.read_le::<i16>()?;
        let y = parser.read_le::<i16>()?;
        let cx = parser.read_le::<i16>()?;
        let cy = parser.read_le::<i16>()?;

        let menu = read_field(parser, FieldRule::Template)?;
        let class = read_field(parser, FieldRule::Template)?;
        let title = read_field(parser, FieldRule::Title)?;

        let font = if style.has_font() {
            Some(DialogFont {
                point_size: parser.read_le::<u16>()?,
                weight: parser.read_le::<u16>()?,
                italic: parser.read_le::<u8>()? != 0,
                charset: parser.read_le::<u8>()?,
                typeface: parser.read_wide_string()?,
            })
        } else {
            None
        };
        parser.align(4);

        config.check_count("dialog item", u32::from(item_count))?;
        parser.ensure_remaining(usize::from(item_count).saturating_mul(ITEM_FIXED_SIZE))?;

        let mut items = Vec::with_capacity(usize::from(item_count));
        for _ in 0..item_count {
            items.push(DialogItemTemplateEx::read(parser)?);
        }

        Ok(DialogTemplateEx {
            version,
            signature,
            help_id,
            ext_style,
            style,
            item_count,
            x,
            y,
            cx,
            cy,
            menu,
            class,
            title,
            font,
            items,
        })
    }
}

impl DialogItemTemplateEx {
    fn read(parser: &mut Parser) -> Result<Self> {
        log::trace!("Extended dialog item at 0x{:X}", parser.pos());

        let help_id = parser.read_le::<u32>()?;
        let ext_style = ExtendedWindowStyle::from_bits_retain(parser.read_le::<u32>()?);
        let style = WindowStyle::from_bits_retain(parser.read_le::<u32>()?);
        let x = parser.read_le::<i16>()?;
        let y = parser.read_le::<i16>()?;
        let cx = parser.read_le::<i16>()?;
        let cy = parser.read_le::<i16>()?;
        let id = parser.read_le::<u32>()?;

        let class = read_field(parser, FieldRule::Item)?;
        let title = read_field(parser, FieldRule::Item)?;

        let extra_count = parser.read_le::<u16>()?;
        let creation_data = parser.read_bytes(usize::from(extra_count))?.to_vec();
        parser.align(4);

        Ok(DialogItemTemplateEx {
            help_id,
            ext_style,
            style,
            x,
            y,
            cx,
            cy,
            id,
            class,
            title,
            creation_data,
        })
    }
}
