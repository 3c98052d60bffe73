use crate::{
    file::parser::Parser,
    resources::dialog::{
        read_field, DialogFont, DialogStyle, ExtendedWindowStyle, FieldRule, ResourceField,
        WindowStyle,
    },
    DecoderConfig, Result,
};

/// Size of the fixed part of a `DLGITEMTEMPLATE`.
const ITEM_FIXED_SIZE: usize = 18;

/// A classic `DLGTEMPLATE` with its controls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DialogTemplate {
    /// Dialog and window style bits
    pub style: DialogStyle,
    /// Extended window style
    pub ext_style: ExtendedWindowStyle,
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
    /// Font block, present with `DS_SETFONT`
    pub font: Option<DialogFont>,
    /// The controls
    pub items: Vec<DialogItemTemplate>,
}

/// A classic `DLGITEMTEMPLATE`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DialogItemTemplate {
    /// Window and control style bits
    pub style: WindowStyle,
    /// Extended window style
    pub ext_style: ExtendedWindowStyle,
    /// Left edge in dialog units
    pub x: i16,
    /// Top edge in dialog units
    pub y: i16,
    /// Width in dialog units
    pub cx: i16,
    /// Height in dialog units
    pub cy: i16,
    /// Control identifier
    pub id: u16,
    /// Window class, often a predefined class ordinal
    pub class: ResourceField,
    /// Text or resource ordinal (e.g. an icon)
    pub title: ResourceField,
    /// Data passed to the control on creation
    pub creation_data: Vec<u8>,
}

impl DialogTemplate {
    pub(crate) fn read(parser: &mut Parser, config: &DecoderConfig) -> Result<Self> {
        let style = DialogStyle::from_bits_retain(parser.read_le::<u32>()?);
        let ext_style = ExtendedWindowStyle::from_bits_retain(parser.read_le::<u32>()?);
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
                typeface: parser.read_wide_string()?,
                ..DialogFont::default()
            })
        } else {
            None
        };
        parser.align(4);

        config.check_count("dialog item", u32::from(item_count))?;
        parser.ensure_remaining(usize::from(item_count).saturating_mul(ITEM_FIXED_SIZE))?;

        let mut items = Vec::with_capacity(usize::from(item_count));
        for _ in 0..item_count {
            items.push(DialogItemTemplate::read(parser)?);
        }

        Ok(DialogTemplate {
            style,
            ext_style,
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

impl DialogItemTemplate {
    fn read(parser: &mut Parser) -> Result<Self> {
        log::trace!("Dialog item at 0x{:X}", parser.pos());

        let style = WindowStyle::from_bits_retain(parser.read_le::<u32>()?);
        let ext_style = ExtendedWindowStyle::from_bits_retain(parser.read_le::<u32>()?);
        let x = parser.read_le::<i16>()?;
        let y = parser.read_le::<i16>()?;
        let cx = parser.read_le::<i16>()?;
        let cy = parser.read_le::<i16>()?;
        let id = parser.read_le::<u16>()?;

        let class = read_field(parser, FieldRule::Item)?;
        let title = read_field(parser, FieldRule::Item)?;

        let creation_size = parser.read_le::<u16>()?;
        let creation_data = parser.read_bytes(usize::from(creation_size))?.to_vec();
        parser.align(4);

        Ok(DialogItemTemplate {
            style,
            ext_style,
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

#[cfg(test)]
mod tests {
    use crate::{
        resources::{decode_dialog, Dialog, DialogStyle, ResourceField, WindowStyle},
        test::factories,
        Error,
    };

    #[test]
    fn normal_template() {
        let data = factories::dialog_normal();
        let Dialog::Normal(template) = decode_dialog(&data).unwrap() else {
            panic!("expected a classic template");
        };

        assert!(template.style.contains(DialogStyle::DS_SETFONT));
        assert_eq!((template.x, template.y, template.cx, template.cy), (10, 20, 200, -1));
        assert_eq!(template.menu, ResourceField::Ordinal(0x65));
        assert_eq!(template.class, ResourceField::None);
        assert_eq!(template.title.as_str(), Some("About"));

        let font = template.font.as_ref().unwrap();
        assert_eq!(font.point_size, 8);
        assert_eq!(font.typeface, "MS Shell Dlg");
        assert_eq!(font.weight, 0);

        assert_eq!(template.item_count, 2);
        assert_eq!(template.items.len(), 2);

        let ok = &template.items[0];
        assert_eq!(ok.id, 1);
        assert!(ok.style.contains(WindowStyle::WS_TABSTOP | WindowStyle::WS_VISIBLE));
        assert_eq!(ok.class.predefined_class(), Some("Button"));
        assert_eq!(ok.title.as_str(), Some("OK"));
        assert!(ok.creation_data.is_empty());

        let label = &template.items[1];
        assert_eq!(label.id, 0xFFFF);
        assert_eq!(label.class.as_str(), Some("SysLink"));
        assert_eq!(label.title, ResourceField::Ordinal(3));
        assert_eq!(label.creation_data, vec![0xDE, 0xAD]);
    }

    #[test]
    fn declared_items_must_be_present() {
        let data = factories::dialog_normal();
        // Drop the second item entirely
        let truncated = &data[..factories::DIALOG_NORMAL_FIRST_ITEM_END];
        assert!(matches!(decode_dialog(truncated), Err(Error::OutOfBounds)));
    }

    #[test]
    fn no_font_without_setfont() {
        let mut b = crate::test::BlobBuilder::new();
        b.u32(0x8000_0000).u32(0).u16(0).i16(0).i16(0).i16(50).i16(50);
        b.u16(0).u16(0).wide("Plain");
        let template = decode_dialog(&b.build()).unwrap();

        assert!(!template.is_extended());
        assert!(template.font().is_none());
        assert_eq!(template.title().as_str(), Some("Plain"));
        assert_eq!(template.item_count(), 0);
    }
}
