//! Dialog box templates (`RT_DIALOG`).
//!
//! Two on-disk layouts exist. The classic `DLGTEMPLATE` starts directly with the style word; the
//! extended `DLGTEMPLATEEX` starts with `dlgVer = 1` and `signature = 0xFFFF`. The decoder looks
//! at the word at offset 2 only: `0xFFFF` selects the extended layout, anything else the classic
//! one.
//!
//! # Layout
//!
//! ```text
//! header            fixed fields (style, counts, geometry)
//! menu              resource field
//! class             resource field
//! title             resource field (never an ordinal)
//! font              only with DS_SETFONT
//! <DWORD align>
//! item[0..count]    fixed fields, class, title, creation data, <DWORD align>
//! ```
//!
//! # Resource Fields
//!
//! Menu, class and title references share one variable-length encoding, see [`ResourceField`].
//! The template-level rule treats a leading `0x0000` as "absent" and a leading `0xFFFF` as "an
//! ordinal follows"; the item-level rule only knows the `0xFFFF` ordinal marker, and a title can
//! never be an ordinal at template level.

mod extended;
mod styles;
mod template;

pub use extended::{DialogItemTemplateEx, DialogTemplateEx};
pub use styles::{DialogStyle, ExtendedWindowStyle, WindowStyle};
pub use template::{DialogItemTemplate, DialogTemplate};

use crate::{file::parser::Parser, DecoderConfig, Error, Result};

/// Marker word announcing an ordinal, and the offset-2 signature of extended templates.
const ORDINAL_MARKER: u16 = 0xFFFF;

/// A menu, class or title reference inside a dialog template.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResourceField {
    /// The field is not present
    #[default]
    None,
    /// A numeric resource id or predefined class atom
    Ordinal(u16),
    /// A UTF-16 name
    Name(String),
}

impl ResourceField {
    /// Returns `true` if the field is absent.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, ResourceField::None)
    }

    /// The name, if the field holds one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ResourceField::Name(name) => Some(name),
            _ => None,
        }
    }

    /// The ordinal, if the field holds one.
    #[must_use]
    pub fn ordinal(&self) -> Option<u16> {
        match self {
            ResourceField::Ordinal(ordinal) => Some(*ordinal),
            _ => None,
        }
    }

    /// The window class name of a predefined control class ordinal.
    ///
    /// ```rust
    /// use rsrcscope::resources::ResourceField;
    ///
    /// assert_eq!(ResourceField::Ordinal(0x0080).predefined_class(), Some("Button"));
    /// assert_eq!(ResourceField::Name("SysListView32".into()).predefined_class(), None);
    /// ```
    #[must_use]
    pub fn predefined_class(&self) -> Option<&'static str> {
        match self.ordinal()? {
            0x0080 => Some("Button"),
            0x0081 => Some("Edit"),
            0x0082 => Some("Static"),
            0x0083 => Some("ListBox"),
            0x0084 => Some("ScrollBar"),
            0x0085 => Some("ComboBox"),
            _ => None,
        }
    }
}

/// Which sentinel convention a resource field follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldRule {
    /// `0x0000` absent, `0xFFFF` + ordinal, otherwise a name (template menu and class)
    Template,
    /// `0x0000` absent, otherwise a name (template title)
    Title,
    /// `0xFFFF` + ordinal, otherwise a name (item class and title)
    Item,
}

/// Read one resource field; names are followed by WORD alignment.
pub(crate) fn read_field(parser: &mut Parser, rule: FieldRule) -> Result<ResourceField> {
    let marker = parser.peek_le::<u16>()?;

    match (rule, marker) {
        (FieldRule::Template | FieldRule::Title, 0x0000) => {
            parser.advance_by(2)?;
            return Ok(ResourceField::None);
        }
        (FieldRule::Template | FieldRule::Item, ORDINAL_MARKER) => {
            parser.advance_by(2)?;
            return Ok(ResourceField::Ordinal(parser.read_le::<u16>()?));
        }
        _ => {}
    }

    let name = parser.read_wide_string()?;
    parser.align(2);
    Ok(ResourceField::Name(name))
}

/// The font block of a template with `DS_SETFONT`.
///
/// Classic templates only store the point size and typeface; the other fields are zero for them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DialogFont {
    /// Point size
    pub point_size: u16,
    /// Font weight, extended templates only
    pub weight: u16,
    /// Italic flag, extended templates only
    pub italic: bool,
    /// Character set, extended templates only
    pub charset: u8,
    /// Typeface name
    pub typeface: String,
}

/// A decoded dialog template in either layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// A classic `DLGTEMPLATE`
    Normal(DialogTemplate),
    /// A `DLGTEMPLATEEX`
    Extended(DialogTemplateEx),
}

impl Dialog {
    /// Returns `true` for the extended layout.
    #[must_use]
    pub fn is_extended(&self) -> bool {
        matches!(self, Dialog::Extended(_))
    }

    /// The dialog style.
    #[must_use]
    pub fn style(&self) -> DialogStyle {
        match self {
            Dialog::Normal(template) => template.style,
            Dialog::Extended(template) => template.style,
        }
    }

    /// The dialog caption.
    #[must_use]
    pub fn title(&self) -> &ResourceField {
        match self {
            Dialog::Normal(template) => &template.title,
            Dialog::Extended(template) => &template.title,
        }
    }

    /// The font block, if the template has one.
    #[must_use]
    pub fn font(&self) -> Option<&DialogFont> {
        match self {
            Dialog::Normal(template) => template.font.as_ref(),
            Dialog::Extended(template) => template.font.as_ref(),
        }
    }

    /// Number of decoded controls.
    #[must_use]
    pub fn item_count(&self) -> usize {
        match self {
            Dialog::Normal(template) => template.items.len(),
            Dialog::Extended(template) => template.items.len(),
        }
    }
}

/// Decode a dialog template with the default [`DecoderConfig`].
///
/// # Errors
/// See [`decode_dialog_with`].
pub fn decode_dialog(data: &[u8]) -> Result<Dialog> {
    decode_dialog_with(data, &DecoderConfig::default())
}

/// Decode a dialog template.
///
/// # Errors
/// - [`crate::Error::Empty`] if `data` is empty
/// - [`crate::Error::LimitExceeded`] if the item count exceeds `max_declared_count`
/// - [`crate::Error::OutOfBounds`] if the header, a field or any of the declared items is
///   truncated
pub fn decode_dialog_with(data: &[u8], config: &DecoderConfig) -> Result<Dialog> {
    if data.is_empty() {
        return Err(Error::Empty);
    }

    let mut parser = Parser::new(data);
    let dialog = if parser.peek_at::<u16>(2)? == ORDINAL_MARKER {
        log::debug!("Extended dialog template ({} bytes)", data.len());
        Dialog::Extended(DialogTemplateEx::read(&mut parser, config)?)
    } else {
        log::debug!("Dialog template ({} bytes)", data.len());
        Dialog::Normal(DialogTemplate::read(&mut parser, config)?)
    };

    if parser.has_more_data() {
        log::warn!(
            "Ignoring {} trailing bytes after the last dialog item at 0x{:X}",
            parser.remaining(),
            parser.pos()
        );
    }

    Ok(dialog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::BlobBuilder;

    #[test]
    fn template_field_rule() {
        let mut b = BlobBuilder::new();
        b.u16(0).u16(0xFFFF).u16(0x0042).wide("MyClass").u8(0xAA);
        let data = b.build();
        let mut parser = Parser::new(&data);

        assert_eq!(
            read_field(&mut parser, FieldRule::Template).unwrap(),
            ResourceField::None
        );
        assert_eq!(
            read_field(&mut parser, FieldRule::Template).unwrap(),
            ResourceField::Ordinal(0x42)
        );
        assert_eq!(
            read_field(&mut parser, FieldRule::Template).unwrap(),
            ResourceField::Name("MyClass".to_string())
        );
        assert_eq!(parser.pos() % 2, 0);
    }

    #[test]
    fn title_never_ordinal() {
        let mut b = BlobBuilder::new();
        b.u16(0xFFFF).u16(0x41).u16(0);
        let data = b.build();
        let mut parser = Parser::new(&data);

        let field = read_field(&mut parser, FieldRule::Title).unwrap();
        assert_eq!(field, ResourceField::Name("\u{FFFF}A".to_string()));
        assert_eq!(parser.pos(), 6);
    }

    #[test]
    fn item_field_rule() {
        let mut b = BlobBuilder::new();
        b.u16(0xFFFF).u16(0x0082).u16(0).wide("OK");
        let data = b.build();
        let mut parser = Parser::new(&data);

        let class = read_field(&mut parser, FieldRule::Item).unwrap();
        assert_eq!(class.predefined_class(), Some("Static"));
        // A zero word is an empty name at item level, not an absent field
        assert_eq!(
            read_field(&mut parser, FieldRule::Item).unwrap(),
            ResourceField::Name(String::new())
        );
        assert_eq!(
            read_field(&mut parser, FieldRule::Item).unwrap().as_str(),
            Some("OK")
        );
        assert!(!parser.has_more_data());
    }

    #[test]
    fn truncated_header() {
        assert!(matches!(decode_dialog(&[]), Err(Error::Empty)));
        assert!(matches!(decode_dialog(&[1, 0, 0]), Err(Error::OutOfBounds)));
    }
}
