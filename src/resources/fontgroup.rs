//! Font groups (`RT_FONTDIR`).
//!
//! A font directory lists the fonts of a font resource file: a u16 count followed by one
//! `DIRENTRY` per font. Each entry is the font's ordinal and the 113-byte fixed part of its
//! `FONTDIRENTRY` metrics, followed by the device and face names.

use crate::{file::parser::Parser, DecoderConfig, Error, Result};

/// Size of the fixed part of a `FONTDIRENTRY`.
const FONT_DIR_ENTRY_FIXED_SIZE: usize = 113;

/// Smallest possible `DIRENTRY`: ordinal, fixed metrics and two empty names.
const MIN_ENTRY_SIZE: usize = 2 + FONT_DIR_ENTRY_FIXED_SIZE + 2;

/// A `FONTDIRENTRY` metrics record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontDirEntry {
    /// Font file version, `0x0200` or `0x0300`
    pub version: u16,
    /// Size of the font file in bytes
    pub size: u32,
    /// Copyright notice, NUL padded
    pub copyright: String,
    /// Raster or vector font
    pub font_type: u16,
    /// Nominal point size
    pub points: u16,
    /// Vertical resolution the font was digitized at
    pub vert_res: u16,
    /// Horizontal resolution the font was digitized at
    pub horiz_res: u16,
    /// Distance from the top of a character cell to the baseline
    pub ascent: u16,
    /// Leading inside the character cell
    pub internal_leading: u16,
    /// Leading between rows
    pub external_leading: u16,
    /// Italic font
    pub italic: u8,
    /// Underlined font
    pub underline: u8,
    /// Struck-out font
    pub strike_out: u8,
    /// Weight, 400 normal and 700 bold
    pub weight: u16,
    /// Character set
    pub charset: u8,
    /// Character width for fixed-pitch fonts, 0 otherwise
    pub pix_width: u16,
    /// Character cell height
    pub pix_height: u16,
    /// Pitch and family
    pub pitch_and_family: u8,
    /// Average character width
    pub avg_width: u16,
    /// Widest character width
    pub max_width: u16,
    /// First character code defined by the font
    pub first_char: u8,
    /// Last character code defined by the font
    pub last_char: u8,
    /// Substitute for characters outside the font
    pub default_char: u8,
    /// Character used for word breaks
    pub break_char: u8,
    /// Bytes per row of a bitmap
    pub width_bytes: u16,
    /// Offset of the device name in the font file
    pub device: u32,
    /// Offset of the face name in the font file
    pub face: u32,
    /// Reserved
    pub reserved: u32,
    /// Device name
    pub device_name: String,
    /// Face name
    pub face_name: String,
}

/// A `DIRENTRY`: one font of the group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontGroupEntry {
    /// Ordinal of the font resource
    pub ordinal: u16,
    /// The font's metrics
    pub entry: FontDirEntry,
}

/// A decoded `FONTGROUPHDR`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontGroupHeader {
    /// Number of fonts declared by the header
    pub number_of_fonts: u16,
    /// The fonts
    pub entries: Vec<FontGroupEntry>,
}

impl FontDirEntry {
    fn read(parser: &mut Parser) -> Result<Self> {
        parser.ensure_remaining(FONT_DIR_ENTRY_FIXED_SIZE)?;

        Ok(FontDirEntry {
            version: parser.read_le::<u16>()?,
            size: parser.read_le::<u32>()?,
            copyright: parser.read_fixed_ascii(60)?,
            font_type: parser.read_le::<u16>()?,
            points: parser.read_le::<u16>()?,
            vert_res: parser.read_le::<u16>()?,
            horiz_res: parser.read_le::<u16>()?,
            ascent: parser.read_le::<u16>()?,
            internal_leading: parser.read_le::<u16>()?,
            external_leading: parser.read_le::<u16>()?,
            italic: parser.read_le::<u8>()?,
            underline: parser.read_le::<u8>()?,
            strike_out: parser.read_le::<u8>()?,
            weight: parser.read_le::<u16>()?,
            charset: parser.read_le::<u8>()?,
            pix_width: parser.read_le::<u16>()?,
            pix_height: parser.read_le::<u16>()?,
            pitch_and_family: parser.read_le::<u8>()?,
            avg_width: parser.read_le::<u16>()?,
            max_width: parser.read_le::<u16>()?,
            first_char: parser.read_le::<u8>()?,
            last_char: parser.read_le::<u8>()?,
            default_char: parser.read_le::<u8>()?,
            break_char: parser.read_le::<u8>()?,
            width_bytes: parser.read_le::<u16>()?,
            device: parser.read_le::<u32>()?,
            face: parser.read_le::<u32>()?,
            reserved: parser.read_le::<u32>()?,
            device_name: parser.read_prefixed_ascii()?,
            face_name: parser.read_prefixed_ascii()?,
        })
    }
}

/// Decode a font group with the default [`DecoderConfig`].
///
/// # Errors
/// See [`decode_font_group_with`].
pub fn decode_font_group(data: &[u8]) -> Result<FontGroupHeader> {
    decode_font_group_with(data, &DecoderConfig::default())
}

/// Decode a font group.
///
/// # Errors
/// - [`crate::Error::Empty`] if `data` is empty
/// - [`crate::Error::LimitExceeded`] if the font count exceeds `max_declared_count`
/// - [`crate::Error::OutOfBounds`] if the declared entries do not fit the buffer
pub fn decode_font_group_with(data: &[u8], config: &DecoderConfig) -> Result<FontGroupHeader> {
    if data.is_empty() {
        return Err(Error::Empty);
    }

    let mut parser = Parser::new(data);
    let number_of_fonts = parser.read_le::<u16>()?;
    config.check_count("font", u32::from(number_of_fonts))?;
    parser.ensure_remaining(usize::from(number_of_fonts) * MIN_ENTRY_SIZE)?;

    let mut entries = Vec::with_capacity(usize::from(number_of_fonts));
    for _ in 0..number_of_fonts {
        entries.push(FontGroupEntry {
            ordinal: parser.read_le::<u16>()?,
            entry: FontDirEntry::read(&mut parser)?,
        });
    }

    Ok(FontGroupHeader {
        number_of_fonts,
        entries,
    })
}
