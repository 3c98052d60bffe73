use crate::{
    file::parser::Parser,
    resources::version::{finish_block, LanguageCodePage, VersionHeader, STRING_FILE_INFO_KEY},
    DecoderConfig, Result,
};

/// A `StringFileInfo` block: one string table per language/code page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringFileInfo {
    /// Block header; its key is always `StringFileInfo`
    pub header: VersionHeader,
    /// The string tables in stored order
    pub tables: Vec<StringTableBlock>,
}

/// A `StringTable` block inside a [`StringFileInfo`].
///
/// The key is eight hex digits: the language id followed by the code page, e.g. `040904B0`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringTableBlock {
    /// Block header carrying the language/code page key
    pub header: VersionHeader,
    /// The key/value entries in stored order
    pub children: Vec<StringData>,
}

/// A `String` block: one key/value pair such as `ProductName` = `Widget`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringData {
    /// Block header; the key is the name of the value
    pub header: VersionHeader,
    /// The value without its trailing NUL
    pub value: String,
}

impl StringFileInfo {
    pub(crate) fn read(parser: &mut Parser, config: &DecoderConfig) -> Result<Self> {
        let start = parser.pos();
        let header = VersionHeader::read_expecting(parser, STRING_FILE_INFO_KEY)?;
        parser.align(4);

        let end = header.end(start, parser)?;
        let mut tables = Vec::new();
        while parser.pos() < end {
            config.check_len("string table", tables.len())?;
            tables.push(StringTableBlock::read(parser, config)?);
        }

        finish_block(parser, start, &header)?;
        Ok(StringFileInfo { header, tables })
    }
}

impl StringTableBlock {
    fn read(parser: &mut Parser, config: &DecoderConfig) -> Result<Self> {
        let start = parser.pos();
        let header = VersionHeader::read(parser)?;
        parser.align(4);

        let end = header.end(start, parser)?;
        let mut children = Vec::new();
        while parser.pos() < end {
            config.check_len("version string", children.len())?;
            children.push(StringData::read(parser)?);
        }

        finish_block(parser, start, &header)?;
        Ok(StringTableBlock { header, children })
    }

    /// Look up the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.children
            .iter()
            .find(|child| child.header.key == key)
            .map(|child| child.value.as_str())
    }

    /// Parse the language id and code page out of the table key.
    #[must_use]
    pub fn language_code_page(&self) -> Option<LanguageCodePage> {
        let key = &self.header.key;
        if key.len() != 8 {
            return None;
        }

        let language = u16::from_str_radix(key.get(..4)?, 16).ok()?;
        let code_page = u16::from_str_radix(key.get(4..)?, 16).ok()?;
        Some(LanguageCodePage {
            language,
            code_page,
        })
    }
}

impl StringData {
    fn read(parser: &mut Parser) -> Result<Self> {
        let start = parser.pos();
        let header = VersionHeader::read(parser)?;
        parser.align(4);

        let end = header.end(start, parser)?;
        let available = end.saturating_sub(parser.pos()) / 2;
        let declared = usize::from(header.value_length);
        if declared > available {
            log::debug!(
                "Version string '{}' declares {} units, block holds {}",
                header.key,
                declared,
                available
            );
        }

        let value = parser.read_wide_string_units(declared.min(available))?;
        let value = value.trim_end_matches('\0').to_string();

        finish_block(parser, start, &header)?;
        Ok(StringData { header, value })
    }
}
