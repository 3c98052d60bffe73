use crate::{
    file::parser::Parser,
    resources::version::{finish_block, VersionHeader, VAR_FILE_INFO_KEY},
    DecoderConfig, Result,
};

const TRANSLATION_KEY: &str = "Translation";

/// A language id and code page pair from a `Translation` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LanguageCodePage {
    /// Microsoft language identifier, e.g. `0x0409` for en-US
    pub language: u16,
    /// IBM code page, e.g. `0x04B0` (1200) for UTF-16
    pub code_page: u16,
}

/// A `VarFileInfo` block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VarFileInfo {
    /// Block header; its key is always `VarFileInfo`
    pub header: VersionHeader,
    /// The `Var` children; every one is keyed `Translation`
    pub children: Vec<VarData>,
}

/// A `Var` block holding the languages and code pages the file supports.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VarData {
    /// Block header; its key is always `Translation`
    pub header: VersionHeader,
    /// The pairs stored in the value
    pub translations: Vec<LanguageCodePage>,
}

impl VarFileInfo {
    pub(crate) fn read(parser: &mut Parser, config: &DecoderConfig) -> Result<Self> {
        let start = parser.pos();
        let header = VersionHeader::read_expecting(parser, VAR_FILE_INFO_KEY)?;
        parser.align(4);

        let end = header.end(start, parser)?;
        let mut children = Vec::new();
        while parser.pos() < end {
            config.check_len("version var", children.len())?;
            children.push(VarData::read(parser)?);
        }

        finish_block(parser, start, &header)?;
        Ok(VarFileInfo { header, children })
    }
}

impl VarData {
    fn read(parser: &mut Parser) -> Result<Self> {
        let start = parser.pos();
        let header = VersionHeader::read_expecting(parser, TRANSLATION_KEY)?;
        parser.align(4);

        let end = header.end(start, parser)?;
        let value_end = parser
            .pos()
            .saturating_add(usize::from(header.value_length))
            .min(end);

        let mut translations = Vec::with_capacity(usize::from(header.value_length) / 4);
        while parser.pos() + 4 <= value_end {
            translations.push(LanguageCodePage {
                language: parser.read_le::<u16>()?,
                code_page: parser.read_le::<u16>()?,
            });
        }

        finish_block(parser, start, &header)?;
        Ok(VarData {
            header,
            translations,
        })
    }
}
