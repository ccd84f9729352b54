//! Font inspection helpers (made by FontLab https://www.fontlab.com/)
//!
//! Reads just enough of a font to tell whether a subset will cover the
//! calculator's characters and whether hinting really went away.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use read_fonts::tables::name::NameId;
use read_fonts::types::Tag;
use read_fonts::{FontRef, ReadError, TableProvider};
use skrifa::{FontRef as SkrifaFontRef, MetadataProvider};

use crate::charset::CharacterSet;
use crate::error::BuildError;

const HINTING_TABLES: [Tag; 3] = [Tag::new(b"fpgm"), Tag::new(b"prep"), Tag::new(b"cvt ")];

/// What we learned from one font face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSummary {
    pub name: Option<String>,
    pub glyph_count: u16,
    pub codepoints: BTreeSet<char>,
    pub has_hinting: bool,
}

impl FontSummary {
    /// Summarise the first face in `data` (collections use face 0).
    pub fn from_data(data: &[u8]) -> Result<Self, ReadError> {
        let font = FontRef::from_index(data, 0)?;
        let sfont = SkrifaFontRef::from_index(data, 0)?;

        let glyph_count = font.maxp()?.num_glyphs();
        let has_hinting = HINTING_TABLES
            .iter()
            .any(|tag| font.table_data(*tag).is_some());

        Ok(Self {
            name: display_name(&font),
            glyph_count,
            codepoints: collect_codepoints(&sfont),
            has_hinting,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, BuildError> {
        let data = fs::read(path).map_err(|source| BuildError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_data(&data).map_err(|source| BuildError::UnreadableFont {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Required characters this font has no glyph for.
    pub fn missing_chars(&self, chars: &CharacterSet) -> Vec<char> {
        chars
            .iter()
            .filter(|ch| !self.codepoints.contains(ch))
            .collect()
    }
}

fn collect_codepoints(font: &SkrifaFontRef) -> BTreeSet<char> {
    font.charmap()
        .mappings()
        .filter_map(|(cp, _)| char::from_u32(cp))
        .collect()
}

/// Full name if present, otherwise the family name.
fn display_name(font: &FontRef) -> Option<String> {
    let name_table = font.name().ok()?;
    let data = name_table.string_data();

    let lookup = |wanted: NameId| {
        name_table
            .name_record()
            .iter()
            .filter(|record| record.is_unicode() && record.name_id() == wanted)
            .filter_map(|record| record.string(data).ok())
            .map(|entry| entry.to_string().trim().to_string())
            .find(|rendered| !rendered.is_empty())
    };

    lookup(NameId::FULL_NAME).or_else(|| lookup(NameId::FAMILY_NAME))
}
