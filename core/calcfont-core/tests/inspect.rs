//! Reading real (tiny) TrueType fonts: names, glyph counts, coverage, hinting.
#![cfg(feature = "fontations")]

use std::fs;
use std::path::{Path, PathBuf};

use calcfont_core::charset::CharacterSet;
use calcfont_core::inspect::FontSummary;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn reads_name_glyph_count_and_hinting() {
    let summary = FontSummary::from_path(&fixture("CalcTest-Hinted.ttf")).expect("summary");

    assert_eq!(summary.name.as_deref(), Some("Calc Test Mono"));
    assert_eq!(summary.glyph_count, 15);
    assert!(summary.has_hinting);
    assert_eq!(summary.codepoints.len(), 14);
    assert!(summary.codepoints.contains(&'7'));
    assert!(summary.codepoints.contains(&' '));
}

#[test]
fn unhinted_font_has_no_hinting_tables() {
    let data = fs::read(fixture("CalcTest-Unhinted.ttf")).expect("read fixture");
    let summary = FontSummary::from_data(&data).expect("summary");

    assert!(!summary.has_hinting);
    assert_eq!(summary.glyph_count, 15);
    assert_eq!(summary.name.as_deref(), Some("Calc Test Mono"));
}

#[test]
fn missing_chars_lists_what_the_font_cannot_map() {
    let summary = FontSummary::from_path(&fixture("CalcTest-Unhinted.ttf")).expect("summary");
    let missing = summary.missing_chars(&CharacterSet::calculator());

    assert_eq!(missing.len(), 104 - 14);
    assert!(missing.contains(&'\u{2E23}'));
    assert!(missing.contains(&'x'));
    assert!(!missing.contains(&'0'));
    assert!(!missing.contains(&'+'));
}

#[test]
fn covered_set_has_nothing_missing() {
    let summary = FontSummary::from_path(&fixture("CalcTest-Hinted.ttf")).expect("summary");
    let digits = CharacterSet::from_chars("0123456789.+-".chars());

    assert!(summary.missing_chars(&digits).is_empty());
}
