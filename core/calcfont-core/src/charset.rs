//! The characters the calculator draws (made by FontLab https://www.fontlab.com/)
//!
//! Everything the calculator UI can put on screen lives in one constant. The
//! subset tool receives it as a `--unicodes=` list, so the set is kept
//! deduplicated and ordered: one `U+XXXX` token per character, same string
//! on every run.

use std::collections::BTreeSet;

use anyhow::{anyhow, Result};

/// Every character the calculator renders.
pub const CALCULATOR_CHARS: &str = concat!(
    // digits
    "0123456789",
    // function names and labels
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    // punctuation
    ".,;:!?'\"-+=*/\\()[]{}|_<>@#$%&^`~",
    // math operators
    "\u{00D7}", // × multiplication
    "\u{00F7}", // ÷ division
    "\u{2212}", // − minus
    "\u{00B1}", // ± plus-minus
    "\u{221A}", // √ square root
    "\u{00B2}", // ² superscript two
    "\u{02B8}", // ʸ superscript y
    "\u{03C0}", // π
    "\u{2E23}", // ⸣ open-paren indicator
    " ",
);

/// Deduplicated set of Unicode scalar values to keep in the subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSet {
    chars: BTreeSet<char>,
}

impl Default for CharacterSet {
    fn default() -> Self {
        Self::calculator()
    }
}

impl CharacterSet {
    /// The calculator's fixed set.
    pub fn calculator() -> Self {
        Self::from_chars(CALCULATOR_CHARS.chars())
    }

    pub fn from_chars<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// Merge more characters in; anything already present is ignored.
    pub fn with_extra<I>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.chars.extend(extra);
        self
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// Comma-joined `U+XXXX` tokens, the value of the subsetter's `--unicodes=`.
    pub fn unicodes_arg(&self) -> String {
        self.iter().map(format_codepoint).collect::<Vec<_>>().join(",")
    }
}

/// `U+` followed by at least four uppercase hex digits.
pub fn format_codepoint(ch: char) -> String {
    format!("U+{:04X}", ch as u32)
}

/// Parse comma-delimited codepoints and ranges (e.g. `U+0041-U+0044,B`).
pub fn parse_codepoint_list(input: &str) -> Result<Vec<char>> {
    let mut result = Vec::new();
    if input.trim().is_empty() {
        return Ok(result);
    }

    for part in input.split(',') {
        let part = part.trim();
        if part.len() > 1 && part.contains('-') {
            let (start, end) = part
                .split_once('-')
                .ok_or_else(|| anyhow!("invalid range: {part}"))?;
            let start = parse_codepoint(start)? as u32;
            let end = parse_codepoint(end)? as u32;
            let (lo, hi) = if start <= end {
                (start, end)
            } else {
                (end, start)
            };
            result.extend((lo..=hi).filter_map(char::from_u32));
        } else {
            result.push(parse_codepoint(part)?);
        }
    }

    Ok(result)
}

fn parse_codepoint(token: &str) -> Result<char> {
    let mut chars = token.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Ok(ch);
    }

    let trimmed = token.trim_start_matches("U+").trim_start_matches("u+");
    let cp = u32::from_str_radix(trimmed, 16).map_err(|_| anyhow!("invalid codepoint: {token}"))?;
    char::from_u32(cp).ok_or_else(|| anyhow!("invalid Unicode scalar: U+{cp:04X}"))
}
