/// The `--unicodes` argument carries every required character exactly once.
use std::collections::HashSet;

use calcfont_core::charset::{format_codepoint, CharacterSet, CALCULATOR_CHARS};
use proptest::prelude::*;

fn tokens(arg: &str) -> Vec<&str> {
    arg.split(',').filter(|t| !t.is_empty()).collect()
}

#[test]
fn upper_and_lower_a_appear_once_each() {
    let arg = CharacterSet::calculator().unicodes_arg();
    let toks = tokens(&arg);

    assert_eq!(toks.iter().filter(|t| **t == "U+0041").count(), 1);
    assert_eq!(toks.iter().filter(|t| **t == "U+0061").count(), 1);
}

#[test]
fn every_calculator_char_has_a_token() {
    let arg = CharacterSet::calculator().unicodes_arg();
    let toks: HashSet<&str> = tokens(&arg).into_iter().collect();

    for ch in CALCULATOR_CHARS.chars() {
        assert!(toks.contains(format_codepoint(ch).as_str()), "missing {ch:?}");
    }
}

#[test]
fn cardinality_is_stable_across_constructions() {
    let first = CharacterSet::calculator();
    let second = CharacterSet::default();
    assert_eq!(first.len(), second.len());
    assert_eq!(first.unicodes_arg(), second.unicodes_arg());
}

#[test]
fn math_symbols_are_present() {
    let arg = CharacterSet::calculator().unicodes_arg();
    for token in ["U+00D7", "U+00F7", "U+2212", "U+221A", "U+03C0", "U+2E23", "U+0020"] {
        assert!(tokens(&arg).contains(&token), "missing {token}");
    }
}

proptest! {
    #[test]
    fn one_token_per_distinct_char(text in "\\PC{0,64}") {
        let set = CharacterSet::from_chars(text.chars());
        let arg = set.unicodes_arg();
        let toks = tokens(&arg);

        let distinct: HashSet<char> = text.chars().collect();
        prop_assert_eq!(toks.len(), distinct.len());

        let unique: HashSet<&str> = toks.iter().copied().collect();
        prop_assert_eq!(unique.len(), toks.len());

        for ch in distinct {
            let token = format_codepoint(ch);
            prop_assert!(toks.contains(&token.as_str()));
        }
    }

    #[test]
    fn tokens_are_upper_hex_with_four_digit_minimum(ch in any::<char>()) {
        let token = format_codepoint(ch);
        let digits = token.strip_prefix("U+").expect("prefix");
        prop_assert!(digits.len() >= 4);
        prop_assert!(digits.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
        prop_assert_eq!(u32::from_str_radix(digits, 16).unwrap(), ch as u32);
    }
}
