//! Punctuation glyph mappings
//!
//! This module provides the fixed table used to rewrite full-width (CJK)
//! punctuation as its ASCII counterpart. Sentence and clause marks gain a
//! trailing space; quotes and parentheses map one-to-one.

use phf::phf_ordered_map;

/// Full-width glyph to ASCII replacement
/// Iteration order is the table order below
pub static GLYPH_MAP: phf::OrderedMap<char, &'static str> = phf_ordered_map! {
    // Sentence and clause punctuation
    '。' => ". ",
    '，' => ", ",
    '；' => "; ",
    '：' => ": ",

    // Quotation marks
    '“' => "\"",
    '”' => "\"",
    '’' => "'",
    '‘' => "'",

    // Sentence-final marks
    '？' => "? ",
    '！' => "! ",

    // Brackets
    '（' => "(",
    '）' => ")",
};

/// Look up the replacement for a glyph
pub fn get_replacement(c: char) -> Option<&'static str> {
    GLYPH_MAP.get(&c).copied()
}

/// Check if a character is a mapped source glyph
pub fn has_replacement(c: char) -> bool {
    GLYPH_MAP.contains_key(&c)
}
