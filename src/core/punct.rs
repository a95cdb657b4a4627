//! Punctuation conversion
//!
//! Rewrites full-width (CJK) punctuation in a text buffer using the fixed
//! table in [`crate::data::glyphs`]. Every other character passes through.
//!
//! ## Example
//!
//! ```rust
//! use typokit::translate;
//!
//! assert_eq!(translate("他说：“早（啊）。”"), "他说: \"早(啊). \"");
//! ```

use crate::data::glyphs::{get_replacement, has_replacement};

/// Convert full-width punctuation in `text` to ASCII
pub fn translate(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    translate_into(text, &mut output);
    output
}

/// Convert `text`, appending the result to `output`
pub fn translate_into(text: &str, output: &mut String) {
    for c in text.chars() {
        match get_replacement(c) {
            Some(replacement) => output.push_str(replacement),
            None => output.push(c),
        }
    }
}

/// Number of characters in `text` that [`translate`] would replace
pub fn count_glyphs(text: &str) -> usize {
    text.chars().filter(|&c| has_replacement(c)).count()
}

/// Check if a character is rewritten by [`translate`]
pub fn is_source_glyph(c: char) -> bool {
    has_replacement(c)
}
