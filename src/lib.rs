//! # typokit
//!
//! Small text utilities for writing Markdown documents in editors such as
//! Typora.
//!
//! ## Features
//!
//! - **Punctuation Conversion**: Rewrites full-width (CJK) punctuation as ASCII
//! - **Table Generation**: Emits HTML `<table>` markup with merged cells
//!   (`rowspan`/`colspan`), validated up front
//! - **Region Literals**: Parses `[(r1,c1),(r2,c2)]` merge regions from text
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Punctuation Conversion
//!
//! ```rust
//! use typokit::translate;
//!
//! let ascii = translate("他说：“早（啊）。”");
//! assert_eq!(ascii, "他说: \"早(啊). \"");
//! ```
//!
//! ### Table Generation
//!
//! ```rust
//! use typokit::{generate_table, AlignMode, MergeRegion};
//!
//! let merges = [
//!     MergeRegion::from_corners((1, 1), (2, 1)),
//!     MergeRegion::from_corners((1, 2), (1, 3)),
//! ];
//! let html = generate_table(3, 3, AlignMode::Center, &merges).unwrap();
//! assert!(html.contains("<td rowspan=\"2\"></td>"));
//! assert!(html.contains("<td colspan=\"2\"></td>"));
//! ```

/// Core conversion modules
pub mod core;

/// Data layer - static mappings
pub mod data;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core conversion functions
pub use crate::core::punct::{count_glyphs, is_source_glyph, translate, translate_into};
pub use crate::core::table;
pub use crate::core::table::{
    generate_table, generate_table_with_options, parse_merge_list, parse_merge_region, AlignMode,
    CellPos, MergeInput, MergeRegion, SpanKind, TableOptions, TableSpec,
};

// Re-export data modules
pub use data::glyphs;

// Re-export utilities
pub use utils::error::{ConversionError, ConversionResult};

/// Generate table markup, taking the alignment as its prompt code
/// (1 = left, 2 = center, 3 = right)
///
/// This is the entry point for callers that collect answers the way the
/// interactive prompt does; see [`generate_table`] for the typed variant.
pub fn generate_table_from_code(
    rows: usize,
    cols: usize,
    align_code: u8,
    merges: &[MergeRegion],
) -> ConversionResult<String> {
    let align = AlignMode::from_code(align_code)?;
    generate_table(rows, cols, align, merges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_reexport() {
        assert_eq!(translate("好！"), "好! ");
    }

    #[test]
    fn test_generate_from_code() {
        let html = generate_table_from_code(1, 2, 3, &[]).unwrap();
        assert!(html.contains("text-align:right;"));
    }

    #[test]
    fn test_generate_from_bad_code() {
        let err = generate_table_from_code(1, 2, 4, &[]).unwrap_err();
        assert!(err.is_invalid_input());
        let err = generate_table_from_code(1, 2, 0, &[]).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
