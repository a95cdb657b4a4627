//! Core conversion modules
//!
//! This module contains the two text generators:
//! - `punct`: full-width punctuation to ASCII
//! - `table`: HTML table markup with merged cells

pub mod punct;
pub mod table;

// Re-export main functions
pub use punct::{count_glyphs, is_source_glyph, translate, translate_into};
pub use table::{
    generate_table, generate_table_with_options, AlignMode, MergeRegion, TableOptions, TableSpec,
};
