//! HTML Table Generation Engine
//!
//! Generates the HTML `<table>` markup that Markdown editors such as Typora
//! render, for a rectangular grid in which rectangles of unit cells can be
//! merged into a single cell with `rowspan`/`colspan`.
//!
//! # Architecture
//!
//! ```text
//! Region literals -> Parser -> TableSpec (validated) -> Occupancy grid -> HTML
//! ```
//!
//! # Example
//!
//! ```rust
//! use typokit::table::{generate_table, AlignMode, MergeRegion};
//!
//! let html = generate_table(
//!     2,
//!     2,
//!     AlignMode::Left,
//!     &[MergeRegion::from_corners((1, 1), (1, 2))],
//! )
//! .unwrap();
//! assert!(html.contains("<td colspan=\"2\"></td>"));
//! ```

mod cell;
mod generator;
mod parser;


// Re-export public API
pub use cell::{AlignMode, CellPos, MergeRegion, SpanKind};
pub use generator::{HtmlTableGenerator, TableOptions, TableSpec};
pub use parser::{
    parse_dimension, parse_merge_list, parse_merge_region, MergeInput, END_OF_REGIONS,
};

use crate::utils::error::ConversionResult;

/// Generate table markup with the default layout
///
/// Fails with [`crate::ConversionError::InvalidInput`] before producing any
/// output if a dimension is zero or a region is inverted, single-cell,
/// out of bounds, or overlaps another region.
pub fn generate_table(
    rows: usize,
    cols: usize,
    align: AlignMode,
    merges: &[MergeRegion],
) -> ConversionResult<String> {
    generate_table_with_options(rows, cols, align, merges, &TableOptions::default())
}

/// Generate table markup with custom layout options
pub fn generate_table_with_options(
    rows: usize,
    cols: usize,
    align: AlignMode,
    merges: &[MergeRegion],
    options: &TableOptions,
) -> ConversionResult<String> {
    let spec = TableSpec {
        rows,
        cols,
        align,
        merges: merges.to_vec(),
    };
    spec.generate(options)
}
