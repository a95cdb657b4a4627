//! Occupancy-grid HTML table generator

use std::fmt::Write;

use fxhash::FxHashMap;
use tracing::{debug, trace};

use super::cell::{AlignMode, CellPos, MergeRegion, SpanKind};
use crate::utils::error::{ConversionError, ConversionResult};

/// Output layout options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Spaces per nesting level (`<tr>` is one level deep, `<td>` two)
    pub indent_width: usize,
    /// Put every element on its own line
    pub newlines: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            newlines: true,
        }
    }
}

impl TableOptions {
    /// Single-line output without indentation
    pub fn compact() -> Self {
        Self {
            indent_width: 0,
            newlines: false,
        }
    }

    /// Create options with a custom indent width
    pub fn with_indent(indent_width: usize) -> Self {
        Self {
            indent_width,
            ..Default::default()
        }
    }
}

/// Everything needed to render one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    /// Number of unit rows
    pub rows: usize,
    /// Number of unit columns
    pub cols: usize,
    /// Table-wide text alignment
    pub align: AlignMode,
    /// Merge regions, in input order
    pub merges: Vec<MergeRegion>,
}

impl TableSpec {
    /// Create a spec without merges
    pub fn new(rows: usize, cols: usize, align: AlignMode) -> Self {
        TableSpec {
            rows,
            cols,
            align,
            merges: Vec::new(),
        }
    }

    /// Add a merge region
    pub fn merge(mut self, region: MergeRegion) -> Self {
        self.merges.push(region);
        self
    }

    /// Check dimensions and regions
    ///
    /// Regions must be well-formed, inside the table, span more than one
    /// cell, and be pairwise disjoint.
    pub fn validate(&self) -> ConversionResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConversionError::invalid(format!(
                "table must have at least one row and one column (got {}x{})",
                self.rows, self.cols
            )));
        }

        if self.rows.checked_mul(self.cols).is_none() {
            return Err(ConversionError::invalid(format!(
                "table of {}x{} cells is too large",
                self.rows, self.cols
            )));
        }

        for region in &self.merges {
            region.validate(self.rows, self.cols)?;
        }

        for (i, a) in self.merges.iter().enumerate() {
            if let Some(b) = self.merges[i + 1..].iter().find(|b| a.overlaps(b)) {
                return Err(ConversionError::invalid(format!(
                    "merge regions {} and {} overlap",
                    a, b
                )));
            }
        }

        Ok(())
    }

    /// Validate and render with the given options
    pub fn generate(&self, options: &TableOptions) -> ConversionResult<String> {
        let generator = HtmlTableGenerator::new(self, options.clone())?;
        Ok(generator.generate_html())
    }
}

/// HTML table generator
///
/// Walks the grid in row-major order, keeping an occupancy flag per unit
/// cell. A region's anchor emits one spanning `<td>` and clears the flags of
/// every cell it covers, so later positions inside the region emit nothing.
pub struct HtmlTableGenerator<'a> {
    spec: &'a TableSpec,
    options: TableOptions,
    /// Regions keyed by their top-left corner
    anchors: FxHashMap<CellPos, MergeRegion>,
}

impl<'a> HtmlTableGenerator<'a> {
    /// Create a generator for a validated spec
    pub fn new(spec: &'a TableSpec, options: TableOptions) -> ConversionResult<Self> {
        spec.validate()?;

        let mut anchors = FxHashMap::default();
        for region in &spec.merges {
            anchors.entry(region.top_left).or_insert(*region);
        }

        Ok(HtmlTableGenerator {
            spec,
            options,
            anchors,
        })
    }

    /// Generate the complete `<table>` markup
    pub fn generate_html(&self) -> String {
        debug!(
            rows = self.spec.rows,
            cols = self.spec.cols,
            merges = self.spec.merges.len(),
            align = %self.spec.align,
            "generating table"
        );

        let mut output = String::new();
        self.line(
            &mut output,
            0,
            &format!("<table style=\"text-align:{};\">", self.spec.align.to_css()),
        );

        if self.spec.merges.is_empty() {
            for _ in 0..self.spec.rows {
                self.line(&mut output, 1, "<tr>");
                for _ in 0..self.spec.cols {
                    self.line(&mut output, 2, "<td></td>");
                }
                self.line(&mut output, 1, "</tr>");
            }
        } else {
            self.write_merged_rows(&mut output);
        }

        output.push_str("</table>");
        output
    }

    fn write_merged_rows(&self, output: &mut String) {
        let cols = self.spec.cols;
        // true = the unit cell still renders its own <td>
        let mut occupancy = vec![true; self.spec.rows * cols];

        for row in 1..=self.spec.rows {
            self.line(output, 1, "<tr>");

            for col in 1..=cols {
                if !occupancy[(row - 1) * cols + (col - 1)] {
                    continue;
                }

                match self.anchors.get(&CellPos::new(row, col)) {
                    Some(region) => {
                        for r in region.top_left.row..=region.bottom_right.row {
                            for c in region.top_left.col..=region.bottom_right.col {
                                occupancy[(r - 1) * cols + (c - 1)] = false;
                            }
                        }
                        trace!(region = %region, "merged cell");
                        self.line(output, 2, &merged_cell(region));
                    }
                    None => self.line(output, 2, "<td></td>"),
                }
            }

            self.line(output, 1, "</tr>");
        }
    }

    fn line(&self, output: &mut String, level: usize, text: &str) {
        if self.options.newlines {
            let _ = writeln!(
                output,
                "{:indent$}{}",
                "",
                text,
                indent = level * self.options.indent_width
            );
        } else {
            output.push_str(text);
        }
    }
}

/// Markup for the anchor cell of a validated region
fn merged_cell(region: &MergeRegion) -> String {
    match region.span_kind() {
        Some(SpanKind::Horizontal) => format!("<td colspan=\"{}\"></td>", region.colspan()),
        Some(SpanKind::Vertical) => format!("<td rowspan=\"{}\"></td>", region.rowspan()),
        Some(SpanKind::Both) => format!(
            "<td colspan=\"{}\" rowspan=\"{}\"></td>",
            region.colspan(),
            region.rowspan()
        ),
        None => unreachable!("single-cell region {} passed TableSpec::validate", region),
    }
}
