//! Cell coordinates, merge regions and alignment for HTML table generation

use std::fmt;
use std::str::FromStr;

use crate::utils::error::{ConversionError, ConversionResult};

/// Table-wide text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignMode {
    Left,
    #[default]
    Center,
    Right,
}

impl AlignMode {
    /// Parse from the numeric code used by the interactive prompt
    /// (1 = left, 2 = center, 3 = right)
    pub fn from_code(code: u8) -> ConversionResult<Self> {
        match code {
            1 => Ok(AlignMode::Left),
            2 => Ok(AlignMode::Center),
            3 => Ok(AlignMode::Right),
            other => Err(ConversionError::invalid(format!(
                "alignment code {} is not one of 1 (left), 2 (center), 3 (right)",
                other
            ))),
        }
    }

    /// Numeric prompt code
    pub fn code(&self) -> u8 {
        match self {
            AlignMode::Left => 1,
            AlignMode::Center => 2,
            AlignMode::Right => 3,
        }
    }

    /// Value of the CSS `text-align` property
    pub fn to_css(&self) -> &'static str {
        match self {
            AlignMode::Left => "left",
            AlignMode::Center => "center",
            AlignMode::Right => "right",
        }
    }
}

impl FromStr for AlignMode {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        match value.to_lowercase().as_str() {
            "left" | "l" => Ok(AlignMode::Left),
            "center" | "c" => Ok(AlignMode::Center),
            "right" | "r" => Ok(AlignMode::Right),
            _ => match value.parse::<u8>() {
                Ok(code) => AlignMode::from_code(code),
                Err(_) => Err(ConversionError::invalid(format!(
                    "unknown alignment '{}' (expected left, center, right or 1-3)",
                    value
                ))),
            },
        }
    }
}

impl fmt::Display for AlignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_css())
    }
}

/// A 1-indexed unit-cell position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub fn new(row: usize, col: usize) -> Self {
        CellPos { row, col }
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// How a merge region spans the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// One row, several columns
    Horizontal,
    /// One column, several rows
    Vertical,
    /// Several rows and columns
    Both,
}

/// A rectangle of unit cells rendered as one `<td>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeRegion {
    /// Anchor (top-left corner)
    pub top_left: CellPos,
    /// Bottom-right corner, inclusive
    pub bottom_right: CellPos,
}

impl MergeRegion {
    /// Create a region from its corners
    pub fn new(top_left: CellPos, bottom_right: CellPos) -> Self {
        MergeRegion {
            top_left,
            bottom_right,
        }
    }

    /// Create a region from `(r1, c1)` and `(r2, c2)` tuples
    pub fn from_corners(top_left: (usize, usize), bottom_right: (usize, usize)) -> Self {
        MergeRegion::new(
            CellPos::new(top_left.0, top_left.1),
            CellPos::new(bottom_right.0, bottom_right.1),
        )
    }

    /// Number of rows covered
    pub fn rowspan(&self) -> usize {
        self.bottom_right.row.saturating_sub(self.top_left.row) + 1
    }

    /// Number of columns covered
    pub fn colspan(&self) -> usize {
        self.bottom_right.col.saturating_sub(self.top_left.col) + 1
    }

    /// Classify the span, or `None` for a single cell
    pub fn span_kind(&self) -> Option<SpanKind> {
        let same_row = self.top_left.row == self.bottom_right.row;
        let same_col = self.top_left.col == self.bottom_right.col;
        match (same_row, same_col) {
            (true, false) => Some(SpanKind::Horizontal),
            (false, true) => Some(SpanKind::Vertical),
            (false, false) => Some(SpanKind::Both),
            (true, true) => None,
        }
    }

    /// Check if the region covers `pos`
    pub fn contains(&self, pos: CellPos) -> bool {
        (self.top_left.row..=self.bottom_right.row).contains(&pos.row)
            && (self.top_left.col..=self.bottom_right.col).contains(&pos.col)
    }

    /// Check if two regions share at least one unit cell
    pub fn overlaps(&self, other: &MergeRegion) -> bool {
        self.top_left.row <= other.bottom_right.row
            && other.top_left.row <= self.bottom_right.row
            && self.top_left.col <= other.bottom_right.col
            && other.top_left.col <= self.bottom_right.col
    }

    /// Check the region on its own and against a `rows × cols` grid
    pub fn validate(&self, rows: usize, cols: usize) -> ConversionResult<()> {
        if self.top_left.row == 0 || self.top_left.col == 0 {
            return Err(ConversionError::invalid(format!(
                "merge region {}: coordinates are 1-indexed",
                self
            )));
        }
        if self.top_left.row > self.bottom_right.row || self.top_left.col > self.bottom_right.col
        {
            return Err(ConversionError::invalid(format!(
                "merge region {}: top-left corner must not lie below or right of bottom-right corner",
                self
            )));
        }
        if self.span_kind().is_none() {
            return Err(ConversionError::invalid(format!(
                "merge region {} covers a single cell",
                self
            )));
        }
        if self.bottom_right.row > rows || self.bottom_right.col > cols {
            return Err(ConversionError::invalid(format!(
                "merge region {} lies outside the {}x{} table",
                self, rows, cols
            )));
        }
        Ok(())
    }
}

impl fmt::Display for MergeRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.top_left, self.bottom_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_codes() {
        assert_eq!(AlignMode::from_code(1).unwrap(), AlignMode::Left);
        assert_eq!(AlignMode::from_code(2).unwrap(), AlignMode::Center);
        assert_eq!(AlignMode::from_code(3).unwrap(), AlignMode::Right);
        assert!(AlignMode::from_code(0).is_err());
        assert!(AlignMode::from_code(4).unwrap_err().is_invalid_input());
        assert_eq!(AlignMode::Right.code(), 3);
    }

    #[test]
    fn test_align_from_str() {
        assert_eq!("Left".parse::<AlignMode>().unwrap(), AlignMode::Left);
        assert_eq!(" center ".parse::<AlignMode>().unwrap(), AlignMode::Center);
        assert_eq!("3".parse::<AlignMode>().unwrap(), AlignMode::Right);
        assert!("justify".parse::<AlignMode>().is_err());
        assert!("7".parse::<AlignMode>().is_err());
    }

    #[test]
    fn test_span_kind() {
        let h = MergeRegion::from_corners((1, 2), (1, 3));
        let v = MergeRegion::from_corners((1, 1), (2, 1));
        let b = MergeRegion::from_corners((3, 2), (4, 3));
        let single = MergeRegion::from_corners((2, 2), (2, 2));
        assert_eq!(h.span_kind(), Some(SpanKind::Horizontal));
        assert_eq!(v.span_kind(), Some(SpanKind::Vertical));
        assert_eq!(b.span_kind(), Some(SpanKind::Both));
        assert_eq!(single.span_kind(), None);
        assert_eq!((b.rowspan(), b.colspan()), (2, 2));
    }

    #[test]
    fn test_overlaps() {
        let a = MergeRegion::from_corners((1, 1), (2, 2));
        let b = MergeRegion::from_corners((2, 2), (3, 3));
        let c = MergeRegion::from_corners((1, 3), (2, 3));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn test_contains() {
        let r = MergeRegion::from_corners((2, 1), (3, 2));
        assert!(r.contains(CellPos::new(2, 1)));
        assert!(r.contains(CellPos::new(3, 2)));
        assert!(!r.contains(CellPos::new(1, 1)));
        assert!(!r.contains(CellPos::new(3, 3)));
    }

    #[test]
    fn test_validate() {
        assert!(MergeRegion::from_corners((1, 1), (1, 2)).validate(2, 2).is_ok());
        assert!(MergeRegion::from_corners((2, 1), (1, 1)).validate(2, 2).is_err());
        assert!(MergeRegion::from_corners((1, 2), (2, 1)).validate(2, 2).is_err());
        assert!(MergeRegion::from_corners((1, 1), (1, 1)).validate(2, 2).is_err());
        assert!(MergeRegion::from_corners((1, 1), (1, 3)).validate(2, 2).is_err());
        assert!(MergeRegion::from_corners((0, 1), (1, 2)).validate(2, 2).is_err());
    }

    #[test]
    fn test_display() {
        let r = MergeRegion::from_corners((1, 1), (2, 1));
        assert_eq!(r.to_string(), "[(1,1),(2,1)]");
    }
}
