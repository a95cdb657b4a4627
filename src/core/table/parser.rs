//! Parsing of table dimensions and merge-region literals
//!
//! Region literals use the `[(r1,c1),(r2,c2)]` notation of the interactive
//! prompt; `-1` ends the list. Input is matched structurally, never evaluated.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::cell::MergeRegion;
use crate::utils::error::{ConversionError, ConversionResult};

/// Sentinel that ends interactive region input
pub const END_OF_REGIONS: &str = "-1";

lazy_static! {
    static ref REGION_RE: Regex = Regex::new(
        r"\[\s*\(\s*(\d+)\s*,\s*(\d+)\s*\)\s*,\s*\(\s*(\d+)\s*,\s*(\d+)\s*\)\s*\]"
    )
    .unwrap();
}

/// One answer to the region prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeInput {
    /// A region literal
    Region(MergeRegion),
    /// The `-1` sentinel
    End,
}

/// Parse a single region literal or the end sentinel
pub fn parse_merge_region(input: &str) -> ConversionResult<MergeInput> {
    let trimmed = input.trim();
    if trimmed == END_OF_REGIONS {
        return Ok(MergeInput::End);
    }

    match REGION_RE.captures(trimmed) {
        Some(caps) if caps.get(0).map(|m| m.as_str()) == Some(trimmed) => {
            region_from_captures(&caps).map(MergeInput::Region)
        }
        _ => Err(malformed(trimmed)),
    }
}

/// Parse a bracketed list of region literals, e.g. `[[(1,1),(2,1)],[(1,2),(1,3)]]`
///
/// The empty list `[]` yields no regions.
pub fn parse_merge_list(input: &str) -> ConversionResult<Vec<MergeRegion>> {
    let trimmed = input.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| {
            ConversionError::invalid(format!("region list '{}' must be enclosed in [ ]", trimmed))
        })?;

    let mut regions = Vec::new();
    let mut last_end = 0;

    for caps in REGION_RE.captures_iter(inner) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let gap = inner[last_end..whole.start()].trim();
        let expected_gap = if regions.is_empty() { "" } else { "," };
        if gap != expected_gap {
            return Err(malformed(trimmed));
        }
        regions.push(region_from_captures(&caps)?);
        last_end = whole.end();
    }

    if !inner[last_end..].trim().is_empty() {
        return Err(malformed(trimmed));
    }

    Ok(regions)
}

/// Parse a row or column count
pub fn parse_dimension(input: &str) -> ConversionResult<usize> {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(0) => Err(ConversionError::invalid("table dimensions must be at least 1")),
        Ok(n) => Ok(n),
        Err(_) => Err(ConversionError::invalid(format!(
            "'{}' is not a positive integer",
            trimmed
        ))),
    }
}

fn region_from_captures(caps: &Captures<'_>) -> ConversionResult<MergeRegion> {
    let mut coords = [0usize; 4];
    for (i, slot) in coords.iter_mut().enumerate() {
        let text = caps.get(i + 1).map(|m| m.as_str()).unwrap_or_default();
        *slot = text
            .parse()
            .map_err(|_| ConversionError::invalid(format!("coordinate '{}' is too large", text)))?;
    }
    Ok(MergeRegion::from_corners(
        (coords[0], coords[1]),
        (coords[2], coords[3]),
    ))
}

fn malformed(input: &str) -> ConversionError {
    ConversionError::invalid(format!(
        "'{}' is not a region literal of the form [(r1,c1),(r2,c2)]",
        input
    ))
}
