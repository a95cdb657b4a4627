//! Data layer - Static mappings
//!
//! This module contains the static data used by the converters:
//! - Full-width punctuation glyph mappings

pub mod glyphs;

// Re-export commonly used items
pub use glyphs::{get_replacement, has_replacement, GLYPH_MAP};
