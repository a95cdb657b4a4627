//! WASM bindings for typokit
//!
//! This module provides JavaScript-accessible functions for punctuation
//! conversion and table generation.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

/// Table generation request (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct TableRequest {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
    /// Alignment: "left", "center", "right" or "1"-"3"
    #[serde(default = "default_align")]
    pub align: String,
    /// Merge regions as a list literal, e.g. `[[(1,1),(2,1)]]`
    #[serde(default = "default_merges")]
    pub merges: String,
    /// Single-line output without indentation
    #[serde(default)]
    pub compact: bool,
}

#[cfg(feature = "wasm")]
fn default_align() -> String {
    "center".to_string()
}

#[cfg(feature = "wasm")]
fn default_merges() -> String {
    "[]".to_string()
}

/// Generation result with error information
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct GenerateResult {
    /// The generated markup
    pub output: String,
    /// Whether generation was successful
    pub success: bool,
    /// Error message if generation failed
    pub error: Option<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert full-width punctuation to ASCII
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "translatePunctuation")]
pub fn translate_punctuation_wasm(input: &str) -> String {
    crate::translate(input)
}

/// Generate HTML table markup from a [`TableRequest`]
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "generateTable")]
pub fn generate_table_wasm(request: JsValue) -> JsValue {
    let result = match serde_wasm_bindgen::from_value::<TableRequest>(request) {
        Ok(req) => match run_request(&req) {
            Ok(output) => GenerateResult {
                output,
                success: true,
                error: None,
            },
            Err(e) => failure(e.to_string()),
        },
        Err(e) => failure(format!("Invalid request: {}", e)),
    };

    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(feature = "wasm")]
fn run_request(req: &TableRequest) -> crate::ConversionResult<String> {
    let spec = crate::TableSpec {
        rows: req.rows,
        cols: req.cols,
        align: req.align.parse()?,
        merges: crate::parse_merge_list(&req.merges)?,
    };
    let options = if req.compact {
        crate::TableOptions::compact()
    } else {
        crate::TableOptions::default()
    };
    spec.generate(&options)
}

#[cfg(feature = "wasm")]
fn failure(error: String) -> GenerateResult {
    GenerateResult {
        output: String::new(),
        success: false,
        error: Some(error),
    }
}
