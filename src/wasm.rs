//! WASM bindings for latex2md
//!
//! This module provides JavaScript-accessible functions for LaTeX → Markdown
//! conversion.

use wasm_bindgen::prelude::*;

use serde::{Deserialize, Serialize};

use crate::{Configuration, ConversionOutput, ConversionResult, Converter};

/// Conversion result with additional metadata
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The converted output
    pub output: String,
    /// Whether the conversion was successful
    pub success: bool,
    /// Error message if conversion failed
    pub error: Option<String>,
    /// Warnings during conversion
    pub warnings: Vec<String>,
}

impl From<ConversionResult<ConversionOutput>> for ConvertResult {
    fn from(result: ConversionResult<ConversionOutput>) -> Self {
        match result {
            Ok(output) => ConvertResult {
                warnings: output.warnings.iter().map(ToString::to_string).collect(),
                output: output.content,
                success: true,
                error: None,
            },
            Err(e) => ConvertResult {
                output: String::new(),
                success: false,
                error: Some(e.to_string()),
                warnings: vec![],
            },
        }
    }
}

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js(result: ConvertResult) -> JsValue {
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Convert a LaTeX document to Markdown with the built-in configuration
#[wasm_bindgen(js_name = "convertLatexToMarkdown")]
pub fn convert_latex_to_markdown_wasm(input: &str) -> JsValue {
    to_js(Converter::new(input).convert_with_warnings().into())
}

/// Convert with a configuration table given as JSON text
#[wasm_bindgen(js_name = "convertWithConfig")]
pub fn convert_with_config_wasm(input: &str, config_json: &str) -> JsValue {
    let result = Configuration::from_json_str(config_json)
        .map_err(Into::into)
        .and_then(|config| Converter::with_config(input, &config).convert_with_warnings());
    to_js(result.into())
}
