//! Quiz JSON to SQL Converter
//!
//! A Rust CLI tool for converting nested quiz documents (category → topic →
//! level → question) into a batch of SQL INSERT statements for a relational
//! questions table.

pub mod conversion;
pub mod error;
pub mod formatter;
pub mod mapping;
pub mod parser;

// Re-export commonly used types
pub use conversion::{
    ConversionEngine, ConversionReport, ConvertConfig, ConvertResult, SqlOutput,
};
pub use error::{ConvertError, LoadError, SkipReason};
pub use mapping::Difficulty;
pub use parser::QuizSource;

use std::path::Path;

/// Convert a quiz JSON file to SQL text with default configuration
///
/// Diagnostics are printed as the conversion runs; load and structure
/// failures yield an empty string rather than an error.
pub fn convert_quiz_to_sql(input: impl AsRef<Path>, output: Option<&Path>) -> String {
    let engine = ConversionEngine::new(ConvertConfig::default());
    match engine.convert_file(input.as_ref(), output) {
        Ok(result) => result.content,
        Err(_) => String::new(),
    }
}

/// Convert an in-memory quiz JSON string to SQL text with default configuration
pub fn convert_quiz_json(json: &str) -> String {
    let engine = ConversionEngine::new(ConvertConfig::default());
    let source = QuizSource::String(json.to_string());
    match engine.convert_source(&source, None) {
        Ok(result) => result.content,
        Err(_) => String::new(),
    }
}
