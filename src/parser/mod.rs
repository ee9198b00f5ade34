//! Loading and parsing of quiz documents

pub mod document;

use crate::error::LoadError;
use document::QuizDocument;
use std::path::{Path, PathBuf};

/// Source of a quiz document
#[derive(Debug, Clone)]
pub enum QuizSource {
    /// Raw JSON string input
    String(String),
    /// JSON file path
    File(PathBuf),
}

impl QuizSource {
    /// Parse the quiz document from this source
    pub fn parse(&self) -> Result<QuizDocument, LoadError> {
        match self {
            QuizSource::String(content) => parse_document(content),
            QuizSource::File(path) => load_document(path),
        }
    }

    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            QuizSource::String(_) => "string input".to_string(),
            QuizSource::File(path) => format!("file: {}", path.display()),
        }
    }
}

/// Read and parse a quiz document from a file path
///
/// The file handle is scoped to the read; both I/O and JSON errors surface
/// as `LoadError` so the caller can recover with empty output.
pub fn load_document(path: &Path) -> Result<QuizDocument, LoadError> {
    let content = std::fs::read_to_string(path)?;
    parse_document(&content)
}

/// Parse a quiz document from a JSON string
pub fn parse_document(content: &str) -> Result<QuizDocument, LoadError> {
    Ok(serde_json::from_str(content)?)
}
