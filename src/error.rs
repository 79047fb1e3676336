//! Error types for analysis and transformation operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::parser::SyntaxError;

/// Errors surfaced by the engine's operations.
///
/// Every operation is pure with respect to failure: when an error is returned
/// no tree has been partially modified.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Input tree or parameters are unusable for the requested operation.
    #[error("Invalid source: {0}")]
    InvalidSource(String),

    /// A file was read successfully but holds no source text.
    #[error("Empty source: {}", .0.display())]
    EmptySource(PathBuf),

    /// A file could not be found on disk.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The parser reported syntax errors.
    #[error("Parse failed in '{unit}': {}", first_error(.errors))]
    ParseFailed {
        unit: String,
        errors: Vec<SyntaxError>,
    },

    /// No symbol exists at the requested position or with the requested name.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// Extract function found no statement fully inside the line range.
    #[error("No statements in lines {start}..={end}")]
    NoStatementsInRange { start: usize, end: usize },

    /// Template name is not registered.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// IO error during read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn first_error(errors: &[SyntaxError]) -> String {
    match errors {
        [] => "unknown syntax error".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{first} (and {} more)", rest.len()),
    }
}

impl AnalysisError {
    /// Create an invalid source error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidSource(message.into())
    }

    /// Create a symbol-not-found error.
    pub fn symbol_not_found(what: impl Into<String>) -> Self {
        Self::SymbolNotFound(what.into())
    }

    /// Wrap syntax errors reported for a unit.
    pub fn parse_failed(unit: impl Into<String>, errors: Vec<SyntaxError>) -> Self {
        Self::ParseFailed {
            unit: unit.into(),
            errors,
        }
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;
