//! Parsed source units.
//!
//! A [`SourceUnit`] pairs a unit name with its tree and line index. Units are
//! the input of the query engine and the entry point for file loading.

use std::io;
use std::path::Path;

use tracing::debug;

use super::ast::File;
use crate::base::{LineIndex, Position};
use crate::error::{AnalysisError, Result};
use crate::parser::parse_file;

/// A successfully parsed unit.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    name: String,
    file: File,
    line_index: LineIndex,
}

impl SourceUnit {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file(&self) -> &File {
        &self.file
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// 1-based line number of a position in this unit
    pub fn line(&self, position: Position) -> usize {
        position.line_number()
    }

    pub fn into_file(self) -> File {
        self.file
    }
}

/// Parse `text` as the unit `name`.
///
/// All syntax errors are reported together in
/// [`AnalysisError::ParseFailed`].
pub fn parse_unit(name: impl Into<String>, text: &str) -> Result<SourceUnit> {
    let name = name.into();
    let parse = parse_file(text);
    if !parse.ok() {
        debug!(unit = %name, errors = parse.errors.len(), "parse failed");
        return Err(AnalysisError::parse_failed(name, parse.errors));
    }
    debug!(
        unit = %name,
        decls = parse.file.decls.len(),
        lines = parse.line_index.line_count(),
        "parsed unit"
    );
    Ok(SourceUnit {
        name,
        file: parse.file,
        line_index: parse.line_index,
    })
}

/// Read and parse a file from disk. The unit is named after the path.
pub fn load_unit(path: impl AsRef<Path>) -> Result<SourceUnit> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|error| match error.kind() {
        io::ErrorKind::NotFound => AnalysisError::FileNotFound(path.to_path_buf()),
        _ => AnalysisError::Io(error),
    })?;
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptySource(path.to_path_buf()));
    }
    parse_unit(path.display().to_string(), &text)
}
