//! Syntax error type reported by the parser.

use std::fmt;

use text_size::TextRange;

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
    /// 0-indexed line
    pub line: usize,
    /// 0-indexed column
    pub column: usize,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            range,
            line,
            column,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line + 1, self.column + 1, self.message)
    }
}

impl std::error::Error for SyntaxError {}
