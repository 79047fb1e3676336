//! Foundation types for the gosyn toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - [`Position`], [`Span`] - Line/column positions for AST nodes
//! - identifier helpers shared by the parser and the refactorings
//!
//! This module has NO dependencies on other gosyn modules.

mod line_index;
mod position;
pub mod text_utils;

pub use line_index::{LineCol, LineIndex};
pub use position::{Position, Span};

// Re-export text-size types for convenience
pub use text_size::{self, TextRange, TextSize};
