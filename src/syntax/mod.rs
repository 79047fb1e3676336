//! Syntax tree, traversal and printing for Go source units.
//!
//! - [`ast`] - the owned, typed tree produced by [`crate::parser`]
//! - [`visit`] - read-only and in-place visitors
//! - [`printer`] - deterministic source printer
//! - [`types`] - canonical type text used for structural comparison
//! - [`file`] - [`SourceUnit`] loading

pub mod ast;
pub mod file;
pub mod options;
pub mod printer;
pub mod types;
pub mod visit;

pub use file::{SourceUnit, load_unit, parse_unit};
pub use options::PrintOptions;
pub use printer::{Printer, print_decl, print_expr, print_file, print_stmt, print_type};
pub use types::{param_type_texts, signature_text, type_text};
pub use visit::{Visitor, VisitorMut};

// Re-export Position and Span from base for convenience
pub use crate::base::{Position, Span};

#[cfg(test)]
mod tests;
