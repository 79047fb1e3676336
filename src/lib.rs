//! # gosyn-base
//!
//! Core library for Go source parsing, scope analysis, structural queries,
//! refactoring and code generation.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! codegen   → Templates, interface implementations, test scaffolds
//!   ↓
//! refactor  → Rename, extract function, inline variable
//!   ↓
//! query     → Structural queries over many units
//!   ↓
//! semantic  → Scope tree, symbol table, resolution, references
//!   ↓
//! syntax    → AST types, visitors, printer, SourceUnit
//!   ↓
//! parser    → Logos lexer, recursive-descent parser
//!   ↓
//! base      → Primitives (Position, Span, LineIndex)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → semantic → query → refactor → codegen)
// ============================================================================

/// Foundation types: positions, spans, line index
pub mod base;

/// Error type shared by every operation
pub mod error;

/// Parser: Logos lexer, recursive-descent parser, keyword tables
pub mod parser;

/// Syntax: AST types, visitors, printer, parsed units
pub mod syntax;

/// Scope-aware symbol tables and identifier resolution
pub mod semantic;

/// Pattern-based structural queries across units
pub mod query;

/// Non-destructive tree transformations
pub mod refactor;

/// Template instantiation and skeleton generation
pub mod codegen;

// Re-export commonly needed items
pub use parser::keywords;

// Re-export foundation types
pub use base::{LineCol, LineIndex, Position, Span, TextRange, TextSize};

pub use codegen::{
    Generated, TemplateEngine, generate_interface_implementation, generate_test_scaffold,
};
pub use error::{AnalysisError, Result};
pub use query::{MatchKind, Query, QueryMatch, UnitMap, unit_map};
pub use refactor::{extract_function, inline_variable, rename_symbol_at};
pub use semantic::{SymbolTable, references};
pub use syntax::{SourceUnit, load_unit, parse_unit, print_file};
