//! # Semantic Analysis
//!
//! Turns a parsed unit into a scope tree and symbol table, and answers the
//! questions the refactorings ask of it: what a name resolves to at a
//! position, what a selector refers to, and where every symbol occurs.
//!
//! ## Architecture
//!
//! ```text
//! File ──► SymbolTable::build ──► SymbolTable ──► resolve / resolve_member
//!                                      │
//!                                      └──► references(file, table) ──► References
//! ```
//!
//! Tables are built per unit and are read-only once built.

mod builder;
mod inference;
mod references;
mod resolver;
mod symbol_table;

pub use references::{Reference, ReferenceKind, References, references};
pub use resolver::Definition;
pub use symbol_table::{Scope, ScopeId, ScopeKind, Symbol, SymbolId, SymbolKind, SymbolTable};

#[cfg(test)]
mod tests;
