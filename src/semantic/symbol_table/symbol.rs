use smol_str::SmolStr;

use super::scope::ScopeId;
use crate::base::{Position, Span};
use crate::syntax::ast::TypeExpr;

/// Unique identifier for a symbol in the arena.
/// Uses u32 for compact storage (supports ~4 billion symbols).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// Create a new SymbolId from an index
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the index into the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Unit,
    Function,
    Type,
    Variable,
    Constant,
    Field,
    Method,
}

impl SymbolKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SymbolKind::Unit => "unit",
            SymbolKind::Function => "function",
            SymbolKind::Type => "type",
            SymbolKind::Variable => "variable",
            SymbolKind::Constant => "constant",
            SymbolKind::Field => "field",
            SymbolKind::Method => "method",
        }
    }

    /// Fields and methods live in member tables, not in scopes
    pub fn is_member(self) -> bool {
        matches!(self, SymbolKind::Field | SymbolKind::Method)
    }
}

/// A named declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: SmolStr,
    pub kind: SymbolKind,
    /// Span of the declaring identifier
    pub span: Span,
    /// First position at which plain-name lookups may see the symbol
    pub visible_from: Position,
    pub scope: ScopeId,
    /// Explicit or inferred type; the underlying type for `Type` symbols and
    /// a `func` type for functions and methods
    pub declared_type: Option<TypeExpr>,
    /// The type a field or method belongs to
    pub owner: Option<SymbolId>,
}

impl Symbol {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_exported(&self) -> bool {
        crate::base::text_utils::is_exported(&self.name)
    }
}
