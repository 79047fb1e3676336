use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::symbol::SymbolId;
use crate::base::Span;

/// Index of a scope in the table's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScopeId(pub u32);

impl ScopeId {
    pub const ROOT: ScopeId = ScopeId(0);

    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    Unit,
    Function,
    /// Type parameters of a generic type declaration
    TypeDecl,
    Block,
    If,
    For,
    Range,
    Switch,
    Case,
}

/// Represents a lexical scope in the symbol table
#[derive(Debug, Clone)]
pub struct Scope {
    pub parent: Option<ScopeId>,
    pub children: Vec<ScopeId>,
    /// Maps symbol name to SymbolId (symbols are stored in arena)
    pub symbols: FxHashMap<SmolStr, SymbolId>,
    pub range: Span,
    pub kind: ScopeKind,
}

impl Scope {
    pub fn new(parent: Option<ScopeId>, kind: ScopeKind, range: Span) -> Self {
        Self {
            parent,
            children: Vec::new(),
            symbols: FxHashMap::default(),
            range,
            kind,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
