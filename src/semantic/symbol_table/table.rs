use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use text_size::TextSize;

use super::scope::{Scope, ScopeId, ScopeKind};
use super::symbol::{Symbol, SymbolId, SymbolKind};
use crate::base::{Position, Span};

/// Scopes and symbols of one unit.
///
/// Symbols live in a single arena and are addressed by [`SymbolId`]. Plain
/// names are registered in the scope that declares them; fields and methods
/// are registered in the member table of their owning type instead, so they
/// never answer a plain-name lookup.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    /// Arena storage for all symbols - single source of truth
    pub(super) arena: Vec<Symbol>,
    pub(super) scopes: Vec<Scope>,
    pub(super) current_scope: ScopeId,
    unit: String,
    /// Owner type name -> member name -> member symbol
    pub(super) members: FxHashMap<SmolStr, IndexMap<SmolStr, SymbolId>>,
    /// Owner type name -> embedded field type names, for promoted members
    pub(super) embedded: FxHashMap<SmolStr, Vec<SmolStr>>,
    /// Start offset of a declaring identifier -> its symbol
    pub(super) definitions: FxHashMap<TextSize, SymbolId>,
}

impl SymbolTable {
    pub fn new(unit: impl Into<String>, range: Span) -> Self {
        Self {
            arena: Vec::new(),
            scopes: vec![Scope::new(None, ScopeKind::Unit, range)],
            current_scope: ScopeId::ROOT,
            unit: unit.into(),
            members: FxHashMap::default(),
            embedded: FxHashMap::default(),
            definitions: FxHashMap::default(),
        }
    }

    /// Name of the unit this table was built for
    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn current_scope(&self) -> ScopeId {
        self.current_scope
    }

    pub fn enter_scope(&mut self, kind: ScopeKind, range: Span) -> ScopeId {
        let parent = self.current_scope;
        let scope_id = ScopeId::new(self.scopes.len());
        self.scopes.push(Scope::new(Some(parent), kind, range));
        self.scopes[parent.index()].children.push(scope_id);
        self.current_scope = scope_id;
        scope_id
    }

    pub fn exit_scope(&mut self) {
        if let Some(parent) = self.scopes[self.current_scope.index()].parent {
            self.current_scope = parent;
        }
    }

    /// Add a symbol to the current scope.
    ///
    /// A later declaration of the same name in the same scope replaces the
    /// earlier one for lookups; both stay in the arena.
    pub fn insert(&mut self, symbol: Symbol) -> SymbolId {
        let symbol_id = self.push_symbol(symbol);
        let symbol = &self.arena[symbol_id.index()];
        tracing::trace!(
            "[SYMBOL] insert {} '{}' scope={}",
            symbol.kind.as_str(),
            symbol.name,
            self.current_scope.index()
        );
        self.scopes[self.current_scope.index()]
            .symbols
            .insert(symbol.name.clone(), symbol_id);
        symbol_id
    }

    /// Add a field or method to the member table of `owner`
    pub fn insert_member(&mut self, owner: &str, symbol: Symbol) -> SymbolId {
        let symbol_id = self.push_symbol(symbol);
        let name = self.arena[symbol_id.index()].name.clone();
        tracing::trace!("[SYMBOL] member '{}.{}'", owner, name);
        self.members
            .entry(SmolStr::new(owner))
            .or_default()
            .insert(name, symbol_id);
        symbol_id
    }

    /// Record that `owner` embeds the named type
    pub fn add_embedded(&mut self, owner: &str, embedded: &str) {
        self.embedded
            .entry(SmolStr::new(owner))
            .or_default()
            .push(SmolStr::new(embedded));
    }

    fn push_symbol(&mut self, symbol: Symbol) -> SymbolId {
        let symbol_id = SymbolId::new(self.arena.len());
        if !symbol.span.is_synthetic() {
            self.definitions.insert(symbol.span.start.offset, symbol_id);
        }
        self.arena.push(symbol);
        symbol_id
    }

    /// Get a symbol by its SymbolId (O(1) arena lookup)
    pub fn get_symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.arena.get(id.index())
    }

    pub(crate) fn get_symbol_mut(&mut self, id: SymbolId) -> Option<&mut Symbol> {
        self.arena.get_mut(id.index())
    }

    /// The symbol declared by the identifier starting at `span`
    pub fn symbol_defined_at(&self, span: Span) -> Option<SymbolId> {
        if span.is_synthetic() {
            return None;
        }
        self.definitions.get(&span.start.offset).copied()
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    pub fn get_scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.index())
    }

    /// Get a SymbolId from a specific scope (no chain walking)
    pub fn get_symbol_id_in_scope(&self, scope_id: ScopeId, name: &str) -> Option<SymbolId> {
        self.scopes.get(scope_id.index())?.symbols.get(name).copied()
    }

    /// Members of the named type in declaration order
    pub fn members_of(&self, owner: &str) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.members
            .get(owner)
            .into_iter()
            .flat_map(|members| members.values())
            .map(|&id| (id, &self.arena[id.index()]))
    }

    pub fn symbol_count(&self) -> usize {
        self.arena.len()
    }

    /// Returns an iterator over all symbols with their IDs
    pub fn iter_symbols(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.arena
            .iter()
            .enumerate()
            .map(|(index, symbol)| (SymbolId::new(index), symbol))
    }

    /// Top-level symbols of the given kind
    pub fn root_symbols(&self, kind: SymbolKind) -> Vec<(SymbolId, &Symbol)> {
        let mut symbols: Vec<_> = self.scopes[ScopeId::ROOT.index()]
            .symbols
            .values()
            .map(|&id| (id, &self.arena[id.index()]))
            .filter(|(_, symbol)| symbol.kind == kind)
            .collect();
        symbols.sort_by_key(|(id, _)| *id);
        symbols
    }

    /// A fresh symbol positioned in the current scope
    pub(crate) fn make_symbol(
        &self,
        name: &str,
        kind: SymbolKind,
        span: Span,
        visible_from: Position,
    ) -> Symbol {
        Symbol {
            name: SmolStr::new(name),
            kind,
            span,
            visible_from,
            scope: self.current_scope,
            declared_type: None,
            owner: None,
        }
    }

    pub(super) fn embedded_of(&self, owner: &str) -> &[SmolStr] {
        self.embedded.get(owner).map_or(&[], Vec::as_slice)
    }

    pub(super) fn member_tables(
        &self,
    ) -> impl Iterator<Item = (&SmolStr, &IndexMap<SmolStr, SymbolId>)> {
        self.members.iter()
    }
}
