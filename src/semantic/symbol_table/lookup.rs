use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::scope::ScopeId;
use super::symbol::{SymbolId, SymbolKind};
use super::table::SymbolTable;
use crate::base::Position;
use crate::syntax::ast::TypeExpr;

impl SymbolTable {
    /// The innermost scope whose range contains `position`
    pub fn scope_at(&self, position: Position) -> ScopeId {
        let mut current = ScopeId::ROOT;
        'descend: loop {
            for &child in &self.scopes[current.index()].children {
                let range = self.scopes[child.index()].range;
                if !range.is_synthetic() && range.contains(position) {
                    current = child;
                    continue 'descend;
                }
            }
            return current;
        }
    }

    pub(crate) fn build_scope_chain(&self, scope_id: ScopeId) -> Vec<ScopeId> {
        let mut chain = Vec::new();
        let mut current = scope_id;
        loop {
            chain.push(current);
            current = match self.scopes[current.index()].parent {
                Some(parent) => parent,
                None => break,
            };
        }
        chain
    }

    /// Resolve a plain name as seen from `position`.
    ///
    /// Walks outward from the innermost enclosing scope and takes the first
    /// declaration of `name` that is already visible at `position`.
    pub fn resolve(&self, name: &str, position: Position) -> Option<SymbolId> {
        let chain = self.build_scope_chain(self.scope_at(position));
        for scope_id in chain {
            let Some(id) = self.get_symbol_id_in_scope(scope_id, name) else {
                continue;
            };
            let symbol = &self.arena[id.index()];
            if scope_id == ScopeId::ROOT || position.is_at_or_after(symbol.visible_from) {
                tracing::trace!(
                    "[RESOLVE] '{}' at {}:{} -> scope={}",
                    name,
                    position.line,
                    position.column,
                    scope_id.index()
                );
                return Some(id);
            }
        }
        tracing::trace!("[RESOLVE] '{}' unresolved", name);
        None
    }

    /// Resolve a field or method name.
    ///
    /// With a known owner type the owner's member table is searched, then the
    /// types it embeds. Without one, the name resolves only if exactly one
    /// type in the unit declares a member of that name.
    pub fn resolve_member(&self, owner: Option<&str>, name: &str) -> Option<SymbolId> {
        match owner {
            Some(owner) => {
                let mut visited = FxHashSet::default();
                self.find_member(owner, name, &mut visited)
            }
            None => {
                let mut candidates = self
                    .member_tables()
                    .filter_map(|(_, members)| members.get(name).copied());
                let first = candidates.next()?;
                if candidates.next().is_some() {
                    tracing::warn!("[RESOLVE] member '{}' is ambiguous without a receiver type", name);
                    return None;
                }
                Some(first)
            }
        }
    }

    /// Embedded fields whose type is the given type symbol
    pub fn embedded_fields_of(&self, type_id: SymbolId) -> Vec<SymbolId> {
        let Some(type_symbol) = self.get_symbol(type_id) else {
            return Vec::new();
        };
        self.iter_symbols()
            .filter(|(_, symbol)| {
                symbol.kind == SymbolKind::Field
                    && symbol.span.is_synthetic()
                    && symbol.name == type_symbol.name
            })
            .filter(|(_, symbol)| {
                symbol
                    .declared_type
                    .as_ref()
                    .and_then(TypeExpr::base_name)
                    .is_some_and(|ident| {
                        self.resolve(&ident.name, ident.span.start) == Some(type_id)
                    })
            })
            .map(|(id, _)| id)
            .collect()
    }

    fn find_member(
        &self,
        owner: &str,
        name: &str,
        visited: &mut FxHashSet<SmolStr>,
    ) -> Option<SymbolId> {
        if !visited.insert(SmolStr::new(owner)) {
            return None;
        }
        if let Some(id) = self
            .members
            .get(owner)
            .and_then(|members| members.get(name))
        {
            return Some(*id);
        }
        self.embedded_of(owner)
            .iter()
            .find_map(|embedded| self.find_member(embedded, name, visited))
    }
}
