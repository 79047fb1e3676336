use smol_str::SmolStr;

use super::symbol_table::{SymbolId, SymbolKind, SymbolTable};
use crate::base::Position;

/// Where and what a resolved name is.
///
/// `line` and `column` are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub symbol: SymbolId,
    pub name: SmolStr,
    pub kind: SymbolKind,
    pub unit: String,
    pub line: usize,
    pub column: usize,
    pub exported: bool,
}

impl SymbolTable {
    /// Resolve `name` at `position` and describe its declaration.
    ///
    /// A position on a declaring identifier of `name` yields that declaration.
    pub fn lookup_definition(&self, name: &str, position: Position) -> Option<Definition> {
        let id = self
            .declared_at(name, position)
            .or_else(|| self.resolve(name, position))?;
        self.definition(id)
    }

    fn declared_at(&self, name: &str, position: Position) -> Option<SymbolId> {
        self.iter_symbols()
            .find(|(_, symbol)| {
                symbol.name.as_str() == name
                    && !symbol.span.is_synthetic()
                    && symbol.span.contains(position)
            })
            .map(|(id, _)| id)
    }

    /// Describe the declaration of a symbol
    pub fn definition(&self, id: SymbolId) -> Option<Definition> {
        let symbol = self.get_symbol(id)?;
        Some(Definition {
            symbol: id,
            name: symbol.name.clone(),
            kind: symbol.kind,
            unit: self.unit().to_string(),
            line: symbol.span.start.line + 1,
            column: symbol.span.start.column + 1,
            exported: symbol.is_exported(),
        })
    }
}
