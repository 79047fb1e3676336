/// Scope tree and symbol arena for one parsed unit
mod lookup;
mod scope;
mod symbol;
mod table;

pub use scope::{Scope, ScopeId, ScopeKind};
pub use symbol::{Symbol, SymbolId, SymbolKind};
pub use table::SymbolTable;
