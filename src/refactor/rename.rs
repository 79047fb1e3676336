use std::borrow::Cow;

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use text_size::TextSize;
use tracing::debug;

use super::validate_identifier;
use crate::base::Position;
use crate::error::{AnalysisError, Result};
use crate::semantic::{SymbolId, SymbolKind, SymbolTable, references};
use crate::syntax::ast::{File, Ident, TypeExpr};
use crate::syntax::visit::VisitorMut;

/// Rename the symbol whose identifier covers `position`.
///
/// Every occurrence resolving to the same symbol is renamed, its declaration
/// included; same-named symbols it shadows or is shadowed by are left alone.
/// Renaming to the current name returns the input unchanged.
pub fn rename_symbol_at<'f>(
    file: &'f File,
    position: Position,
    new_name: &str,
) -> Result<Cow<'f, File>> {
    validate_identifier(new_name)?;

    let table = SymbolTable::build(file);
    let refs = references(file, &table);
    let target = refs.reference_at(position).ok_or_else(|| {
        AnalysisError::symbol_not_found(format!(
            "no resolvable identifier at {}:{}",
            position.line + 1,
            position.column + 1
        ))
    })?;
    let symbol = table
        .get_symbol(target.symbol)
        .ok_or_else(|| AnalysisError::symbol_not_found("dangling symbol id"))?;

    if symbol.name == new_name {
        debug!(name = new_name, "rename is a no-op");
        return Ok(Cow::Borrowed(file));
    }

    let linked = linked_symbols(&table, target.symbol)?;
    let occurrences: FxHashSet<TextSize> = linked
        .iter()
        .flat_map(|&id| refs.of(id))
        .map(|r| r.span.start.offset)
        .collect();
    let mut renamer = Renamer {
        occurrences: &occurrences,
        new_name: SmolStr::new(new_name),
        renamed: 0,
    };
    let mut renamed = file.clone();
    renamer.visit_file_mut(&mut renamed);
    debug!(
        from = symbol.name.as_str(),
        to = new_name,
        kind = symbol.kind.as_str(),
        symbols = linked.len(),
        occurrences = renamer.renamed,
        "renamed symbol"
    );
    Ok(Cow::Owned(renamed))
}

/// The symbols that must be renamed together with `id`.
///
/// An embedded field is named after its type, so a type and every field
/// embedding it share one name.
fn linked_symbols(table: &SymbolTable, id: SymbolId) -> Result<Vec<SymbolId>> {
    let Some(symbol) = table.get_symbol(id) else {
        return Ok(vec![id]);
    };
    let type_id = match symbol.kind {
        SymbolKind::Type => id,
        SymbolKind::Field if symbol.span.is_synthetic() => symbol
            .declared_type
            .as_ref()
            .and_then(TypeExpr::base_name)
            .and_then(|ident| table.resolve(&ident.name, ident.span.start))
            .ok_or_else(|| {
                AnalysisError::invalid(format!(
                    "embedded field '{}' is named after a type declared elsewhere",
                    symbol.name
                ))
            })?,
        _ => return Ok(vec![id]),
    };
    let mut linked = vec![type_id];
    linked.extend(table.embedded_fields_of(type_id));
    Ok(linked)
}

struct Renamer<'a> {
    occurrences: &'a FxHashSet<TextSize>,
    new_name: SmolStr,
    renamed: usize,
}

impl VisitorMut for Renamer<'_> {
    fn visit_ident_mut(&mut self, ident: &mut Ident) {
        if !ident.span.is_synthetic() && self.occurrences.contains(&ident.span.start.offset) {
            ident.name = self.new_name.clone();
            self.renamed += 1;
        }
    }
}
