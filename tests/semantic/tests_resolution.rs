//! Resolution over units loaded from disk

use gosyn::semantic::{ReferenceKind, SymbolKind, SymbolTable, references};

use crate::helpers::source_fixtures::{FILES, STORE};
use crate::helpers::unit_helpers::{at, file_name, load_units};

#[test]
fn test_local_resolves_to_short_var_declaration() {
    let (_dir, units) = load_units(FILES);
    let unit = &units[1];
    let table = SymbolTable::for_unit(unit);

    let definition = table
        .lookup_definition("order", at(STORE, "order, nil", 0))
        .expect("order resolves");
    assert_eq!(definition.kind, SymbolKind::Variable);
    assert_eq!((definition.line, definition.column), (21, 2));
    assert_eq!(file_name(&definition.unit), "store.go");
    assert!(!definition.exported);
}

#[test]
fn test_parameter_resolves_within_its_method() {
    let (_dir, units) = load_units(FILES);
    let table = SymbolTable::for_unit(&units[1]);
    let definition = table
        .lookup_definition("order", at(STORE, "order.ID", 0))
        .expect("order resolves");
    assert_eq!(definition.line, 28);
}

#[test]
fn test_field_references_across_methods() {
    let (_dir, units) = load_units(FILES);
    let unit = &units[1];
    let table = SymbolTable::for_unit(unit);
    let orders = table
        .resolve_member(Some("MemoryStore"), "orders")
        .expect("orders field");

    let refs = references(unit.file(), &table);
    let found: Vec<_> = refs
        .of(orders)
        .map(|r| (r.span.start.line + 1, r.kind))
        .collect();
    assert_eq!(
        found,
        [
            (15, ReferenceKind::Definition),
            (21, ReferenceKind::Read),
            (31, ReferenceKind::Read),
        ]
    );
}

#[test]
fn test_package_level_symbols_per_unit() {
    let (_dir, units) = load_units(FILES);
    let table = SymbolTable::for_unit(&units[0]);
    let types: Vec<_> = table
        .root_symbols(SymbolKind::Type)
        .into_iter()
        .map(|(_, symbol)| symbol.name.to_string())
        .collect();
    assert_eq!(types, ["Item", "Order"]);
}
