//! Queries over a multi-file package

use gosyn::{MatchKind, Query};
use rstest::rstest;

use crate::helpers::source_fixtures::FILES;
use crate::helpers::unit_helpers::{file_name, load_units};

#[test]
fn test_functions_in_unit_order() {
    let (_dir, units) = load_units(FILES);
    let names: Vec<_> = Query::new(&units)
        .find_functions("*")
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, ["Total", "Get", "Put", "Report"]);
}

#[test]
fn test_implementation_found_across_files() {
    let (_dir, units) = load_units(FILES);
    let matches = Query::new(&units).find_implementations("Store");
    assert_eq!(matches.len(), 1);
    let found = &matches[0];
    assert_eq!(found.name, "MemoryStore");
    assert_eq!(found.kind, MatchKind::Implementation);
    assert_eq!(file_name(&found.unit), "store.go");
    assert_eq!(found.line, 13);
}

#[rstest]
#[case("[]Item", &["Order"])]
#[case("time.Time", &["Order"])]
#[case("map[string]*Order", &["MemoryStore"])]
#[case("*", &["Item", "Order", "MemoryStore"])]
#[case("float64", &[])]
fn test_structs_by_field_type(#[case] pattern: &str, #[case] expected: &[&str]) {
    let (_dir, units) = load_units(FILES);
    let names: Vec<_> = Query::new(&units)
        .find_structs_by_field_type(pattern)
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, expected);
}

#[rstest]
#[case("*", &["time", "errors", "sync", "fmt"])]
#[case("sync", &["sync"])]
#[case("net/*", &[])]
fn test_import_dependencies(#[case] pattern: &str, #[case] expected: &[&str]) {
    let (_dir, units) = load_units(FILES);
    let paths: Vec<_> = Query::new(&units)
        .find_by_import_dependency(pattern)
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(paths, expected);
}

#[rstest]
#[case("(order *Order) error", &["Put"])]
#[case("(*Order) error", &["Put"])]
#[case("(string) (*Order, error)", &["Get"])]
#[case("(store Store, id string) string", &["Report"])]
#[case("() int", &["Total"])]
#[case("()", &[])]
fn test_signature_lookup(#[case] signature: &str, #[case] expected: &[&str]) {
    let (_dir, units) = load_units(FILES);
    let names: Vec<_> = Query::new(&units)
        .find_by_signature(signature)
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, expected);
}
