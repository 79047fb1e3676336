//! Tests for function and signature queries

use super::super::{MatchKind, Query};
use super::units;
use rstest::rstest;

const LIB: &str = "package lib

func foo() {}

func fooBar(s string, n int) error {
	return nil
}

func baz(a, b int) (int, error) {
	return a + b, nil
}

type Store struct{}

func (s *Store) Foo(key string) string {
	return key
}
";

#[rstest]
#[case("*", &["foo", "fooBar", "baz", "Foo"])]
#[case("foo*", &["foo", "fooBar"])]
#[case("foo", &["foo", "Foo"])]
#[case("BAZ", &["baz"])]
#[case("qux", &[])]
fn test_find_functions(#[case] pattern: &str, #[case] expected: &[&str]) {
    let units = units(&[("lib.go", LIB)]);
    let names: Vec<_> = Query::new(&units)
        .find_functions(pattern)
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_function_match_details() {
    let units = units(&[("lib.go", LIB)]);
    let matches = Query::new(&units).find_functions("Foo");
    let method = matches.iter().find(|m| m.kind == MatchKind::Method);
    let method = method.map(|m| (m.unit.as_str(), m.line, m.signature.as_str()));
    assert_eq!(
        method,
        Some(("lib.go", 15, "func (s *Store) Foo(key string) string"))
    );

    let function = matches.iter().find(|m| m.kind == MatchKind::Function);
    assert_eq!(function.map(|m| m.line), Some(3));
}

#[test]
fn test_results_ordered_by_unit_then_source() {
    let units = units(&[
        ("b.go", "package p\n\nfunc second() {}\n\nfunc first() {}\n"),
        ("a.go", "package p\n\nfunc third() {}\n"),
    ]);
    let found: Vec<_> = Query::new(&units)
        .find_functions("*")
        .into_iter()
        .map(|m| (m.unit, m.name))
        .collect();
    assert_eq!(
        found,
        vec![
            ("b.go".to_string(), "second".to_string()),
            ("b.go".to_string(), "first".to_string()),
            ("a.go".to_string(), "third".to_string()),
        ]
    );
}

#[rstest]
#[case("(string, int) error", &["fooBar"])]
#[case("(string,int)error", &["fooBar"])]
#[case("(s string, n int) error", &["fooBar"])]
#[case("(int, int) (int, error)", &["baz"])]
#[case("(a, b int) (int, error)", &["baz"])]
#[case("()", &["foo"])]
#[case("(string) string", &["Foo"])]
#[case("(int) error", &[])]
fn test_find_by_signature(#[case] signature: &str, #[case] expected: &[&str]) {
    let units = units(&[("lib.go", LIB)]);
    let names: Vec<_> = Query::new(&units)
        .find_by_signature(signature)
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, expected);
}
