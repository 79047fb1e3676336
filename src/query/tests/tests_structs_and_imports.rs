//! Tests for struct field and import queries

use super::super::{MatchKind, Query};
use super::units;
use rstest::rstest;

const MODELS: &str = "package models

import (
	\"time\"
	\"net/http\"
	nurl \"net/url\"
	\"github.com/acme/log\"
)

type User struct {
	Name    string
	Created time.Time
	Tags    []string
}

type Session struct {
	User  *User
	Token string
}

type Empty struct{}

type ID int
";

#[rstest]
#[case("string", &["User", "Session"])]
#[case("time.Time", &["User"])]
#[case("*User", &["Session"])]
#[case("[]string", &["User"])]
#[case("*", &["User", "Session", "Empty"])]
#[case("int", &[])]
fn test_find_structs_by_field_type(#[case] pattern: &str, #[case] expected: &[&str]) {
    let units = units(&[("models.go", MODELS)]);
    let names: Vec<_> = Query::new(&units)
        .find_structs_by_field_type(pattern)
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_struct_match_signature() {
    let units = units(&[("models.go", MODELS)]);
    let matches = Query::new(&units).find_structs_by_field_type("*User");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].kind, MatchKind::Struct);
    assert_eq!(matches[0].line, 16);
    assert_eq!(
        matches[0].signature,
        "type Session struct{User *User; Token string}"
    );
}

#[rstest]
#[case("*", &["time", "net/http", "net/url", "github.com/acme/log"])]
#[case("net/*", &["net/http", "net/url"])]
#[case("time", &["time"])]
#[case("net", &[])]
#[case("github.com/*", &["github.com/acme/log"])]
fn test_find_by_import_dependency(#[case] pattern: &str, #[case] expected: &[&str]) {
    let units = units(&[("models.go", MODELS)]);
    let paths: Vec<_> = Query::new(&units)
        .find_by_import_dependency(pattern)
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(paths, expected);
}

#[test]
fn test_import_match_details() {
    let units = units(&[
        ("models.go", MODELS),
        ("main.go", "package main\n\nimport \"net/url\"\n"),
    ]);
    let matches = Query::new(&units).find_by_import_dependency("net/url");
    let found: Vec<_> = matches
        .iter()
        .map(|m| (m.unit.as_str(), m.line, m.signature.as_str()))
        .collect();
    assert_eq!(
        found,
        vec![
            ("models.go", 6, "import nurl \"net/url\""),
            ("main.go", 3, "import \"net/url\""),
        ]
    );
}
