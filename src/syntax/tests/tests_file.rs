//! Tests for unit parsing and loading

use super::super::file::{load_unit, parse_unit};
use crate::error::AnalysisError;
use std::io::Write;

#[test]
fn test_parse_unit_reports_all_errors() {
    let err = parse_unit("bad.go", "package p\n\nfunc f( {\n}\n\nvar = 1\n").unwrap_err();
    let AnalysisError::ParseFailed { unit, errors } = err else {
        panic!("expected ParseFailed");
    };
    assert_eq!(unit, "bad.go");
    assert!(errors.len() >= 2, "{errors:?}");
}

#[test]
fn test_unit_line_is_one_based() {
    let unit = parse_unit("a.go", "package p\n\nfunc f() {}\n").unwrap();
    let func = unit.file().functions().next().unwrap();
    assert_eq!(unit.line(func.name.span.start), 3);
    assert_eq!(unit.name(), "a.go");
}

#[test]
fn test_load_unit_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "package disk\n\nfunc F() {{}}\n").unwrap();
    let unit = load_unit(file.path()).unwrap();
    assert_eq!(unit.file().package.as_str(), "disk");
}

#[test]
fn test_load_unit_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_unit(dir.path().join("missing.go")).unwrap_err();
    assert!(matches!(err, AnalysisError::FileNotFound(_)));
}

#[test]
fn test_load_unit_whitespace_only() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "  \n\t\n").unwrap();
    let err = load_unit(file.path()).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptySource(_)));
}
