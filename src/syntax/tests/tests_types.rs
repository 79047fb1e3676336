//! Tests for canonical type text

use super::super::ast::*;
use super::super::types::{param_type_texts, signature_text, type_text};
use crate::parser::parse_file;
use rstest::rstest;

fn type_of(ty_source: &str) -> TypeExpr {
    let parse = parse_file(&format!("package p\n\ntype X {ty_source}\n"));
    assert!(parse.ok(), "{:?}", parse.errors);
    let spec = parse.file.type_specs().next().cloned().expect("type spec");
    spec.ty
}

#[rstest]
#[case::name("string", "string")]
#[case::qualified("io.Reader", "io.Reader")]
#[case::pointer("*User", "*User")]
#[case::slice("[]byte", "[]byte")]
#[case::array("[4]int", "[4]int")]
#[case::map("map[string][]int", "map[string][]int")]
#[case::chan("chan int", "chan int")]
#[case::send_chan("chan<- int", "chan<- int")]
#[case::recv_chan("<-chan int", "<-chan int")]
#[case::func("func(a, b int) (int, error)", "func(int, int) (int, error)")]
#[case::generic("List[map[string]int]", "List[map[string]int]")]
#[case::inline_struct("struct {\n\tA int\n\tB string\n}", "struct{A int; B string}")]
#[case::empty_iface("interface{}", "interface{}")]
fn test_type_text(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(type_text(&type_of(source)), expected);
}

#[test]
fn test_variadic_parameter_text() {
    let parse = parse_file("package p\n\nfunc f(format string, args ...any) {}\n");
    let func = parse.file.functions().next().cloned().expect("func");
    assert_eq!(param_type_texts(&func.sig.params), vec!["string", "...any"]);
}

#[test]
fn test_signature_text_with_and_without_names() {
    let parse = parse_file("package p\n\nfunc f(s string, a, b int) (n int, err error) {\n\treturn\n}\n");
    let func = parse.file.functions().next().cloned().expect("func");
    assert_eq!(signature_text(&func.sig, false), "(string, int, int) (int, error)");
    assert_eq!(
        signature_text(&func.sig, true),
        "(s string, a, b int) (n int, err error)"
    );
}

#[test]
fn test_signature_text_single_result() {
    let parse = parse_file("package p\n\nfunc f() error {\n\treturn nil\n}\n");
    let func = parse.file.functions().next().cloned().expect("func");
    assert_eq!(signature_text(&func.sig, false), "() error");
}
