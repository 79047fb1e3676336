//! Tests for name and member resolution

use super::helpers::{at, build};
use crate::base::Position;
use crate::semantic::SymbolKind;
use rstest::rstest;

const SHADOW: &str = "package p

func f() int {
	x := 1
	if true {
		x := 2
		_ = x
	}
	return x
}
";

#[test]
fn test_inner_declaration_shadows_outer() {
    let (_, table) = build(SHADOW);
    let outer = table.resolve("x", at(SHADOW, "x := 1", 0));
    let inner_read = table.resolve("x", at(SHADOW, "_ = x", 4));
    let outer_read = table.resolve("x", at(SHADOW, "return x", 7));

    let def_line = |id| table.get_symbol(id).map(|symbol| symbol.span.start.line);
    assert_eq!(inner_read.and_then(def_line), Some(5));
    assert_eq!(outer_read.and_then(def_line), Some(3));
    // at its own declaring identifier a local is not yet visible
    assert_eq!(outer, None);
}

#[test]
fn test_local_visible_after_its_statement() {
    let source = "package p

func g() {
	y := 1
	z := y
	_ = z
}
";
    let (_, table) = build(source);
    assert_eq!(table.resolve("z", at(source, "y := 1", 0)), None);
    assert!(table.resolve("y", at(source, "z := y", 5)).is_some());
    assert!(table.resolve("z", at(source, "_ = z", 4)).is_some());
}

#[test]
fn test_shadowing_initializer_reads_outer() {
    let source = "package p

func g(v int) {
	{
		v := v + 1
		_ = v
	}
}
";
    let (_, table) = build(source);
    let in_initializer = table
        .resolve("v", at(source, "v + 1", 0))
        .and_then(|id| table.get_symbol(id));
    assert_eq!(in_initializer.map(|s| s.span.start.line), Some(2));
    let after = table
        .resolve("v", at(source, "_ = v", 4))
        .and_then(|id| table.get_symbol(id));
    assert_eq!(after.map(|s| s.span.start.line), Some(4));
}

#[test]
fn test_package_level_visible_before_declaration() {
    let source = "package p

func a() {
	b()
}

func b() {}
";
    let (_, table) = build(source);
    let b = table
        .resolve("b", at(source, "b()", 0))
        .and_then(|id| table.get_symbol(id));
    assert_eq!(b.map(|s| s.kind), Some(SymbolKind::Function));
}

#[test]
fn test_members_never_resolve_as_plain_names() {
    let source = "package p

type T struct {
	Field int
}

func (t T) Method() {}

func use() {
	_ = 1
}
";
    let (_, table) = build(source);
    let position = at(source, "_ = 1", 0);
    assert_eq!(table.resolve("Field", position), None);
    assert_eq!(table.resolve("Method", position), None);
    assert!(table.resolve("T", position).is_some());
}

const MEMBERS: &str = "package p

type A struct {
	Name string
	Only int
}

type B struct {
	Name string
}

type Base struct {
	ID int
}

type User struct {
	Base
	Email string
}
";

#[rstest]
#[case(Some("A"), "Name", true)]
#[case(Some("B"), "Name", true)]
#[case(None, "Name", false)]
#[case(None, "Only", true)]
#[case(Some("B"), "Only", false)]
#[case(Some("User"), "ID", true)]
#[case(Some("User"), "Email", true)]
#[case(Some("Missing"), "Name", false)]
fn test_resolve_member(#[case] owner: Option<&str>, #[case] name: &str, #[case] found: bool) {
    let (_, table) = build(MEMBERS);
    assert_eq!(table.resolve_member(owner, name).is_some(), found);
}

#[test]
fn test_promoted_member_belongs_to_embedded_type() {
    let (_, table) = build(MEMBERS);
    let id = table.resolve_member(Some("User"), "ID");
    let owner = id
        .and_then(|id| table.get_symbol(id))
        .and_then(|symbol| symbol.owner)
        .and_then(|owner| table.get_symbol(owner))
        .map(|owner| owner.name.to_string());
    assert_eq!(owner.as_deref(), Some("Base"));
}

#[test]
fn test_lookup_definition() {
    let source = "package shapes

type Point struct {
	X int
}

func origin() Point {
	return Point{}
}
";
    let (_, table) = build(source);
    let position = at(source, "return Point", 7);

    let point = table.lookup_definition("Point", position);
    let point = point.as_ref();
    assert_eq!(point.map(|d| d.kind), Some(SymbolKind::Type));
    assert_eq!(point.map(|d| (d.line, d.column)), Some((3, 6)));
    assert_eq!(point.map(|d| d.unit.as_str()), Some("shapes"));
    assert_eq!(point.map(|d| d.exported), Some(true));

    let origin = table.lookup_definition("origin", position);
    assert_eq!(origin.as_ref().map(|d| d.exported), Some(false));
    assert_eq!(origin.as_ref().map(|d| d.line), Some(7));

    assert_eq!(table.lookup_definition("missing", position), None);
}

#[rstest]
#[case::param_declaration("x", 2, 7, (3, 8))]
#[case::param_read("x", 3, 6, (3, 8))]
#[case::local_declaration("y", 3, 1, (4, 2))]
#[case::local_read("y", 4, 8, (4, 2))]
fn test_lookup_definition_with_line_column_position(
    #[case] name: &str,
    #[case] line: usize,
    #[case] column: usize,
    #[case] expected: (usize, usize),
) {
    let source = "package p

func f(x int) int {
	y := x
	return y
}
";
    let (_, table) = build(source);
    let definition = table.lookup_definition(name, Position::new(line, column));
    assert_eq!(definition.map(|d| (d.line, d.column)), Some(expected));
}

#[test]
fn test_resolve_ignores_missing_offset() {
    let source = "package p

func f(x int) int {
	return x
}
";
    let (_, table) = build(source);
    assert!(table.resolve("x", Position::new(2, 7)).is_some());
}
