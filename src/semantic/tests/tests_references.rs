//! Tests for reference collection

use super::helpers::{at, build};
use crate::semantic::{ReferenceKind, references};

#[test]
fn test_reference_kinds_in_order() {
    let source = "package p

func f() int {
	n := 1
	n = n + 1
	n++
	return n
}
";
    let (file, table) = build(source);
    let refs = references(&file, &table);
    let n = refs.symbol_at(at(source, "n := 1", 0));
    assert!(n.is_some());
    let kinds: Vec<_> = n
        .into_iter()
        .flat_map(|id| refs.of(id))
        .map(|r| r.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            ReferenceKind::Definition,
            ReferenceKind::Write,
            ReferenceKind::Read,
            ReferenceKind::Write,
            ReferenceKind::Read,
        ]
    );
}

const USERS: &str = "package p

type User struct {
	Name string
}

func (u *User) Rename(name string) {
	u.Name = name
}

func show(u User) string {
	return u.Name
}

func all() []User {
	one := User{Name: \"a\"}
	return []User{one, {Name: \"b\"}}
}
";

#[test]
fn test_field_references_through_selectors_and_keys() {
    let (file, table) = build(USERS);
    let refs = references(&file, &table);
    let field = table.resolve_member(Some("User"), "Name");
    assert!(field.is_some());

    let found: Vec<_> = field
        .into_iter()
        .flat_map(|id| refs.of(id))
        .map(|r| (r.span.start.line, r.kind))
        .collect();
    assert_eq!(
        found,
        vec![
            (3, ReferenceKind::Definition),
            (7, ReferenceKind::Write),
            (11, ReferenceKind::Read),
            (15, ReferenceKind::Read),
            (16, ReferenceKind::Read),
        ]
    );
}

#[test]
fn test_instance_identifier_is_not_the_member() {
    let (file, table) = build(USERS);
    let refs = references(&file, &table);
    let receiver = refs.symbol_at(at(USERS, "u.Name = name", 0));
    let field = refs.symbol_at(at(USERS, "u.Name = name", 2));
    assert!(receiver.is_some());
    assert!(field.is_some());
    assert_ne!(receiver, field);
}

#[test]
fn test_type_references() {
    let (file, table) = build(USERS);
    let refs = references(&file, &table);
    let user = refs.symbol_at(at(USERS, "type User", 5));
    let count = user.map(|id| refs.of(id).count());
    // declaration, receiver, parameter, result, two literals
    assert_eq!(count, Some(6));
}

#[test]
fn test_package_selectors_are_skipped() {
    let source = "package main

import \"fmt\"

func main() {
	msg := \"hi\"
	fmt.Println(msg)
}
";
    let (file, table) = build(source);
    let refs = references(&file, &table);
    assert_eq!(refs.symbol_at(at(source, "fmt.Println", 0)), None);
    assert_eq!(refs.symbol_at(at(source, "Println", 0)), None);
    assert!(refs.symbol_at(at(source, "msg)", 0)).is_some());
}

#[test]
fn test_labels_and_blank_are_not_references() {
    let source = "package p

func loop(xs []int) {
outer:
	for _, x := range xs {
		if x > 0 {
			break outer
		}
	}
}
";
    let (file, table) = build(source);
    let refs = references(&file, &table);
    assert_eq!(refs.symbol_at(at(source, "outer:", 0)), None);
    assert_eq!(refs.symbol_at(at(source, "break outer", 6)), None);
    assert_eq!(refs.symbol_at(at(source, "_, x", 0)), None);
    let x = refs.symbol_at(at(source, "x > 0", 0));
    assert_eq!(x, refs.symbol_at(at(source, "_, x", 3)));
}

#[test]
fn test_inline_struct_fields_have_no_symbols() {
    let source = "package p

func f(name string) {
	cases := []struct {
		name string
	}{{name: name}}
	_ = cases
}
";
    let (file, table) = build(source);
    let refs = references(&file, &table);
    assert_eq!(refs.symbol_at(at(source, "name string\n\t}", 0)), None);
    assert_eq!(refs.symbol_at(at(source, "{name: name}", 1)), None);
    let param = refs.symbol_at(at(source, "f(name", 2));
    assert!(param.is_some());
    assert_eq!(refs.symbol_at(at(source, "{name: name}", 7)), param);
}
