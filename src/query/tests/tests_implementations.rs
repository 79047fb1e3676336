//! Tests for interface implementation queries

use super::super::{MatchKind, Query};
use super::units;

const IO: &str = "package io

type Closer interface {
	Close() error
}

type Writer interface {
	Write(data []byte) (int, error)
}

type WriteCloser interface {
	Writer
	Closer
}

type File struct{}

func (f *File) Close() error {
	return nil
}

func (f *File) Write(data []byte) (int, error) {
	return len(data), nil
}

type Socket struct{}

func (s Socket) Close() bool {
	return true
}

type Pipe struct{}

func (p Pipe) Close(force bool) error {
	return nil
}

type Handle int

func (h Handle) Close() (bool, error) {
	return false, nil
}
";

fn implementers(sources: &[(&str, &str)], interface: &str) -> Vec<String> {
    let units = units(sources);
    Query::new(&units)
        .find_implementations(interface)
        .into_iter()
        .map(|m| m.name)
        .collect()
}

#[test]
fn test_result_types_are_not_compared() {
    // Socket.Close returns bool; Pipe.Close takes a parameter; Handle.Close
    // returns two values
    assert_eq!(implementers(&[("io.go", IO)], "Closer"), vec!["File", "Socket"]);
}

#[test]
fn test_embedded_interfaces_are_expanded() {
    assert_eq!(implementers(&[("io.go", IO)], "WriteCloser"), vec!["File"]);
}

#[test]
fn test_parameter_types_must_match() {
    let source = "package p

type Sink interface {
	Put(key string, value int)
}

type Good struct{}

func (g Good) Put(k string, v int) {}

type Bad struct{}

func (b Bad) Put(k string, v int64) {}
";
    assert_eq!(implementers(&[("p.go", source)], "Sink"), vec!["Good"]);
}

#[test]
fn test_methods_collected_across_units() {
    let types = "package p\n\ntype Remote struct{}\n";
    let methods = "package p\n\nfunc (r *Remote) Close() error {\n\treturn nil\n}\n";
    let iface = "package p\n\ntype Closer interface {\n\tClose() error\n}\n";
    let units = units(&[("types.go", types), ("methods.go", methods), ("iface.go", iface)]);
    let matches = Query::new(&units).find_implementations("Closer");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Remote");
    assert_eq!(matches[0].unit, "types.go");
    assert_eq!(matches[0].line, 3);
    assert_eq!(matches[0].kind, MatchKind::Implementation);
}

#[test]
fn test_unknown_interface_has_no_implementations() {
    assert!(implementers(&[("io.go", IO)], "Reader").is_empty());
    // a struct is not an interface
    assert!(implementers(&[("io.go", IO)], "File").is_empty());
}
