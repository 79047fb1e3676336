//! Tests for the visitor traits

use super::super::ast::*;
use super::super::printer::print_file;
use super::super::visit::{self, Visitor, VisitorMut};
use crate::parser::parse_file;

#[derive(Default)]
struct IdentCollector {
    names: Vec<String>,
}

impl Visitor for IdentCollector {
    fn visit_ident(&mut self, ident: &Ident) {
        self.names.push(ident.name.to_string());
    }
}

struct Uppercase;

impl VisitorMut for Uppercase {
    fn visit_ident_mut(&mut self, ident: &mut Ident) {
        if ident.as_str() == "x" {
            ident.name = "X".into();
        }
    }
}

/// Counts calls and stops descending into function literals
#[derive(Default)]
struct CallCounter {
    calls: usize,
}

impl Visitor for CallCounter {
    fn visit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Call(_) => self.calls += 1,
            Expr::FuncLit(_) => return,
            _ => {}
        }
        visit::walk_expr(self, expr);
    }
}

const SOURCE: &str = "package p\n\ntype T struct {\n\tx int\n}\n\nfunc f(t T) int {\n\tx := t.x\n\tg(func() { h() })\n\treturn x\n}\n";

#[test]
fn test_visitor_reaches_every_identifier() {
    let file = parse_file(SOURCE).file;
    let mut collector = IdentCollector::default();
    collector.visit_file(&file);
    for expected in ["p", "T", "x", "f", "t", "int", "g", "h"] {
        assert!(
            collector.names.iter().any(|name| name == expected),
            "missing {expected} in {:?}",
            collector.names
        );
    }
    assert_eq!(collector.names.iter().filter(|name| *name == "x").count(), 4);
}

#[test]
fn test_visitor_mut_rewrites_in_place() {
    let mut file = parse_file(SOURCE).file;
    Uppercase.visit_file_mut(&mut file);
    let printed = print_file(&file);
    assert!(printed.contains("X := t.X"));
    assert!(printed.contains("return X"));
    assert!(!printed.contains(" x "));
}

#[test]
fn test_overridden_hook_can_skip_subtrees() {
    let file = parse_file(SOURCE).file;
    let mut counter = CallCounter::default();
    counter.visit_file(&file);
    assert_eq!(counter.calls, 1);
}
