//! Identifier occurrences resolved against a built [`SymbolTable`].
//!
//! References are computed on demand and never stored in the table. Each
//! occurrence is classified by the role it plays: the declaring identifier,
//! an assignment target, or anything else (a read).

use super::inference::SelectorOwner;
use super::symbol_table::{SymbolId, SymbolTable};
use crate::base::{Position, Span};
use crate::syntax::ast::{
    AssignOp, CompositeLit, Expr, Field, File, Ident, ImportSpec, InterfaceElem, SelectorExpr,
    Stmt, StmtKind, TypeExpr,
};
use crate::syntax::visit::{self, Visitor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Definition,
    Read,
    Write,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub symbol: SymbolId,
    /// Span of the identifier
    pub span: Span,
    pub kind: ReferenceKind,
}

/// All resolved identifier occurrences of one unit, in traversal order.
#[derive(Debug, Clone, Default)]
pub struct References {
    refs: Vec<Reference>,
}

impl References {
    pub fn iter(&self) -> impl Iterator<Item = &Reference> {
        self.refs.iter()
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// The occurrence whose identifier span contains `position`
    pub fn reference_at(&self, position: Position) -> Option<&Reference> {
        self.refs.iter().find(|r| r.span.contains(position))
    }

    /// The symbol of the identifier whose span contains `position`
    pub fn symbol_at(&self, position: Position) -> Option<SymbolId> {
        self.reference_at(position).map(|r| r.symbol)
    }

    /// Occurrences of one symbol
    pub fn of(&self, symbol: SymbolId) -> impl Iterator<Item = &Reference> {
        self.refs.iter().filter(move |r| r.symbol == symbol)
    }
}

/// Collect every identifier occurrence in `file` that resolves to a symbol
pub fn references(file: &File, table: &SymbolTable) -> References {
    let mut collector = ReferenceCollector {
        table,
        refs: Vec::new(),
    };
    collector.visit_file(file);
    References {
        refs: collector.refs,
    }
}

struct ReferenceCollector<'t> {
    table: &'t SymbolTable,
    refs: Vec<Reference>,
}

impl ReferenceCollector<'_> {
    fn push(&mut self, symbol: SymbolId, ident: &Ident, kind: ReferenceKind) {
        self.refs.push(Reference {
            symbol,
            span: ident.span,
            kind,
        });
    }

    /// Record `ident` if it declares a symbol
    fn declared(&mut self, ident: &Ident) -> bool {
        match self.table.symbol_defined_at(ident.span) {
            Some(id) => {
                self.push(id, ident, ReferenceKind::Definition);
                true
            }
            None => false,
        }
    }

    fn name(&mut self, ident: &Ident, kind: ReferenceKind) {
        if ident.is_blank() || ident.span.is_synthetic() || self.declared(ident) {
            return;
        }
        if let Some(id) = self.table.resolve(&ident.name, ident.span.start) {
            self.push(id, ident, kind);
        }
    }

    fn member(&mut self, sel: &SelectorExpr, kind: ReferenceKind) {
        self.visit_expr(&sel.base);
        if let Some(id) = self.table.selector_member(sel) {
            self.push(id, &sel.sel, kind);
        }
    }

    /// The left-hand side of `=`, `op=`, `++` or `--`
    fn target(&mut self, expr: &Expr) {
        match expr {
            Expr::Ident(ident) => self.name(ident, ReferenceKind::Write),
            Expr::Selector(sel) => self.member(sel, ReferenceKind::Write),
            Expr::Paren(inner) => self.target(inner),
            _ => self.visit_expr(expr),
        }
    }

    /// A composite literal; `expected` types literals whose type is elided
    fn composite(&mut self, lit: &CompositeLit, expected: Option<&TypeExpr>) {
        let table = self.table;
        if let Some(ty) = &lit.ty {
            self.visit_type(ty);
        }
        let literal_type = lit.ty.as_ref().or(expected).map(strip_pointer);
        let underlying = literal_type.map(|ty| table.underlying(ty));

        let (keys_are_fields, key_type, elem_type) = match underlying {
            Some(TypeExpr::Slice(elem)) => (false, None, Some(elem.as_ref())),
            Some(TypeExpr::Array(array)) => (false, None, Some(array.elem.as_ref())),
            Some(TypeExpr::Map(map)) => (false, Some(map.key.as_ref()), Some(map.value.as_ref())),
            _ => (true, None, None),
        };
        let owner = match (literal_type, underlying) {
            (Some(ty), Some(TypeExpr::Struct(_))) => match table.owner_of_type(ty) {
                SelectorOwner::Named(owner) => Some(owner),
                _ => None,
            },
            _ => None,
        };

        for elt in &lit.elts {
            match (&elt.key, keys_are_fields) {
                (Some(Expr::Ident(key)), true) => {
                    if let Some(owner) = &owner
                        && let Some(id) = table.resolve_member(Some(owner), &key.name)
                    {
                        self.push(id, key, ReferenceKind::Read);
                    }
                }
                (Some(key), _) => self.element(key, key_type),
                (None, _) => {}
            }
            self.element(&elt.value, elem_type);
        }
    }

    fn element(&mut self, expr: &Expr, expected: Option<&TypeExpr>) {
        match expr {
            Expr::Composite(lit) if lit.ty.is_none() => self.composite(lit, expected),
            _ => self.visit_expr(expr),
        }
    }
}

impl Visitor for ReferenceCollector<'_> {
    fn visit_import_spec(&mut self, _spec: &ImportSpec) {}

    fn visit_ident(&mut self, ident: &Ident) {
        self.name(ident, ReferenceKind::Read);
    }

    fn visit_field(&mut self, field: &Field) {
        // field and parameter names only ever declare
        for name in &field.names {
            self.declared(name);
        }
        self.visit_type(&field.ty);
    }

    fn visit_type(&mut self, ty: &TypeExpr) {
        match ty {
            TypeExpr::Named(type_name) => {
                if type_name.package.is_none() {
                    self.name(&type_name.name, ReferenceKind::Read);
                }
                for arg in &type_name.args {
                    self.visit_type(arg);
                }
            }
            TypeExpr::Interface(interface) => {
                for elem in &interface.elems {
                    match elem {
                        InterfaceElem::Method(method) => {
                            self.declared(&method.name);
                            self.visit_func_type(&method.sig);
                        }
                        InterfaceElem::Embedded(terms) => {
                            for term in terms {
                                self.visit_type(&term.ty);
                            }
                        }
                    }
                }
            }
            _ => visit::walk_type(self, ty),
        }
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Assign(assign) => {
                for target in &assign.lhs {
                    match (assign.op, target) {
                        (AssignOp::Define, Expr::Ident(ident)) => {
                            if !ident.is_blank() && !self.declared(ident) {
                                self.name(ident, ReferenceKind::Write);
                            }
                        }
                        (AssignOp::Define, _) => self.visit_expr(target),
                        _ => self.target(target),
                    }
                }
                for value in &assign.rhs {
                    self.visit_expr(value);
                }
            }
            StmtKind::IncDec(inc_dec) => self.target(&inc_dec.target),
            StmtKind::Range(range) => {
                for target in range.key.iter().chain(&range.value) {
                    match (range.define, target) {
                        (true, Expr::Ident(ident)) => {
                            self.declared(ident);
                        }
                        _ => self.target(target),
                    }
                }
                self.visit_expr(&range.expr);
                self.visit_block(&range.body);
            }
            StmtKind::Branch(_) => {}
            StmtKind::Labeled(labeled) => self.visit_stmt(&labeled.stmt),
            _ => visit::walk_stmt(self, stmt),
        }
    }

    fn visit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Selector(sel) => self.member(sel, ReferenceKind::Read),
            Expr::Composite(lit) => self.composite(lit, None),
            _ => visit::walk_expr(self, expr),
        }
    }
}

fn strip_pointer(ty: &TypeExpr) -> &TypeExpr {
    match ty {
        TypeExpr::Pointer(inner) => inner.as_ref(),
        _ => ty,
    }
}
