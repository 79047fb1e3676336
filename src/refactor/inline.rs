use rustc_hash::FxHashSet;
use text_size::TextSize;
use tracing::debug;

use crate::base::Span;
use crate::error::{AnalysisError, Result};
use crate::semantic::{Reference, ReferenceKind, SymbolTable, references};
use crate::syntax::ast::{
    AssignOp, Block, Decl, DeclKeyword, Expr, File, GenDecl, Ident, Spec, Stmt, StmtKind,
    UnaryOp,
};
use crate::syntax::visit::{self, Visitor, VisitorMut};

/// Replace every read of `var_name` by a copy of its initializer and drop the
/// definition.
///
/// The first single-target `x := e` or `var x = e` in source order whose
/// initializer is simple (an identifier, a basic literal or a non-receive
/// unary operator applied to one) is inlined. Variables assigned after their
/// definition are rejected.
pub fn inline_variable(file: &File, var_name: &str) -> Result<File> {
    let mut finder = DefinitionFinder {
        name: var_name,
        found: None,
    };
    finder.visit_file(file);
    let candidate = finder.found.ok_or_else(|| {
        AnalysisError::symbol_not_found(format!("no inlinable definition of '{var_name}'"))
    })?;

    let table = SymbolTable::build(file);
    let symbol = table
        .symbol_defined_at(candidate.ident.span)
        .ok_or_else(|| AnalysisError::symbol_not_found(var_name))?;
    let refs = references(file, &table);
    if let Some(write) = refs.of(symbol).find(|r| r.kind == ReferenceKind::Write) {
        return Err(AnalysisError::invalid(format!(
            "'{var_name}' is reassigned on line {}",
            write.span.start.line_number()
        )));
    }
    let read_refs: Vec<&Reference> = refs
        .of(symbol)
        .filter(|r| r.kind == ReferenceKind::Read)
        .collect();
    let reads: FxHashSet<TextSize> = read_refs.iter().map(|r| r.span.start.offset).collect();

    let mut addressed = AddressTaken {
        reads: &reads,
        found: None,
    };
    addressed.visit_file(file);
    if let Some(span) = addressed.found {
        return Err(AnalysisError::invalid(format!(
            "the address of '{var_name}' is taken on line {}",
            span.start.line_number()
        )));
    }

    // every name in the initializer must mean the same thing at each read
    for ident in source_idents(&candidate.source) {
        let origin = table.resolve(&ident.name, ident.span.start);
        if let Some(read) = read_refs
            .iter()
            .find(|read| table.resolve(&ident.name, read.span.start) != origin)
        {
            return Err(AnalysisError::invalid(format!(
                "'{}' in the initializer of '{var_name}' is shadowed on line {}",
                ident.name,
                read.span.start.line_number()
            )));
        }
    }

    let mut inliner = Inliner {
        reads: &reads,
        source: &candidate.source,
        site: candidate.site,
        replaced: 0,
    };
    let mut result = file.clone();
    inliner.visit_file_mut(&mut result);
    debug!(name = var_name, replaced = inliner.replaced, "inlined variable");
    Ok(result)
}

fn is_simple(expr: &Expr) -> bool {
    match expr {
        Expr::Ident(_) | Expr::BasicLit(_) => true,
        Expr::Unary(unary) => unary.op != UnaryOp::Recv && is_simple(&unary.operand),
        _ => false,
    }
}

/// Identifiers an inlinable initializer mentions
fn source_idents(expr: &Expr) -> Vec<&Ident> {
    match expr {
        Expr::Ident(ident) if !ident.is_blank() => vec![ident],
        Expr::Unary(unary) => source_idents(&unary.operand),
        _ => Vec::new(),
    }
}

/// Finds a read of the variable used as the operand of `&`
struct AddressTaken<'a> {
    reads: &'a FxHashSet<TextSize>,
    found: Option<Span>,
}

impl Visitor for AddressTaken<'_> {
    fn visit_expr(&mut self, expr: &Expr) {
        if self.found.is_some() {
            return;
        }
        if let Expr::Unary(unary) = expr
            && unary.op == UnaryOp::Addr
            && let Expr::Ident(ident) = strip_parens(&unary.operand)
            && !ident.span.is_synthetic()
            && self.reads.contains(&ident.span.start.offset)
        {
            self.found = Some(ident.span);
            return;
        }
        visit::walk_expr(self, expr);
    }
}

fn strip_parens(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(inner) => strip_parens(inner),
        _ => expr,
    }
}

/// Where the definition lives: a whole `:=` statement or one `var` spec
#[derive(Debug, Clone, Copy)]
enum Site {
    Stmt(Span),
    Spec(Span),
}

struct Candidate {
    ident: Ident,
    source: Expr,
    site: Site,
}

struct DefinitionFinder<'n> {
    name: &'n str,
    found: Option<Candidate>,
}

impl DefinitionFinder<'_> {
    /// Statement lists are scanned one statement at a time so that nested
    /// bodies are searched in source order. Init statements of `if`, `for`
    /// and `switch` never qualify.
    fn scan(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            if self.found.is_some() {
                return;
            }
            self.found = self.candidate(stmt);
            self.visit_stmt(stmt);
        }
    }

    fn candidate(&self, stmt: &Stmt) -> Option<Candidate> {
        match &stmt.kind {
            StmtKind::Assign(assign) if assign.op == AssignOp::Define => {
                match (assign.lhs.as_slice(), assign.rhs.as_slice()) {
                    ([Expr::Ident(ident)], [source])
                        if ident.name == self.name && is_simple(source) =>
                    {
                        Some(Candidate {
                            ident: ident.clone(),
                            source: source.clone(),
                            site: Site::Stmt(stmt.span),
                        })
                    }
                    _ => None,
                }
            }
            StmtKind::Decl(decl) => self.var_spec(decl),
            _ => None,
        }
    }

    fn var_spec(&self, decl: &GenDecl) -> Option<Candidate> {
        if decl.keyword != DeclKeyword::Var {
            return None;
        }
        decl.specs.iter().find_map(|spec| {
            let Spec::Value(value) = spec else {
                return None;
            };
            match (value.names.as_slice(), value.values.as_slice()) {
                ([ident], [source]) if ident.name == self.name && is_simple(source) => {
                    Some(Candidate {
                        ident: ident.clone(),
                        source: source.clone(),
                        site: Site::Spec(value.span),
                    })
                }
                _ => None,
            }
        })
    }
}

impl Visitor for DefinitionFinder<'_> {
    fn visit_file(&mut self, file: &File) {
        for decl in &file.decls {
            if self.found.is_some() {
                return;
            }
            match decl {
                Decl::Gen(gen_decl) => self.found = self.var_spec(gen_decl),
                Decl::Func(func) => self.visit_func_decl(func),
            }
        }
    }

    fn visit_block(&mut self, block: &Block) {
        self.scan(&block.stmts);
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Switch(switch) => {
                if let Some(tag) = &switch.tag {
                    self.visit_expr(tag);
                }
                for clause in &switch.clauses {
                    self.scan(&clause.body);
                }
            }
            StmtKind::TypeSwitch(switch) => {
                self.visit_expr(&switch.subject);
                for clause in &switch.clauses {
                    self.scan(&clause.body);
                }
            }
            _ => visit::walk_stmt(self, stmt),
        }
    }
}

struct Inliner<'a> {
    reads: &'a FxHashSet<TextSize>,
    source: &'a Expr,
    site: Site,
    replaced: usize,
}

impl Inliner<'_> {
    fn is_read(&self, expr: &Expr) -> bool {
        matches!(expr, Expr::Ident(ident)
            if !ident.span.is_synthetic() && self.reads.contains(&ident.span.start.offset))
    }

    fn copy(&mut self, postfix_base: bool) -> Expr {
        self.replaced += 1;
        let copy = self.source.clone();
        if postfix_base && matches!(copy, Expr::Unary(_)) {
            Expr::Paren(Box::new(copy))
        } else {
            copy
        }
    }

    fn prune_specs(&self, decl: &mut GenDecl) {
        if let Site::Spec(span) = self.site {
            decl.specs
                .retain(|spec| !matches!(spec, Spec::Value(value) if value.span == span));
        }
    }

    fn prune(&self, stmts: &mut Vec<Stmt>) {
        match self.site {
            Site::Stmt(span) => stmts.retain(|stmt| stmt.span != span),
            Site::Spec(_) => {
                for stmt in stmts.iter_mut() {
                    if let StmtKind::Decl(decl) = &mut stmt.kind {
                        self.prune_specs(decl);
                    }
                }
                stmts.retain(|stmt| !matches!(&stmt.kind, StmtKind::Decl(decl) if decl.specs.is_empty()));
            }
        }
    }
}

impl VisitorMut for Inliner<'_> {
    fn visit_file_mut(&mut self, file: &mut File) {
        if let Site::Spec(_) = self.site {
            for decl in &mut file.decls {
                if let Decl::Gen(gen_decl) = decl {
                    self.prune_specs(gen_decl);
                }
            }
            file.decls
                .retain(|decl| !matches!(decl, Decl::Gen(gen_decl) if gen_decl.specs.is_empty()));
        }
        visit::walk_file_mut(self, file);
    }

    fn visit_block_mut(&mut self, block: &mut Block) {
        self.prune(&mut block.stmts);
        visit::walk_block_mut(self, block);
    }

    fn visit_stmt_mut(&mut self, stmt: &mut Stmt) {
        match &mut stmt.kind {
            StmtKind::Switch(switch) => {
                for clause in &mut switch.clauses {
                    self.prune(&mut clause.body);
                }
            }
            StmtKind::TypeSwitch(switch) => {
                for clause in &mut switch.clauses {
                    self.prune(&mut clause.body);
                }
            }
            _ => {}
        }
        visit::walk_stmt_mut(self, stmt);
    }

    fn visit_expr_mut(&mut self, expr: &mut Expr) {
        if self.is_read(expr) {
            *expr = self.copy(false);
            return;
        }
        let base = match expr {
            Expr::Selector(selector) => Some(&mut selector.base),
            Expr::Index(index) => Some(&mut index.base),
            Expr::Slice(slice) => Some(&mut slice.base),
            Expr::TypeAssert(assert) => Some(&mut assert.base),
            Expr::Call(call) => Some(&mut call.fun),
            _ => None,
        };
        if let Some(base) = base
            && self.is_read(base)
        {
            **base = self.copy(true);
        }
        visit::walk_expr_mut(self, expr);
    }
}
