//! Symbol table construction.
//!
//! Package-level names, struct fields, interface methods and methods are
//! declared up front so that a method may precede its receiver type and a
//! package-level initializer may call a function declared further down. The
//! depth-first walk then opens nested scopes and declares locals in source
//! order.

use smol_str::SmolStr;

use super::symbol_table::{ScopeId, ScopeKind, SymbolId, SymbolKind, SymbolTable};
use crate::base::{Position, Span};
use crate::syntax::SourceUnit;
use crate::syntax::ast::{
    AssignOp, Block, Decl, DeclKeyword, Expr, FieldList, File, FuncDecl, FuncLit, FuncType,
    GenDecl, Ident, InterfaceElem, Spec, Stmt, StmtKind, TypeExpr, TypeSpec, ValueSpec,
};
use crate::syntax::visit::{self, Visitor};

impl SymbolTable {
    /// Build the table for a parsed file, naming the unit after its package
    pub fn build(file: &File) -> Self {
        Self::build_named(file.package.as_str(), file)
    }

    /// Build the table for a loaded unit
    pub fn for_unit(unit: &SourceUnit) -> Self {
        Self::build_named(unit.name(), unit.file())
    }

    fn build_named(name: &str, file: &File) -> Self {
        let mut builder = SymbolTableBuilder {
            table: SymbolTable::new(name, file.span),
        };
        builder.declare_package_level(file);
        builder.visit_file(file);
        tracing::debug!(
            "[SEMANTIC] built table for '{}': {} symbols, {} scopes",
            name,
            builder.table.symbol_count(),
            builder.table.scopes().len()
        );
        builder.table
    }
}

struct SymbolTableBuilder {
    table: SymbolTable,
}

impl SymbolTableBuilder {
    fn is_package_level(&self) -> bool {
        self.table.current_scope() == ScopeId::ROOT
    }

    fn declare(
        &mut self,
        name: &Ident,
        kind: SymbolKind,
        visible_from: Position,
        declared_type: Option<TypeExpr>,
    ) -> Option<SymbolId> {
        if name.is_blank() {
            return None;
        }
        let mut symbol = self
            .table
            .make_symbol(&name.name, kind, name.span, visible_from);
        symbol.declared_type = declared_type;
        Some(self.table.insert(symbol))
    }

    // ========================================================================
    // PACKAGE LEVEL
    // ========================================================================

    fn declare_package_level(&mut self, file: &File) {
        self.declare(
            &file.package,
            SymbolKind::Unit,
            Position::default(),
            None,
        );

        let mut methods = Vec::new();
        for decl in &file.decls {
            match decl {
                Decl::Func(func) if func.is_method() => methods.push(func),
                Decl::Func(func) => {
                    self.declare(
                        &func.name,
                        SymbolKind::Function,
                        Position::default(),
                        Some(TypeExpr::Func(func.sig.clone())),
                    );
                }
                Decl::Gen(gen_decl) => {
                    for spec in &gen_decl.specs {
                        match spec {
                            Spec::Type(type_spec) => {
                                self.declare_type_spec(type_spec, Position::default());
                            }
                            Spec::Value(value_spec) => {
                                let kind = value_kind(gen_decl.keyword);
                                for name in &value_spec.names {
                                    self.declare(
                                        name,
                                        kind,
                                        Position::default(),
                                        value_spec.ty.clone(),
                                    );
                                }
                            }
                        }
                    }
                }
            }
        }

        for method in methods {
            self.declare_method(method);
        }
    }

    fn declare_method(&mut self, func: &FuncDecl) {
        let Some(receiver) = func.receiver_type_name() else {
            return;
        };
        let owner = self
            .table
            .get_symbol_id_in_scope(ScopeId::ROOT, &receiver.name)
            .filter(|&id| {
                self.table
                    .get_symbol(id)
                    .is_some_and(|symbol| symbol.kind == SymbolKind::Type)
            });
        let mut symbol = self.table.make_symbol(
            &func.name.name,
            SymbolKind::Method,
            func.name.span,
            Position::default(),
        );
        symbol.declared_type = Some(TypeExpr::Func(func.sig.clone()));
        symbol.owner = owner;
        self.table.insert_member(&receiver.name, symbol);
    }

    /// Declare a type name and register its fields or interface methods
    fn declare_type_spec(&mut self, spec: &TypeSpec, visible_from: Position) {
        let Some(owner_id) = self.declare(
            &spec.name,
            SymbolKind::Type,
            visible_from,
            Some(spec.ty.clone()),
        ) else {
            return;
        };
        if spec.alias {
            return;
        }
        let owner = spec.name.name.clone();

        match &spec.ty {
            TypeExpr::Struct(struct_type) => {
                for field in &struct_type.fields {
                    if field.names.is_empty() {
                        self.declare_embedded_field(&owner, owner_id, &field.ty);
                        continue;
                    }
                    for name in &field.names {
                        self.declare_member(
                            &owner,
                            owner_id,
                            name,
                            SymbolKind::Field,
                            field.ty.clone(),
                        );
                    }
                }
            }
            TypeExpr::Interface(interface) => {
                for elem in &interface.elems {
                    match elem {
                        InterfaceElem::Method(method) => self.declare_member(
                            &owner,
                            owner_id,
                            &method.name,
                            SymbolKind::Method,
                            TypeExpr::Func(method.sig.clone()),
                        ),
                        InterfaceElem::Embedded(terms) => {
                            if let [term] = terms.as_slice()
                                && let Some(embedded) = term.ty.base_name()
                            {
                                self.table.add_embedded(&owner, &embedded.name);
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn declare_member(
        &mut self,
        owner: &SmolStr,
        owner_id: SymbolId,
        name: &Ident,
        kind: SymbolKind,
        ty: TypeExpr,
    ) {
        if name.is_blank() {
            return;
        }
        let mut symbol = self
            .table
            .make_symbol(&name.name, kind, name.span, Position::default());
        symbol.declared_type = Some(ty);
        symbol.owner = Some(owner_id);
        self.table.insert_member(owner, symbol);
    }

    /// An embedded field is named after its type; the type name it is
    /// spelled with stays a reference to the type.
    fn declare_embedded_field(&mut self, owner: &SmolStr, owner_id: SymbolId, ty: &TypeExpr) {
        let name = match ty {
            TypeExpr::Named(type_name) => &type_name.name,
            TypeExpr::Pointer(inner) => match inner.as_ref() {
                TypeExpr::Named(type_name) => &type_name.name,
                _ => return,
            },
            _ => return,
        };
        let mut symbol = self.table.make_symbol(
            &name.name,
            SymbolKind::Field,
            Span::default(),
            Position::default(),
        );
        symbol.declared_type = Some(ty.clone());
        symbol.owner = Some(owner_id);
        self.table.insert_member(owner, symbol);
        if ty.base_name().is_some() {
            self.table.add_embedded(owner, &name.name);
        }
    }

    // ========================================================================
    // SCOPES
    // ========================================================================

    /// Declare every named entry of a parameter-like list
    fn declare_fields(&mut self, list: &FieldList, kind: SymbolKind) {
        for field in &list.fields {
            let declared_type = match (kind, &field.ty) {
                (SymbolKind::Type, _) => None,
                (_, TypeExpr::Ellipsis(elem)) => Some(TypeExpr::Slice(elem.clone())),
                (_, ty) => Some(ty.clone()),
            };
            for name in &field.names {
                self.declare(name, kind, name.span.start, declared_type.clone());
            }
        }
    }

    fn declare_signature(&mut self, sig: &FuncType) {
        self.declare_fields(&sig.params, SymbolKind::Variable);
        if let Some(results) = &sig.results {
            self.declare_fields(results, SymbolKind::Variable);
        }
    }

    /// Type parameters introduced by a receiver such as `(l *List[T])`
    fn declare_receiver_type_params(&mut self, recv: &FieldList) {
        let Some(field) = recv.fields.first() else {
            return;
        };
        let type_name = match &field.ty {
            TypeExpr::Named(type_name) => type_name,
            TypeExpr::Pointer(inner) => match inner.as_ref() {
                TypeExpr::Named(type_name) => type_name,
                _ => return,
            },
            _ => return,
        };
        for arg in &type_name.args {
            if let TypeExpr::Named(param) = arg
                && param.package.is_none()
            {
                self.declare(&param.name, SymbolKind::Type, param.name.span.start, None);
            }
        }
    }

    fn stmts(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.visit_stmt(stmt);
        }
    }

    fn block_scope(&mut self, block: &Block) {
        self.table.enter_scope(ScopeKind::Block, block.span);
        self.stmts(&block.stmts);
        self.table.exit_scope();
    }

    fn func_lit(&mut self, lit: &FuncLit) {
        let range = Span::new(lit.sig.params.span.start, lit.body.span.end);
        self.table.enter_scope(ScopeKind::Function, range);
        self.declare_signature(&lit.sig);
        self.stmts(&lit.body.stmts);
        self.table.exit_scope();
    }

    fn type_params_scope(&mut self, spec: &TypeSpec) {
        if let Some(type_params) = &spec.type_params {
            self.table.enter_scope(ScopeKind::TypeDecl, spec.span);
            self.declare_fields(type_params, SymbolKind::Type);
            self.table.exit_scope();
        }
    }

    // ========================================================================
    // VALUE DECLARATIONS
    // ========================================================================

    fn gen_decl(&mut self, decl: &GenDecl) {
        let package_level = self.is_package_level();
        // const specs without values repeat the previous spec's type
        let mut inherited: Option<TypeExpr> = None;
        for spec in &decl.specs {
            match spec {
                Spec::Type(type_spec) => {
                    if !package_level {
                        self.declare_type_spec(type_spec, type_spec.name.span.start);
                    }
                    self.type_params_scope(type_spec);
                }
                Spec::Value(value_spec) => {
                    for value in &value_spec.values {
                        self.visit_expr(value);
                    }
                    let types = self.value_types(decl.keyword, value_spec, &mut inherited);
                    if package_level {
                        self.refine_package_level(value_spec, types);
                    } else {
                        let kind = value_kind(decl.keyword);
                        for (name, ty) in value_spec.names.iter().zip(types) {
                            self.declare(name, kind, value_spec.span.end, ty);
                        }
                    }
                }
            }
        }
    }

    fn value_types(
        &self,
        keyword: DeclKeyword,
        spec: &ValueSpec,
        inherited: &mut Option<TypeExpr>,
    ) -> Vec<Option<TypeExpr>> {
        let count = spec.names.len();
        if let Some(ty) = &spec.ty {
            *inherited = Some(ty.clone());
            return vec![Some(ty.clone()); count];
        }
        if spec.values.is_empty() {
            return match keyword {
                DeclKeyword::Const => vec![inherited.clone(); count],
                _ => vec![None; count],
            };
        }
        let types = self.table.infer_assigned_types(count, &spec.values);
        *inherited = types.first().cloned().flatten();
        types
    }

    /// Package-level names were declared ahead of the walk; fill in the
    /// types their initializers imply.
    fn refine_package_level(&mut self, spec: &ValueSpec, types: Vec<Option<TypeExpr>>) {
        for (name, ty) in spec.names.iter().zip(types) {
            let Some(id) = self.table.symbol_defined_at(name.span) else {
                continue;
            };
            if let Some(symbol) = self.table.get_symbol_mut(id)
                && symbol.declared_type.is_none()
            {
                symbol.declared_type = ty;
            }
        }
    }

    fn short_var_decl(&mut self, stmt: &Stmt, lhs: &[Expr], rhs: &[Expr]) {
        let types = self.table.infer_assigned_types(lhs.len(), rhs);
        let scope = self.table.current_scope();
        for (target, ty) in lhs.iter().zip(types) {
            let Some(name) = target.as_ident() else {
                continue;
            };
            if self.table.get_symbol_id_in_scope(scope, &name.name).is_some() {
                tracing::trace!("[SYMBOL] '{}' redeclared by ':='", name.name);
                continue;
            }
            self.declare(name, SymbolKind::Variable, stmt.span.end, ty);
        }
    }
}

impl Visitor for SymbolTableBuilder {
    fn visit_file(&mut self, file: &File) {
        for decl in &file.decls {
            self.visit_decl(decl);
        }
    }

    fn visit_func_decl(&mut self, func: &FuncDecl) {
        self.table.enter_scope(ScopeKind::Function, func.span);
        if let Some(type_params) = &func.type_params {
            self.declare_fields(type_params, SymbolKind::Type);
        }
        if let Some(recv) = &func.recv {
            self.declare_receiver_type_params(recv);
            self.declare_fields(recv, SymbolKind::Variable);
        }
        self.declare_signature(&func.sig);
        if let Some(body) = &func.body {
            self.stmts(&body.stmts);
        }
        self.table.exit_scope();
    }

    fn visit_gen_decl(&mut self, decl: &GenDecl) {
        self.gen_decl(decl);
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Decl(decl) => self.gen_decl(decl),
            StmtKind::Assign(assign) => {
                for value in &assign.rhs {
                    self.visit_expr(value);
                }
                for target in &assign.lhs {
                    self.visit_expr(target);
                }
                if assign.op == AssignOp::Define {
                    self.short_var_decl(stmt, &assign.lhs, &assign.rhs);
                }
            }
            StmtKind::If(if_stmt) => {
                self.table.enter_scope(ScopeKind::If, stmt.span);
                if let Some(init) = &if_stmt.init {
                    self.visit_stmt(init);
                }
                self.visit_expr(&if_stmt.cond);
                self.block_scope(&if_stmt.then);
                if let Some(els) = &if_stmt.els {
                    self.visit_stmt(els);
                }
                self.table.exit_scope();
            }
            StmtKind::For(for_stmt) => {
                self.table.enter_scope(ScopeKind::For, stmt.span);
                if let Some(init) = &for_stmt.init {
                    self.visit_stmt(init);
                }
                if let Some(cond) = &for_stmt.cond {
                    self.visit_expr(cond);
                }
                if let Some(post) = &for_stmt.post {
                    self.visit_stmt(post);
                }
                self.block_scope(&for_stmt.body);
                self.table.exit_scope();
            }
            StmtKind::Range(range) => {
                self.table.enter_scope(ScopeKind::Range, stmt.span);
                self.visit_expr(&range.expr);
                if range.define {
                    let (key_type, value_type) = self.table.infer_range_types(&range.expr);
                    let visible_from = range.body.span.start;
                    let targets = [(&range.key, key_type), (&range.value, value_type)];
                    for (target, ty) in targets {
                        if let Some(name) = target.as_ref().and_then(Expr::as_ident) {
                            self.declare(name, SymbolKind::Variable, visible_from, ty);
                        }
                    }
                }
                self.block_scope(&range.body);
                self.table.exit_scope();
            }
            StmtKind::Switch(switch) => {
                self.table.enter_scope(ScopeKind::Switch, stmt.span);
                if let Some(init) = &switch.init {
                    self.visit_stmt(init);
                }
                if let Some(tag) = &switch.tag {
                    self.visit_expr(tag);
                }
                for clause in &switch.clauses {
                    self.table.enter_scope(ScopeKind::Case, clause.span);
                    for value in &clause.values {
                        self.visit_expr(value);
                    }
                    self.stmts(&clause.body);
                    self.table.exit_scope();
                }
                self.table.exit_scope();
            }
            StmtKind::TypeSwitch(switch) => {
                self.table.enter_scope(ScopeKind::Switch, stmt.span);
                if let Some(init) = &switch.init {
                    self.visit_stmt(init);
                }
                self.visit_expr(&switch.subject);
                if let Some(binding) = &switch.binding {
                    let ty = self.table.infer_type(&switch.subject);
                    self.declare(binding, SymbolKind::Variable, binding.span.end, ty);
                }
                for clause in &switch.clauses {
                    self.table.enter_scope(ScopeKind::Case, clause.span);
                    self.stmts(&clause.body);
                    self.table.exit_scope();
                }
                self.table.exit_scope();
            }
            StmtKind::Block(block) => self.block_scope(block),
            StmtKind::Labeled(labeled) => self.visit_stmt(&labeled.stmt),
            _ => visit::walk_stmt(self, stmt),
        }
    }

    fn visit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::FuncLit(lit) => self.func_lit(lit),
            _ => visit::walk_expr(self, expr),
        }
    }
}

fn value_kind(keyword: DeclKeyword) -> SymbolKind {
    match keyword {
        DeclKeyword::Const => SymbolKind::Constant,
        _ => SymbolKind::Variable,
    }
}
