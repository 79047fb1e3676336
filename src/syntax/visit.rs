//! Visitor traits for AST traversal.
//!
//! [`Visitor`] walks a tree by shared reference, [`VisitorMut`] by mutable
//! reference. Every hook has a default that recurses through the matching
//! `walk_*` function, so an implementation overrides only the nodes it cares
//! about and calls the walker to keep descending.

use super::ast::*;

/// Read-only traversal.
pub trait Visitor {
    fn visit_file(&mut self, file: &File) {
        walk_file(self, file);
    }
    fn visit_import_spec(&mut self, spec: &ImportSpec) {
        walk_import_spec(self, spec);
    }
    fn visit_decl(&mut self, decl: &Decl) {
        walk_decl(self, decl);
    }
    fn visit_func_decl(&mut self, func: &FuncDecl) {
        walk_func_decl(self, func);
    }
    fn visit_gen_decl(&mut self, decl: &GenDecl) {
        walk_gen_decl(self, decl);
    }
    fn visit_spec(&mut self, spec: &Spec) {
        walk_spec(self, spec);
    }
    fn visit_func_type(&mut self, sig: &FuncType) {
        walk_func_type(self, sig);
    }
    fn visit_field_list(&mut self, list: &FieldList) {
        walk_field_list(self, list);
    }
    fn visit_field(&mut self, field: &Field) {
        walk_field(self, field);
    }
    fn visit_type(&mut self, ty: &TypeExpr) {
        walk_type(self, ty);
    }
    fn visit_block(&mut self, block: &Block) {
        walk_block(self, block);
    }
    fn visit_stmt(&mut self, stmt: &Stmt) {
        walk_stmt(self, stmt);
    }
    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }
    fn visit_ident(&mut self, _ident: &Ident) {}
    fn visit_basic_lit(&mut self, _lit: &BasicLit) {}
}

pub fn walk_file<V: Visitor + ?Sized>(v: &mut V, file: &File) {
    v.visit_ident(&file.package);
    for spec in file.import_specs() {
        v.visit_import_spec(spec);
    }
    for decl in &file.decls {
        v.visit_decl(decl);
    }
}

pub fn walk_import_spec<V: Visitor + ?Sized>(v: &mut V, spec: &ImportSpec) {
    if let Some(name) = &spec.name {
        v.visit_ident(name);
    }
    v.visit_basic_lit(&spec.path);
}

pub fn walk_decl<V: Visitor + ?Sized>(v: &mut V, decl: &Decl) {
    match decl {
        Decl::Func(func) => v.visit_func_decl(func),
        Decl::Gen(gen_decl) => v.visit_gen_decl(gen_decl),
    }
}

pub fn walk_func_decl<V: Visitor + ?Sized>(v: &mut V, func: &FuncDecl) {
    if let Some(recv) = &func.recv {
        v.visit_field_list(recv);
    }
    v.visit_ident(&func.name);
    if let Some(type_params) = &func.type_params {
        v.visit_field_list(type_params);
    }
    v.visit_func_type(&func.sig);
    if let Some(body) = &func.body {
        v.visit_block(body);
    }
}

pub fn walk_gen_decl<V: Visitor + ?Sized>(v: &mut V, decl: &GenDecl) {
    for spec in &decl.specs {
        v.visit_spec(spec);
    }
}

pub fn walk_spec<V: Visitor + ?Sized>(v: &mut V, spec: &Spec) {
    match spec {
        Spec::Value(value) => {
            for name in &value.names {
                v.visit_ident(name);
            }
            if let Some(ty) = &value.ty {
                v.visit_type(ty);
            }
            for expr in &value.values {
                v.visit_expr(expr);
            }
        }
        Spec::Type(type_spec) => {
            v.visit_ident(&type_spec.name);
            if let Some(type_params) = &type_spec.type_params {
                v.visit_field_list(type_params);
            }
            v.visit_type(&type_spec.ty);
        }
    }
}

pub fn walk_func_type<V: Visitor + ?Sized>(v: &mut V, sig: &FuncType) {
    v.visit_field_list(&sig.params);
    if let Some(results) = &sig.results {
        v.visit_field_list(results);
    }
}

pub fn walk_field_list<V: Visitor + ?Sized>(v: &mut V, list: &FieldList) {
    for field in &list.fields {
        v.visit_field(field);
    }
}

pub fn walk_field<V: Visitor + ?Sized>(v: &mut V, field: &Field) {
    for name in &field.names {
        v.visit_ident(name);
    }
    v.visit_type(&field.ty);
    if let Some(tag) = &field.tag {
        v.visit_basic_lit(tag);
    }
}

pub fn walk_type<V: Visitor + ?Sized>(v: &mut V, ty: &TypeExpr) {
    match ty {
        TypeExpr::Named(type_name) => {
            if let Some(package) = &type_name.package {
                v.visit_ident(package);
            }
            v.visit_ident(&type_name.name);
            for arg in &type_name.args {
                v.visit_type(arg);
            }
        }
        TypeExpr::Pointer(inner) | TypeExpr::Slice(inner) | TypeExpr::Ellipsis(inner) => {
            v.visit_type(inner)
        }
        TypeExpr::Array(array) => {
            if let Some(len) = &array.len {
                v.visit_expr(len);
            }
            v.visit_type(&array.elem);
        }
        TypeExpr::Map(map) => {
            v.visit_type(&map.key);
            v.visit_type(&map.value);
        }
        TypeExpr::Chan(chan) => v.visit_type(&chan.elem),
        TypeExpr::Func(sig) => v.visit_func_type(sig),
        TypeExpr::Struct(st) => {
            for field in &st.fields {
                v.visit_field(field);
            }
        }
        TypeExpr::Interface(iface) => {
            for elem in &iface.elems {
                match elem {
                    InterfaceElem::Method(method) => {
                        v.visit_ident(&method.name);
                        v.visit_func_type(&method.sig);
                    }
                    InterfaceElem::Embedded(terms) => {
                        for term in terms {
                            v.visit_type(&term.ty);
                        }
                    }
                }
            }
        }
    }
}

pub fn walk_block<V: Visitor + ?Sized>(v: &mut V, block: &Block) {
    for stmt in &block.stmts {
        v.visit_stmt(stmt);
    }
}

pub fn walk_stmt<V: Visitor + ?Sized>(v: &mut V, stmt: &Stmt) {
    match &stmt.kind {
        StmtKind::Decl(decl) => v.visit_gen_decl(decl),
        StmtKind::Assign(assign) => {
            for expr in assign.lhs.iter().chain(&assign.rhs) {
                v.visit_expr(expr);
            }
        }
        StmtKind::IncDec(inc_dec) => v.visit_expr(&inc_dec.target),
        StmtKind::Expr(expr) | StmtKind::Go(expr) | StmtKind::Defer(expr) => v.visit_expr(expr),
        StmtKind::Send(send) => {
            v.visit_expr(&send.channel);
            v.visit_expr(&send.value);
        }
        StmtKind::Return(values) => {
            for expr in values {
                v.visit_expr(expr);
            }
        }
        StmtKind::If(if_stmt) => {
            if let Some(init) = &if_stmt.init {
                v.visit_stmt(init);
            }
            v.visit_expr(&if_stmt.cond);
            v.visit_block(&if_stmt.then);
            if let Some(els) = &if_stmt.els {
                v.visit_stmt(els);
            }
        }
        StmtKind::For(for_stmt) => {
            if let Some(init) = &for_stmt.init {
                v.visit_stmt(init);
            }
            if let Some(cond) = &for_stmt.cond {
                v.visit_expr(cond);
            }
            if let Some(post) = &for_stmt.post {
                v.visit_stmt(post);
            }
            v.visit_block(&for_stmt.body);
        }
        StmtKind::Range(range) => {
            for target in range.key.iter().chain(&range.value) {
                v.visit_expr(target);
            }
            v.visit_expr(&range.expr);
            v.visit_block(&range.body);
        }
        StmtKind::Switch(switch) => {
            if let Some(init) = &switch.init {
                v.visit_stmt(init);
            }
            if let Some(tag) = &switch.tag {
                v.visit_expr(tag);
            }
            for clause in &switch.clauses {
                for value in &clause.values {
                    v.visit_expr(value);
                }
                for stmt in &clause.body {
                    v.visit_stmt(stmt);
                }
            }
        }
        StmtKind::TypeSwitch(switch) => {
            if let Some(init) = &switch.init {
                v.visit_stmt(init);
            }
            if let Some(binding) = &switch.binding {
                v.visit_ident(binding);
            }
            v.visit_expr(&switch.subject);
            for clause in &switch.clauses {
                for ty in &clause.types {
                    v.visit_type(ty);
                }
                for stmt in &clause.body {
                    v.visit_stmt(stmt);
                }
            }
        }
        StmtKind::Block(block) => v.visit_block(block),
        StmtKind::Branch(branch) => {
            if let Some(label) = &branch.label {
                v.visit_ident(label);
            }
        }
        StmtKind::Labeled(labeled) => {
            v.visit_ident(&labeled.label);
            v.visit_stmt(&labeled.stmt);
        }
        StmtKind::Empty => {}
    }
}

pub fn walk_expr<V: Visitor + ?Sized>(v: &mut V, expr: &Expr) {
    match expr {
        Expr::Ident(ident) => v.visit_ident(ident),
        Expr::BasicLit(lit) => v.visit_basic_lit(lit),
        Expr::Composite(lit) => {
            if let Some(ty) = &lit.ty {
                v.visit_type(ty);
            }
            for elt in &lit.elts {
                if let Some(key) = &elt.key {
                    v.visit_expr(key);
                }
                v.visit_expr(&elt.value);
            }
        }
        Expr::FuncLit(func) => {
            v.visit_func_type(&func.sig);
            v.visit_block(&func.body);
        }
        Expr::Paren(inner) => v.visit_expr(inner),
        Expr::Selector(selector) => {
            v.visit_expr(&selector.base);
            v.visit_ident(&selector.sel);
        }
        Expr::Index(index) => {
            v.visit_expr(&index.base);
            for idx in &index.indices {
                v.visit_expr(idx);
            }
        }
        Expr::Slice(slice) => {
            v.visit_expr(&slice.base);
            for bound in [&slice.low, &slice.high, &slice.max].into_iter().flatten() {
                v.visit_expr(bound);
            }
        }
        Expr::TypeAssert(assert) => {
            v.visit_expr(&assert.base);
            if let Some(ty) = &assert.ty {
                v.visit_type(ty);
            }
        }
        Expr::Call(call) => {
            v.visit_expr(&call.fun);
            for arg in &call.args {
                v.visit_expr(arg);
            }
        }
        Expr::Unary(unary) => v.visit_expr(&unary.operand),
        Expr::Binary(binary) => {
            v.visit_expr(&binary.lhs);
            v.visit_expr(&binary.rhs);
        }
        Expr::Type(ty) => v.visit_type(ty),
    }
}

/// In-place traversal.
pub trait VisitorMut {
    fn visit_file_mut(&mut self, file: &mut File) {
        walk_file_mut(self, file);
    }
    fn visit_import_spec_mut(&mut self, spec: &mut ImportSpec) {
        walk_import_spec_mut(self, spec);
    }
    fn visit_decl_mut(&mut self, decl: &mut Decl) {
        walk_decl_mut(self, decl);
    }
    fn visit_func_decl_mut(&mut self, func: &mut FuncDecl) {
        walk_func_decl_mut(self, func);
    }
    fn visit_gen_decl_mut(&mut self, decl: &mut GenDecl) {
        walk_gen_decl_mut(self, decl);
    }
    fn visit_spec_mut(&mut self, spec: &mut Spec) {
        walk_spec_mut(self, spec);
    }
    fn visit_func_type_mut(&mut self, sig: &mut FuncType) {
        walk_func_type_mut(self, sig);
    }
    fn visit_field_list_mut(&mut self, list: &mut FieldList) {
        walk_field_list_mut(self, list);
    }
    fn visit_field_mut(&mut self, field: &mut Field) {
        walk_field_mut(self, field);
    }
    fn visit_type_mut(&mut self, ty: &mut TypeExpr) {
        walk_type_mut(self, ty);
    }
    fn visit_block_mut(&mut self, block: &mut Block) {
        walk_block_mut(self, block);
    }
    fn visit_stmt_mut(&mut self, stmt: &mut Stmt) {
        walk_stmt_mut(self, stmt);
    }
    fn visit_expr_mut(&mut self, expr: &mut Expr) {
        walk_expr_mut(self, expr);
    }
    fn visit_ident_mut(&mut self, _ident: &mut Ident) {}
    fn visit_basic_lit_mut(&mut self, _lit: &mut BasicLit) {}
}

pub fn walk_file_mut<V: VisitorMut + ?Sized>(v: &mut V, file: &mut File) {
    v.visit_ident_mut(&mut file.package);
    for decl in &mut file.imports {
        for spec in &mut decl.specs {
            v.visit_import_spec_mut(spec);
        }
    }
    for decl in &mut file.decls {
        v.visit_decl_mut(decl);
    }
}

pub fn walk_import_spec_mut<V: VisitorMut + ?Sized>(v: &mut V, spec: &mut ImportSpec) {
    if let Some(name) = &mut spec.name {
        v.visit_ident_mut(name);
    }
    v.visit_basic_lit_mut(&mut spec.path);
}

pub fn walk_decl_mut<V: VisitorMut + ?Sized>(v: &mut V, decl: &mut Decl) {
    match decl {
        Decl::Func(func) => v.visit_func_decl_mut(func),
        Decl::Gen(gen_decl) => v.visit_gen_decl_mut(gen_decl),
    }
}

pub fn walk_func_decl_mut<V: VisitorMut + ?Sized>(v: &mut V, func: &mut FuncDecl) {
    if let Some(recv) = &mut func.recv {
        v.visit_field_list_mut(recv);
    }
    v.visit_ident_mut(&mut func.name);
    if let Some(type_params) = &mut func.type_params {
        v.visit_field_list_mut(type_params);
    }
    v.visit_func_type_mut(&mut func.sig);
    if let Some(body) = &mut func.body {
        v.visit_block_mut(body);
    }
}

pub fn walk_gen_decl_mut<V: VisitorMut + ?Sized>(v: &mut V, decl: &mut GenDecl) {
    for spec in &mut decl.specs {
        v.visit_spec_mut(spec);
    }
}

pub fn walk_spec_mut<V: VisitorMut + ?Sized>(v: &mut V, spec: &mut Spec) {
    match spec {
        Spec::Value(value) => {
            for name in &mut value.names {
                v.visit_ident_mut(name);
            }
            if let Some(ty) = &mut value.ty {
                v.visit_type_mut(ty);
            }
            for expr in &mut value.values {
                v.visit_expr_mut(expr);
            }
        }
        Spec::Type(type_spec) => {
            v.visit_ident_mut(&mut type_spec.name);
            if let Some(type_params) = &mut type_spec.type_params {
                v.visit_field_list_mut(type_params);
            }
            v.visit_type_mut(&mut type_spec.ty);
        }
    }
}

pub fn walk_func_type_mut<V: VisitorMut + ?Sized>(v: &mut V, sig: &mut FuncType) {
    v.visit_field_list_mut(&mut sig.params);
    if let Some(results) = &mut sig.results {
        v.visit_field_list_mut(results);
    }
}

pub fn walk_field_list_mut<V: VisitorMut + ?Sized>(v: &mut V, list: &mut FieldList) {
    for field in &mut list.fields {
        v.visit_field_mut(field);
    }
}

pub fn walk_field_mut<V: VisitorMut + ?Sized>(v: &mut V, field: &mut Field) {
    for name in &mut field.names {
        v.visit_ident_mut(name);
    }
    v.visit_type_mut(&mut field.ty);
    if let Some(tag) = &mut field.tag {
        v.visit_basic_lit_mut(tag);
    }
}

pub fn walk_type_mut<V: VisitorMut + ?Sized>(v: &mut V, ty: &mut TypeExpr) {
    match ty {
        TypeExpr::Named(type_name) => {
            if let Some(package) = &mut type_name.package {
                v.visit_ident_mut(package);
            }
            v.visit_ident_mut(&mut type_name.name);
            for arg in &mut type_name.args {
                v.visit_type_mut(arg);
            }
        }
        TypeExpr::Pointer(inner) | TypeExpr::Slice(inner) | TypeExpr::Ellipsis(inner) => {
            v.visit_type_mut(inner)
        }
        TypeExpr::Array(array) => {
            if let Some(len) = &mut array.len {
                v.visit_expr_mut(len);
            }
            v.visit_type_mut(&mut array.elem);
        }
        TypeExpr::Map(map) => {
            v.visit_type_mut(&mut map.key);
            v.visit_type_mut(&mut map.value);
        }
        TypeExpr::Chan(chan) => v.visit_type_mut(&mut chan.elem),
        TypeExpr::Func(sig) => v.visit_func_type_mut(sig),
        TypeExpr::Struct(st) => {
            for field in &mut st.fields {
                v.visit_field_mut(field);
            }
        }
        TypeExpr::Interface(iface) => {
            for elem in &mut iface.elems {
                match elem {
                    InterfaceElem::Method(method) => {
                        v.visit_ident_mut(&mut method.name);
                        v.visit_func_type_mut(&mut method.sig);
                    }
                    InterfaceElem::Embedded(terms) => {
                        for term in terms {
                            v.visit_type_mut(&mut term.ty);
                        }
                    }
                }
            }
        }
    }
}

pub fn walk_block_mut<V: VisitorMut + ?Sized>(v: &mut V, block: &mut Block) {
    for stmt in &mut block.stmts {
        v.visit_stmt_mut(stmt);
    }
}

pub fn walk_stmt_mut<V: VisitorMut + ?Sized>(v: &mut V, stmt: &mut Stmt) {
    match &mut stmt.kind {
        StmtKind::Decl(decl) => v.visit_gen_decl_mut(decl),
        StmtKind::Assign(assign) => {
            for expr in assign.lhs.iter_mut().chain(assign.rhs.iter_mut()) {
                v.visit_expr_mut(expr);
            }
        }
        StmtKind::IncDec(inc_dec) => v.visit_expr_mut(&mut inc_dec.target),
        StmtKind::Expr(expr) | StmtKind::Go(expr) | StmtKind::Defer(expr) => v.visit_expr_mut(expr),
        StmtKind::Send(send) => {
            v.visit_expr_mut(&mut send.channel);
            v.visit_expr_mut(&mut send.value);
        }
        StmtKind::Return(values) => {
            for expr in values {
                v.visit_expr_mut(expr);
            }
        }
        StmtKind::If(if_stmt) => {
            if let Some(init) = &mut if_stmt.init {
                v.visit_stmt_mut(init);
            }
            v.visit_expr_mut(&mut if_stmt.cond);
            v.visit_block_mut(&mut if_stmt.then);
            if let Some(els) = &mut if_stmt.els {
                v.visit_stmt_mut(els);
            }
        }
        StmtKind::For(for_stmt) => {
            if let Some(init) = &mut for_stmt.init {
                v.visit_stmt_mut(init);
            }
            if let Some(cond) = &mut for_stmt.cond {
                v.visit_expr_mut(cond);
            }
            if let Some(post) = &mut for_stmt.post {
                v.visit_stmt_mut(post);
            }
            v.visit_block_mut(&mut for_stmt.body);
        }
        StmtKind::Range(range) => {
            for target in range.key.iter_mut().chain(range.value.iter_mut()) {
                v.visit_expr_mut(target);
            }
            v.visit_expr_mut(&mut range.expr);
            v.visit_block_mut(&mut range.body);
        }
        StmtKind::Switch(switch) => {
            if let Some(init) = &mut switch.init {
                v.visit_stmt_mut(init);
            }
            if let Some(tag) = &mut switch.tag {
                v.visit_expr_mut(tag);
            }
            for clause in &mut switch.clauses {
                for value in &mut clause.values {
                    v.visit_expr_mut(value);
                }
                for stmt in &mut clause.body {
                    v.visit_stmt_mut(stmt);
                }
            }
        }
        StmtKind::TypeSwitch(switch) => {
            if let Some(init) = &mut switch.init {
                v.visit_stmt_mut(init);
            }
            if let Some(binding) = &mut switch.binding {
                v.visit_ident_mut(binding);
            }
            v.visit_expr_mut(&mut switch.subject);
            for clause in &mut switch.clauses {
                for ty in &mut clause.types {
                    v.visit_type_mut(ty);
                }
                for stmt in &mut clause.body {
                    v.visit_stmt_mut(stmt);
                }
            }
        }
        StmtKind::Block(block) => v.visit_block_mut(block),
        StmtKind::Branch(branch) => {
            if let Some(label) = &mut branch.label {
                v.visit_ident_mut(label);
            }
        }
        StmtKind::Labeled(labeled) => {
            v.visit_ident_mut(&mut labeled.label);
            v.visit_stmt_mut(&mut labeled.stmt);
        }
        StmtKind::Empty => {}
    }
}

pub fn walk_expr_mut<V: VisitorMut + ?Sized>(v: &mut V, expr: &mut Expr) {
    match expr {
        Expr::Ident(ident) => v.visit_ident_mut(ident),
        Expr::BasicLit(lit) => v.visit_basic_lit_mut(lit),
        Expr::Composite(lit) => {
            if let Some(ty) = &mut lit.ty {
                v.visit_type_mut(ty);
            }
            for elt in &mut lit.elts {
                if let Some(key) = &mut elt.key {
                    v.visit_expr_mut(key);
                }
                v.visit_expr_mut(&mut elt.value);
            }
        }
        Expr::FuncLit(func) => {
            v.visit_func_type_mut(&mut func.sig);
            v.visit_block_mut(&mut func.body);
        }
        Expr::Paren(inner) => v.visit_expr_mut(inner),
        Expr::Selector(selector) => {
            v.visit_expr_mut(&mut selector.base);
            v.visit_ident_mut(&mut selector.sel);
        }
        Expr::Index(index) => {
            v.visit_expr_mut(&mut index.base);
            for idx in &mut index.indices {
                v.visit_expr_mut(idx);
            }
        }
        Expr::Slice(slice) => {
            v.visit_expr_mut(&mut slice.base);
            for bound in [&mut slice.low, &mut slice.high, &mut slice.max]
                .into_iter()
                .flatten()
            {
                v.visit_expr_mut(bound);
            }
        }
        Expr::TypeAssert(assert) => {
            v.visit_expr_mut(&mut assert.base);
            if let Some(ty) = &mut assert.ty {
                v.visit_type_mut(ty);
            }
        }
        Expr::Call(call) => {
            v.visit_expr_mut(&mut call.fun);
            for arg in &mut call.args {
                v.visit_expr_mut(arg);
            }
        }
        Expr::Unary(unary) => v.visit_expr_mut(&mut unary.operand),
        Expr::Binary(binary) => {
            v.visit_expr_mut(&mut binary.lhs);
            v.visit_expr_mut(&mut binary.rhs);
        }
        Expr::Type(ty) => v.visit_type_mut(ty),
    }
}
