//! Deterministic source printer.
//!
//! Produces gofmt-like layout: tabs for indentation, one declaration per
//! paragraph, spaces around binary operators. The output always reparses to
//! an equivalent tree; comments are not preserved.

use super::ast::*;
use super::options::PrintOptions;

/// Print a whole unit with default options
pub fn print_file(file: &File) -> String {
    let options = PrintOptions::default();
    let mut printer = Printer::new(&options);
    printer.file(file);
    printer.finish()
}

pub fn print_decl(decl: &Decl) -> String {
    let options = PrintOptions::default();
    let mut printer = Printer::new(&options);
    printer.decl(decl);
    printer.finish()
}

pub fn print_stmt(stmt: &Stmt) -> String {
    let options = PrintOptions::default();
    let mut printer = Printer::new(&options);
    printer.stmt(stmt);
    printer.finish()
}

pub fn print_expr(expr: &Expr) -> String {
    let options = PrintOptions::default();
    let mut printer = Printer::new(&options);
    printer.expr(expr);
    printer.finish()
}

pub fn print_type(ty: &TypeExpr) -> String {
    let options = PrintOptions::default();
    let mut printer = Printer::new(&options);
    printer.ty(ty);
    printer.finish()
}

/// Operand precedence: above every binary operator, below postfix operators
const UNARY_PREC: u8 = 6;
const POSTFIX_PREC: u8 = 7;

pub struct Printer<'o> {
    options: &'o PrintOptions,
    out: String,
    indent: usize,
}

impl<'o> Printer<'o> {
    pub fn new(options: &'o PrintOptions) -> Self {
        Self {
            options,
            out: String::new(),
            indent: 0,
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Newline followed by the current indentation
    fn newline(&mut self) {
        self.out.push('\n');
        let indent = self.options.indent(self.indent);
        self.out.push_str(&indent);
    }

    fn separated<T>(&mut self, items: &[T], sep: &str, mut each: impl FnMut(&mut Self, &T)) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.write(sep);
            }
            each(self, item);
        }
    }

    // =========================================================================
    // Units and declarations
    // =========================================================================

    pub fn file(&mut self, file: &File) {
        self.write("package ");
        self.write(file.package.as_str());
        self.write("\n");
        for import in &file.imports {
            self.write("\n");
            self.import_decl(import);
            self.write("\n");
        }
        for decl in &file.decls {
            self.write("\n");
            self.decl(decl);
            self.write("\n");
        }
    }

    fn import_decl(&mut self, decl: &ImportDecl) {
        self.write("import ");
        if !decl.grouped && decl.specs.len() == 1 {
            self.import_spec(&decl.specs[0]);
            return;
        }
        self.write("(");
        self.indent += 1;
        for spec in &decl.specs {
            self.newline();
            self.import_spec(spec);
        }
        self.indent -= 1;
        self.newline();
        self.write(")");
    }

    fn import_spec(&mut self, spec: &ImportSpec) {
        if let Some(name) = &spec.name {
            self.write(name.as_str());
            self.write(" ");
        }
        self.write(&spec.path.value);
    }

    pub fn decl(&mut self, decl: &Decl) {
        match decl {
            Decl::Func(func) => self.func_decl(func),
            Decl::Gen(gen_decl) => self.gen_decl(gen_decl),
        }
    }

    fn func_decl(&mut self, func: &FuncDecl) {
        self.write("func ");
        if let Some(recv) = &func.recv {
            self.write("(");
            self.field_list(recv);
            self.write(") ");
        }
        self.write(func.name.as_str());
        if let Some(type_params) = &func.type_params {
            self.type_params(type_params);
        }
        self.signature(&func.sig);
        if let Some(body) = &func.body {
            self.write(" ");
            self.block(body);
        }
    }

    fn gen_decl(&mut self, decl: &GenDecl) {
        self.write(decl.keyword.as_str());
        self.write(" ");
        if !decl.grouped && decl.specs.len() == 1 {
            self.spec(&decl.specs[0]);
            return;
        }
        self.write("(");
        self.indent += 1;
        for spec in &decl.specs {
            self.newline();
            self.spec(spec);
        }
        self.indent -= 1;
        self.newline();
        self.write(")");
    }

    fn spec(&mut self, spec: &Spec) {
        match spec {
            Spec::Value(value) => {
                self.idents(&value.names);
                if let Some(ty) = &value.ty {
                    self.write(" ");
                    self.ty(ty);
                }
                if !value.values.is_empty() {
                    self.write(" = ");
                    self.exprs(&value.values);
                }
            }
            Spec::Type(type_spec) => {
                self.write(type_spec.name.as_str());
                if let Some(type_params) = &type_spec.type_params {
                    self.type_params(type_params);
                }
                self.write(if type_spec.alias { " = " } else { " " });
                self.ty(&type_spec.ty);
            }
        }
    }

    fn idents(&mut self, idents: &[Ident]) {
        self.separated(idents, ", ", |p, ident| p.write(ident.as_str()));
    }

    fn field_list(&mut self, list: &FieldList) {
        self.separated(&list.fields, ", ", |p, field| p.field(field));
    }

    fn field(&mut self, field: &Field) {
        if !field.names.is_empty() {
            self.idents(&field.names);
            self.write(" ");
        }
        self.ty(&field.ty);
        if let Some(tag) = &field.tag {
            self.write(" ");
            self.write(&tag.value);
        }
    }

    /// `[K comparable, V ~int | ~string]`
    fn type_params(&mut self, list: &FieldList) {
        self.write("[");
        self.separated(&list.fields, ", ", |p, field| {
            p.idents(&field.names);
            p.write(" ");
            match &field.ty {
                TypeExpr::Interface(iface) if iface.span.is_synthetic() && iface.elems.len() == 1 => {
                    p.interface_elem(&iface.elems[0])
                }
                ty => p.ty(ty),
            }
        });
        self.write("]");
    }

    fn signature(&mut self, sig: &FuncType) {
        self.write("(");
        self.field_list(&sig.params);
        self.write(")");
        if let Some(results) = &sig.results {
            match results.fields.as_slice() {
                [single] if single.names.is_empty() => {
                    self.write(" ");
                    self.ty(&single.ty);
                }
                [] => {}
                _ => {
                    self.write(" (");
                    self.field_list(results);
                    self.write(")");
                }
            }
        }
    }

    // =========================================================================
    // Types
    // =========================================================================

    pub fn ty(&mut self, ty: &TypeExpr) {
        match ty {
            TypeExpr::Named(type_name) => {
                if let Some(package) = &type_name.package {
                    self.write(package.as_str());
                    self.write(".");
                }
                self.write(type_name.name.as_str());
                if !type_name.args.is_empty() {
                    self.write("[");
                    self.separated(&type_name.args, ", ", |p, arg| p.ty(arg));
                    self.write("]");
                }
            }
            TypeExpr::Pointer(inner) => {
                self.write("*");
                self.ty(inner);
            }
            TypeExpr::Slice(inner) => {
                self.write("[]");
                self.ty(inner);
            }
            TypeExpr::Ellipsis(inner) => {
                self.write("...");
                self.ty(inner);
            }
            TypeExpr::Array(array) => {
                self.write("[");
                match &array.len {
                    Some(len) => self.expr(len),
                    None => self.write("..."),
                }
                self.write("]");
                self.ty(&array.elem);
            }
            TypeExpr::Map(map) => {
                self.write("map[");
                self.ty(&map.key);
                self.write("]");
                self.ty(&map.value);
            }
            TypeExpr::Chan(chan) => {
                self.write(match chan.dir {
                    ChanDir::Both => "chan ",
                    ChanDir::Send => "chan<- ",
                    ChanDir::Recv => "<-chan ",
                });
                self.ty(&chan.elem);
            }
            TypeExpr::Func(sig) => {
                self.write("func");
                self.signature(sig);
            }
            TypeExpr::Struct(st) => {
                if st.fields.is_empty() {
                    self.write("struct{}");
                    return;
                }
                self.write("struct {");
                self.indent += 1;
                for field in &st.fields {
                    self.newline();
                    self.field(field);
                }
                self.indent -= 1;
                self.newline();
                self.write("}");
            }
            TypeExpr::Interface(iface) => {
                if iface.elems.is_empty() {
                    self.write("interface{}");
                    return;
                }
                self.write("interface {");
                self.indent += 1;
                for elem in &iface.elems {
                    self.newline();
                    self.interface_elem(elem);
                }
                self.indent -= 1;
                self.newline();
                self.write("}");
            }
        }
    }

    fn interface_elem(&mut self, elem: &InterfaceElem) {
        match elem {
            InterfaceElem::Method(method) => {
                self.write(method.name.as_str());
                self.signature(&method.sig);
            }
            InterfaceElem::Embedded(terms) => {
                self.separated(terms, " | ", |p, term| {
                    if term.tilde {
                        p.write("~");
                    }
                    p.ty(&term.ty);
                });
            }
        }
    }

    // =========================================================================
    // Statements
    // =========================================================================

    pub fn block(&mut self, block: &Block) {
        self.stmt_body("{", &block.stmts);
        self.newline();
        self.write("}");
    }

    /// `open`, then each statement on its own line one level deeper
    fn stmt_body(&mut self, open: &str, stmts: &[Stmt]) {
        self.write(open);
        self.indent += 1;
        for stmt in stmts {
            if let StmtKind::Labeled(labeled) = &stmt.kind {
                // Labels sit one level left of their statement
                self.indent -= 1;
                self.newline();
                self.write(labeled.label.as_str());
                self.write(":");
                self.indent += 1;
                self.newline();
                self.stmt(&labeled.stmt);
                continue;
            }
            self.newline();
            self.stmt(stmt);
        }
        self.indent -= 1;
    }

    pub fn stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Decl(decl) => self.gen_decl(decl),
            StmtKind::Assign(assign) => {
                self.exprs(&assign.lhs);
                match assign.op {
                    AssignOp::Define => self.write(" := "),
                    AssignOp::Assign => self.write(" = "),
                    AssignOp::Compound(op) => {
                        self.write(" ");
                        self.write(op.as_str());
                        self.write("= ");
                    }
                }
                self.exprs(&assign.rhs);
            }
            StmtKind::IncDec(inc_dec) => {
                self.expr(&inc_dec.target);
                self.write(if inc_dec.inc { "++" } else { "--" });
            }
            StmtKind::Expr(expr) => self.expr(expr),
            StmtKind::Send(send) => {
                self.expr(&send.channel);
                self.write(" <- ");
                self.expr(&send.value);
            }
            StmtKind::Return(values) => {
                self.write("return");
                if !values.is_empty() {
                    self.write(" ");
                    self.exprs(values);
                }
            }
            StmtKind::If(if_stmt) => self.if_stmt(if_stmt),
            StmtKind::For(for_stmt) => {
                self.write("for ");
                match (&for_stmt.init, &for_stmt.cond, &for_stmt.post) {
                    (None, None, None) => {}
                    (None, Some(cond), None) => {
                        self.expr(cond);
                        self.write(" ");
                    }
                    (init, cond, post) => {
                        if let Some(init) = init {
                            self.stmt(init);
                        }
                        self.write("; ");
                        if let Some(cond) = cond {
                            self.expr(cond);
                        }
                        self.write(";");
                        if let Some(post) = post {
                            self.write(" ");
                            self.stmt(post);
                        }
                        self.write(" ");
                    }
                }
                self.block(&for_stmt.body);
            }
            StmtKind::Range(range) => {
                self.write("for ");
                if let Some(key) = &range.key {
                    self.expr(key);
                    if let Some(value) = &range.value {
                        self.write(", ");
                        self.expr(value);
                    }
                    self.write(if range.define { " := " } else { " = " });
                }
                self.write("range ");
                self.expr(&range.expr);
                self.write(" ");
                self.block(&range.body);
            }
            StmtKind::Switch(switch) => {
                self.write("switch ");
                if let Some(init) = &switch.init {
                    self.stmt(init);
                    self.write("; ");
                }
                if let Some(tag) = &switch.tag {
                    self.expr(tag);
                    self.write(" ");
                }
                self.write("{");
                for clause in &switch.clauses {
                    self.newline();
                    if clause.is_default {
                        self.write("default:");
                    } else {
                        self.write("case ");
                        self.exprs(&clause.values);
                        self.write(":");
                    }
                    self.stmt_body("", &clause.body);
                }
                self.newline();
                self.write("}");
            }
            StmtKind::TypeSwitch(switch) => {
                self.write("switch ");
                if let Some(init) = &switch.init {
                    self.stmt(init);
                    self.write("; ");
                }
                if let Some(binding) = &switch.binding {
                    self.write(binding.as_str());
                    self.write(" := ");
                }
                self.expr_prec(&switch.subject, POSTFIX_PREC);
                self.write(".(type) {");
                for clause in &switch.clauses {
                    self.newline();
                    if clause.is_default {
                        self.write("default:");
                    } else {
                        self.write("case ");
                        self.separated(&clause.types, ", ", |p, ty| p.ty(ty));
                        self.write(":");
                    }
                    self.stmt_body("", &clause.body);
                }
                self.newline();
                self.write("}");
            }
            StmtKind::Block(block) => self.block(block),
            StmtKind::Branch(branch) => {
                self.write(branch.kind.as_str());
                if let Some(label) = &branch.label {
                    self.write(" ");
                    self.write(label.as_str());
                }
            }
            StmtKind::Go(expr) => {
                self.write("go ");
                self.expr(expr);
            }
            StmtKind::Defer(expr) => {
                self.write("defer ");
                self.expr(expr);
            }
            StmtKind::Labeled(labeled) => {
                self.write(labeled.label.as_str());
                self.write(":");
                self.newline();
                self.stmt(&labeled.stmt);
            }
            StmtKind::Empty => {}
        }
    }

    fn if_stmt(&mut self, if_stmt: &IfStmt) {
        self.write("if ");
        if let Some(init) = &if_stmt.init {
            self.stmt(init);
            self.write("; ");
        }
        self.expr(&if_stmt.cond);
        self.write(" ");
        self.block(&if_stmt.then);
        if let Some(els) = &if_stmt.els {
            self.write(" else ");
            self.stmt(els);
        }
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    fn exprs(&mut self, exprs: &[Expr]) {
        self.separated(exprs, ", ", |p, expr| p.expr(expr));
    }

    pub fn expr(&mut self, expr: &Expr) {
        self.expr_prec(expr, 0);
    }

    /// Print `expr`, parenthesizing it when it binds looser than `min_prec`
    fn expr_prec(&mut self, expr: &Expr, min_prec: u8) {
        let prec = match expr {
            Expr::Binary(binary) => binary.op.precedence(),
            Expr::Unary(_) => UNARY_PREC,
            _ => POSTFIX_PREC,
        };
        if prec < min_prec {
            self.write("(");
            self.expr_prec(expr, 0);
            self.write(")");
            return;
        }

        match expr {
            Expr::Ident(ident) => self.write(ident.as_str()),
            Expr::BasicLit(lit) => self.write(&lit.value),
            Expr::Composite(lit) => {
                if let Some(ty) = &lit.ty {
                    self.ty(ty);
                }
                self.write("{");
                self.separated(&lit.elts, ", ", |p, elt| {
                    if let Some(key) = &elt.key {
                        p.expr(key);
                        p.write(": ");
                    }
                    p.expr(&elt.value);
                });
                self.write("}");
            }
            Expr::FuncLit(func) => {
                self.write("func");
                self.signature(&func.sig);
                self.write(" ");
                self.block(&func.body);
            }
            Expr::Paren(inner) => {
                self.write("(");
                self.expr(inner);
                self.write(")");
            }
            Expr::Selector(selector) => {
                self.expr_prec(&selector.base, POSTFIX_PREC);
                self.write(".");
                self.write(selector.sel.as_str());
            }
            Expr::Index(index) => {
                self.expr_prec(&index.base, POSTFIX_PREC);
                self.write("[");
                self.exprs(&index.indices);
                self.write("]");
            }
            Expr::Slice(slice) => {
                self.expr_prec(&slice.base, POSTFIX_PREC);
                self.write("[");
                if let Some(low) = &slice.low {
                    self.expr(low);
                }
                self.write(":");
                if let Some(high) = &slice.high {
                    self.expr(high);
                }
                if let Some(max) = &slice.max {
                    self.write(":");
                    self.expr(max);
                }
                self.write("]");
            }
            Expr::TypeAssert(assert) => {
                self.expr_prec(&assert.base, POSTFIX_PREC);
                self.write(".(");
                match &assert.ty {
                    Some(ty) => self.ty(ty),
                    None => self.write("type"),
                }
                self.write(")");
            }
            Expr::Call(call) => {
                self.expr_prec(&call.fun, POSTFIX_PREC);
                self.write("(");
                self.exprs(&call.args);
                if call.ellipsis {
                    self.write("...");
                }
                self.write(")");
            }
            Expr::Unary(unary) => {
                self.write(unary.op.as_str());
                // `- -x` must not print as the `--` token
                let glued = matches!(
                    (&unary.op, unary.operand.as_ref()),
                    (UnaryOp::Neg, Expr::Unary(UnaryExpr { op: UnaryOp::Neg, .. }))
                        | (UnaryOp::Plus, Expr::Unary(UnaryExpr { op: UnaryOp::Plus, .. }))
                        | (UnaryOp::Addr, Expr::Unary(UnaryExpr { op: UnaryOp::Addr, .. }))
                );
                if glued {
                    self.write("(");
                    self.expr(&unary.operand);
                    self.write(")");
                } else {
                    self.expr_prec(&unary.operand, UNARY_PREC);
                }
            }
            Expr::Binary(binary) => {
                self.expr_prec(&binary.lhs, prec);
                self.write(" ");
                self.write(binary.op.as_str());
                self.write(" ");
                self.expr_prec(&binary.rhs, prec + 1);
            }
            Expr::Type(ty) => self.ty(ty),
        }
    }
}
