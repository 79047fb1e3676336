//! Typed syntax tree for Go source units.
//!
//! Every construct is a variant of a closed enum or a plain struct, and every
//! node owns its children. `Clone` is therefore a deep copy that shares
//! nothing with the original tree, which is what the refactorings and the
//! template engine rely on.

use smol_str::SmolStr;

use crate::base::Span;

// ============================================================================
// LEAVES
// ============================================================================

/// An identifier occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    pub name: SmolStr,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<SmolStr>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }

    /// An identifier created by code generation (no source position).
    pub fn synthetic(name: impl Into<SmolStr>) -> Self {
        Self::new(name, Span::default())
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// The blank identifier `_` never declares anything.
    pub fn is_blank(&self) -> bool {
        self.name == "_"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LitKind {
    Int,
    Float,
    Imag,
    Char,
    String,
}

/// A literal token, kept exactly as written (quotes included).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasicLit {
    pub kind: LitKind,
    pub value: SmolStr,
    pub span: Span,
}

impl BasicLit {
    pub fn new(kind: LitKind, value: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            value: value.into(),
            span: Span::default(),
        }
    }

    /// A double-quoted string literal holding `text`.
    pub fn string(text: &str) -> Self {
        let mut quoted = String::with_capacity(text.len() + 2);
        quoted.push('"');
        for c in text.chars() {
            match c {
                '"' => quoted.push_str("\\\""),
                '\\' => quoted.push_str("\\\\"),
                '\n' => quoted.push_str("\\n"),
                '\t' => quoted.push_str("\\t"),
                c => quoted.push(c),
            }
        }
        quoted.push('"');
        Self::new(LitKind::String, quoted)
    }

    pub fn int(value: i64) -> Self {
        Self::new(LitKind::Int, value.to_string())
    }

    /// The unquoted contents of a string literal.
    ///
    /// Raw strings are returned verbatim; interpreted strings have their
    /// simple escapes decoded.
    pub fn string_value(&self) -> Option<String> {
        if self.kind != LitKind::String || self.value.len() < 2 {
            return None;
        }
        let inner = &self.value[1..self.value.len() - 1];
        if self.value.starts_with('`') {
            return Some(inner.to_string());
        }
        let mut out = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some(other) => out.push(other),
                None => out.push('\\'),
            }
        }
        Some(out)
    }
}

// ============================================================================
// UNIT
// ============================================================================

/// A parsed source unit (one Go file).
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    pub package: Ident,
    pub imports: Vec<ImportDecl>,
    pub decls: Vec<Decl>,
    pub span: Span,
}

impl File {
    /// All import specs in source order.
    pub fn import_specs(&self) -> impl Iterator<Item = &ImportSpec> {
        self.imports.iter().flat_map(|decl| decl.specs.iter())
    }

    /// Top-level function and method declarations.
    pub fn functions(&self) -> impl Iterator<Item = &FuncDecl> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Func(func) => Some(func),
            Decl::Gen(_) => None,
        })
    }

    /// Top-level type specs.
    pub fn type_specs(&self) -> impl Iterator<Item = &TypeSpec> {
        self.decls
            .iter()
            .filter_map(|decl| match decl {
                Decl::Gen(gen_decl) if gen_decl.keyword == DeclKeyword::Type => Some(gen_decl),
                _ => None,
            })
            .flat_map(|gen_decl| gen_decl.specs.iter())
            .filter_map(|spec| match spec {
                Spec::Type(type_spec) => Some(type_spec),
                Spec::Value(_) => None,
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    pub specs: Vec<ImportSpec>,
    pub grouped: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpec {
    pub name: Option<Ident>,
    pub path: BasicLit,
    pub span: Span,
}

impl ImportSpec {
    /// The import path without quotes.
    pub fn path_value(&self) -> String {
        self.path
            .string_value()
            .unwrap_or_else(|| self.path.value.to_string())
    }
}

// ============================================================================
// DECLARATIONS
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Func(FuncDecl),
    Gen(GenDecl),
}

impl Decl {
    pub fn span(&self) -> Span {
        match self {
            Decl::Func(func) => func.span,
            Decl::Gen(gen_decl) => gen_decl.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub recv: Option<FieldList>,
    pub name: Ident,
    pub type_params: Option<FieldList>,
    pub sig: FuncType,
    pub body: Option<Block>,
    pub span: Span,
}

impl FuncDecl {
    pub fn is_method(&self) -> bool {
        self.recv.is_some()
    }

    /// The base type name of the receiver (`T` for `t T`, `*T` and `*T[K]`).
    pub fn receiver_type_name(&self) -> Option<&Ident> {
        let field = self.recv.as_ref()?.fields.first()?;
        field.ty.base_name()
    }
}

/// A function signature. `results` is `None` when the function returns
/// nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncType {
    pub params: FieldList,
    pub results: Option<FieldList>,
}

impl FuncType {
    pub fn result_count(&self) -> usize {
        self.results.as_ref().map_or(0, FieldList::arity)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldList {
    pub fields: Vec<Field>,
    pub span: Span,
}

impl FieldList {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            span: Span::default(),
        }
    }

    /// Number of entries, counting `a, b int` as two.
    pub fn arity(&self) -> usize {
        self.fields.iter().map(|field| field.names.len().max(1)).sum()
    }

    /// One type per entry, repeating a shared type for grouped names.
    pub fn expanded_types(&self) -> impl Iterator<Item = &TypeExpr> {
        self.fields
            .iter()
            .flat_map(|field| std::iter::repeat_n(&field.ty, field.names.len().max(1)))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A parameter, result, receiver or struct field. Embedded struct fields and
/// unnamed parameters have no names.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub names: Vec<Ident>,
    pub ty: TypeExpr,
    pub tag: Option<BasicLit>,
    pub span: Span,
}

impl Field {
    pub fn new(names: Vec<Ident>, ty: TypeExpr) -> Self {
        Self {
            names,
            ty,
            tag: None,
            span: Span::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKeyword {
    Var,
    Const,
    Type,
}

impl DeclKeyword {
    pub fn as_str(self) -> &'static str {
        match self {
            DeclKeyword::Var => "var",
            DeclKeyword::Const => "const",
            DeclKeyword::Type => "type",
        }
    }
}

/// A `var`, `const` or `type` declaration, grouped or not.
#[derive(Debug, Clone, PartialEq)]
pub struct GenDecl {
    pub keyword: DeclKeyword,
    pub specs: Vec<Spec>,
    pub grouped: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Spec {
    Value(ValueSpec),
    Type(TypeSpec),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueSpec {
    pub names: Vec<Ident>,
    pub ty: Option<TypeExpr>,
    pub values: Vec<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    pub name: Ident,
    pub type_params: Option<FieldList>,
    /// `type A = B`
    pub alias: bool,
    pub ty: TypeExpr,
    pub span: Span,
}

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    Named(TypeName),
    Pointer(Box<TypeExpr>),
    Slice(Box<TypeExpr>),
    Array(ArrayType),
    Map(MapType),
    Chan(ChanType),
    Func(FuncType),
    Struct(StructType),
    Interface(InterfaceType),
    /// `...T` in the last parameter position
    Ellipsis(Box<TypeExpr>),
}

impl TypeExpr {
    /// A plain named type such as `string` or `Reader`.
    pub fn named(name: impl Into<SmolStr>) -> Self {
        TypeExpr::Named(TypeName {
            package: None,
            name: Ident::synthetic(name),
            args: Vec::new(),
        })
    }

    pub fn pointer(inner: TypeExpr) -> Self {
        TypeExpr::Pointer(Box::new(inner))
    }

    /// The name of a named type, looking through pointers.
    pub fn base_name(&self) -> Option<&Ident> {
        match self {
            TypeExpr::Named(type_name) if type_name.package.is_none() => Some(&type_name.name),
            TypeExpr::Pointer(inner) => inner.base_name(),
            _ => None,
        }
    }
}

/// `name`, `pkg.Name`, or an instantiation `Name[Args]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeName {
    pub package: Option<Ident>,
    pub name: Ident,
    pub args: Vec<TypeExpr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    /// `None` for `[...]T`
    pub len: Option<Box<Expr>>,
    pub elem: Box<TypeExpr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapType {
    pub key: Box<TypeExpr>,
    pub value: Box<TypeExpr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChanType {
    pub dir: ChanDir,
    pub elem: Box<TypeExpr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructType {
    pub fields: Vec<Field>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceType {
    pub elems: Vec<InterfaceElem>,
    pub span: Span,
}

impl InterfaceType {
    pub fn methods(&self) -> impl Iterator<Item = &InterfaceMethod> {
        self.elems.iter().filter_map(|elem| match elem {
            InterfaceElem::Method(method) => Some(method),
            InterfaceElem::Embedded(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InterfaceElem {
    Method(InterfaceMethod),
    /// An embedded interface or a type-set union `~int | string`.
    Embedded(Vec<TypeTerm>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceMethod {
    pub name: Ident,
    pub sig: FuncType,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeTerm {
    pub tilde: bool,
    pub ty: TypeExpr,
}

// ============================================================================
// EXPRESSIONS
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ident(Ident),
    BasicLit(BasicLit),
    Composite(CompositeLit),
    FuncLit(FuncLit),
    Paren(Box<Expr>),
    Selector(SelectorExpr),
    Index(IndexExpr),
    Slice(SliceExpr),
    TypeAssert(TypeAssertExpr),
    Call(CallExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    /// A type literal in expression position, e.g. `make([]int, 3)`.
    Type(TypeExpr),
}

impl Expr {
    pub fn ident(name: impl Into<SmolStr>) -> Self {
        Expr::Ident(Ident::synthetic(name))
    }

    pub fn call(fun: Expr, args: Vec<Expr>) -> Self {
        Expr::Call(CallExpr {
            fun: Box::new(fun),
            args,
            ellipsis: false,
        })
    }

    pub fn selector(base: Expr, sel: impl Into<SmolStr>) -> Self {
        Expr::Selector(SelectorExpr {
            base: Box::new(base),
            sel: Ident::synthetic(sel),
        })
    }

    pub fn as_ident(&self) -> Option<&Ident> {
        match self {
            Expr::Ident(ident) => Some(ident),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompositeLit {
    /// `None` for elided element types inside an outer literal
    pub ty: Option<TypeExpr>,
    pub elts: Vec<Element>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub key: Option<Expr>,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncLit {
    pub sig: FuncType,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectorExpr {
    pub base: Box<Expr>,
    pub sel: Ident,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpr {
    pub base: Box<Expr>,
    pub indices: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliceExpr {
    pub base: Box<Expr>,
    pub low: Option<Box<Expr>>,
    pub high: Option<Box<Expr>>,
    pub max: Option<Box<Expr>>,
}

/// `x.(T)`, or `x.(type)` in a type switch guard when `ty` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAssertExpr {
    pub base: Box<Expr>,
    pub ty: Option<TypeExpr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub fun: Box<Expr>,
    pub args: Vec<Expr>,
    /// `f(xs...)`
    pub ellipsis: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Neg,
    Not,
    Xor,
    Deref,
    Addr,
    Recv,
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
            UnaryOp::Xor => "^",
            UnaryOp::Deref => "*",
            UnaryOp::Addr => "&",
            UnaryOp::Recv => "<-",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Box<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    LogOr,
    LogAnd,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Add,
    Sub,
    Or,
    Xor,
    Mul,
    Div,
    Rem,
    Shl,
    Shr,
    And,
    AndNot,
}

impl BinaryOp {
    /// Go operator precedence (5 binds tightest).
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::LogOr => 1,
            BinaryOp::LogAnd => 2,
            BinaryOp::Eq
            | BinaryOp::Ne
            | BinaryOp::Lt
            | BinaryOp::Le
            | BinaryOp::Gt
            | BinaryOp::Ge => 3,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Or | BinaryOp::Xor => 4,
            BinaryOp::Mul
            | BinaryOp::Div
            | BinaryOp::Rem
            | BinaryOp::Shl
            | BinaryOp::Shr
            | BinaryOp::And
            | BinaryOp::AndNot => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::LogOr => "||",
            BinaryOp::LogAnd => "&&",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Or => "|",
            BinaryOp::Xor => "^",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::And => "&",
            BinaryOp::AndNot => "&^",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

// ============================================================================
// STATEMENTS
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self {
            stmts,
            span: Span::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind) -> Self {
        Self {
            kind,
            span: Span::default(),
        }
    }

    /// 1-based first and last line of the statement.
    pub fn line_range(&self) -> (usize, usize) {
        (self.span.start.line_number(), self.span.end.line_number())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    Decl(GenDecl),
    Assign(AssignStmt),
    IncDec(IncDecStmt),
    Expr(Expr),
    Send(SendStmt),
    Return(Vec<Expr>),
    If(IfStmt),
    For(ForStmt),
    Range(RangeStmt),
    Switch(SwitchStmt),
    TypeSwitch(TypeSwitchStmt),
    Block(Block),
    Branch(BranchStmt),
    Go(Expr),
    Defer(Expr),
    Labeled(LabeledStmt),
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignOp {
    /// `:=`
    Define,
    /// `=`
    Assign,
    /// `+=`, `<<=`, ...
    Compound(BinaryOp),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub lhs: Vec<Expr>,
    pub op: AssignOp,
    pub rhs: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IncDecStmt {
    pub target: Expr,
    pub inc: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SendStmt {
    pub channel: Expr,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub init: Option<Box<Stmt>>,
    pub cond: Expr,
    pub then: Block,
    /// Either another `if` statement or a block
    pub els: Option<Box<Stmt>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: Option<Box<Stmt>>,
    pub cond: Option<Expr>,
    pub post: Option<Box<Stmt>>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeStmt {
    pub key: Option<Expr>,
    pub value: Option<Expr>,
    /// `:=` (declares) versus `=` (assigns)
    pub define: bool,
    pub expr: Expr,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStmt {
    pub init: Option<Box<Stmt>>,
    pub tag: Option<Expr>,
    pub clauses: Vec<CaseClause>,
}

/// `case a, b:` or `default:` (empty `values`, `is_default`).
#[derive(Debug, Clone, PartialEq)]
pub struct CaseClause {
    pub values: Vec<Expr>,
    pub is_default: bool,
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeSwitchStmt {
    pub init: Option<Box<Stmt>>,
    /// `v` in `switch v := x.(type)`
    pub binding: Option<Ident>,
    pub subject: Expr,
    pub clauses: Vec<TypeCaseClause>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeCaseClause {
    pub types: Vec<TypeExpr>,
    pub is_default: bool,
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchKind {
    Break,
    Continue,
    Goto,
    Fallthrough,
}

impl BranchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BranchKind::Break => "break",
            BranchKind::Continue => "continue",
            BranchKind::Goto => "goto",
            BranchKind::Fallthrough => "fallthrough",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BranchStmt {
    pub kind: BranchKind,
    pub label: Option<Ident>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledStmt {
    pub label: Ident,
    pub stmt: Box<Stmt>,
}
