//! Declaration-driven typing of expressions.
//!
//! This is deliberately shallow: it follows declared types, composite literal
//! types, single-result calls, pointers and element types far enough to find
//! the owner of a selector. Anything it cannot see yields `None`.

use smol_str::SmolStr;

use super::symbol_table::{SymbolId, SymbolKind, SymbolTable};
use crate::parser::keywords::is_predeclared_type;
use crate::syntax::ast::{
    BinaryOp, Expr, LitKind, SelectorExpr, TypeExpr, TypeName, UnaryOp,
};

/// Depth limit when following named types to their underlying type
const MAX_UNDERLYING_DEPTH: usize = 8;

/// What a selector base tells us about the member being selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SelectorOwner {
    /// A type declared in the unit (or a type it embeds)
    Named(SmolStr),
    /// The base is typed, but not by anything with members we can see
    Opaque,
    /// The base could not be typed
    Unknown,
    /// The base is a package name
    Package,
}

impl SymbolTable {
    /// Best-effort static type of `expr`
    pub fn infer_type(&self, expr: &Expr) -> Option<TypeExpr> {
        match expr {
            Expr::Ident(ident) => match self.resolve(&ident.name, ident.span.start) {
                Some(id) => {
                    let symbol = self.get_symbol(id)?;
                    match symbol.kind {
                        SymbolKind::Type | SymbolKind::Unit => None,
                        _ => symbol.declared_type.clone(),
                    }
                }
                None if ident.name == "true" || ident.name == "false" => {
                    Some(TypeExpr::named("bool"))
                }
                None => None,
            },
            Expr::BasicLit(lit) => Some(TypeExpr::named(match lit.kind {
                LitKind::Int => "int",
                LitKind::Float => "float64",
                LitKind::Imag => "complex128",
                LitKind::Char => "rune",
                LitKind::String => "string",
            })),
            Expr::Composite(lit) => lit.ty.clone(),
            Expr::FuncLit(lit) => Some(TypeExpr::Func(lit.sig.clone())),
            Expr::Paren(inner) => self.infer_type(inner),
            Expr::Selector(sel) => {
                let member = self.selector_member(sel)?;
                self.get_symbol(member)?.declared_type.clone()
            }
            Expr::Index(index) => {
                let base = self.infer_type(&index.base)?;
                match self.underlying(&base) {
                    TypeExpr::Slice(elem) => Some(elem.as_ref().clone()),
                    TypeExpr::Array(array) => Some(array.elem.as_ref().clone()),
                    TypeExpr::Map(map) => Some(map.value.as_ref().clone()),
                    TypeExpr::Pointer(inner) => match self.underlying(inner) {
                        TypeExpr::Array(array) => Some(array.elem.as_ref().clone()),
                        _ => None,
                    },
                    ty if is_string(ty) => Some(TypeExpr::named("byte")),
                    _ => None,
                }
            }
            Expr::Slice(slice) => self.infer_type(&slice.base),
            Expr::TypeAssert(assert) => assert.ty.clone(),
            Expr::Call(call) => {
                if let Some(ty) = self.conversion_or_builtin(&call.fun, &call.args) {
                    return Some(ty);
                }
                match self.infer_type(&call.fun)? {
                    TypeExpr::Func(sig) if sig.result_count() == 1 => {
                        sig.results?.fields.into_iter().next().map(|field| field.ty)
                    }
                    _ => None,
                }
            }
            Expr::Unary(unary) => {
                let operand = || self.infer_type(&unary.operand);
                match unary.op {
                    UnaryOp::Addr => operand().map(TypeExpr::pointer),
                    UnaryOp::Deref => match operand()? {
                        TypeExpr::Pointer(inner) => Some(*inner),
                        _ => None,
                    },
                    UnaryOp::Recv => match operand()? {
                        TypeExpr::Chan(chan) => Some(*chan.elem),
                        _ => None,
                    },
                    UnaryOp::Not => Some(TypeExpr::named("bool")),
                    UnaryOp::Plus | UnaryOp::Neg | UnaryOp::Xor => operand(),
                }
            }
            Expr::Binary(binary) => match binary.op {
                BinaryOp::Eq
                | BinaryOp::Ne
                | BinaryOp::Lt
                | BinaryOp::Le
                | BinaryOp::Gt
                | BinaryOp::Ge
                | BinaryOp::LogAnd
                | BinaryOp::LogOr => Some(TypeExpr::named("bool")),
                BinaryOp::Shl | BinaryOp::Shr => self.infer_type(&binary.lhs),
                _ => self
                    .infer_type(&binary.lhs)
                    .or_else(|| self.infer_type(&binary.rhs)),
            },
            Expr::Type(_) => None,
        }
    }

    /// Types of the values produced when `values` is assigned to `count`
    /// targets, one entry per target.
    pub fn infer_assigned_types(&self, count: usize, values: &[Expr]) -> Vec<Option<TypeExpr>> {
        if values.len() == count {
            return values.iter().map(|value| self.infer_type(value)).collect();
        }
        let Some(value) = values.first().filter(|_| values.len() == 1) else {
            return vec![None; count];
        };
        let mut types: Vec<Option<TypeExpr>> = match value {
            Expr::Call(call) => match self.infer_type(&call.fun) {
                Some(TypeExpr::Func(sig)) => sig
                    .results
                    .iter()
                    .flat_map(|results| results.expanded_types())
                    .map(|ty| Some(ty.clone()))
                    .collect(),
                _ => Vec::new(),
            },
            // comma-ok forms: map index, type assertion, receive
            _ => vec![self.infer_type(value), Some(TypeExpr::named("bool"))],
        };
        types.resize(count, None);
        types
    }

    /// Key and value types of a `range` over `expr`
    pub fn infer_range_types(&self, expr: &Expr) -> (Option<TypeExpr>, Option<TypeExpr>) {
        let Some(ty) = self.infer_type(expr) else {
            return (None, None);
        };
        let int = || Some(TypeExpr::named("int"));
        match self.underlying(&ty) {
            TypeExpr::Slice(elem) => (int(), Some(elem.as_ref().clone())),
            TypeExpr::Array(array) => (int(), Some(array.elem.as_ref().clone())),
            TypeExpr::Map(map) => (
                Some(map.key.as_ref().clone()),
                Some(map.value.as_ref().clone()),
            ),
            TypeExpr::Chan(chan) => (Some(chan.elem.as_ref().clone()), None),
            TypeExpr::Pointer(inner) => match self.underlying(inner) {
                TypeExpr::Array(array) => (int(), Some(array.elem.as_ref().clone())),
                _ => (None, None),
            },
            ty if is_string(ty) => (int(), Some(TypeExpr::named("rune"))),
            TypeExpr::Named(_) => (int(), None),
            _ => (None, None),
        }
    }

    /// Follow locally declared named types to their definition
    pub fn underlying<'a>(&'a self, ty: &'a TypeExpr) -> &'a TypeExpr {
        let mut current = ty;
        for _ in 0..MAX_UNDERLYING_DEPTH {
            let Some(next) = self.local_type_definition(current) else {
                break;
            };
            current = next;
        }
        current
    }

    fn local_type_definition(&self, ty: &TypeExpr) -> Option<&TypeExpr> {
        let TypeExpr::Named(TypeName {
            package: None,
            name,
            ..
        }) = ty
        else {
            return None;
        };
        let id = self.resolve(&name.name, name.span.start)?;
        let symbol = self.get_symbol(id)?;
        if symbol.kind != SymbolKind::Type {
            return None;
        }
        symbol.declared_type.as_ref()
    }

    /// The member a selector expression refers to, if it can be determined
    pub fn selector_member(&self, sel: &SelectorExpr) -> Option<SymbolId> {
        match self.selector_owner(&sel.base) {
            SelectorOwner::Named(owner) => self.resolve_member(Some(&owner), &sel.sel.name),
            SelectorOwner::Unknown => self.resolve_member(None, &sel.sel.name),
            SelectorOwner::Opaque | SelectorOwner::Package => None,
        }
    }

    pub(crate) fn selector_owner(&self, base: &Expr) -> SelectorOwner {
        if let Expr::Ident(ident) = base {
            let Some(id) = self.resolve(&ident.name, ident.span.start) else {
                return SelectorOwner::Package;
            };
            if let Some(symbol) = self.get_symbol(id).filter(|s| s.kind == SymbolKind::Type) {
                return SelectorOwner::Named(symbol.name.clone());
            }
        }
        match self.infer_type(base) {
            Some(ty) => self.owner_of_type(&ty),
            None => SelectorOwner::Unknown,
        }
    }

    /// The member-table owner for values of type `ty`
    pub(crate) fn owner_of_type(&self, ty: &TypeExpr) -> SelectorOwner {
        match ty {
            TypeExpr::Named(TypeName {
                package: None,
                name,
                ..
            }) => SelectorOwner::Named(name.name.clone()),
            TypeExpr::Pointer(inner) => self.owner_of_type(inner),
            _ => SelectorOwner::Opaque,
        }
    }

    /// `T(x)`, `new(T)`, `make(T, ...)`, `len(x)`, `append(xs, ...)`
    fn conversion_or_builtin(&self, fun: &Expr, args: &[Expr]) -> Option<TypeExpr> {
        match fun {
            Expr::Type(ty) => Some(ty.clone()),
            Expr::Paren(inner) => match inner.as_ref() {
                Expr::Type(ty) => Some(ty.clone()),
                _ => None,
            },
            Expr::Ident(ident) => match self.resolve(&ident.name, ident.span.start) {
                Some(id) => {
                    let symbol = self.get_symbol(id)?;
                    (symbol.kind == SymbolKind::Type).then(|| TypeExpr::named(ident.name.clone()))
                }
                None => match ident.name.as_str() {
                    "new" => args.first().and_then(expr_as_type).map(TypeExpr::pointer),
                    "make" => args.first().and_then(expr_as_type),
                    "len" | "cap" | "copy" => Some(TypeExpr::named("int")),
                    "append" => args.first().and_then(|first| self.infer_type(first)),
                    name if is_predeclared_type(name) => {
                        Some(TypeExpr::named(ident.name.clone()))
                    }
                    _ => None,
                },
            },
            _ => None,
        }
    }
}

/// Reinterpret an expression written in type position (`new(T)`)
pub(crate) fn expr_as_type(expr: &Expr) -> Option<TypeExpr> {
    match expr {
        Expr::Type(ty) => Some(ty.clone()),
        Expr::Ident(ident) => Some(TypeExpr::Named(TypeName {
            package: None,
            name: ident.clone(),
            args: Vec::new(),
        })),
        Expr::Selector(sel) => {
            let package = sel.base.as_ident()?;
            Some(TypeExpr::Named(TypeName {
                package: Some(package.clone()),
                name: sel.sel.clone(),
                args: Vec::new(),
            }))
        }
        Expr::Paren(inner) => expr_as_type(inner),
        _ => None,
    }
}

fn is_string(ty: &TypeExpr) -> bool {
    matches!(ty, TypeExpr::Named(TypeName { package: None, name, .. }) if name.name == "string")
}
