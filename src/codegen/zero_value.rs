use crate::parser::keywords::is_numeric_type;
use crate::syntax::ast::{BasicLit, CompositeLit, Expr, TypeExpr};

/// The zero-value expression returned for a result of type `ty`.
///
/// Named types other than the predeclared ones get `nil`, as do pointers,
/// slices, maps, channels, functions and interfaces. Array and struct type
/// literals get an empty composite literal.
pub fn zero_value(ty: &TypeExpr) -> Expr {
    match ty {
        TypeExpr::Named(type_name) if type_name.package.is_none() && type_name.args.is_empty() => {
            match type_name.name.as_str() {
                "string" => Expr::BasicLit(BasicLit::string("")),
                "bool" => Expr::ident("false"),
                name if is_numeric_type(name) => Expr::BasicLit(BasicLit::int(0)),
                _ => Expr::ident("nil"),
            }
        }
        TypeExpr::Array(_) | TypeExpr::Struct(_) => Expr::Composite(CompositeLit {
            ty: Some(ty.clone()),
            elts: Vec::new(),
            span: Default::default(),
        }),
        _ => Expr::ident("nil"),
    }
}
