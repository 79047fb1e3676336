use smol_str::{SmolStr, format_smolstr};
use tracing::debug;

use crate::base::Span;
use crate::error::{AnalysisError, Result};
use crate::syntax::ast::{
    AssignOp, AssignStmt, Block, CallExpr, CompositeLit, Expr, Field, FieldList, FuncDecl,
    FuncType, Ident, RangeStmt, Stmt, StmtKind, StructType, TypeExpr, TypeName,
};

/// Generate a table-driven test skeleton for `func`.
///
/// ```go
/// func TestAdd(t *testing.T) {
///     tests := []struct {
///         a int
///         b int
///     }{}
///     for _, tt := range tests {
///         Add(tt.a, tt.b)
///     }
/// }
/// ```
pub fn generate_test_scaffold(func: &FuncDecl) -> Result<FuncDecl> {
    if func.name.is_blank() {
        return Err(AnalysisError::invalid("cannot scaffold a test for '_'"));
    }

    let mut fields = Vec::new();
    let mut args = Vec::new();
    let mut variadic = false;
    for param in &func.sig.params.fields {
        let ty = match &param.ty {
            TypeExpr::Ellipsis(elem) => {
                variadic = true;
                TypeExpr::Slice(elem.clone())
            }
            ty => ty.clone(),
        };
        for position in 0..param.names.len().max(1) {
            let name: SmolStr = match param.names.get(position) {
                Some(ident) if !ident.is_blank() => ident.name.clone(),
                _ => format_smolstr!("arg{}", fields.len()),
            };
            fields.push(Field::new(vec![Ident::synthetic(name.clone())], ty.clone()));
            args.push(Expr::selector(Expr::ident("tt"), name));
        }
    }

    let mut loop_body = Vec::new();
    if func.is_method() || args.is_empty() {
        loop_body.push(Stmt::new(StmtKind::Assign(AssignStmt {
            lhs: vec![Expr::ident("_")],
            op: AssignOp::Assign,
            rhs: vec![Expr::ident("tt")],
        })));
    }
    if !func.is_method() {
        loop_body.push(Stmt::new(StmtKind::Expr(Expr::Call(CallExpr {
            fun: Box::new(Expr::ident(func.name.name.clone())),
            args,
            ellipsis: variadic,
        }))));
    }

    let table = Stmt::new(StmtKind::Assign(AssignStmt {
        lhs: vec![Expr::ident("tests")],
        op: AssignOp::Define,
        rhs: vec![Expr::Composite(CompositeLit {
            ty: Some(TypeExpr::Slice(Box::new(TypeExpr::Struct(StructType {
                fields,
                span: Span::default(),
            })))),
            elts: Vec::new(),
            span: Span::default(),
        })],
    }));
    let cases = Stmt::new(StmtKind::Range(RangeStmt {
        key: Some(Expr::ident("_")),
        value: Some(Expr::ident("tt")),
        define: true,
        expr: Expr::ident("tests"),
        body: Block::new(loop_body),
    }));

    let name = format!("Test{}", func.name.as_str());
    debug!(function = func.name.as_str(), test = %name, "generated test scaffold");
    Ok(FuncDecl {
        recv: None,
        name: Ident::synthetic(name),
        type_params: None,
        sig: FuncType {
            params: FieldList::new(vec![Field::new(
                vec![Ident::synthetic("t")],
                TypeExpr::pointer(TypeExpr::Named(TypeName {
                    package: Some(Ident::synthetic("testing")),
                    name: Ident::synthetic("T"),
                    args: Vec::new(),
                })),
            )]),
            results: None,
        },
        body: Some(Block::new(vec![table, cases])),
        span: Span::default(),
    })
}
