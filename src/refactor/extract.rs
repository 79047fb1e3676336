use tracing::debug;

use super::validate_identifier;
use crate::error::{AnalysisError, Result};
use crate::syntax::ast::{
    Block, Decl, Expr, FieldList, File, FuncDecl, FuncType, Ident, Stmt, StmtKind,
};

/// Move the statements lying entirely within `start_line..=end_line` into a
/// new top-level function `new_name`.
///
/// Only the top-level statements of the first function whose body has any
/// qualifying statement move. They are replaced in place by a call to the new
/// function, which is declared directly after the enclosing declaration and
/// takes no parameters and returns nothing.
pub fn extract_function(
    file: &File,
    start_line: usize,
    end_line: usize,
    new_name: &str,
) -> Result<File> {
    validate_identifier(new_name)?;

    let (decl_index, picked) = file
        .decls
        .iter()
        .enumerate()
        .find_map(|(index, decl)| {
            let Decl::Func(func) = decl else {
                return None;
            };
            let picked = statements_in_range(func.body.as_ref()?, start_line, end_line);
            (!picked.is_empty()).then_some((index, picked))
        })
        .ok_or(AnalysisError::NoStatementsInRange {
            start: start_line,
            end: end_line,
        })?;

    let mut result = file.clone();
    let mut extracted = Vec::with_capacity(picked.len());
    if let Some(Decl::Func(func)) = result.decls.get_mut(decl_index)
        && let Some(body) = func.body.as_mut()
    {
        let stmts = std::mem::take(&mut body.stmts);
        let mut kept = Vec::with_capacity(stmts.len() + 1 - picked.len());
        for (index, stmt) in stmts.into_iter().enumerate() {
            if picked.binary_search(&index).is_err() {
                kept.push(stmt);
                continue;
            }
            if extracted.is_empty() {
                kept.push(call_statement(new_name));
            }
            extracted.push(stmt);
        }
        body.stmts = kept;
        debug!(
            from = func.name.as_str(),
            to = new_name,
            statements = extracted.len(),
            "extracted function"
        );
    }

    let function = FuncDecl {
        recv: None,
        name: Ident::synthetic(new_name),
        type_params: None,
        sig: FuncType {
            params: FieldList::default(),
            results: None,
        },
        body: Some(Block::new(extracted)),
        span: Default::default(),
    };
    result.decls.insert(decl_index + 1, Decl::Func(function));
    Ok(result)
}

/// Indices of the body's statements fully inside the line range
fn statements_in_range(body: &Block, start_line: usize, end_line: usize) -> Vec<usize> {
    body.stmts
        .iter()
        .enumerate()
        .filter(|(_, stmt)| {
            if stmt.span.is_synthetic() || matches!(stmt.kind, StmtKind::Empty) {
                return false;
            }
            let (first, last) = stmt.line_range();
            first >= start_line && last <= end_line
        })
        .map(|(index, _)| index)
        .collect()
}

fn call_statement(name: &str) -> Stmt {
    Stmt::new(StmtKind::Expr(Expr::call(Expr::ident(name), Vec::new())))
}
