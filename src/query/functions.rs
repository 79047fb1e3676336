use tracing::debug;

use super::{MatchKind, NamePattern, Query, QueryMatch};
use crate::syntax::SourceUnit;
use crate::syntax::ast::{FieldList, FuncDecl, FuncType};
use crate::syntax::signature_text;

impl<'u> Query<'u> {
    /// Functions and methods whose name matches `pattern`
    pub fn find_functions(&self, pattern: &str) -> Vec<QueryMatch> {
        let pattern = NamePattern::parse(pattern);
        let matches: Vec<_> = self
            .functions()
            .filter(|(_, func)| pattern.matches(func.name.as_str()))
            .map(|(unit, func)| function_match(unit, func))
            .collect();
        debug!(pattern = ?pattern, matches = matches.len(), "find_functions");
        matches
    }

    /// Functions whose `(params) results` text equals `text`, ignoring all
    /// whitespace. Both the type-only form `(string,int)error` and the
    /// named form `(sstring,nint)error` are accepted.
    pub fn find_by_signature(&self, text: &str) -> Vec<QueryMatch> {
        let wanted = strip_whitespace(text);
        let matches: Vec<_> = self
            .functions()
            .filter(|(_, func)| {
                strip_whitespace(&signature_text(&func.sig, false)) == wanted
                    || strip_whitespace(&signature_text(&func.sig, true)) == wanted
            })
            .map(|(unit, func)| function_match(unit, func))
            .collect();
        debug!(signature = %wanted, matches = matches.len(), "find_by_signature");
        matches
    }

    fn functions(&self) -> impl Iterator<Item = (&'u SourceUnit, &'u FuncDecl)> {
        self.units()
            .flat_map(|unit| unit.file().functions().map(move |func| (unit, func)))
    }
}

fn function_match(unit: &SourceUnit, func: &FuncDecl) -> QueryMatch {
    let kind = if func.is_method() {
        MatchKind::Method
    } else {
        MatchKind::Function
    };
    QueryMatch::new(
        unit,
        func.name.span.start,
        func.name.as_str(),
        function_signature(func),
        kind,
    )
}

/// `func (r *T) Name[P any](a int) error`
pub(crate) fn function_signature(func: &FuncDecl) -> String {
    let mut out = String::from("func ");
    if let Some(recv) = &func.recv {
        out.push_str(&list_text(recv.clone()));
        out.push(' ');
    }
    out.push_str(func.name.as_str());
    if let Some(type_params) = &func.type_params {
        let params = list_text(type_params.clone());
        out.push('[');
        out.push_str(&params[1..params.len() - 1]);
        out.push(']');
    }
    out.push_str(&signature_text(&func.sig, true));
    out
}

/// A field list written as a parenthesized parameter list, names included
fn list_text(params: FieldList) -> String {
    signature_text(
        &FuncType {
            params,
            results: None,
        },
        true,
    )
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
