use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use super::zero_value::zero_value;
use crate::base::Span;
use crate::base::text_utils::lower_first;
use crate::error::{AnalysisError, Result};
use crate::parser::keywords::is_keyword;
use crate::parser::parse_file;
use crate::refactor::validate_identifier;
use crate::syntax::ast::{
    Block, Decl, DeclKeyword, Field, FieldList, FuncDecl, FuncType, GenDecl, Ident, Spec, Stmt,
    StmtKind, StructType, TypeExpr, TypeSpec,
};

/// Generate `type <impl_name> struct{}` and one stub method per method of
/// the interface declared by `iface`.
///
/// Stubs take a pointer receiver named after the first letter of
/// `impl_name`, renamed when a parameter already uses it, and return the zero value of each result. `overrides` maps a
/// method name to body source that replaces the stub body.
pub fn generate_interface_implementation(
    iface: &TypeSpec,
    impl_name: &str,
    overrides: &[(&str, &str)],
) -> Result<Vec<Decl>> {
    let TypeExpr::Interface(interface) = &iface.ty else {
        return Err(AnalysisError::invalid(format!(
            "'{}' is not an interface type",
            iface.name.as_str()
        )));
    };
    validate_identifier(impl_name)?;
    let methods: Vec<_> = interface.methods().collect();
    if methods.is_empty() {
        return Err(AnalysisError::invalid(format!(
            "interface '{}' has no methods to implement",
            iface.name.as_str()
        )));
    }

    let overrides: IndexMap<&str, &str> = overrides.iter().copied().collect();
    for name in overrides.keys() {
        if !methods.iter().any(|method| method.name.as_str() == *name) {
            warn!(
                interface = iface.name.as_str(),
                method = *name,
                "override for unknown method ignored"
            );
        }
    }

    let mut decls = Vec::with_capacity(methods.len() + 1);
    decls.push(struct_decl(impl_name));
    for method in methods {
        let body = match overrides.get(method.name.as_str()) {
            Some(source) => parse_body(method.name.as_str(), source)?,
            None => stub_body(&method.sig),
        };
        let receiver = receiver_name(impl_name, &method.sig);
        decls.push(Decl::Func(FuncDecl {
            recv: Some(FieldList::new(vec![Field::new(
                vec![Ident::synthetic(receiver.as_str())],
                TypeExpr::pointer(TypeExpr::named(impl_name)),
            )])),
            name: Ident::synthetic(method.name.as_str()),
            type_params: None,
            sig: method.sig.clone(),
            body: Some(body),
            span: Span::default(),
        }));
    }
    debug!(
        interface = iface.name.as_str(),
        implementation = impl_name,
        methods = decls.len() - 1,
        "generated implementation"
    );
    Ok(decls)
}

/// The lowercased first letter of `impl_name`, unless a parameter or result
/// of `sig` already uses it; then the lowercased type name, then `recvN`.
fn receiver_name(impl_name: &str, sig: &FuncType) -> String {
    let taken: FxHashSet<&str> = sig
        .params
        .fields
        .iter()
        .chain(sig.results.iter().flat_map(|results| results.fields.iter()))
        .flat_map(|field| field.names.iter())
        .map(|name| name.as_str())
        .collect();
    let initial: String = impl_name
        .chars()
        .next()
        .map(|first| first.to_lowercase().collect())
        .unwrap_or_default();
    [initial, lower_first(impl_name)]
        .into_iter()
        .chain((1..).map(|n| format!("recv{n}")))
        .find(|name| !name.is_empty() && !is_keyword(name) && !taken.contains(name.as_str()))
        .unwrap_or_default()
}

fn struct_decl(name: &str) -> Decl {
    Decl::Gen(GenDecl {
        keyword: DeclKeyword::Type,
        specs: vec![Spec::Type(TypeSpec {
            name: Ident::synthetic(name),
            type_params: None,
            alias: false,
            ty: TypeExpr::Struct(StructType {
                fields: Vec::new(),
                span: Span::default(),
            }),
            span: Span::default(),
        })],
        grouped: false,
        span: Span::default(),
    })
}

fn stub_body(sig: &FuncType) -> Block {
    let values = sig
        .results
        .iter()
        .flat_map(|results| results.expanded_types())
        .map(zero_value)
        .collect();
    Block::new(vec![Stmt::new(StmtKind::Return(values))])
}

/// Parse statement source as the body of a function
fn parse_body(method: &str, source: &str) -> Result<Block> {
    let text = format!("package stub\n\nfunc _() {{\n{source}\n}}\n");
    let parse = parse_file(&text);
    if !parse.ok() {
        return Err(AnalysisError::parse_failed(method, parse.errors));
    }
    match <[Decl; 1]>::try_from(parse.file.decls) {
        Ok([Decl::Func(FuncDecl {
            body: Some(body), ..
        })]) => Ok(body),
        _ => Err(AnalysisError::invalid(format!(
            "override for '{method}' is not a function body"
        ))),
    }
}
