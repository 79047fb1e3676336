//! Canonical single-line type text.
//!
//! This is the one formatter used to compare types structurally: signature
//! queries, field-type queries and interface conformance all go through
//! [`type_text`], so two types match exactly when their texts are equal.

use super::ast::{ChanDir, FieldList, FuncType, InterfaceElem, TypeExpr};
use super::printer::print_expr;

pub fn type_text(ty: &TypeExpr) -> String {
    let mut out = String::new();
    write_type(&mut out, ty);
    out
}

fn write_type(out: &mut String, ty: &TypeExpr) {
    match ty {
        TypeExpr::Named(type_name) => {
            if let Some(package) = &type_name.package {
                out.push_str(package.as_str());
                out.push('.');
            }
            out.push_str(type_name.name.as_str());
            if !type_name.args.is_empty() {
                out.push('[');
                write_joined(out, type_name.args.iter(), ", ");
                out.push(']');
            }
        }
        TypeExpr::Pointer(inner) => {
            out.push('*');
            write_type(out, inner);
        }
        TypeExpr::Slice(inner) => {
            out.push_str("[]");
            write_type(out, inner);
        }
        TypeExpr::Ellipsis(inner) => {
            out.push_str("...");
            write_type(out, inner);
        }
        TypeExpr::Array(array) => {
            out.push('[');
            match &array.len {
                Some(len) => out.push_str(&print_expr(len)),
                None => out.push_str("..."),
            }
            out.push(']');
            write_type(out, &array.elem);
        }
        TypeExpr::Map(map) => {
            out.push_str("map[");
            write_type(out, &map.key);
            out.push(']');
            write_type(out, &map.value);
        }
        TypeExpr::Chan(chan) => {
            out.push_str(match chan.dir {
                ChanDir::Both => "chan ",
                ChanDir::Send => "chan<- ",
                ChanDir::Recv => "<-chan ",
            });
            write_type(out, &chan.elem);
        }
        TypeExpr::Func(sig) => {
            out.push_str("func");
            out.push_str(&signature_text(sig, false));
        }
        TypeExpr::Struct(st) => {
            out.push_str("struct{");
            for (i, field) in st.fields.iter().enumerate() {
                if i > 0 {
                    out.push_str("; ");
                }
                let names: Vec<&str> = field.names.iter().map(|name| name.as_str()).collect();
                if !names.is_empty() {
                    out.push_str(&names.join(", "));
                    out.push(' ');
                }
                write_type(out, &field.ty);
            }
            out.push('}');
        }
        TypeExpr::Interface(iface) => {
            out.push_str("interface{");
            for (i, elem) in iface.elems.iter().enumerate() {
                if i > 0 {
                    out.push_str("; ");
                }
                match elem {
                    InterfaceElem::Method(method) => {
                        out.push_str(method.name.as_str());
                        out.push_str(&signature_text(&method.sig, false));
                    }
                    InterfaceElem::Embedded(terms) => {
                        for (j, term) in terms.iter().enumerate() {
                            if j > 0 {
                                out.push_str(" | ");
                            }
                            if term.tilde {
                                out.push('~');
                            }
                            write_type(out, &term.ty);
                        }
                    }
                }
            }
            out.push('}');
        }
    }
}

fn write_joined<'a>(out: &mut String, types: impl Iterator<Item = &'a TypeExpr>, sep: &str) {
    for (i, ty) in types.enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        write_type(out, ty);
    }
}

/// `(params) results` text of a signature.
///
/// Without names every parameter contributes its type once per name, so
/// `(a, b int)` reads `(int, int)`. With names the fields are written as
/// declared.
pub fn signature_text(sig: &FuncType, with_names: bool) -> String {
    let mut out = String::from("(");
    write_fields(&mut out, &sig.params, with_names);
    out.push(')');
    if let Some(results) = &sig.results {
        let single_unnamed = results.fields.len() == 1 && results.fields[0].names.is_empty();
        if single_unnamed {
            out.push(' ');
            write_type(&mut out, &results.fields[0].ty);
        } else if !results.is_empty() {
            out.push_str(" (");
            write_fields(&mut out, results, with_names);
            out.push(')');
        }
    }
    out
}

fn write_fields(out: &mut String, list: &FieldList, with_names: bool) {
    if !with_names {
        write_joined(out, list.expanded_types(), ", ");
        return;
    }
    for (i, field) in list.fields.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let names: Vec<&str> = field.names.iter().map(|name| name.as_str()).collect();
        if !names.is_empty() {
            out.push_str(&names.join(", "));
            out.push(' ');
        }
        write_type(out, &field.ty);
    }
}

/// One canonical text per parameter, in declaration order
pub fn param_type_texts(list: &FieldList) -> Vec<String> {
    list.expanded_types().map(type_text).collect()
}
