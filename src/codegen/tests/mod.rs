
use crate::parser::parse_file;
use crate::syntax::ast::{Decl, File};
use crate::syntax::printer::print_decl;

fn parse_ok(source: &str) -> File {
    let parse = parse_file(source);
    assert!(parse.ok(), "unexpected errors: {:?}", parse.errors);
    parse.file
}

fn print_decls(decls: &[Decl]) -> Vec<String> {
    decls.iter().map(print_decl).collect()
}
