//! Shared helpers for the semantic tests

use text_size::TextSize;

use crate::base::{LineIndex, Position};
use crate::parser::parse_file;
use crate::semantic::SymbolTable;
use crate::syntax::ast::File;

pub fn parse_ok(source: &str) -> File {
    let parse = parse_file(source);
    assert!(parse.ok(), "unexpected errors: {:?}", parse.errors);
    parse.file
}

pub fn build(source: &str) -> (File, SymbolTable) {
    let file = parse_ok(source);
    let table = SymbolTable::build(&file);
    (file, table)
}

/// Position of the byte `delta` bytes into the first occurrence of `needle`
pub fn at(source: &str, needle: &str, delta: usize) -> Position {
    let start = source
        .find(needle)
        .unwrap_or_else(|| panic!("'{needle}' not in source"));
    let offset = TextSize::from((start + delta) as u32);
    let line_col = LineIndex::new(source).line_col(offset);
    Position::with_offset(line_col.line as usize, line_col.col as usize, offset)
}
