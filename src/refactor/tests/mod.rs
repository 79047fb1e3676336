
use text_size::TextSize;

use crate::base::{LineIndex, Position};
use crate::parser::parse_file;
use crate::syntax::ast::File;

fn parse_ok(source: &str) -> File {
    let parse = parse_file(source);
    assert!(parse.ok(), "unexpected errors: {:?}", parse.errors);
    parse.file
}

/// Position `delta` bytes into the first occurrence of `needle`
fn at(source: &str, needle: &str, delta: usize) -> Position {
    let start = source
        .find(needle)
        .unwrap_or_else(|| panic!("'{needle}' not in source"));
    let offset = TextSize::from((start + delta) as u32);
    let line_col = LineIndex::new(source).line_col(offset);
    Position::with_offset(line_col.line as usize, line_col.col as usize, offset)
}
