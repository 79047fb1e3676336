//! Grammar productions, split by construct family.
//!
//! Each file adds methods to [`Parser`](super::parser::Parser):
//! declarations, types, statements and expressions.

mod decls;
mod exprs;
mod stmts;
mod types;

use super::syntax_kind::SyntaxKind;

/// Tokens that can begin a type
pub(super) const TYPE_START: &[SyntaxKind] = &[
    SyntaxKind::IDENT,
    SyntaxKind::STAR,
    SyntaxKind::L_BRACKET,
    SyntaxKind::L_PAREN,
    SyntaxKind::MAP_KW,
    SyntaxKind::CHAN_KW,
    SyntaxKind::ARROW,
    SyntaxKind::FUNC_KW,
    SyntaxKind::STRUCT_KW,
    SyntaxKind::INTERFACE_KW,
];

/// Tokens that close an expression list or statement
pub(super) const LIST_END: &[SyntaxKind] = &[
    SyntaxKind::SEMICOLON,
    SyntaxKind::R_BRACE,
    SyntaxKind::R_PAREN,
    SyntaxKind::EOF,
];
