//! Hand-written parser for Go source
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Semicolon insertion → significant tokens
//!     ↓
//! Parser (recursive descent) → typed AST (`syntax::ast`)
//! ```
//!
//! The parser never stops at the first problem: it records a [`SyntaxError`]
//! and resynchronizes at the next statement or declaration.

#[allow(clippy::module_inception)]
mod parser;

mod errors;
mod grammar;
pub mod keywords;
mod lexer;
mod syntax_kind;

pub use errors::SyntaxError;
pub use lexer::{Lexer, Token, significant_tokens, tokenize};
pub use parser::{Parse, parse_file};
pub use syntax_kind::SyntaxKind;

#[cfg(test)]
mod tests;
