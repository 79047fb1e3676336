//! Recursive descent parser for Go
//!
//! Builds the typed AST from the significant token stream.
//! Errors are collected with statement- and declaration-level recovery so a
//! single run reports every problem it can find.

use super::errors::SyntaxError;
use super::lexer::{Token, significant_tokens};
use super::syntax_kind::SyntaxKind;
use crate::base::{LineIndex, Position, Span};
use crate::syntax::ast::{File, Ident};
use text_size::{TextRange, TextSize};

/// Parse result containing the tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub file: File,
    pub errors: Vec<SyntaxError>,
    pub line_index: LineIndex,
}

impl Parse {
    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse Go source text into a [`File`]
pub fn parse_file(input: &str) -> Parse {
    let line_index = LineIndex::new(input);
    let (file, errors) = {
        let mut parser = Parser::new(input, &line_index);
        let file = parser.parse_source_file();
        (file, parser.errors)
    };
    Parse {
        file,
        errors,
        line_index,
    }
}

pub(crate) type PResult<T> = Result<T, SyntaxError>;

/// The parser state
pub(crate) struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    line_index: &'a LineIndex,
    pub(super) errors: Vec<SyntaxError>,
    /// Composite literals of bare type names are allowed while this is >= 0;
    /// control clause headers set it to -1.
    pub(super) expr_level: i32,
    prev_end: TextSize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, line_index: &'a LineIndex) -> Self {
        let mut tokens = significant_tokens(input);
        tokens.push(Token {
            kind: SyntaxKind::EOF,
            text: "",
            offset: TextSize::of(input),
        });
        Self {
            tokens,
            pos: 0,
            line_index,
            errors: Vec::new(),
            expr_level: 0,
            prev_end: TextSize::new(0),
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    pub(super) fn current(&self) -> &Token<'a> {
        let last = self.tokens.len() - 1;
        &self.tokens[self.pos.min(last)]
    }

    pub(super) fn current_kind(&self) -> SyntaxKind {
        self.current().kind
    }

    pub(super) fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    pub(super) fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    pub(super) fn at_eof(&self) -> bool {
        self.at(SyntaxKind::EOF)
    }

    /// Look ahead `n` tokens (0 = current)
    pub(super) fn nth(&self, n: usize) -> SyntaxKind {
        self.nth_at(self.pos + n)
    }

    pub(super) fn nth_at(&self, index: usize) -> SyntaxKind {
        self.tokens
            .get(index)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::EOF)
    }

    pub(super) fn token_index(&self) -> usize {
        self.pos
    }

    /// Index just past the bracket that closes the `[` / `(` / `{` at `open`.
    pub(super) fn matching_close(&self, open: usize) -> usize {
        let mut depth = 0usize;
        let mut index = open;
        while index < self.tokens.len() {
            match self.tokens[index].kind {
                SyntaxKind::L_BRACKET | SyntaxKind::L_PAREN | SyntaxKind::L_BRACE => depth += 1,
                SyntaxKind::R_BRACKET | SyntaxKind::R_PAREN | SyntaxKind::R_BRACE => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return index + 1;
                    }
                }
                SyntaxKind::EOF => return index,
                _ => {}
            }
            index += 1;
        }
        index
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    pub(super) fn bump(&mut self) -> Token<'a> {
        let token = self.current().clone();
        if token.kind != SyntaxKind::EOF {
            self.pos += 1;
            // Inserted semicolons do not extend the previous node
            if !token.text.is_empty() {
                self.prev_end = token.end();
            }
        }
        token
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(super) fn expect(&mut self, kind: SyntaxKind) -> PResult<Token<'a>> {
        if self.at(kind) {
            Ok(self.bump())
        } else {
            Err(self.error_here(format!(
                "expected {}, found {}",
                kind.describe(),
                self.describe_current()
            )))
        }
    }

    pub(super) fn expect_ident(&mut self) -> PResult<Ident> {
        let token = self.expect(SyntaxKind::IDENT)?;
        Ok(self.ident_from(&token))
    }

    /// Statement terminator: `;`, or nothing before a closing `)` / `}`.
    pub(super) fn expect_semicolon(&mut self) -> PResult<()> {
        if self.eat(SyntaxKind::SEMICOLON)
            || self.at_any(&[SyntaxKind::R_PAREN, SyntaxKind::R_BRACE, SyntaxKind::EOF])
        {
            Ok(())
        } else {
            Err(self.error_here(format!(
                "expected ';' or newline, found {}",
                self.describe_current()
            )))
        }
    }

    // =========================================================================
    // Positions
    // =========================================================================

    pub(super) fn position(&self, offset: TextSize) -> Position {
        let lc = self.line_index.line_col(offset);
        Position::with_offset(lc.line as usize, lc.col as usize, offset)
    }

    /// Start position of the current token
    pub(super) fn start(&self) -> Position {
        self.position(self.current().offset)
    }

    /// Span from `start` to the end of the last consumed token
    pub(super) fn span_from(&self, start: Position) -> Span {
        let end = self.position(self.prev_end.max(start.offset));
        Span::new(start, end)
    }

    pub(super) fn ident_from(&self, token: &Token<'_>) -> Ident {
        let span = Span::new(self.position(token.offset), self.position(token.end()));
        Ident::new(token.text, span)
    }

    pub(super) fn token_span(&self, token: &Token<'_>) -> Span {
        Span::new(self.position(token.offset), self.position(token.end()))
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn describe_current(&self) -> String {
        let token = self.current();
        match token.kind {
            SyntaxKind::SEMICOLON if token.text.is_empty() => "newline".to_string(),
            SyntaxKind::EOF => "end of file".to_string(),
            _ => format!("'{}'", token.text),
        }
    }

    pub(super) fn error_here(&self, message: impl Into<String>) -> SyntaxError {
        let token = self.current();
        let range = TextRange::at(token.offset, TextSize::of(token.text));
        let lc = self.line_index.line_col(token.offset);
        SyntaxError::new(message, range, lc.line as usize, lc.col as usize)
    }

    pub(super) fn unexpected(&self, what: &str) -> SyntaxError {
        self.error_here(format!("expected {what}, found {}", self.describe_current()))
    }

    /// Skip to the start of the next top-level declaration
    pub(super) fn recover_to_decl(&mut self) {
        let start = self.pos;
        let mut depth = 0usize;
        while !self.at_eof() {
            match self.current_kind() {
                SyntaxKind::L_BRACE | SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET => depth += 1,
                SyntaxKind::R_BRACE | SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET => {
                    depth = depth.saturating_sub(1)
                }
                SyntaxKind::FUNC_KW
                | SyntaxKind::TYPE_KW
                | SyntaxKind::VAR_KW
                | SyntaxKind::CONST_KW
                | SyntaxKind::IMPORT_KW
                    if depth == 0 && self.pos > start =>
                {
                    break;
                }
                _ => {}
            }
            self.bump();
        }
    }

    /// Skip to the end of the current statement, leaving a closing `}` alone
    pub(super) fn recover_to_stmt_end(&mut self) {
        let start = self.pos;
        let mut depth = 0usize;
        while !self.at_eof() {
            match self.current_kind() {
                SyntaxKind::L_BRACE | SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET => depth += 1,
                SyntaxKind::R_BRACE if depth == 0 => {
                    // Always make progress
                    if self.pos == start {
                        self.bump();
                    }
                    return;
                }
                SyntaxKind::R_BRACE | SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET => {
                    depth = depth.saturating_sub(1)
                }
                SyntaxKind::SEMICOLON if depth == 0 => {
                    self.bump();
                    return;
                }
                _ => {}
            }
            self.bump();
        }
    }

    pub(super) fn push_error(&mut self, error: SyntaxError) {
        self.errors.push(error);
    }
}
