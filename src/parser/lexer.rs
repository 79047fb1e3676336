//! Logos-based lexer for Go
//!
//! Fast tokenization using the logos crate, followed by Go's automatic
//! semicolon insertion.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }

    pub fn end(&self) -> TextSize {
        self.offset + TextSize::of(self.text)
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.inner.span().start as u32);

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec, trivia included
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Tokenize and apply semicolon insertion, dropping trivia.
///
/// A newline (or a block comment spanning lines, or the end of input) turns
/// into a `SEMICOLON` token whenever the preceding significant token could end
/// a statement. The inserted token has empty text and sits at the newline.
pub fn significant_tokens(input: &str) -> Vec<Token<'_>> {
    let mut out: Vec<Token<'_>> = Vec::new();
    let mut needs_semicolon = false;

    for token in Lexer::new(input) {
        let breaks_line = match token.kind {
            SyntaxKind::NEWLINE => true,
            SyntaxKind::BLOCK_COMMENT => token.text.contains('\n'),
            _ => false,
        };
        if breaks_line {
            if needs_semicolon {
                out.push(Token {
                    kind: SyntaxKind::SEMICOLON,
                    text: "",
                    offset: token.offset,
                });
                needs_semicolon = false;
            }
            continue;
        }
        if token.kind.is_trivia() {
            continue;
        }
        needs_semicolon = token.kind.ends_statement();
        out.push(token);
    }

    if needs_semicolon {
        out.push(Token {
            kind: SyntaxKind::SEMICOLON,
            text: "",
            offset: TextSize::of(input),
        });
    }
    out
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r]+")]
    Whitespace,

    #[token("\n")]
    Newline,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*")]
    Ident,

    #[regex(r"0[xX][0-9a-fA-F_]+")]
    #[regex(r"0[bB][01_]+")]
    #[regex(r"0[oO][0-7_]+")]
    #[regex(r"[0-9][0-9_]*")]
    Int,

    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+")]
    Float,

    #[regex(r"[0-9][0-9_]*(\.[0-9_]*)?([eE][+-]?[0-9]+)?i")]
    Imag,

    #[regex(r"'([^'\\\n]|\\[^\n][^'\n]*)'")]
    Char,

    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    #[regex(r"`[^`]*`")]
    String,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (must come before single-char)
    // =========================================================================
    #[token("&^=")]
    AmpCaretEq,
    #[token("<<=")]
    ShlEq,
    #[token(">>=")]
    ShrEq,
    #[token("...")]
    Ellipsis,
    #[token(":=")]
    ColonEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    BangEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("&^")]
    AmpCaret,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("<-")]
    Arrow,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("%=")]
    PercentEq,
    #[token("&=")]
    AmpEq,
    #[token("|=")]
    PipeEq,
    #[token("^=")]
    CaretEq,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("break")]
    BreakKw,
    #[token("case")]
    CaseKw,
    #[token("chan")]
    ChanKw,
    #[token("const")]
    ConstKw,
    #[token("continue")]
    ContinueKw,
    #[token("default")]
    DefaultKw,
    #[token("defer")]
    DeferKw,
    #[token("else")]
    ElseKw,
    #[token("fallthrough")]
    FallthroughKw,
    #[token("for")]
    ForKw,
    #[token("func")]
    FuncKw,
    #[token("go")]
    GoKw,
    #[token("goto")]
    GotoKw,
    #[token("if")]
    IfKw,
    #[token("import")]
    ImportKw,
    #[token("interface")]
    InterfaceKw,
    #[token("map")]
    MapKw,
    #[token("package")]
    PackageKw,
    #[token("range")]
    RangeKw,
    #[token("return")]
    ReturnKw,
    #[token("select")]
    SelectKw,
    #[token("struct")]
    StructKw,
    #[token("switch")]
    SwitchKw,
    #[token("type")]
    TypeKw,
    #[token("var")]
    VarKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            Whitespace => SyntaxKind::WHITESPACE,
            Newline => SyntaxKind::NEWLINE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,

            Ident => SyntaxKind::IDENT,
            Int => SyntaxKind::INT,
            Float => SyntaxKind::FLOAT,
            Imag => SyntaxKind::IMAG,
            Char => SyntaxKind::CHAR,
            String => SyntaxKind::STRING,

            // Multi-char punctuation
            AmpCaretEq => SyntaxKind::AMP_CARET_EQ,
            ShlEq => SyntaxKind::SHL_EQ,
            ShrEq => SyntaxKind::SHR_EQ,
            Ellipsis => SyntaxKind::ELLIPSIS,
            ColonEq => SyntaxKind::COLON_EQ,
            EqEq => SyntaxKind::EQ_EQ,
            BangEq => SyntaxKind::BANG_EQ,
            LtEq => SyntaxKind::LT_EQ,
            GtEq => SyntaxKind::GT_EQ,
            Shl => SyntaxKind::SHL,
            Shr => SyntaxKind::SHR,
            AmpCaret => SyntaxKind::AMP_CARET,
            AmpAmp => SyntaxKind::AMP_AMP,
            PipePipe => SyntaxKind::PIPE_PIPE,
            Arrow => SyntaxKind::ARROW,
            PlusPlus => SyntaxKind::PLUS_PLUS,
            MinusMinus => SyntaxKind::MINUS_MINUS,
            PlusEq => SyntaxKind::PLUS_EQ,
            MinusEq => SyntaxKind::MINUS_EQ,
            StarEq => SyntaxKind::STAR_EQ,
            SlashEq => SyntaxKind::SLASH_EQ,
            PercentEq => SyntaxKind::PERCENT_EQ,
            AmpEq => SyntaxKind::AMP_EQ,
            PipeEq => SyntaxKind::PIPE_EQ,
            CaretEq => SyntaxKind::CARET_EQ,

            // Single-char punctuation
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            Semicolon => SyntaxKind::SEMICOLON,
            Colon => SyntaxKind::COLON,
            Dot => SyntaxKind::DOT,
            Comma => SyntaxKind::COMMA,
            Eq => SyntaxKind::EQ,
            Lt => SyntaxKind::LT,
            Gt => SyntaxKind::GT,
            Bang => SyntaxKind::BANG,
            Tilde => SyntaxKind::TILDE,
            Plus => SyntaxKind::PLUS,
            Minus => SyntaxKind::MINUS,
            Star => SyntaxKind::STAR,
            Slash => SyntaxKind::SLASH,
            Percent => SyntaxKind::PERCENT,
            Amp => SyntaxKind::AMP,
            Pipe => SyntaxKind::PIPE,
            Caret => SyntaxKind::CARET,

            // Keywords
            BreakKw => SyntaxKind::BREAK_KW,
            CaseKw => SyntaxKind::CASE_KW,
            ChanKw => SyntaxKind::CHAN_KW,
            ConstKw => SyntaxKind::CONST_KW,
            ContinueKw => SyntaxKind::CONTINUE_KW,
            DefaultKw => SyntaxKind::DEFAULT_KW,
            DeferKw => SyntaxKind::DEFER_KW,
            ElseKw => SyntaxKind::ELSE_KW,
            FallthroughKw => SyntaxKind::FALLTHROUGH_KW,
            ForKw => SyntaxKind::FOR_KW,
            FuncKw => SyntaxKind::FUNC_KW,
            GoKw => SyntaxKind::GO_KW,
            GotoKw => SyntaxKind::GOTO_KW,
            IfKw => SyntaxKind::IF_KW,
            ImportKw => SyntaxKind::IMPORT_KW,
            InterfaceKw => SyntaxKind::INTERFACE_KW,
            MapKw => SyntaxKind::MAP_KW,
            PackageKw => SyntaxKind::PACKAGE_KW,
            RangeKw => SyntaxKind::RANGE_KW,
            ReturnKw => SyntaxKind::RETURN_KW,
            SelectKw => SyntaxKind::SELECT_KW,
            StructKw => SyntaxKind::STRUCT_KW,
            SwitchKw => SyntaxKind::SWITCH_KW,
            TypeKw => SyntaxKind::TYPE_KW,
            VarKw => SyntaxKind::VAR_KW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<SyntaxKind> {
        significant_tokens(input).iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_lex_package() {
        let tokens: Vec<_> = Lexer::new("package main").collect();
        assert_eq!(tokens.len(), 3); // package, whitespace, main
        assert_eq!(tokens[0].kind, SyntaxKind::PACKAGE_KW);
        assert_eq!(tokens[1].kind, SyntaxKind::WHITESPACE);
        assert_eq!(tokens[2].kind, SyntaxKind::IDENT);
    }

    #[test]
    fn test_lex_short_declaration() {
        assert_eq!(
            kinds("x := 1"),
            vec![
                SyntaxKind::IDENT,
                SyntaxKind::COLON_EQ,
                SyntaxKind::INT,
                SyntaxKind::SEMICOLON,
            ]
        );
    }

    #[test]
    fn test_semicolon_inserted_after_closing_brace() {
        let kinds = kinds("func f() {\n}\n");
        assert_eq!(kinds.last(), Some(&SyntaxKind::SEMICOLON));
        assert_eq!(kinds.iter().filter(|k| **k == SyntaxKind::SEMICOLON).count(), 1);
    }

    #[test]
    fn test_no_semicolon_after_operator_at_line_end() {
        let kinds = kinds("a +\nb");
        assert_eq!(
            kinds,
            vec![
                SyntaxKind::IDENT,
                SyntaxKind::PLUS,
                SyntaxKind::IDENT,
                SyntaxKind::SEMICOLON,
            ]
        );
    }

    #[test]
    fn test_multiline_block_comment_acts_as_newline() {
        let kinds = kinds("return /* a\nb */ x");
        assert_eq!(kinds[0], SyntaxKind::RETURN_KW);
        assert_eq!(kinds[1], SyntaxKind::SEMICOLON);
    }

    #[test]
    fn test_lex_literals() {
        let tokens = significant_tokens(r#"3.14 0x1F 2i 'a' '\n' "s\"q" `raw`"#);
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            &kinds[..7],
            &[
                SyntaxKind::FLOAT,
                SyntaxKind::INT,
                SyntaxKind::IMAG,
                SyntaxKind::CHAR,
                SyntaxKind::CHAR,
                SyntaxKind::STRING,
                SyntaxKind::STRING,
            ]
        );
    }

    #[test]
    fn test_lex_operators() {
        assert_eq!(
            kinds("a &^= b <- c ... d"),
            vec![
                SyntaxKind::IDENT,
                SyntaxKind::AMP_CARET_EQ,
                SyntaxKind::IDENT,
                SyntaxKind::ARROW,
                SyntaxKind::IDENT,
                SyntaxKind::ELLIPSIS,
                SyntaxKind::IDENT,
                SyntaxKind::SEMICOLON,
            ]
        );
    }

    #[test]
    fn test_offsets_track_source() {
        let tokens = significant_tokens("var  x");
        assert_eq!(tokens[1].offset, TextSize::new(5));
        assert_eq!(tokens[1].text, "x");
    }
}
