//! Token kinds produced by the lexer.

/// All token kinds in Go source
///
/// Trivia tokens (whitespace, newlines, comments) are produced by the lexer
/// and filtered out before parsing; newlines may first turn into implicit
/// semicolons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,
    NEWLINE,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,      // name
    INT,        // 42, 0x2A
    FLOAT,      // 3.14
    IMAG,       // 2i
    CHAR,       // 'a'
    STRING,     // "hello" or `raw`

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,        // {
    R_BRACE,        // }
    L_BRACKET,      // [
    R_BRACKET,      // ]
    L_PAREN,        // (
    R_PAREN,        // )
    SEMICOLON,      // ; (explicit or inserted)
    COLON,          // :
    COLON_EQ,       // :=
    DOT,            // .
    ELLIPSIS,       // ...
    COMMA,          // ,
    EQ,             // =
    EQ_EQ,          // ==
    BANG_EQ,        // !=
    LT,             // <
    GT,             // >
    LT_EQ,          // <=
    GT_EQ,          // >=
    BANG,           // !
    TILDE,          // ~
    PLUS,           // +
    MINUS,          // -
    STAR,           // *
    SLASH,          // /
    PERCENT,        // %
    AMP,            // &
    PIPE,           // |
    CARET,          // ^
    SHL,            // <<
    SHR,            // >>
    AMP_CARET,      // &^
    AMP_AMP,        // &&
    PIPE_PIPE,      // ||
    ARROW,          // <-
    PLUS_PLUS,      // ++
    MINUS_MINUS,    // --
    PLUS_EQ,        // +=
    MINUS_EQ,       // -=
    STAR_EQ,        // *=
    SLASH_EQ,       // /=
    PERCENT_EQ,     // %=
    AMP_EQ,         // &=
    PIPE_EQ,        // |=
    CARET_EQ,       // ^=
    SHL_EQ,         // <<=
    SHR_EQ,         // >>=
    AMP_CARET_EQ,   // &^=

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    BREAK_KW,
    CASE_KW,
    CHAN_KW,
    CONST_KW,
    CONTINUE_KW,
    DEFAULT_KW,
    DEFER_KW,
    ELSE_KW,
    FALLTHROUGH_KW,
    FOR_KW,
    FUNC_KW,
    GO_KW,
    GOTO_KW,
    IF_KW,
    IMPORT_KW,
    INTERFACE_KW,
    MAP_KW,
    PACKAGE_KW,
    RANGE_KW,
    RETURN_KW,
    SELECT_KW,
    STRUCT_KW,
    SWITCH_KW,
    TYPE_KW,
    VAR_KW,

    // Special
    ERROR,
    EOF,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::NEWLINE | Self::LINE_COMMENT | Self::BLOCK_COMMENT
        )
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::BREAK_KW as u16) && (self as u16) <= (Self::VAR_KW as u16)
    }

    /// Check if this is a literal
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::INT | Self::FLOAT | Self::IMAG | Self::CHAR | Self::STRING
        )
    }

    /// A line ending after a token of this kind gets an implicit semicolon.
    pub fn ends_statement(self) -> bool {
        self == Self::IDENT
            || self.is_literal()
            || matches!(
                self,
                Self::BREAK_KW
                    | Self::CONTINUE_KW
                    | Self::FALLTHROUGH_KW
                    | Self::RETURN_KW
                    | Self::PLUS_PLUS
                    | Self::MINUS_MINUS
                    | Self::R_PAREN
                    | Self::R_BRACKET
                    | Self::R_BRACE
            )
    }

    /// Human-readable spelling for diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            Self::IDENT => "identifier",
            Self::INT | Self::FLOAT | Self::IMAG | Self::CHAR | Self::STRING => "literal",
            Self::L_BRACE => "'{'",
            Self::R_BRACE => "'}'",
            Self::L_BRACKET => "'['",
            Self::R_BRACKET => "']'",
            Self::L_PAREN => "'('",
            Self::R_PAREN => "')'",
            Self::SEMICOLON => "';' or newline",
            Self::COLON => "':'",
            Self::COLON_EQ => "':='",
            Self::DOT => "'.'",
            Self::COMMA => "','",
            Self::EQ => "'='",
            Self::EOF => "end of file",
            Self::ERROR => "invalid character",
            _ if self.is_keyword() => "keyword",
            _ => "operator",
        }
    }
}
