//! Token definitions for the statement language.
//!
//! This module defines the closed alphabet of terminal symbols the parser
//! matches against. The token kinds are designed to work with both the `logos`
//! lexer generator and the `rowan` syntax tree built by [`crate::TreeSink`].

use logos::Logos;

/// All token kinds of the statement language.
///
/// Token kinds are divided into categories:
/// - Trivia (whitespace, comments) - skipped by the lexer before parsing
/// - Punctuation and operators
/// - Keywords (reserved words, always lowercase)
/// - Constants and identifiers
/// - Special tokens (errors, end of file)
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    /// Whitespace (spaces, tabs, newlines)
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    /// Single-line comment: // ...
    #[regex(r"//[^\r\n]*", allow_greedy = true)]
    LineComment,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    /// `;`
    #[token(";")]
    Semicolon,

    /// `,`
    #[token(",")]
    Comma,

    /// `(`
    #[token("(")]
    LParen,

    /// `)`
    #[token(")")]
    RParen,

    /// `:=`
    #[token(":=")]
    Assign,

    // =========================================================================
    // ARITHMETIC OPERATORS
    // =========================================================================
    /// `+`
    #[token("+")]
    Plus,

    /// `-`
    #[token("-")]
    Minus,

    /// `*`
    #[token("*")]
    Star,

    /// `/`
    #[token("/")]
    Slash,

    // =========================================================================
    // RELATIONAL OPERATORS
    // =========================================================================
    /// `>`
    #[token(">")]
    Greater,

    /// `>=`
    #[token(">=")]
    GreaterEqual,

    /// `=`
    #[token("=")]
    Equal,

    /// `!=`
    #[token("!=")]
    NotEqual,

    /// `<`
    #[token("<")]
    Less,

    /// `<=`
    #[token("<=")]
    LessEqual,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    /// `begin`
    #[token("begin")]
    KwBegin,

    /// `end`
    #[token("end")]
    KwEnd,

    /// `if`
    #[token("if")]
    KwIf,

    /// `then`
    #[token("then")]
    KwThen,

    /// `else`
    #[token("else")]
    KwElse,

    /// `while`
    #[token("while")]
    KwWhile,

    /// `loop`
    #[token("loop")]
    KwLoop,

    /// `call`
    #[token("call")]
    KwCall,

    /// `until`
    #[token("until")]
    KwUntil,

    /// `do`
    #[token("do")]
    KwDo,

    /// `for`
    #[token("for")]
    KwFor,

    // =========================================================================
    // CONSTANTS AND IDENTIFIERS
    // =========================================================================
    /// Identifier: `counter`, `x1`, `total_sum`
    #[regex(r"[A-Za-z][A-Za-z0-9_]*")]
    Ident,

    /// Number constant: `42`, `3.14`
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    NumberLit,

    /// String constant on a single line: `"hello"`
    #[regex(r#""[^"\r\n]*""#)]
    StringLit,

    // =========================================================================
    // SPECIAL
    // =========================================================================
    /// Unrecognised input.
    Error,

    /// End of input. Never produced by `logos`; token sources yield it once
    /// their input is exhausted.
    Eof,
}

impl TokenKind {
    /// Returns `true` if this token is trivia (whitespace or comment).
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::LineComment)
    }

    /// Returns `true` if tokens of this kind carry their source lexeme.
    pub fn has_value(self) -> bool {
        matches!(
            self,
            Self::Ident | Self::NumberLit | Self::StringLit | Self::Error
        )
    }

    /// Returns `true` for the relational operators accepted by a condition.
    pub fn is_relational_op(self) -> bool {
        matches!(
            self,
            Self::Greater
                | Self::GreaterEqual
                | Self::Equal
                | Self::NotEqual
                | Self::Less
                | Self::LessEqual
        )
    }

    /// Returns the human-readable name of the symbol, as used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Whitespace => "whitespace",
            Self::LineComment => "comment",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Assign => ":=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::KwBegin => "begin",
            Self::KwEnd => "end",
            Self::KwIf => "if",
            Self::KwThen => "then",
            Self::KwElse => "else",
            Self::KwWhile => "while",
            Self::KwLoop => "loop",
            Self::KwCall => "call",
            Self::KwUntil => "until",
            Self::KwDo => "do",
            Self::KwFor => "for",
            Self::Ident => "identifier",
            Self::NumberLit => "number constant",
            Self::StringLit => "string constant",
            Self::Error => "error",
            Self::Eof => "end of file",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
