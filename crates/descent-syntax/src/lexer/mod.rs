//! Lexer for the statement language.
//!
//! This module provides a lexer that turns source text into the stream of
//! tokens consumed by the parser. Trivia is dropped here; every token keeps
//! the 1-based line it started on for diagnostics.

mod tokens;

pub use tokens::TokenKind;

use logos::Logos;
use smol_str::SmolStr;
use tracing::debug;

/// A token produced by a token source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The 1-based source line the token starts on.
    pub line: u32,
    /// The source lexeme, for identifiers, constants and error tokens.
    pub text: Option<SmolStr>,
}

impl Token {
    /// Creates a token without a lexeme.
    #[must_use]
    pub fn new(kind: TokenKind, line: u32) -> Self {
        Self {
            kind,
            line,
            text: None,
        }
    }

    /// Creates a token carrying its source lexeme.
    #[must_use]
    pub fn with_text(kind: TokenKind, line: u32, text: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            line,
            text: Some(text.into()),
        }
    }

    /// Creates an end-of-file token.
    #[must_use]
    pub fn eof(line: u32) -> Self {
        Self::new(TokenKind::Eof, line)
    }

    /// Returns the text of the token: its lexeme if it has one, otherwise the
    /// spelling of its symbol.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_else(|| self.kind.name())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{} {text}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Lexer for statement-language source code.
///
/// The lexer is an iterator over non-trivia tokens. Unrecognised characters
/// are returned as `TokenKind::Error` rather than aborting the scan.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    line: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            line: 1,
        }
    }

    /// Returns the line the lexer is currently positioned on.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let kind = self.inner.next()?.unwrap_or(TokenKind::Error);
            let text = self.inner.slice();
            let line = self.line;
            for _ in text.bytes().filter(|&byte| byte == b'\n') {
                self.line += 1;
            }

            if kind.is_trivia() {
                continue;
            }
            if kind == TokenKind::Error {
                debug!(line, text, "unrecognised input");
            }

            let token = if kind.has_value() {
                Token::with_text(kind, line, text)
            } else {
                Token::new(kind, line)
            };
            return Some(token);
        }
    }
}

/// Lex the entire source and return all non-trivia tokens.
///
/// The returned tokens do not include an end-of-file token; the parser
/// receives one from the token source once the lexer is exhausted.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
