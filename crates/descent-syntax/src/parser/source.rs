//! Token sources for the parser.
//!
//! A token source hands out one token per call and never takes one back.
//! The parser holds exactly one of them at a time in its [`Lookahead`].

use crate::lexer::{Lexer, Token, TokenKind};

/// Pull-based producer of tokens.
///
/// Once the input is exhausted every call returns an end-of-file token.
pub trait TokenSource {
    /// Returns the next token.
    fn next_token(&mut self) -> Token;
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        match self.next() {
            Some(token) => token,
            None => Token::eof(self.line()),
        }
    }
}

/// Adapts any sequence of already-built tokens into a [`TokenSource`].
///
/// The end-of-file token carries the line of the last token produced.
pub struct TokenStream<I> {
    tokens: I,
    line: u32,
}

impl<I: Iterator<Item = Token>> TokenStream<I> {
    /// Creates a stream over `tokens`.
    pub fn new(tokens: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            tokens: tokens.into_iter(),
            line: 1,
        }
    }
}

impl<I: Iterator<Item = Token>> TokenSource for TokenStream<I> {
    fn next_token(&mut self) -> Token {
        match self.tokens.next() {
            Some(token) => {
                self.line = token.line;
                token
            }
            None => Token::eof(self.line),
        }
    }
}

/// The single current-token slot threaded through the recursive descent.
pub(crate) struct Lookahead<S> {
    source: S,
    current: Token,
}

impl<S: TokenSource> Lookahead<S> {
    /// Primes the slot with the first token of `source`.
    pub(crate) fn new(mut source: S) -> Self {
        let current = source.next_token();
        Self { source, current }
    }

    /// Returns the current token.
    pub(crate) fn current(&self) -> &Token {
        &self.current
    }

    /// Returns the current token kind.
    pub(crate) fn kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Replaces the current token with the next one from the source.
    pub(crate) fn advance(&mut self) {
        self.current = self.source.next_token();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_yields_eof_forever() {
        let mut lexer = Lexer::new("x\n");
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
        assert_eq!(lexer.next_token(), Token::eof(2));
        assert_eq!(lexer.next_token(), Token::eof(2));
    }

    #[test]
    fn test_stream_eof_keeps_last_line() {
        let mut stream = TokenStream::new(vec![
            Token::new(TokenKind::KwBegin, 1),
            Token::new(TokenKind::KwEnd, 3),
        ]);
        stream.next_token();
        stream.next_token();
        assert_eq!(stream.next_token(), Token::eof(3));
    }

    #[test]
    fn test_lookahead_replaces_slot() {
        let mut lookahead = Lookahead::new(TokenStream::new(vec![
            Token::new(TokenKind::KwBegin, 1),
            Token::new(TokenKind::KwEnd, 1),
        ]));
        assert_eq!(lookahead.kind(), TokenKind::KwBegin);
        lookahead.advance();
        assert_eq!(lookahead.current(), &Token::new(TokenKind::KwEnd, 1));
        lookahead.advance();
        assert_eq!(lookahead.kind(), TokenKind::Eof);
    }
}
