//! Condition and expression parsing.
//!
//! Expressions and terms are right recursive: after `+`/`-` a whole
//! expression follows, after `*`/`/` a whole term. `a - b - c` therefore nests
//! as `a - (b - c)` in the event stream.

use crate::lexer::TokenKind;
use crate::parser::event::Rule;
use crate::parser::sink::EventSink;
use crate::parser::source::TokenSource;

use super::super::{Abort, Parsed, Parser};

impl<S: TokenSource, K: EventSink> Parser<S, K> {
    /// Parse `identifier operator (identifier | number | string)`.
    pub(crate) fn condition(&mut self) -> Parsed {
        self.rule(Rule::Condition, |p| {
            p.accept(TokenKind::Ident)?;
            p.conditional_operator()?;
            match p.current() {
                kind @ (TokenKind::Ident | TokenKind::NumberLit | TokenKind::StringLit) => {
                    p.accept(kind)
                }
                _ => Err(Abort::Mismatch),
            }
        })
    }

    pub(crate) fn conditional_operator(&mut self) -> Parsed {
        self.rule(Rule::ConditionalOperator, |p| match p.current() {
            kind if kind.is_relational_op() => p.accept(kind),
            _ => Err(Abort::Mismatch),
        })
    }

    /// Parse `term ((+ | -) expression)?`.
    pub(crate) fn expression(&mut self) -> Parsed {
        self.rule(Rule::Expression, |p| {
            p.term()?;
            match p.current() {
                kind @ (TokenKind::Plus | TokenKind::Minus) => {
                    p.accept(kind)?;
                    Ok(p.expression()?)
                }
                _ => Ok(()),
            }
        })
    }

    /// Parse `factor ((* | /) term)?`.
    pub(crate) fn term(&mut self) -> Parsed {
        self.rule(Rule::Term, |p| {
            p.factor()?;
            match p.current() {
                kind @ (TokenKind::Star | TokenKind::Slash) => {
                    p.accept(kind)?;
                    Ok(p.term()?)
                }
                _ => Ok(()),
            }
        })
    }

    pub(crate) fn factor(&mut self) -> Parsed {
        self.rule(Rule::Factor, |p| match p.current() {
            kind @ (TokenKind::Ident | TokenKind::NumberLit) => p.accept(kind),
            TokenKind::LParen => {
                p.accept(TokenKind::LParen)?;
                p.expression()?;
                p.accept(TokenKind::RParen)
            }
            _ => Err(Abort::Mismatch),
        })
    }
}
