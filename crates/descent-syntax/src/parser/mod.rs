//! Predictive parser for the statement language.
//!
//! This module provides a hand-written LL(1) recursive descent parser. Each
//! grammar rule is one method; every method decides its production from a
//! single token of lookahead and never backtracks.
//!
//! # Architecture
//!
//! 1. **Token source**: pulls tokens one at a time (see [`TokenSource`])
//! 2. **Parsing**: reports commence/accept/finish events to an [`EventSink`]
//! 3. **Consumers**: record the events ([`EventLog`]) or build a `rowan`
//!    tree from them ([`TreeSink`])
//!
//! # Failure
//!
//! There is no error recovery. The first mismatch is reported once, by the
//! innermost rule in progress, and ends the parse. Input nested deeper than
//! [`MAX_DEPTH`] rules fails the same way.

#![allow(clippy::module_inception)]

pub mod event;
pub mod grammar;
mod parser;
mod sink;
mod source;

pub use event::{Event, EventLog, RenderOptions, Rule};
pub use parser::{parse, parse_tokens, MAX_DEPTH};
pub(crate) use parser::{Abort, Parsed, Parser};
pub use sink::{EventSink, TreeSink};
pub use source::{TokenSource, TokenStream};

use smol_str::SmolStr;
use thiserror::Error;

use crate::lexer::{Token, TokenKind};
use crate::syntax::SyntaxNode;

/// Result of parsing source text.
#[derive(Debug)]
pub struct Parse {
    /// The root syntax node.
    green_node: rowan::GreenNode,
    /// The error that ended the parse, if any.
    error: Option<SyntaxError>,
}

impl Parse {
    /// Returns the root syntax node.
    #[must_use]
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green_node.clone())
    }

    /// Returns the error that ended the parse.
    #[must_use]
    pub fn error(&self) -> Option<&SyntaxError> {
        self.error.as_ref()
    }

    /// Returns `true` if parsing produced no error.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.error.is_none()
    }
}

/// A syntax error: the input stopped matching the grammar at one token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error at line: {line} | Expected: {expected} | Found: {found}")]
pub struct SyntaxError {
    /// The line of the offending token.
    pub line: u32,
    /// What the innermost rule in progress expected.
    pub expected: SmolStr,
    /// The symbol actually found.
    pub found: TokenKind,
}

impl SyntaxError {
    /// Creates an error for `token` not matching `expected`.
    #[must_use]
    pub fn new(token: &Token, expected: &str) -> Self {
        Self {
            line: token.line,
            expected: SmolStr::new(expected),
            found: token.kind,
        }
    }
}
