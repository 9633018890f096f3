//! Event sinks.
//!
//! A sink receives the parse events as the parser produces them. The
//! [`TreeSink`] turns them into a `rowan` green tree.

use crate::lexer::Token;
use crate::parser::event::Rule;
use crate::parser::SyntaxError;
use crate::syntax::SyntaxKind;

/// Consumer of parse events.
///
/// Events arrive in the order productions are attempted: `commence` and
/// `accept_terminal` in pre-order, the matching `finish` in post-order.
pub trait EventSink {
    /// A rule has started.
    fn commence(&mut self, rule: Rule);

    /// A rule has completed.
    fn finish(&mut self, rule: Rule);

    /// A terminal matched the production being parsed.
    fn accept_terminal(&mut self, token: &Token);

    /// The input does not match the grammar at `token`.
    ///
    /// Called at most once per parse. The parse is over once this returns:
    /// no further events are delivered and the returned error is handed back
    /// to the caller of the parse.
    fn report_error(&mut self, token: &Token, expected: &str) -> SyntaxError {
        SyntaxError::new(token, expected)
    }
}

impl<K: EventSink + ?Sized> EventSink for &mut K {
    fn commence(&mut self, rule: Rule) {
        (**self).commence(rule);
    }

    fn finish(&mut self, rule: Rule) {
        (**self).finish(rule);
    }

    fn accept_terminal(&mut self, token: &Token) {
        (**self).accept_terminal(token);
    }

    fn report_error(&mut self, token: &Token, expected: &str) -> SyntaxError {
        (**self).report_error(token, expected)
    }
}

/// Builds a syntax tree from parser events.
///
/// Every rule becomes a node and every accepted terminal a token, all below a
/// single `Root` node. Rules left open by a failed parse are closed by
/// [`TreeSink::into_green`].
pub struct TreeSink {
    builder: rowan::GreenNodeBuilder<'static>,
    open: usize,
}

impl TreeSink {
    /// Creates a new sink.
    #[must_use]
    pub fn new() -> Self {
        let mut builder = rowan::GreenNodeBuilder::new();
        builder.start_node(SyntaxKind::Root.into());
        Self { builder, open: 0 }
    }

    /// Consumes the sink and returns the green tree.
    #[must_use]
    pub fn into_green(mut self) -> rowan::GreenNode {
        for _ in 0..self.open {
            self.builder.finish_node();
        }
        self.builder.finish_node();
        self.builder.finish()
    }
}

impl Default for TreeSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for TreeSink {
    fn commence(&mut self, rule: Rule) {
        self.builder.start_node(SyntaxKind::from(rule).into());
        self.open += 1;
    }

    fn finish(&mut self, _rule: Rule) {
        self.builder.finish_node();
        self.open -= 1;
    }

    fn accept_terminal(&mut self, token: &Token) {
        self.builder
            .token(SyntaxKind::from(token.kind).into(), token.text());
    }
}
