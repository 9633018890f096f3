//! Main parser implementation.

use crate::lexer::{Lexer, TokenKind};
use crate::parser::event::Rule;
use crate::parser::sink::{EventSink, TreeSink};
use crate::parser::source::{Lookahead, TokenSource};
use crate::parser::{Parse, SyntaxError};
use drop_bomb::DropBomb;
use tracing::{debug, trace};

/// Parses source text into a syntax tree.
#[must_use]
pub fn parse(text: &str) -> Parse {
    let mut sink = TreeSink::new();
    let result = parse_tokens(Lexer::new(text), &mut sink);

    Parse {
        green_node: sink.into_green(),
        error: result.err(),
    }
}

/// Parses a statement part from `source`, reporting every recognised
/// production to `sink`.
///
/// # Errors
///
/// Returns the syntax error produced by [`EventSink::report_error`] when the
/// tokens do not match the grammar or nest deeper than [`MAX_DEPTH`] rules.
/// No events follow the report.
pub fn parse_tokens<S, K>(source: S, sink: &mut K) -> Result<(), SyntaxError>
where
    S: TokenSource,
    K: EventSink + ?Sized,
{
    Parser::new(source, sink).run()
}

/// Deepest nesting of rules a parse may reach. Entering one more rule is
/// reported as a syntax error instead of growing the call stack further.
pub const MAX_DEPTH: usize = 1024;

/// Why a production stopped.
#[derive(Debug)]
pub(crate) enum Abort {
    /// The lookahead does not fit the production. Not reported yet; the
    /// innermost enclosing rule reports it.
    Mismatch,
    /// Already reported; pass it up untouched.
    Reported(SyntaxError),
}

impl From<SyntaxError> for Abort {
    fn from(error: SyntaxError) -> Self {
        Abort::Reported(error)
    }
}

/// Outcome of a production.
pub(crate) type Step = Result<(), Abort>;

/// Outcome of a whole rule. Any failure has been reported by then.
pub(crate) type Parsed = Result<(), SyntaxError>;

/// The parser state.
pub(crate) struct Parser<S, K> {
    lookahead: Lookahead<S>,
    sink: K,
    depth: usize,
}

/// A commenced rule that still owes its `finish` event.
struct Frame {
    rule: Rule,
    bomb: DropBomb,
}

impl Frame {
    fn complete<S: TokenSource, K: EventSink>(mut self, parser: &mut Parser<S, K>) {
        self.bomb.defuse();
        parser.sink.finish(self.rule);
    }

    fn abandon(mut self) {
        self.bomb.defuse();
    }
}

impl<S: TokenSource, K: EventSink> Parser<S, K> {
    fn new(source: S, sink: K) -> Self {
        Self {
            lookahead: Lookahead::new(source),
            sink,
            depth: 0,
        }
    }

    fn run(mut self) -> Parsed {
        self.statement_part()
    }

    // =========================================================================
    // Helper Methods
    // =========================================================================

    pub(crate) fn current(&self) -> TokenKind {
        self.lookahead.kind()
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.lookahead.kind() == kind
    }

    /// Accepts the lookahead if it is `kind` and advances past it.
    pub(crate) fn accept(&mut self, kind: TokenKind) -> Step {
        if !self.at(kind) {
            trace!(expected = %kind, found = %self.current(), "terminal mismatch");
            return Err(Abort::Mismatch);
        }

        let token = self.lookahead.current();
        trace!(terminal = %token, line = token.line, "accept");
        self.sink.accept_terminal(token);
        self.lookahead.advance();
        Ok(())
    }

    /// Runs `production` between the commence and finish events of `rule`.
    ///
    /// A mismatch inside the production is reported here, with this rule's
    /// description. An error already reported further down passes through.
    /// Either way no finish event is emitted for an aborted rule.
    pub(crate) fn rule(
        &mut self,
        rule: Rule,
        production: impl FnOnce(&mut Self) -> Step,
    ) -> Parsed {
        if self.depth >= MAX_DEPTH {
            let expected = format!("at most {MAX_DEPTH} nested rules");
            return Err(self.report(rule, &expected));
        }

        self.depth += 1;
        let frame = self.commence(rule);
        let outcome = production(self);
        self.depth -= 1;

        match outcome {
            Ok(()) => {
                frame.complete(self);
                Ok(())
            }
            Err(Abort::Mismatch) => {
                frame.abandon();
                Err(self.report(rule, rule.expected()))
            }
            Err(Abort::Reported(error)) => {
                frame.abandon();
                Err(error)
            }
        }
    }

    fn commence(&mut self, rule: Rule) -> Frame {
        self.sink.commence(rule);
        Frame {
            rule,
            bomb: DropBomb::new("rule neither finished nor abandoned"),
        }
    }

    fn report(&mut self, rule: Rule, expected: &str) -> SyntaxError {
        let token = self.lookahead.current();
        debug!(rule = rule.name(), line = token.line, found = %token.kind, "syntax error");
        self.sink.report_error(token, expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Token;
    use crate::parser::event::{Event, EventLog};
    use crate::parser::source::TokenStream;

    fn log(source: &str) -> (EventLog, Result<(), SyntaxError>) {
        let mut log = EventLog::new();
        let result = parse_tokens(Lexer::new(source), &mut log);
        (log, result)
    }

    #[test]
    fn test_parse_single_assignment() {
        let parse = parse("begin x := 1 end");
        assert!(parse.ok(), "error: {:?}", parse.error());
    }

    #[test]
    fn test_parse_every_statement_form() {
        let source = r#"
begin
    x := "text";
    if a = b then y := 1 else y := 2 end if;
    while i < 10 loop i := i + 1 end loop;
    do j := j - 1 until j <= 0;
    for (k := 0; k != 5; k := k + 1) do call p(k) end loop;
    call q(a, b, c)
end
"#;
        let parse = parse(source);
        assert!(parse.ok(), "error: {:?}", parse.error());
    }

    #[test]
    fn test_missing_end_reported_once() {
        let (log, result) = log("begin x := 1");
        let error = result.unwrap_err();

        assert_eq!(log.reported(), 1);
        assert_eq!(error.expected, "statement part");
        assert_eq!(error.found, TokenKind::Eof);
        assert_eq!(
            error.to_string(),
            "Error at line: 1 | Expected: statement part | Found: end of file"
        );
    }

    #[test]
    fn test_no_events_after_report() {
        let (log, result) = log("begin x := end");
        assert!(result.is_err());

        // `end` cannot start a factor; the factor commenced last reports it.
        assert_eq!(log.events().last(), Some(&Event::Commence(Rule::Factor)));
        assert!(!log
            .events()
            .iter()
            .any(|event| matches!(event, Event::Finish(_))));
    }

    #[test]
    fn test_parse_from_token_stream() {
        let tokens = vec![
            Token::new(TokenKind::KwBegin, 1),
            Token::new(TokenKind::KwCall, 2),
            Token::with_text(TokenKind::Ident, 2, "p"),
            Token::new(TokenKind::LParen, 2),
            Token::with_text(TokenKind::Ident, 2, "a"),
            Token::new(TokenKind::RParen, 2),
            Token::new(TokenKind::KwEnd, 3),
        ];
        let mut log = EventLog::new();
        assert_eq!(parse_tokens(TokenStream::new(tokens), &mut log), Ok(()));
        assert_eq!(log.reported(), 0);
        assert_eq!(
            log.events().first(),
            Some(&Event::Commence(Rule::StatementPart))
        );
        assert_eq!(log.events().last(), Some(&Event::Finish(Rule::StatementPart)));
    }

    #[test]
    fn test_trailing_input_is_not_examined() {
        let (log, result) = log("begin x := 1 end end");
        assert_eq!(result, Ok(()));
        assert_eq!(log.reported(), 0);
    }

    #[test]
    fn test_depth_limit_reports_once() {
        let source = format!("begin x := {}1{} end", "(".repeat(2000), ")".repeat(2000));
        let (log, result) = log(&source);
        let error = result.unwrap_err();

        assert_eq!(log.reported(), 1);
        assert_eq!(error.expected, format!("at most {MAX_DEPTH} nested rules"));
        assert_eq!(error.found, TokenKind::LParen);
        assert!(!log
            .events()
            .iter()
            .any(|event| matches!(event, Event::Finish(_))));
    }

    #[test]
    fn test_tree_holds_the_accepted_terminals() {
        for source in ["begin call p(a, b) end", "begin if a = 1 then x := (2"] {
            let (log, _) = log(source);
            let terminals = log
                .events()
                .iter()
                .filter(|event| matches!(event, Event::Terminal(_)))
                .count();

            let root = parse(source).syntax();
            assert_eq!(root.kind(), crate::syntax::SyntaxKind::Root);
            let tokens = root
                .descendants_with_tokens()
                .filter(|element| element.as_token().is_some())
                .count();
            assert_eq!(tokens, terminals, "{source}");
        }
    }
}
