//! Shared helpers for parser tests.
#![allow(dead_code, unused_imports)]

pub use descent_syntax::{
    lex, parse, parse_tokens, Event, EventLog, Lexer, RenderOptions, Rule, SyntaxError, Token,
    TokenKind, TokenStream, MAX_DEPTH,
};

/// Parses `source` into an event log.
pub fn log(source: &str) -> (EventLog, Result<(), SyntaxError>) {
    let mut log = EventLog::new();
    let result = parse_tokens(Lexer::new(source), &mut log);
    (log, result)
}

/// Helper to format a parse for snapshot testing: the event dump, followed by
/// the error if the parse failed.
pub fn events(source: &str) -> String {
    let (log, result) = log(source);
    let mut output = log.render(&RenderOptions::default());

    if let Err(err) = result {
        output.push_str("---\n");
        output.push_str(&format!("{err}\n"));
    }

    output
}

/// Parses `source`, expecting failure, and returns the single error.
pub fn error(source: &str) -> SyntaxError {
    let (log, result) = log(source);
    let err = result.expect_err("expected a syntax error");
    assert_eq!(log.reported(), 1, "errors must be reported exactly once");
    err
}

/// Asserts that commence/finish events pair up like a well-formed tree.
/// Returns the rules left open, outermost first.
pub fn assert_nesting(events: &[Event]) -> Vec<Rule> {
    let mut open = Vec::new();
    for event in events {
        match event {
            Event::Commence(rule) => open.push(*rule),
            Event::Finish(rule) => {
                assert_eq!(open.pop(), Some(*rule), "unbalanced finish in {events:?}");
            }
            Event::Terminal(_) => {
                assert!(!open.is_empty(), "terminal outside any rule");
            }
        }
    }
    open
}

/// Returns the accepted terminals, in order.
pub fn terminals(events: &[Event]) -> Vec<TokenKind> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Terminal(token) => Some(token.kind),
            _ => None,
        })
        .collect()
}

/// Returns the deepest nesting of `rule` within itself.
pub fn max_depth(events: &[Event], rule: Rule) -> usize {
    let mut depth = 0usize;
    let mut max = 0usize;
    for event in events {
        match event {
            Event::Commence(r) if *r == rule => {
                depth += 1;
                max = max.max(depth);
            }
            Event::Finish(r) if *r == rule => depth -= 1,
            _ => {}
        }
    }
    max
}
