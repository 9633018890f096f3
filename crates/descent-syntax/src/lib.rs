//! `descent-syntax` - Lexer and predictive parser for a small statement language.
//!
//! This crate provides the syntactic analysis of statement-language source:
//!
//! - **Lexer**: Tokenizes source text into a pull-based token source
//! - **Parser**: A hand-written LL(1) recursive descent parser that reports
//!   every recognised production as commence/accept/finish events
//! - **Syntax Tree**: An optional `rowan` tree built from those events
//!
//! # Design Principles
//!
//! - **Event driven**: the parser builds nothing itself; an [`EventSink`]
//!   decides what to do with the events
//! - **One token of lookahead**: every branch is decided by the current token
//!   alone, with no backtracking
//! - **Fail fast**: the first mismatch is reported exactly once and ends the
//!   parse
//!
//! # Example
//!
//! ```
//! use descent_syntax::{parse_tokens, Event, EventLog, Lexer, Rule};
//!
//! let mut log = EventLog::new();
//! parse_tokens(Lexer::new("begin x := 1 + 2 end"), &mut log).unwrap();
//!
//! assert_eq!(log.events().first(), Some(&Event::Commence(Rule::StatementPart)));
//! assert_eq!(log.events().last(), Some(&Event::Finish(Rule::StatementPart)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod lexer;
pub mod parser;
pub mod syntax;
mod token_kinds;

pub use lexer::{lex, Lexer, Token, TokenKind};
pub use parser::{
    parse, parse_tokens, Event, EventLog, EventSink, Parse, RenderOptions, Rule, SyntaxError,
    TokenSource, TokenStream, TreeSink, MAX_DEPTH,
};
pub use syntax::{debug_tree, DescentLanguage, SyntaxKind, SyntaxNode, SyntaxToken};
