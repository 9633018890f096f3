//! Grammar rules of the statement language.
//!
//! One method per nonterminal, organized by category:
//!
//! - `statements.rs` - statement part, statement lists and the six statements
//! - `expressions.rs` - conditions and right-recursive arithmetic expressions

mod expressions;
mod statements;
