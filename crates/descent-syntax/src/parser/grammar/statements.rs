//! Statement parsing.
//!
//! Supported statements:
//! - Assignment: `x := expr` or `x := "text"`
//! - `if cond then ... end if` and `if cond then ... else ... end if`
//! - `while cond loop ... end loop`
//! - `do ... until cond`
//! - `for (assign; cond; assign) do ... end loop`
//! - Procedure call: `call name(a, b)`

use crate::lexer::TokenKind;
use crate::parser::event::Rule;
use crate::parser::sink::EventSink;
use crate::parser::source::TokenSource;

use super::super::{Abort, Parsed, Parser};

impl<S: TokenSource, K: EventSink> Parser<S, K> {
    /// Parse the top-level `begin` statement list `end`.
    pub(crate) fn statement_part(&mut self) -> Parsed {
        self.rule(Rule::StatementPart, |p| {
            p.accept(TokenKind::KwBegin)?;
            p.statement_list()?;
            p.accept(TokenKind::KwEnd)
        })
    }

    /// Parse statements separated by `;`.
    pub(crate) fn statement_list(&mut self) -> Parsed {
        self.rule(Rule::StatementList, |p| {
            p.statement()?;
            while p.at(TokenKind::Semicolon) {
                p.accept(TokenKind::Semicolon)?;
                p.statement()?;
            }
            Ok(())
        })
    }

    /// Parse a single statement, chosen by its leading symbol.
    pub(crate) fn statement(&mut self) -> Parsed {
        self.rule(Rule::Statement, |p| {
            match p.current() {
                TokenKind::Ident => p.assignment_statement()?,
                TokenKind::KwIf => p.if_statement()?,
                TokenKind::KwWhile => p.while_statement()?,
                TokenKind::KwCall => p.procedure_statement()?,
                TokenKind::KwDo => p.until_statement()?,
                TokenKind::KwFor => p.for_statement()?,
                _ => return Err(Abort::Mismatch),
            }
            Ok(())
        })
    }

    /// Parse assignment statement.
    pub(crate) fn assignment_statement(&mut self) -> Parsed {
        self.rule(Rule::AssignmentStatement, |p| {
            p.accept(TokenKind::Ident)?;
            p.accept(TokenKind::Assign)?;
            if p.at(TokenKind::StringLit) {
                p.accept(TokenKind::StringLit)
            } else {
                Ok(p.expression()?)
            }
        })
    }

    /// Parse IF statement.
    pub(crate) fn if_statement(&mut self) -> Parsed {
        self.rule(Rule::IfStatement, |p| {
            p.accept(TokenKind::KwIf)?;
            p.condition()?;
            p.accept(TokenKind::KwThen)?;
            p.statement_list()?;

            if !p.at(TokenKind::KwEnd) {
                p.accept(TokenKind::KwElse)?;
                p.statement_list()?;
            }

            p.accept(TokenKind::KwEnd)?;
            p.accept(TokenKind::KwIf)
        })
    }

    /// Parse WHILE statement.
    pub(crate) fn while_statement(&mut self) -> Parsed {
        self.rule(Rule::WhileStatement, |p| {
            p.accept(TokenKind::KwWhile)?;
            p.condition()?;
            p.accept(TokenKind::KwLoop)?;
            p.statement_list()?;
            p.accept(TokenKind::KwEnd)?;
            p.accept(TokenKind::KwLoop)
        })
    }

    /// Parse DO ... UNTIL statement.
    pub(crate) fn until_statement(&mut self) -> Parsed {
        self.rule(Rule::UntilStatement, |p| {
            p.accept(TokenKind::KwDo)?;
            p.statement_list()?;
            p.accept(TokenKind::KwUntil)?;
            Ok(p.condition()?)
        })
    }

    /// Parse FOR statement.
    pub(crate) fn for_statement(&mut self) -> Parsed {
        self.rule(Rule::ForStatement, |p| {
            p.accept(TokenKind::KwFor)?;
            p.accept(TokenKind::LParen)?;
            p.assignment_statement()?;
            p.accept(TokenKind::Semicolon)?;
            p.condition()?;
            p.accept(TokenKind::Semicolon)?;
            p.assignment_statement()?;
            p.accept(TokenKind::RParen)?;
            p.accept(TokenKind::KwDo)?;
            p.statement_list()?;
            p.accept(TokenKind::KwEnd)?;
            p.accept(TokenKind::KwLoop)
        })
    }

    /// Parse CALL statement.
    pub(crate) fn procedure_statement(&mut self) -> Parsed {
        self.rule(Rule::ProcedureStatement, |p| {
            p.accept(TokenKind::KwCall)?;
            p.accept(TokenKind::Ident)?;
            p.accept(TokenKind::LParen)?;
            p.argument_list()?;
            p.accept(TokenKind::RParen)
        })
    }

    /// Parse an argument list. Each `,` re-enters the rule, so every further
    /// argument nests one level deeper.
    pub(crate) fn argument_list(&mut self) -> Parsed {
        self.rule(Rule::ArgumentList, |p| {
            p.accept(TokenKind::Ident)?;
            if p.at(TokenKind::Comma) {
                p.accept(TokenKind::Comma)?;
                p.argument_list()?;
            }
            Ok(())
        })
    }
}
