//! Parser events.
//!
//! The parser reports what it recognises as a stream of events: a rule is
//! commenced, terminals are accepted inside it, and the rule is finished.
//! Commence and finish events nest like a well-formed tree, so the stream
//! alone conveys the structure of the input.

use crate::lexer::Token;
use crate::parser::sink::EventSink;
use crate::parser::SyntaxError;

/// A grammar rule (nonterminal) of the statement language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    /// `begin` statement list `end`
    StatementPart,
    /// statement (`;` statement)*
    StatementList,
    /// Dispatch on the leading symbol of a statement.
    Statement,
    /// identifier `:=` (string constant | expression)
    AssignmentStatement,
    /// `if` condition `then` statement list (`end` `if` | `else` statement list `end` `if`)
    IfStatement,
    /// `while` condition `loop` statement list `end` `loop`
    WhileStatement,
    /// `do` statement list `until` condition
    UntilStatement,
    /// `for` `(` assignment `;` condition `;` assignment `)` `do` statement list `end` `loop`
    ForStatement,
    /// `call` identifier `(` argument list `)`
    ProcedureStatement,
    /// identifier (`,` argument list)?
    ArgumentList,
    /// identifier conditional operator (identifier | number constant | string constant)
    Condition,
    /// `>` | `>=` | `=` | `!=` | `<` | `<=`
    ConditionalOperator,
    /// term ((`+` | `-`) expression)?
    Expression,
    /// factor ((`*` | `/`) term)?
    Term,
    /// identifier | number constant | `(` expression `)`
    Factor,
}

impl Rule {
    /// Every rule, in grammar order.
    pub const ALL: [Rule; 15] = [
        Rule::StatementPart,
        Rule::StatementList,
        Rule::Statement,
        Rule::AssignmentStatement,
        Rule::IfStatement,
        Rule::WhileStatement,
        Rule::UntilStatement,
        Rule::ForStatement,
        Rule::ProcedureStatement,
        Rule::ArgumentList,
        Rule::Condition,
        Rule::ConditionalOperator,
        Rule::Expression,
        Rule::Term,
        Rule::Factor,
    ];

    /// Returns the name of the rule as it appears in parse events.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Rule::StatementPart => "statement part",
            Rule::StatementList => "statement list",
            Rule::Statement => "statement",
            Rule::AssignmentStatement => "assignment statement",
            Rule::IfStatement => "if statement",
            Rule::WhileStatement => "while statement",
            Rule::UntilStatement => "until statement",
            Rule::ForStatement => "for statement",
            Rule::ProcedureStatement => "procedure statement",
            Rule::ArgumentList => "argument list",
            Rule::Condition => "condition",
            Rule::ConditionalOperator => "conditional operator",
            Rule::Expression => "expression",
            Rule::Term => "term",
            Rule::Factor => "factor",
        }
    }

    /// Returns what the rule expects, attached to a syntax error raised while
    /// the rule is the innermost one in progress.
    #[must_use]
    pub fn expected(self) -> &'static str {
        match self {
            Rule::StatementPart => "statement part",
            Rule::StatementList => "statement list",
            Rule::Statement => "statement (identifier, if, while, call, until, for)",
            Rule::AssignmentStatement => "identifier",
            Rule::IfStatement => "if",
            Rule::WhileStatement => "while",
            Rule::UntilStatement => "until",
            Rule::ForStatement => "for",
            Rule::ProcedureStatement => "call, identifier, (, )",
            Rule::ArgumentList => "comma",
            Rule::Condition => "identifier, number-constant, string-constant",
            Rule::ConditionalOperator => ">, >=, =, !=, <, <=",
            Rule::Expression => "+, -",
            Rule::Term => "*, /",
            Rule::Factor => "identifier, number-constant, (, )",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An event produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A rule started.
    Commence(Rule),
    /// A terminal was accepted.
    Terminal(Token),
    /// A rule completed.
    Finish(Rule),
}

/// Options for [`EventLog::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Append the source line to each terminal.
    pub show_lines: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            show_lines: false,
        }
    }
}

/// A sink that records every event, in order.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<Event>,
    reported: usize,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns how many times an error was reported to this sink.
    #[must_use]
    pub fn reported(&self) -> usize {
        self.reported
    }

    /// Renders the events as an indented dump: `> rule` when a rule commences,
    /// `< rule` when it finishes, and one line per accepted terminal.
    #[must_use]
    pub fn render(&self, options: &RenderOptions) -> String {
        let mut out = String::new();
        let mut depth = 0usize;

        for event in &self.events {
            match event {
                Event::Commence(rule) => {
                    push_line(&mut out, depth * options.indent, &format!("> {rule}"));
                    depth += 1;
                }
                Event::Finish(rule) => {
                    depth = depth.saturating_sub(1);
                    push_line(&mut out, depth * options.indent, &format!("< {rule}"));
                }
                Event::Terminal(token) => {
                    let line = if options.show_lines {
                        format!("{token} (line {})", token.line)
                    } else {
                        token.to_string()
                    };
                    push_line(&mut out, depth * options.indent, &line);
                }
            }
        }

        out
    }
}

fn push_line(out: &mut String, indent: usize, text: &str) {
    out.extend(std::iter::repeat(' ').take(indent));
    out.push_str(text);
    out.push('\n');
}

impl EventSink for EventLog {
    fn commence(&mut self, rule: Rule) {
        self.events.push(Event::Commence(rule));
    }

    fn finish(&mut self, rule: Rule) {
        self.events.push(Event::Finish(rule));
    }

    fn accept_terminal(&mut self, token: &Token) {
        self.events.push(Event::Terminal(token.clone()));
    }

    fn report_error(&mut self, token: &Token, expected: &str) -> SyntaxError {
        self.reported += 1;
        SyntaxError::new(token, expected)
    }
}
