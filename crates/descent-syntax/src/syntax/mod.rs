//! Syntax tree types for the statement language.
//!
//! This module provides the `rowan`-based syntax tree that [`crate::TreeSink`]
//! builds from parse events, including the `SyntaxKind` enum that covers both
//! tokens and the nodes produced for each grammar rule.

use crate::lexer::TokenKind;
use crate::parser::event::Rule;
use crate::token_kinds::for_each_token_kind;

macro_rules! define_syntax_kinds {
    ($($token:ident),* $(,)?) => {
        /// All syntax node and token kinds of the statement language.
        ///
        /// This enum includes both token kinds (from the lexer) and composite
        /// node kinds (one per grammar rule).
        // Variants mirror lexer/token names; documenting each would be noisy.
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum SyntaxKind {
            // =========================================================================
            // TOKEN KINDS (mirrors TokenKind)
            // =========================================================================
            $($token,)*

            // =========================================================================
            // COMPOSITE NODE KINDS (one per grammar rule)
            // =========================================================================
            /// Wrapper around everything a parse produced
            Root,

            /// `begin` statement list `end`
            StatementPart,

            /// statement (`;` statement)*
            StatementList,

            /// One of the six statement forms
            Statement,

            /// identifier `:=` (string constant | expression)
            AssignmentStmt,

            /// `if` condition `then` ... `end` `if`
            IfStmt,

            /// `while` condition `loop` ... `end` `loop`
            WhileStmt,

            /// `do` statement list `until` condition
            UntilStmt,

            /// `for` `(` assignment `;` condition `;` assignment `)` `do` ... `end` `loop`
            ForStmt,

            /// `call` identifier `(` argument list `)`
            ProcedureStmt,

            /// identifier (`,` argument list)?
            ArgumentList,

            /// identifier operator operand
            Condition,

            /// One relational operator
            ConditionalOp,

            /// term ((`+`|`-`) expression)?
            Expression,

            /// factor ((`*`|`/`) term)?
            Term,

            /// identifier | number constant | `(` expression `)`
            Factor,
        }

        impl From<TokenKind> for SyntaxKind {
            fn from(kind: TokenKind) -> Self {
                match kind {
                    $(TokenKind::$token => SyntaxKind::$token,)*
                }
            }
        }

        impl SyntaxKind {
            /// Returns `true` if this kind is a token (not a composite node).
            #[must_use]
            pub fn is_token(self) -> bool {
                matches!(self, $(SyntaxKind::$token)|*)
            }
        }

        const SYNTAX_KINDS: &[SyntaxKind] = &[
            $(SyntaxKind::$token,)*
            SyntaxKind::Root,
            SyntaxKind::StatementPart,
            SyntaxKind::StatementList,
            SyntaxKind::Statement,
            SyntaxKind::AssignmentStmt,
            SyntaxKind::IfStmt,
            SyntaxKind::WhileStmt,
            SyntaxKind::UntilStmt,
            SyntaxKind::ForStmt,
            SyntaxKind::ProcedureStmt,
            SyntaxKind::ArgumentList,
            SyntaxKind::Condition,
            SyntaxKind::ConditionalOp,
            SyntaxKind::Expression,
            SyntaxKind::Term,
            SyntaxKind::Factor,
        ];
    };
}

for_each_token_kind!(define_syntax_kinds);

impl SyntaxKind {
    /// Returns `true` if this kind is a composite node.
    #[must_use]
    pub fn is_node(self) -> bool {
        !self.is_token()
    }

    /// Returns `true` if this kind is trivia.
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(self, SyntaxKind::Whitespace | SyntaxKind::LineComment)
    }
}

impl From<Rule> for SyntaxKind {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::StatementPart => SyntaxKind::StatementPart,
            Rule::StatementList => SyntaxKind::StatementList,
            Rule::Statement => SyntaxKind::Statement,
            Rule::AssignmentStatement => SyntaxKind::AssignmentStmt,
            Rule::IfStatement => SyntaxKind::IfStmt,
            Rule::WhileStatement => SyntaxKind::WhileStmt,
            Rule::UntilStatement => SyntaxKind::UntilStmt,
            Rule::ForStatement => SyntaxKind::ForStmt,
            Rule::ProcedureStatement => SyntaxKind::ProcedureStmt,
            Rule::ArgumentList => SyntaxKind::ArgumentList,
            Rule::Condition => SyntaxKind::Condition,
            Rule::ConditionalOperator => SyntaxKind::ConditionalOp,
            Rule::Expression => SyntaxKind::Expression,
            Rule::Term => SyntaxKind::Term,
            Rule::Factor => SyntaxKind::Factor,
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// The statement language for `rowan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DescentLanguage {}

impl rowan::Language for DescentLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        SYNTAX_KINDS
            .get(raw.0 as usize)
            .copied()
            .unwrap_or(SyntaxKind::Error)
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// A syntax node in the statement syntax tree.
pub type SyntaxNode = rowan::SyntaxNode<DescentLanguage>;

/// A syntax token in the statement syntax tree.
pub type SyntaxToken = rowan::SyntaxToken<DescentLanguage>;

/// A syntax element (either node or token) in the statement syntax tree.
pub type SyntaxElement = rowan::SyntaxElement<DescentLanguage>;

/// Renders a node and its descendants as an indented dump, one element per
/// line. Nodes show their kind, tokens their kind and text.
#[must_use]
pub fn debug_tree(node: &SyntaxNode) -> String {
    let mut out = String::new();
    write_node(node, &mut out, 0);
    out
}

fn write_node(node: &SyntaxNode, out: &mut String, depth: usize) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(&format!("{:?}\n", node.kind()));

    for child in node.children_with_tokens() {
        match child {
            rowan::NodeOrToken::Node(n) => write_node(&n, out, depth + 1),
            rowan::NodeOrToken::Token(t) => {
                out.push_str(&"  ".repeat(depth + 1));
                out.push_str(&format!("{:?} {:?}\n", t.kind(), t.text()));
            }
        }
    }
}
