//! Single source of truth for the token kind list shared by `TokenKind` and
//! `SyntaxKind`. The order must match the declaration order in
//! `lexer/tokens.rs`.

macro_rules! for_each_token_kind {
    ($callback:ident) => {
        $callback! {
            Whitespace,
            LineComment,
            Semicolon,
            Comma,
            LParen,
            RParen,
            Assign,
            Plus,
            Minus,
            Star,
            Slash,
            Greater,
            GreaterEqual,
            Equal,
            NotEqual,
            Less,
            LessEqual,
            KwBegin,
            KwEnd,
            KwIf,
            KwThen,
            KwElse,
            KwWhile,
            KwLoop,
            KwCall,
            KwUntil,
            KwDo,
            KwFor,
            Ident,
            NumberLit,
            StringLit,
            Error,
            Eof,
        }
    };
}

pub(crate) use for_each_token_kind;
