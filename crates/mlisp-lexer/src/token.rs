//! Token definitions for mlisp.

use mlisp_common::Span;

/// A token with its kind and span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kind of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Delimiters
    LParen,   // (
    RParen,   // )
    LBracket, // [
    RBracket, // ]
    LBrace,   // {
    RBrace,   // }

    // Reader macros
    Quote,         // '
    Quasiquote,    // `
    Unquote,       // ~
    SpliceUnquote, // ~@
    Deref,         // @
    Caret,         // ^

    /// Statement separator `;`, also the matrix row separator.
    Semicolon,

    /// A complete string literal, quotes included.
    Str(String),
    /// A string literal that reached end of input without its closing quote.
    UnterminatedStr(String),

    /// Any other maximal run of non-delimiter characters: numbers and symbols.
    Atom(String),

    /// Input no rule matched.
    Error(String),
}

impl TokenKind {
    /// The symbol a reader macro token expands to, if this is one.
    pub fn macro_symbol(&self) -> Option<&'static str> {
        match self {
            TokenKind::Quote => Some("quote"),
            TokenKind::Quasiquote => Some("quasiquote"),
            TokenKind::Unquote => Some("unquote"),
            TokenKind::SpliceUnquote => Some("splice-unquote"),
            TokenKind::Deref => Some("deref"),
            _ => None,
        }
    }

    /// Source text this token stands for.
    pub fn text(&self) -> &str {
        match self {
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Quote => "'",
            TokenKind::Quasiquote => "`",
            TokenKind::Unquote => "~",
            TokenKind::SpliceUnquote => "~@",
            TokenKind::Deref => "@",
            TokenKind::Caret => "^",
            TokenKind::Semicolon => ";",
            TokenKind::Str(s)
            | TokenKind::UnterminatedStr(s)
            | TokenKind::Atom(s)
            | TokenKind::Error(s) => s,
        }
    }
}
