//! Raw token definition.
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! token text is copied out of the source.

use logos::Logos;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[\s,]+")] // Whitespace and commas separate tokens
pub(crate) enum RawToken {
    #[token("~@")]
    SpliceUnquote,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    #[token("'")]
    Quote,
    #[token("`")]
    Quasiquote,
    #[token("~")]
    Unquote,
    #[token("@")]
    Deref,
    #[token("^")]
    Caret,

    #[token(";")]
    Semicolon,

    #[regex(r#""([^"\\]|\\.)*""#)]
    Str,

    #[regex(r#""([^"\\]|\\.)*"#)]
    UnterminatedStr,

    // Reader macro characters may appear inside an atom but never start one.
    #[regex(r#"[^\s\[\]{}()'"`,;~^@][^\s\[\]{}()'"`,;]*"#)]
    Atom,
}
