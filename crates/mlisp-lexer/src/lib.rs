//! Lexical analysis for mlisp.
//! mlisp 词法分析模块。
//!
//! This crate provides the lexer that converts source text into tokens.
//! Tokens are produced lazily; every input character is either skipped
//! as whitespace or belongs to some token, so the lexer always advances.

mod lexer;
mod raw_token;
mod token;

pub use lexer::{Lexer, tokenize};
pub use token::{Token, TokenKind};
