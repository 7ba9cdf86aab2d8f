//! The mlisp lexer.
//! mlisp 词法分析器。

use crate::raw_token::RawToken;
use crate::token::{Token, TokenKind};
use logos::Logos;
use mlisp_common::Span;

/// The mlisp lexer.
///
/// A lazy, finite, non-restartable sequence of tokens over one source string.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, RawToken>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code.
    /// 为给定的源代码创建新的词法分析器。
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: RawToken::lexer(source),
        }
    }

    /// The full source being tokenized.
    pub fn source(&self) -> &'src str {
        self.inner.source()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let raw = self.inner.next()?;
        let range = self.inner.span();
        let span = Span::from(range);
        let slice = self.inner.slice();

        let kind = match raw {
            Ok(RawToken::SpliceUnquote) => TokenKind::SpliceUnquote,
            Ok(RawToken::LParen) => TokenKind::LParen,
            Ok(RawToken::RParen) => TokenKind::RParen,
            Ok(RawToken::LBracket) => TokenKind::LBracket,
            Ok(RawToken::RBracket) => TokenKind::RBracket,
            Ok(RawToken::LBrace) => TokenKind::LBrace,
            Ok(RawToken::RBrace) => TokenKind::RBrace,
            Ok(RawToken::Quote) => TokenKind::Quote,
            Ok(RawToken::Quasiquote) => TokenKind::Quasiquote,
            Ok(RawToken::Unquote) => TokenKind::Unquote,
            Ok(RawToken::Deref) => TokenKind::Deref,
            Ok(RawToken::Caret) => TokenKind::Caret,
            Ok(RawToken::Semicolon) => TokenKind::Semicolon,
            Ok(RawToken::Str) => TokenKind::Str(slice.to_owned()),
            Ok(RawToken::UnterminatedStr) => TokenKind::UnterminatedStr(slice.to_owned()),
            Ok(RawToken::Atom) => TokenKind::Atom(slice.to_owned()),
            Err(()) => TokenKind::Error(slice.to_owned()),
        };

        Some(Token::new(kind, span))
    }
}

/// Tokenize the entire source eagerly.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
