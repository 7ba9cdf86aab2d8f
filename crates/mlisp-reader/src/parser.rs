//! Recursive-descent parser from tokens to values.

use std::iter::Peekable;

use mlisp_common::Span;
use mlisp_diagnostic::ErrorCode;
use mlisp_lexer::{Lexer, Token, TokenKind};
use mlisp_value::{Error, Value, ValueMap};

use crate::atom;
use crate::error::ReadError;

type PResult<T> = std::result::Result<T, ReadError>;

/// The mlisp reader.
pub struct Parser<'src> {
    tokens: Peekable<Lexer<'src>>,
    /// End of the last token consumed, for errors at end of input.
    last_end: Span,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            tokens: Lexer::new(source).peekable(),
            last_end: Span::DUMMY,
        }
    }

    /// Are there tokens left?
    pub fn at_end(&mut self) -> bool {
        self.tokens.peek().is_none()
    }

    /// Read the next top-level form; `None` once the input is exhausted.
    pub fn next_form(&mut self) -> PResult<Option<Value>> {
        Ok(self.next_spanned()?.map(|(form, _)| form))
    }

    /// Like [`Parser::next_form`], along with the span the form covers.
    pub fn next_spanned(&mut self) -> PResult<Option<(Value, Span)>> {
        let Some(token) = self.advance() else {
            return Ok(None);
        };
        let start = token.span;
        let form = self.read_form(token)?;
        Ok(Some((form, start.to(self.last_end))))
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.next()?;
        self.last_end = Span::point(token.span.end);
        Some(token)
    }

    fn read_form(&mut self, token: Token) -> PResult<Value> {
        let span = token.span;
        match token.kind {
            TokenKind::LParen => self.read_seq(span, TokenKind::RParen, "list").map(Value::list),
            TokenKind::LBracket => self.read_seq(span, TokenKind::RBracket, "vector").map(Value::vector),
            TokenKind::LBrace => self.read_map(span),
            kind @ (TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace) => Err(ReadError::syntax(
                span,
                ErrorCode::UnexpectedDelimiter,
                format!("unexpected '{}'", kind.text()),
            )),
            TokenKind::Quote
            | TokenKind::Quasiquote
            | TokenKind::Unquote
            | TokenKind::SpliceUnquote
            | TokenKind::Deref => self.read_macro(&token.kind, span),
            TokenKind::Caret | TokenKind::Semicolon => Ok(Value::symbol(token.kind.text())),
            // No string variant: the literal text, quotes included, is the symbol name.
            TokenKind::Str(text) => Ok(Value::symbol(&text)),
            TokenKind::UnterminatedStr(_) => Err(ReadError::syntax(
                span,
                ErrorCode::UnterminatedString,
                "unterminated string",
            )),
            TokenKind::Error(text) => Err(ReadError::syntax(
                span,
                ErrorCode::UnexpectedCharacter,
                format!("unexpected character {text:?}"),
            )),
            TokenKind::Atom(text) => atom::classify(&text).map_err(|err| {
                let code = match err {
                    Error::DivisionByZero(_) => ErrorCode::ZeroDenominator,
                    Error::OutOfRange(_) => ErrorCode::LiteralOutOfRange,
                    _ => ErrorCode::UnexpectedCharacter,
                };
                ReadError::new(err, span, code)
            }),
        }
    }

    /// Forms up to the matching `close`.
    fn read_seq(&mut self, open: Span, close: TokenKind, what: &str) -> PResult<Vec<Value>> {
        let mut items = Vec::new();
        loop {
            let Some(token) = self.advance() else {
                return Err(ReadError::syntax(
                    open,
                    ErrorCode::UnclosedDelimiter,
                    format!("unclosed {what}: '{}' never closed", close.text()),
                ));
            };
            if token.kind == close {
                return Ok(items);
            }
            items.push(self.read_form(token)?);
        }
    }

    fn read_map(&mut self, open: Span) -> PResult<Value> {
        let forms = self.read_seq(open, TokenKind::RBrace, "map")?;
        if forms.len() % 2 != 0 {
            return Err(ReadError::syntax(
                open.to(self.last_end),
                ErrorCode::OddMapEntries,
                format!("map literal has {} forms, expected key/value pairs", forms.len()),
            ));
        }
        let mut map = ValueMap::new();
        let mut forms = forms.into_iter();
        while let (Some(key), Some(value)) = (forms.next(), forms.next()) {
            map.insert(key, value);
        }
        Ok(Value::map(map))
    }

    /// `'x` → `(quote x)`, and likewise for the other reader macros.
    fn read_macro(&mut self, kind: &TokenKind, span: Span) -> PResult<Value> {
        let head = kind.macro_symbol().unwrap_or("quote");
        let Some(token) = self.advance() else {
            return Err(ReadError::syntax(
                span,
                ErrorCode::UnclosedDelimiter,
                format!("expected a form after '{}'", kind.text()),
            ));
        };
        let form = self.read_form(token)?;
        Ok(Value::list(vec![Value::symbol(head), form]))
    }
}
