//! Index-based lookahead over a token sequence

use crate::error::Span;
use crate::lexer::token::{Token, TokenKind};

/// Read-only token sequence plus a cursor index.
///
/// Lookahead past the end yields the trailing `Eof` token, so scanning loops
/// that stop on `Eof` can never index out of bounds.
#[derive(Clone, Debug)]
pub struct TokenStream<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    eof: Token<'a>,
}

impl<'a> TokenStream<'a> {
    pub fn new(tokens: Vec<Token<'a>>) -> Self {
        let eof_span = tokens.last().map_or_else(Span::empty, |t| {
            Span::new(t.span.end, t.span.end)
        });
        Self {
            tokens,
            pos: 0,
            eof: Token::eof(eof_span),
        }
    }

    /// Token under the cursor
    pub fn current(&self) -> Token<'a> {
        self.peek(0)
    }

    /// Token `ahead` positions past the cursor
    pub fn peek(&self, ahead: usize) -> Token<'a> {
        self.pos
            .checked_add(ahead)
            .and_then(|idx| self.tokens.get(idx))
            .copied()
            .unwrap_or(self.eof)
    }

    /// Move past the current token (no-op at `Eof`)
    pub fn bump(&mut self) {
        if self.current().kind != TokenKind::Eof {
            self.pos += 1;
        }
    }

    /// Move past the current token and return the next one
    pub fn advance(&mut self) -> Token<'a> {
        self.bump();
        self.current()
    }

    /// Skip whitespace tokens and return the first significant one
    pub fn skip_whitespace(&mut self) -> Token<'a> {
        while self.current().kind == TokenKind::Whitespace {
            self.pos += 1;
        }
        self.current()
    }

    pub const fn position(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }
}
