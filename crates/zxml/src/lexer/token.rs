//! Token types for the XML tokenizer

use crate::error::Span;

/// XML token kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Name-like run inside markup (`item`, `xmlns`, `xml-stylesheet`)
    Identifier,
    /// Single punctuation byte inside markup (`<`, `>`, `/`, `?`, `=`, `:`)
    Operator,
    /// `"..."` or `'...'` inside markup, delimiters included
    Quoted,
    Whitespace,
    /// Anything else: character data, or stray markup bytes
    Text,
    Eof,
}

impl TokenKind {
    /// Get token name for error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Operator => "operator",
            Self::Quoted => "quoted string",
            Self::Whitespace => "whitespace",
            Self::Text => "text",
            Self::Eof => "end of input",
        }
    }
}

/// Token borrowing its literal text from the input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub const fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self { kind, text, span }
    }

    pub const fn eof(span: Span) -> Self {
        Self {
            kind: TokenKind::Eof,
            text: "",
            span,
        }
    }

    /// True for the operator token `op`
    pub fn is_operator(&self, op: char) -> bool {
        self.kind == TokenKind::Operator
            && self.text.len() == op.len_utf8()
            && self.text.starts_with(op)
    }

    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }

    /// Value of a quoted token with its delimiters stripped.
    ///
    /// Content is returned as written; no entity decoding happens. Other
    /// token kinds yield `None`.
    pub fn unquoted(&self) -> Option<&'a str> {
        if self.kind != TokenKind::Quoted {
            return None;
        }
        self.text.get(1..self.text.len().saturating_sub(1))
    }

    /// Short description used in error messages
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => self.kind.name().to_string(),
            TokenKind::Whitespace => self.kind.name().to_string(),
            _ => format!("'{}'", self.text),
        }
    }
}
