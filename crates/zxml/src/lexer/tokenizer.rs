//! Markup-aware XML tokenizer
//!
//! The tokenizer flips between two modes. Outside a tag it only produces
//! whitespace and text runs, so character data may contain quotes, `>` or
//! `=` freely. After a `<` it switches to markup mode and emits
//! identifiers, single-byte operators and quoted strings until the next `>`.

use tracing::trace;

use crate::error::{Error, ErrorKind, Pos, Result, Span};
use crate::lexer::cursor::Cursor;
use crate::lexer::token::{Token, TokenKind};

/// Streaming tokenizer over raw input bytes
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    in_markup: bool,
}

impl<'a> Tokenizer<'a> {
    pub const fn new(input: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(input),
            in_markup: false,
        }
    }

    /// Produce the next token; returns `Eof` forever once input is exhausted
    pub fn next_token(&mut self) -> Result<Token<'a>> {
        let start = self.cursor.position();
        let Some(b) = self.cursor.current() else {
            return Ok(Token::eof(Span::new(start, start)));
        };

        let kind = if is_whitespace(b) {
            self.cursor.eat_while(is_whitespace);
            TokenKind::Whitespace
        } else if self.in_markup {
            self.lex_markup(b)?
        } else {
            self.lex_content(b)
        };

        let end = self.cursor.position();
        let text = to_str(self.cursor.slice_from(start.offset), start)?;
        Ok(Token::new(kind, text, Span::new(start, end)))
    }

    fn lex_content(&mut self, b: u8) -> TokenKind {
        if b == b'<' {
            self.cursor.advance();
            self.in_markup = true;
            return TokenKind::Operator;
        }
        self.cursor.eat_while(|b| b != b'<' && !is_whitespace(b));
        TokenKind::Text
    }

    fn lex_markup(&mut self, b: u8) -> Result<TokenKind> {
        match b {
            b'"' | b'\'' => self.lex_quoted(b),
            _ if is_name_start(b) => {
                self.cursor.advance();
                self.cursor.eat_while(is_name_char);
                Ok(TokenKind::Identifier)
            }
            _ if b.is_ascii_punctuation() => {
                if b == b'>' {
                    self.in_markup = false;
                }
                self.cursor.advance();
                Ok(TokenKind::Operator)
            }
            _ => {
                self.cursor.eat_while(|b| {
                    !is_whitespace(b) && !is_name_start(b) && !b.is_ascii_punctuation()
                });
                Ok(TokenKind::Text)
            }
        }
    }

    fn lex_quoted(&mut self, quote: u8) -> Result<TokenKind> {
        let start = self.cursor.position();
        self.cursor.advance();
        self.cursor.eat_while(|b| b != quote);
        if self.cursor.is_eof() {
            return Err(Error::at(ErrorKind::UnterminatedQuote, start));
        }
        self.cursor.advance();
        Ok(TokenKind::Quoted)
    }
}

/// Tokenize the whole input. The last token is always `Eof`.
pub fn tokenize(input: &[u8]) -> Result<Vec<Token<'_>>> {
    let mut tokenizer = Tokenizer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }
    trace!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}

fn to_str(bytes: &[u8], at: Pos) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|_| Error::at(ErrorKind::InvalidUtf8, at))
}

const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

// Bytes >= 0x80 belong to multi-byte characters; they are accepted in names
// so a name run never splits a character.
const fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

const fn is_name_char(b: u8) -> bool {
    is_name_start(b) || b.is_ascii_digit() || matches!(b, b'-' | b'.')
}
