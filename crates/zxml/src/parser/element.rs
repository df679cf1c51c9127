use tracing::trace;

use super::Parser;
use crate::error::{Error, ErrorKind, Result};
use crate::lexer::TokenKind;
use crate::model::Element;

impl Parser<'_> {
    /// Parse one element starting at its `<`, including all descendants and
    /// the closing tag.
    ///
    /// The element's text is the leading run before the first child, raw,
    /// followed by every run after a child, each trimmed on its own. The
    /// whole is trimmed once more at the end: `<a>x<b/>y</a>` yields `"xy"`
    /// and `<a> x <b/> y </a>` yields `"x y"`.
    pub(super) fn parse_element(&mut self) -> Result<Element> {
        let open = self.tokens.current();
        if !open.is_operator('<') {
            return Err(Self::expected("'<'", open));
        }
        self.enter_element(open)?;
        self.tokens.bump();

        let name = self
            .parse_qname()
            .map_err(|at| Self::error(ErrorKind::MalformedTagHeader, at))?
            .qualified();
        let header = self.parse_tag_header()?;

        if header.self_closing {
            self.exit_element();
            return Ok(Element {
                name,
                attributes: header.attributes,
                namespaces: header.namespaces,
                text: String::new(),
                children: Vec::new(),
            });
        }

        let mut text = self.scan_text(&name)?;
        let mut children = Vec::new();
        while self.tokens.peek(1).is_identifier() {
            children.push(self.parse_element()?);
            let tail = self.scan_text(&name)?;
            text.push_str(tail.trim());
        }

        self.parse_closing_tag(&name)?;
        self.exit_element();

        trace!(name = %name, children = children.len(), "element");
        Ok(Element {
            name,
            attributes: header.attributes,
            namespaces: header.namespaces,
            text: text.trim().to_string(),
            children,
        })
    }

    /// Collect the literal text of every token up to the next `<`
    fn scan_text(&mut self, name: &str) -> Result<String> {
        let mut text = String::new();
        loop {
            let token = self.tokens.current();
            match token.kind {
                TokenKind::Eof => {
                    return Err(Error::with_message(
                        ErrorKind::UnterminatedElement,
                        token.span,
                        format!("unterminated element <{name}>"),
                    ));
                }
                TokenKind::Operator if token.is_operator('<') => return Ok(text),
                _ => {
                    text.push_str(token.text);
                    self.tokens.bump();
                }
            }
        }
    }

    /// `</name>` with the cursor on its `<`
    fn parse_closing_tag(&mut self, name: &str) -> Result<()> {
        self.tokens.bump();

        let slash = self.tokens.skip_whitespace();
        if !slash.is_operator('/') {
            return Err(Self::expected("'/'", slash));
        }
        self.tokens.bump();

        let at = self.tokens.current();
        let closing = self
            .parse_qname()
            .map_err(|found| Self::expected("closing tag name", found))?
            .qualified();
        if closing != name {
            return Err(Self::error(
                ErrorKind::TagMismatch {
                    expected: name.to_string(),
                    found: closing,
                },
                at,
            ));
        }

        let close = self.tokens.skip_whitespace();
        if !close.is_operator('>') {
            return Err(Self::expected("'>'", close));
        }
        self.tokens.bump();
        Ok(())
    }
}
