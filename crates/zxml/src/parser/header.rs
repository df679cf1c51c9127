use indexmap::IndexMap;

use super::{Parser, QName};
use crate::error::{ErrorKind, Result};

const XMLNS: &str = "xmlns";

/// Attributes and namespace bindings of one opening tag
#[derive(Debug, Default)]
pub(super) struct TagHeader {
    pub(super) attributes: IndexMap<String, String>,
    pub(super) namespaces: IndexMap<String, String>,
    pub(super) self_closing: bool,
}

impl Parser<'_> {
    /// Parse everything between an opening tag's name and its `>` or `/>`.
    pub(super) fn parse_tag_header(&mut self) -> Result<TagHeader> {
        let mut header = TagHeader::default();
        loop {
            let token = self.tokens.skip_whitespace();

            if token.is_operator('>') {
                self.tokens.bump();
                return Ok(header);
            }

            if token.is_operator('/') {
                let close = self.tokens.peek(1);
                if !close.is_operator('>') {
                    return Err(Self::error(ErrorKind::MalformedTagHeader, close));
                }
                self.tokens.bump();
                self.tokens.bump();
                header.self_closing = true;
                return Ok(header);
            }

            if !token.is_identifier() {
                return Err(Self::error(ErrorKind::MalformedTagHeader, token));
            }

            let (name, value) = self.parse_attribute(&ErrorKind::MalformedTagHeader)?;
            let (map, key) = match name {
                QName {
                    prefix: Some(XMLNS),
                    local,
                } => (&mut header.namespaces, local.to_string()),
                QName {
                    prefix: None,
                    local: XMLNS,
                } => (&mut header.namespaces, String::new()),
                _ => (&mut header.attributes, name.qualified()),
            };
            self.store(map, key, value, &name, token)?;
        }
    }
}
