use indexmap::IndexMap;
use tracing::trace;

use super::Parser;
use crate::error::{ErrorKind, Result};
use crate::model::Declaration;

impl Parser<'_> {
    /// Parse `target k="v" ... ?>` with the cursor on the token after `<?`.
    pub(super) fn parse_declaration(&mut self) -> Result<Declaration> {
        let target = self.tokens.current();
        if !target.is_identifier() {
            return Err(Self::error(ErrorKind::MalformedDeclaration, target));
        }
        self.tokens.bump();

        let mut attributes = IndexMap::new();
        loop {
            let token = self.tokens.skip_whitespace();
            if token.is_operator('?') {
                let close = self.tokens.peek(1);
                if !close.is_operator('>') {
                    return Err(Self::error(ErrorKind::MalformedDeclaration, close));
                }
                self.tokens.bump();
                self.tokens.bump();
                break;
            }
            if !token.is_identifier() {
                return Err(Self::error(ErrorKind::MalformedDeclaration, token));
            }

            let (name, value) = self.parse_attribute(&ErrorKind::MalformedDeclaration)?;
            self.store(&mut attributes, name.qualified(), value, &name, token)?;
        }

        trace!(name = target.text, attributes = attributes.len(), "declaration");
        Ok(Declaration {
            target: target.text.to_string(),
            attributes,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{ErrorKind, Result};
    use crate::parser::Parser;

    fn kind_of(input: &str) -> Option<ErrorKind> {
        Parser::new(input.as_bytes())
            .parse()
            .err()
            .map(|e| e.kind().clone())
    }

    #[test]
    fn test_qualified_declaration_attribute() -> Result<()> {
        let doc = Parser::new(b"<?xml-stylesheet xlink:href = 'a.xsl' ?><a/>").parse()?;
        let declaration = doc.declaration.unwrap_or_default();
        assert_eq!(declaration.target, "xml-stylesheet");
        assert_eq!(
            declaration.attributes.get("xlink:href").map(String::as_str),
            Some("a.xsl")
        );
        Ok(())
    }

    #[test]
    fn test_declaration_without_attributes() -> Result<()> {
        let doc = Parser::new(b"<?xml?><a/>").parse()?;
        assert!(doc.declaration.is_some_and(|d| d.attributes.is_empty()));
        Ok(())
    }

    #[test]
    fn test_malformed_declarations() {
        let cases = [
            "<?xml version=1.0?><a/>",
            "<?xml version \"1.0\"?><a/>",
            "<?xml version=\"1.0\"? ><a/>",
            "<?xml version=\"1.0\">",
            "<??><a/>",
            "<?xml version=\"1.0\"",
        ];
        for input in cases {
            assert_eq!(
                kind_of(input),
                Some(ErrorKind::MalformedDeclaration),
                "input: {input}"
            );
        }
    }
}
