//! zxml - recursive-descent XML parser with a round-tripping serializer
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), zxml::Error> {
//! let doc = zxml::from_str(r#"<?xml version="1.0"?><ns:list xmlns:ns="urn:x"><item>one</item></ns:list>"#)?;
//! assert_eq!(doc.root.local_name(), "list");
//! assert_eq!(doc.root.namespace("ns"), Some("urn:x"));
//! assert_eq!(doc.root.children[0].text, "one");
//!
//! let text = zxml::to_string(&doc);
//! assert_eq!(zxml::from_str(&text)?, doc);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod lexer;
pub use lexer::{tokenize, Token, TokenKind};

pub mod model;
pub use model::{Declaration, Document, Element};

pub mod parser;
pub use parser::{Config, DuplicatePolicy, Parser};

pub mod formatter;
pub use formatter::{
    to_string, to_string_with_config, write_document, EmptyTagStyle, FormatConfig, Indent,
};

/// Parse an XML document from a string
pub fn from_str(s: &str) -> Result<Document> {
    Parser::new(s.as_bytes()).parse()
}

/// Parse an XML document from UTF-8 bytes
pub fn from_bytes(bytes: &[u8]) -> Result<Document> {
    Parser::new(bytes).parse()
}

/// Parse with custom configuration
pub fn from_str_with_config(s: &str, config: Config) -> Result<Document> {
    Parser::with_config(s.as_bytes(), config).parse()
}
