//! Recursive-descent XML parser
//!
//! The parser tokenizes the whole input up front and then walks the token
//! sequence with a single cursor, deciding at each step from one or two
//! tokens of lookahead whether it sees an attribute, a namespace binding, a
//! self-closing tag, a child element or a closing tag. It never backtracks.
//!
//! - `declaration`: the optional leading `<?...?>`
//! - `header`: attributes and `xmlns` bindings of an opening tag
//! - `element`: mixed content and the closing tag, recursively

mod declaration;
mod element;
mod header;

use indexmap::IndexMap;
use tracing::{debug, instrument};

use crate::error::{Error, ErrorKind, Result, Span};
use crate::lexer::{tokenize, Token, TokenKind, TokenStream};
use crate::model::Document;

/// How repeated attribute or namespace keys within one tag are handled
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Later occurrences silently overwrite earlier ones
    #[default]
    LastWins,
    /// Fail with [`ErrorKind::DuplicateAttribute`]
    Reject,
}

/// Configuration for the XML parser
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum element nesting depth (0 means unlimited)
    pub max_depth: u16,
    /// Maximum input size in bytes (0 means unlimited)
    pub max_size: usize,
    pub duplicates: DuplicatePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 128,
            max_size: 10 * 1024 * 1024, // 10 MB default
            duplicates: DuplicatePolicy::LastWins,
        }
    }
}

impl Config {
    /// Create a new config with unlimited depth and size
    pub const fn unlimited() -> Self {
        Self {
            max_depth: 0,
            max_size: 0,
            duplicates: DuplicatePolicy::LastWins,
        }
    }

    /// Create a new config with specific limits
    pub const fn new(max_depth: u16, max_size: usize) -> Self {
        Self {
            max_depth,
            max_size,
            duplicates: DuplicatePolicy::LastWins,
        }
    }

    pub const fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }
}

/// `name` or `prefix:name` as it appeared in the source
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct QName<'a> {
    prefix: Option<&'a str>,
    local: &'a str,
}

impl QName<'_> {
    fn qualified(&self) -> String {
        match self.prefix {
            Some(prefix) => format!("{prefix}:{}", self.local),
            None => self.local.to_string(),
        }
    }
}

/// XML parser
#[derive(Debug)]
pub struct Parser<'a> {
    input: &'a [u8],
    tokens: TokenStream<'a>,
    config: Config,
    depth: u16,
}

impl<'a> Parser<'a> {
    /// Create a new parser with default configuration
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_config(input, Config::default())
    }

    /// Create a new parser with custom configuration
    pub fn with_config(input: &'a [u8], config: Config) -> Self {
        Self {
            input,
            tokens: TokenStream::new(Vec::new()),
            config,
            depth: 0,
        }
    }

    /// Parse an XML document: optional declaration, then exactly one root
    /// element, then nothing but whitespace.
    #[instrument(level = "debug", skip_all, fields(len = self.input.len()))]
    pub fn parse(&mut self) -> Result<Document> {
        if self.config.max_size > 0 && self.input.len() > self.config.max_size {
            return Err(Error::new(
                ErrorKind::MaxSizeExceeded {
                    max: self.config.max_size,
                },
                Span::empty(),
            ));
        }

        self.tokens = TokenStream::new(tokenize(self.input)?);
        self.depth = 0;

        let first = self.tokens.skip_whitespace();
        if !first.is_operator('<') {
            return Err(Self::error(ErrorKind::UnexpectedRootToken, first));
        }

        let declaration = if self.tokens.peek(1).is_operator('?') {
            self.tokens.bump();
            self.tokens.bump();
            let declaration = self.parse_declaration()?;
            let next = self.tokens.skip_whitespace();
            if !next.is_operator('<') {
                return Err(Self::error(ErrorKind::UnexpectedRootToken, next));
            }
            Some(declaration)
        } else {
            None
        };

        let root = self.parse_element()?;

        let rest = self.tokens.skip_whitespace();
        if rest.kind != TokenKind::Eof {
            return Err(Self::error(ErrorKind::TrailingContent, rest));
        }

        debug!(
            root = %root.name,
            children = root.children.len(),
            declaration = declaration.is_some(),
            "parsed document"
        );
        Ok(Document { declaration, root })
    }

    /// Read `name` or `prefix:name` at the cursor. On failure the offending
    /// token is returned and nothing is consumed.
    fn parse_qname(&mut self) -> std::result::Result<QName<'a>, Token<'a>> {
        let first = self.tokens.current();
        if !first.is_identifier() {
            return Err(first);
        }
        if !self.tokens.peek(1).is_operator(':') {
            self.tokens.bump();
            return Ok(QName {
                prefix: None,
                local: first.text,
            });
        }
        let local = self.tokens.peek(2);
        if !local.is_identifier() {
            return Err(local);
        }
        self.tokens.bump();
        self.tokens.bump();
        self.tokens.bump();
        Ok(QName {
            prefix: Some(first.text),
            local: local.text,
        })
    }

    /// Read `name = "value"` at the cursor; any deviation fails with `kind`
    fn parse_attribute(&mut self, kind: &ErrorKind) -> Result<(QName<'a>, &'a str)> {
        let name = self
            .parse_qname()
            .map_err(|at| Self::error(kind.clone(), at))?;

        let eq = self.tokens.skip_whitespace();
        if !eq.is_operator('=') {
            return Err(Self::error(kind.clone(), eq));
        }
        self.tokens.bump();

        let quoted = self.tokens.skip_whitespace();
        let Some(value) = quoted.unquoted() else {
            return Err(Self::error(kind.clone(), quoted));
        };
        self.tokens.bump();
        Ok((name, value))
    }

    /// Insert according to the configured duplicate policy
    fn store(
        &self,
        map: &mut IndexMap<String, String>,
        key: String,
        value: &str,
        name: &QName<'_>,
        at: Token<'_>,
    ) -> Result<()> {
        if self.config.duplicates == DuplicatePolicy::Reject && map.contains_key(&key) {
            return Err(Self::error(
                ErrorKind::DuplicateAttribute {
                    key: name.qualified(),
                },
                at,
            ));
        }
        map.insert(key, value.to_string());
        Ok(())
    }

    fn enter_element(&mut self, at: Token<'_>) -> Result<()> {
        self.depth = self.depth.saturating_add(1);
        if self.config.max_depth > 0 && self.depth > self.config.max_depth {
            return Err(Self::error(
                ErrorKind::NestingTooDeep {
                    max: self.config.max_depth,
                },
                at,
            ));
        }
        Ok(())
    }

    fn exit_element(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn error(kind: ErrorKind, at: Token<'_>) -> Error {
        Error::new(kind, at.span)
    }

    fn expected(expected: &str, at: Token<'_>) -> Error {
        Self::error(
            ErrorKind::Expected {
                expected: expected.to_string(),
                found: at.describe(),
            },
            at,
        )
    }
}
