//! Error types for zxml

use std::fmt;
use thiserror::Error;

/// Position in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Span representing a range in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    pub const fn empty() -> Self {
        Self {
            start: Pos::new(0, 0, 0),
            end: Pos::new(0, 0, 0),
        }
    }
}

/// Error kind for detailed categorization
///
/// Every kind is fatal: the parser stops at the first offending token and
/// never hands back a partial tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad `<?...?>` header
    MalformedDeclaration,
    /// Unexpected token while scanning attributes and namespace bindings
    MalformedTagHeader,
    /// Input ended before the element's closing tag
    UnterminatedElement,
    /// Closing tag name differs from the opening tag name
    TagMismatch { expected: String, found: String },
    /// Document does not start with `<`
    UnexpectedRootToken,
    NestingTooDeep { max: u16 },
    DuplicateAttribute { key: String },
    Expected { expected: String, found: String },
    UnterminatedQuote,
    TrailingContent,
    MaxSizeExceeded { max: usize },
    InvalidUtf8,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedDeclaration => write!(f, "malformed xml declaration"),
            Self::MalformedTagHeader => write!(f, "malformed tag header"),
            Self::UnterminatedElement => write!(f, "unterminated element"),
            Self::TagMismatch { expected, found } => {
                write!(f, "closing tag </{found}> does not match <{expected}>")
            }
            Self::UnexpectedRootToken => write!(f, "document must start with '<'"),
            Self::NestingTooDeep { max } => write!(f, "nesting deeper than {max} elements"),
            Self::DuplicateAttribute { key } => write!(f, "duplicate attribute: {key}"),
            Self::Expected { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            Self::UnterminatedQuote => write!(f, "unterminated quoted value"),
            Self::TrailingContent => write!(f, "unexpected content after root element"),
            Self::MaxSizeExceeded { max } => write!(f, "max size exceeded: {max}"),
            Self::InvalidUtf8 => write!(f, "invalid utf-8"),
        }
    }
}

/// Main error type for zxml
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    span: Span,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            span,
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Create error at specific position
    pub fn at(kind: ErrorKind, pos: Pos) -> Self {
        Self::new(kind, Span::new(pos, pos))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error at {}: {}", self.span.start, self.message)
    }
}

/// Result type alias for zxml
pub type Result<T> = std::result::Result<T, Error>;
