//! Lexer module for tokenization

pub mod cursor;
pub mod stream;
pub mod token;
pub mod tokenizer;

pub use cursor::Cursor;
pub use stream::TokenStream;
pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize, Tokenizer};
