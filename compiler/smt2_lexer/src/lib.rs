//! Streaming scanner for SMT-LIB2.
//!
//! Turns a byte stream into tokens for a command parser: parentheses,
//! keywords, symbols, quoted symbols, strings, integers, decimals and
//! `#b`/`#x` bit-vector literals.
//!
//! ```
//! use smt2_lexer::{Scanner, Token, TokenKind};
//!
//! let mut scanner = Scanner::new("(assert (= x #b101))".as_bytes());
//! assert_eq!(scanner.scan().ok(), Some(TokenKind::LeftParen));
//! assert_eq!(scanner.next_token().ok(), Some(Token::Symbol("assert")));
//! ```
//!
//! The scanner is pulled one token at a time and only the last token's
//! payload is available. Interactive sources, input caching for verbatim
//! span retrieval, and rebinding to a new reader are described on
//! [`Scanner`].

mod error;
mod options;
mod scanner;
mod symbol_table;
mod token;

pub use error::{ScanError, ScanErrorKind};
pub use options::ScanOptions;
pub use scanner::Scanner;
pub use symbol_table::{InternError, Symbol, SymbolTable};
pub use token::{Token, TokenKind};

// Numeric payload types, re-exported so callers need not pin the versions.
pub use num_bigint::BigInt;
pub use num_rational::BigRational;
