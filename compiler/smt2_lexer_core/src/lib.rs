//! Low-level building blocks of the SMT-LIB2 scanner.
//!
//! - [`CharClass`]: compile-time byte classification table
//! - [`CharSource`]: buffered pull source over any [`std::io::Read`]
//! - [`InputCache`]: verbatim recording of consumed input
//!
//! This crate knows nothing about tokens or numeric values; the scanner in
//! `smt2_lexer` drives these pieces.

mod cache;
mod char_class;
mod char_source;

pub use cache::InputCache;
pub use char_class::{CharClass, CLASS_TABLE};
pub use char_source::{CharSource, BATCH_CHUNK_SIZE};
