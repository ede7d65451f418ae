//! The SMT-LIB2 scanner.
//!
//! [`Scanner::scan`] skips whitespace and `;` comments, records the start
//! position of the next token, and dispatches on the byte class of its first
//! byte to one reader per token form. Readers consume input through
//! `bump`, the single place where line/column bookkeeping and
//! input caching happen.
//!
//! # Payload
//!
//! The payload of the last token lives in reused buffers owned by the
//! scanner and is read through [`Scanner::token`] or the individual
//! accessors. Accessors return `None` unless the last token is of a kind
//! that carries that payload.
//!
//! # Positions
//!
//! Lines and columns are 1-based and count bytes. The column reported for a
//! token is the column of its first byte.

use std::io::Read;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use smt2_lexer_core::{CharClass, CharSource, InputCache};
use tracing::{debug, trace};

use crate::error::{ScanError, ScanErrorKind};
use crate::options::ScanOptions;
use crate::symbol_table::{Symbol, SymbolTable};
use crate::token::{Token, TokenKind};

/// Streaming SMT-LIB2 scanner over a reader.
///
/// In interactive mode (see [`ScanOptions::interactive`]) input is read one
/// byte at a time, so a token is produced as soon as its last byte arrives
/// and the scanner never waits for input past it.
///
/// While caching is on, every consumed byte is also recorded. Reading
/// [`cache_size`](Self::cache_size) before and after a span of tokens and
/// passing both to [`cached_str`](Self::cached_str) returns that span as
/// written:
///
/// ```
/// use smt2_lexer::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("(check-sat) (exit)".as_bytes());
/// scanner.start_caching();
/// let begin = scanner.cache_size();
/// while scanner.scan().ok() != Some(TokenKind::RightParen) {}
/// assert_eq!(scanner.cached_str(begin, scanner.cache_size()), Some(&b"(check-sat)"[..]));
/// ```
///
/// [`reset_input`](Self::reset_input) rebinds the scanner to another reader
/// while keeping interned symbols and the cache.
pub struct Scanner<R> {
    source: CharSource<R>,
    cache: InputCache,
    options: ScanOptions,
    symbols: SymbolTable,
    /// Position of the byte under the read cursor.
    read_line: u32,
    read_column: u32,
    /// Start position of the last token.
    line: u32,
    column: u32,
    kind: TokenKind,
    /// Raw bytes of the last string or symbol; digit scratch for numerals.
    text: Vec<u8>,
    id: Symbol,
    number: BigRational,
    bv_width: u32,
}

impl<R: Read> Scanner<R> {
    /// Create a batch scanner with default options.
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ScanOptions::default())
    }

    /// Create a scanner with explicit options.
    pub fn with_options(reader: R, options: ScanOptions) -> Self {
        Self {
            source: CharSource::new(reader, options.interactive),
            cache: InputCache::new(),
            options,
            symbols: SymbolTable::new(),
            read_line: 1,
            read_column: 1,
            line: 1,
            column: 0,
            kind: TokenKind::None,
            text: Vec::new(),
            id: Symbol::EMPTY,
            number: BigRational::zero(),
            bv_width: 0,
        }
    }

    /// Rebind the scanner to a new reader.
    ///
    /// Positions restart at line 1. The symbol table, the options other than
    /// `interactive`, and the caching state are kept.
    pub fn reset_input(&mut self, reader: R, interactive: bool) {
        debug!(interactive, "scanner input rebound");
        self.source = CharSource::new(reader, interactive);
        self.options.interactive = interactive;
        self.read_line = 1;
        self.read_column = 1;
        self.line = 1;
        self.column = 0;
        self.kind = TokenKind::None;
    }

    /// Scan the next token.
    ///
    /// At end of input, returns `EndOfInput` on this and every later call.
    /// On error the offending construct has been consumed, so scanning may
    /// resume with the next call.
    pub fn scan(&mut self) -> Result<TokenKind, ScanError> {
        self.kind = TokenKind::None;
        let kind = self.scan_token()?;
        self.kind = kind;
        trace!(
            kind = kind.display_name(),
            line = self.line,
            column = self.column,
            "scan"
        );
        Ok(kind)
    }

    /// Scan the next token and return it with its payload.
    pub fn next_token(&mut self) -> Result<Token<'_>, ScanError> {
        let kind = self.scan()?;
        Ok(self.token_for(kind))
    }

    fn scan_token(&mut self) -> Result<TokenKind, ScanError> {
        loop {
            self.line = self.read_line;
            self.column = self.read_column;
            let Some(c) = self.current()? else {
                return Ok(TokenKind::EndOfInput);
            };
            match CharClass::of(c) {
                CharClass::Whitespace | CharClass::Newline => self.bump(c),
                CharClass::Semicolon => self.read_comment()?,
                CharClass::LeftParen => {
                    self.bump(c);
                    return Ok(TokenKind::LeftParen);
                }
                CharClass::RightParen => {
                    self.bump(c);
                    return Ok(TokenKind::RightParen);
                }
                CharClass::SymbolChar => return self.read_symbol(c, TokenKind::Symbol),
                CharClass::Colon => return self.read_symbol(c, TokenKind::Keyword),
                CharClass::Pipe => return self.read_quoted_symbol(),
                CharClass::DoubleQuote => return self.read_string(),
                CharClass::Digit => return self.read_number(),
                CharClass::Hash => return self.read_bv_literal(),
                CharClass::Minus if self.options.signed_numerals => {
                    return self.read_signed_number();
                }
                CharClass::Minus => return self.read_symbol(c, TokenKind::Symbol),
                CharClass::Other => {
                    self.bump(c);
                    return Err(self.error(ScanErrorKind::InvalidCharacter { byte: c }));
                }
            }
        }
    }

    // ─── Input ─────────────────────────────────────────────────────────

    /// Byte under the read cursor, `None` at end of input.
    #[inline]
    fn current(&mut self) -> Result<Option<u8>, ScanError> {
        self.source.current().map_err(|source| ScanError::Io {
            source,
            line: self.read_line,
            column: self.read_column,
        })
    }

    /// Consume `byte`, which must be the byte under the cursor.
    #[inline]
    fn bump(&mut self, byte: u8) {
        self.source.advance();
        self.cache.record(byte);
        if byte == b'\n' {
            self.read_line = self.read_line.saturating_add(1);
            self.read_column = 1;
        } else {
            self.read_column = self.read_column.saturating_add(1);
        }
    }

    fn error(&self, kind: ScanErrorKind) -> ScanError {
        ScanError::Lexical {
            kind,
            line: self.line,
            column: self.column,
        }
    }

    // ─── Comments ──────────────────────────────────────────────────────

    /// Skip from `;` through the end of the line, newline included.
    fn read_comment(&mut self) -> Result<(), ScanError> {
        self.bump(b';');
        loop {
            let skipped = self.source.take_until(b'\n');
            self.cache.record_slice(skipped);
            let width = u32::try_from(skipped.len()).unwrap_or(u32::MAX);
            self.read_column = self.read_column.saturating_add(width);
            match self.current()? {
                None => return Ok(()),
                Some(b'\n') => {
                    self.bump(b'\n');
                    return Ok(());
                }
                // Chunk boundary: keep skipping in the next chunk.
                Some(_) => {}
            }
        }
    }

    // ─── Symbols & Keywords ────────────────────────────────────────────

    /// Read a symbol or keyword whose first byte is `lead`.
    fn read_symbol(&mut self, lead: u8, kind: TokenKind) -> Result<TokenKind, ScanError> {
        self.text.clear();
        self.text.push(lead);
        self.bump(lead);
        self.read_symbol_core(kind)
    }

    /// Accumulate symbol characters after the bytes already in `text`.
    fn read_symbol_core(&mut self, kind: TokenKind) -> Result<TokenKind, ScanError> {
        while let Some(c) = self.current()? {
            if !CharClass::of(c).is_symbol_continue() {
                break;
            }
            self.text.push(c);
            self.bump(c);
        }
        self.intern_text();
        Ok(kind)
    }

    /// `|...|`: everything up to the next `|` is taken literally.
    fn read_quoted_symbol(&mut self) -> Result<TokenKind, ScanError> {
        self.bump(b'|');
        self.text.clear();
        loop {
            match self.current()? {
                None => {
                    return Err(self.error(ScanErrorKind::UnterminatedQuote { delimiter: b'|' }));
                }
                Some(b'|') => {
                    self.bump(b'|');
                    self.intern_text();
                    return Ok(TokenKind::Symbol);
                }
                Some(c) => {
                    self.text.push(c);
                    self.bump(c);
                }
            }
        }
    }

    fn intern_text(&mut self) {
        self.id = self.symbols.intern_bytes(&self.text);
    }

    // ─── Strings ───────────────────────────────────────────────────────

    /// `"..."`: `""` stands for one `"`, every other byte is literal.
    fn read_string(&mut self) -> Result<TokenKind, ScanError> {
        self.bump(b'"');
        self.text.clear();
        loop {
            match self.current()? {
                None => {
                    return Err(self.error(ScanErrorKind::UnterminatedQuote { delimiter: b'"' }));
                }
                Some(b'"') => {
                    self.bump(b'"');
                    if self.current()? != Some(b'"') {
                        return Ok(TokenKind::String);
                    }
                    self.text.push(b'"');
                    self.bump(b'"');
                }
                Some(c) => {
                    self.text.push(c);
                    self.bump(c);
                }
            }
        }
    }

    // ─── Numerals ──────────────────────────────────────────────────────

    /// Decimal numeral, with an optional fraction making it a `Float`.
    fn read_number(&mut self) -> Result<TokenKind, ScanError> {
        self.text.clear();
        self.eat_digits()?;
        let mut kind = TokenKind::Int;
        let mut scale = 0;
        if self.current()? == Some(b'.') {
            self.bump(b'.');
            let int_digits = self.text.len();
            self.eat_digits()?;
            scale = self.text.len() - int_digits;
            if scale == 0 {
                return Err(self.error(ScanErrorKind::MalformedNumeral));
            }
            kind = TokenKind::Float;
        }
        // `text` holds integer and fraction digits with the dot dropped.
        let numer = BigInt::parse_bytes(&self.text, 10)
            .ok_or_else(|| self.error(ScanErrorKind::MalformedNumeral))?;
        let denom = num_traits::pow(BigInt::from(10), scale);
        self.number = BigRational::new(numer, denom);
        Ok(kind)
    }

    fn eat_digits(&mut self) -> Result<(), ScanError> {
        while let Some(c) = self.current()? {
            if !c.is_ascii_digit() {
                break;
            }
            self.text.push(c);
            self.bump(c);
        }
        Ok(())
    }

    /// `-`: a negative numeral if a digit follows, otherwise a symbol.
    fn read_signed_number(&mut self) -> Result<TokenKind, ScanError> {
        self.bump(b'-');
        match self.current()? {
            Some(c) if c.is_ascii_digit() => {
                let kind = self.read_number()?;
                self.number = -std::mem::replace(&mut self.number, BigRational::zero());
                Ok(kind)
            }
            _ => {
                self.text.clear();
                self.text.push(b'-');
                self.read_symbol_core(TokenKind::Symbol)
            }
        }
    }

    /// `#b0101` or `#xBEEF`.
    fn read_bv_literal(&mut self) -> Result<TokenKind, ScanError> {
        self.bump(b'#');
        let (prefix, radix, bits_per_digit) = match self.current()? {
            Some(b'b') => (b'b', 2, 1),
            Some(b'x') => (b'x', 16, 4),
            _ => return Err(self.error(ScanErrorKind::MalformedBitVectorLiteral { radix: None })),
        };
        self.bump(prefix);
        self.text.clear();
        while let Some(c) = self.current()? {
            let is_digit = if radix == 2 {
                matches!(c, b'0' | b'1')
            } else {
                c.is_ascii_hexdigit()
            };
            if !is_digit {
                break;
            }
            self.text.push(c);
            self.bump(c);
        }
        let malformed = ScanErrorKind::MalformedBitVectorLiteral { radix: Some(radix) };
        if self.text.is_empty() {
            return Err(self.error(malformed));
        }
        let value = BigInt::parse_bytes(&self.text, radix).ok_or_else(|| self.error(malformed))?;
        self.number = BigRational::from_integer(value);
        let digits = u32::try_from(self.text.len()).unwrap_or(u32::MAX);
        self.bv_width = digits.saturating_mul(bits_per_digit);
        Ok(TokenKind::BitVector)
    }
}

impl<R> Scanner<R> {
    // ─── Token Accessors ───────────────────────────────────────────────

    /// Kind of the last token; `None` before the first scan and after an error.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The last token with its payload.
    pub fn token(&self) -> Option<Token<'_>> {
        (self.kind != TokenKind::None).then(|| self.token_for(self.kind))
    }

    /// Token of kind `kind` carrying the current payload. `kind` is never
    /// `None` here: callers check it or take it from `scan()`.
    fn token_for(&self, kind: TokenKind) -> Token<'_> {
        match kind {
            TokenKind::LeftParen => Token::LeftParen,
            TokenKind::RightParen => Token::RightParen,
            TokenKind::Keyword => Token::Keyword(self.symbols.resolve(self.id)),
            TokenKind::Symbol => Token::Symbol(self.symbols.resolve(self.id)),
            TokenKind::String => Token::String(&self.text),
            TokenKind::Int => Token::Int(&self.number),
            TokenKind::Float => Token::Float(&self.number),
            TokenKind::BitVector => Token::BitVector {
                value: &self.number,
                width: self.bv_width,
            },
            TokenKind::None | TokenKind::EndOfInput => Token::EndOfInput,
        }
    }

    /// Line of the start of the last token (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the start of the last token (1-based, in bytes).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Text of the last symbol or keyword. Keywords include their `:`.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier_symbol().map(|id| self.symbols.resolve(id))
    }

    /// Interned handle of the last symbol or keyword.
    pub fn identifier_symbol(&self) -> Option<Symbol> {
        matches!(self.kind, TokenKind::Symbol | TokenKind::Keyword).then_some(self.id)
    }

    /// Value of the last integer, decimal or bit-vector literal.
    pub fn number(&self) -> Option<&BigRational> {
        self.kind.is_numeric().then_some(&self.number)
    }

    /// Width in bits of the last bit-vector literal.
    pub fn bitvector_width(&self) -> Option<u32> {
        (self.kind == TokenKind::BitVector).then_some(self.bv_width)
    }

    /// Raw bytes of the last string, or of the last symbol or keyword.
    ///
    /// Unlike [`identifier`](Self::identifier), quoted symbols are returned
    /// byte for byte even when they are not valid UTF-8.
    pub fn string_contents(&self) -> Option<&[u8]> {
        matches!(
            self.kind,
            TokenKind::String | TokenKind::Symbol | TokenKind::Keyword
        )
        .then_some(self.text.as_slice())
    }

    /// Identifiers interned so far.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Mutable access to the symbol table, e.g. to pre-intern command names.
    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    pub fn is_interactive(&self) -> bool {
        self.options.interactive
    }

    // ─── Input Caching ─────────────────────────────────────────────────

    /// Start recording consumed input, discarding earlier recordings.
    pub fn start_caching(&mut self) {
        debug!("input caching started");
        self.cache.start();
    }

    /// Stop recording. Recorded input stays available.
    pub fn stop_caching(&mut self) {
        debug!(recorded = self.cache.len(), "input caching stopped");
        self.cache.stop();
    }

    pub fn is_caching(&self) -> bool {
        self.cache.is_recording()
    }

    /// Discard recorded input.
    pub fn reset_cache(&mut self) {
        self.cache.reset();
    }

    /// Number of recorded bytes; take this before and after a span of interest.
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    /// Recorded input between two [`cache_size`](Self::cache_size) readings.
    ///
    /// The byte that ends a symbol or numeral is only looked at, not
    /// consumed, so it is recorded with the next token.
    pub fn cached_str(&self, begin: usize, end: usize) -> Option<&[u8]> {
        self.cache.get(begin, end)
    }

    /// Like [`cached_str`](Self::cached_str), without surrounding whitespace.
    pub fn cached_str_trimmed(&self, begin: usize, end: usize) -> Option<&[u8]> {
        self.cache.get_trimmed(begin, end)
    }
}
