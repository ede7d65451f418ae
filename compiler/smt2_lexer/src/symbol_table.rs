//! Interned identifier storage.
//!
//! Every symbol and keyword the scanner produces is interned, so a parser
//! can compare names by handle. Handles stay valid for the life of the
//! scanner, including across `reset_input`, which lets a REPL session keep
//! name tables between commands.
//!
//! The SMT-LIB2 reserved words are pre-interned at fixed indices; see
//! [`Symbol::is_reserved_word`].
//!
//! Identifiers are keyed by their raw bytes, so quoted symbols that are not
//! valid UTF-8 keep distinct handles. Their text resolves with invalid
//! sequences replaced by U+FFFD.

use std::sync::Arc;

use rustc_hash::FxHashMap;

/// Handle to an interned identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

/// Reserved words of SMT-LIB 2.6, pre-interned right after the empty string.
const RESERVED_WORDS: &[&str] = &[
    "!",
    "_",
    "as",
    "BINARY",
    "DECIMAL",
    "exists",
    "forall",
    "HEXADECIMAL",
    "let",
    "match",
    "NUMERAL",
    "par",
    "STRING",
];

impl Symbol {
    /// Pre-interned empty string.
    pub const EMPTY: Symbol = Symbol(0);

    /// Index into the owning table.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Is this one of the SMT-LIB2 reserved words (`!`, `_`, `as`, `let`, ...)?
    #[inline]
    pub fn is_reserved_word(self) -> bool {
        (1..=RESERVED_WORDS.len()).contains(&(self.0 as usize))
    }
}

/// Error when interning fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// More than `u32::MAX` distinct identifiers.
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "symbol table exceeded capacity: {count} identifiers, max is {}",
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

/// Single-threaded identifier interner owned by one scanner.
///
/// Each spelling is stored once: for UTF-8 spellings the map key and the
/// resolved text share one allocation.
#[derive(Debug)]
pub struct SymbolTable {
    map: FxHashMap<Arc<[u8]>, Symbol>,
    strings: Vec<Arc<str>>,
}

impl SymbolTable {
    /// Create a table holding the empty string and the reserved words.
    pub fn new() -> Self {
        let mut table = Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        };
        table.intern("");
        for word in RESERVED_WORDS {
            table.intern(word);
        }
        table
    }

    /// Try to intern a string, returning its handle or an error on overflow.
    pub fn try_intern(&mut self, s: &str) -> Result<Symbol, InternError> {
        self.try_intern_bytes(s.as_bytes())
    }

    /// Try to intern a raw spelling, which need not be valid UTF-8.
    pub fn try_intern_bytes(&mut self, bytes: &[u8]) -> Result<Symbol, InternError> {
        if let Some(&sym) = self.map.get(bytes) {
            return Ok(sym);
        }
        let index = u32::try_from(self.strings.len()).map_err(|_| InternError::Overflow {
            count: self.strings.len(),
        })?;
        let sym = Symbol(index);
        let (text, key): (Arc<str>, Arc<[u8]>) = match std::str::from_utf8(bytes) {
            Ok(s) => {
                let text: Arc<str> = Arc::from(s);
                (Arc::clone(&text), Arc::from(text))
            }
            Err(_) => (Arc::from(String::from_utf8_lossy(bytes)), Arc::from(bytes)),
        };
        self.strings.push(text);
        self.map.insert(key, sym);
        Ok(sym)
    }

    /// Intern a string, returning its handle.
    ///
    /// # Panics
    /// Panics if the table exceeds `u32::MAX` entries.
    /// Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&mut self, s: &str) -> Symbol {
        self.intern_bytes(s.as_bytes())
    }

    /// Intern a raw spelling, returning its handle.
    ///
    /// # Panics
    /// Panics if the table exceeds `u32::MAX` entries.
    #[inline]
    pub fn intern_bytes(&mut self, bytes: &[u8]) -> Symbol {
        self.try_intern_bytes(bytes).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up an already interned string without inserting it.
    pub fn get(&self, s: &str) -> Option<Symbol> {
        self.get_bytes(s.as_bytes())
    }

    /// Look up an already interned raw spelling without inserting it.
    pub fn get_bytes(&self, bytes: &[u8]) -> Option<Symbol> {
        self.map.get(bytes).copied()
    }

    /// Text of an interned symbol, lossily decoded if it is not UTF-8.
    ///
    /// Handles from another table resolve to the empty string.
    pub fn resolve(&self, sym: Symbol) -> &str {
        self.strings.get(sym.0 as usize).map_or("", |s| &**s)
    }

    /// Number of interned strings, including the pre-interned ones.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Always `false`: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
