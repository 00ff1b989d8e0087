//! String interning for identifiers and literal text.
//!
//! Every lexeme the lexer keeps (identifier names, string literal bodies)
//! is copied once into interner-owned storage and referred to by a small
//! [`Symbol`] afterwards. Storage is a chain of fixed-capacity buffers that
//! are appended but never reallocated, so text resolved from a symbol is
//! stable for the interner's whole lifetime. Interning the same text twice
//! returns the same symbol.

use rustc_hash::FxHashMap;
use std::num::NonZeroU32;

/// Minimum byte capacity of one storage buffer.
const MIN_BUFFER_BYTES: usize = 4096;

/// An interned string handle (4 bytes, `Copy`).
///
/// Resolve it with [`Interner::resolve`]. Two symbols from the same
/// interner compare equal iff their text is equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(NonZeroU32);

impl Symbol {
    #[inline]
    fn from_raw(raw: u32) -> Self {
        // Offset by 1: NonZeroU32 cannot hold 0.
        Symbol(NonZeroU32::new(raw + 1).expect("symbol index overflow"))
    }

    #[inline]
    fn to_raw(self) -> usize {
        (self.0.get() - 1) as usize
    }

    /// A placeholder symbol for error messages and tests. Never resolve it.
    #[inline]
    pub const fn dummy() -> Self {
        // SAFETY: 1 is non-zero.
        Symbol(unsafe { NonZeroU32::new_unchecked(1) })
    }
}

/// Location of one interned string inside the buffer chain.
#[derive(Debug, Clone, Copy)]
struct TextSpan {
    buffer: u32,
    start: u32,
    len: u32,
}

/// Deduplicating string store with stable text.
pub struct Interner {
    /// Content -> symbol, for deduplication.
    map: FxHashMap<String, Symbol>,

    /// Symbol index -> location of the canonical copy.
    spans: Vec<TextSpan>,

    /// Append-only storage buffers. Each is created with its final
    /// capacity and never grown, so `&str` slices into them stay valid.
    buffers: Vec<String>,

    min_buffer_bytes: usize,
}

impl Interner {
    /// Create an empty interner with the default buffer size.
    pub fn new() -> Self {
        Self::with_chunk_size(MIN_BUFFER_BYTES)
    }

    /// Create an interner whose buffers hold at least `min_buffer_bytes`.
    ///
    /// Tests use a tiny size to exercise buffer growth cheaply.
    pub fn with_chunk_size(min_buffer_bytes: usize) -> Self {
        assert!(min_buffer_bytes > 0, "buffer size must be non-zero");
        Interner {
            map: FxHashMap::default(),
            spans: Vec::new(),
            buffers: Vec::new(),
            min_buffer_bytes,
        }
    }

    /// Intern `text`, returning its symbol.
    ///
    /// Already-interned content returns the existing symbol without
    /// copying. New content is appended to the current buffer, or to a
    /// fresh one if it does not fit; a string never spans two buffers.
    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(&symbol) = self.map.get(text) {
            return symbol;
        }

        let fits = match self.buffers.last() {
            Some(buffer) => buffer.capacity() - buffer.len() >= text.len(),
            None => false,
        };
        if !fits {
            let capacity = text.len().max(self.min_buffer_bytes);
            self.buffers.push(String::with_capacity(capacity));
        }

        let buffer_index = self.buffers.len() - 1;
        let buffer = &mut self.buffers[buffer_index];
        let start = buffer.len();
        buffer.push_str(text);

        let symbol = Symbol::from_raw(self.spans.len() as u32);
        self.spans.push(TextSpan {
            buffer: buffer_index as u32,
            start: start as u32,
            len: text.len() as u32,
        });
        self.map.insert(text.to_string(), symbol);
        symbol
    }

    /// Resolve a symbol back to its text.
    ///
    /// # Panics
    ///
    /// Panics if the symbol did not come from this interner.
    #[inline]
    pub fn resolve(&self, symbol: Symbol) -> &str {
        let span = self.spans[symbol.to_raw()];
        let start = span.start as usize;
        &self.buffers[span.buffer as usize][start..start + span.len as usize]
    }

    /// Number of distinct interned strings.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// True before the first intern call.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Number of storage buffers currently owned.
    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_deduplicates() {
        let mut interner = Interner::new();

        let a = interner.intern("alpha");
        let b = interner.intern("beta");
        let a2 = interner.intern("alpha");

        assert_eq!(a, a2);
        assert_ne!(a, b);
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn test_resolve() {
        let mut interner = Interner::new();
        let sym = interner.intern("print");
        assert_eq!(interner.resolve(sym), "print");
    }

    #[test]
    fn test_empty_string() {
        let mut interner = Interner::new();
        let sym = interner.intern("");
        assert_eq!(interner.resolve(sym), "");
        assert_eq!(sym, interner.intern(""));
    }

    #[test]
    fn test_growth_adds_buffers() {
        let mut interner = Interner::with_chunk_size(8);

        let early = interner.intern("abcdef");
        let symbols: Vec<_> = (0..32)
            .map(|i| interner.intern(&format!("name_{i}")))
            .collect();

        assert!(interner.buffer_count() >= 2);
        // Earlier text is untouched by growth.
        assert_eq!(interner.resolve(early), "abcdef");
        for (i, sym) in symbols.iter().enumerate() {
            assert_eq!(interner.resolve(*sym), format!("name_{i}"));
        }
    }

    #[test]
    fn test_oversized_string_gets_own_buffer() {
        let mut interner = Interner::with_chunk_size(4);
        let long = "a".repeat(64);
        let sym = interner.intern(&long);
        assert_eq!(interner.resolve(sym), long);
    }

    #[test]
    fn test_symbol_is_copy() {
        let mut interner = Interner::new();
        let sym = interner.intern("x");
        let sym2 = sym;
        let sym3 = sym;
        assert_eq!(interner.resolve(sym2), interner.resolve(sym3));
    }
}
