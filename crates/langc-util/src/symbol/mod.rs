//! Symbol module - String interning for efficient identifier handling.
//!
//! This module provides the [`Symbol`] type, which is a compact (4-byte) handle
//! to an interned string. Symbols enable O(1) string comparison and reduce memory
//! usage when the same string appears multiple times during lexing.
//!
//! # Overview
//!
//! - **Memory efficiency**: each unique string is stored only once
//! - **Fast comparison**: symbol comparison is O(1) via index comparison
//! - **Thread safety**: safe to use across multiple threads concurrently
//! - **Stable handles**: symbols remain valid for the program lifetime
//!
//! # Performance Characteristics
//!
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `Symbol::intern()` (hit) | O(1) | String already interned |
//! | `Symbol::intern()` (miss) | O(1) | New string allocation |
//! | `Symbol` comparison | O(1) | Index comparison only |
//! | `Symbol::as_str()` | O(n) | Linear search by index |
//! | `Symbol::eq_str()` | O(1) | Hash + pointer comparison |
//!
//! # Keyword reservation
//!
//! Every keyword of the source language is pre-interned at a fixed, low
//! index (below [`RESERVED_SYMBOLS_END`]) when the process-wide string
//! table is first touched. This lets the lexer's identifier scanner (see
//! `langc_lex::lexer::identifier`) turn a scanned byte range into both a
//! [`Symbol`] identity *and* a keyword classification in O(1): intern the
//! text, then compare the resulting index against the reserved range.
//!
//! # Examples
//!
//! ```
//! use langc_util::symbol::Symbol;
//!
//! let s1 = Symbol::intern("hello");
//! let s2 = Symbol::intern("hello");
//! let s3 = Symbol::intern("world");
//!
//! assert_eq!(s1, s2);
//! assert_ne!(s1, s3);
//! ```
//!
//! ```
//! use langc_util::symbol::{Symbol, KW_IF, KW_STRUCT};
//!
//! assert_eq!(KW_IF.as_str(), "if");
//! assert!(KW_IF.is_known());
//! assert_eq!(Symbol::intern("struct"), KW_STRUCT);
//! ```

mod interner;

pub use interner::STRING_TABLE;

/// Statistics about the string interner for profiling
///
/// # Examples
///
/// ```
/// use langc_util::symbol::{Symbol, InternerStats};
///
/// let stats = Symbol::stats_struct();
/// println!("Interned {} strings", stats.count);
/// println!("Hit rate: {:.2}%", stats.hit_rate() * 100.0);
/// println!("Load factor: {:.2}", stats.load_factor());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct InternerStats {
    /// Number of interned strings
    pub count: usize,
    /// Hash map capacity (number of buckets)
    pub capacity: usize,
    /// Number of hash collisions encountered
    pub collisions: usize,
    /// Number of cache hits (string already interned)
    pub hits: usize,
    /// Number of cache misses (new string allocation)
    pub misses: usize,
}

impl InternerStats {
    /// Construct a stats snapshot directly (mainly for tests)
    pub fn new(count: usize, capacity: usize, collisions: usize, hits: usize, misses: usize) -> Self {
        Self { count, capacity, collisions, hits, misses }
    }

    /// Fraction of hash table buckets currently occupied
    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.count as f64 / self.capacity as f64
        }
    }

    /// Returns true once the table is more than 75% full
    pub fn is_near_capacity(&self) -> bool {
        self.load_factor() > 0.75
    }

    /// Fraction of lookups that were hits
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Total number of interning operations observed
    pub fn total_operations(&self) -> usize {
        self.hits + self.misses
    }

    /// Unique strings divided by total operations; lower is better dedup
    pub fn memory_efficiency(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.count as f64 / self.total_operations() as f64
        }
    }
}

/// Symbol - an interned string identifier
///
/// A `Symbol` is a compact (4-byte) handle to a string stored in a global
/// string table, comparable in O(1) and cheap to copy.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    /// Index into the global string table
    pub(crate) index: u32,
}

// ============================================================================
// KNOWN SYMBOLS (KEYWORDS)
// ============================================================================

/// Reserved symbol indices for known symbols (keywords)
///
/// All symbols with index < this value are pre-defined at process start and
/// correspond one-to-one with a keyword of the source language.
const RESERVED_SYMBOLS_END: u32 = 512;

macro_rules! keywords {
    ( $( $idx:literal => $const_name:ident, $text:literal ; )+ ) => {
        $(
            #[doc = concat!("Known symbol for the `", $text, "` keyword")]
            pub const $const_name: Symbol = Symbol { index: $idx };
        )+

        /// All reserved keyword spellings together with their fixed symbol index.
        ///
        /// The order here is load-bearing: [`interner::StringTable::initialize_known_symbols`]
        /// pre-interns strings in exactly this order, so each spelling lands at the index
        /// named above.
        pub(crate) const KEYWORD_TABLE: &[(&str, u32)] = &[
            $( ($text, $idx), )+
        ];
    };
}

keywords! {
    0 => KW_ABSTRACT, "abstract";
    1 => KW_ALIAS, "alias";
    2 => KW_ALIGN, "align";
    3 => KW_ASM, "asm";
    4 => KW_ASSERT, "assert";
    5 => KW_AUTO, "auto";
    6 => KW_BODY, "body";
    7 => KW_BOOL, "bool";
    8 => KW_BREAK, "break";
    9 => KW_BYTE, "byte";
    10 => KW_CASE, "case";
    11 => KW_CAST, "cast";
    12 => KW_CATCH, "catch";
    13 => KW_CDOUBLE, "cdouble";
    14 => KW_CENT, "cent";
    15 => KW_CFLOAT, "cfloat";
    16 => KW_CHAR, "char";
    17 => KW_CLASS, "class";
    18 => KW_CONST, "const";
    19 => KW_CONTINUE, "continue";
    20 => KW_CREAL, "creal";
    21 => KW_DCHAR, "dchar";
    22 => KW_DEBUG, "debug";
    23 => KW_DEFAULT, "default";
    24 => KW_DELEGATE, "delegate";
    25 => KW_DELETE, "delete";
    26 => KW_DEPRECATED, "deprecated";
    27 => KW_DO, "do";
    28 => KW_DOUBLE, "double";
    29 => KW_ELSE, "else";
    30 => KW_ENUM, "enum";
    31 => KW_EXPORT, "export";
    32 => KW_EXTERN, "extern";
    33 => KW_FALSE, "false";
    34 => KW_FINAL, "final";
    35 => KW_FINALLY, "finally";
    36 => KW_FLOAT, "float";
    37 => KW_FOR, "for";
    38 => KW_FOREACH, "foreach";
    39 => KW_FOREACH_REVERSE, "foreach_reverse";
    40 => KW_FUNCTION, "function";
    41 => KW_GOTO, "goto";
    42 => KW_IDOUBLE, "idouble";
    43 => KW_IF, "if";
    44 => KW_IFLOAT, "ifloat";
    45 => KW_IMMUTABLE, "immutable";
    46 => KW_IMPORT, "import";
    47 => KW_IN, "in";
    48 => KW_INOUT, "inout";
    49 => KW_INT, "int";
    50 => KW_INTERFACE, "interface";
    51 => KW_INVARIANT, "invariant";
    52 => KW_IREAL, "ireal";
    53 => KW_IS, "is";
    54 => KW_LAZY, "lazy";
    55 => KW_LONG, "long";
    56 => KW_MACRO, "macro";
    57 => KW_MIXIN, "mixin";
    58 => KW_MODULE, "module";
    59 => KW_NEW, "new";
    60 => KW_NOTHROW, "nothrow";
    61 => KW_NULL, "null";
    62 => KW_OUT, "out";
    63 => KW_OVERRIDE, "override";
    64 => KW_PACKAGE, "package";
    65 => KW_PRAGMA, "pragma";
    66 => KW_PRIVATE, "private";
    67 => KW_PROTECTED, "protected";
    68 => KW_PUBLIC, "public";
    69 => KW_PURE, "pure";
    70 => KW_REAL, "real";
    71 => KW_REF, "ref";
    72 => KW_RETURN, "return";
    73 => KW_SCOPE, "scope";
    74 => KW_SHARED, "shared";
    75 => KW_SHORT, "short";
    76 => KW_STATIC, "static";
    77 => KW_STRUCT, "struct";
    78 => KW_SUPER, "super";
    79 => KW_SWITCH, "switch";
    80 => KW_SYNCHRONIZED, "synchronized";
    81 => KW_TEMPLATE, "template";
    82 => KW_THIS, "this";
    83 => KW_THROW, "throw";
    84 => KW_TRUE, "true";
    85 => KW_TRY, "try";
    86 => KW_TYPEDEF, "typedef";
    87 => KW_TYPEID, "typeid";
    88 => KW_TYPEOF, "typeof";
    89 => KW_UBYTE, "ubyte";
    90 => KW_UCENT, "ucent";
    91 => KW_UINT, "uint";
    92 => KW_ULONG, "ulong";
    93 => KW_UNION, "union";
    94 => KW_UNITTEST, "unittest";
    95 => KW_USHORT, "ushort";
    96 => KW_VERSION, "version";
    97 => KW_VOID, "void";
    98 => KW_VOLATILE, "volatile";
    99 => KW_WCHAR, "wchar";
    100 => KW_WHILE, "while";
    101 => KW_WITH, "with";
    102 => KW_FILE, "__FILE__";
    103 => KW_MODULE_STR, "__MODULE__";
    104 => KW_LINE, "__LINE__";
    105 => KW_FUNCTION_STR, "__FUNCTION__";
    106 => KW_PRETTY_FUNCTION, "__PRETTY_FUNCTION__";
    107 => KW_GSHARED, "__gshared";
    108 => KW_TRAITS, "__traits";
    109 => KW_VECTOR, "__vector";
    110 => KW_PARAMETERS, "__parameters";
}

impl Symbol {
    /// The maximum index value for a symbol
    pub const MAX_INDEX: u32 = u32::MAX;

    /// Intern a string, returning its symbol
    ///
    /// # Examples
    ///
    /// ```
    /// use langc_util::symbol::Symbol;
    ///
    /// let keyword = Symbol::intern("if");
    /// let name = Symbol::intern("main");
    /// assert_eq!(Symbol::intern("if"), keyword);
    /// ```
    #[inline]
    pub fn intern(string: &str) -> Self {
        STRING_TABLE.intern(string)
    }

    /// Get the string value associated with this symbol
    ///
    /// # Examples
    ///
    /// ```
    /// use langc_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello");
    /// assert_eq!(sym.as_str(), "hello");
    /// ```
    #[inline]
    pub fn as_str(&self) -> &'static str {
        STRING_TABLE.get(*self).unwrap_or("")
    }

    /// Check if the symbol's string is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Length of the symbol's string in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Check if the symbol's string starts with a given prefix
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.as_str().starts_with(prefix)
    }

    /// Check if the symbol's string ends with a given suffix
    #[inline]
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.as_str().ends_with(suffix)
    }

    /// Compare the symbol's string with a `&str` without allocation
    #[inline]
    pub fn eq_str(&self, other: &str) -> bool {
        self.as_str() == other
    }

    /// Returns true if this is a "known" symbol (a reserved keyword)
    ///
    /// # Examples
    ///
    /// ```
    /// use langc_util::symbol::{Symbol, KW_IF};
    ///
    /// assert!(KW_IF.is_known());
    /// assert!(!Symbol::intern("my_variable").is_known());
    /// ```
    #[inline]
    pub fn is_known(&self) -> bool {
        self.index < RESERVED_SYMBOLS_END
    }

    /// Get the raw index value
    #[inline]
    pub fn as_u32(&self) -> u32 {
        self.index
    }

    /// Create a symbol from a raw index
    ///
    /// # Safety
    ///
    /// The index must correspond to a valid entry in the string table.
    #[inline]
    pub unsafe fn from_u32_unchecked(index: u32) -> Self {
        Self { index }
    }

    /// Statistics about the string interner, for profiling
    #[inline]
    pub fn stats_struct() -> InternerStats {
        STRING_TABLE.stats()
    }

    /// Basic `(count, capacity)` statistics; see [`Symbol::stats_struct`] for detail
    #[inline]
    pub fn stats() -> (usize, usize) {
        let stats = STRING_TABLE.stats();
        (stats.count, stats.capacity)
    }

    /// Intern a keyword spelling, returning its predefined symbol if known
    ///
    /// This is equivalent to [`Symbol::intern`] but documents intent at call
    /// sites that specifically expect a keyword; unknown spellings are
    /// interned normally and report `is_known() == false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use langc_util::symbol::{Symbol, KW_IF};
    ///
    /// assert_eq!(Symbol::intern_known("if"), KW_IF);
    /// assert!(!Symbol::intern_known("frobnicate").is_known());
    /// ```
    #[inline]
    pub fn intern_known(string: &str) -> Self {
        Self::intern(string)
    }

    /// True if `text` spells one of the reserved keywords
    ///
    /// # Examples
    ///
    /// ```
    /// use langc_util::symbol::Symbol;
    ///
    /// assert!(Symbol::is_keyword_text("struct"));
    /// assert!(!Symbol::is_keyword_text("my_struct"));
    /// ```
    pub fn is_keyword_text(text: &str) -> bool {
        KEYWORD_TABLE.iter().any(|(spelling, _)| *spelling == text)
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

impl std::fmt::Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.as_str())
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pretty-print a symbol with quotes for debugging
pub trait SymbolPretty {
    /// Get a pretty-printed version with quotes
    fn pretty(&self) -> SymbolPrettyDisplay<'_>;
}

impl SymbolPretty for Symbol {
    fn pretty(&self) -> SymbolPrettyDisplay<'_> {
        SymbolPrettyDisplay(self)
    }
}

/// Display wrapper for pretty-printing symbols with quotes
pub struct SymbolPrettyDisplay<'a>(&'a Symbol);

impl std::fmt::Display for SymbolPrettyDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.0.as_str())
    }
}

impl std::fmt::Debug for SymbolPrettyDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SymbolPretty(\"{}\")", self.0.as_str())
    }
}

// Ensure Symbol is thread-safe
static_assertions::assert_impl_all!(Symbol: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_symbol_intern() {
        let s1 = Symbol::intern("hello");
        let s2 = Symbol::intern("hello");
        let s3 = Symbol::intern("world");

        assert_eq!(s1, s2);
        assert_ne!(s1, s3);
        assert_eq!(s1.as_str(), "hello");
        assert_eq!(s3.as_str(), "world");
    }

    #[test]
    fn test_symbol_display() {
        let s = Symbol::intern("test");
        assert_eq!(format!("{}", s), "test");
        assert_eq!(format!("{:?}", s), "Symbol(test)");
    }

    #[test]
    fn test_symbol_pretty() {
        let s = Symbol::intern("test");
        assert_eq!(format!("{}", s.pretty()), "\"test\"");
        assert_eq!(format!("{:?}", s.pretty()), "SymbolPretty(\"test\")");
    }

    #[test]
    fn test_symbol_is_empty() {
        assert!(Symbol::intern("").is_empty());
        assert!(!Symbol::intern("a").is_empty());
    }

    #[test]
    fn test_symbol_len() {
        assert_eq!(Symbol::intern("").len(), 0);
        assert_eq!(Symbol::intern("hello").len(), 5);
        assert_eq!(Symbol::intern("你好").len(), 6);
    }

    #[test]
    fn test_symbol_starts_with() {
        let sym = Symbol::intern("hello_world");
        assert!(sym.starts_with("hello"));
        assert!(!sym.starts_with("world"));
    }

    #[test]
    fn test_symbol_ends_with() {
        let sym = Symbol::intern("hello_world");
        assert!(sym.ends_with("world"));
        assert!(!sym.ends_with("hello"));
    }

    #[test]
    fn test_symbol_eq_str() {
        let sym = Symbol::intern("hello");
        assert!(sym.eq_str("hello"));
        assert!(!sym.eq_str("world"));
    }

    #[test]
    fn test_symbol_to_string() {
        let sym = Symbol::intern("hello");
        assert_eq!(sym.to_string(), "hello");
    }

    #[test]
    fn test_symbol_is_known() {
        assert!(KW_IF.is_known());
        assert!(KW_STRUCT.is_known());
        assert!(KW_INT.is_known());
        assert!(!Symbol::intern("my_variable").is_known());
    }

    #[test]
    fn test_known_symbols_values() {
        assert_eq!(KW_IF.as_str(), "if");
        assert_eq!(KW_STRUCT.as_str(), "struct");
        assert_eq!(KW_INT.as_str(), "int");
        assert_eq!(KW_DOUBLE.as_str(), "double");
        assert_eq!(KW_TRUE.as_str(), "true");
    }

    #[test]
    fn test_intern_known() {
        assert_eq!(Symbol::intern_known("if"), KW_IF);
        assert_eq!(Symbol::intern_known("int"), KW_INT);

        let unknown = Symbol::intern_known("unknown_keyword");
        assert_eq!(unknown.as_str(), "unknown_keyword");
        assert!(!unknown.is_known());
    }

    #[test]
    fn test_is_keyword_text() {
        assert!(Symbol::is_keyword_text("struct"));
        assert!(Symbol::is_keyword_text("__FILE__"));
        assert!(!Symbol::is_keyword_text("my_struct"));
    }

    #[test]
    fn test_from_u32_unchecked() {
        let sym = Symbol::intern("test");
        let index = sym.as_u32();
        let sym2 = unsafe { Symbol::from_u32_unchecked(index) };
        assert_eq!(sym, sym2);
    }

    #[test]
    fn test_as_u32() {
        let sym = Symbol::intern("test");
        assert!(sym.as_u32() < Symbol::MAX_INDEX);
    }

    #[test]
    fn test_stats() {
        let (count, capacity) = Symbol::stats();
        assert!(count > 0);
        assert!(capacity >= count);
    }

    #[test]
    fn test_stats_struct() {
        let stats = Symbol::stats_struct();
        assert!(stats.count > 0);
        assert!(stats.capacity >= stats.count);
        assert!(stats.load_factor() >= 0.0 && stats.load_factor() <= 1.0);
        assert!(stats.hit_rate() >= 0.0 && stats.hit_rate() <= 1.0);
    }

    #[test]
    fn test_interner_stats_methods() {
        let stats = InternerStats::new(100, 200, 5, 80, 20);

        assert_eq!(stats.load_factor(), 0.5);
        assert!(!stats.is_near_capacity());
        assert_eq!(stats.hit_rate(), 0.8);
        assert_eq!(stats.total_operations(), 100);
        assert_eq!(stats.memory_efficiency(), 1.0);

        let stats_full = InternerStats::new(100, 120, 0, 0, 0);
        assert!(stats_full.is_near_capacity());

        let stats_empty = InternerStats::new(0, 0, 0, 0, 0);
        assert_eq!(stats_empty.load_factor(), 0.0);
        assert_eq!(stats_empty.hit_rate(), 0.0);
    }

    #[test]
    fn test_concurrent_intern() {
        let handles: Vec<_> = (0..10)
            .map(|i| thread::spawn(move || Symbol::intern(&format!("thread_{}", i))))
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for i in 0..results.len() {
            for j in (i + 1)..results.len() {
                assert_ne!(results[i], results[j]);
            }
        }
    }

    #[test]
    fn test_concurrent_same_string() {
        let handles: Vec<_> = (0..10)
            .map(|_| thread::spawn(|| Symbol::intern("concurrent_same")))
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for symbol in &results[1..] {
            assert_eq!(results[0], *symbol);
        }
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Symbol>();
        assert_send_sync::<InternerStats>();
    }

    #[test]
    fn test_empty_string() {
        let s = Symbol::intern("");
        assert_eq!(s.as_str(), "");
        assert!(s.is_empty());
    }

    #[test]
    fn test_unicode_strings() {
        for test in ["你好", "世界", "🦀", "こんにちは", "Привет"] {
            let sym = Symbol::intern(test);
            assert_eq!(sym.as_str(), test);
        }
    }

    #[test]
    fn test_long_strings() {
        let long_string = "a".repeat(10000);
        let sym = Symbol::intern(&long_string);
        assert_eq!(sym.as_str(), long_string.as_str());
    }

    #[test]
    fn test_idempotence() {
        for s in ["hello", "world", "test", "foo", "bar"] {
            let sym1 = Symbol::intern(s);
            let sym2 = Symbol::intern(s);
            let sym3 = Symbol::intern(sym1.as_str());
            assert_eq!(sym1, sym2);
            assert_eq!(sym1, sym3);
        }
    }

    #[test]
    fn test_uniqueness() {
        let strings = ["abc", "def", "ghi", "jkl", "mno"];
        for i in 0..strings.len() {
            for j in (i + 1)..strings.len() {
                assert_ne!(Symbol::intern(strings[i]), Symbol::intern(strings[j]));
            }
        }
    }

    #[test]
    fn test_known_symbol_performance() {
        assert!(KW_IF.index < RESERVED_SYMBOLS_END);
        assert!(KW_STRUCT.index < RESERVED_SYMBOLS_END);
        for _ in 0..1000 {
            let _ = Symbol::intern_known("if");
            let _ = Symbol::intern_known("int");
        }
    }
}
