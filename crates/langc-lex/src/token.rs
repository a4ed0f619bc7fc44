//! Token kinds and the token value record.
//!
//! `TokenKind` is the closed enumeration of everything the scanner can
//! produce: punctuation and compound operators, the literal-value kinds
//! (`Int32V`, `Float64V`, `StringV`, ...), `Identifier`, and one variant per
//! keyword. Keyword kinds are deliberately distinct from the corresponding
//! value kinds - `Int32` is the keyword `int`, `Int32V` is a 32-bit integer
//! literal - since the two never interchange.

use langc_util::span::Span;
use langc_util::symbol::{self, Symbol};

/// A single postfix letter on a string literal, selecting its character width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StringPostfix {
    /// No postfix; `char`/UTF-8.
    None,
    /// `c` - `char` (UTF-8), explicit.
    Narrow,
    /// `w` - `wchar` (UTF-16).
    Wide,
    /// `d` - `dchar` (UTF-32).
    Dchar,
}

/// Width of a character literal, chosen from the decoded code point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharWidth {
    /// `char` - fits in one UTF-8 code unit's semantic slot (ASCII or BMP-narrow use).
    Narrow,
    /// `wchar` - produced by a `\u` escape.
    Wide,
    /// `dchar` - produced by a `\U` escape, a named entity, or a non-BMP code point.
    Dchar,
}

/// The closed set of token kinds the scanner can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Punctuation
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Question,
    Comma,
    Semicolon,
    Colon,
    Dollar,
    At,
    Pound,

    // Dot family
    Dot,
    DotDot,
    DotDotDot,

    // Arithmetic
    Plus,
    PlusAssign,
    PlusPlus,
    Minus,
    MinusAssign,
    MinusMinus,
    Star,
    StarAssign,
    Slash,
    SlashAssign,
    Percent,
    PercentAssign,

    // Bitwise / logical
    Amp,
    AmpAssign,
    AmpAmp,
    Pipe,
    PipeAssign,
    PipePipe,
    Caret,
    CaretAssign,
    CaretCaret,
    CaretCaretAssign,
    Tilde,
    TildeAssign,

    // Shifts
    LShift,
    LShiftAssign,
    RShift,
    RShiftAssign,
    URShift,
    URShiftAssign,

    // Assignment / comparison
    Assign,
    Equal,
    FatArrow,
    NotEqual,

    // Ordering (ordered)
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // Unordered comparisons (D has no NaN-unordered ops in Rust's surface, but the
    // source language does)
    LessGreater,
    LessGreaterEqual,
    NotLess,
    NotLessEqual,
    NotLessGreater,
    NotLessGreaterEqual,
    NotGreater,
    NotGreaterEqual,
    Bang,

    // Literal-value kinds
    Int32V,
    Uns32V,
    Int64V,
    Uns64V,
    Float32V,
    Float64V,
    Float80V,
    Imaginary32V,
    Imaginary64V,
    Imaginary80V,
    CharV,
    WCharV,
    DCharV,
    StringV,
    XStringV,

    /// Comment token, only emitted when comment-token mode is enabled.
    Comment,

    /// Ordinary, non-keyword identifier.
    Identifier,

    Eof,

    /// A byte that does not start any valid token; the scanner recovers by
    /// skipping it and emitting this marker.
    Invalid,

    // Keywords (kind per D keyword; mirrors `langc_util::symbol::KW_*`)
    Abstract,
    Alias,
    Align,
    Asm,
    Assert,
    Auto,
    Body,
    Bool,
    Break,
    Byte,
    Case,
    Cast,
    Catch,
    Cdouble,
    Cent,
    Cfloat,
    Char,
    Class,
    Const,
    Continue,
    Creal,
    Dchar,
    Debug,
    Default,
    Delegate,
    Delete,
    Deprecated,
    Do,
    Double,
    Else,
    Enum,
    Export,
    Extern,
    False,
    Final,
    Finally,
    Float,
    For,
    Foreach,
    ForeachReverse,
    Function,
    Goto,
    Idouble,
    If,
    Ifloat,
    Immutable,
    Import,
    In,
    Inout,
    Int32,
    Interface,
    Invariant,
    Ireal,
    Is,
    Lazy,
    Long,
    Macro,
    Mixin,
    Module,
    New,
    Nothrow,
    Null,
    Out,
    Override,
    Package,
    Pragma,
    Private,
    Protected,
    Public,
    Pure,
    Real,
    Ref,
    Return,
    Scope,
    Shared,
    Short,
    Static,
    Struct,
    Super,
    Switch,
    Synchronized,
    Template,
    This,
    Throw,
    True,
    Try,
    Typedef,
    Typeid,
    Typeof,
    Ubyte,
    Ucent,
    Uint,
    Ulong,
    Union,
    Unittest,
    Ushort,
    Version,
    Void,
    Volatile,
    Wchar,
    While,
    With,
    File,
    ModuleStr,
    Line,
    FunctionStr,
    PrettyFunction,
    Gshared,
    Traits,
    Vector,
    Parameters,
}

impl TokenKind {
    /// True for the closed set of keyword kinds (one per reserved word).
    pub fn is_keyword(self) -> bool {
        keyword_kind_table()
            .iter()
            .any(|&(_, kind)| kind == self)
    }

    /// True for literal-value kinds (numeric, char, string).
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Int32V
                | TokenKind::Uns32V
                | TokenKind::Int64V
                | TokenKind::Uns64V
                | TokenKind::Float32V
                | TokenKind::Float64V
                | TokenKind::Float80V
                | TokenKind::Imaginary32V
                | TokenKind::Imaginary64V
                | TokenKind::Imaginary80V
                | TokenKind::CharV
                | TokenKind::WCharV
                | TokenKind::DCharV
                | TokenKind::StringV
                | TokenKind::XStringV
        )
    }
}

/// One payload variant per family of token that carries a value.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    None,
    Int(u64),
    Float(f64),
    Char(char),
    /// Owned string payload (string literals are not interned; identifiers are).
    Str {
        text: String,
        postfix: StringPostfix,
    },
    /// Interned identifier identity.
    Ident(Symbol),
}

/// A scanned token: kind, payload, and the doc comments harvested for it.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    /// Start position of the token (subject to `#line` rewrites on `.line`).
    pub span: Span,
    /// Canonicalized doc comment that appeared on its own line(s) before this token.
    pub block_comment: Option<String>,
    /// Canonicalized doc comment that trailed a prior token on the same line.
    pub line_comment: Option<String>,
}

impl Token {
    pub fn new(kind: TokenKind) -> Self {
        Token {
            kind,
            value: TokenValue::None,
            span: Span::DUMMY,
            block_comment: None,
            line_comment: None,
        }
    }

    pub fn with_value(kind: TokenKind, value: TokenValue) -> Self {
        Token {
            kind,
            value,
            span: Span::DUMMY,
            block_comment: None,
            line_comment: None,
        }
    }

    pub fn int(kind: TokenKind, n: u64) -> Self {
        Self::with_value(kind, TokenValue::Int(n))
    }

    pub fn float(kind: TokenKind, f: f64) -> Self {
        Self::with_value(kind, TokenValue::Float(f))
    }

    pub fn char_lit(kind: TokenKind, c: char) -> Self {
        Self::with_value(kind, TokenValue::Char(c))
    }

    pub fn string(kind: TokenKind, text: String, postfix: StringPostfix) -> Self {
        Self::with_value(kind, TokenValue::Str { text, postfix })
    }

    pub fn ident(sym: Symbol) -> Self {
        Self::with_value(TokenKind::Identifier, TokenValue::Ident(sym))
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// The fixed mapping from each reserved keyword symbol to its token kind.
///
/// Index-aligned with `symbol::KEYWORD_TABLE`; built once and reused rather
/// than a giant match on interned text, mirroring how the intern pool in
/// §6 of the spec is described as returning `(identity, kind)` directly.
fn keyword_kind_table() -> &'static [(Symbol, TokenKind)] {
    use TokenKind::*;
    static TABLE: std::sync::OnceLock<Vec<(Symbol, TokenKind)>> = std::sync::OnceLock::new();
    TABLE.get_or_init(|| {
        vec![
            (symbol::KW_ABSTRACT, Abstract),
            (symbol::KW_ALIAS, Alias),
            (symbol::KW_ALIGN, Align),
            (symbol::KW_ASM, Asm),
            (symbol::KW_ASSERT, Assert),
            (symbol::KW_AUTO, Auto),
            (symbol::KW_BODY, Body),
            (symbol::KW_BOOL, Bool),
            (symbol::KW_BREAK, Break),
            (symbol::KW_BYTE, Byte),
            (symbol::KW_CASE, Case),
            (symbol::KW_CAST, Cast),
            (symbol::KW_CATCH, Catch),
            (symbol::KW_CDOUBLE, Cdouble),
            (symbol::KW_CENT, Cent),
            (symbol::KW_CFLOAT, Cfloat),
            (symbol::KW_CHAR, Char),
            (symbol::KW_CLASS, Class),
            (symbol::KW_CONST, Const),
            (symbol::KW_CONTINUE, Continue),
            (symbol::KW_CREAL, Creal),
            (symbol::KW_DCHAR, Dchar),
            (symbol::KW_DEBUG, Debug),
            (symbol::KW_DEFAULT, Default),
            (symbol::KW_DELEGATE, Delegate),
            (symbol::KW_DELETE, Delete),
            (symbol::KW_DEPRECATED, Deprecated),
            (symbol::KW_DO, Do),
            (symbol::KW_DOUBLE, Double),
            (symbol::KW_ELSE, Else),
            (symbol::KW_ENUM, Enum),
            (symbol::KW_EXPORT, Export),
            (symbol::KW_EXTERN, Extern),
            (symbol::KW_FALSE, False),
            (symbol::KW_FINAL, Final),
            (symbol::KW_FINALLY, Finally),
            (symbol::KW_FLOAT, Float),
            (symbol::KW_FOR, For),
            (symbol::KW_FOREACH, Foreach),
            (symbol::KW_FOREACH_REVERSE, ForeachReverse),
            (symbol::KW_FUNCTION, Function),
            (symbol::KW_GOTO, Goto),
            (symbol::KW_IDOUBLE, Idouble),
            (symbol::KW_IF, If),
            (symbol::KW_IFLOAT, Ifloat),
            (symbol::KW_IMMUTABLE, Immutable),
            (symbol::KW_IMPORT, Import),
            (symbol::KW_IN, In),
            (symbol::KW_INOUT, Inout),
            (symbol::KW_INT, Int32),
            (symbol::KW_INTERFACE, Interface),
            (symbol::KW_INVARIANT, Invariant),
            (symbol::KW_IREAL, Ireal),
            (symbol::KW_IS, Is),
            (symbol::KW_LAZY, Lazy),
            (symbol::KW_LONG, Long),
            (symbol::KW_MACRO, Macro),
            (symbol::KW_MIXIN, Mixin),
            (symbol::KW_MODULE, Module),
            (symbol::KW_NEW, New),
            (symbol::KW_NOTHROW, Nothrow),
            (symbol::KW_NULL, Null),
            (symbol::KW_OUT, Out),
            (symbol::KW_OVERRIDE, Override),
            (symbol::KW_PACKAGE, Package),
            (symbol::KW_PRAGMA, Pragma),
            (symbol::KW_PRIVATE, Private),
            (symbol::KW_PROTECTED, Protected),
            (symbol::KW_PUBLIC, Public),
            (symbol::KW_PURE, Pure),
            (symbol::KW_REAL, Real),
            (symbol::KW_REF, Ref),
            (symbol::KW_RETURN, Return),
            (symbol::KW_SCOPE, Scope),
            (symbol::KW_SHARED, Shared),
            (symbol::KW_SHORT, Short),
            (symbol::KW_STATIC, Static),
            (symbol::KW_STRUCT, Struct),
            (symbol::KW_SUPER, Super),
            (symbol::KW_SWITCH, Switch),
            (symbol::KW_SYNCHRONIZED, Synchronized),
            (symbol::KW_TEMPLATE, Template),
            (symbol::KW_THIS, This),
            (symbol::KW_THROW, Throw),
            (symbol::KW_TRUE, True),
            (symbol::KW_TRY, Try),
            (symbol::KW_TYPEDEF, Typedef),
            (symbol::KW_TYPEID, Typeid),
            (symbol::KW_TYPEOF, Typeof),
            (symbol::KW_UBYTE, Ubyte),
            (symbol::KW_UCENT, Ucent),
            (symbol::KW_UINT, Uint),
            (symbol::KW_ULONG, Ulong),
            (symbol::KW_UNION, Union),
            (symbol::KW_UNITTEST, Unittest),
            (symbol::KW_USHORT, Ushort),
            (symbol::KW_VERSION, Version),
            (symbol::KW_VOID, Void),
            (symbol::KW_VOLATILE, Volatile),
            (symbol::KW_WCHAR, Wchar),
            (symbol::KW_WHILE, While),
            (symbol::KW_WITH, With),
            (symbol::KW_FILE, File),
            (symbol::KW_MODULE_STR, ModuleStr),
            (symbol::KW_LINE, Line),
            (symbol::KW_FUNCTION_STR, FunctionStr),
            (symbol::KW_PRETTY_FUNCTION, PrettyFunction),
            (symbol::KW_GSHARED, Gshared),
            (symbol::KW_TRAITS, Traits),
            (symbol::KW_VECTOR, Vector),
            (symbol::KW_PARAMETERS, Parameters),
        ]
    })
}

/// Maps a reserved symbol to its keyword token kind, if it is one.
pub fn keyword_kind(sym: Symbol) -> Option<TokenKind> {
    if !sym.is_known() {
        return None;
    }
    keyword_kind_table()
        .iter()
        .find(|&&(s, _)| s == sym)
        .map(|&(_, kind)| kind)
}

/// Interns `text` and resolves it to a keyword token, or `None` for an
/// ordinary identifier. Mirrors the intern pool's `idPool` contract: a
/// single lookup yields both the identity and, for keywords, the kind.
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    if !symbol::Symbol::is_keyword_text(text) {
        return None;
    }
    let sym = Symbol::intern(text);
    keyword_kind(sym)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_kind_lookup() {
        assert_eq!(keyword_kind(symbol::KW_IF), Some(TokenKind::If));
        assert_eq!(keyword_kind(symbol::KW_STRUCT), Some(TokenKind::Struct));
        assert_eq!(keyword_kind(symbol::KW_INT), Some(TokenKind::Int32));
    }

    #[test]
    fn test_keyword_from_ident() {
        assert_eq!(keyword_from_ident("if"), Some(TokenKind::If));
        assert_eq!(keyword_from_ident("struct"), Some(TokenKind::Struct));
        assert_eq!(keyword_from_ident("notakeyword"), None);
    }

    #[test]
    fn test_is_keyword_and_is_literal() {
        assert!(TokenKind::If.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(TokenKind::Int32V.is_literal());
        assert!(!TokenKind::Int32.is_literal());
    }
}
