//! Core utilities and foundation types shared across the compiler.
//!
//! This crate provides the pieces that sit underneath the lexer (and, in a
//! fuller compiler, the parser and later stages): string interning, source
//! location tracking, and diagnostic collection. None of it is specific to
//! lexing — it is infrastructure a tokenizer happens to be the first
//! consumer of.

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{DiagnosticError, SourceMapError, SymbolError};
pub use span::{FileId, SourceFile, SourceMap, Span};
pub use symbol::Symbol;

pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
