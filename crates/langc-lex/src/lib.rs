//! langc-lex - lexical analyzer for the core language.
//!
//! Turns an immutable source buffer into a stream of [`token::Token`]s: punctuation
//! and operators, identifiers and keywords, the six string-literal forms, numeric
//! literals of every base and suffix, character literals, and the three comment
//! shapes (one of them nestable). Positions are tracked as `(line, column)` pairs
//! and can be rewritten mid-stream by a `#line` directive.
//!
//! The crate is pull-based: a consumer calls [`Lexer::next_token`] (or iterates
//! the lexer directly) to drain one token at a time. A small lookahead cache
//! backs [`Lexer::peek`]/[`Lexer::peek_next`]/[`Lexer::peek_past_paren`] so a
//! parser can look ahead without losing tokens already scanned.
//!
//! What this crate does *not* do: parse the token stream, own the identifier
//! intern pool (that lives in `langc_util::symbol`), or perform UTF-8 decoding
//! and float parsing beyond what's needed to classify a literal — both of those
//! are pure helper functions a surrounding driver could swap out.

pub mod cursor;
pub mod entities;
pub mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

pub use lexer::Lexer;
pub use token::{CharWidth, StringPostfix, Token, TokenKind, TokenValue};
