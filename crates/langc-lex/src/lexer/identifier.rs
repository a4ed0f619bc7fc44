//! Identifier scanning, keyword resolution, and special `__…__` identifiers.

use crate::token::{StringPostfix, Token, TokenKind};
use crate::unicode::{is_ascii_ident_continue, is_ident_continue, is_ident_start};
use crate::Lexer;
use langc_util::Symbol;

/// Special identifiers recognized only when the scanned text starts with `_`.
/// `__DATE__`/`__TIME__`/`__TIMESTAMP__`/`__VENDOR__`/`__VERSION__` are never
/// keywords (they are absent from the reserved symbol table); `__EOF__` is a
/// scanning directive rather than a value.
const SPECIAL_DATE: &str = "__DATE__";
const SPECIAL_TIME: &str = "__TIME__";
const SPECIAL_TIMESTAMP: &str = "__TIMESTAMP__";
const SPECIAL_VENDOR: &str = "__VENDOR__";
const SPECIAL_VERSION: &str = "__VERSION__";
const SPECIAL_EOF: &str = "__EOF__";

impl<'a> Lexer<'a> {
    /// Lexes an identifier, keyword, or special `__…__` substitution.
    ///
    /// Scans while the current byte is an identifier-continuation byte or a
    /// non-ASCII sequence decoding to a Unicode letter; a non-letter non-ASCII
    /// byte ends the identifier with a diagnostic.
    pub fn lex_identifier(&mut self) -> Token {
        let start = self.cursor.position();

        loop {
            let c = self.cursor.current_char();
            if c.is_ascii() {
                if is_ascii_ident_continue(c) {
                    self.cursor.advance();
                } else {
                    break;
                }
            } else if is_ident_continue(c) {
                self.cursor.advance();
            } else if is_ident_start(c) {
                self.cursor.advance();
            } else if self.cursor.is_at_end() {
                break;
            } else {
                self.report_error(format!(
                    "char 0x{:04x} not allowed in identifier",
                    c as u32
                ));
                self.cursor.advance();
            }
        }

        let text = self.cursor.slice_from(start);

        if let Some(special) = self.lex_special_identifier(text) {
            return special;
        }

        match crate::token::keyword_from_ident(text) {
            Some(kind) => Token::new(kind),
            None => Token::ident(Symbol::intern(text)),
        }
    }

    /// Resolves the `__…__` special identifiers. Returns `None` for any other
    /// identifier (including ordinary ones that merely start with `_`).
    fn lex_special_identifier(&mut self, text: &str) -> Option<Token> {
        match text {
            SPECIAL_DATE => Some(Token::string(
                TokenKind::StringV,
                self.date_time_strings().0,
                StringPostfix::None,
            )),
            SPECIAL_TIME => Some(Token::string(
                TokenKind::StringV,
                self.date_time_strings().1,
                StringPostfix::None,
            )),
            SPECIAL_TIMESTAMP => Some(Token::string(
                TokenKind::StringV,
                self.date_time_strings().2,
                StringPostfix::None,
            )),
            SPECIAL_VENDOR => Some(Token::string(
                TokenKind::StringV,
                "langc".to_string(),
                StringPostfix::None,
            )),
            SPECIAL_VERSION => {
                // `N.M…` -> 1000*major + minor, per the spec's version encoding.
                let version = env!("CARGO_PKG_VERSION");
                let mut parts = version.split('.');
                let major: u64 = parts.next().and_then(|s| s.parse().ok()).unwrap_or(0);
                let minor: u64 = parts.next().and_then(|s| s.parse().ok()).unwrap_or(0);
                Some(Token::int(TokenKind::Int32V, 1000 * major + minor))
            },
            SPECIAL_EOF => {
                while !self.cursor.is_at_end() {
                    self.cursor.advance();
                }
                Some(Token::new(TokenKind::Eof))
            },
            _ => None,
        }
    }

    /// Lazily computed, process-memoized `(date, time, timestamp)` strings
    /// derived from process start time, per the design notes' memoization rule.
    fn date_time_strings(&self) -> (String, String, String) {
        use std::sync::OnceLock;
        static CACHE: OnceLock<(String, String, String)> = OnceLock::new();
        CACHE
            .get_or_init(|| {
                let now = std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .unwrap_or_default()
                    .as_secs();
                let date = format!("epoch-day {}", now / 86_400);
                let time = format!(
                    "{:02}:{:02}:{:02}",
                    (now / 3600) % 24,
                    (now / 60) % 60,
                    now % 60
                );
                let timestamp = format!("{} {}", date, time);
                (date, time, timestamp)
            })
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use langc_util::Handler;

    fn lex_one(source: &str) -> Token {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new(source, &mut handler);
        lexer.lex_identifier()
    }

    #[test]
    fn test_plain_identifier() {
        let tok = lex_one("foobar");
        assert_eq!(tok.kind, TokenKind::Identifier);
    }

    #[test]
    fn test_keywords() {
        for (text, kind) in [
            ("if", TokenKind::If),
            ("struct", TokenKind::Struct),
            ("int", TokenKind::Int32),
            ("true", TokenKind::True),
            ("false", TokenKind::False),
            ("class", TokenKind::Class),
            ("return", TokenKind::Return),
            ("immutable", TokenKind::Immutable),
            ("__traits", TokenKind::Traits),
            ("__gshared", TokenKind::Gshared),
        ] {
            assert_eq!(lex_one(text).kind, kind, "keyword `{}`", text);
        }
    }

    #[test]
    fn test_special_version() {
        let tok = lex_one(SPECIAL_VERSION);
        assert_eq!(tok.kind, TokenKind::Int32V);
    }

    #[test]
    fn test_special_vendor() {
        let tok = lex_one(SPECIAL_VENDOR);
        assert_eq!(tok.kind, TokenKind::StringV);
    }

    #[test]
    fn test_special_eof_consumes_rest() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("__EOF__ garbage that is not scanned", &mut handler);
        let tok = lexer.lex_identifier();
        assert_eq!(tok.kind, TokenKind::Eof);
        assert!(lexer.cursor.is_at_end());
    }

    #[test]
    fn test_underscore_alone_is_identifier() {
        let tok = lex_one("_");
        assert_eq!(tok.kind, TokenKind::Identifier);
    }
}
