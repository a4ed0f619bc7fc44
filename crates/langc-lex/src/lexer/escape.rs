//! Shared escape-sequence parsing for double-quoted strings and character
//! literals (§4.6).

use crate::token::CharWidth;
use crate::Lexer;

/// Outcome of parsing one `\…` escape sequence: the decoded character and the
/// character width it implies (plain ASCII/`\x`/octal/named stay narrow,
/// `\u` is wide, `\U` and named entities are dchar-width).
pub struct Escape {
    pub ch: char,
    pub width: CharWidth,
}

impl Escape {
    fn narrow(ch: char) -> Self {
        Escape {
            ch,
            width: CharWidth::Narrow,
        }
    }
}

impl<'a> Lexer<'a> {
    /// Parses one escape sequence; the caller has already consumed the `\`.
    pub fn parse_escape(&mut self) -> Escape {
        if self.cursor.is_at_end() {
            // EOF right after `\` yields a literal backslash and stops scanning.
            return Escape::narrow('\\');
        }

        let c = self.cursor.current_char();
        match c {
            '\'' | '"' | '?' | '\\' => {
                self.cursor.advance();
                Escape::narrow(c)
            },
            'a' => {
                self.cursor.advance();
                Escape::narrow(7u8 as char)
            },
            'b' => {
                self.cursor.advance();
                Escape::narrow(8u8 as char)
            },
            'f' => {
                self.cursor.advance();
                Escape::narrow(12u8 as char)
            },
            'n' => {
                self.cursor.advance();
                Escape::narrow('\n')
            },
            'r' => {
                self.cursor.advance();
                Escape::narrow('\r')
            },
            't' => {
                self.cursor.advance();
                Escape::narrow('\t')
            },
            'v' => {
                self.cursor.advance();
                Escape::narrow(11u8 as char)
            },
            'x' => {
                self.cursor.advance();
                self.parse_hex_escape(2, CharWidth::Narrow)
            },
            'u' => {
                self.cursor.advance();
                self.parse_hex_escape(4, CharWidth::Wide)
            },
            'U' => {
                self.cursor.advance();
                self.parse_hex_escape(8, CharWidth::Dchar)
            },
            '&' => {
                self.cursor.advance();
                self.parse_named_entity()
            },
            '0'..='7' => self.parse_octal_escape(),
            other => {
                self.report_error(format!("undefined escape sequence \\{}", other));
                Escape::narrow(other)
            },
        }
    }

    fn parse_hex_escape(&mut self, digits: usize, width: CharWidth) -> Escape {
        let mut value: u32 = 0;
        let mut count = 0;
        while count < digits {
            let h = self.cursor.current_char();
            match h.to_digit(16) {
                Some(d) => {
                    value = value * 16 + d;
                    self.cursor.advance();
                    count += 1;
                },
                None => break,
            }
        }
        if count != digits {
            self.report_error(format!(
                "escape hex sequence has {} hex digits instead of {}",
                count, digits
            ));
        }
        match char::from_u32(value) {
            Some(c) => Escape { ch: c, width },
            None => {
                self.report_error(format!("invalid UTF character \\U{:08x}", value));
                Escape::narrow('\u{FFFD}')
            },
        }
    }

    /// `\ooo` — 1 to 3 octal digits.
    fn parse_octal_escape(&mut self) -> Escape {
        let mut value: u32 = 0;
        let mut count = 0;
        while count < 3 {
            let c = self.cursor.current_char();
            match c.to_digit(8) {
                Some(d) => {
                    value = value * 8 + d;
                    self.cursor.advance();
                    count += 1;
                },
                None => break,
            }
        }
        if value > 0xFF {
            self.report_error(format!("octal escape \\{:o} is larger than \\377", value));
        }
        Escape::narrow((value & 0xFF) as u8 as char)
    }

    /// `\&name;` — named HTML entity.
    fn parse_named_entity(&mut self) -> Escape {
        let start = self.cursor.position();
        while self.cursor.current_char().is_ascii_alphanumeric() {
            self.cursor.advance();
        }
        let name = self.cursor.slice_from(start);

        if self.cursor.current_char() != ';' {
            self.report_error("expected ';' following named character entity".to_string());
            return Escape::narrow(' ');
        }
        self.cursor.advance();

        match crate::entities::lookup(name) {
            Some(cp) => match char::from_u32(cp) {
                Some(c) => Escape {
                    ch: c,
                    width: CharWidth::Dchar,
                },
                None => Escape::narrow(' '),
            },
            None => {
                self.report_error(format!("undefined named character entity &{};", name));
                Escape::narrow(' ')
            },
        }
    }
}
