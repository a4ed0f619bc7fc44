//! String and character literal lexing: the six string forms of §4.7 and
//! the character literal of §4.5.

use crate::token::{CharWidth, StringPostfix, Token, TokenKind};
use crate::unicode::is_ascii_ident_start;
use crate::Lexer;

/// Code points excluded from the 16-bit (`wchar`) BMP fast path: surrogates
/// and the two BMP non-characters.
fn fits_in_bmp(c: char) -> bool {
    let cp = c as u32;
    cp <= 0xFFFD && !(0xD800..=0xDFFF).contains(&cp)
}

impl<'a> Lexer<'a> {
    /// `"…"` — escape string.
    pub fn lex_string(&mut self) -> Token {
        let directive_start = self.cursor.position();
        self.cursor.advance();

        let mut content = String::new();
        loop {
            match self.cursor.current_char() {
                '"' => {
                    self.cursor.advance();
                    break;
                },
                '\0' if self.cursor.is_at_end() => {
                    self.report_unterminated_string(directive_start);
                    break;
                },
                '\\' => {
                    self.cursor.advance();
                    content.push(self.parse_escape().ch);
                },
                c => {
                    content.push(normalize_line_terminator(c));
                    self.cursor.advance();
                },
            }
        }

        Token::string(TokenKind::StringV, content, self.scan_postfix())
    }

    /// `r"…"` — wysiwyg string, closed by `"`.
    pub fn lex_wysiwyg_r(&mut self) -> Token {
        let directive_start = self.cursor.position();
        self.cursor.advance();
        self.cursor.advance();
        let content = self.scan_wysiwyg_body('"', directive_start);
        Token::string(TokenKind::StringV, content, self.scan_postfix())
    }

    /// `` `…` `` — wysiwyg string, closed by a backtick.
    pub fn lex_wysiwyg_backtick(&mut self) -> Token {
        let directive_start = self.cursor.position();
        self.cursor.advance();
        let content = self.scan_wysiwyg_body('`', directive_start);
        Token::string(TokenKind::StringV, content, self.scan_postfix())
    }

    fn scan_wysiwyg_body(&mut self, close: char, directive_start: usize) -> String {
        let mut content = String::new();
        loop {
            let c = self.cursor.current_char();
            if c == close {
                self.cursor.advance();
                break;
            }
            if self.cursor.is_at_end() {
                self.report_unterminated_string(directive_start);
                break;
            }
            content.push(normalize_line_terminator(c));
            self.cursor.advance();
        }
        content
    }

    /// `x"…"` — hex string: hex digits and whitespace, paired into bytes.
    pub fn lex_hex_string(&mut self) -> Token {
        let directive_start = self.cursor.position();
        self.cursor.advance();
        self.cursor.advance();

        let mut nibbles: Vec<u8> = Vec::new();
        loop {
            let c = self.cursor.current_char();
            if c == '"' {
                self.cursor.advance();
                break;
            }
            if self.cursor.is_at_end() {
                self.report_unterminated_string(directive_start);
                break;
            }
            if let Some(d) = c.to_digit(16) {
                nibbles.push(d as u8);
            } else if !c.is_whitespace() {
                self.report_error(format!("non-hex character '{}' in hex string", c));
            }
            self.cursor.advance();
        }

        if nibbles.len() % 2 != 0 {
            self.report_error("hex string has an odd number of hex digits".to_string());
        }

        let mut bytes = Vec::with_capacity(nibbles.len() / 2 + 1);
        let mut chunks = nibbles.chunks_exact(2);
        for pair in &mut chunks {
            bytes.push(pair[0] * 16 + pair[1]);
        }
        if let [last] = chunks.remainder() {
            bytes.push(*last);
        }

        let content: String = bytes.iter().map(|&b| b as char).collect();
        Token::string(TokenKind::XStringV, content, self.scan_postfix())
    }

    /// `q"…"` — delimited string, in its three sub-forms.
    pub fn lex_delimited_string(&mut self) -> Token {
        let directive_start = self.cursor.position();
        self.cursor.advance();
        self.cursor.advance();

        let content = match self.cursor.current_char() {
            '(' => self.scan_bracketed_delimited('(', ')'),
            '[' => self.scan_bracketed_delimited('[', ']'),
            '{' => self.scan_bracketed_delimited('{', '}'),
            '<' => self.scan_bracketed_delimited('<', '>'),
            c if is_ascii_ident_start(c) => self.scan_heredoc_delimited(directive_start),
            c if c.is_whitespace() => {
                self.report_error("whitespace cannot be a delimited-string delimiter".to_string());
                self.scan_single_char_delimited(c, directive_start)
            },
            c => self.scan_single_char_delimited(c, directive_start),
        };

        Token::string(TokenKind::StringV, content, self.scan_postfix())
    }

    fn scan_bracketed_delimited(&mut self, open: char, close: char) -> String {
        self.cursor.advance();
        let mut depth: u32 = 1;
        let mut content = String::new();
        loop {
            let c = self.cursor.current_char();
            if self.cursor.is_at_end() {
                self.report_error("unterminated delimited string".to_string());
                break;
            }
            if c == open {
                depth += 1;
                content.push(c);
                self.cursor.advance();
                continue;
            }
            if c == close {
                depth -= 1;
                if depth == 0 {
                    self.cursor.advance();
                    if self.cursor.current_char() == '"' {
                        self.cursor.advance();
                    } else {
                        self.report_error("expected '\"' after closing delimiter".to_string());
                    }
                    break;
                }
                content.push(c);
                self.cursor.advance();
                continue;
            }
            content.push(normalize_line_terminator(c));
            self.cursor.advance();
        }
        content
    }

    fn scan_heredoc_delimited(&mut self, directive_start: usize) -> String {
        let ident_start = self.cursor.position();
        while is_ascii_ident_start(self.cursor.current_char())
            || self.cursor.current_char().is_ascii_digit()
        {
            self.cursor.advance();
        }
        let sentinel = self.cursor.slice_from(ident_start).to_string();

        // Rest of the opening line must be blank.
        while matches!(self.cursor.current_char(), ' ' | '\t' | '\r') {
            self.cursor.advance();
        }
        if self.cursor.current_char() == '\n' {
            self.cursor.advance();
        } else if !self.cursor.is_at_end() {
            self.report_error("characters following heredoc identifier are not blank".to_string());
            while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                self.cursor.advance();
            }
            if self.cursor.current_char() == '\n' {
                self.cursor.advance();
            }
        }

        let mut content = String::new();
        loop {
            if self.cursor.is_at_end() {
                self.report_unterminated_string(directive_start);
                break;
            }
            let line_start = self.cursor.position();
            while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                self.cursor.advance();
            }
            let line = self.cursor.slice_from(line_start);
            if line == sentinel {
                if self.cursor.current_char() == '\n' {
                    self.cursor.advance();
                }
                if self.cursor.current_char() == '"' {
                    self.cursor.advance();
                } else {
                    self.report_error("expected '\"' closing heredoc string".to_string());
                }
                break;
            }
            content.push_str(line);
            if self.cursor.current_char() == '\n' {
                content.push('\n');
                self.cursor.advance();
            }
        }
        content
    }

    fn scan_single_char_delimited(&mut self, delim: char, directive_start: usize) -> String {
        self.cursor.advance();
        let mut content = String::new();
        loop {
            let c = self.cursor.current_char();
            if c == delim {
                self.cursor.advance();
                if self.cursor.current_char() == '"' {
                    self.cursor.advance();
                } else {
                    self.report_error("expected '\"' after closing delimiter".to_string());
                }
                break;
            }
            if self.cursor.is_at_end() {
                self.report_unterminated_string(directive_start);
                break;
            }
            content.push(normalize_line_terminator(c));
            self.cursor.advance();
        }
        content
    }

    /// `q{…}` — token string: recursively lexes full tokens, tracking brace
    /// depth, and returns the raw source between the opening `{` and the
    /// matching `}`.
    pub fn lex_token_string(&mut self) -> Token {
        self.cursor.advance();
        self.cursor.advance();

        let body_start = self.cursor.position();
        let mut depth: u32 = 1;
        loop {
            if self.cursor.is_at_end() {
                self.report_error("unterminated token string".to_string());
                break;
            }
            let before = self.cursor.position();
            let tok = self.scan();
            match tok.kind {
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        let body = self.cursor.source()[body_start..before].to_string();
                        return Token::string(TokenKind::StringV, body, self.scan_postfix());
                    }
                },
                TokenKind::Eof => {
                    self.report_error("unterminated token string".to_string());
                    break;
                },
                _ => {},
            }
        }
        Token::string(TokenKind::StringV, String::new(), StringPostfix::None)
    }

    /// Consumes an optional trailing `c`/`w`/`d` string postfix.
    fn scan_postfix(&mut self) -> StringPostfix {
        match self.cursor.current_char() {
            'c' => {
                self.cursor.advance();
                StringPostfix::Narrow
            },
            'w' => {
                self.cursor.advance();
                StringPostfix::Wide
            },
            'd' => {
                self.cursor.advance();
                StringPostfix::Dchar
            },
            _ => StringPostfix::None,
        }
    }

    fn report_unterminated_string(&mut self, directive_start: usize) {
        let _ = directive_start;
        self.report_error("unterminated string constant".to_string());
    }

    /// Lexes a character literal per §4.5.
    pub fn lex_char(&mut self) -> Token {
        self.cursor.advance();

        let c = self.cursor.current_char();
        if self.cursor.is_at_end()
            || matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}' | '\0' | '\u{1a}')
            || c == '\''
        {
            self.report_error("unterminated character constant".to_string());
            return Token::char_lit(TokenKind::CharV, '?');
        }

        let (ch, width) = if c == '\\' {
            self.cursor.advance();
            let escape = self.parse_escape();
            (escape.ch, escape.width)
        } else if c.is_ascii() {
            self.cursor.advance();
            (c, CharWidth::Narrow)
        } else {
            self.cursor.advance();
            if fits_in_bmp(c) {
                (c, CharWidth::Wide)
            } else {
                (c, CharWidth::Dchar)
            }
        };

        if self.cursor.current_char() == '\'' {
            self.cursor.advance();
        } else {
            self.report_error("unterminated character constant".to_string());
        }

        let kind = match width {
            CharWidth::Narrow => TokenKind::CharV,
            CharWidth::Wide => TokenKind::WCharV,
            CharWidth::Dchar => TokenKind::DCharV,
        };
        Token::char_lit(kind, ch)
    }
}

/// CR and the Unicode line separators normalize to `\n` inside string bodies.
fn normalize_line_terminator(c: char) -> char {
    match c {
        '\r' | '\u{2028}' | '\u{2029}' => '\n',
        other => other,
    }
}
