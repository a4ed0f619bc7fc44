//! `#line` directive parsing (§4.10).

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Parses `integer ["filespec"]` or `__LINE__ __FILE__` following a
    /// consumed `#line` prefix. Sets `line_delta`/`filename` on success;
    /// diagnoses and leaves state untouched on a malformed directive.
    pub(crate) fn lex_line_directive(&mut self) {
        let directive_start = self.cursor.position();
        self.skip_directive_whitespace();

        let new_line = match self.scan_directive_integer() {
            Some(n) => n,
            None => {
                self.report_directive_error(directive_start);
                self.skip_to_end_of_directive_line();
                return;
            },
        };

        self.skip_directive_whitespace();

        let mut new_filename: Option<String> = None;
        if self.cursor.current_char() == '"' {
            new_filename = self.scan_directive_filespec();
        } else if self.cursor.source()[self.cursor.position()..].starts_with("__FILE__") {
            self.cursor.advance_n(8);
        }

        self.skip_directive_whitespace();

        match self.cursor.current_char() {
            '\n' | '\0' => {
                if self.cursor.current_char() == '\n' {
                    self.cursor.advance();
                }
            },
            _ => {
                self.report_directive_error(directive_start);
                self.skip_to_end_of_directive_line();
                return;
            },
        }

        // The line reported for the *following* line is `new_line`, so the
        // adjustment is relative to the raw cursor line at this point (the
        // line the directive itself sat on).
        let raw_line = self.cursor.line() as i64;
        self.line_delta = new_line as i64 - raw_line;
        if let Some(name) = new_filename {
            self.filename = name;
        }
    }

    fn skip_directive_whitespace(&mut self) {
        while matches!(self.cursor.current_char(), ' ' | '\t') {
            self.cursor.advance();
        }
    }

    fn scan_directive_integer(&mut self) -> Option<u32> {
        if self.cursor.source()[self.cursor.position()..].starts_with("__LINE__") {
            self.cursor.advance_n(8);
            return Some(self.reported_line() + 1);
        }
        let start = self.cursor.position();
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        if self.cursor.position() == start {
            return None;
        }
        self.cursor.slice_from(start).parse().ok()
    }

    fn scan_directive_filespec(&mut self) -> Option<String> {
        self.cursor.advance();
        let start = self.cursor.position();
        while !self.cursor.is_at_end() && self.cursor.current_char() != '"' {
            if self.cursor.current_char() == '\n' {
                return None;
            }
            self.cursor.advance();
        }
        let name = self.cursor.slice_from(start).to_string();
        if self.cursor.current_char() == '"' {
            self.cursor.advance();
            Some(name)
        } else {
            None
        }
    }

    fn skip_to_end_of_directive_line(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
        if self.cursor.current_char() == '\n' {
            self.cursor.advance();
        }
    }

    fn report_directive_error(&mut self, directive_start: usize) {
        let _ = directive_start;
        self.report_error("malformed #line directive".to_string());
    }
}
