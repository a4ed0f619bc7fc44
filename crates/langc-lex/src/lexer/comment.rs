//! Comment skipping and doc-comment canonicalization.
//!
//! Three comment shapes are recognized after a leading `/`: `//` line comments,
//! `/* */` block comments (non-nesting), and `/+ +/` nesting comments. When
//! `do_doc_comment` is enabled, a comment whose third byte repeats the opener's
//! fill character (`/**`, `/++`, `///`) - and which is not the degenerate
//! `/**/` - is canonicalized and attached to whichever following non-comment
//! token picks it up, as either a `line_comment` (something already appeared
//! on this source line) or a `block_comment` (this comment opens the line).

use crate::Lexer;

const MAX_COMMENT_DEPTH: u32 = 100;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments, harvesting doc comments as it goes.
    ///
    /// On return the cursor sits on the first byte of the next real token (or
    /// at the sentinel). Doc comment text found along the way is staged in
    /// `self.pending_block_comment`/`self.pending_line_comment` for the next
    /// call to attach to the token it produces.
    pub fn skip_whitespace_and_comments(&mut self) {
        if !self.bom_checked {
            self.bom_checked = true;
            if self.cursor.source().starts_with('\u{FEFF}') {
                self.cursor.advance();
            }
            if self.cursor.position() == 0
                && self.cursor.current_char() == '#'
                && self.cursor.peek_char(1) == '!'
            {
                while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                    self.cursor.advance();
                }
            }
        }

        loop {
            match self.cursor.current_char() {
                ' ' | '\t' | '\x0B' | '\x0C' | '\r' | '\n' => {
                    self.cursor.advance();
                },
                '/' => {
                    let on_same_line = self.prev_token_line == self.cursor.line();
                    match self.cursor.peek_char(1) {
                        '/' => self.skip_line_comment(on_same_line),
                        '*' => self.skip_block_comment(on_same_line),
                        '+' => self.skip_nesting_comment(on_same_line),
                        _ => break,
                    }
                },
                _ => break,
            }
        }
    }

    /// `//` to end of line (or EOF).
    fn skip_line_comment(&mut self, on_same_line: bool) {
        let is_doc = self.do_doc_comment
            && self.cursor.peek_char(2) == '/'
            && self.cursor.peek_char(3) != '/';
        let start = self.cursor.position() + 2;
        self.cursor.advance();
        self.cursor.advance();
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
        if is_doc {
            let body = self.cursor.slice_from(start);
            let canon = canonicalize_doc_comment(body, '/');
            self.attach_doc_comment(canon, on_same_line);
        }
    }

    /// `/* ... */`, does not nest. Unterminated at EOF is a diagnostic.
    fn skip_block_comment(&mut self, on_same_line: bool) {
        let is_doc = self.do_doc_comment
            && self.cursor.peek_char(2) == '*'
            && self.cursor.peek_char(3) != '*'
            && self.cursor.peek_char(3) != '/';
        let start = self.cursor.position() + 2;
        self.cursor.advance();
        self.cursor.advance();

        let mut end = None;
        loop {
            if self.cursor.is_at_end() {
                self.report_error("unterminated /* */ comment".to_string());
                break;
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                end = Some(self.cursor.position());
                self.cursor.advance();
                self.cursor.advance();
                break;
            }
            self.cursor.advance();
        }

        if is_doc {
            if let Some(end) = end {
                let body = &self.cursor.source()[start..end];
                let canon = canonicalize_doc_comment(body, '*');
                self.attach_doc_comment(canon, on_same_line);
            }
        }
    }

    /// `/+ ... +/`, nests: a counter increments on every inner `/+` and
    /// decrements on every `+/`.
    fn skip_nesting_comment(&mut self, on_same_line: bool) {
        let is_doc = self.do_doc_comment
            && self.cursor.peek_char(2) == '+'
            && self.cursor.peek_char(3) != '+'
            && self.cursor.peek_char(3) != '/';
        let start = self.cursor.position() + 2;
        self.cursor.advance();
        self.cursor.advance();

        let mut depth: u32 = 1;
        let mut end = None;
        loop {
            if self.cursor.is_at_end() {
                self.report_error("unterminated /+ +/ comment".to_string());
                break;
            }
            if self.cursor.current_char() == '/' && self.cursor.peek_char(1) == '+' {
                depth = depth.saturating_add(1).min(MAX_COMMENT_DEPTH);
                self.cursor.advance();
                self.cursor.advance();
                continue;
            }
            if self.cursor.current_char() == '+' && self.cursor.peek_char(1) == '/' {
                depth -= 1;
                self.cursor.advance();
                self.cursor.advance();
                if depth == 0 {
                    end = Some(self.cursor.position() - 2);
                    break;
                }
                continue;
            }
            self.cursor.advance();
        }

        if is_doc {
            if let Some(end) = end {
                let body = &self.cursor.source()[start..end];
                let canon = canonicalize_doc_comment(body, '+');
                self.attach_doc_comment(canon, on_same_line);
            }
        }
    }

    /// Stages a canonicalized doc comment body for the next token, concatenating
    /// with anything already pending for the same slot.
    fn attach_doc_comment(&mut self, body: String, on_same_line: bool) {
        let slot = if on_same_line {
            &mut self.pending_line_comment
        } else {
            &mut self.pending_block_comment
        };
        match slot {
            Some(existing) => {
                existing.push('\n');
                existing.push_str(&body);
            },
            None => *slot = Some(body),
        }
    }
}

/// Canonicalizes a doc comment body: strips leading rows of the fill
/// character, strips a per-line leading fill character, normalizes line
/// endings, trims trailing whitespace per line, ensures a trailing `\n`.
fn canonicalize_doc_comment(body: &str, fill: char) -> String {
    let normalized = body.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines: Vec<&str> = normalized.split('\n').collect();

    while let Some(first) = lines.first() {
        let is_fill_row = !first.is_empty() && first.chars().all(|c| c == fill);
        if !first.trim().is_empty() && !is_fill_row {
            break;
        }
        lines.remove(0);
    }

    let mut out = String::new();
    for line in lines {
        let trimmed_start = line.trim_start();
        let stripped = if let Some(rest) = trimmed_start.strip_prefix(fill) {
            rest.strip_prefix(' ').unwrap_or(rest)
        } else {
            trimmed_start
        };
        out.push_str(stripped.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;
    use langc_util::Handler;

    fn tokens(source: &str) -> Vec<TokenKind> {
        let mut handler = Handler::new();
        let lexer = crate::Lexer::new(source, &mut handler);
        lexer.map(|t| t.kind).collect()
    }

    #[test]
    fn test_skip_whitespace() {
        assert_eq!(tokens("   \t\n  x"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_skip_line_comment() {
        assert_eq!(tokens("// a comment\nx"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_skip_block_comment() {
        assert_eq!(tokens("/* comment */ x"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_nesting_comment_nests() {
        assert_eq!(
            tokens("/+ outer /+ inner +/ still outer +/ 1"),
            vec![TokenKind::Int32V]
        );
    }

    #[test]
    fn test_doc_comment_attaches_to_next_token() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("/** hello */\nvoid", &mut handler);
        lexer.do_doc_comment = true;
        let tok = lexer.next_token();
        assert_eq!(tok.kind, crate::TokenKind::Void);
        assert_eq!(tok.block_comment.as_deref(), Some("hello\n"));
    }
}
