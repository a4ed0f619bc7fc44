//! Lookahead: peeking at upcoming tokens without consuming them from the
//! caller's point of view (§4.8).

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Returns the token immediately following `current` without consuming
    /// it from `next_token`'s perspective, filling the lookahead cache if
    /// it is not already populated.
    pub fn peek(&mut self, current: &Token) -> Token {
        let _ = current;
        if self.lookahead.is_empty() {
            let tok = self.scan();
            self.lookahead.push(tok);
        }
        self.lookahead[0].clone()
    }

    /// The token after the one `next_token` would return next.
    pub fn peek_next(&mut self) -> Token {
        while self.lookahead.len() < 1 {
            let tok = self.scan();
            self.lookahead.push(tok);
        }
        self.lookahead[0].clone()
    }

    /// Two tokens ahead of the one `next_token` would return next.
    pub fn peek_next2(&mut self) -> Token {
        while self.lookahead.len() < 2 {
            let tok = self.scan();
            self.lookahead.push(tok);
        }
        self.lookahead[1].clone()
    }

    /// Given `tk` sitting on a `(`, scans ahead tracking paren and brace
    /// depth (ignoring `;` inside braces) and returns the token after the
    /// matching `)`, or `Eof` if it is never found.
    pub fn peek_past_paren(&mut self, tk: &Token) -> Token {
        debug_assert_eq!(tk.kind, TokenKind::LParen);

        let mut paren_depth: i32 = 1;
        let mut brace_depth: i32 = 0;
        let mut idx = 0;

        loop {
            while idx >= self.lookahead.len() {
                let tok = self.scan();
                let is_eof = tok.is_eof();
                self.lookahead.push(tok);
                if is_eof {
                    break;
                }
            }
            let tok = &self.lookahead[idx];
            match tok.kind {
                TokenKind::LParen => paren_depth += 1,
                TokenKind::RParen => {
                    paren_depth -= 1;
                    if paren_depth == 0 {
                        idx += 1;
                        break;
                    }
                },
                TokenKind::LBrace => brace_depth += 1,
                TokenKind::RBrace => brace_depth -= 1,
                // A `;` inside braces is an ordinary statement separator and is
                // ignored; one seen at brace depth 0 means this isn't a normal
                // parenthesized construct, so stop scanning right there.
                TokenKind::Semicolon if brace_depth == 0 => break,
                TokenKind::Eof => break,
                _ => {},
            }
            idx += 1;
        }

        while idx >= self.lookahead.len() {
            let tok = self.scan();
            let is_eof = tok.is_eof();
            self.lookahead.push(tok);
            if is_eof {
                break;
            }
        }
        self.lookahead
            .get(idx)
            .cloned()
            .unwrap_or_else(|| Token::new(TokenKind::Eof))
    }
}
