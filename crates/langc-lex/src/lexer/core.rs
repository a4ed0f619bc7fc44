//! Core lexer implementation: state, dispatch, and the `next()`/`Iterator` surface.

use langc_util::{DiagnosticBuilder, Handler, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for the core language.
///
/// Owns a read cursor into an externally provided source buffer and produces
/// a linear token stream terminated by [`TokenKind::Eof`]. A small lookahead
/// cache (§4.8 of the design) lets a parser peek ahead without losing tokens.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub cursor: Cursor<'a>,

    /// Error handler for reporting lexical errors.
    pub handler: &'a mut Handler,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,
    pub(crate) token_start_line: u32,
    pub(crate) token_start_column: u32,

    /// Whether the BOM/shebang preamble has been checked yet.
    pub bom_checked: bool,

    /// Reported filename; rewritten by a `#line` directive.
    pub filename: String,

    /// Signed adjustment applied to `cursor.line()` to get the reported line
    /// number, set by `#line`.
    pub(crate) line_delta: i64,

    /// Set once any fatal-class diagnostic has been emitted.
    pub errors: bool,

    /// Enables doc-comment harvesting (`/**`, `/++`, `///`).
    pub do_doc_comment: bool,

    /// When set, each comment is emitted as its own `TokenKind::Comment` token
    /// instead of being skipped.
    pub comment_token: bool,

    pub(crate) pending_block_comment: Option<String>,
    pub(crate) pending_line_comment: Option<String>,

    /// Raw cursor line of the last token emitted by `scan()`, used to decide
    /// whether a doc comment trails a token (same line) or opens one (fresh line).
    pub(crate) prev_token_line: u32,

    /// Location of the token returned by the previous `next_token()` call.
    pub prev_span: Span,

    /// Lookahead cache: already-scanned tokens not yet consumed by `next_token`.
    pub(crate) lookahead: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            bom_checked: false,
            filename: String::from("<input>"),
            line_delta: 0,
            errors: false,
            do_doc_comment: false,
            comment_token: false,
            pending_block_comment: None,
            pending_line_comment: None,
            prev_token_line: 0,
            prev_span: Span::DUMMY,
            lookahead: Vec::new(),
        }
    }

    /// The line number to report for the current cursor position, after any
    /// `#line` adjustment.
    pub(crate) fn reported_line(&self) -> u32 {
        (self.cursor.line() as i64 + self.line_delta).max(1) as u32
    }

    /// Returns the next token, draining the lookahead cache first.
    ///
    /// This is the main entry point for tokenization: whitespace and comments
    /// are skipped, doc comments are attached, and the cursor is dispatched on
    /// its first significant byte.
    pub fn next_token(&mut self) -> Token {
        let token = if !self.lookahead.is_empty() {
            self.lookahead.remove(0)
        } else {
            self.scan()
        };
        self.prev_span = token.span;
        token
    }

    /// The raw dispatcher: scans exactly one token from the live cursor,
    /// ignoring the lookahead cache. Used both by `next_token` and by the
    /// lookahead machinery to populate the cache.
    pub(crate) fn scan(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.position();
        self.token_start_line = self.reported_line();
        self.token_start_column = self.cursor.column();

        let mut token = if self.cursor.is_at_end() {
            Token::new(TokenKind::Eof)
        } else {
            self.dispatch()
        };

        token.span = self.current_span();
        token.block_comment = self.pending_block_comment.take();
        token.line_comment = self.pending_line_comment.take();
        self.prev_token_line = self.cursor.line();
        token
    }

    fn dispatch(&mut self) -> Token {
        match self.cursor.current_char() {
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            ',' => self.single(TokenKind::Comma),
            ';' => self.single(TokenKind::Semicolon),
            '?' => self.single(TokenKind::Question),
            '$' => self.single(TokenKind::Dollar),
            '@' => self.single(TokenKind::At),
            '+' => self.lex_plus(),
            '-' => self.lex_minus(),
            '*' => self.lex_star(),
            '/' => self.lex_slash(),
            '%' => self.lex_percent(),
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '&' => self.lex_ampersand(),
            '|' => self.lex_pipe(),
            ':' => self.single(TokenKind::Colon),
            '.' => self.lex_dot(),
            '^' => self.lex_caret(),
            '~' => self.lex_tilde(),
            '"' => self.lex_string(),
            '\'' => self.lex_char(),
            '`' => self.lex_wysiwyg_backtick(),
            '#' => self.lex_pound(),
            'x' if self.cursor.peek_char(1) == '"' => self.lex_hex_string(),
            'r' if self.cursor.peek_char(1) == '"' => self.lex_wysiwyg_r(),
            'q' if self.cursor.peek_char(1) == '"' => self.lex_delimited_string(),
            'q' if self.cursor.peek_char(1) == '{' => self.lex_token_string(),
            c if crate::unicode::is_ascii_ident_start(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if !c.is_ascii() && crate::unicode::is_ident_start(c) => self.lex_identifier(),
            '\u{2028}' | '\u{2029}' => {
                self.cursor.advance();
                self.scan()
            },
            c => {
                self.report_error(format!("character '{}' is not a valid token", c));
                self.cursor.advance();
                Token::new(TokenKind::Invalid)
            },
        }
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        Token::new(kind)
    }

    /// `#` starts either a `#line` directive or a lone `TOKpound`.
    fn lex_pound(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.source()[self.cursor.position()..].starts_with("line")
            && !crate::unicode::is_ascii_ident_continue(self.cursor.peek_char(4))
        {
            self.cursor.advance_n(4);
            self.lex_line_directive();
            return self.scan();
        }
        Token::new(TokenKind::Pound)
    }

    /// Reports a lexical error at the current token position.
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.errors = true;
        DiagnosticBuilder::error(message)
            .span(self.current_span())
            .emit(self.handler);
    }

    /// Reports a deprecation at the current token position.
    pub fn report_deprecation(&mut self, message: impl Into<String>) {
        if self.handler.treat_deprecations_as_error() {
            self.errors = true;
        }
        DiagnosticBuilder::deprecation(message)
            .span(self.current_span())
            .emit(self.handler);
    }

    fn current_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Returns the current line number (1-based), after `#line` adjustment.
    pub fn line(&self) -> u32 {
        self.reported_line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the starting byte offset of the current token.
    pub fn token_start(&self) -> usize {
        self.token_start
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
