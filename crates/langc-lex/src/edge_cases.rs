//! Cross-cutting boundary and recovery tests, covering scenarios that don't
//! fit neatly under one module: `#line` + string interplay, lookahead
//! consistency, and the universal properties tracked across the scanner.

#[cfg(test)]
mod tests {
    use crate::token::TokenValue;
    use crate::{Lexer, TokenKind};
    use langc_util::Handler;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut handler = Handler::new();
        let lexer = Lexer::new(source, &mut handler);
        lexer.map(|t| t.kind).collect()
    }

    /// Boundary scenario 1: `int` then repeated EOF.
    #[test]
    fn test_boundary_keyword_then_repeated_eof() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("int", &mut handler);
        assert_eq!(lexer.next_token().kind, TokenKind::Int32);
        assert!(lexer.next_token().is_eof());
        assert!(lexer.next_token().is_eof());
    }

    /// Boundary scenario 2.
    #[test]
    fn test_boundary_zero_literal() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("0", &mut handler);
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Int32V);
        assert_eq!(tok.value, TokenValue::Int(0));
        assert!(lexer.next_token().is_eof());
    }

    /// Boundary scenario 3: hex-literal kind promotion ladder.
    #[test]
    fn test_boundary_hex_kind_ladder() {
        let mut handler = Handler::new();
        assert_eq!(
            Lexer::new("0x8000_0000", &mut handler).next_token().kind,
            TokenKind::Uns32V
        );
        assert_eq!(
            Lexer::new("0x1_0000_0000", &mut handler).next_token().kind,
            TokenKind::Int64V
        );
        assert_eq!(
            Lexer::new("0x8000_0000_0000_0000", &mut handler)
                .next_token()
                .kind,
            TokenKind::Uns64V
        );
    }

    /// Boundary scenario 4: wysiwyg string does not process escapes.
    #[test]
    fn test_boundary_wysiwyg_no_escapes() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("r\"a\\nb\"", &mut handler);
        let tok = lexer.next_token();
        match tok.value {
            TokenValue::Str { text, .. } => assert_eq!(text, "a\\nb"),
            _ => panic!("expected string"),
        }
    }

    /// Boundary scenario 5: nested parens inside a bracketed delimited string.
    #[test]
    fn test_boundary_delimited_string_nesting() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("q\"(a(b)c)\"", &mut handler);
        let tok = lexer.next_token();
        match tok.value {
            TokenValue::Str { text, .. } => assert_eq!(text, "a(b)c"),
            _ => panic!("expected string"),
        }
    }

    /// Boundary scenario 6: nesting comments.
    #[test]
    fn test_boundary_nesting_comment() {
        assert_eq!(
            kinds("/+ outer /+ inner +/ still outer +/ 1"),
            vec![TokenKind::Int32V]
        );
    }

    /// Boundary scenario 7: `#line` directive rewrites the reported location.
    #[test]
    fn test_boundary_line_directive_rewrites_location() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("#line 42 \"foo.d\"\n;", &mut handler);
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Semicolon);
        assert_eq!(tok.span.line, 42);
        assert_eq!(lexer.filename, "foo.d");
    }

    /// Boundary scenario 8: a lone backslash before EOF recovers without a crash.
    #[test]
    fn test_boundary_lone_backslash_before_eof() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("'\\", &mut handler);
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::CharV);
        assert_eq!(tok.value, TokenValue::Char('\\'));
    }

    /// Boundary scenario 9: a `/**` comment attaches to the following keyword.
    #[test]
    fn test_boundary_doc_comment_attaches_to_keyword() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("/** hello */\nvoid", &mut handler);
        lexer.do_doc_comment = true;
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Void);
        assert_eq!(tok.block_comment.as_deref(), Some("hello\n"));
    }

    /// Termination: repeated calls past EOF keep yielding EOF.
    #[test]
    fn test_universal_termination() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("x y z", &mut handler);
        for _ in 0..3 {
            lexer.next_token();
        }
        for _ in 0..5 {
            assert!(lexer.next_token().is_eof());
        }
    }

    /// Lookahead consistency: peekNext matches what next() subsequently returns.
    #[test]
    fn test_universal_lookahead_consistency() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("a + b * c", &mut handler);
        let mut via_peek = Vec::new();
        loop {
            let peeked = lexer.peek_next();
            let actual = lexer.next_token();
            assert_eq!(peeked.kind, actual.kind);
            if actual.is_eof() {
                break;
            }
            via_peek.push(actual.kind);
        }
        assert_eq!(
            via_peek,
            vec![
                TokenKind::Identifier,
                TokenKind::Plus,
                TokenKind::Identifier,
                TokenKind::Star,
                TokenKind::Identifier,
            ]
        );
    }

    /// Numeric fidelity: decimal integers in range keep their exact value
    /// and pick the smallest kind that fits.
    #[test]
    fn test_universal_numeric_fidelity() {
        let mut handler = Handler::new();
        let tok = Lexer::new("2147483647", &mut handler).next_token();
        assert_eq!(tok.kind, TokenKind::Int32V);
        assert_eq!(tok.value, TokenValue::Int(2147483647));

        let mut handler = Handler::new();
        let tok = Lexer::new("2147483648", &mut handler).next_token();
        assert_eq!(tok.kind, TokenKind::Int64V);
        assert_eq!(tok.value, TokenValue::Int(2147483648));
    }

    /// Escape round-trip: a representative sample from the escape table.
    #[test]
    fn test_universal_escape_round_trip() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("\"\\n\\t\\\\\\x41\"", &mut handler);
        let tok = lexer.next_token();
        match tok.value {
            TokenValue::Str { text, .. } => assert_eq!(text, "\n\t\\A"),
            _ => panic!("expected string"),
        }
    }

    /// Recovery: an unknown byte does not abort the scan; it is diagnosed and
    /// skipped, and scanning continues normally afterward.
    #[test]
    fn test_recovery_unknown_byte() {
        assert_eq!(
            kinds("\u{7}x"),
            vec![TokenKind::Invalid, TokenKind::Identifier]
        );
    }

    /// Recovery: an unterminated `/* */` comment is diagnosed but still lets
    /// the scanner reach EOF rather than looping forever.
    #[test]
    fn test_recovery_unterminated_block_comment_reaches_eof() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("/* never closed", &mut handler);
        assert!(lexer.next_token().is_eof());
        assert!(handler.has_errors());
    }

    /// Recovery: an unterminated string still yields a usable token and EOF.
    #[test]
    fn test_recovery_unterminated_string_reaches_eof() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("\"never closed", &mut handler);
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::StringV);
        assert!(lexer.next_token().is_eof());
    }
}
