//! Numeric literal lexing: integers (decimal/hex/binary/octal, `_`
//! separators, `U`/`u`/`L` suffixes, overflow tracking) and floats (decimal
//! and hex-mantissa/binary-exponent, `f`/`L`/imaginary suffixes).

use crate::lexer::floatparse::{is_float32_out_of_range, is_float64_out_of_range, parse_real};
use crate::token::{Token, TokenKind};
use crate::unicode::is_digit_in_base;
use crate::Lexer;

/// Threshold above which integer accumulation must switch from plain
/// multiply-add to checked arithmetic, per the overflow-tracking rule.
const OVERFLOW_GUARD: u64 = 0x0FFF_FFFF_FFFF_FFFF;

struct IntFlags {
    unsigned: bool,
    long: bool,
}

impl<'a> Lexer<'a> {
    /// Lexes an integer or floating-point literal starting at the cursor.
    pub fn lex_number(&mut self) -> Token {
        let start = self.cursor.position();
        let base = self.detect_base();

        let digit_start = self.cursor.position();
        let (value, overflowed) = self.scan_digits(base);

        if self.looks_like_float(base) {
            return self.lex_float(start);
        }

        if digit_start == self.cursor.position() {
            self.report_error("digit expected".to_string());
        }

        if base == 8 && value >= 8 {
            self.report_deprecation("octal literal with value >= 8 is deprecated".to_string());
        }

        let flags = self.scan_int_suffix();

        let is_decimal = base == 10;
        if is_decimal && overflowed {
            self.report_error("integer literal overflow".to_string());
        } else if is_decimal && value > i64::MAX as u64 {
            self.report_error("signed integer literal overflow".to_string());
        }

        let kind = pick_int_kind(value, is_decimal, flags.unsigned, flags.long, overflowed);
        Token::int(kind, value)
    }

    fn detect_base(&mut self) -> u32 {
        if self.cursor.current_char() == '0' {
            match self.cursor.peek_char(1) {
                'x' | 'X' => {
                    self.cursor.advance();
                    self.cursor.advance();
                    return 16;
                },
                'b' | 'B' => {
                    self.cursor.advance();
                    self.cursor.advance();
                    return 2;
                },
                c if c.is_digit(8) || c == '_' => return 8,
                _ => {},
            }
        }
        10
    }

    /// Scans digits (and `_` separators) of `base`, accumulating into a
    /// checked 64-bit value. Out-of-range octal digits are diagnosed but the
    /// scan continues past them.
    fn scan_digits(&mut self, base: u32) -> (u64, bool) {
        let mut value: u64 = 0;
        let mut overflowed = false;

        loop {
            let c = self.cursor.current_char();
            if c == '_' {
                self.cursor.advance();
                continue;
            }
            if base == 16 {
                if !c.is_ascii_hexdigit() {
                    break;
                }
            } else if !c.is_ascii_digit() {
                break;
            } else if !is_digit_in_base(c, base) {
                self.report_error(format!("radix {} digit expected, not `{}`", base, c));
            }
            let d = c.to_digit(16).unwrap() as u64;
            if value <= OVERFLOW_GUARD {
                value = value * base as u64 + d;
            } else {
                match value
                    .checked_mul(base as u64)
                    .and_then(|v| v.checked_add(d))
                {
                    Some(v) => value = v,
                    None => {
                        overflowed = true;
                        value = value.wrapping_mul(base as u64).wrapping_add(d);
                    },
                }
            }
            self.cursor.advance();
        }

        (value, overflowed)
    }

    /// True if the character(s) following the scanned digit run mean this is
    /// actually a float literal.
    fn looks_like_float(&self, base: u32) -> bool {
        match self.cursor.current_char() {
            '.' => {
                self.cursor.peek_char(1) != '.'
                    && !crate::unicode::is_ascii_ident_start(self.cursor.peek_char(1))
            },
            'e' | 'E' | 'f' | 'F' | 'i' => base == 10,
            'p' | 'P' => base == 16,
            'L' => self.cursor.peek_char(1) == 'i',
            _ => false,
        }
    }

    /// Parses the `{U, u, L}` suffix combination of an integer literal.
    /// Lowercase `l` is accepted but deprecated.
    fn scan_int_suffix(&mut self) -> IntFlags {
        let mut unsigned = false;
        let mut long = false;
        loop {
            match self.cursor.current_char() {
                'U' | 'u' => {
                    unsigned = true;
                    self.cursor.advance();
                },
                'L' => {
                    long = true;
                    self.cursor.advance();
                },
                'l' => {
                    self.report_deprecation("lowercase 'l' suffix is deprecated, use 'L'".to_string());
                    long = true;
                    self.cursor.advance();
                },
                _ => break,
            }
        }
        IntFlags { unsigned, long }
    }

    /// Re-scans the literal as a float from its original start (including any
    /// `0x`/`0X` prefix).
    fn lex_float(&mut self, start: usize) -> Token {
        let is_hex = self.cursor.source()[start..].starts_with("0x")
            || self.cursor.source()[start..].starts_with("0X");

        if self.cursor.current_char() == '.' {
            self.cursor.advance();
            loop {
                let c = self.cursor.current_char();
                let is_digit = if is_hex { c.is_ascii_hexdigit() } else { c.is_ascii_digit() };
                if is_digit || c == '_' {
                    self.cursor.advance();
                } else {
                    break;
                }
            }
        }

        let has_exponent = matches!(self.cursor.current_char(), 'e' | 'E' | 'p' | 'P');
        if has_exponent {
            self.cursor.advance();
            if matches!(self.cursor.current_char(), '+' | '-') {
                self.cursor.advance();
            }
            let exp_digit_start = self.cursor.position();
            while self.cursor.current_char().is_ascii_digit() || self.cursor.current_char() == '_'
            {
                self.cursor.advance();
            }
            if exp_digit_start == self.cursor.position() {
                self.report_error("no digits in float exponent".to_string());
            }
        } else if is_hex {
            self.report_error("hex float requires mandatory 'p' exponent".to_string());
        }

        let raw = self.cursor.slice_from(start);
        let ascii: String = raw.chars().filter(|&c| c != '_').collect();
        let (value, parse_out_of_range) = parse_real(&ascii);

        let (kind, _imaginary) = self.scan_float_suffix();
        let out_of_range = match kind {
            TokenKind::Float80V | TokenKind::Imaginary80V => false,
            TokenKind::Float32V | TokenKind::Imaginary32V => {
                parse_out_of_range || is_float32_out_of_range(value)
            },
            _ => parse_out_of_range || is_float64_out_of_range(value),
        };
        if out_of_range {
            self.report_error(format!("floating point literal '{}' is out of range", raw));
        }

        Token::float(kind, value)
    }

    /// Consumes at most one of `{f, F}` -> 32-bit, `{L}` -> 80-bit, default ->
    /// 64-bit, optionally followed by `i`/`I` to promote to the imaginary kind.
    fn scan_float_suffix(&mut self) -> (TokenKind, bool) {
        let mut kind = TokenKind::Float64V;
        match self.cursor.current_char() {
            'f' | 'F' => {
                kind = TokenKind::Float32V;
                self.cursor.advance();
            },
            'L' => {
                kind = TokenKind::Float80V;
                self.cursor.advance();
            },
            _ => {},
        }
        if matches!(self.cursor.current_char(), 'i' | 'I') {
            self.cursor.advance();
            kind = match kind {
                TokenKind::Float32V => TokenKind::Imaginary32V,
                TokenKind::Float80V => TokenKind::Imaginary80V,
                _ => TokenKind::Imaginary64V,
            };
            return (kind, true);
        }
        (kind, false)
    }
}

/// Picks the smallest integer kind that fits `n`, following decimal vs.
/// non-decimal promotion rules and the `U`/`L` suffix flags.
fn pick_int_kind(n: u64, is_decimal: bool, unsigned: bool, long: bool, overflowed: bool) -> TokenKind {
    if unsigned && long {
        return TokenKind::Uns64V;
    }
    if unsigned {
        return if n <= u32::MAX as u64 {
            TokenKind::Uns32V
        } else {
            TokenKind::Uns64V
        };
    }
    if long {
        return if !overflowed && n <= i64::MAX as u64 {
            TokenKind::Int64V
        } else {
            TokenKind::Uns64V
        };
    }
    if !is_decimal {
        if n <= i32::MAX as u64 {
            TokenKind::Int32V
        } else if n <= u32::MAX as u64 {
            TokenKind::Uns32V
        } else if n <= i64::MAX as u64 {
            TokenKind::Int64V
        } else {
            TokenKind::Uns64V
        }
    } else if n <= i32::MAX as u64 {
        TokenKind::Int32V
    } else if !overflowed && n <= i64::MAX as u64 {
        TokenKind::Int64V
    } else {
        TokenKind::Uns64V
    }
}
