//! Stand-in for the external float-parse collaborator (§6): turns a decimal
//! or hex-float ASCII string (already stripped of `_` separators) into a
//! real value, flagging out-of-range results.

/// Parses `ascii` as a real number. Returns `(value, out_of_range)`.
///
/// Accepts plain decimal floats (`3.14`, `1e10`) and hex floats with a
/// mandatory binary exponent (`0x1.8p3`), matching the two forms the number
/// scanner ever hands it.
pub fn parse_real(ascii: &str) -> (f64, bool) {
    if ascii.starts_with("0x") || ascii.starts_with("0X") {
        parse_hex_float(&ascii[2..])
    } else {
        match ascii.parse::<f64>() {
            Ok(v) if v.is_finite() => (v, false),
            Ok(v) => (v, true),
            Err(_) => (0.0, true),
        }
    }
}

fn parse_hex_float(rest: &str) -> (f64, bool) {
    let (mantissa_str, exp_str) = match rest.find(['p', 'P']) {
        Some(idx) => (&rest[..idx], &rest[idx + 1..]),
        None => return (0.0, true),
    };

    let (int_part, frac_part) = match mantissa_str.find('.') {
        Some(idx) => (&mantissa_str[..idx], &mantissa_str[idx + 1..]),
        None => (mantissa_str, ""),
    };

    let mut mantissa: f64 = 0.0;
    for c in int_part.chars() {
        let d = match c.to_digit(16) {
            Some(d) => d,
            None => return (0.0, true),
        };
        mantissa = mantissa * 16.0 + d as f64;
    }
    let mut scale = 1.0 / 16.0;
    for c in frac_part.chars() {
        let d = match c.to_digit(16) {
            Some(d) => d,
            None => return (0.0, true),
        };
        mantissa += d as f64 * scale;
        scale /= 16.0;
    }

    let exponent: i32 = match exp_str.parse() {
        Ok(e) => e,
        Err(_) => return (0.0, true),
    };

    let value = mantissa * 2f64.powi(exponent);
    (value, !value.is_finite())
}

/// Whether `value` cannot be represented as an `f32`.
pub fn is_float32_out_of_range(value: f64) -> bool {
    value.is_finite() && (value as f32).is_infinite()
}

/// Whether `value` cannot be represented as a finite `f64`.
pub fn is_float64_out_of_range(value: f64) -> bool {
    !value.is_finite()
}
