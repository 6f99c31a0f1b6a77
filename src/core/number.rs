// Shared numeric conversion helpers used by the casting and color layers

const TWO_32: f64 = 2_i64.pow(32) as f64; // 2^32

/// JS ToInt32 semantics for Number inputs
pub(crate) fn to_int32(n: f64) -> i32 {
    if !n.is_finite() || n == 0.0 {
        return 0;
    }
    let int = n.trunc();
    let int32bit = ((int % TWO_32) + TWO_32) % TWO_32;
    if int32bit >= TWO_32 / 2.0 {
        (int32bit - TWO_32) as i32
    } else {
        int32bit as i32
    }
}

/// ECMAScript whitespace characters (broader than Rust's `.trim()`).
pub(crate) fn is_es_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}' | '\u{000A}' | '\u{000B}' | '\u{000C}' | '\u{000D}' | '\u{0020}' | '\u{00A0}' | '\u{1680}' | '\u{2000}'
            ..='\u{200A}' | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Trim ECMAScript whitespace from both ends of a string.
pub(crate) fn es_trim(s: &str) -> &str {
    s.trim_matches(is_es_whitespace)
}

/// Digits of a prefixed integer literal (`0x..`, `0b..`, `0o..`). Accumulates in
/// f64 so long literals lose precision instead of failing.
fn parse_radix_digits(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut acc = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * radix as f64 + d as f64,
            None => return f64::NAN,
        }
    }
    acc
}

/// String→number with `Number(string)` semantics.
/// Empty/whitespace → 0, only exact "Infinity"/"+Infinity"/"-Infinity", hex/bin/oct.
pub(crate) fn es_string_to_number(s: &str) -> f64 {
    let trimmed = es_trim(s);
    if trimmed.is_empty() {
        return 0.0;
    }
    if let Some(hex) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        return parse_radix_digits(hex, 16);
    }
    if let Some(bin) = trimmed.strip_prefix("0b").or_else(|| trimmed.strip_prefix("0B")) {
        return parse_radix_digits(bin, 2);
    }
    if let Some(oct) = trimmed.strip_prefix("0o").or_else(|| trimmed.strip_prefix("0O")) {
        return parse_radix_digits(oct, 8);
    }
    // Only accept exact "Infinity"/"+Infinity"/"-Infinity" (case-sensitive)
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    // Rust's parser also accepts "inf", "infinity" and "nan" in any case.
    // Overflow like "10e10000" still legitimately yields Infinity.
    let stripped = trimmed.strip_prefix('+').or_else(|| trimmed.strip_prefix('-')).unwrap_or(trimmed);
    if stripped.starts_with(|c: char| c.is_alphabetic()) {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
