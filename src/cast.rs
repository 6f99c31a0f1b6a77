use crate::core::{Value, es_trim, is_truthy, value_to_number, value_to_string};
use crate::unicode::{fold_case, utf16_cmp};
use std::cmp::Ordering;

/// Block cast to number. NaN, and anything that fails to parse, becomes 0.
pub fn to_number(value: &Value) -> f64 {
    // Numbers skip the generic conversion entirely
    if let Value::Number(n) = value {
        return if n.is_nan() { 0.0 } else { *n };
    }
    let n = value_to_number(value);
    if n.is_nan() { 0.0 } else { n }
}

/// Block cast to boolean.
///
/// Strings do not follow plain truthiness: `""`, `"0"` and `"false"` in any
/// letter case are false, every other string (including `"0.0"`) is true.
pub fn to_boolean(value: &Value) -> bool {
    match value {
        Value::Boolean(b) => *b,
        Value::String(s) => !(s.is_empty() || s == "0" || fold_case(s) == "false"),
        _ => is_truthy(value),
    }
}

/// Block cast to string.
pub fn to_string(value: &Value) -> String {
    value_to_string(value)
}

/// Strings that the generic conversion turns into 0 but which hold neither a
/// `'0'` nor a tab, e.g. `""` or `" "`. Tab counts as zero for compatibility
/// with project files saved by a broken `trim()` polyfill.
fn is_not_actually_zero(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.chars().any(|c| c == '0' || c == '\t'),
        _ => false,
    }
}

/// Compare two values with block semantics.
///
/// Returns a negative number, zero or a positive number. When both sides are
/// numeric the result is the raw difference `v1 - v2`; otherwise the values
/// are compared as case-insensitive strings and the result is -1, 0 or 1.
pub fn compare(v1: &Value, v2: &Value) -> f64 {
    let mut n1 = value_to_number(v1);
    let mut n2 = value_to_number(v2);
    if n1 == 0.0 && is_not_actually_zero(v1) {
        n1 = f64::NAN;
    } else if n2 == 0.0 && is_not_actually_zero(v2) {
        n2 = f64::NAN;
    }
    if n1.is_nan() || n2.is_nan() {
        let s1 = fold_case(&value_to_string(v1));
        let s2 = fold_case(&value_to_string(v2));
        log::trace!("compare: string fallback {:?} vs {:?}", s1, s2);
        return match utf16_cmp(&s1, &s2) {
            Ordering::Less => -1.0,
            Ordering::Greater => 1.0,
            Ordering::Equal => 0.0,
        };
    }
    // Infinity - Infinity would be NaN
    if n1.is_infinite() && n1 == n2 {
        return 0.0;
    }
    n1 - n2
}

/// [`compare`] folded into an [`Ordering`] for a single pair.
///
/// This is not a total order: mixed numeric and text pairs can cycle
/// (`9 < 10`, `10 < "1a"`, `"1a" < 9`), so it must not be handed to
/// `sort_by` or other std sorts, which may panic on such input.
pub fn compare_ordering(v1: &Value, v2: &Value) -> Ordering {
    compare(v1, v2).partial_cmp(&0.0).unwrap_or(Ordering::Equal)
}

/// Whether a value looks like a round integer after casting.
///
/// Strings are judged textually: anything without a `.` counts, so `"1e5"`
/// is integer-like and `"1.0"` is not.
pub fn is_int(value: &Value) -> bool {
    match value {
        // NaN is considered an integer
        Value::Number(n) => n.is_nan() || *n == n.floor(),
        Value::Boolean(_) => true,
        Value::String(s) => !s.contains('.'),
        _ => false,
    }
}

/// Null, or a string made only of whitespace.
pub fn is_white_space(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => es_trim(s).is_empty(),
        _ => false,
    }
}
