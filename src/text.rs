//! String helpers for names and identifiers.

use crate::core::{Value, value_to_string};
use rand::Rng;

/// Characters legal in a generated id: all on a US keyboard, no XML specials,
/// no control codes and no `$`.
const ID_SOUP: &[u8] = b"!#%()*+,-./:;=?@[]^_`{|}~ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const ID_LENGTH: usize = 20;

/// Generate a 20-character id. 87^20 exceeds 2^128.
pub fn uid<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LENGTH).map(|_| ID_SOUP[rng.gen_range(0..ID_SOUP.len())] as char).collect()
}

#[cfg(feature = "std")]
pub fn uid_thread_rng() -> String {
    uid(&mut rand::thread_rng())
}

/// Split on the first `separator`: `"foo.tar.gz"` gives `("foo", Some("tar.gz"))`,
/// `"foo"` gives `("foo", None)`.
pub fn split_first(text: &str, separator: char) -> (&str, Option<&str>) {
    match text.split_once(separator) {
        Some((head, tail)) => (head, Some(tail)),
        None => (text, None),
    }
}

pub fn without_trailing_digits(s: &str) -> &str {
    s.trim_end_matches(|c: char| c.is_ascii_digit())
}

/// `name` if nobody uses it yet, otherwise its stem with the first free
/// numeric suffix starting at 2 (`"sprite"` → `"sprite2"`, `"sprite2"` → `"sprite3"`).
pub fn unused_name<S: AsRef<str>>(name: &str, existing_names: &[S]) -> String {
    let taken = |candidate: &str| existing_names.iter().any(|n| n.as_ref() == candidate);
    if !taken(name) {
        return name.to_string();
    }
    let stem = without_trailing_digits(name);
    let mut i = 2_u64;
    while taken(&format!("{stem}{i}")) {
        i += 1;
    }
    format!("{stem}{i}")
}

/// Replace characters that are not allowed in XML (`<>&'"`) with their entity
/// names, for non-user-facing strings such as variable ids.
///
/// Lists, which old hacked projects sometimes put here, are joined first. Any
/// other input is logged and handed back unchanged.
pub fn replace_unsafe_chars(unsafe_value: &Value) -> Value {
    let text = match unsafe_value {
        Value::String(s) => s.clone(),
        Value::List(_) => value_to_string(unsafe_value),
        other => {
            log::error!("Unexpected input received in replace_unsafe_chars: {:?}", other);
            return other.clone();
        }
    };
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("lt"),
            '>' => out.push_str("gt"),
            '&' => out.push_str("amp"),
            '\'' => out.push_str("apos"),
            '"' => out.push_str("quot"),
            _ => out.push(c),
        }
    }
    Value::String(out)
}
