use crate::error::Rejected;
use regex::Regex;
use std::sync::LazyLock;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d{10,15}$").expect("phone regex"));

/// Normalizes a phone number to digits with an optional leading `+`.
///
/// Blank input is absent rather than invalid. Every other character is
/// dropped before matching, so `"+1 (415) 555-1212"` becomes `"+14155551212"`.
pub fn validate_phone(raw: &str) -> Result<Option<String>, Rejected> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let mut out = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        if ch.is_ascii_digit() {
            out.push(ch);
        } else if ch == '+' && out.is_empty() {
            out.push(ch);
        }
    }

    if PHONE_RE.is_match(&out) {
        Ok(Some(out))
    } else {
        Err(Rejected)
    }
}
