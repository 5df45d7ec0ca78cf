use crate::error::Rejected;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email regex")
});

/// Checks an email address without rewriting it. Blank input is absent.
pub fn validate_email(raw: &str) -> Result<Option<String>, Rejected> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if EMAIL_RE.is_match(trimmed) {
        Ok(Some(trimmed.to_string()))
    } else {
        Err(Rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::validate_email;
    use crate::error::Rejected;

    #[test]
    fn validate_email_accepts_plus_and_subdomains() {
        let value = validate_email("a.b+c@sub.example.com").unwrap();
        assert_eq!(value.as_deref(), Some("a.b+c@sub.example.com"));
    }

    #[test]
    fn validate_email_keeps_case() {
        let value = validate_email("Ada@Example.COM").unwrap();
        assert_eq!(value.as_deref(), Some("Ada@Example.COM"));
    }

    #[test]
    fn validate_email_rejects_malformed() {
        assert_eq!(validate_email("not-an-email"), Err(Rejected));
        assert_eq!(validate_email("jane@example"), Err(Rejected));
        assert_eq!(validate_email("jane@example.c"), Err(Rejected));
        assert_eq!(validate_email("jane@example.c0m"), Err(Rejected));
        assert_eq!(validate_email("ja ne@example.com"), Err(Rejected));
    }

    #[test]
    fn validate_email_treats_blank_as_absent() {
        assert_eq!(validate_email(""), Ok(None));
    }
}
