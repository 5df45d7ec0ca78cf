/// Where a link points, which decides how a bare handle is expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkPlatform {
    #[default]
    Website,
    Facebook,
    LinkedIn,
}

impl LinkPlatform {
    /// Unknown or empty labels fall back to a plain website.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "facebook" => LinkPlatform::Facebook,
            "linkedin" => LinkPlatform::LinkedIn,
            _ => LinkPlatform::Website,
        }
    }
}

pub fn validate_url(raw: &str, platform: LinkPlatform) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return trimmed.to_string();
    }
    match platform {
        LinkPlatform::Facebook => format!("https://facebook.com/{trimmed}"),
        LinkPlatform::LinkedIn => format!("https://linkedin.com/in/{trimmed}"),
        LinkPlatform::Website => format!("https://{trimmed}"),
    }
}
