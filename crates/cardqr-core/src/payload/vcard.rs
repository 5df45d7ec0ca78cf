use super::EncodeOptions;
use crate::domain::ContactRecord;
use std::borrow::Cow;

pub fn encode_vcard(record: &ContactRecord, options: &EncodeOptions) -> String {
    let value = |raw: &str| -> String {
        if options.escape_vcard {
            escape_vcard_value(raw)
        } else {
            raw.to_string()
        }
    };

    let mut lines = vec!["BEGIN:VCARD".to_string(), "VERSION:3.0".to_string()];

    if !record.name().is_empty() {
        let name = value(record.name());
        lines.push(format!("FN:{name}"));
        lines.push(format!("N:{name};;;"));
    }
    if !record.job_title().is_empty() {
        lines.push(format!("TITLE:{}", value(record.job_title())));
    }
    if !record.company().is_empty() {
        lines.push(format!("ORG:{}", value(record.company())));
    }
    if !record.phone().is_empty() {
        lines.push(format!("TEL:{}", value(record.phone())));
    }
    if !record.whatsapp().is_empty() {
        let number = record.whatsapp().trim_start_matches('+');
        lines.push(format!("TEL;TYPE=whatsapp:+{}", value(number)));
    }
    if !record.email().is_empty() {
        lines.push(format!("EMAIL:{}", value(record.email())));
    }
    if !record.address().is_empty() {
        lines.push(format!("ADR:;;{};;;;", value(record.address())));
    }
    if !record.website().is_empty() {
        lines.push(format!("URL:{}", value(record.website())));
    }
    if !record.facebook().is_empty() {
        lines.push(format!(
            "X-SOCIALPROFILE;TYPE=facebook:{}",
            value(record.facebook())
        ));
    }
    if !record.linkedin().is_empty() {
        lines.push(format!(
            "X-SOCIALPROFILE;TYPE=linkedin:{}",
            value(record.linkedin())
        ));
    }
    for field in record.custom_fields() {
        let param = if options.escape_vcard {
            quote_param_value(&field.name)
        } else {
            Cow::Borrowed(field.name.as_str())
        };
        lines.push(format!("X-CUSTOM;TYPE={}:{}", param, value(&field.value)));
    }

    lines.push("END:VCARD".to_string());
    lines.join("\n")
}

pub fn escape_vcard_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\r' => {
                if matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                out.push_str("\\n");
            }
            '\n' => out.push_str("\\n"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            _ => out.push(ch),
        }
    }
    out
}

// Parameter values cannot be backslash-escaped; they are quoted instead.
fn quote_param_value(value: &str) -> Cow<'_, str> {
    if !value
        .chars()
        .any(|ch| matches!(ch, ';' | ':' | ',' | '"') || ch.is_control())
    {
        return Cow::Borrowed(value);
    }
    let inner: String = value
        .chars()
        .filter(|ch| *ch != '"' && !ch.is_control())
        .collect();
    Cow::Owned(format!("\"{inner}\""))
}
