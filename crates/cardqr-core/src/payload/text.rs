use crate::domain::ContactRecord;

pub const DIVIDER_WIDTH: usize = 30;

/// Section separator: a light horizontal box-drawing line.
pub const DIVIDER: &str = "──────────────────────────────";

pub fn encode_text(record: &ContactRecord) -> String {
    let mut lines: Vec<String> = Vec::new();

    push_line(&mut lines, "👤 Name:", record.name());
    push_line(&mut lines, "💼 Job Title:", record.job_title());
    push_line(&mut lines, "🏢 Company:", record.company());
    lines.push(DIVIDER.to_string());

    if !record.phone().is_empty() {
        push_line(&mut lines, "📞 Phone:", &format!("tel:{}", record.phone()));
    }
    if !record.whatsapp().is_empty() {
        let link = format!("https://wa.me/{}", wa_number(record.whatsapp()));
        push_line(&mut lines, "💬 WhatsApp:", &link);
    }
    if !record.email().is_empty() {
        push_line(&mut lines, "📧 Email:", &format!("mailto:{}", record.email()));
    }
    lines.push(DIVIDER.to_string());

    push_line(&mut lines, "📍 Address:", record.address());
    push_line(&mut lines, "🌐 Website:", record.website());
    lines.push(DIVIDER.to_string());

    push_line(&mut lines, "💼 LinkedIn:", record.linkedin());
    push_line(&mut lines, "👥 Facebook:", record.facebook());

    if !record.custom_fields().is_empty() {
        lines.push(DIVIDER.to_string());
        for field in record.custom_fields() {
            push_line(&mut lines, &format!("✨ {}:", field.name), &field.value);
        }
    }

    lines.join("\n")
}

fn push_line(lines: &mut Vec<String>, tag: &str, value: &str) {
    if !value.is_empty() {
        lines.push(format!("{tag} {value}"));
    }
}

fn wa_number(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !matches!(ch, '+' | ' ' | '-'))
        .collect()
}
