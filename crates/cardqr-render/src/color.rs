use crate::error::RenderError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Accepts `#rgb`, `#rrggbb`, `black` and `white`.
    pub fn parse(raw: &str) -> Result<Self, RenderError> {
        let trimmed = raw.trim();
        let invalid = || RenderError::InvalidColor(raw.to_string());

        if trimmed.eq_ignore_ascii_case("black") {
            return Ok(Self::BLACK);
        }
        if trimmed.eq_ignore_ascii_case("white") {
            return Ok(Self::WHITE);
        }

        let hex = trimmed.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        match hex.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, ch) in channels.iter_mut().zip(hex.chars()) {
                    let nibble = ch.to_digit(16).ok_or_else(invalid)? as u8;
                    *slot = nibble * 0x11;
                }
                Ok(Self::rgb(channels[0], channels[1], channels[2]))
            }
            6 => {
                let channel = |range: std::ops::Range<usize>| {
                    u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
                };
                Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
            }
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = RenderError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl TryFrom<String> for Color {
    type Error = RenderError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn parse_short_and_long_hex() {
        assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
        assert_eq!(
            Color::parse("#F0f0F0").unwrap(),
            Color::rgb(0xf0, 0xf0, 0xf0)
        );
        assert_eq!(Color::parse("#1a2").unwrap(), Color::rgb(0x11, 0xaa, 0x22));
    }

    #[test]
    fn parse_named_colors() {
        assert_eq!(Color::parse(" Black ").unwrap(), Color::BLACK);
        assert_eq!(Color::parse("white").unwrap(), Color::WHITE);
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert!(Color::parse("blue").is_err());
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#gggggg").is_err());
        assert!(Color::parse("000000").is_err());
        assert!(Color::parse("#+12345").is_err());
    }

    #[test]
    fn display_uses_lowercase_hex() {
        assert_eq!(Color::rgb(0xAB, 0x0C, 0x01).to_string(), "#ab0c01");
    }
}
