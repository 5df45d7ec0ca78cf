mod text;
mod vcard;

use crate::domain::ContactRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use text::{encode_text, DIVIDER, DIVIDER_WIDTH};
pub use vcard::{encode_vcard, escape_vcard_value};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadFormat {
    #[default]
    Vcard,
    Text,
}

impl PayloadFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            PayloadFormat::Vcard => "vcard",
            PayloadFormat::Text => "text",
        }
    }
}

impl fmt::Display for PayloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown payload format: {0} (expected vcard or text)")]
pub struct UnknownFormat(pub String);

impl FromStr for PayloadFormat {
    type Err = UnknownFormat;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "vcard" => Ok(PayloadFormat::Vcard),
            "text" => Ok(PayloadFormat::Text),
            _ => Err(UnknownFormat(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Escape `\`, newlines, `;` and `,` in vCard values.
    pub escape_vcard: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self { escape_vcard: true }
    }
}

pub fn encode(record: &ContactRecord, format: PayloadFormat, options: &EncodeOptions) -> String {
    match format {
        PayloadFormat::Vcard => encode_vcard(record, options),
        PayloadFormat::Text => encode_text(record),
    }
}
