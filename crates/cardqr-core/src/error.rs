use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("name is required")]
    MissingRequiredField,
    #[error("invalid phone number format: {0}")]
    InvalidPhone(String),
    #[error("invalid WhatsApp number format: {0}")]
    InvalidWhatsApp(String),
    #[error("invalid email format: {0}")]
    InvalidEmail(String),
    #[error("enter a phone number before copying it to WhatsApp")]
    MissingPhone,
    #[error("custom field needs both a name and a value")]
    IncompleteCustomField,
}

/// A field validator refused the value.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("value rejected")]
pub struct Rejected;
