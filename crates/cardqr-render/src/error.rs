use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("payload is too long to fit in a QR code")]
    PayloadTooLong,
    #[error("qr encoding failed: {0}")]
    Encode(String),
    #[error("unsupported output extension: {0} (expected .png or .svg)")]
    UnsupportedExtension(String),
    #[error("invalid color: {0}")]
    InvalidColor(String),
    #[error("invalid error correction level: {0} (expected L, M, Q or H)")]
    InvalidErrorCorrection(String),
    #[error("image would be {0}px wide; reduce module size or quiet zone")]
    ImageTooLarge(u32),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, RenderError>;
