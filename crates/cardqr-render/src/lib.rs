pub mod color;
pub mod error;
pub mod qr;

pub use color::Color;
pub use error::{RenderError, Result};
pub use qr::{
    render, render_png, render_svg, render_terminal, ErrorCorrection, OutputKind, QrStyle,
    MAX_IMAGE_SIDE,
};
