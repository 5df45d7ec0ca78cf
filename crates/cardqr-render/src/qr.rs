use crate::color::Color;
use crate::error::{RenderError, Result};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use qrcode::render::unicode;
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};
use serde::Deserialize;
use std::io::Cursor;
use std::path::Path;
use std::str::FromStr;

/// Largest rendered side, in pixels.
pub const MAX_IMAGE_SIDE: u32 = 8192;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum ErrorCorrection {
    L,
    #[default]
    M,
    Q,
    H,
}

impl ErrorCorrection {
    fn level(self) -> EcLevel {
        match self {
            ErrorCorrection::L => EcLevel::L,
            ErrorCorrection::M => EcLevel::M,
            ErrorCorrection::Q => EcLevel::Q,
            ErrorCorrection::H => EcLevel::H,
        }
    }
}

impl FromStr for ErrorCorrection {
    type Err = RenderError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(ErrorCorrection::L),
            "M" => Ok(ErrorCorrection::M),
            "Q" => Ok(ErrorCorrection::Q),
            "H" => Ok(ErrorCorrection::H),
            _ => Err(RenderError::InvalidErrorCorrection(raw.to_string())),
        }
    }
}

impl TryFrom<String> for ErrorCorrection {
    type Error = RenderError;

    fn try_from(raw: String) -> Result<Self> {
        raw.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrStyle {
    pub fill: Color,
    pub background: Color,
    /// Pixels per module.
    pub module_size: u32,
    /// Blank margin, in modules.
    pub quiet_zone: u32,
    pub error_correction: ErrorCorrection,
}

impl Default for QrStyle {
    fn default() -> Self {
        Self {
            fill: Color::BLACK,
            background: Color::rgb(0xf0, 0xf0, 0xf0),
            module_size: 10,
            quiet_zone: 4,
            error_correction: ErrorCorrection::M,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Png,
    Svg,
}

impl OutputKind {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        match ext.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputKind::Png),
            "svg" => Ok(OutputKind::Svg),
            _ => Err(RenderError::UnsupportedExtension(
                path.display().to_string(),
            )),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OutputKind::Png => "png",
            OutputKind::Svg => "svg",
        }
    }
}

/// Encoded modules, row-major, `true` for dark.
struct Grid {
    width: u32,
    dark: Vec<bool>,
}

impl Grid {
    fn is_dark(&self, x: u32, y: u32) -> bool {
        self.dark[(y * self.width + x) as usize]
    }
}

fn encode(payload: &str, style: &QrStyle) -> Result<(QrCode, Grid)> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), style.error_correction.level())
        .map_err(|err| match err {
            QrError::DataTooLong => RenderError::PayloadTooLong,
            other => RenderError::Encode(other.to_string()),
        })?;
    let width = code.width() as u32;
    let dark = code
        .to_colors()
        .into_iter()
        .map(|module| module == qrcode::Color::Dark)
        .collect();
    Ok((code, Grid { width, dark }))
}

fn image_side(grid: &Grid, style: &QrStyle) -> Result<u32> {
    let side = style
        .quiet_zone
        .checked_mul(2)
        .and_then(|margin| margin.checked_add(grid.width))
        .and_then(|modules| modules.checked_mul(style.module_size.max(1)))
        .unwrap_or(u32::MAX);
    if side > MAX_IMAGE_SIDE {
        return Err(RenderError::ImageTooLarge(side));
    }
    Ok(side)
}

pub fn render_png(payload: &str, style: &QrStyle) -> Result<Vec<u8>> {
    let (_, grid) = encode(payload, style)?;
    let side = image_side(&grid, style)?;
    let scale = style.module_size.max(1);
    let fill = Rgb([style.fill.r, style.fill.g, style.fill.b]);
    let background = Rgb([style.background.r, style.background.g, style.background.b]);

    let mut img = RgbImage::from_pixel(side, side, background);
    let offset = style.quiet_zone * scale;
    for y in 0..grid.width {
        for x in 0..grid.width {
            if !grid.is_dark(x, y) {
                continue;
            }
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(offset + x * scale + dx, offset + y * scale + dy, fill);
                }
            }
        }
    }

    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(img).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

pub fn render_svg(payload: &str, style: &QrStyle) -> Result<String> {
    let (_, grid) = encode(payload, style)?;
    let side = image_side(&grid, style)?;
    let scale = style.module_size.max(1);
    let offset = style.quiet_zone * scale;

    let mut path = String::new();
    for y in 0..grid.width {
        for x in 0..grid.width {
            if grid.is_dark(x, y) {
                path.push_str(&format!(
                    "M{} {}h{}v{}h-{}z",
                    offset + x * scale,
                    offset + y * scale,
                    scale,
                    scale,
                    scale
                ));
            }
        }
    }

    Ok(format!(
        concat!(
            "<?xml version=\"1.0\" standalone=\"yes\"?>\n",
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" ",
            "width=\"{side}\" height=\"{side}\" viewBox=\"0 0 {side} {side}\" ",
            "shape-rendering=\"crispEdges\">\n",
            "<rect x=\"0\" y=\"0\" width=\"{side}\" height=\"{side}\" fill=\"{background}\"/>\n",
            "<path fill=\"{fill}\" d=\"{path}\"/>\n",
            "</svg>\n"
        ),
        side = side,
        background = style.background,
        fill = style.fill,
        path = path,
    ))
}

/// Half-block preview for terminals; colors are not applied.
pub fn render_terminal(payload: &str, style: &QrStyle) -> Result<String> {
    let (code, _) = encode(payload, style)?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .quiet_zone(style.quiet_zone > 0)
        .build())
}

/// Renders to the bytes of the requested output kind.
pub fn render(payload: &str, style: &QrStyle, kind: OutputKind) -> Result<Vec<u8>> {
    match kind {
        OutputKind::Png => render_png(payload, style),
        OutputKind::Svg => render_svg(payload, style).map(String::into_bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn png_width(bytes: &[u8]) -> u32 {
        u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]])
    }

    #[test]
    fn render_png_sizes_image_from_modules() {
        let style = QrStyle::default();
        let bytes = render_png("BEGIN:VCARD\nFN:Jane Doe\nEND:VCARD", &style).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);

        let code = QrCode::with_error_correction_level(
            "BEGIN:VCARD\nFN:Jane Doe\nEND:VCARD".as_bytes(),
            EcLevel::M,
        )
        .unwrap();
        let expected = (code.width() as u32 + 2 * style.quiet_zone) * style.module_size;
        assert_eq!(png_width(&bytes), expected);
    }

    #[test]
    fn render_png_without_quiet_zone() {
        let style = QrStyle {
            module_size: 1,
            quiet_zone: 0,
            ..QrStyle::default()
        };
        let bytes = render_png("hello", &style).unwrap();
        // A short payload fits in a version 1 code: 21 modules.
        assert_eq!(png_width(&bytes), 21);
    }

    #[test]
    fn render_png_decodes_with_chosen_colors() {
        let style = QrStyle {
            fill: Color::rgb(0x12, 0x34, 0x56),
            background: Color::WHITE,
            module_size: 2,
            quiet_zone: 1,
            ..QrStyle::default()
        };
        let bytes = render_png("hello", &style).unwrap();
        let img = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
            .unwrap()
            .to_rgb8();
        assert_eq!(img.get_pixel(0, 0), &Rgb([0xff, 0xff, 0xff]));
        // The finder pattern's top-left module is always dark.
        assert_eq!(img.get_pixel(2, 2), &Rgb([0x12, 0x34, 0x56]));
    }

    #[test]
    fn render_svg_uses_colors() {
        let style = QrStyle {
            fill: Color::rgb(0x11, 0x22, 0x33),
            ..QrStyle::default()
        };
        let svg = render_svg("hello", &style).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("fill=\"#112233\""));
        assert!(svg.contains("fill=\"#f0f0f0\""));
        assert!(svg.contains("width=\"290\""));
    }

    #[test]
    fn render_terminal_returns_blocks() {
        let preview = render_terminal("hello", &QrStyle::default()).unwrap();
        assert!(preview.lines().count() > 10);
    }

    #[test]
    fn oversize_payload_is_reported() {
        let payload = "x".repeat(5000);
        assert!(matches!(
            render_png(&payload, &QrStyle::default()),
            Err(RenderError::PayloadTooLong)
        ));
    }

    #[test]
    fn oversize_image_is_reported() {
        let style = QrStyle {
            module_size: 1000,
            ..QrStyle::default()
        };
        assert!(matches!(
            render_png("hello", &style),
            Err(RenderError::ImageTooLarge(_))
        ));
    }

    #[test]
    fn render_png_rejects_overflowing_quiet_zone() {
        let style = QrStyle {
            quiet_zone: 1 << 31,
            ..QrStyle::default()
        };
        assert!(matches!(
            render_png("hello", &style),
            Err(RenderError::ImageTooLarge(u32::MAX))
        ));
        assert!(matches!(
            render_svg("hello", &style),
            Err(RenderError::ImageTooLarge(u32::MAX))
        ));
    }

    #[test]
    fn output_kind_from_extension() {
        assert_eq!(
            OutputKind::from_path(Path::new("card.PNG")).unwrap(),
            OutputKind::Png
        );
        assert_eq!(
            OutputKind::from_path(Path::new("out/card.svg")).unwrap(),
            OutputKind::Svg
        );
        assert!(OutputKind::from_path(Path::new("card.jpg")).is_err());
        assert!(OutputKind::from_path(Path::new("card")).is_err());
    }

    #[test]
    fn error_correction_parses_case_insensitively() {
        assert_eq!("h".parse::<ErrorCorrection>().unwrap(), ErrorCorrection::H);
        assert!("X".parse::<ErrorCorrection>().is_err());
    }
}
