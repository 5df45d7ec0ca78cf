use crate::commands::form::{ContactArgs, EncodingArgs};
use crate::commands::{encode_contact, print_json, Context};
use anyhow::{Context as _, Result};
use cardqr_config::{validate_module_size, validate_quiet_zone};
use cardqr_core::PayloadFormat;
use cardqr_render::{render, render_terminal, Color, ErrorCorrection, OutputKind, QrStyle};
use clap::Args;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub contact: ContactArgs,
    #[command(flatten)]
    pub encoding: EncodingArgs,
    /// Image file to write; the extension picks PNG or SVG
    #[arg(long, short)]
    pub output: PathBuf,
    /// Module color, `#rrggbb`, `#rgb`, `black` or `white`
    #[arg(long)]
    pub fill: Option<String>,
    #[arg(long)]
    pub background: Option<String>,
    /// Pixels per module
    #[arg(long)]
    pub module_size: Option<u32>,
    /// Margin around the code, in modules
    #[arg(long)]
    pub quiet_zone: Option<u32>,
    /// L, M, Q or H
    #[arg(long)]
    pub error_correction: Option<String>,
    /// Also print the code to the terminal
    #[arg(long)]
    pub preview: bool,
}

#[derive(Debug, Serialize)]
struct GenerateOutput {
    path: String,
    format: PayloadFormat,
    image: &'static str,
    bytes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    preview: Option<String>,
}

pub fn generate(ctx: &Context<'_>, args: GenerateArgs) -> Result<()> {
    let kind = OutputKind::from_path(&args.output)?;
    let style = resolve_style(ctx, &args)?;
    let encoded = encode_contact(ctx, args.contact, &args.encoding)?;

    let bytes = render(&encoded.payload, &style, kind)?;
    debug!(
        path = %args.output.display(),
        image = kind.as_str(),
        fill = %style.fill,
        background = %style.background,
        "qr rendered"
    );
    fs::write(&args.output, &bytes)
        .with_context(|| format!("write {}", args.output.display()))?;

    let preview = if args.preview {
        Some(render_terminal(&encoded.payload, &style)?)
    } else {
        None
    };

    if ctx.json {
        print_json(&GenerateOutput {
            path: args.output.display().to_string(),
            format: encoded.format,
            image: kind.as_str(),
            bytes: bytes.len(),
            preview,
        })?;
    } else {
        if let Some(preview) = preview {
            println!("{preview}");
        }
        println!("saved {}", args.output.display());
    }
    Ok(())
}

fn resolve_style(ctx: &Context<'_>, args: &GenerateArgs) -> Result<QrStyle> {
    let mut style = ctx.config.qr;
    if let Some(raw) = &args.fill {
        style.fill = Color::parse(raw)?;
    }
    if let Some(raw) = &args.background {
        style.background = Color::parse(raw)?;
    }
    if let Some(size) = args.module_size {
        style.module_size = validate_module_size(size)?;
    }
    if let Some(zone) = args.quiet_zone {
        style.quiet_zone = validate_quiet_zone(zone)?;
    }
    if let Some(raw) = &args.error_correction {
        style.error_correction = raw.parse::<ErrorCorrection>()?;
    }
    Ok(style)
}
