use anyhow::Result;
use cardqr_config::AppConfig;
use cardqr_core::{encode, ContactRecord, EncodeOptions, PayloadFormat};
use serde::Serialize;
use std::io::{self, Write};
use tracing::debug;

pub mod completions;
pub mod form;
pub mod generate;
pub mod payload;

use form::{ContactArgs, EncodingArgs};

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub struct Encoded {
    pub record: ContactRecord,
    pub format: PayloadFormat,
    pub payload: String,
}

/// Builds the record from flags and encodes it with config defaults applied.
pub fn encode_contact(
    ctx: &Context<'_>,
    contact: ContactArgs,
    encoding: &EncodingArgs,
) -> Result<Encoded> {
    let record = contact.into_form()?.build()?;
    let format = encoding
        .format
        .map(PayloadFormat::from)
        .unwrap_or(ctx.config.format);
    let options = EncodeOptions {
        escape_vcard: ctx.config.encode.escape_vcard && !encoding.no_escape,
    };
    let payload = encode(&record, format, &options);
    debug!(
        %format,
        escape = options.escape_vcard,
        custom_fields = record.custom_fields().len(),
        bytes = payload.len(),
        "payload encoded"
    );
    Ok(Encoded {
        record,
        format,
        payload,
    })
}
