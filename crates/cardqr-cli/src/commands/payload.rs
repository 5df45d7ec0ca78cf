use crate::commands::form::{ContactArgs, EncodingArgs};
use crate::commands::{encode_contact, print_json, Context};
use anyhow::Result;
use cardqr_core::{ContactRecord, PayloadFormat};
use clap::Args;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct PayloadArgs {
    #[command(flatten)]
    pub contact: ContactArgs,
    #[command(flatten)]
    pub encoding: EncodingArgs,
}

#[derive(Debug, Serialize)]
struct PayloadOutput<'a> {
    format: PayloadFormat,
    payload: &'a str,
    record: &'a ContactRecord,
}

pub fn print_payload(ctx: &Context<'_>, args: PayloadArgs) -> Result<()> {
    let encoded = encode_contact(ctx, args.contact, &args.encoding)?;
    if ctx.json {
        print_json(&PayloadOutput {
            format: encoded.format,
            payload: &encoded.payload,
            record: &encoded.record,
        })?;
    } else {
        println!("{}", encoded.payload);
    }
    Ok(())
}
