use crate::error::invalid_input;
use anyhow::Result;
use cardqr_core::{ContactForm, CoreError, CustomField, PayloadFormat};
use clap::{Args, ValueEnum};

#[derive(Debug, Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub job_title: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub whatsapp: Option<String>,
    /// Use the phone number for WhatsApp as well
    #[arg(long, conflicts_with = "whatsapp")]
    pub whatsapp_same_as_phone: bool,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
    /// Facebook username or full URL
    #[arg(long)]
    pub facebook: Option<String>,
    /// LinkedIn username or full URL
    #[arg(long)]
    pub linkedin: Option<String>,
    /// Extra field, repeatable
    #[arg(long = "field", value_name = "NAME=VALUE")]
    pub fields: Vec<String>,
}

impl ContactArgs {
    /// A blank name is reported before any other flag is interpreted.
    pub fn into_form(self) -> Result<ContactForm> {
        if self.name.as_deref().unwrap_or_default().trim().is_empty() {
            return Err(CoreError::MissingRequiredField.into());
        }

        let mut form = ContactForm {
            name: self.name.unwrap_or_default(),
            job_title: self.job_title.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            whatsapp: self.whatsapp.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            website: self.website.unwrap_or_default(),
            facebook: self.facebook.unwrap_or_default(),
            linkedin: self.linkedin.unwrap_or_default(),
            ..ContactForm::default()
        };

        for raw in &self.fields {
            let field: CustomField = raw
                .parse()
                .map_err(|_| invalid_input(format!("field must be NAME=VALUE: {raw}")))?;
            form.custom_fields.insert(field.name, field.value);
        }

        if self.whatsapp_same_as_phone {
            form.whatsapp_from_phone()?;
        }

        Ok(form)
    }
}

#[derive(Debug, Args)]
pub struct EncodingArgs {
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
    /// Write vCard values verbatim instead of escaping `;`, `,` and newlines
    #[arg(long)]
    pub no_escape: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Vcard,
    Text,
}

impl From<FormatArg> for PayloadFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Vcard => PayloadFormat::Vcard,
            FormatArg::Text => PayloadFormat::Text,
        }
    }
}
