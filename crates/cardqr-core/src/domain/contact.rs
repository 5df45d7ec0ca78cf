use crate::domain::custom::CustomFields;
use crate::domain::email::validate_email;
use crate::domain::link::{validate_url, LinkPlatform};
use crate::domain::phone::validate_phone;
use crate::error::CoreError;
use serde::Serialize;

/// Raw strings as collected by a front end, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub job_title: String,
    pub company: String,
    pub phone: String,
    pub whatsapp: String,
    pub email: String,
    pub address: String,
    pub website: String,
    pub facebook: String,
    pub linkedin: String,
    pub custom_fields: CustomFields,
}

impl ContactForm {
    /// Copies the phone number into the WhatsApp field.
    pub fn whatsapp_from_phone(&mut self) -> Result<(), CoreError> {
        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err(CoreError::MissingPhone);
        }
        self.whatsapp = phone.to_string();
        Ok(())
    }

    /// Validates every field and produces an immutable record.
    ///
    /// The name is checked first; a missing name short-circuits the other
    /// validators. Phone, WhatsApp and email follow in that order.
    pub fn build(&self) -> Result<ContactRecord, CoreError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CoreError::MissingRequiredField);
        }

        let phone = validate_phone(&self.phone)
            .map_err(|_| CoreError::InvalidPhone(self.phone.trim().to_string()))?;
        let whatsapp = validate_phone(&self.whatsapp)
            .map_err(|_| CoreError::InvalidWhatsApp(self.whatsapp.trim().to_string()))?;
        let email = validate_email(&self.email)
            .map_err(|_| CoreError::InvalidEmail(self.email.trim().to_string()))?;

        Ok(ContactRecord {
            name: name.to_string(),
            job_title: self.job_title.trim().to_string(),
            company: self.company.trim().to_string(),
            phone: phone.unwrap_or_default(),
            whatsapp: whatsapp.unwrap_or_default(),
            email: email.unwrap_or_default(),
            address: self.address.trim().to_string(),
            website: validate_url(&self.website, LinkPlatform::Website),
            facebook: validate_url(&self.facebook, LinkPlatform::Facebook),
            linkedin: validate_url(&self.linkedin, LinkPlatform::LinkedIn),
            custom_fields: self.custom_fields.filled(),
        })
    }
}

/// A fully validated contact. Empty strings mean "not provided".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    name: String,
    job_title: String,
    company: String,
    phone: String,
    whatsapp: String,
    email: String,
    address: String,
    website: String,
    facebook: String,
    linkedin: String,
    custom_fields: CustomFields,
}

impl ContactRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn whatsapp(&self) -> &str {
        &self.whatsapp
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    pub fn facebook(&self) -> &str {
        &self.facebook
    }

    pub fn linkedin(&self) -> &str {
        &self.linkedin
    }

    pub fn custom_fields(&self) -> &CustomFields {
        &self.custom_fields
    }
}
