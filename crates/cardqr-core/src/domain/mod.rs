pub mod contact;
pub mod custom;
pub mod email;
pub mod link;
pub mod phone;

pub use contact::{ContactForm, ContactRecord};
pub use custom::{CustomField, CustomFields};
pub use email::validate_email;
pub use link::{validate_url, LinkPlatform};
pub use phone::validate_phone;
