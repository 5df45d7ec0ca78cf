pub mod domain;
pub mod error;
pub mod payload;

pub use domain::*;
pub use error::{CoreError, Rejected};
pub use payload::{encode, EncodeOptions, PayloadFormat, UnknownFormat};
