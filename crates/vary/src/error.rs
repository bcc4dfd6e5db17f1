use http::header::{InvalidHeaderValue, ToStrError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VaryError {
    #[error("{name} argument is required")]
    InvalidArgument { name: &'static str },

    #[error("{name} argument contains an invalid header name {field:?}")]
    InvalidFieldName { name: &'static str, field: String },

    #[error("existing vary header is not visible ascii: {source}")]
    InvalidExistingValue {
        #[from]
        source: ToStrError,
    },

    #[error("invalid vary header value: {source}")]
    InvalidHeaderValue {
        #[from]
        source: InvalidHeaderValue,
    },
}

impl VaryError {
    pub fn required(name: &'static str) -> Self {
        Self::InvalidArgument { name }
    }

    pub fn invalid_field_name<S: ToString>(name: &'static str, field: S) -> Self {
        Self::InvalidFieldName { name, field: field.to_string() }
    }
}
