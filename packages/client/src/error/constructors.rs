use super::helpers::{BadField, InvalidName, Poisoned};
use super::types::{Error, Kind};

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Creates an `Error` for a cookie name that cannot be matched or written.
pub fn invalid_name(reason: InvalidName) -> Error {
    Error::new(Kind::InvalidName).with(reason)
}

/// Creates an `Error` for a configuration field that failed validation.
pub fn invalid_config(field: &'static str, reason: &'static str) -> Error {
    Error::new(Kind::InvalidConfig).with(BadField { field, reason })
}

/// Creates an `Error` for a configuration document that failed to parse.
pub fn config<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::InvalidConfig).with(e.into())
}

/// Creates an `Error` for a banner container that is not in the document.
pub fn missing_element(id: &str) -> Error {
    Error::new(Kind::MissingElement(id.to_owned()))
}

/// Creates an `Error` for a failed DOM call.
pub fn dom<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Dom).with(e.into())
}

/// Creates an `Error` for a failed cookie store operation.
pub fn store<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Store).with(e.into())
}

pub(crate) fn poisoned() -> Error {
    store(Poisoned)
}
