use thiserror::Error;

/// The offending character found in a cookie name.
#[derive(Debug, Error)]
pub enum InvalidName {
    #[error("cookie name is empty")]
    Empty,
    #[error("invalid character {0:?} in cookie name")]
    Char(char),
}

/// A configuration field that failed validation.
#[derive(Debug, Error)]
#[error("`{field}` {reason}")]
pub struct BadField {
    pub field: &'static str,
    pub reason: &'static str,
}

/// A lock guarding shared store state was poisoned by a panicking writer.
#[derive(Debug, Error)]
#[error("store lock poisoned")]
pub struct Poisoned;
