use std::error::Error as StdError;
use std::fmt;

/// A Result alias where the Err case is `consent_gate_client::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur while gating on the consent cookie.
pub struct Error {
    pub inner: Box<Inner>,
}

pub struct Inner {
    pub kind: Kind,
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// Cookie name is empty or contains a separator
    InvalidName,
    /// Configuration values that cannot produce a usable gate
    InvalidConfig,
    /// Banner container is not present in the document
    MissingElement(String),
    /// A DOM call threw
    Dom,
    /// The cookie store rejected a read or write
    Store,
}

impl Error {
    pub fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner { kind, source: None }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub fn with<E: Into<Box<dyn StdError + Send + Sync>>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> &Kind {
        &self.inner.kind
    }

    #[must_use]
    pub fn is_invalid_name(&self) -> bool {
        matches!(self.inner.kind, Kind::InvalidName)
    }

    #[must_use]
    pub fn is_missing_element(&self) -> bool {
        matches!(self.inner.kind, Kind::MissingElement(_))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("consent_gate::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.kind {
            Kind::InvalidName => f.write_str("invalid cookie name")?,
            Kind::InvalidConfig => f.write_str("invalid consent configuration")?,
            Kind::MissingElement(id) => write!(f, "no element with id `{id}`")?,
            Kind::Dom => f.write_str("DOM operation failed")?,
            Kind::Store => f.write_str("cookie store error")?,
        }

        if let Some(ref source) = self.inner.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source.as_ref().map(|e| &**e as _)
    }
}
