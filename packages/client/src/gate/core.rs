//! `ConsentGate` and its operations

use crate::banner::Banner;
use crate::config::ConsentConfig;
use crate::cookie::{CookieStore, format_assignment, read_cookie};
use crate::error::Result;

/// What `initialize` decided for the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// No consent recorded, the banner was made visible
    Visible,
    /// Consent recorded, the banner was left at its default style
    Hidden,
}

/// Shows the consent banner until the user acknowledges it, and remembers the
/// acknowledgement in a cookie.
#[derive(Debug, Clone)]
pub struct ConsentGate<S, B> {
    pub(crate) store: S,
    pub(crate) banner: B,
    pub(crate) config: ConsentConfig,
}

impl<S: CookieStore, B: Banner> ConsentGate<S, B> {
    /// Create a gate with the default configuration.
    pub fn new(store: S, banner: B) -> Self {
        Self {
            store,
            banner,
            config: ConsentConfig::default(),
        }
    }

    /// Create a gate with a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the error from [`ConsentConfig::validate`].
    pub fn with_config(store: S, banner: B, config: ConsentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { store, banner, config })
    }

    #[must_use]
    pub fn config(&self) -> &ConsentConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn banner(&self) -> &B {
        &self.banner
    }

    /// Look up cookie `name` in the store's cookie string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` for names [`read_cookie`] rejects, or the
    /// store's read error.
    pub fn read_cookie(&self, name: &str) -> Result<Option<String>> {
        read_cookie(&self.store.cookie_string()?, name)
    }

    /// Whether the consent cookie holds the consent value.
    ///
    /// # Errors
    ///
    /// Returns the store's read error.
    pub fn has_consented(&self) -> Result<bool> {
        let value = self.read_cookie(&self.config.cookie_name)?;
        Ok(value.as_deref() == Some(self.config.consent_value.as_str()))
    }

    /// Show the banner unless consent was already recorded.
    ///
    /// When consent is present the banner is not touched and keeps whatever
    /// style the page gave it.
    ///
    /// # Errors
    ///
    /// Returns the store's read error or the banner's write error.
    pub fn initialize(&self) -> Result<Visibility> {
        if self.has_consented()? {
            tracing::debug!(
                cookie = %self.config.cookie_name,
                "consent recorded, banner stays hidden"
            );
            return Ok(Visibility::Hidden);
        }

        self.banner.set_display(&self.config.visible_display)?;
        tracing::debug!(
            cookie = %self.config.cookie_name,
            display = %self.config.visible_display,
            "no consent recorded, showing banner"
        );
        Ok(Visibility::Visible)
    }

    /// Hide the banner and record consent in the cookie store.
    ///
    /// # Errors
    ///
    /// Returns the banner's write error, in which case no cookie is written,
    /// or the store's write error.
    pub fn acknowledge(&self) -> Result<()> {
        self.banner.set_display(&self.config.hidden_display)?;

        let assignment = format_assignment(
            &self.config.cookie_name,
            &self.config.consent_value,
            &self.config.attributes,
        )?;
        self.store.write(&assignment)?;
        tracing::debug!(%assignment, "consent acknowledged");
        Ok(())
    }

    /// Give back the store and banner.
    pub fn into_parts(self) -> (S, B) {
        (self.store, self.banner)
    }
}
