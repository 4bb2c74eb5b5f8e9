//! Fluent construction of a `ConsentGate`
//!
//! The store and banner slots are tracked in the builder's type, so `build`
//! only exists once both have been supplied.

use super::core::ConsentGate;
use crate::banner::Banner;
use crate::config::ConsentConfig;
use crate::cookie::CookieStore;
use crate::error::Result;

/// State marker indicating no cookie store has been set
#[derive(Debug, Clone, Copy)]
pub struct NoStore;

/// State marker indicating no banner has been set
#[derive(Debug, Clone, Copy)]
pub struct NoBanner;

/// Builder for [`ConsentGate`]
#[derive(Debug, Clone)]
pub struct GateBuilder<S = NoStore, B = NoBanner> {
    store: S,
    banner: B,
    config: ConsentConfig,
}

impl ConsentGate<NoStore, NoBanner> {
    /// Start building a gate.
    ///
    /// # Examples
    /// ```
    /// use consent_gate_client::banner::MemoryBanner;
    /// use consent_gate_client::cookie::Jar;
    /// use consent_gate_client::gate::{ConsentGate, Visibility};
    ///
    /// let gate = ConsentGate::builder()
    ///     .store(Jar::default())
    ///     .banner(MemoryBanner::default())
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(gate.initialize().unwrap(), Visibility::Visible);
    /// ```
    #[must_use]
    pub fn builder() -> GateBuilder {
        GateBuilder::default()
    }
}

impl Default for GateBuilder {
    fn default() -> Self {
        Self {
            store: NoStore,
            banner: NoBanner,
            config: ConsentConfig::default(),
        }
    }
}

impl<S, B> GateBuilder<S, B> {
    /// Use `store` for reading and writing the consent cookie
    pub fn store<T: CookieStore>(self, store: T) -> GateBuilder<T, B> {
        GateBuilder {
            store,
            banner: self.banner,
            config: self.config,
        }
    }

    /// Use `banner` as the container to show and hide
    pub fn banner<T: Banner>(self, banner: T) -> GateBuilder<S, T> {
        GateBuilder {
            store: self.store,
            banner,
            config: self.config,
        }
    }

    #[must_use]
    pub fn config(mut self, config: ConsentConfig) -> Self {
        self.config = config;
        self
    }

    /// Adjust the configuration in place
    #[must_use]
    pub fn configure(mut self, f: impl FnOnce(ConsentConfig) -> ConsentConfig) -> Self {
        self.config = f(self.config);
        self
    }
}

impl<S: CookieStore, B: Banner> GateBuilder<S, B> {
    /// Validate the configuration and build the gate.
    ///
    /// # Errors
    ///
    /// Returns the error from [`ConsentConfig::validate`].
    pub fn build(self) -> Result<ConsentGate<S, B>> {
        ConsentGate::with_config(self.store, self.banner, self.config)
    }
}
