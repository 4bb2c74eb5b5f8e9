//! Builder methods for consent configuration

use super::types::{ConsentConfig, CookieAttributes, SameSitePolicy};

impl ConsentConfig {
    /// Use a different consent cookie name
    ///
    /// # Examples
    /// ```
    /// use consent_gate_client::config::ConsentConfig;
    ///
    /// let config = ConsentConfig::default().with_cookie_name("consent");
    /// assert_eq!(config.cookie_name, "consent");
    /// ```
    #[must_use]
    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    #[must_use]
    pub fn with_consent_value(mut self, value: impl Into<String>) -> Self {
        self.consent_value = value.into();
        self
    }

    /// Use a different banner container id
    #[must_use]
    pub fn with_container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = id.into();
        self
    }

    /// Set the `display` values used to show and hide the banner
    #[must_use]
    pub fn with_display(mut self, visible: impl Into<String>, hidden: impl Into<String>) -> Self {
        self.visible_display = visible.into();
        self.hidden_display = hidden.into();
        self
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: CookieAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}

impl CookieAttributes {
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Persist the cookie for `seconds` instead of the host default lifetime
    #[must_use]
    pub fn with_max_age_secs(mut self, seconds: i64) -> Self {
        self.max_age_secs = Some(seconds);
        self
    }

    #[must_use]
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    #[must_use]
    pub fn with_same_site(mut self, policy: SameSitePolicy) -> Self {
        self.same_site = Some(policy);
        self
    }
}
