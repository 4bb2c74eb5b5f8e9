//! Configuration structures and field definitions

use serde::Deserialize;

use crate::cookie::validate_cookie_name;
use crate::error::{self, Result};

/// Consent gate configuration
///
/// Every field has a default, so a partial JSON document such as
/// `{"container_id": "consent"}` deserializes into a usable config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConsentConfig {
    /// Name of the consent cookie
    pub cookie_name: String,

    /// Value recorded when the user acknowledges the banner
    pub consent_value: String,

    /// DOM id of the banner container
    pub container_id: String,

    /// `display` value that shows the banner
    pub visible_display: String,

    /// `display` value that hides the banner
    pub hidden_display: String,

    /// Attributes appended to the written cookie
    pub attributes: CookieAttributes,
}

/// Optional attributes of the consent cookie assignment.
///
/// All unset by default: the cookie then lives as long as the host's default
/// cookie lifetime allows, usually the browser session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CookieAttributes {
    pub path: Option<String>,
    pub domain: Option<String>,
    pub max_age_secs: Option<i64>,
    pub secure: bool,
    pub same_site: Option<SameSitePolicy>,
}

/// `SameSite` attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSitePolicy {
    Strict,
    Lax,
    None,
}

impl From<SameSitePolicy> for cookie::SameSite {
    fn from(policy: SameSitePolicy) -> Self {
        match policy {
            SameSitePolicy::Strict => cookie::SameSite::Strict,
            SameSitePolicy::Lax => cookie::SameSite::Lax,
            SameSitePolicy::None => cookie::SameSite::None,
        }
    }
}

impl ConsentConfig {
    /// Parse a configuration from JSON, filling missing fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidConfig` error if the JSON is malformed or the
    /// resulting configuration fails [`ConsentConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(error::config)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can drive a gate.
    ///
    /// # Errors
    ///
    /// - `InvalidName` if `cookie_name` is not a valid cookie name
    /// - `InvalidConfig` if `consent_value` contains `;`, or if
    ///   `container_id` or a display value is empty
    pub fn validate(&self) -> Result<()> {
        validate_cookie_name(&self.cookie_name)?;

        if self.consent_value.contains(';') {
            return Err(error::invalid_config("consent_value", "must not contain `;`"));
        }
        if self.container_id.is_empty() {
            return Err(error::invalid_config("container_id", "must not be empty"));
        }
        if self.visible_display.is_empty() {
            return Err(error::invalid_config("visible_display", "must not be empty"));
        }
        if self.hidden_display.is_empty() {
            return Err(error::invalid_config("hidden_display", "must not be empty"));
        }
        if self.visible_display == self.hidden_display {
            return Err(error::invalid_config(
                "visible_display",
                "must differ from `hidden_display`",
            ));
        }

        Ok(())
    }
}
