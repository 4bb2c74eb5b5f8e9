//! Default configuration values

use super::types::ConsentConfig;

pub const DEFAULT_COOKIE_NAME: &str = "_cookies_acceptance";
pub const DEFAULT_CONSENT_VALUE: &str = "true";
pub const DEFAULT_CONTAINER_ID: &str = "cookie_container";
pub const DEFAULT_VISIBLE_DISPLAY: &str = "inline-grid";
pub const DEFAULT_HIDDEN_DISPLAY: &str = "none";

impl Default for ConsentConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_owned(),
            consent_value: DEFAULT_CONSENT_VALUE.to_owned(),
            container_id: DEFAULT_CONTAINER_ID.to_owned(),
            visible_display: DEFAULT_VISIBLE_DISPLAY.to_owned(),
            hidden_display: DEFAULT_HIDDEN_DISPLAY.to_owned(),
            attributes: super::CookieAttributes::default(),
        }
    }
}
