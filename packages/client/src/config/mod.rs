//! Consent gate configuration
//!
//! Names the consent cookie, the banner container and the display values the
//! gate toggles between, plus optional attributes for the written cookie.

pub mod builders;
pub mod defaults;
pub mod types;

pub use defaults::{
    DEFAULT_CONSENT_VALUE, DEFAULT_CONTAINER_ID, DEFAULT_COOKIE_NAME, DEFAULT_HIDDEN_DISPLAY,
    DEFAULT_VISIBLE_DISPLAY,
};
pub use types::{ConsentConfig, CookieAttributes, SameSitePolicy};
