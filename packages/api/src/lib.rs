//! Consent Gate Public API
//!
//! Shows a cookie-consent banner until the visitor dismisses it and remembers
//! the dismissal in the `_cookies_acceptance` cookie.
//!
//! Built for `wasm32`, this crate exports the page hooks:
//! - `start` runs on module instantiation and shows the banner if needed
//! - `close_cookie_banner` is wired to the banner's accept button
//! - `getCookie(name)` reads a cookie from `document.cookie`

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

#[cfg(target_arch = "wasm32")]
mod exports;

pub use consent_gate_client::{
    Banner, ConsentConfig, ConsentGate, CookieAttributes, CookieStore, Error, GateBuilder,
    HeaderCookies, Jar, Kind, MemoryBanner, Result, SameSitePolicy, Visibility, read_cookie,
};
pub use consent_gate_client::{banner, config, cookie, error, gate, prelude};
#[cfg(target_arch = "wasm32")]
pub use consent_gate_client::wasm;

/// Decide banner visibility for a server-rendered page from its request headers.
///
/// Returns `true` when the page should render the banner visible.
///
/// # Errors
///
/// Returns the error from [`ConsentConfig::validate`].
///
/// # Examples
///
/// ```
/// use consent_gate::{ConsentConfig, banner_needed};
///
/// let mut headers = http::HeaderMap::new();
/// headers.insert(http::header::COOKIE, "_cookies_acceptance=true".parse().unwrap());
/// assert!(!banner_needed(&headers, &ConsentConfig::default()).unwrap());
/// ```
pub fn banner_needed(headers: &http::HeaderMap, config: &ConsentConfig) -> Result<bool> {
    config.validate()?;
    let store = HeaderCookies::from_request(headers);
    let consented = store.get(&config.cookie_name)?;
    Ok(consented.as_deref() != Some(config.consent_value.as_str()))
}
