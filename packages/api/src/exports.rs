//! `wasm-bindgen` entry points for the host page.

use wasm_bindgen::prelude::*;

use consent_gate_client::ConsentConfig;
use consent_gate_client::cookie::CookieStore;
use consent_gate_client::wasm::{DocumentCookies, browser_gate};

/// Show the banner unless consent is already recorded.
///
/// Runs when the module is instantiated. Errors propagate to the page as a
/// thrown exception.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let visibility = browser_gate(ConsentConfig::default())?.initialize()?;
    log::debug!("consent banner: {visibility:?}");
    Ok(())
}

/// Hide the banner and record consent.
#[wasm_bindgen]
pub fn close_cookie_banner() -> Result<(), JsValue> {
    browser_gate(ConsentConfig::default())?.acknowledge()?;
    log::debug!("consent banner closed");
    Ok(())
}

/// Value of cookie `name` in `document.cookie`, or `undefined`.
#[wasm_bindgen(js_name = getCookie)]
pub fn get_cookie(name: &str) -> Result<Option<String>, JsValue> {
    Ok(DocumentCookies::current()?.get(name)?)
}
