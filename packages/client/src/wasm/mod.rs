//! Browser bindings for the consent gate
//!
//! Wires the gate to `document.cookie` and to the banner container element
//! through `web-sys`. Only compiled for `wasm32` targets.

pub mod document;
pub mod element;

pub use document::DocumentCookies;
pub use element::ElementBanner;

use crate::config::ConsentConfig;
use crate::error::Result;
use crate::gate::ConsentGate;

/// Gate over the current page's cookies and banner container.
pub type BrowserGate = ConsentGate<DocumentCookies, ElementBanner>;

/// Build a gate for the current page.
///
/// The container element is looked up when the gate first touches it, so a
/// page that already recorded consent does not need the container at all.
///
/// # Errors
///
/// Returns `Dom` if there is no HTML document, or the error from
/// [`ConsentConfig::validate`].
pub fn browser_gate(config: ConsentConfig) -> Result<BrowserGate> {
    let document = document::current_document()?;
    let banner = ElementBanner::new(document.clone().into(), config.container_id.clone());
    ConsentGate::with_config(DocumentCookies::new(document), banner, config)
}
