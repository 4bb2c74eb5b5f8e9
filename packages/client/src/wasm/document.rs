//! `document.cookie` as a cookie store

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::cookie::CookieStore;
use crate::error::{self, Result};

/// Cookie store over a page's `document.cookie`.
#[derive(Debug, Clone)]
pub struct DocumentCookies {
    document: HtmlDocument,
}

impl DocumentCookies {
    #[must_use]
    pub fn new(document: HtmlDocument) -> Self {
        Self { document }
    }

    /// Cookies of the current window's document.
    ///
    /// # Errors
    ///
    /// Returns `Dom` outside a window, or when the document is not HTML.
    pub fn current() -> Result<Self> {
        current_document().map(Self::new)
    }
}

impl CookieStore for DocumentCookies {
    fn cookie_string(&self) -> Result<String> {
        self.document.cookie().map_err(error::wasm)
    }

    fn write(&self, assignment: &str) -> Result<()> {
        self.document.set_cookie(assignment).map_err(error::wasm)
    }
}

pub(crate) fn current_document() -> Result<HtmlDocument> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| error::dom("no document available"))?;

    document
        .dyn_into::<HtmlDocument>()
        .map_err(|_| error::dom("document is not an HTML document"))
}
