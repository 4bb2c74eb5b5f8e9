//! Banner container element

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::banner::Banner;
use crate::error::{self, Result};

/// Banner backed by the element with a given id.
///
/// The element is resolved on every call, so the page may replace it between
/// load and acknowledgement.
#[derive(Debug, Clone)]
pub struct ElementBanner {
    document: Document,
    id: String,
}

impl ElementBanner {
    #[must_use]
    pub fn new(document: Document, id: impl Into<String>) -> Self {
        Self {
            document,
            id: id.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    fn element(&self) -> Result<HtmlElement> {
        self.document
            .get_element_by_id(&self.id)
            .ok_or_else(|| error::missing_element(&self.id))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| error::dom(format!("element `{}` is not an HTML element", self.id)))
    }
}

impl Banner for ElementBanner {
    fn set_display(&self, value: &str) -> Result<()> {
        self.element()?
            .style()
            .set_property("display", value)
            .map_err(error::wasm)
    }

    fn display(&self) -> Result<String> {
        self.element()?
            .style()
            .get_property_value("display")
            .map_err(error::wasm)
    }
}
