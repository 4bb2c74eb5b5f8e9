//! Conversions between crate errors and JavaScript values.

use wasm_bindgen::JsValue;

use super::constructors::dom;
use super::types::Error;

/// Convert a thrown JavaScript value into a DOM error.
pub fn wasm(js_error: JsValue) -> Error {
    let message = if let Some(string) = js_error.as_string() {
        string
    } else {
        format!("JavaScript error: {js_error:?}")
    };

    dom(message)
}

impl From<Error> for JsValue {
    fn from(error: Error) -> JsValue {
        wasm_bindgen::JsError::new(&error.to_string()).into()
    }
}
