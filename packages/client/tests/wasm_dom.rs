//! Browser tests for the `document.cookie` store and the banner element.

#![cfg(target_arch = "wasm32")]

use consent_gate_client::prelude::*;
use consent_gate_client::wasm::document::DocumentCookies;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

const CONTAINER: &str = "cookie_container";

fn mount_container() -> HtmlElement {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("test runs in a browser");
    if let Some(existing) = document.get_element_by_id(CONTAINER) {
        existing.remove();
    }
    let element = document
        .create_element("div")
        .expect("div should be creatable")
        .dyn_into::<HtmlElement>()
        .expect("div is an HtmlElement");
    element.set_id(CONTAINER);
    element
        .style()
        .set_property("display", "none")
        .expect("style should be settable");
    document
        .body()
        .expect("document has a body")
        .append_child(&element)
        .expect("append should succeed");
    element
}

fn clear_consent() {
    DocumentCookies::current()
        .expect("html document")
        .write("_cookies_acceptance=; Max-Age=0")
        .expect("cookie write");
}

#[wasm_bindgen_test]
fn test_browser_gate_shows_then_acknowledges() {
    clear_consent();
    let element = mount_container();
    let gate = browser_gate(ConsentConfig::default()).expect("gate should build");
    assert_eq!(gate.banner().id(), CONTAINER);

    assert_eq!(gate.initialize().expect("initialize"), Visibility::Visible);
    assert_eq!(
        element.style().get_property_value("display").expect("style"),
        "inline-grid"
    );

    gate.acknowledge().expect("acknowledge");
    assert_eq!(element.style().get_property_value("display").expect("style"), "none");
    let consent = DocumentCookies::current()
        .expect("html document")
        .get("_cookies_acceptance")
        .expect("readable");
    assert_eq!(consent.as_deref(), Some("true"));

    let reloaded = browser_gate(ConsentConfig::default()).expect("gate should build");
    assert_eq!(reloaded.initialize().expect("initialize"), Visibility::Hidden);
}

#[wasm_bindgen_test]
fn test_missing_container_is_reported() {
    clear_consent();
    let gate = browser_gate(ConsentConfig::default().with_container_id("no_such_element"))
        .expect("gate should build");

    let err = gate.initialize().expect_err("container is missing");
    assert!(err.is_missing_element());
}
