use consent_gate_client::prelude::*;
use http::header::{COOKIE, SET_COOKIE};
use http::{HeaderMap, HeaderValue};

#[test]
fn test_header_cookies_joins_cookie_headers() {
    let mut headers = HeaderMap::new();
    headers.append(COOKIE, HeaderValue::from_static("foo=bar"));
    headers.append(COOKIE, HeaderValue::from_static("_cookies_acceptance=true"));

    let store = HeaderCookies::from_request(&headers);

    assert_eq!(
        store.cookie_string().expect("readable"),
        "foo=bar; _cookies_acceptance=true"
    );
    assert_eq!(store.get("_cookies_acceptance").expect("readable").as_deref(), Some("true"));
}

#[test]
fn test_acknowledge_emits_set_cookie() {
    let store = HeaderCookies::from_request(&HeaderMap::new());
    let gate = ConsentGate::new(&store, MemoryBanner::default());

    assert_eq!(gate.initialize().expect("initialize should succeed"), Visibility::Visible);
    gate.acknowledge().expect("acknowledge should succeed");

    let mut response = HeaderMap::new();
    store.apply_to(&mut response).expect("apply should succeed");

    let values: Vec<&str> = response
        .get_all(SET_COOKIE)
        .iter()
        .map(|value| value.to_str().expect("ascii header"))
        .collect();
    assert_eq!(values, ["_cookies_acceptance=true"]);
}

#[test]
fn test_invalid_header_value_is_store_error() {
    let store = HeaderCookies::default();
    let err = store.write("bad\nvalue").expect_err("newline should be rejected");
    assert_eq!(err.kind(), &consent_gate_client::Kind::Store);
}
