use consent_gate_client::prelude::*;
use consent_gate_client::Kind;

#[test]
fn test_banner_shown_without_consent_cookie() {
    let banner = MemoryBanner::default();
    let gate = ConsentGate::new(Jar::from_cookie_string("foo=bar"), banner.clone());

    let visibility = gate.initialize().expect("initialize should succeed");

    assert_eq!(visibility, Visibility::Visible);
    assert_eq!(banner.display().expect("display readable"), "inline-grid");
}

#[test]
fn test_banner_stays_hidden_with_consent_cookie() {
    let banner = MemoryBanner::default();
    let gate = ConsentGate::new(
        Jar::from_cookie_string("foo=bar; _cookies_acceptance=true; baz=qux"),
        banner.clone(),
    );

    assert_eq!(gate.initialize().expect("initialize should succeed"), Visibility::Hidden);
    assert_eq!(banner.display().expect("display readable"), "none");
}

#[test]
fn test_gate_read_cookie_uses_store() {
    let gate = ConsentGate::new(
        Jar::from_cookie_string("foo=bar; _cookies_acceptance=true"),
        MemoryBanner::default(),
    );

    let value = gate.read_cookie("_cookies_acceptance").expect("name should be valid");
    assert_eq!(value.as_deref(), Some("true"));
    assert_eq!(gate.read_cookie("missing").expect("name should be valid"), None);
}

#[test]
fn test_acknowledge_hides_banner_and_writes_cookie() {
    let jar = Jar::default();
    let banner = MemoryBanner::default();
    let gate = ConsentGate::new(jar.clone(), banner.clone());

    gate.initialize().expect("initialize should succeed");
    gate.acknowledge().expect("acknowledge should succeed");

    assert_eq!(banner.display().expect("display readable"), "none");
    assert_eq!(jar.cookie_string().expect("readable"), "_cookies_acceptance=true");
    assert!(gate.has_consented().expect("readable"));
}

#[test]
fn test_acknowledge_then_reload_never_shows_banner() {
    let jar = Jar::from_cookie_string("session=abc");
    ConsentGate::new(jar.clone(), MemoryBanner::default())
        .acknowledge()
        .expect("acknowledge should succeed");

    let banner = MemoryBanner::default();
    let reloaded = ConsentGate::new(jar, banner.clone());

    assert_eq!(reloaded.initialize().expect("initialize should succeed"), Visibility::Hidden);
    assert_eq!(banner.display().expect("display readable"), "none");
}

#[test]
fn test_acknowledge_is_idempotent() {
    let jar = Jar::default();
    let gate = ConsentGate::new(jar.clone(), MemoryBanner::default());

    gate.acknowledge().expect("first acknowledge");
    gate.acknowledge().expect("second acknowledge");

    assert_eq!(jar.len().expect("readable"), 1);
}

#[test]
fn test_builder_with_custom_config() {
    let jar = Jar::default();
    let banner = MemoryBanner::default();
    let gate = ConsentGate::builder()
        .store(jar.clone())
        .banner(banner.clone())
        .configure(|config| {
            config
                .with_cookie_name("consent")
                .with_consent_value("yes")
                .with_display("block", "none")
                .with_attributes(CookieAttributes::default().with_path("/"))
        })
        .build()
        .expect("config should be valid");

    assert_eq!(gate.initialize().expect("initialize should succeed"), Visibility::Visible);
    assert_eq!(banner.display().expect("display readable"), "block");

    gate.acknowledge().expect("acknowledge should succeed");
    assert_eq!(jar.get("consent").expect("readable").as_deref(), Some("yes"));
}

#[test]
fn test_builder_rejects_invalid_cookie_name() {
    let err = ConsentGate::builder()
        .store(Jar::default())
        .banner(MemoryBanner::default())
        .configure(|config| config.with_cookie_name("bad=name"))
        .build()
        .expect_err("cookie name should be rejected");

    assert_eq!(err.kind(), &Kind::InvalidName);
}

#[test]
fn test_gate_over_borrowed_parts() {
    let jar = Jar::default();
    let banner = MemoryBanner::default();
    let gate = ConsentGate::new(&jar, &banner);

    gate.acknowledge().expect("acknowledge should succeed");
    assert!(!jar.is_empty().expect("readable"));
}
