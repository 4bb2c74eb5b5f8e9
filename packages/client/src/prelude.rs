//! Consent Gate Prelude
//!
//! The types most embedders need: the gate, its two seams and their stock
//! implementations.

pub use crate::banner::{Banner, MemoryBanner};
pub use crate::config::{ConsentConfig, CookieAttributes};
pub use crate::cookie::{CookieStore, HeaderCookies, Jar};
pub use crate::error::{Error, Result};
pub use crate::gate::{ConsentGate, Visibility};
#[cfg(target_arch = "wasm32")]
pub use crate::wasm::{BrowserGate, DocumentCookies, ElementBanner, browser_gate};
