//! # Consent Gate Client
//!
//! Remembers whether a visitor dismissed the cookie-consent banner.
//!
//! On load the gate reads the `_cookies_acceptance` cookie and shows the
//! banner container unless it holds `"true"`. When the visitor acknowledges
//! the banner, the gate hides it and writes `_cookies_acceptance=true`.
//!
//! Cookie access and the banner element sit behind the [`CookieStore`] and
//! [`Banner`] traits. The browser implementations live in `wasm` (wasm32
//! only); [`Jar`], [`HeaderCookies`] and [`MemoryBanner`] work anywhere.
//!
//! ## Usage
//!
//! ```
//! use consent_gate_client::{ConsentGate, Jar, MemoryBanner, Visibility};
//!
//! let jar = Jar::default();
//! let banner = MemoryBanner::default();
//! let gate = ConsentGate::new(jar.clone(), banner.clone());
//!
//! assert_eq!(gate.initialize().unwrap(), Visibility::Visible);
//! gate.acknowledge().unwrap();
//!
//! let reloaded = ConsentGate::new(jar, MemoryBanner::default());
//! assert_eq!(reloaded.initialize().unwrap(), Visibility::Hidden);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod banner;
pub mod config;
pub mod cookie;
pub mod error;
pub mod gate;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub mod prelude;

pub use crate::banner::{Banner, MemoryBanner};
pub use crate::config::{ConsentConfig, CookieAttributes, SameSitePolicy};
pub use crate::cookie::{CookieStore, HeaderCookies, Jar, read_cookie};
pub use crate::error::{Error, Kind, Result};
pub use crate::gate::{ConsentGate, GateBuilder, Visibility};
