//! Consent cookie access
//!
//! This module provides the cookie side of the gate:
//! - Cookie string parsing with `document.cookie` semantics
//! - The `CookieStore` seam and its in-memory and HTTP header implementations
//! - Assignment formatting and cookie name validation

pub mod core;
pub mod header;
pub mod utils;

pub use self::core::*;

pub use header::HeaderCookies;
pub use utils::*;
