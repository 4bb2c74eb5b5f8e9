//! The consent gate
//!
//! Decides banner visibility from the consent cookie on load and records the
//! user's acknowledgement.

pub mod builder;
pub mod core;

pub use builder::{GateBuilder, NoBanner, NoStore};
pub use self::core::{ConsentGate, Visibility};
