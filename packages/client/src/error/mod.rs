pub mod constructors;
pub mod helpers;
pub mod types;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use constructors::*;
pub use helpers::{BadField, InvalidName, Poisoned};
pub use types::{Error, Inner, Kind, Result};
#[cfg(target_arch = "wasm32")]
pub use wasm::wasm;
