//! Banner container seam
//!
//! The gate only ever changes the container's inline `display` value, so that
//! is all a banner has to expose.

use std::sync::{Arc, RwLock};

use crate::config::DEFAULT_HIDDEN_DISPLAY;
use crate::error::{self, Result};

/// A banner element whose inline `display` style can be read and set.
pub trait Banner {
    /// Set the inline `display` value.
    fn set_display(&self, value: &str) -> Result<()>;

    /// Current inline `display` value.
    fn display(&self) -> Result<String>;
}

impl<T: Banner + ?Sized> Banner for &T {
    fn set_display(&self, value: &str) -> Result<()> {
        (**self).set_display(value)
    }

    fn display(&self) -> Result<String> {
        (**self).display()
    }
}

/// A banner held in memory. Starts hidden, like the page's default style.
///
/// Clones share the same display value.
#[derive(Debug, Clone)]
pub struct MemoryBanner(Arc<RwLock<String>>);

impl MemoryBanner {
    #[must_use]
    pub fn new(display: impl Into<String>) -> Self {
        MemoryBanner(Arc::new(RwLock::new(display.into())))
    }
}

impl Default for MemoryBanner {
    fn default() -> Self {
        Self::new(DEFAULT_HIDDEN_DISPLAY)
    }
}

impl Banner for MemoryBanner {
    fn set_display(&self, value: &str) -> Result<()> {
        let mut display = self.0.write().map_err(|_| error::poisoned())?;
        *display = value.to_owned();
        Ok(())
    }

    fn display(&self) -> Result<String> {
        let display = self.0.read().map_err(|_| error::poisoned())?;
        Ok(display.clone())
    }
}
