//! Cookie stores

use std::sync::{Arc, RwLock};

use super::utils::{format_assignment, format_cookie, read_cookie};
use crate::config::CookieAttributes;
use crate::error::{self, Result};

/// Read and write access to a cookie string shaped like `document.cookie`.
///
/// Implementors only supply the raw string and the assignment sink; the
/// lookup and formatting rules live in the provided methods so every store
/// matches names the same way.
pub trait CookieStore {
    /// The current `name=value; name=value` string.
    fn cookie_string(&self) -> Result<String>;

    /// Apply a cookie assignment, as `document.cookie = assignment` would.
    fn write(&self, assignment: &str) -> Result<()>;

    /// Value of the first cookie whose name is exactly `name`.
    fn get(&self, name: &str) -> Result<Option<String>> {
        read_cookie(&self.cookie_string()?, name)
    }

    /// Write `name=value` with no attributes, leaving lifetime to the host.
    fn set(&self, name: &str, value: &str) -> Result<()> {
        let assignment = format_assignment(name, value, &CookieAttributes::default())?;
        self.write(&assignment)
    }
}

impl<T: CookieStore + ?Sized> CookieStore for &T {
    fn cookie_string(&self) -> Result<String> {
        (**self).cookie_string()
    }

    fn write(&self, assignment: &str) -> Result<()> {
        (**self).write(assignment)
    }
}

/// An in-memory cookie store that behaves like a browser's cookie jar.
///
/// Clones share the same cookies, so one handle can be given to a gate while
/// another inspects what was written.
#[derive(Debug, Default)]
pub struct Jar(Arc<RwLock<Vec<(String, String)>>>);

impl Jar {
    /// Create a jar holding the cookies of a `name=value; ...` string.
    ///
    /// Entries without `=` are skipped. Values are stored as given, without
    /// percent-decoding.
    ///
    /// # Example
    ///
    /// ```
    /// use consent_gate_client::cookie::{CookieStore, Jar};
    ///
    /// let jar = Jar::from_cookie_string("foo=bar; _cookies_acceptance=true");
    /// assert_eq!(jar.get("foo").unwrap().as_deref(), Some("bar"));
    /// ```
    #[must_use]
    pub fn from_cookie_string(cookies: &str) -> Self {
        let pairs = cookies
            .split(';')
            .filter_map(|pair| {
                let (name, value) = pair.trim().split_once('=')?;
                Some((name.to_owned(), value.to_owned()))
            })
            .collect();
        Jar(Arc::new(RwLock::new(pairs)))
    }

    /// Add a cookie to this jar from a `Set-Cookie`-style assignment.
    pub fn add_cookie_str(&self, assignment: &str) -> Result<()> {
        let parsed = match cookie::Cookie::parse(assignment) {
            Ok(parsed) => parsed,
            Err(e) => {
                // Browsers drop malformed assignments without complaint.
                tracing::trace!(error = %e, "ignoring unparsable cookie assignment");
                return Ok(());
            }
        };

        let mut pairs = self.0.write().map_err(|_| error::poisoned())?;
        let position = pairs.iter().position(|(name, _)| name == parsed.name());

        let expired = parsed
            .max_age()
            .is_some_and(|max_age| max_age <= cookie::time::Duration::ZERO);
        if expired {
            if let Some(index) = position {
                pairs.remove(index);
            }
            return Ok(());
        }

        let value = parsed.value().to_owned();
        match position {
            Some(index) => pairs[index].1 = value,
            None => pairs.push((parsed.name().to_owned(), value)),
        }
        Ok(())
    }

    /// Number of cookies currently held.
    pub fn len(&self) -> Result<usize> {
        let pairs = self.0.read().map_err(|_| error::poisoned())?;
        Ok(pairs.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl Clone for Jar {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl CookieStore for Jar {
    fn cookie_string(&self) -> Result<String> {
        let pairs = self.0.read().map_err(|_| error::poisoned())?;
        Ok(format_cookie(
            pairs.iter().map(|(name, value)| (name.as_str(), value.as_str())),
        ))
    }

    fn write(&self, assignment: &str) -> Result<()> {
        self.add_cookie_str(assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_replaces_existing_cookie_in_place() {
        let jar = Jar::from_cookie_string("a=1; b=2");
        jar.write("a=3").expect("write should succeed");
        assert_eq!(jar.cookie_string().expect("readable"), "a=3; b=2");
    }

    #[test]
    fn zero_max_age_removes_cookie() {
        let jar = Jar::from_cookie_string("a=1; b=2");
        jar.write("a=; Max-Age=0").expect("write should succeed");
        assert_eq!(jar.cookie_string().expect("readable"), "b=2");
    }

    #[test]
    fn malformed_assignment_is_ignored() {
        let jar = Jar::default();
        jar.write("no-equals-sign").expect("ignored, not an error");
        assert!(jar.is_empty().expect("readable"));
    }

    #[test]
    fn attributes_are_not_stored_as_cookies() {
        let jar = Jar::default();
        jar.write("k=v; Path=/; Max-Age=60").expect("write should succeed");
        assert_eq!(jar.cookie_string().expect("readable"), "k=v");
        assert_eq!(jar.len().expect("readable"), 1);
    }

    #[test]
    fn poisoned_jar_reports_an_error() {
        let jar = Jar::from_cookie_string("a=1");
        let handle = jar.clone();
        let _ = std::thread::spawn(move || {
            let _guard = handle.0.write().expect("lock should be free");
            panic!("poison the jar");
        })
        .join();

        let err = jar.len().expect_err("poisoned lock should surface");
        assert_eq!(err.kind(), &crate::error::Kind::Store);
        assert!(jar.cookie_string().is_err());
    }

    #[test]
    fn clones_share_cookies() {
        let jar = Jar::default();
        let handle = jar.clone();
        handle.set("x", "y").expect("set should succeed");
        assert_eq!(jar.get("x").expect("readable").as_deref(), Some("y"));
    }
}
