//! Cookie store backed by HTTP headers, for rendering the banner server-side.

use std::sync::RwLock;

use http::header::{COOKIE, SET_COOKIE};
use http::{HeaderMap, HeaderValue};

use super::core::CookieStore;
use crate::error::{self, Result};

/// Reads cookies from a request's `Cookie` headers and collects writes as
/// `Set-Cookie` values for the response.
///
/// `cookie_string` reflects the incoming request only; assignments made
/// while handling it show up on the next request.
#[derive(Debug, Default)]
pub struct HeaderCookies {
    request: String,
    set_cookies: RwLock<Vec<HeaderValue>>,
}

impl HeaderCookies {
    /// Collect every `Cookie` header of a request into one cookie string.
    ///
    /// Header values that are not visible ASCII are skipped.
    #[must_use]
    pub fn from_request(headers: &HeaderMap) -> Self {
        let request = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect::<Vec<_>>()
            .join("; ");

        Self {
            request,
            set_cookies: RwLock::default(),
        }
    }

    /// `Set-Cookie` values produced so far, in write order.
    pub fn set_cookie_headers(&self) -> Result<Vec<HeaderValue>> {
        let set_cookies = self.set_cookies.read().map_err(|_| error::poisoned())?;
        Ok(set_cookies.clone())
    }

    /// Append the collected `Set-Cookie` values to a response header map.
    pub fn apply_to(&self, headers: &mut HeaderMap) -> Result<()> {
        for value in self.set_cookie_headers()? {
            headers.append(SET_COOKIE, value);
        }
        Ok(())
    }
}

impl CookieStore for HeaderCookies {
    fn cookie_string(&self) -> Result<String> {
        Ok(self.request.clone())
    }

    fn write(&self, assignment: &str) -> Result<()> {
        let value = HeaderValue::from_str(assignment).map_err(error::store)?;
        tracing::debug!(%assignment, "queued Set-Cookie");
        self.set_cookies
            .write()
            .map_err(|_| error::poisoned())?
            .push(value);
        Ok(())
    }
}
