//! Cookie string utilities

use std::borrow::Cow;

use crate::config::CookieAttributes;
use crate::error::{self, InvalidName, Result};

/// Characters RFC 6265 forbids in a cookie name, on top of `;` and `=`.
const SEPARATORS: &str = "()<>@,/[]?{}\"\\";

/// Find the value of cookie `name` in a `document.cookie`-style string.
///
/// The whole string is percent-decoded first, then split on `;`. Leading
/// spaces are stripped from each entry and the first entry starting with
/// `name=` wins. Returns `Ok(None)` when no entry matches.
///
/// # Errors
///
/// Returns an `InvalidName` error if `name` is empty or contains `;` or `=`.
/// Any other name can be looked up, even one the host would refuse to set.
///
/// # Example
///
/// ```
/// use consent_gate_client::cookie::read_cookie;
///
/// let header = "foo=bar; _cookies_acceptance=true; baz=qux";
/// assert_eq!(
///     read_cookie(header, "_cookies_acceptance").unwrap().as_deref(),
///     Some("true"),
/// );
/// assert_eq!(read_cookie("foo=bar", "_cookies_acceptance").unwrap(), None);
/// ```
pub fn read_cookie(cookie_string: &str, name: &str) -> Result<Option<String>> {
    validate_lookup_name(name)?;

    let decoded = percent_decode(cookie_string);
    let value = decoded
        .split(';')
        .map(|entry| entry.trim_start_matches(' '))
        .find_map(|entry| entry.strip_prefix(name)?.strip_prefix('='))
        .map(str::to_owned);

    Ok(value)
}

fn percent_decode(input: &str) -> Cow<'_, str> {
    match urlencoding::decode(input) {
        Ok(decoded) => decoded,
        Err(_) => {
            let bytes = urlencoding::decode_binary(input.as_bytes());
            Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

/// Join `(name, value)` pairs into a `name=value; name=value` string.
pub fn format_cookie<'a, I>(cookies: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    cookies
        .into_iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Build the assignment string written to a cookie store.
///
/// With default attributes this is exactly `name=value`.
///
/// # Errors
///
/// Returns an `InvalidName` error if `name` fails [`validate_cookie_name`].
pub fn format_assignment(name: &str, value: &str, attributes: &CookieAttributes) -> Result<String> {
    validate_cookie_name(name)?;

    let mut builder = cookie::Cookie::build((name.to_owned(), value.to_owned()));
    if let Some(path) = &attributes.path {
        builder = builder.path(path.clone());
    }
    if let Some(domain) = &attributes.domain {
        builder = builder.domain(domain.clone());
    }
    if let Some(seconds) = attributes.max_age_secs {
        builder = builder.max_age(cookie::time::Duration::seconds(seconds));
    }
    if attributes.secure {
        builder = builder.secure(true);
    }
    if let Some(same_site) = attributes.same_site {
        builder = builder.same_site(same_site.into());
    }

    Ok(builder.build().to_string())
}

/// Validate a cookie name for lookup.
///
/// # Errors
///
/// Returns an `InvalidName` error if the name is empty or contains `;` or
/// `=`, which would make the `name=` prefix match ambiguous.
pub fn validate_lookup_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(error::invalid_name(InvalidName::Empty));
    }

    match name.chars().find(|&ch| ch == ';' || ch == '=') {
        Some(ch) => Err(error::invalid_name(InvalidName::Char(ch))),
        None => Ok(()),
    }
}

/// Validate a cookie name for assignment.
///
/// # Errors
///
/// Returns an `InvalidName` error if the name is empty, or contains `;`,
/// `=`, whitespace, control characters or an RFC 6265 separator.
pub fn validate_cookie_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(error::invalid_name(InvalidName::Empty));
    }

    for ch in name.chars() {
        if ch == ';'
            || ch == '='
            || ch.is_whitespace()
            || ch.is_control()
            || SEPARATORS.contains(ch)
        {
            return Err(error::invalid_name(InvalidName::Char(ch)));
        }
    }

    Ok(())
}
