//! Relative URL construction.
//!
//! The relative URL is both the request target and part of the signed
//! canonical string, so it must be built exactly the way the bank expects.
//! Escaping is minimal:
//!
//! - path segments are inserted **verbatim**, no percent-encoding;
//! - a list of values joined into one segment is separated by `%2C`
//!   (an encoded comma), the only character this builder ever escapes;
//! - query keys and values are inserted verbatim, in the order added.
//!
//! Identifiers containing `/`, `?`, `&`, `#` or spaces are therefore not
//! safe to pass through; BCA identifiers are alphanumeric.

use std::fmt;

/// Separator for multi-value path segments.
pub const LIST_SEPARATOR: &str = "%2C";

/// A path plus optional query string, without scheme or host.
///
/// # Example
///
/// ```
/// use bca_rs::client::RelativeUrl;
///
/// let url = RelativeUrl::new("/banking/v2/corporates")
///     .segment("BCAAPI2016")
///     .segment("accounts")
///     .list_segment(["0201245680", "0063001004"]);
/// assert_eq!(
///     url.as_str(),
///     "/banking/v2/corporates/BCAAPI2016/accounts/0201245680%2C0063001004"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeUrl {
    path: String,
    query: Vec<(String, String)>,
    rendered: String,
}

impl RelativeUrl {
    /// Start from a fixed path such as `/banking/corporates/transfers`.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            rendered: path.clone(),
            path,
            query: Vec::new(),
        }
    }

    /// Append `/segment`, verbatim.
    pub fn segment(mut self, segment: impl AsRef<str>) -> Self {
        self.path.push('/');
        self.path.push_str(segment.as_ref());
        self.render();
        self
    }

    /// Append one segment made of several values joined with `%2C`.
    pub fn list_segment<I, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = values
            .into_iter()
            .map(|v| v.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR);
        self.segment(joined)
    }

    /// Append `key=value` to the query string, verbatim.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self.render();
        self
    }

    /// The path without the query string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The full relative URL, as signed and requested.
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    fn render(&mut self) {
        self.rendered.clear();
        self.rendered.push_str(&self.path);
        for (i, (key, value)) in self.query.iter().enumerate() {
            self.rendered.push(if i == 0 { '?' } else { '&' });
            self.rendered.push_str(key);
            self.rendered.push('=');
            self.rendered.push_str(value);
        }
    }
}

impl fmt::Display for RelativeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl AsRef<str> for RelativeUrl {
    fn as_ref(&self) -> &str {
        &self.rendered
    }
}
