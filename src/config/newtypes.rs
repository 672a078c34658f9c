//! Validated newtype wrappers for configuration values.

use crate::error::ConfigError;
use std::fmt;

/// A validated API base URL.
///
/// The URL must carry a scheme and a host. It may carry a path prefix;
/// trailing slashes are trimmed so that [`BaseUrl::join`] always produces
/// exactly one `/` between base and path.
///
/// # Example
///
/// ```rust
/// use tripkit_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.example.com");
/// assert_eq!(url.host_name(), "api.example.com");
/// assert_eq!(url.join("/api/trips"), "https://api.example.com/api/trips");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme, a
    /// non-alphabetic scheme, or an empty host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(invalid());
        }

        // Host ends at port, path, query, or end of string
        let host_end = url[host_start..]
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start || url[host_start..host_end].contains(char::is_whitespace) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.host_start - 3]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Appends an absolute API path to the base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.url)
        } else {
            format!("{}/{path}", self.url)
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
