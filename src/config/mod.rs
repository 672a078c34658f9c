//! Configuration types for the Tripkit API client.
//!
//! - [`ApiConfig`]: settings shared by every request a client makes
//! - [`ApiConfigBuilder`]: builder for [`ApiConfig`]
//! - [`BaseUrl`]: validated API base URL
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use tripkit_api::{ApiConfig, BaseUrl};
//!
//! let config = ApiConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.example.com");
//! ```

mod newtypes;

pub use newtypes::BaseUrl;

use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "TRIPKIT_API_URL";

/// Environment variable holding the transport timeout in whole seconds.
pub const TIMEOUT_ENV: &str = "TRIPKIT_API_TIMEOUT_SECS";

/// Configuration for the Tripkit API client.
///
/// `ApiConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl ApiConfig {
    /// Creates a new builder for constructing an `ApiConfig`.
    #[must_use]
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::new()
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads [`BASE_URL_ENV`] (required) and [`TIMEOUT_ENV`] (optional).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when the base URL is unset,
    /// [`ConfigError::InvalidBaseUrl`] when it is malformed, and
    /// [`ConfigError::InvalidEnvVar`] when the timeout is not an integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(BASE_URL_ENV).ok_or(ConfigError::MissingEnvVar {
            name: BASE_URL_ENV,
        })?;

        let mut builder = Self::builder().base_url(BaseUrl::new(base_url)?);

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: TIMEOUT_ENV,
                value: raw.clone(),
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the transport timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify ApiConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiConfig>();
};

/// Builder for constructing [`ApiConfig`] instances.
///
/// `base_url` is required. There is no timeout and no user agent prefix by
/// default.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl ApiConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the transport timeout applied to every request.
    ///
    /// A request that times out surfaces as a network error.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`ApiConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set.
    pub fn build(self) -> Result<ApiConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        Ok(ApiConfig {
            base_url,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
