//! Configuration error types for the Tripkit API client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! settings are rejected before any request is made.
//!
//! # Example
//!
//! ```rust
//! use tripkit_api::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The API base URL is invalid.
    #[error("Invalid base URL '{url}'. Expected an absolute URL with scheme (e.g., 'https://api.example.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is not set.
    #[error("Environment variable '{name}' is not set.")]
    MissingEnvVar {
        /// The name of the variable.
        name: &'static str,
    },

    /// An environment variable holds a value that cannot be used.
    #[error("Environment variable '{name}' has invalid value '{value}'.")]
    InvalidEnvVar {
        /// The name of the variable.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp//nope".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp//nope"));
        assert!(message.contains("absolute URL"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "base_url" };
        let message = error.to_string();
        assert!(message.contains("base_url"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_env_var_errors_name_the_variable() {
        let missing = ConfigError::MissingEnvVar {
            name: "TRIPKIT_API_URL",
        };
        assert!(missing.to_string().contains("TRIPKIT_API_URL"));

        let invalid = ConfigError::InvalidEnvVar {
            name: "TRIPKIT_API_TIMEOUT_SECS",
            value: "soon".to_string(),
        };
        assert!(invalid.to_string().contains("soon"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::MissingRequiredField { field: "base_url" };
        let _: &dyn std::error::Error = &error;
    }
}
