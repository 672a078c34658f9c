//! HTTP-specific error types.
//!
//! - [`HttpResponseError`]: a non-2xx response, produced by
//!   [`HttpResponse::error_for_status`](crate::clients::HttpResponse::error_for_status)
//! - [`InvalidHttpRequestError`]: a request rejected before it was sent
//! - [`HttpError`]: every way [`HttpClient::request`](crate::clients::HttpClient::request)
//!   can fail
//!
//! # Example
//!
//! ```rust,ignore
//! use tripkit_api::clients::HttpError;
//!
//! match client.request(request).await.and_then(|r| r.error_for_status()) {
//!     Ok(response) => println!("OK: {}", response.body),
//!     Err(HttpError::Unauthorized) => println!("Please log in again"),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Network(e)) => println!("Offline? {e}"),
//!     Err(other) => println!("{other}"),
//! }
//! ```

use thiserror::Error;

/// A non-successful response from the API.
///
/// `message` is the human-readable `message` from the response body when the
/// API supplied one, otherwise a generic description of the status.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Message extracted from the response body.
    pub message: String,
}

/// A request that failed validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty.
    #[error("Cannot send a request without a path.")]
    EmptyPath,

    /// A POST, PUT or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A header name or value cannot be sent over HTTP.
    #[error("Invalid header '{name}'.")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },
}

/// Unified error type for HTTP operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response, other than the terminal 401 path.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The access token was rejected and could not be refreshed.
    ///
    /// The session has been cleared; the user has to log in again.
    #[error("Unauthorized: the session has expired, please log in again")]
    Unauthorized,

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// No response was obtained (connection, DNS, TLS, timeout).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A successful response carried a body that is not valid JSON.
    #[error("Response body is not valid JSON: {0}")]
    InvalidBody(#[source] serde_json::Error),

    /// The caller cancelled the request before it completed.
    #[error("Request was cancelled")]
    Cancelled,
}

impl HttpError {
    /// Returns the HTTP status associated with this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Unauthorized => Some(401),
            _ => None,
        }
    }

    /// Returns `true` if the caller should send the user back to login.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_displays_message() {
        let error = HttpResponseError {
            code: 404,
            message: "Trip not found".to_string(),
        };
        assert_eq!(error.to_string(), "Trip not found");
    }

    #[test]
    fn test_invalid_request_messages() {
        assert_eq!(
            InvalidHttpRequestError::MissingBody {
                method: "patch".to_string()
            }
            .to_string(),
            "Cannot use patch without specifying data."
        );
        assert!(InvalidHttpRequestError::InvalidHeader {
            name: "bad header".to_string()
        }
        .to_string()
        .contains("bad header"));
    }

    #[test]
    fn test_http_error_status() {
        let response: HttpError = HttpResponseError {
            code: 422,
            message: "title must not be empty".to_string(),
        }
        .into();
        assert_eq!(response.status(), Some(422));
        assert_eq!(response.to_string(), "title must not be empty");

        assert_eq!(HttpError::Unauthorized.status(), Some(401));
        assert!(HttpError::Unauthorized.is_unauthorized());
        assert_eq!(HttpError::Cancelled.status(), None);
    }

    #[test]
    fn test_invalid_request_converts() {
        let error: HttpError = InvalidHttpRequestError::EmptyPath.into();
        assert!(matches!(
            error,
            HttpError::InvalidRequest(InvalidHttpRequestError::EmptyPath)
        ));
    }

    #[test]
    fn test_errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpError>();
        assert_send_sync::<HttpResponseError>();
    }
}
