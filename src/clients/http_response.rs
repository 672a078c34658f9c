//! Parsed API responses.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::{HttpError, HttpResponseError};

/// An HTTP response from the API.
///
/// [`HttpClient::request`](crate::clients::HttpClient::request) returns every
/// status except the terminal 401 case as an `HttpResponse`; call
/// [`error_for_status`](Self::error_for_status) to turn non-2xx statuses into
/// errors.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed JSON body. `Null` for an empty body; `{"raw_body": "..."}`
    /// for a non-JSON error body.
    pub body: serde_json::Value,
    /// `true` if this response is the retry sent after a successful token
    /// refresh.
    pub refreshed: bool,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
            refreshed: false,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the human-readable `message` of the body, if there is one.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        message_from_body(&self.body)
    }

    /// Converts a non-2xx response into [`HttpError::Response`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] carrying the status and the body's
    /// message (or a generic description of the status).
    pub fn error_for_status(self) -> Result<Self, HttpError> {
        if self.is_ok() {
            return Ok(self);
        }
        let message = self
            .message()
            .unwrap_or_else(|| format!("Request failed with status {}", self.code));
        Err(HttpResponseError {
            code: self.code,
            message,
        }
        .into())
    }

    /// Deserializes the whole body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidBody`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        T::deserialize(&self.body).map_err(HttpError::InvalidBody)
    }
}

/// Extracts a human-readable message from an API body.
///
/// Looks at `message` (a string, or an array of strings joined with `"; "`),
/// then `error`, then the `raw_body` of a non-JSON response.
#[must_use]
pub fn message_from_body(body: &serde_json::Value) -> Option<String> {
    let text = |value: &serde_json::Value| {
        value
            .as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
    };

    if let Some(message) = body.get("message") {
        if let Some(list) = message.as_array() {
            let parts: Vec<String> = list.iter().filter_map(text).collect();
            if !parts.is_empty() {
                return Some(parts.join("; "));
            }
        } else if let Some(message) = text(message) {
            return Some(message);
        }
    }

    body.get("error")
        .and_then(text)
        .or_else(|| body.get("raw_body").and_then(text))
}
