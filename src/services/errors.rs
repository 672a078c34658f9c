//! Service-level error and mutation outcome types.

use thiserror::Error;

use crate::clients::{HttpError, InvalidHttpRequestError};

/// Error returned by service reads.
///
/// `Display` is the human-readable message, suitable for showing to a user.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request failed or the API answered with an error status.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The API answered 2xx but the payload did not have the expected shape.
    #[error("Unexpected response from the server: {0}")]
    Decode(#[source] serde_json::Error),

    /// A request payload could not be serialized.
    #[error("Could not encode request: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ServiceError {
    /// Returns `true` if the user has to log in again.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http(HttpError::Unauthorized))
    }

    /// Returns the HTTP status associated with this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

impl From<InvalidHttpRequestError> for ServiceError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Http(error.into())
    }
}

/// Outcome of a create, update or delete operation.
///
/// Mutations never return `Err`: failures are folded into `error`, carrying
/// the server's message when it gave one.
///
/// # Example
///
/// ```rust,ignore
/// let result = trips::create(&client, &NewTrip::new("Lisbon")).await;
/// if result.success {
///     println!("created {}", result.data.unwrap().id);
/// } else {
///     eprintln!("{}", result.error.unwrap_or_default());
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct MutationResult<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable failure message.
    pub error: Option<String>,
    /// The created or updated record.
    pub data: Option<T>,
}

impl<T> MutationResult<T> {
    /// A successful outcome carrying `data`.
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    /// A failed outcome.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            data: None,
        }
    }

    /// Converts back into a `Result`, with the failure message as error.
    ///
    /// # Errors
    ///
    /// Returns the failure message if the mutation did not succeed.
    pub fn into_result(self) -> Result<Option<T>, String> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self.error.unwrap_or_default())
        }
    }
}

impl<T> From<Result<T, ServiceError>> for MutationResult<T> {
    fn from(result: Result<T, ServiceError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => {
                tracing::debug!("Mutation failed: {e}");
                Self::failed(e.to_string())
            }
        }
    }
}
