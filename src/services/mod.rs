//! Typed operations on the Tripkit API.
//!
//! Each module exposes plain async functions taking an [`HttpClient`]:
//!
//! - [`auth`]: login, registration, logout and the current user's profile
//! - [`trips`]: trip CRUD
//! - [`expenses`]: expenses, contributions and balances of a trip
//! - [`challenges`]: self-learning challenges
//!
//! Reads return `Result<T, ServiceError>`; creates, updates and deletes
//! return a [`MutationResult`].
//!
//! # Example
//!
//! ```rust,ignore
//! use tripkit_api::services::{auth, trips, PageParams};
//!
//! let login = auth::login(&client, "ada@example.com", "secret").await;
//! if !login.success {
//!     return Err(login.error.unwrap_or_default().into());
//! }
//!
//! let page = trips::list(&client, &PageParams::new(1, 20)).await?;
//! for trip in page.iter() {
//!     println!("{} ({:?})", trip.title, trip.status);
//! }
//! ```

pub mod auth;
pub mod challenges;
mod envelope;
mod errors;
pub mod expenses;
pub mod trips;

pub use envelope::{ApiEnvelope, PageMeta, PageParams, Paginated, SortOrder};
pub use errors::{MutationResult, ServiceError};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder};

/// Builds a path from a template, percent-encoding each interpolated ID.
///
/// Placeholders have the form `{name}`.
pub(crate) fn build_path(template: &str, ids: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &urlencoding::encode(value));
    }

    result
}

/// Starts a request whose body is `payload` serialized as JSON.
pub(crate) fn with_payload<P: Serialize>(
    method: HttpMethod,
    path: String,
    payload: &P,
) -> Result<HttpRequestBuilder, ServiceError> {
    let body = serde_json::to_value(payload).map_err(ServiceError::Encode)?;
    Ok(HttpRequest::builder(method, path).body(body))
}

/// Builds a request whose body is `payload` serialized as JSON.
pub(crate) fn json_request<P: Serialize>(
    method: HttpMethod,
    path: String,
    payload: &P,
) -> Result<HttpRequest, ServiceError> {
    Ok(with_payload(method, path, payload)?.build()?)
}

/// Sends a mutation and folds its outcome into a [`MutationResult`].
pub(crate) async fn mutate<T: DeserializeOwned>(
    client: &HttpClient,
    request: Result<HttpRequest, ServiceError>,
) -> MutationResult<T> {
    let result = match request {
        Ok(request) => fetch_data(client, request).await,
        Err(e) => Err(e),
    };
    result.into()
}

/// Like [`mutate`], for operations answering without a payload.
pub(crate) async fn mutate_empty(
    client: &HttpClient,
    request: Result<HttpRequest, ServiceError>,
) -> MutationResult<()> {
    let result = match request {
        Ok(request) => send(client, request).await,
        Err(e) => Err(e),
    };
    result.into()
}

/// Builds a request without a body.
pub(crate) fn bare_request(method: HttpMethod, path: String) -> Result<HttpRequest, ServiceError> {
    Ok(HttpRequest::builder(method, path).build()?)
}

/// Sends `request` and unwraps the `data` of an [`ApiEnvelope`].
pub(crate) async fn fetch_data<T: DeserializeOwned>(
    client: &HttpClient,
    request: HttpRequest,
) -> Result<T, ServiceError> {
    let response = client.request(request).await?.error_for_status()?;
    let envelope: ApiEnvelope<T> =
        serde_json::from_value(response.body).map_err(ServiceError::Decode)?;
    Ok(envelope.data)
}

/// Sends `request` and decodes a [`Paginated`] list.
pub(crate) async fn fetch_page<T: DeserializeOwned>(
    client: &HttpClient,
    request: HttpRequest,
) -> Result<Paginated<T>, ServiceError> {
    let response = client.request(request).await?.error_for_status()?;
    serde_json::from_value(response.body).map_err(ServiceError::Decode)
}

/// Sends `request`, ignoring the body of a successful response.
pub(crate) async fn send(client: &HttpClient, request: HttpRequest) -> Result<(), ServiceError> {
    client.request(request).await?.error_for_status()?;
    Ok(())
}
