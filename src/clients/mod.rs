//! HTTP client types for Tripkit API communication.
//!
//! This module provides the transport layer every service call goes
//! through. It attaches the session's bearer token and recovers once from an
//! expired access token.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async client, bound to a [`SessionStore`](crate::SessionStore)
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a parsed response from the API
//! - [`HttpMethod`]: supported HTTP methods
//! - [`HttpError`]: everything a request can fail with
//!
//! # Example
//!
//! ```rust,ignore
//! use tripkit_api::{ApiConfig, HttpClient, SessionStore};
//! use tripkit_api::clients::{HttpMethod, HttpRequest};
//!
//! let store = SessionStore::in_memory();
//! let client = HttpClient::new(ApiConfig::from_env()?, store.clone())?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/api/trips")
//!     .query_param("page", "1")
//!     .build()?;
//!
//! let response = client.request(request).await?.error_for_status()?;
//! if response.refreshed {
//!     println!("token was refreshed on the way");
//! }
//! ```
//!
//! # Refresh Behavior
//!
//! - **401 with a refresh token**: one refresh call, then one retry; the
//!   retry's response is final
//! - **401 without a refresh token, or a refused refresh**: the session is
//!   cleared and [`HttpError::Unauthorized`] is returned
//! - **Transport failures**: returned as [`HttpError::Network`], never retried
//! - **Other statuses**: returned unmodified

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{message_from_body, HttpResponse};
