//! Authenticated HTTP client for the Tripkit API.
//!
//! This module provides the [`HttpClient`] type. Every call reads the current
//! session from the [`SessionStore`], attaches its bearer token, and recovers
//! once from an expired access token by refreshing it.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::auth::{refresh_tokens, Session, SessionStore};
use crate::clients::errors::{HttpError, InvalidHttpRequestError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::ApiConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client making authenticated requests to the API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers (`User-Agent`, `Accept`, `Content-Type: application/json`)
/// - `Authorization: Bearer <token>` from the session store
/// - One refresh-and-retry cycle when the API answers 401
///
/// # Token refresh
///
/// When an authenticated request is answered with 401 and the session holds
/// a refresh token, the client exchanges it at
/// [`REFRESH_TOKEN_PATH`](crate::auth::REFRESH_TOKEN_PATH), stores the new
/// tokens with the existing user profile, and sends the original request once
/// more. Whatever the retry returns is final. If the refresh is refused or
/// there is no refresh token, the session is cleared and
/// [`HttpError::Unauthorized`] is returned.
///
/// Refreshes are serialized per client: a request that waited for another
/// request's refresh uses the token it obtained instead of refreshing again.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`; share it behind an `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// use tripkit_api::{ApiConfig, HttpClient, SessionStore};
/// use tripkit_api::clients::{HttpMethod, HttpRequest};
///
/// let client = HttpClient::new(ApiConfig::from_env()?, SessionStore::in_memory())?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/api/trips").build()?;
/// let response = client.request(request).await?.error_for_status()?;
/// println!("{}", response.body);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    config: ApiConfig,
    store: SessionStore,
    default_headers: HashMap<String, String>,
    refresh_gate: Mutex<()>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new client reading credentials from `store`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying HTTP client cannot be
    /// built (e.g., TLS backend initialization failure).
    pub fn new(config: ApiConfig, store: SessionStore) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}tripkit-api-rust v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent.clone());
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent.as_str());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            config,
            store,
            default_headers,
            refresh_gate: Mutex::new(()),
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Returns the session store this client reads credentials from.
    #[must_use]
    pub const fn session_store(&self) -> &SessionStore {
        &self.store
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request, recovering once from an expired access token.
    ///
    /// Non-2xx statuses other than the terminal 401 case are returned as
    /// `Ok`; use [`HttpResponse::error_for_status`] to reject them.
    ///
    /// # Errors
    ///
    /// - [`HttpError::InvalidRequest`] if the request fails validation
    /// - [`HttpError::Network`] if no response was obtained (never retried)
    /// - [`HttpError::Unauthorized`] if the API answered 401 and the session
    ///   could not be refreshed; the session is cleared
    /// - [`HttpError::InvalidBody`] if a 2xx body is not valid JSON
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;
        let headers = self.request_headers(&request)?;

        let session = if request.authenticated {
            self.store.get()
        } else {
            None
        };
        let access_token = session
            .as_ref()
            .filter(|s| s.has_access_token())
            .map(|s| s.access_token.as_str());

        let res = self.send(&request, &headers, access_token).await?;
        if res.status() != StatusCode::UNAUTHORIZED || !request.authenticated {
            return self.read_response(&request, res, false).await;
        }

        tracing::debug!(
            "{} {} was rejected with 401",
            request.http_method,
            request.path
        );
        let Some(access_token) = self.recover_access_token(session).await else {
            return Err(HttpError::Unauthorized);
        };

        let retry = self.send(&request, &headers, Some(&access_token)).await?;
        self.read_response(&request, retry, true).await
    }

    /// Sends a request that is abandoned when `cancel` fires.
    ///
    /// Cancelling drops the in-flight call. A refresh already answered by the
    /// server may be lost, in which case the next request refreshes again.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Cancelled`] if `cancel` fires first, otherwise
    /// the same errors as [`request`](Self::request).
    pub async fn request_cancellable(
        &self,
        request: HttpRequest,
        cancel: &CancellationToken,
    ) -> Result<HttpResponse, HttpError> {
        let path = request.path.clone();
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::debug!("Request to {path} was cancelled");
                Err(HttpError::Cancelled)
            }
            result = self.request(request) => result,
        }
    }

    /// Returns an access token to retry with, or `None` if the session is
    /// unrecoverable.
    async fn recover_access_token(&self, stale: Option<Session>) -> Option<String> {
        let stale = stale?;
        if !stale.has_refresh_token() {
            tracing::debug!("No refresh token available; session cannot be recovered");
            self.store.clear_if_current(&stale.access_token);
            return None;
        }

        let _gate = self.refresh_gate.lock().await;

        // Cleared by a concurrent failed refresh or a logout
        let current = self.store.get()?;
        if current.access_token != stale.access_token && current.has_access_token() {
            tracing::debug!("Access token was already refreshed by a concurrent request");
            return Some(current.access_token);
        }
        if !current.has_refresh_token() {
            self.store.clear_if_current(&current.access_token);
            return None;
        }

        match refresh_tokens(&self.client, self.config.base_url(), &current.refresh_token).await {
            Ok(tokens) => {
                let rotated = tokens.refresh_token.filter(|token| !token.is_empty());
                let refreshed =
                    self.store
                        .replace_tokens(&current.refresh_token, tokens.access_token, rotated);
                let Some(refreshed) = refreshed else {
                    tracing::debug!("Session changed during token refresh; discarding new tokens");
                    return None;
                };
                tracing::debug!("Access token refreshed for user {}", refreshed.user.id);
                Some(refreshed.access_token)
            }
            Err(e) => {
                tracing::warn!("Token refresh failed, clearing session: {e}");
                self.store.clear_if_refresh_token(&current.refresh_token);
                None
            }
        }
    }

    /// Merges default and request headers. Request headers win.
    fn request_headers(&self, request: &HttpRequest) -> Result<HeaderMap, HttpError> {
        let mut headers = HeaderMap::new();
        let extra = request.extra_headers.iter().flatten();
        for (key, value) in self.default_headers.iter().chain(extra) {
            let invalid = || InvalidHttpRequestError::InvalidHeader { name: key.clone() };
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| invalid())?;
            let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    async fn send(
        &self,
        request: &HttpRequest,
        headers: &HeaderMap,
        access_token: Option<&str>,
    ) -> Result<reqwest::Response, HttpError> {
        let url = self.config.base_url().join(&request.path);

        let mut headers = headers.clone();
        if let Some(token) = access_token {
            let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                InvalidHttpRequestError::InvalidHeader {
                    name: AUTHORIZATION.to_string(),
                }
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        let mut req_builder = self
            .client
            .request(request.http_method.as_reqwest(), &url)
            .headers(headers);

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        Ok(req_builder.send().await?)
    }

    async fn read_response(
        &self,
        request: &HttpRequest,
        res: reqwest::Response,
        refreshed: bool,
    ) -> Result<HttpResponse, HttpError> {
        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        tracing::debug!("{} {} -> {code}", request.http_method, request.path);

        let body = if body_text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            match serde_json::from_str(&body_text) {
                Ok(body) => body,
                Err(e) if (200..300).contains(&code) => return Err(HttpError::InvalidBody(e)),
                // Error pages from proxies are often HTML
                Err(_) => serde_json::json!({ "raw_body": body_text }),
            }
        };

        let mut response = HttpResponse::new(code, headers, body);
        response.refreshed = refreshed;
        Ok(response)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(headers: &HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
