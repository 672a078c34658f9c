//! Exchange of a refresh token for a new token pair.
//!
//! The API mints new tokens at `POST {base}/api/auth/refresh-token` with the
//! body `{"refreshToken": "..."}`. The answer is `{"accessToken": "...",
//! "refreshToken": "..."}`, either bare or wrapped in the standard
//! `{"data": ...}` envelope.
//!
//! [`HttpClient`](crate::clients::HttpClient) calls [`refresh_tokens`] when a
//! request is rejected with 401; it can also be called directly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clients::message_from_body;
use crate::config::BaseUrl;

/// Path of the token refresh endpoint.
pub const REFRESH_TOKEN_PATH: &str = "/api/auth/refresh-token";

/// Errors from the token refresh call.
#[derive(Debug, Error)]
pub enum RefreshError {
    /// The refresh endpoint answered with a non-2xx status.
    #[error("Token refresh rejected with status {status}: {message}")]
    Rejected {
        /// The HTTP status code returned.
        status: u16,
        /// The `message` from the response body, or the raw body.
        message: String,
    },

    /// No response was obtained from the refresh endpoint.
    #[error("Token refresh failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The refresh endpoint answered 2xx with a body that holds no tokens.
    #[error("Token refresh returned an unusable body: {0}")]
    InvalidResponse(String),
}

/// Tokens minted by the refresh endpoint.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// The new access token.
    pub access_token: String,

    /// The new refresh token. `None` when the server does not rotate it.
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"*****")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "*****"))
            .finish()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshTokenRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RefreshTokenResponse {
    Enveloped { data: TokenPair },
    Bare(TokenPair),
}

impl RefreshTokenResponse {
    fn into_tokens(self) -> TokenPair {
        match self {
            Self::Enveloped { data } | Self::Bare(data) => data,
        }
    }
}

/// Exchanges `refresh_token` for a new token pair.
///
/// The call is unauthenticated: no bearer token is attached. Default headers
/// configured on `client`, such as its user agent, are sent.
///
/// # Errors
///
/// - [`RefreshError::Rejected`] on any non-2xx answer (including 401)
/// - [`RefreshError::Network`] when no response is obtained
/// - [`RefreshError::InvalidResponse`] when a 2xx body holds no access token
pub async fn refresh_tokens(
    client: &reqwest::Client,
    base_url: &BaseUrl,
    refresh_token: &str,
) -> Result<TokenPair, RefreshError> {
    let url = base_url.join(REFRESH_TOKEN_PATH);
    tracing::debug!("Refreshing access token at {url}");

    let response = client
        .post(&url)
        .header("Accept", "application/json")
        .json(&RefreshTokenRequest { refresh_token })
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str(&body_text)
            .ok()
            .and_then(|body| message_from_body(&body))
            .unwrap_or(body_text);
        return Err(RefreshError::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    let tokens = serde_json::from_str::<RefreshTokenResponse>(&body_text)
        .map_err(|e| RefreshError::InvalidResponse(e.to_string()))?
        .into_tokens();

    if tokens.access_token.is_empty() {
        return Err(RefreshError::InvalidResponse(
            "empty accessToken".to_string(),
        ));
    }

    Ok(tokens)
}
