//! Login, registration, logout and profile.
//!
//! These are the only operations that write a new session into the
//! [`SessionStore`](crate::SessionStore); token refreshes happen inside the
//! [`HttpClient`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::auth::{Session, UserProfile};
use crate::clients::{HttpClient, HttpMethod, HttpRequest};
use crate::services::{fetch_data, send, with_payload, MutationResult, ServiceError};

/// Path of the login endpoint.
pub const LOGIN_PATH: &str = "/api/auth/login";
/// Path of the registration endpoint.
pub const REGISTER_PATH: &str = "/api/auth/register";
/// Path of the logout endpoint.
pub const LOGOUT_PATH: &str = "/api/auth/logout";
/// Path of the current user's profile.
pub const PROFILE_PATH: &str = "/api/auth/me";

#[derive(Serialize)]
struct Credentials<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    email: &'a str,
    password: &'a str,
}

impl fmt::Debug for Credentials<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"*****")
            .finish()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthPayload {
    access_token: String,
    #[serde(default)]
    refresh_token: String,
    user: UserProfile,
}

impl AuthPayload {
    /// Builds the session, refusing one with a missing token.
    fn into_session(self) -> Result<Session, ServiceError> {
        let session = Session::new(self.access_token, self.refresh_token, self.user);
        let missing = if !session.has_access_token() {
            "accessToken"
        } else if !session.has_refresh_token() {
            "refreshToken"
        } else {
            return Ok(session);
        };
        Err(ServiceError::Decode(serde::de::Error::custom(format!(
            "authentication response has no {missing}"
        ))))
    }
}

/// Logs in and stores the new session.
///
/// Returns the logged-in user's profile. On failure the current session is
/// left untouched.
pub async fn login(client: &HttpClient, email: &str, password: &str) -> MutationResult<UserProfile> {
    let credentials = Credentials {
        name: None,
        email,
        password,
    };
    authenticate(client, LOGIN_PATH, &credentials).await.into()
}

/// Creates an account and stores the new session.
pub async fn register(
    client: &HttpClient,
    name: &str,
    email: &str,
    password: &str,
) -> MutationResult<UserProfile> {
    let credentials = Credentials {
        name: Some(name),
        email,
        password,
    };
    authenticate(client, REGISTER_PATH, &credentials).await.into()
}

async fn authenticate(
    client: &HttpClient,
    path: &str,
    credentials: &Credentials<'_>,
) -> Result<UserProfile, ServiceError> {
    let request = with_payload(HttpMethod::Post, path.to_string(), credentials)?
        .unauthenticated()
        .build()?;
    let payload: AuthPayload = fetch_data(client, request).await?;
    let session = payload.into_session()?;

    let user = session.user.clone();
    client.session_store().set_session(session);
    Ok(user)
}

/// Logs out.
///
/// The server is asked to revoke the refresh token, but the local session is
/// cleared whatever it answers. `error` reports a failed revocation.
pub async fn logout(client: &HttpClient) -> MutationResult<()> {
    let store = client.session_store();
    let Some(session) = store.get() else {
        return MutationResult::ok(());
    };

    let body = serde_json::json!({ "refreshToken": session.refresh_token });
    let result = match HttpRequest::builder(HttpMethod::Post, LOGOUT_PATH)
        .body(body)
        .build()
    {
        Ok(request) => send(client, request).await,
        Err(e) => Err(e.into()),
    };

    store.clear();
    result.into()
}

/// Fetches the current user's profile and stores it in the session.
///
/// # Errors
///
/// Returns [`ServiceError`] if the request fails or the payload is not a
/// user profile.
pub async fn profile(client: &HttpClient) -> Result<UserProfile, ServiceError> {
    let request = HttpRequest::builder(HttpMethod::Get, PROFILE_PATH).build()?;
    let user: UserProfile = fetch_data(client, request).await?;
    client.session_store().update_user(user.clone());
    Ok(user)
}
