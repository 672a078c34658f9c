//! The authenticated session triple.
//!
//! A [`Session`] always carries an access token, a refresh token and the
//! user profile together. The [`SessionStore`](crate::auth::SessionStore)
//! holds an `Option<Session>`, so "logged out" is `None` and a partially
//! populated session cannot exist.

use std::fmt;

use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::UserProfile;

/// Access token, refresh token and user profile of a logged-in user.
///
/// Serializes to the persisted record layout:
/// `{"accessToken": "...", "refreshToken": "...", "user": {...}}`.
///
/// The `Debug` output masks both tokens.
///
/// # Example
///
/// ```rust
/// use tripkit_api::{Session, UserProfile};
///
/// let session = Session::new("A1", "R1", UserProfile::new("u1", "Ada", "ada@example.com"));
///
/// assert!(session.has_refresh_token());
/// assert!(!format!("{session:?}").contains("A1"));
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Short-lived bearer credential.
    pub access_token: String,

    /// Long-lived credential used only to mint new access tokens.
    pub refresh_token: String,

    /// The user this session belongs to.
    pub user: UserProfile,
}

#[derive(Deserialize)]
struct ExpiryClaim {
    exp: Option<i64>,
}

impl Session {
    /// Creates a session from its three parts.
    #[must_use]
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        user: UserProfile,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            user,
        }
    }

    /// Returns `true` if there is a non-empty access token to send.
    #[must_use]
    pub fn has_access_token(&self) -> bool {
        !self.access_token.is_empty()
    }

    /// Returns `true` if there is a non-empty refresh token to exchange.
    #[must_use]
    pub fn has_refresh_token(&self) -> bool {
        !self.refresh_token.is_empty()
    }

    /// Returns the `exp` claim of the access token, if it is a JWT carrying one.
    ///
    /// The token signature is not verified. The value is informational: the
    /// client refreshes when the API answers 401, not ahead of time.
    #[must_use]
    pub fn access_token_expires_at(&self) -> Option<DateTime<Utc>> {
        let header = jsonwebtoken::decode_header(&self.access_token).ok()?;

        let mut validation = Validation::new(header.alg);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let data = jsonwebtoken::decode::<ExpiryClaim>(
            &self.access_token,
            &DecodingKey::from_secret(&[]),
            &validation,
        )
        .ok()?;

        DateTime::from_timestamp(data.claims.exp?, 0)
    }

    /// Returns `true` if the access token carries an `exp` claim in the past.
    ///
    /// Opaque tokens are never considered expired.
    #[must_use]
    pub fn access_token_expired(&self) -> bool {
        self.access_token_expires_at()
            .is_some_and(|expires| Utc::now() >= expires)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"*****")
            .field("refresh_token", &"*****")
            .field("user", &self.user)
            .finish()
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct Claims {
        sub: String,
        exp: i64,
    }

    fn jwt_expiring_at(exp: DateTime<Utc>) -> String {
        let claims = Claims {
            sub: "u1".to_string(),
            exp: exp.timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"server-side-secret"),
        )
        .unwrap()
    }

    fn user() -> UserProfile {
        UserProfile::new("u1", "Ada", "ada@example.com")
    }

    #[test]
    fn test_session_serializes_to_persisted_layout() {
        let session = Session::new("A1", "R1", user());
        let json = serde_json::to_value(&session).unwrap();

        assert_eq!(json["accessToken"], "A1");
        assert_eq!(json["refreshToken"], "R1");
        assert_eq!(json["user"]["email"], "ada@example.com");
    }

    #[test]
    fn test_debug_masks_tokens() {
        let session = Session::new("secret-access", "secret-refresh", user());
        let debug = format!("{session:?}");

        assert!(!debug.contains("secret-access"));
        assert!(!debug.contains("secret-refresh"));
        assert!(debug.contains("Ada"));
    }

    #[test]
    fn test_empty_tokens_count_as_absent() {
        let session = Session::new("", "", user());
        assert!(!session.has_access_token());
        assert!(!session.has_refresh_token());
    }

    #[test]
    fn test_expiry_decoded_from_jwt() {
        let exp = Utc::now() + Duration::minutes(15);
        let session = Session::new(jwt_expiring_at(exp), "R1", user());

        let decoded = session.access_token_expires_at().unwrap();
        assert_eq!(decoded.timestamp(), exp.timestamp());
        assert!(!session.access_token_expired());
    }

    #[test]
    fn test_expired_jwt_detected() {
        let session = Session::new(jwt_expiring_at(Utc::now() - Duration::hours(1)), "R1", user());
        assert!(session.access_token_expired());
    }

    #[test]
    fn test_opaque_token_has_no_expiry() {
        let session = Session::new("opaque-token", "R1", user());
        assert!(session.access_token_expires_at().is_none());
        assert!(!session.access_token_expired());
    }
}
