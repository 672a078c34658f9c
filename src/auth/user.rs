//! Profile of the authenticated user.

use serde::{Deserialize, Serialize};

/// The user a session belongs to.
///
/// The profile is captured at login and kept unchanged across token
/// refreshes; it is only replaced by a login or an explicit profile fetch.
///
/// # Example
///
/// ```rust
/// use tripkit_api::UserProfile;
///
/// let user: UserProfile = serde_json::from_str(
///     r#"{"id": 42, "name": "Ada", "email": "ada@example.com", "avatar": null}"#,
/// ).unwrap();
///
/// assert_eq!(user.id, "42");
/// assert!(user.avatar.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Server-assigned user identifier.
    #[serde(deserialize_with = "crate::models::deserialize_id")]
    pub id: String,

    /// Display name.
    pub name: String,

    /// Email address used to log in.
    pub email: String,

    /// Avatar image URL, if the user uploaded one.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl UserProfile {
    /// Creates a profile without an avatar.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            avatar: None,
        }
    }

    /// Sets the avatar URL.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_accepts_string_id() {
        let user: UserProfile = serde_json::from_str(
            r#"{"id":"u1","name":"Ada","email":"ada@example.com","avatar":"https://cdn/a.png"}"#,
        )
        .unwrap();

        assert_eq!(user.id, "u1");
        assert_eq!(user.avatar.as_deref(), Some("https://cdn/a.png"));
    }

    #[test]
    fn test_profile_missing_avatar_defaults_to_none() {
        let user: UserProfile =
            serde_json::from_str(r#"{"id":7,"name":"Grace","email":"g@example.com"}"#).unwrap();

        assert_eq!(user, UserProfile::new("7", "Grace", "g@example.com"));
    }

    #[test]
    fn test_profile_serializes_avatar_as_null() {
        let json = serde_json::to_value(UserProfile::new("u1", "Ada", "ada@example.com")).unwrap();
        assert!(json["avatar"].is_null());
        assert_eq!(json["id"], "u1");
    }
}
