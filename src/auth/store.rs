//! The process-wide holder of the current session.
//!
//! [`SessionStore`] is the single source of truth for who is logged in. It is
//! a cheap, cloneable handle: clone it into the HTTP client and anywhere else
//! that needs to read or reset the session.

use std::sync::{Arc, PoisonError, RwLock};

use crate::auth::persistence::{MemoryPersistence, PersistenceAdapter};
use crate::auth::{Session, UserProfile};

/// Shared, persisted session state.
///
/// Reads never block on I/O and never fail. Every mutation replaces the whole
/// session under a write lock and then writes it through the
/// [`PersistenceAdapter`] before releasing the lock, so the persisted record
/// always matches the last mutation. Persistence failures are logged and do
/// not fail the mutation.
///
/// # Example
///
/// ```rust
/// use tripkit_api::{SessionStore, UserProfile};
///
/// let store = SessionStore::in_memory();
/// assert!(store.get().is_none());
///
/// store.set("A1", "R1", UserProfile::new("u1", "Ada", "ada@example.com"));
/// assert_eq!(store.get().unwrap().access_token, "A1");
///
/// store.clear();
/// assert!(store.get().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct SessionStore {
    inner: Arc<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    session: RwLock<Option<Session>>,
    persistence: Box<dyn PersistenceAdapter>,
}

// Verify SessionStore is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SessionStore>();
};

impl SessionStore {
    /// Creates a store backed by `persistence`, rehydrating any stored session.
    ///
    /// A record that cannot be read is logged and the store starts logged out.
    pub fn new(persistence: impl PersistenceAdapter + 'static) -> Self {
        let session = match persistence.load() {
            Ok(Some(session)) => {
                if session.access_token_expired() {
                    tracing::debug!(
                        "Restored session for user {} has an expired access token; it will be refreshed on first use",
                        session.user.id
                    );
                } else {
                    tracing::debug!("Restored session for user {}", session.user.id);
                }
                Some(session)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Ignoring unreadable persisted session: {e}");
                None
            }
        };

        Self {
            inner: Arc::new(StoreInner {
                session: RwLock::new(session),
                persistence: Box::new(persistence),
            }),
        }
    }

    /// Creates an empty store that persists to memory only.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryPersistence::new())
    }

    /// Returns a copy of the current session, or `None` when logged out.
    #[must_use]
    pub fn get(&self) -> Option<Session> {
        self.inner
            .session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns `true` if a session is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Replaces the session with the given tokens and user, and persists it.
    pub fn set(
        &self,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        user: UserProfile,
    ) {
        self.set_session(Session::new(access_token, refresh_token, user));
    }

    /// Replaces the session and persists it.
    pub fn set_session(&self, session: Session) {
        let mut guard = self.write();
        tracing::info!("Session established for user {}", session.user.id);
        self.persist(&session);
        *guard = Some(session);
    }

    /// Empties the session and removes the persisted record.
    ///
    /// Clearing an empty store is a no-op.
    pub fn clear(&self) {
        let mut guard = self.write();
        self.clear_locked(&mut guard);
    }

    /// Replaces the user profile of the current session, keeping its tokens.
    ///
    /// Returns `false` and changes nothing when logged out.
    pub fn update_user(&self, user: UserProfile) -> bool {
        let mut guard = self.write();
        let Some(current) = guard.as_ref() else {
            return false;
        };
        let updated = Session {
            user,
            ..current.clone()
        };
        self.persist(&updated);
        *guard = Some(updated);
        true
    }

    /// Swaps in refreshed tokens while keeping the existing user profile.
    ///
    /// The tokens are applied only if the session still carries
    /// `spent_refresh_token`, the token that was exchanged. `refresh_token` of
    /// `None` keeps it. Returns the new session, or `None` if the store was
    /// cleared or replaced while the refresh was in flight.
    pub(crate) fn replace_tokens(
        &self,
        spent_refresh_token: &str,
        access_token: String,
        refresh_token: Option<String>,
    ) -> Option<Session> {
        let mut guard = self.write();
        let current = guard
            .as_ref()
            .filter(|session| session.refresh_token == spent_refresh_token)?;
        let updated = Session {
            access_token,
            refresh_token: refresh_token.unwrap_or_else(|| current.refresh_token.clone()),
            user: current.user.clone(),
        };
        self.persist(&updated);
        *guard = Some(updated.clone());
        Some(updated)
    }

    /// Clears the session only if it still carries `access_token`.
    ///
    /// Keeps a login that happened while a failing request was in flight.
    pub(crate) fn clear_if_current(&self, access_token: &str) {
        self.clear_if(|session| session.access_token == access_token);
    }

    /// Clears the session only if it still carries `refresh_token`.
    pub(crate) fn clear_if_refresh_token(&self, refresh_token: &str) {
        self.clear_if(|session| session.refresh_token == refresh_token);
    }

    fn clear_if(&self, matches: impl FnOnce(&Session) -> bool) {
        let mut guard = self.write();
        if guard.as_ref().is_some_and(matches) {
            self.clear_locked(&mut guard);
        }
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<Session>> {
        self.inner
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn clear_locked(&self, slot: &mut Option<Session>) {
        if let Some(previous) = slot.take() {
            tracing::info!("Session cleared for user {}", previous.user.id);
            if let Err(e) = self.inner.persistence.clear() {
                tracing::warn!("Failed to remove persisted session: {e}");
            }
        }
    }

    fn persist(&self, session: &Session) {
        if let Err(e) = self.inner.persistence.save(session) {
            tracing::warn!("Failed to persist session: {e}");
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::in_memory()
    }
}
