//! Session state and token handling.
//!
//! # Overview
//!
//! - [`Session`]: access token, refresh token and user profile, always together
//! - [`UserProfile`]: the logged-in user
//! - [`SessionStore`]: shared holder of the current session, persisted on every change
//! - [`PersistenceAdapter`]: where the store keeps its record
//!   ([`MemoryPersistence`], [`FilePersistence`])
//! - [`refresh_tokens`]: exchange of a refresh token for new tokens
//!
//! # Example
//!
//! ```rust,no_run
//! use tripkit_api::auth::{FilePersistence, SessionStore};
//!
//! // Restores the session saved by a previous run, if any
//! let store = SessionStore::new(FilePersistence::in_dir("/var/lib/tripkit"));
//!
//! if let Some(session) = store.get() {
//!     println!("Logged in as {}", session.user.name);
//! }
//! ```

pub mod persistence;
mod refresh;
pub mod session;
mod store;
mod user;

pub use persistence::{
    FilePersistence, MemoryPersistence, PersistenceAdapter, PersistenceError, SESSION_STORAGE_KEY,
};
pub use refresh::{refresh_tokens, RefreshError, TokenPair, REFRESH_TOKEN_PATH};
pub use session::Session;
pub use store::SessionStore;
pub use user::UserProfile;
