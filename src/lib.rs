//! # Tripkit API Rust Client
//!
//! A typed async client for the Tripkit trip planning API: trips, shared
//! expenses and contributions, balances, and self-learning challenges.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ApiConfig`] and [`ApiConfigBuilder`]
//! - A [`SessionStore`] holding the access token, refresh token and user
//!   profile, persisted through a pluggable [`PersistenceAdapter`]
//! - An authenticated [`HttpClient`] that attaches bearer tokens and
//!   recovers once from an expired access token
//! - Typed service operations in [`services`] over the records in [`models`]
//!
//! ## Quick Start
//!
//! ```rust
//! use tripkit_api::{ApiConfig, BaseUrl, HttpClient, SessionStore};
//!
//! let config = ApiConfig::builder()
//!     .base_url(BaseUrl::new("https://api.tripkit.example").unwrap())
//!     .user_agent_prefix("TripDesk/2.1")
//!     .build()
//!     .unwrap();
//!
//! let store = SessionStore::in_memory();
//! let client = HttpClient::new(config, store.clone()).unwrap();
//! assert!(!store.is_authenticated());
//! # let _ = client;
//! ```
//!
//! ## Logging In
//!
//! ```rust,ignore
//! use tripkit_api::auth::FilePersistence;
//! use tripkit_api::services::{auth, trips, PageParams};
//! use tripkit_api::{ApiConfig, HttpClient, SessionStore};
//!
//! // Restores the session of a previous run, if any
//! let store = SessionStore::new(FilePersistence::in_dir(data_dir));
//! let client = HttpClient::new(ApiConfig::from_env()?, store)?;
//!
//! if !client.session_store().is_authenticated() {
//!     let result = auth::login(&client, "ada@example.com", "secret").await;
//!     if !result.success {
//!         return Err(result.error.unwrap_or_default().into());
//!     }
//! }
//!
//! let page = trips::list(&client, &PageParams::new(1, 20)).await?;
//! ```
//!
//! ## Session Expiry
//!
//! When the API rejects the access token with 401, the client exchanges the
//! refresh token for new tokens and retries the request once. If that is not
//! possible the session is cleared and the call fails with
//! [`HttpError::Unauthorized`]; callers should send the user back to login.
//!
//! ## Design Principles
//!
//! - **No global state**: the session store is constructed and passed explicitly
//! - **Fail-fast validation**: configuration newtypes validate on construction
//! - **Thread-safe**: the client and the store are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod services;

// Re-export public types at crate root for convenience
pub use auth::{
    FilePersistence, MemoryPersistence, PersistenceAdapter, PersistenceError, Session,
    SessionStore, UserProfile,
};
pub use config::{ApiConfig, ApiConfigBuilder, BaseUrl};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

pub use services::{MutationResult, ServiceError};
