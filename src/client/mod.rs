//! HTTP Boundary Layer
//!
//! Thin wrappers around the backend REST endpoints plus the two handles
//! they share: endpoint configuration and the persistent bearer
//! credential. The wrappers impose no business rules; every call is
//! plain request/response and failures map onto
//! `shared::error::ClientError` with the server's status and message
//! preserved.

/// Endpoint configuration
pub mod config;

/// Persistent bearer-credential storage
pub mod token_store;

/// Authentication endpoints
pub mod auth;

/// Resource endpoints (posts, categories, trades, meetings, reports,
/// conversations)
pub mod api;

pub use auth::AuthApi;
pub use config::Config;
pub use token_store::TokenStore;
