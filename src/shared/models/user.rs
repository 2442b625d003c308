//! User and Authentication Types
//!
//! Account data plus the request/response envelopes for the auth
//! endpoints (password login, signup, OAuth code exchange).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Display name shown on posts and in chat
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
}

/// Authentication response from the server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Opaque bearer token presented on subsequent requests
    pub token: String,
    pub user: UserInfo,
}

/// Password login request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Signup request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// OAuth code-exchange request.
///
/// The provider flow itself happens outside this crate; the backend
/// exchanges the authorization code and answers with the same
/// `AuthResponse` as password login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthLoginRequest {
    /// Provider identifier, e.g. "google"
    pub provider: String,
    /// Authorization code obtained from the provider
    pub code: String,
}
