//! Authentication API Client
//!
//! Wrappers for the auth endpoints: password login, signup, OAuth code
//! exchange and current-user lookup. Successful logins persist the
//! returned bearer token in the [`TokenStore`]; logout removes it.
//!
//! The OAuth browser flow itself is not this crate's concern - callers
//! obtain an authorization code however they like and exchange it here.

use reqwest::Client;

use crate::client::api::api_error;
use crate::client::config::Config;
use crate::client::token_store::TokenStore;
use crate::shared::error::ClientError;
use crate::shared::models::{
    AuthResponse, LoginRequest, OAuthLoginRequest, SignupRequest, UserInfo,
};

/// Authentication API client
pub struct AuthApi {
    config: Config,
    tokens: TokenStore,
    client: Client,
}

impl AuthApi {
    pub fn new(config: Config, tokens: TokenStore) -> Self {
        Self {
            config,
            tokens,
            client: Client::new(),
        }
    }

    /// Log in with username and password
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ClientError> {
        let url = self.config.api_url("/api/auth/login");
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self.client.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let auth: AuthResponse = response.json().await?;
        self.tokens.save(&auth.token)?;
        Ok(auth)
    }

    /// Sign up a new account; logs the new user in on success
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ClientError> {
        let url = self.config.api_url("/api/auth/signup");
        let request = SignupRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self.client.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let auth: AuthResponse = response.json().await?;
        self.tokens.save(&auth.token)?;
        Ok(auth)
    }

    /// Exchange an OAuth authorization code for a session
    pub async fn oauth_login(&self, provider: &str, code: &str) -> Result<AuthResponse, ClientError> {
        let url = self.config.api_url("/api/auth/oauth");
        let request = OAuthLoginRequest {
            provider: provider.to_string(),
            code: code.to_string(),
        };

        let response = self.client.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let auth: AuthResponse = response.json().await?;
        self.tokens.save(&auth.token)?;
        Ok(auth)
    }

    /// Get the current user's info
    pub async fn me(&self) -> Result<UserInfo, ClientError> {
        let url = self.config.api_url("/api/auth/me");
        let token = self.tokens.load().ok_or(ClientError::NotAuthenticated)?;

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        Ok(response.json().await?)
    }

    /// Log out: remove the stored credential.
    ///
    /// A live [`NotificationSession`](crate::realtime::NotificationSession)
    /// is torn down separately by its `disconnect()`; the composition
    /// root owns both handles.
    pub fn logout(&self) -> Result<(), ClientError> {
        self.tokens.clear()
    }
}
