//! Meeting API Client
//!
//! Scheduling and managing hand-over meetings for accepted trades. All
//! endpoints require a bearer token.

use reqwest::Client;
use uuid::Uuid;

use crate::client::api::api_error;
use crate::client::config::Config;
use crate::client::token_store::TokenStore;
use crate::shared::error::ClientError;
use crate::shared::models::{ListMeetingsResponse, Meeting, ScheduleMeetingRequest};

/// Meeting API client
pub struct MeetingApi {
    config: Config,
    tokens: TokenStore,
    client: Client,
}

impl MeetingApi {
    pub fn new(config: Config, tokens: TokenStore) -> Self {
        Self {
            config,
            tokens,
            client: Client::new(),
        }
    }

    fn bearer(&self) -> Result<String, ClientError> {
        self.tokens.load().ok_or(ClientError::NotAuthenticated)
    }

    /// Schedule a meeting for an accepted trade
    pub async fn schedule(&self, request: &ScheduleMeetingRequest) -> Result<Meeting, ClientError> {
        let url = self.config.api_url("/api/meetings");
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.bearer()?))
            .json(request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(response.json().await?)
    }

    /// List the current user's meetings
    pub async fn list(&self) -> Result<ListMeetingsResponse, ClientError> {
        let url = self.config.api_url("/api/meetings");
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.bearer()?))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(response.json().await?)
    }

    /// Confirm a proposed meeting
    pub async fn confirm(&self, id: Uuid) -> Result<Meeting, ClientError> {
        let url = self.config.api_url(&format!("/api/meetings/{}/confirm", id));
        let response = self
            .client
            .put(&url)
            .header("Authorization", format!("Bearer {}", self.bearer()?))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(response.json().await?)
    }

    /// Cancel a meeting
    pub async fn cancel(&self, id: Uuid) -> Result<(), ClientError> {
        let url = self.config.api_url(&format!("/api/meetings/{}", id));
        let response = self
            .client
            .delete(&url)
            .header("Authorization", format!("Bearer {}", self.bearer()?))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(())
    }
}
