//! Trade API Client
//!
//! Creating a request, listing sent/received requests, and the owner's
//! accept/reject plus the requester's cancel. All endpoints require a
//! bearer token.

use reqwest::Client;
use uuid::Uuid;

use crate::client::api::api_error;
use crate::client::config::Config;
use crate::client::token_store::TokenStore;
use crate::shared::error::ClientError;
use crate::shared::models::{CreateTradeRequest, ListTradesResponse, TradeRequest};

/// Trade API client
pub struct TradeApi {
    config: Config,
    tokens: TokenStore,
    client: Client,
}

impl TradeApi {
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

    /// Send a trade request for a post
    pub async fn create(&self, request: &CreateTradeRequest) -> Result<TradeRequest, ClientError> {
        let url = self.config.api_url("/api/trades");
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.bearer()?))
            .json(request)
            .send()
            .await?;
        if response.status().as_u16() == 409 {
            return Err(ClientError::api(409, "a request for this post is already pending"));
        }
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(response.json().await?)
    }

    /// List trade requests the current user has sent
    pub async fn list_sent(&self) -> Result<ListTradesResponse, ClientError> {
        self.list("/api/trades/sent").await
    }

    /// List trade requests received on the current user's posts
    pub async fn list_received(&self) -> Result<ListTradesResponse, ClientError> {
        self.list("/api/trades/received").await
    }

    async fn list(&self, path: &str) -> Result<ListTradesResponse, ClientError> {
        let url = self.config.api_url(path);
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

    /// Accept a received trade request
    pub async fn accept(&self, id: Uuid) -> Result<TradeRequest, ClientError> {
        self.respond(id, "accept").await
    }

    /// Reject a received trade request
    pub async fn reject(&self, id: Uuid) -> Result<TradeRequest, ClientError> {
        self.respond(id, "reject").await
    }

    async fn respond(&self, id: Uuid, action: &str) -> Result<TradeRequest, ClientError> {
        let url = self.config.api_url(&format!("/api/trades/{}/{}", id, action));
        let response = self
            .client
            .put(&url)
            .header("Authorization", format!("Bearer {}", self.bearer()?))
            .send()
            .await?;
        if response.status().as_u16() == 409 {
            return Err(ClientError::api(409, "trade request already responded to"));
        }
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(response.json().await?)
    }

    /// Cancel a pending trade request the current user sent
    pub async fn cancel(&self, id: Uuid) -> Result<(), ClientError> {
        let url = self.config.api_url(&format!("/api/trades/{}", id));
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
