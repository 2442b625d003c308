//! Conversation API Client
//!
//! REST side of direct messaging: list conversations, open one with
//! another user, read and send messages. Real-time delivery of new
//! messages is the broker's job, not this wrapper's.

use reqwest::Client;
use uuid::Uuid;

use crate::client::api::api_error;
use crate::client::config::Config;
use crate::client::token_store::TokenStore;
use crate::shared::error::ClientError;
use crate::shared::models::{
    ChatMessage, Conversation, ListConversationsResponse, ListMessagesResponse,
    OpenConversationRequest, SendMessageRequest,
};

/// Conversation API client
pub struct ConversationApi {
    config: Config,
    tokens: TokenStore,
    client: Client,
}

impl ConversationApi {
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

    /// List the current user's conversations
    pub async fn list(&self) -> Result<ListConversationsResponse, ClientError> {
        let url = self.config.api_url("/api/conversations");
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

    /// Open (or fetch the existing) conversation with another user
    pub async fn open(&self, request: &OpenConversationRequest) -> Result<Conversation, ClientError> {
        let url = self.config.api_url("/api/conversations");
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

    /// List messages in a conversation
    pub async fn messages(&self, conversation_id: Uuid) -> Result<ListMessagesResponse, ClientError> {
        let url = self
            .config
            .api_url(&format!("/api/conversations/{}/messages", conversation_id));
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

    /// Send a message in a conversation
    pub async fn send(
        &self,
        conversation_id: Uuid,
        content: &str,
    ) -> Result<ChatMessage, ClientError> {
        let url = self
            .config
            .api_url(&format!("/api/conversations/{}/messages", conversation_id));
        let request = SendMessageRequest {
            content: content.to_string(),
        };
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.bearer()?))
            .json(&request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(response.json().await?)
    }
}
