//! Post API Client
//!
//! Listing and reading posts is public; creating, updating and deleting
//! require the owner's bearer token.

use reqwest::Client;
use uuid::Uuid;

use crate::client::api::api_error;
use crate::client::config::Config;
use crate::client::token_store::TokenStore;
use crate::shared::error::ClientError;
use crate::shared::models::{
    CreatePostRequest, ListPostsResponse, Post, PostQuery, UpdatePostRequest,
};

/// Post API client
pub struct PostApi {
    config: Config,
    tokens: TokenStore,
    client: Client,
}

impl PostApi {
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

    /// List posts, optionally filtered by category, keyword and page
    pub async fn list(&self, query: &PostQuery) -> Result<ListPostsResponse, ClientError> {
        let url = self.config.api_url("/api/posts");
        let response = self.client.get(&url).query(query).send().await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(response.json().await?)
    }

    /// Get a single post
    pub async fn get(&self, id: Uuid) -> Result<Post, ClientError> {
        let url = self.config.api_url(&format!("/api/posts/{}", id));
        let response = self.client.get(&url).send().await?;
        if response.status().as_u16() == 404 {
            return Err(ClientError::api(404, "post not found"));
        }
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(response.json().await?)
    }

    /// List the current user's own posts
    pub async fn list_mine(&self) -> Result<ListPostsResponse, ClientError> {
        let url = self.config.api_url("/api/posts/mine");
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

    /// Create a post
    pub async fn create(&self, request: &CreatePostRequest) -> Result<Post, ClientError> {
        let url = self.config.api_url("/api/posts");
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

    /// Update a post; unset fields are left unchanged
    pub async fn update(&self, id: Uuid, request: &UpdatePostRequest) -> Result<Post, ClientError> {
        let url = self.config.api_url(&format!("/api/posts/{}", id));
        let response = self
            .client
            .put(&url)
            .header("Authorization", format!("Bearer {}", self.bearer()?))
            .json(request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(response.json().await?)
    }

    /// Delete a post
    pub async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        let url = self.config.api_url(&format!("/api/posts/{}", id));
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
