//! Category API Client

use reqwest::Client;
use uuid::Uuid;

use crate::client::api::api_error;
use crate::client::config::Config;
use crate::shared::error::ClientError;
use crate::shared::models::{Category, ListCategoriesResponse};

/// Category API client. Category endpoints are public.
pub struct CategoryApi {
    config: Config,
    client: Client,
}

impl CategoryApi {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// List all categories
    pub async fn list(&self) -> Result<ListCategoriesResponse, ClientError> {
        let url = self.config.api_url("/api/categories");
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(response.json().await?)
    }

    /// Get a single category
    pub async fn get(&self, id: Uuid) -> Result<Category, ClientError> {
        let url = self.config.api_url(&format!("/api/categories/{}", id));
        let response = self.client.get(&url).send().await?;
        if response.status().as_u16() == 404 {
            return Err(ClientError::api(404, "category not found"));
        }
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(response.json().await?)
    }
}
