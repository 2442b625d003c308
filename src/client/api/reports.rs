//! Report API Client

use reqwest::Client;

use crate::client::api::api_error;
use crate::client::config::Config;
use crate::client::token_store::TokenStore;
use crate::shared::error::ClientError;
use crate::shared::models::{CreateReportRequest, Report};

/// Report API client
pub struct ReportApi {
    config: Config,
    tokens: TokenStore,
    client: Client,
}

impl ReportApi {
    pub fn new(config: Config, tokens: TokenStore) -> Self {
        Self {
            config,
            tokens,
            client: Client::new(),
        }
    }

    /// File a report against a post or user
    pub async fn create(&self, request: &CreateReportRequest) -> Result<Report, ClientError> {
        let url = self.config.api_url("/api/reports");
        let token = self.tokens.load().ok_or(ClientError::NotAuthenticated)?;

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(response.json().await?)
    }
}
