//! Post Data Structures
//!
//! A post is a listed item offered for exchange: title, description,
//! category, photos and a free-form pickup area. Listing endpoints are
//! public; mutations require the owner's bearer token.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserInfo;

/// Lifecycle state of a post
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatus {
    /// Visible and open for trade requests
    Active,
    /// A trade was completed; kept for history
    Traded,
    /// Hidden by the owner or by moderation
    Hidden,
}

/// A listed item offered for exchange
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category_id: Uuid,
    pub author: UserInfo,
    pub status: PostStatus,
    /// Photo URLs, already uploaded and hosted by the backend
    pub image_urls: Vec<String>,
    /// Free-form pickup area, e.g. "Quận 1, TP.HCM"
    pub area: Option<String>,
    /// When the post was created (RFC3339 string)
    pub created_at: String,
}

impl Post {
    /// Whether trade requests can still be sent for this post
    pub fn is_open(&self) -> bool {
        self.status == PostStatus::Active
    }
}

/// Request to create a post
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub description: String,
    pub category_id: Uuid,
    pub image_urls: Vec<String>,
    pub area: Option<String>,
}

/// Request to update a post; unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
}

/// Query parameters for the post listing endpoint
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

/// Response for listing posts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsResponse {
    pub posts: Vec<Post>,
    /// Total matching posts across all pages
    pub total: u64,
}
