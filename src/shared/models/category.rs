//! Category Data Structures

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A post category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    /// Optional icon identifier used by presentation layers
    pub icon: Option<String>,
}

/// Response for listing categories
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCategoriesResponse {
    pub categories: Vec<Category>,
}
