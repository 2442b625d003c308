//! Report Data Structures
//!
//! Abuse reports against a post or a user. Handled entirely by backend
//! moderation; the client only files them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Why the report was filed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportReason {
    Spam,
    Scam,
    Inappropriate,
    Other,
}

/// A filed report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: Uuid,
    pub reason: ReportReason,
    pub detail: Option<String>,
    pub reported_post_id: Option<Uuid>,
    pub reported_user_id: Option<Uuid>,
    /// When the report was filed (RFC3339 string)
    pub created_at: String,
}

/// Request to file a report; exactly one target should be set
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
    pub reason: ReportReason,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reported_post_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reported_user_id: Option<Uuid>,
}

impl CreateReportRequest {
    /// File a report against a post
    pub fn against_post(post_id: Uuid, reason: ReportReason, detail: Option<String>) -> Self {
        Self {
            reason,
            detail,
            reported_post_id: Some(post_id),
            reported_user_id: None,
        }
    }

    /// File a report against a user
    pub fn against_user(user_id: Uuid, reason: ReportReason, detail: Option<String>) -> Self {
        Self {
            reason,
            detail,
            reported_post_id: None,
            reported_user_id: Some(user_id),
        }
    }
}
