//! Trade Request Data Structures
//!
//! A trade request is an offer from one user to exchange for another
//! user's post. The post owner accepts or rejects; the requester can
//! cancel a pending request.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserInfo;

/// Lifecycle state of a trade request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeStatus {
    /// Waiting for the post owner to respond
    Pending,
    Accepted,
    Rejected,
    /// Withdrawn by the requester
    Cancelled,
}

/// An offer to trade for a post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeRequest {
    pub id: Uuid,
    pub post_id: Uuid,
    pub requester: UserInfo,
    pub status: TradeStatus,
    /// What the requester offers in exchange
    pub offer: String,
    /// When the request was created (RFC3339 string)
    pub created_at: String,
}

impl TradeRequest {
    /// Whether the post owner can still respond to this request
    pub fn is_pending(&self) -> bool {
        self.status == TradeStatus::Pending
    }
}

/// Request to create a trade request for a post
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTradeRequest {
    pub post_id: Uuid,
    pub offer: String,
}

/// Response for listing trade requests (sent or received)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTradesResponse {
    pub trades: Vec<TradeRequest>,
}
