//! Meeting Data Structures
//!
//! Once a trade request is accepted, the two users schedule a hand-over
//! meeting: a place, a time and an optional note.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a meeting
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeetingStatus {
    /// Proposed by one side, not yet confirmed
    Proposed,
    Confirmed,
    Completed,
    Cancelled,
}

/// An agreed hand-over appointment for an accepted trade
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: Uuid,
    pub trade_id: Uuid,
    /// Free-form meeting place
    pub location: String,
    /// Scheduled time (RFC3339 string)
    pub scheduled_at: String,
    pub status: MeetingStatus,
    pub note: Option<String>,
}

/// Request to schedule a meeting for an accepted trade
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMeetingRequest {
    pub trade_id: Uuid,
    pub location: String,
    pub scheduled_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Response for listing the current user's meetings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeetingsResponse {
    pub meetings: Vec<Meeting>,
}
