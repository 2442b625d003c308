//! Conversation Data Structures
//!
//! Direct messaging between two users, usually opened from a post. The
//! backend owns delivery; these types are the REST wire shapes for the
//! conversation endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub sender_id: Uuid,
    pub content: String,
    /// When the message was sent (RFC3339 string)
    pub sent_at: String,
}

impl ChatMessage {
    /// Preview text truncated to `max_len` characters
    pub fn preview(&self, max_len: usize) -> String {
        if self.content.chars().count() <= max_len {
            self.content.clone()
        } else {
            let truncated: String = self.content.chars().take(max_len).collect();
            format!("{}…", truncated)
        }
    }
}

/// A conversation between two users
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: Uuid,
    /// Participant user IDs
    pub participants: Vec<Uuid>,
    /// Display name of the other participant, for chat lists
    pub other_username: Option<String>,
    /// Post this conversation was opened from, when any
    pub post_id: Option<Uuid>,
    /// Last message, for preview
    pub last_message: Option<ChatMessage>,
    pub unread_count: u32,
    /// When the conversation was created (RFC3339 string)
    pub created_at: String,
}

impl Conversation {
    /// Check if a user participates in this conversation
    pub fn has_participant(&self, user_id: Uuid) -> bool {
        self.participants.contains(&user_id)
    }

    /// Get the other participant (conversations are pairwise)
    pub fn other_participant(&self, current_user_id: Uuid) -> Option<Uuid> {
        self.participants
            .iter()
            .find(|&&id| id != current_user_id)
            .copied()
    }
}

/// Request to open (or fetch) a conversation with another user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenConversationRequest {
    pub with_user_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<Uuid>,
}

/// Request to send a message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub content: String,
}

/// Response for listing conversations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListConversationsResponse {
    pub conversations: Vec<Conversation>,
}

/// Response for listing messages in a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMessagesResponse {
    pub messages: Vec<ChatMessage>,
}
