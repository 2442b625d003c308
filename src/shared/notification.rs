//! Push-Notification Payload
//!
//! The broker delivers user notifications as small JSON objects on the
//! per-user queue. Both fields are optional on the wire and unknown
//! fields are ignored, so a malformed or half-filled payload never takes
//! the subscription down.

use serde::{Deserialize, Serialize};

/// Fallback phrase when a notification only names the requester.
const TRADE_REQUEST_PHRASE: &str = "sent you a new trade request";

/// Fallback when the payload carries nothing displayable.
const GENERIC_PHRASE: &str = "You have a new notification";

/// A notification pushed on the per-user queue
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationEvent {
    /// Ready-to-display notification text
    pub notify_content: Option<String>,
    /// Display name of the user who triggered the notification
    pub requester_name: Option<String>,
}

impl NotificationEvent {
    /// Create an event carrying explicit display text
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            notify_content: Some(content.into()),
            requester_name: None,
        }
    }

    /// Derive the human-readable string handed to the presentation sink.
    ///
    /// Prefers the explicit content field; otherwise synthesizes a
    /// trade-request phrase from the requester name; otherwise a generic
    /// fallback.
    pub fn display_text(&self) -> String {
        if let Some(content) = &self.notify_content {
            if !content.is_empty() {
                return content.clone();
            }
        }
        match &self.requester_name {
            Some(name) if !name.is_empty() => format!("{} {}", name, TRADE_REQUEST_PHRASE),
            _ => GENERIC_PHRASE.to_string(),
        }
    }
}
