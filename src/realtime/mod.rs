//! Real-time Notification Session
//!
//! One persistent connection to the backend's message broker, carrying
//! one subscription to the per-user notification queue:
//!
//! ```text
//! NotificationSession
//!     ├── WebSocket connection (tokio-tungstenite)
//!     ├── STOMP client framing (CONNECT / SUBSCRIBE / MESSAGE)
//!     ├── Bearer credential read fresh from the TokenStore per attempt
//!     └── Reader task delivering to the NotificationSink in transport order
//! ```
//!
//! `connect()` is idempotent: however many UI surfaces ask for a
//! connection, at most one socket and one subscription exist. There is
//! no automatic reconnect; a failed attempt leaves the session
//! `Disconnected` and callers decide when to try again.

/// STOMP client framing
pub mod stomp;

/// The notification session itself
pub mod session;

pub use session::{NotificationSession, NOTIFICATION_DESTINATION};

/// Connection state of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Not connected.
    Disconnected,
    /// Handshake in flight.
    Connecting,
    /// Connected and subscribed to the notification queue.
    Connected,
}

impl Default for ConnectionState {
    fn default() -> Self {
        Self::Disconnected
    }
}

/// Presentation sink receiving delivered notifications.
///
/// The session calls this exactly once per valid inbound message, in
/// transport order. Rendering (toast, list, stdout) is the caller's
/// concern.
pub trait NotificationSink: Send + Sync {
    /// Deliver one human-readable notification to the user
    fn notify(&self, text: &str);
}

impl<F> NotificationSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn notify(&self, text: &str) {
        self(text)
    }
}
