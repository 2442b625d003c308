//! Resource API Clients
//!
//! One thin client per backend resource. Each holds its own
//! `reqwest::Client` plus the shared [`Config`](crate::client::Config)
//! and [`TokenStore`](crate::client::TokenStore) handles, and exposes
//! the endpoints as plain async calls.

pub mod categories;
pub mod conversations;
pub mod meetings;
pub mod posts;
pub mod reports;
pub mod trades;

pub use categories::CategoryApi;
pub use conversations::ConversationApi;
pub use meetings::MeetingApi;
pub use posts::PostApi;
pub use reports::ReportApi;
pub use trades::TradeApi;

use crate::shared::error::ClientError;

/// Map a non-success response to an API error, preserving the server's
/// message when one was sent.
pub(crate) async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status();
    let message = response.text().await.unwrap_or_else(|_| status.to_string());
    ClientError::api(status.as_u16(), message)
}
