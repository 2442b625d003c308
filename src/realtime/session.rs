//! Notification Session
//!
//! Owns the single broker connection and the single subscription to the
//! per-user notification queue. Constructed once at the application
//! root and passed by handle; every UI surface that wants notifications
//! running calls `connect()`, and the state check makes the repeats
//! free.
//!
//! # Lifecycle
//!
//! ```text
//! Disconnected ──connect()──▶ Connecting ──CONNECTED+SUBSCRIBE──▶ Connected
//!      ▲                          │                                  │
//!      └──────handshake error─────┘            socket close / disconnect()
//!      ▲                                                            │
//!      └────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no automatic retry: a failed handshake reports its error
//! and leaves the session `Disconnected`, from which the next
//! `connect()` runs the full handshake again. The bearer credential is
//! read from the store on every attempt, so a token rotated by a
//! re-login is picked up without restarting the process.

use std::sync::Arc;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::{oneshot, Mutex};
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::client::config::Config;
use crate::client::token_store::TokenStore;
use crate::realtime::stomp::{Command, Frame};
use crate::realtime::{ConnectionState, NotificationSink};
use crate::shared::error::ClientError;
use crate::shared::notification::NotificationEvent;

/// Per-user notification queue. The broker routes it to the
/// authenticated principal; no client-supplied user id is involved.
pub const NOTIFICATION_DESTINATION: &str = "/user/queue/notification";

/// Subscription id for the one subscription this session holds
const SUBSCRIPTION_ID: &str = "notify-0";

/// Bound on the CONNECT/CONNECTED exchange
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Mutable session state behind one lock
struct Inner {
    state: ConnectionState,
    shutdown_tx: Option<oneshot::Sender<()>>,
    /// Bumped on every successful handshake; a finished reader may only
    /// reset state belonging to its own epoch
    epoch: u64,
}

/// The per-process notification session
pub struct NotificationSession {
    config: Config,
    tokens: TokenStore,
    sink: Arc<dyn NotificationSink>,
    inner: Arc<Mutex<Inner>>,
}

impl NotificationSession {
    pub fn new(config: Config, tokens: TokenStore, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            config,
            tokens,
            sink,
            inner: Arc::new(Mutex::new(Inner {
                state: ConnectionState::Disconnected,
                shutdown_tx: None,
                epoch: 0,
            })),
        }
    }

    /// Current connection state
    pub async fn state(&self) -> ConnectionState {
        self.inner.lock().await.state
    }

    /// Establish the connection and the notification subscription.
    ///
    /// Idempotent: when the session is already connected, or an attempt
    /// is in flight, this returns immediately with no side effects. A
    /// handshake failure is terminal for this attempt - the error is
    /// logged and returned, the state goes back to `Disconnected`, and
    /// nothing is retried until the caller invokes `connect()` again.
    pub async fn connect(&self) -> Result<(), ClientError> {
        {
            let mut inner = self.inner.lock().await;
            if inner.state != ConnectionState::Disconnected {
                tracing::debug!(state = ?inner.state, "connect() ignored, session already active");
                return Ok(());
            }
            inner.state = ConnectionState::Connecting;
        }

        match self.handshake().await {
            Ok(stream) => {
                let (shutdown_tx, shutdown_rx) = oneshot::channel();
                let epoch = {
                    let mut inner = self.inner.lock().await;
                    inner.state = ConnectionState::Connected;
                    inner.shutdown_tx = Some(shutdown_tx);
                    inner.epoch += 1;
                    inner.epoch
                };

                let sink = Arc::clone(&self.sink);
                let inner = Arc::clone(&self.inner);
                tokio::spawn(async move {
                    Self::run_reader(stream, sink, shutdown_rx).await;
                    let mut inner = inner.lock().await;
                    if inner.epoch == epoch {
                        inner.state = ConnectionState::Disconnected;
                        inner.shutdown_tx = None;
                    }
                });

                tracing::info!(
                    destination = NOTIFICATION_DESTINATION,
                    "notification session subscribed"
                );
                Ok(())
            }
            Err(e) => {
                self.inner.lock().await.state = ConnectionState::Disconnected;
                tracing::error!("notification handshake failed: {}", e);
                Err(e)
            }
        }
    }

    /// Tear the session down (logout or process shutdown).
    ///
    /// A later `connect()` starts over from the full handshake.
    pub async fn disconnect(&self) {
        let shutdown_tx = {
            let mut inner = self.inner.lock().await;
            inner.state = ConnectionState::Disconnected;
            inner.shutdown_tx.take()
        };
        if let Some(tx) = shutdown_tx {
            let _ = tx.send(());
            tracing::info!("notification session disconnected");
        }
    }

    /// Open the socket, complete the STOMP handshake and subscribe
    async fn handshake(&self) -> Result<WsStream, ClientError> {
        let ws_url = self.config.broker_url();
        // read the credential fresh from storage; a missing token means
        // an unauthenticated connect, which the server governs
        let token = self.tokens.load();
        if token.is_none() {
            tracing::debug!("no stored credential, connecting unauthenticated");
        }

        let mut request = ws_url
            .as_str()
            .into_client_request()
            .map_err(|e| ClientError::handshake(format!("invalid broker URL: {}", e)))?;
        let host = request
            .uri()
            .host()
            .unwrap_or("localhost")
            .to_string();
        if let Some(token) = &token {
            let value = format!("Bearer {}", token)
                .parse()
                .map_err(|_| ClientError::handshake("stored token is not a valid header value"))?;
            request.headers_mut().insert("Authorization", value);
        }

        let (mut stream, _) = connect_async(request)
            .await
            .map_err(|e| ClientError::handshake(format!("WebSocket connect failed: {}", e)))?;

        stream
            .send(Message::Text(
                Frame::connect(&host, token.as_deref()).encode(),
            ))
            .await
            .map_err(|e| ClientError::handshake(format!("CONNECT send failed: {}", e)))?;

        match tokio::time::timeout(CONNECT_TIMEOUT, Self::await_connected(&mut stream)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(e),
            Err(_) => {
                return Err(ClientError::handshake("timed out waiting for CONNECTED"));
            }
        }

        stream
            .send(Message::Text(
                Frame::subscribe(SUBSCRIPTION_ID, NOTIFICATION_DESTINATION).encode(),
            ))
            .await
            .map_err(|e| ClientError::handshake(format!("SUBSCRIBE send failed: {}", e)))?;

        Ok(stream)
    }

    /// Wait for the broker's CONNECTED frame
    async fn await_connected(stream: &mut WsStream) -> Result<(), ClientError> {
        while let Some(msg) = stream.next().await {
            let msg =
                msg.map_err(|e| ClientError::handshake(format!("socket error during handshake: {}", e)))?;
            let Message::Text(text) = msg else { continue };
            if Frame::is_heartbeat(&text) {
                continue;
            }
            let frame =
                Frame::parse(&text).map_err(|e| ClientError::handshake(e.to_string()))?;
            match frame.command {
                Command::Connected => return Ok(()),
                Command::Error => {
                    return Err(ClientError::handshake(format!(
                        "broker refused connection: {}",
                        frame.get_header("message").unwrap_or("no message")
                    )));
                }
                _ => {}
            }
        }
        Err(ClientError::handshake("socket closed before CONNECTED"))
    }

    /// Deliver inbound frames until the socket closes or shutdown is
    /// requested. Messages reach the sink in the order the transport
    /// delivers them.
    async fn run_reader(
        mut stream: WsStream,
        sink: Arc<dyn NotificationSink>,
        mut shutdown_rx: oneshot::Receiver<()>,
    ) {
        loop {
            tokio::select! {
                msg = stream.next() => {
                    match msg {
                        Some(Ok(Message::Text(text))) => Self::handle_frame(&text, sink.as_ref()),
                        Some(Ok(Message::Ping(data))) => {
                            if stream.send(Message::Pong(data)).await.is_err() {
                                tracing::warn!("failed to send pong");
                                break;
                            }
                        }
                        Some(Ok(Message::Close(_))) => {
                            tracing::info!("broker closed the connection");
                            break;
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            tracing::error!("socket error: {}", e);
                            break;
                        }
                        None => {
                            tracing::info!("broker stream ended");
                            break;
                        }
                    }
                }
                _ = &mut shutdown_rx => {
                    let _ = stream.send(Message::Close(None)).await;
                    break;
                }
            }
        }
    }

    /// Handle one inbound text message. Parse failures are isolated:
    /// logged, dropped, and the subscription stays live.
    fn handle_frame(text: &str, sink: &dyn NotificationSink) {
        if Frame::is_heartbeat(text) {
            return;
        }
        let frame = match Frame::parse(text) {
            Ok(frame) => frame,
            Err(e) => {
                tracing::warn!("dropping malformed frame: {}", e);
                return;
            }
        };
        match frame.command {
            Command::Message => match serde_json::from_str::<NotificationEvent>(&frame.body) {
                Ok(event) => sink.notify(&event.display_text()),
                Err(e) => tracing::warn!("dropping malformed notification payload: {}", e),
            },
            Command::Error => tracing::warn!(
                "broker error frame: {}",
                frame.get_header("message").unwrap_or("no message")
            ),
            _ => {}
        }
    }
}
