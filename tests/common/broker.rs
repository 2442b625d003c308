//! In-process mock STOMP broker
//!
//! A tiny WebSocket server that speaks just enough STOMP for the
//! session tests: it answers CONNECT with CONNECTED (or with ERROR when
//! configured to refuse), counts CONNECT and SUBSCRIBE frames, records
//! the CONNECT headers it saw, and pushes MESSAGE frames to every
//! subscribed connection.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::broadcast;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;

/// Shared observation state
#[derive(Default)]
struct Observed {
    connections: AtomicUsize,
    subscriptions: AtomicUsize,
    connect_headers: Mutex<Vec<Vec<(String, String)>>>,
    reject_next: AtomicBool,
}

/// Mock broker handle
pub struct MockBroker {
    addr: SocketAddr,
    observed: Arc<Observed>,
    push_tx: broadcast::Sender<String>,
}

impl MockBroker {
    /// Start a broker that accepts every handshake
    pub async fn start() -> Self {
        Self::start_inner(false).await
    }

    /// Start a broker that refuses the first handshake with an ERROR
    /// frame and accepts every one after it
    pub async fn start_rejecting_first() -> Self {
        Self::start_inner(true).await
    }

    async fn start_inner(reject_first: bool) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let observed = Arc::new(Observed::default());
        observed.reject_next.store(reject_first, Ordering::SeqCst);
        let (push_tx, _) = broadcast::channel(64);

        let accept_observed = Arc::clone(&observed);
        let accept_push = push_tx.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let observed = Arc::clone(&accept_observed);
                let push_rx = accept_push.subscribe();
                tokio::spawn(handle_connection(stream, observed, push_rx));
            }
        });

        Self {
            addr,
            observed,
            push_tx,
        }
    }

    /// WebSocket URL of the broker
    pub fn url(&self) -> String {
        format!("ws://{}", self.addr)
    }

    /// CONNECT frames answered with CONNECTED so far
    pub fn connections(&self) -> usize {
        self.observed.connections.load(Ordering::SeqCst)
    }

    /// SUBSCRIBE frames seen so far
    pub fn subscriptions(&self) -> usize {
        self.observed.subscriptions.load(Ordering::SeqCst)
    }

    /// Header value from the most recent CONNECT frame
    pub fn connect_header(&self, name: &str) -> Option<String> {
        let frames = self.observed.connect_headers.lock().unwrap();
        let headers = frames.last()?;
        headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    /// Push a MESSAGE frame with the given body to subscribed clients
    pub fn push(&self, body: &str) {
        let _ = self.push_tx.send(body.to_string());
    }

    /// Wait until at least `count` subscriptions exist
    pub async fn wait_for_subscriptions(&self, count: usize) {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
        while self.subscriptions() < count {
            if tokio::time::Instant::now() > deadline {
                panic!("no subscription within 2s");
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }
}

/// Split an inbound frame into command and headers; body is irrelevant
/// for everything the mock broker reacts to
fn parse_frame(text: &str) -> (String, Vec<(String, String)>) {
    let text = text.strip_suffix('\0').unwrap_or(text);
    let head = text.split("\n\n").next().unwrap_or("");
    let mut lines = head.lines();
    let command = lines.next().unwrap_or("").to_string();
    let headers = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(n, v)| (n.to_string(), v.to_string()))
        .collect();
    (command, headers)
}

async fn handle_connection(
    stream: TcpStream,
    observed: Arc<Observed>,
    mut push_rx: broadcast::Receiver<String>,
) {
    let Ok(mut ws) = accept_async(stream).await else {
        return;
    };
    let mut subscribed = false;
    let mut message_id = 0u64;

    loop {
        tokio::select! {
            msg = ws.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        let (command, headers) = parse_frame(&text);
                        match command.as_str() {
                            "CONNECT" => {
                                observed.connect_headers.lock().unwrap().push(headers);
                                if observed.reject_next.swap(false, Ordering::SeqCst) {
                                    let _ = ws
                                        .send(Message::Text(
                                            "ERROR\nmessage:forbidden\n\n\0".to_string(),
                                        ))
                                        .await;
                                    let _ = ws.close(None).await;
                                    return;
                                }
                                observed.connections.fetch_add(1, Ordering::SeqCst);
                                let _ = ws
                                    .send(Message::Text("CONNECTED\nversion:1.2\n\n\0".to_string()))
                                    .await;
                            }
                            "SUBSCRIBE" => {
                                observed.subscriptions.fetch_add(1, Ordering::SeqCst);
                                subscribed = true;
                            }
                            _ => {}
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => return,
                    Some(Err(_)) => return,
                    Some(Ok(_)) => {}
                }
            }
            body = push_rx.recv(), if subscribed => {
                let Ok(body) = body else { return };
                message_id += 1;
                let frame = format!(
                    "MESSAGE\ndestination:/user/queue/notification\nsubscription:notify-0\nmessage-id:{}\n\n{}\0",
                    message_id, body
                );
                if ws.send(Message::Text(frame)).await.is_err() {
                    return;
                }
            }
        }
    }
}
