/**
 * Notification Listener Entry Point
 *
 * Small composition root for the real-time layer: resolve the endpoint
 * configuration, optionally log in with credentials from the
 * environment, connect the notification session and print every
 * delivered notification until interrupted.
 */

use std::sync::Arc;

use traodoido::client::{AuthApi, Config, TokenStore};
use traodoido::realtime::NotificationSession;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = Config::from_env();
    let tokens = TokenStore::new()?;

    // Optional password login; otherwise any stored credential is used
    if let (Ok(username), Ok(password)) = (
        std::env::var("TRAODOIDO_USERNAME"),
        std::env::var("TRAODOIDO_PASSWORD"),
    ) {
        let auth = AuthApi::new(config.clone(), tokens.clone());
        let me = auth.login(&username, &password).await?;
        tracing::info!("logged in as {}", me.user.username);
    }

    let session = NotificationSession::new(
        config,
        tokens,
        Arc::new(|text: &str| {
            println!("[{}] 🔔 {}", chrono::Local::now().format("%H:%M:%S"), text)
        }),
    );
    session.connect().await?;

    tracing::info!("listening for notifications, press Ctrl-C to exit");
    tokio::signal::ctrl_c().await?;

    session.disconnect().await;
    Ok(())
}
