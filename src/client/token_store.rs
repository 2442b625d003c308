//! Persistent Bearer-Credential Storage
//!
//! The bearer token lives in a small JSON file under the platform data
//! directory, always under the same file name. It is read fresh on every
//! use - never cached in memory - so a token rotated by a re-login is
//! picked up by the next connect attempt or request.
//!
//! A missing or unreadable credential is not an error at this layer;
//! callers decide whether to proceed unauthenticated.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::shared::error::ClientError;

/// Fixed credential file name inside the data directory
const TOKEN_FILE: &str = "token.json";

/// Application directory under the platform data dir
const APP_DIR: &str = "traodoido";

/// On-disk credential shape
#[derive(Debug, Serialize, Deserialize)]
struct StoredToken {
    token: String,
}

/// File-backed bearer-credential store
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Create a store rooted at the platform data directory
    pub fn new() -> Result<Self, ClientError> {
        let base = dirs::data_dir()
            .ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::NotFound, "no platform data directory")
            })?
            .join(APP_DIR);
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(TOKEN_FILE),
        })
    }

    /// Create a store at an explicit file path
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the stored token, if any.
    ///
    /// Any failure - missing file, unreadable file, malformed JSON - is
    /// treated as "no credential" and logged at debug level.
    pub fn load(&self) -> Option<String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), "no stored credential: {}", e);
                return None;
            }
        };
        match serde_json::from_str::<StoredToken>(&raw) {
            Ok(stored) if !stored.token.is_empty() => Some(stored.token),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), "malformed credential file: {}", e);
                None
            }
        }
    }

    /// Persist a token, replacing any previous one
    pub fn save(&self, token: &str) -> Result<(), ClientError> {
        let stored = StoredToken {
            token: token.to_string(),
        };
        fs::write(&self.path, serde_json::to_string(&stored)?)?;
        Ok(())
    }

    /// Remove the stored token (logout)
    pub fn clear(&self) -> Result<(), ClientError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
