//! Credential storage.
//!
//! The bearer token lives in one named slot that survives process
//! restarts; absence of the slot means "logged out". `FileTokenStore` is
//! the durable implementation, `MemoryTokenStore` backs tests and
//! ephemeral sessions.

use crate::error::TransportResult;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Mutex;

/// A persistent single-slot credential store.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Reads the stored token, or `None` if the slot is empty.
    async fn load(&self) -> TransportResult<Option<String>>;

    /// Writes the token to the slot.
    async fn save(&self, token: &str) -> TransportResult<()>;

    /// Empties the slot.
    async fn clear(&self) -> TransportResult<()>;
}

/// In-memory credential store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> TransportResult<Option<String>> {
        Ok(self.token.lock().unwrap().clone())
    }

    async fn save(&self, token: &str) -> TransportResult<()> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> TransportResult<()> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}

/// File-backed credential store: one token per file, deleted on clear.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store over the given slot path. The file (and parent
    /// directory) are created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The slot path.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> TransportResult<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, token: &str) -> TransportResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, token).await?;
        Ok(())
    }

    async fn clear(&self) -> TransportResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
