//! Conversation store: per-conversation message history.
//!
//! DESIGN
//! ======
//! History lives in memory behind a `RwLock`, keyed by conversation id. Each
//! conversation keeps only its most recent `MAX_STORED_MESSAGES` entries.
//! When a snapshot path is configured, the whole map is written as JSON after
//! every mutation and read back at startup. A missing or corrupt snapshot
//! starts an empty store.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tokio::sync::RwLock;
use tracing::{info, warn};

pub const MAX_STORED_MESSAGES: usize = 15;

/// One message as persisted and returned by `GET /history/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMessage {
    pub role: String,
    pub content: String,
    /// RFC 3339 UTC.
    pub timestamp: String,
}

impl StoredMessage {
    #[must_use]
    pub fn now(role: &str, content: &str) -> Self {
        let timestamp = OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default();
        Self { role: role.to_string(), content: content.to_string(), timestamp }
    }

    #[must_use]
    pub fn is_assistant(&self) -> bool {
        self.role == "assistant"
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("snapshot io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

pub struct ConversationStore {
    conversations: RwLock<HashMap<String, Vec<StoredMessage>>>,
    snapshot_path: Option<PathBuf>,
}

impl ConversationStore {
    /// Memory-only store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self { conversations: RwLock::new(HashMap::new()), snapshot_path: None }
    }

    /// Open a store backed by `path`, reading any existing snapshot.
    pub async fn load(path: PathBuf) -> Self {
        let conversations = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<HashMap<String, Vec<StoredMessage>>>(&bytes) {
                Ok(map) => {
                    info!(path = %path.display(), conversations = map.len(), "loaded conversation snapshot");
                    map
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "conversation snapshot corrupt; starting empty");
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "conversation snapshot unreadable; starting empty");
                HashMap::new()
            }
        };
        Self { conversations: RwLock::new(conversations), snapshot_path: Some(path) }
    }

    /// Messages for `conversation_id`, oldest first. Unknown ids are empty.
    pub async fn history(&self, conversation_id: &str) -> Vec<StoredMessage> {
        self.conversations
            .read()
            .await
            .get(conversation_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Append a message, trimming the conversation to its cap.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the snapshot cannot be written. The in-memory
    /// append has already happened in that case.
    pub async fn append(&self, conversation_id: &str, message: StoredMessage) -> Result<(), StoreError> {
        let mut conversations = self.conversations.write().await;
        let messages = conversations.entry(conversation_id.to_string()).or_default();
        messages.push(message);
        if messages.len() > MAX_STORED_MESSAGES {
            let excess = messages.len() - MAX_STORED_MESSAGES;
            messages.drain(..excess);
        }
        self.persist(&conversations).await
    }

    /// Drop all history for `conversation_id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the snapshot cannot be written.
    pub async fn clear(&self, conversation_id: &str) -> Result<(), StoreError> {
        let mut conversations = self.conversations.write().await;
        if conversations.remove(conversation_id).is_none() {
            return Ok(());
        }
        self.persist(&conversations).await
    }

    // Called with the write guard held so snapshots land in mutation order.
    async fn persist(&self, conversations: &HashMap<String, Vec<StoredMessage>>) -> Result<(), StoreError> {
        let Some(path) = &self.snapshot_path else {
            return Ok(());
        };
        let bytes = serde_json::to_vec(conversations)?;
        tokio::fs::write(path, bytes).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;
