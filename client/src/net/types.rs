//! Wire DTOs for the chat HTTP endpoints.
//!
//! DESIGN
//! ======
//! The server crate builds its responses from these same types, so the JSON
//! shape of `/query` and `/history/{id}` has a single definition. Optional
//! collections default to empty on decode so an omitted field and an empty
//! array are indistinguishable to callers that only care about contents;
//! `QueryResponse` keeps `Option` for `images`/`links` because the link panel
//! treats "absent" and "empty" the same way but must never be cleared by them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /query`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Trimmed user text.
    pub query: String,
    /// Explicit conversation override; the cookie is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

impl QueryRequest {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into(), conversation_id: None }
    }
}

/// An image search hit shown in the gallery panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResult {
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Alt text for the thumbnail; empty when the server omits it.
    #[serde(default)]
    pub title: String,
    /// Page the thumbnail links to.
    pub source_url: String,
}

/// A web link shown in the links panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkResult {
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Success body of `POST /query`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Assistant reply as markdown.
    pub response: String,
    /// Conversation the reply was appended to, when the server reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ImageResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<LinkResult>>,
}

/// One persisted transcript entry returned by `GET /history/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// `"user"` or anything else (rendered as assistant).
    pub role: String,
    pub content: String,
    /// RFC 3339 timestamp, when the server records one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl HistoryEntry {
    /// Whether this entry is rendered as a user bubble.
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.role == "user"
    }
}

/// Success body of `GET /history/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}
