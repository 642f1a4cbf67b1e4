//! Transcript and panel state for the chat page.
//!
//! DESIGN
//! ======
//! `ChatState` is held in a single `RwSignal` and every mutation the page
//! performs goes through one of the transitions below, so the submit, reset
//! and history flows stay testable without a browser.
//!
//! The transcript is append-only: entries are pushed in arrival order and only
//! ever leave it when a query placeholder is resolved or when a restored
//! history replaces the whole list.
//!
//! Each submission gets a fresh request id. The id names its placeholder, so
//! overlapping submissions resolve exactly their own "Thinking..." bubble, and
//! it orders responses for the panels: a response only updates the gallery and
//! link list if no newer submission's response has already done so.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use super::panels::{ImagePanel, LinkPanel};
use crate::net::types::{HistoryEntry, QueryResponse};

pub const WELCOME_MESSAGE: &str = "Hi, I'm Paul! Ask me anything and I'll keep it short.";
pub const THINKING_TEXT: &str = "Thinking...";
pub const QUERY_ERROR_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

/// Who a bubble is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Rendered as literal text.
    User,
    /// Rendered as markdown.
    Assistant,
}

/// A rendered transcript message. Never mutated after insertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
}

/// One bubble in the transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranscriptEntry {
    Message(ChatMessage),
    /// Placeholder for the outstanding query with this request id.
    Thinking { request_id: u64 },
}

/// A submission recorded locally and awaiting the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingQuery {
    pub request_id: u64,
    /// Trimmed text sent as the `query` field.
    pub query: String,
}

/// Chat page state: transcript plus the two response panels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub entries: Vec<TranscriptEntry>,
    pub images: ImagePanel,
    pub links: LinkPanel,
    next_id: u64,
    /// Request id of the response currently reflected in the panels.
    panels_request_id: Option<u64>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    /// Fresh state showing only the welcome message.
    #[must_use]
    pub fn new() -> Self {
        let mut state = Self::empty();
        state.push_message(Role::Assistant, WELCOME_MESSAGE);
        state
    }

    /// State with an empty transcript.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            images: ImagePanel::default(),
            links: LinkPanel::default(),
            next_id: 1,
            panels_request_id: None,
        }
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a message bubble and return its id.
    pub fn push_message(&mut self, role: Role, content: impl Into<String>) -> u64 {
        let id = self.allocate_id();
        self.entries.push(TranscriptEntry::Message(ChatMessage { id, role, content: content.into() }));
        id
    }

    /// Record a submission: append the user bubble and a placeholder.
    ///
    /// Returns `None` (and changes nothing) when the trimmed input is empty.
    pub fn begin_submit(&mut self, raw: &str) -> Option<PendingQuery> {
        let query = raw.trim();
        if query.is_empty() {
            return None;
        }
        self.push_message(Role::User, query);
        let request_id = self.allocate_id();
        self.entries.push(TranscriptEntry::Thinking { request_id });
        Some(PendingQuery { request_id, query: query.to_owned() })
    }

    /// Remove the placeholder for `request_id`. Returns whether one was found.
    pub fn remove_placeholder(&mut self, request_id: u64) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|e| !matches!(e, TranscriptEntry::Thinking { request_id: id } if *id == request_id));
        self.entries.len() != before
    }

    /// Resolve a successful query: swap the placeholder for the reply and
    /// refresh the panels unless a newer response already did.
    pub fn complete_query(&mut self, request_id: u64, response: QueryResponse) {
        self.remove_placeholder(request_id);
        self.push_message(Role::Assistant, response.response);

        if self.panels_request_id.is_some_and(|shown| shown > request_id) {
            return;
        }
        self.images.display(response.images);
        self.links.display(response.links);
        self.panels_request_id = Some(request_id);
    }

    /// Resolve a failed query with the fixed apology message.
    pub fn fail_query(&mut self, request_id: u64) {
        self.remove_placeholder(request_id);
        self.push_message(Role::Assistant, QUERY_ERROR_MESSAGE);
    }

    /// Replace the transcript with a restored history.
    ///
    /// An empty history leaves the current transcript (welcome content
    /// included) in place and returns `false`. Panels are never touched.
    pub fn replace_with_history(&mut self, history: &[HistoryEntry]) -> bool {
        if history.is_empty() {
            return false;
        }
        self.entries.clear();
        for entry in history {
            let role = if entry.is_user() { Role::User } else { Role::Assistant };
            self.push_message(role, entry.content.clone());
        }
        true
    }

    /// Rendered messages in transcript order, placeholders skipped.
    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.entries.iter().filter_map(|e| match e {
            TranscriptEntry::Message(msg) => Some(msg),
            TranscriptEntry::Thinking { .. } => None,
        })
    }

    /// Number of queries still waiting on the server.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, TranscriptEntry::Thinking { .. }))
            .count()
    }
}
