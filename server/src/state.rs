//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the conversation store and the optional LLM client.

use std::sync::Arc;

use crate::llm::LlmChat;
use crate::services::conversation::ConversationStore;

/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub conversations: Arc<ConversationStore>,
    /// `None` if LLM env vars are not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
}

impl AppState {
    #[must_use]
    pub fn new(conversations: ConversationStore, llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self { conversations: Arc::new(conversations), llm }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
