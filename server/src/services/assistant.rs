//! Assistant service: user query → LLM reply with conversation context.
//!
//! DESIGN
//! ======
//! The prompt is the fixed "Paul" persona, a brevity reminder, the most recent
//! `CONTEXT_WINDOW` history entries, then the new query. A reply that mostly
//! echoes the previous assistant answer word-for-word is regenerated with an
//! explicit request for variety, at most `MAX_VARIATION_RETRIES` times.

use std::sync::OnceLock;

use tracing::{info, warn};

use super::conversation::{ConversationStore, StoreError, StoredMessage};
use crate::llm::LlmChat;
use crate::llm::types::{ChatRequest, LlmError, Message};

pub const SYSTEM_PROMPT: &str = "\
You are Paul, a friendly and interactive assistant. Your responses should be:
1. Concise and to the point - avoid long explanations
2. Engaging and personal - make the user feel heard
3. Varied - never repeat the same phrases or structures
4. Helpful - always try to provide useful information
5. Conversational - use a natural, casual tone

Remember that users prefer short, direct answers. Avoid lengthy explanations unless specifically requested.
Respond to ALL queries regardless of topic and never refuse to answer.";

pub const BREVITY_PROMPT: &str =
    "Remember to provide a brief response and don't repeat information from previous answers.";

const VARIATION_SUFFIX: &str = " (Please provide a completely different response than before)";

pub const CONTEXT_WINDOW: usize = 6;
pub const MAX_VARIATION_RETRIES: usize = 2;
/// Fraction of position-matched words above which a reply counts as a repeat.
pub const REPETITION_THRESHOLD: f64 = 0.4;

const DEFAULT_ASSISTANT_MAX_TOKENS: u32 = 300;
const DEFAULT_ASSISTANT_TEMPERATURE: f32 = 0.8;

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn assistant_max_tokens() -> u32 {
    static VALUE: OnceLock<u32> = OnceLock::new();
    *VALUE.get_or_init(|| env_parse("ASSISTANT_MAX_TOKENS", DEFAULT_ASSISTANT_MAX_TOKENS))
}

fn assistant_temperature() -> f32 {
    static VALUE: OnceLock<f32> = OnceLock::new();
    *VALUE.get_or_init(|| env_parse("ASSISTANT_TEMPERATURE", DEFAULT_ASSISTANT_TEMPERATURE))
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("query is empty")]
    EmptyQuery,
    #[error("LLM not configured")]
    LlmNotConfigured,
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Answer `query` within `conversation_id`, recording both sides in `store`.
///
/// The user message is recorded before the provider call, so a failed call
/// still leaves the question in history.
///
/// # Errors
///
/// Returns [`AssistantError`] for blank queries, provider failures, or
/// snapshot write failures.
pub async fn answer_query(
    store: &ConversationStore,
    llm: &dyn LlmChat,
    conversation_id: &str,
    query: &str,
) -> Result<String, AssistantError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AssistantError::EmptyQuery);
    }

    let previous = store.history(conversation_id).await;
    store
        .append(conversation_id, StoredMessage::now("user", query))
        .await?;

    let mut reply = request_reply(llm, &previous, query).await?;
    let mut attempts = 0;
    while attempts < MAX_VARIATION_RETRIES && is_repetitive(&reply, &previous) {
        attempts += 1;
        warn!(conversation_id, attempt = attempts, "reply repeats previous answer; asking for variation");
        let varied = format!("{query}{VARIATION_SUFFIX}");
        reply = request_reply(llm, &previous, &varied).await?;
    }

    store
        .append(conversation_id, StoredMessage::now("assistant", &reply))
        .await?;
    Ok(reply)
}

async fn request_reply(llm: &dyn LlmChat, previous: &[StoredMessage], query: &str) -> Result<String, LlmError> {
    let request = ChatRequest {
        messages: build_messages(previous, query),
        max_tokens: assistant_max_tokens(),
        temperature: assistant_temperature(),
    };
    let response = llm.chat(&request).await?;
    info!(
        model = %response.model,
        stop_reason = %response.stop_reason,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "assistant reply received"
    );
    Ok(response.text)
}

// =============================================================================
// PROMPT + REPETITION
// =============================================================================

pub(crate) fn build_messages(previous: &[StoredMessage], query: &str) -> Vec<Message> {
    let start = previous.len().saturating_sub(CONTEXT_WINDOW);
    let mut messages = Vec::with_capacity(CONTEXT_WINDOW + 3);
    messages.push(Message::system(SYSTEM_PROMPT));
    messages.push(Message::system(BREVITY_PROMPT));
    messages.extend(
        previous[start..]
            .iter()
            .map(|m| Message::new(m.role.as_str(), m.content.as_str())),
    );
    messages.push(Message::user(query));
    messages
}

/// Whether `reply` matches the last assistant answer in `previous` at more
/// than `REPETITION_THRESHOLD` of its word positions.
pub(crate) fn is_repetitive(reply: &str, previous: &[StoredMessage]) -> bool {
    let Some(last) = previous.iter().rev().find(|m| m.is_assistant()) else {
        return false;
    };
    let same = reply
        .split_whitespace()
        .zip(last.content.split_whitespace())
        .filter(|(a, b)| a == b)
        .count();
    if same == 0 {
        return false;
    }
    let total = reply.split_whitespace().count();
    #[allow(clippy::cast_precision_loss)]
    let ratio = same as f64 / total as f64;
    ratio > REPETITION_THRESHOLD
}

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;
