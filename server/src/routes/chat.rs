//! Chat routes: query, reset, history, new conversation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Json, Redirect};
use axum_extra::extract::cookie::CookieJar;
use client::net::types::{HistoryEntry, HistoryResponse, QueryRequest, QueryResponse};
use tracing::{info, warn};

use super::session::{CONVERSATION_COOKIE_NAME, conversation_cookie, cookie_secure, cookie_value, new_id};
use crate::services::assistant::{self, AssistantError};
use crate::services::conversation::StoredMessage;
use crate::state::AppState;

pub(crate) fn assistant_error_to_status(err: &AssistantError) -> StatusCode {
    match err {
        AssistantError::EmptyQuery => StatusCode::BAD_REQUEST,
        AssistantError::LlmNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        AssistantError::Llm(_) => StatusCode::BAD_GATEWAY,
        AssistantError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Conversation id for a query: body override, then cookie, then a fresh id.
/// The flag is true when the id was freshly minted.
pub(crate) fn resolve_conversation_id(body_override: Option<&str>, jar: &CookieJar) -> (String, bool) {
    if let Some(id) = body_override.map(str::trim).filter(|id| !id.is_empty()) {
        return (id.to_string(), false);
    }
    match cookie_value(jar, CONVERSATION_COOKIE_NAME) {
        Some(id) => (id, false),
        None => (new_id(), true),
    }
}

fn to_history_entry(message: StoredMessage) -> HistoryEntry {
    HistoryEntry { role: message.role, content: message.content, timestamp: Some(message.timestamp) }
}

/// `POST /query`: answer a user message within the current conversation.
pub async fn query(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<QueryRequest>,
) -> Result<(CookieJar, Json<QueryResponse>), StatusCode> {
    let (conversation_id, minted) = resolve_conversation_id(body.conversation_id.as_deref(), &jar);

    let result = match state.llm.as_ref() {
        Some(llm) => assistant::answer_query(&state.conversations, llm.as_ref(), &conversation_id, &body.query).await,
        None => Err(AssistantError::LlmNotConfigured),
    };
    let response = result.map_err(|e| {
        warn!(%conversation_id, error = %e, "query failed");
        assistant_error_to_status(&e)
    })?;

    let jar = if minted { jar.add(conversation_cookie(conversation_id.clone(), cookie_secure())) } else { jar };
    Ok((
        jar,
        Json(QueryResponse { response, conversation_id: Some(conversation_id), images: None, links: None }),
    ))
}

/// `POST /reset`: forget the current conversation and start a new one.
pub async fn reset(State(state): State<AppState>, jar: CookieJar) -> Result<(CookieJar, StatusCode), StatusCode> {
    if let Some(old_id) = cookie_value(&jar, CONVERSATION_COOKIE_NAME) {
        state.conversations.clear(&old_id).await.map_err(|e| {
            warn!(conversation_id = %old_id, error = %e, "reset failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    }
    let new_id = new_id();
    info!(conversation_id = %new_id, "conversation reset");
    Ok((jar.add(conversation_cookie(new_id, cookie_secure())), StatusCode::NO_CONTENT))
}

/// `GET /history/{id}`: persisted transcript, oldest first.
pub async fn history(State(state): State<AppState>, Path(conversation_id): Path<String>) -> Json<HistoryResponse> {
    let history = state
        .conversations
        .history(&conversation_id)
        .await
        .into_iter()
        .map(to_history_entry)
        .collect();
    Json(HistoryResponse { conversation_id: Some(conversation_id), history })
}

/// `GET /new-conversation`: rotate the conversation cookie and go home.
/// The previous conversation's history is kept.
pub async fn new_conversation(jar: CookieJar) -> (CookieJar, Redirect) {
    (jar.add(conversation_cookie(new_id(), cookie_secure())), Redirect::temporary("/"))
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
