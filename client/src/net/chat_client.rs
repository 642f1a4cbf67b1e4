//! Submit, reset and history flows for the chat page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call the `hydrate` entry points (`submit_query`,
//! `reset_and_reload`, `load_history`), which spawn the network work on the
//! browser event loop. The flow logic itself is written against a
//! [`ChatStore`] and an injected request future so it runs unchanged under
//! `cargo test`.
//!
//! ERROR HANDLING
//! ==============
//! Query failures are logged and shown as the apology bubble. Reset failures
//! are logged and otherwise leave the page alone. History failures are
//! ignored and the welcome content stays.

#[cfg(test)]
#[path = "chat_client_test.rs"]
mod chat_client_test;

use std::future::Future;

use leptos::prelude::{RwSignal, Update};

use super::api::ApiError;
use super::types::{HistoryResponse, QueryResponse};
use crate::state::chat::{ChatState, PendingQuery};

/// Somewhere the chat state lives. Implemented by the page's `RwSignal`.
pub trait ChatStore {
    /// Mutate the state, returning `None` if it is no longer available.
    fn update_chat<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R>;
}

impl ChatStore for RwSignal<ChatState> {
    fn update_chat<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

// =============================================================================
// FLOWS
// =============================================================================

/// Record a submission locally. `None` when the input trims to nothing.
pub fn begin_query<S: ChatStore>(chat: &S, raw: &str) -> Option<PendingQuery> {
    chat.update_chat(|c| c.begin_submit(raw)).flatten()
}

/// Send a recorded submission and resolve its placeholder.
///
/// # Errors
///
/// Returns the request error after the apology bubble has been appended.
pub async fn resolve_query<S, F, Fut>(chat: &S, pending: PendingQuery, send: F) -> Result<(), ApiError>
where
    S: ChatStore,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<QueryResponse, ApiError>>,
{
    let request_id = pending.request_id;
    match send(pending.query).await {
        Ok(response) => {
            chat.update_chat(|c| c.complete_query(request_id, response));
            Ok(())
        }
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::error!("query {request_id} failed: {e}");
            chat.update_chat(|c| c.fail_query(request_id));
            Err(e)
        }
    }
}

/// Reset the conversation and reload on success.
///
/// # Errors
///
/// Returns the reset error; `reload` is not called in that case.
pub async fn reset_then<Fut, R>(reset: Fut, reload: R) -> Result<(), ApiError>
where
    Fut: Future<Output = Result<(), ApiError>>,
    R: FnOnce(),
{
    match reset.await {
        Ok(()) => {
            reload();
            Ok(())
        }
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::warn!("reset failed: {e}");
            Err(e)
        }
    }
}

/// Replay a conversation's stored history into the transcript.
///
/// Does nothing, and never calls `fetch`, when `conversation_id` is `None`.
/// Returns whether the transcript was replaced.
pub async fn restore_history<S, F, Fut>(chat: &S, conversation_id: Option<&str>, fetch: F) -> bool
where
    S: ChatStore,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<HistoryResponse, ApiError>>,
{
    let Some(id) = conversation_id else {
        return false;
    };
    match fetch(id.to_owned()).await {
        Ok(body) => chat
            .update_chat(|c| c.replace_with_history(&body.history))
            .unwrap_or(false),
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::debug!("history for {id} unavailable: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
            false
        }
    }
}

// =============================================================================
// BROWSER ENTRY POINTS
// =============================================================================

/// Handle a form submission. Returns `true` when the input was accepted and
/// should be cleared.
pub fn submit_query(chat: RwSignal<ChatState>, raw: &str) -> bool {
    let Some(pending) = begin_query(&chat, raw) else {
        return false;
    };
    #[cfg(feature = "hydrate")]
    wasm_bindgen_futures::spawn_local(async move {
        let _ = resolve_query(&chat, pending, |q| async move { super::api::send_query(&q).await }).await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = pending;
    true
}

/// Handle the reset button.
pub fn reset_and_reload() {
    #[cfg(feature = "hydrate")]
    wasm_bindgen_futures::spawn_local(async move {
        let _ = reset_then(super::api::reset_conversation(), reload_page).await;
    });
}

/// Run the one-shot history restore for the identifier read at startup.
pub fn load_history(chat: RwSignal<ChatState>, conversation_id: Option<String>) {
    #[cfg(feature = "hydrate")]
    wasm_bindgen_futures::spawn_local(async move {
        restore_history(&chat, conversation_id.as_deref(), |id| async move {
            super::api::fetch_history(&id).await
        })
        .await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (chat, conversation_id);
}

#[cfg(feature = "hydrate")]
fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("page reload failed: {e:?}");
        }
    }
}
