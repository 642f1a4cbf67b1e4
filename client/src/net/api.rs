//! REST API helpers for the chat endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>` and never panics; callers decide
//! whether a failure is surfaced (query), logged (reset), or ignored (history).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{HistoryResponse, QueryResponse};

pub const QUERY_ENDPOINT: &str = "/query";
pub const RESET_ENDPOINT: &str = "/reset";

/// Failure modes of a chat API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("{endpoint} failed: {status}")]
    Status { endpoint: &'static str, status: u16 },

    /// The request or response body could not be (de)serialized.
    #[error("body decode failed: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn history_endpoint(conversation_id: &str) -> String {
    format!("/history/{conversation_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(endpoint: &'static str, status: u16) -> ApiError {
    ApiError::Status { endpoint, status }
}

/// Submit a trimmed query via `POST /query`.
///
/// # Errors
///
/// Returns an error on transport failure, non-ok status, or a body that does
/// not decode as [`QueryResponse`].
pub async fn send_query(query: &str) -> Result<QueryResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::QueryRequest::new(query);
        let resp = gloo_net::http::Request::post(QUERY_ENDPOINT)
            .json(&payload)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error("query", resp.status()));
        }
        resp.json::<QueryResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(ApiError::Unavailable)
    }
}

/// Ask the server to start a fresh conversation via `POST /reset`.
///
/// # Errors
///
/// Returns an error on transport failure or non-ok status.
pub async fn reset_conversation() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(RESET_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error("reset", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the stored transcript for a conversation via `GET /history/{id}`.
///
/// # Errors
///
/// Returns an error on transport failure, non-ok status, or an undecodable body.
pub async fn fetch_history(conversation_id: &str) -> Result<HistoryResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = history_endpoint(conversation_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error("history", resp.status()));
        }
        resp.json::<HistoryResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = conversation_id;
        Err(ApiError::Unavailable)
    }
}
