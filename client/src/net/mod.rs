//! Networking modules for the chat HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the raw REST calls, `chat_client` drives the page flows on
//! top of them, and `types` defines the shared wire schema.

pub mod api;
pub mod chat_client;
pub mod types;
