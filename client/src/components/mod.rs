//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat page surfaces while reading/writing the shared
//! `RwSignal<ChatState>` from Leptos context.

pub mod chat_transcript;
pub mod image_gallery;
pub mod links_panel;
pub mod query_form;
pub mod reset_button;
