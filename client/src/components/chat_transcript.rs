//! Transcript of message bubbles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `ChatState::entries` in order. User text is inserted as a text
//! node; assistant text goes through the markdown renderer and is set as
//! inner HTML. The container is pinned to the bottom after every change.

#[cfg(test)]
#[path = "chat_transcript_test.rs"]
mod chat_transcript_test;

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, ChatState, Role, THINKING_TEXT, TranscriptEntry};
use crate::util::markdown::render_markdown_html;

/// Scrollable transcript (`#chat-container`).
#[component]
pub fn ChatTranscript() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let container_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| c.entries.len());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = container_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div id="chat-container" class="chat-transcript" node_ref=container_ref>
            {move || {
                chat.get()
                    .entries
                    .into_iter()
                    .map(|entry| match entry {
                        TranscriptEntry::Message(msg) => message_bubble(msg),
                        TranscriptEntry::Thinking { .. } => thinking_bubble(),
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

fn message_bubble(msg: ChatMessage) -> AnyView {
    match msg.role {
        Role::User => view! {
            <div class="chat-transcript__row chat-transcript__row--user">
                <div class="bubble bubble--user">{msg.content}</div>
            </div>
        }
        .into_any(),
        Role::Assistant => {
            let rendered = render_markdown_html(&msg.content);
            view! {
                <div class="chat-transcript__row">
                    <div class="bubble bubble--assistant bubble__markdown" inner_html=rendered></div>
                </div>
            }
            .into_any()
        }
    }
}

fn thinking_bubble() -> AnyView {
    view! {
        <div class="chat-transcript__row">
            <div class="bubble bubble--assistant">
                <p class="bubble__thinking">{THINKING_TEXT}</p>
            </div>
        </div>
    }
    .into_any()
}
