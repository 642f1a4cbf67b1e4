//! The single chat page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lays out the transcript, query form and side panels, and restores the
//! stored transcript once on mount using the `conversation_id` cookie read at
//! that moment.

use leptos::prelude::*;

use crate::components::chat_transcript::ChatTranscript;
use crate::components::image_gallery::ImageGallery;
use crate::components::links_panel::LinksPanel;
use crate::components::query_form::QueryForm;
use crate::components::reset_button::ResetButton;
use crate::net::chat_client::load_history;
use crate::state::chat::ChatState;
use crate::util::cookie::{conversation_id_from_cookie, read_document_cookie};

/// Chat page with the transcript on the left and panels on the right.
#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    // Effects only run in the browser, so this fires once after hydration.
    Effect::new(move || {
        let conversation_id = conversation_id_from_cookie(&read_document_cookie());
        load_history(chat, conversation_id);
    });

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <h1 class="chat-page__title">"Paul"</h1>
                <p class="chat-page__subtitle">"Your interactive assistant"</p>
                <ResetButton/>
            </header>
            <main class="chat-page__main">
                <div class="chat-page__conversation">
                    <ChatTranscript/>
                    <QueryForm/>
                </div>
                <aside class="chat-page__panels">
                    <ImageGallery/>
                    <LinksPanel/>
                </aside>
            </main>
        </div>
    }
}
