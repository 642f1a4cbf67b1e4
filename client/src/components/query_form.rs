//! Query input form.

use leptos::prelude::*;

use crate::net::chat_client::submit_query;
use crate::state::chat::ChatState;

/// Text input and send button (`#query-form`, `#query-input`).
///
/// The input is cleared only when the submission was accepted, so a
/// whitespace-only entry stays where the user typed it.
#[component]
pub fn QueryForm() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let input = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submit_query(chat, &input.get_untracked()) {
            input.set(String::new());
        }
    };

    view! {
        <form id="query-form" class="query-form" on:submit=on_submit>
            <input
                id="query-input"
                class="query-form__input"
                type="text"
                autocomplete="off"
                placeholder="Ask Paul anything..."
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            />
            <button class="btn btn--primary query-form__send" type="submit">
                "Send"
            </button>
        </form>
    }
}
