//! Conversation reset control.

use leptos::prelude::*;

use crate::net::chat_client::reset_and_reload;

/// Reset button (`#reset-btn`). Reloads the page once the server confirms.
#[component]
pub fn ResetButton() -> impl IntoView {
    view! {
        <button id="reset-btn" class="btn btn--secondary" type="button" on:click=move |_| reset_and_reload()>
            "New conversation"
        </button>
    }
}
