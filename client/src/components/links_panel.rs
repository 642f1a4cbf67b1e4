//! Related links for the latest response that carried any.

#[cfg(test)]
#[path = "links_panel_test.rs"]
mod links_panel_test;

use leptos::prelude::*;

use crate::net::types::LinkResult;
use crate::state::chat::ChatState;

/// Links list (`#links-container`).
#[component]
pub fn LinksPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    view! {
        <section class="links-panel">
            <h2 class="panel__title">"Links"</h2>
            <div id="links-container" class="links-panel__body">
                {move || {
                    let links = chat.get().links.items;
                    if links.is_empty() {
                        return view! {
                            <p class="links-panel__empty">"Related links will appear here."</p>
                        }
                            .into_any();
                    }

                    view! {
                        <ul class="links-panel__list">
                            {links.into_iter().map(link_item).collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }}
            </div>
        </section>
    }
}

/// One list entry. Blank descriptions are skipped rather than rendered as an
/// empty paragraph.
fn link_item(link: LinkResult) -> AnyView {
    let description = link.description.filter(|d| !d.trim().is_empty());
    view! {
        <li class="links-panel__item">
            <a class="links-panel__link" href=link.url target="_blank" rel="noopener noreferrer">
                {link.title}
            </a>
            {description.map(|d| view! { <p class="links-panel__description">{d}</p> })}
        </li>
    }
    .into_any()
}
