//! Thumbnail gallery for the latest response.

#[cfg(test)]
#[path = "image_gallery_test.rs"]
mod image_gallery_test;

use leptos::prelude::*;

use crate::net::types::ImageResult;
use crate::state::chat::ChatState;

/// Image gallery (`#image-gallery`, `#images-container`). Hidden whenever the
/// latest response carried no images.
#[component]
pub fn ImageGallery() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let hidden = move || !chat.with(|c| c.images.visible);

    view! {
        <section id="image-gallery" class="image-gallery" class:hidden=hidden>
            <h2 class="panel__title">"Images"</h2>
            <div id="images-container" class="image-gallery__grid">
                {move || {
                    chat.get()
                        .images
                        .items
                        .into_iter()
                        .map(image_item)
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}

fn image_item(image: ImageResult) -> AnyView {
    view! {
        <div class="image-gallery__item">
            <a href=image.source_url target="_blank" rel="noopener noreferrer">
                <img class="image-gallery__thumb" src=image.thumbnail alt=image.title/>
            </a>
        </div>
    }
    .into_any()
}
