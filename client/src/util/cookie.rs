//! `document.cookie` parsing.
//!
//! The conversation identifier is owned by the server; the client only ever
//! reads it, once, when the chat page mounts.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use std::collections::HashMap;

pub const CONVERSATION_COOKIE: &str = "conversation_id";

/// Split a `document.cookie` string into a key/value map.
///
/// Pairs are separated by `;` and split on their first `=`. Pairs without a
/// `=` are skipped. Later duplicates win.
pub fn parse_cookies(raw: &str) -> HashMap<String, String> {
    raw.split(';')
        .filter_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            Some((key.trim().to_owned(), value.to_owned()))
        })
        .collect()
}

/// Extract a non-empty `conversation_id` from a cookie string.
pub fn conversation_id_from_cookie(raw: &str) -> Option<String> {
    parse_cookies(raw)
        .remove(CONVERSATION_COOKIE)
        .filter(|id| !id.is_empty())
}

/// Read `document.cookie` from the browser. Empty on the server.
pub fn read_document_cookie() -> String {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|d| d.cookie().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
