//! Markdown rendering for assistant bubbles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Assistant replies are model output, so raw inline/block HTML is dropped
//! before rendering. Link and image destinations are limited to `http`,
//! `https`, `mailto`, and scheme-less relative URLs; anything else becomes
//! `#`. Every anchor the parser emits is rewritten to open in a new browsing
//! context so following a link never navigates away from the transcript.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

const ANCHOR_OPEN: &str = "<a href=\"";
const ANCHOR_OPEN_NEW_TAB: &str = "<a target=\"_blank\" rel=\"noopener noreferrer\" href=\"";
const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];
const BLOCKED_DESTINATION: &str = "#";

/// Render markdown to an HTML fragment with links opening in a new tab.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(tag) => Some(Event::Start(sanitize_destination(tag))),
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    open_links_in_new_tab(&out)
}

/// With raw HTML filtered out, the only literal `<a href="` sequences left in
/// the output are anchors produced by the renderer; text content is escaped.
fn open_links_in_new_tab(rendered: &str) -> String {
    rendered.replace(ANCHOR_OPEN, ANCHOR_OPEN_NEW_TAB)
}

fn sanitize_destination(tag: Tag<'_>) -> Tag<'_> {
    match tag {
        Tag::Link { link_type, dest_url, title, id } if !is_allowed_destination(&dest_url) => {
            Tag::Link { link_type, dest_url: CowStr::Borrowed(BLOCKED_DESTINATION), title, id }
        }
        Tag::Image { link_type, dest_url, title, id } if !is_allowed_destination(&dest_url) => {
            Tag::Image { link_type, dest_url: CowStr::Borrowed(BLOCKED_DESTINATION), title, id }
        }
        other => other,
    }
}

/// Browsers ignore whitespace and control characters inside a scheme, so they
/// are stripped before the scheme is read. A `:` before any `/`, `?`, or `#`
/// marks a scheme; without one the URL is relative.
pub(crate) fn is_allowed_destination(url: &str) -> bool {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    match cleaned.find([':', '/', '?', '#']) {
        Some(i) if cleaned[i..].starts_with(':') => ALLOWED_SCHEMES.contains(&&cleaned[..i]),
        _ => true,
    }
}
