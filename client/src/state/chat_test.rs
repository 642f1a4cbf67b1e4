use super::*;
use crate::net::types::{ImageResult, LinkResult};

fn response(text: &str) -> QueryResponse {
    QueryResponse { response: text.to_owned(), conversation_id: None, images: None, links: None }
}

fn image(n: u32) -> ImageResult {
    ImageResult {
        thumbnail: format!("https://img.test/{n}.png"),
        title: format!("image {n}"),
        source_url: format!("https://src.test/{n}"),
    }
}

fn link(n: u32) -> LinkResult {
    LinkResult { url: format!("https://link.test/{n}"), title: format!("link {n}"), description: None }
}

fn history(role: &str, content: &str) -> HistoryEntry {
    HistoryEntry { role: role.to_owned(), content: content.to_owned(), timestamp: None }
}

fn contents(state: &ChatState) -> Vec<(Role, &str)> {
    state.messages().map(|m| (m.role, m.content.as_str())).collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_state_shows_only_welcome() {
    let state = ChatState::new();
    assert_eq!(contents(&state), vec![(Role::Assistant, WELCOME_MESSAGE)]);
    assert_eq!(state.pending_count(), 0);
    assert!(!state.images.visible);
    assert!(state.links.items.is_empty());
}

#[test]
fn default_equals_new() {
    assert_eq!(ChatState::default(), ChatState::new());
}

#[test]
fn empty_state_has_no_entries() {
    assert!(ChatState::empty().entries.is_empty());
}

// =============================================================
// begin_submit
// =============================================================

#[test]
fn begin_submit_appends_trimmed_user_message_and_placeholder() {
    let mut state = ChatState::empty();
    let pending = state.begin_submit("  hello there \n").expect("non-empty input submits");
    assert_eq!(pending.query, "hello there");
    assert_eq!(contents(&state), vec![(Role::User, "hello there")]);
    assert_eq!(state.entries.last(), Some(&TranscriptEntry::Thinking { request_id: pending.request_id }));
}

#[test]
fn begin_submit_ignores_empty_and_whitespace() {
    let mut state = ChatState::new();
    let before = state.clone();
    assert!(state.begin_submit("").is_none());
    assert!(state.begin_submit("   \t\n").is_none());
    assert_eq!(state, before);
}

#[test]
fn begin_submit_keeps_user_text_literal() {
    let mut state = ChatState::empty();
    state.begin_submit("**not bold** <b>x</b>").unwrap();
    assert_eq!(contents(&state), vec![(Role::User, "**not bold** <b>x</b>")]);
}

#[test]
fn overlapping_submissions_get_distinct_request_ids() {
    let mut state = ChatState::empty();
    let a = state.begin_submit("one").unwrap();
    let b = state.begin_submit("two").unwrap();
    assert_ne!(a.request_id, b.request_id);
    assert_eq!(state.pending_count(), 2);
}

// =============================================================
// complete_query / fail_query
// =============================================================

#[test]
fn complete_query_replaces_placeholder_with_reply() {
    let mut state = ChatState::empty();
    let pending = state.begin_submit("hi").unwrap();
    state.complete_query(pending.request_id, response("**hello**"));
    assert_eq!(state.pending_count(), 0);
    assert_eq!(contents(&state), vec![(Role::User, "hi"), (Role::Assistant, "**hello**")]);
}

#[test]
fn complete_query_with_empty_images_hides_gallery() {
    let mut state = ChatState::empty();
    state.images.display(Some(vec![image(1)]));
    let pending = state.begin_submit("hi").unwrap();
    let mut resp = response("ok");
    resp.images = Some(Vec::new());
    state.complete_query(pending.request_id, resp);
    assert!(!state.images.visible);
}

#[test]
fn complete_query_with_images_shows_one_entry_each() {
    let mut state = ChatState::empty();
    let pending = state.begin_submit("cats").unwrap();
    let mut resp = response("ok");
    resp.images = Some(vec![image(1), image(2)]);
    state.complete_query(pending.request_id, resp);
    assert!(state.images.visible);
    let urls: Vec<_> = state.images.items.iter().map(|i| i.source_url.as_str()).collect();
    assert_eq!(urls, vec!["https://src.test/1", "https://src.test/2"]);
}

#[test]
fn complete_query_without_links_keeps_previous_links() {
    let mut state = ChatState::empty();
    let first = state.begin_submit("a").unwrap();
    let mut resp = response("ok");
    resp.links = Some(vec![link(1)]);
    state.complete_query(first.request_id, resp);

    let second = state.begin_submit("b").unwrap();
    state.complete_query(second.request_id, response("ok again"));
    assert_eq!(state.links.items, vec![link(1)]);
}

#[test]
fn fail_query_appends_single_apology_and_clears_placeholder() {
    let mut state = ChatState::empty();
    state.images.display(Some(vec![image(1)]));
    state.links.display(Some(vec![link(1)]));
    let pending = state.begin_submit("hi").unwrap();
    state.fail_query(pending.request_id);

    assert_eq!(state.pending_count(), 0);
    let apologies = state
        .messages()
        .filter(|m| m.content == QUERY_ERROR_MESSAGE)
        .count();
    assert_eq!(apologies, 1);
    assert_eq!(contents(&state), vec![(Role::User, "hi"), (Role::Assistant, QUERY_ERROR_MESSAGE)]);
    assert!(state.images.visible);
    assert_eq!(state.links.items, vec![link(1)]);
}

#[test]
fn overlapping_responses_each_remove_only_their_placeholder() {
    let mut state = ChatState::empty();
    let a = state.begin_submit("one").unwrap();
    let b = state.begin_submit("two").unwrap();

    state.complete_query(b.request_id, response("reply two"));
    assert_eq!(state.entries.iter().filter(|e| **e == TranscriptEntry::Thinking { request_id: a.request_id }).count(), 1);

    state.fail_query(a.request_id);
    assert_eq!(state.pending_count(), 0);
    assert_eq!(
        contents(&state),
        vec![
            (Role::User, "one"),
            (Role::User, "two"),
            (Role::Assistant, "reply two"),
            (Role::Assistant, QUERY_ERROR_MESSAGE),
        ]
    );
}

#[test]
fn late_response_does_not_overwrite_newer_panels() {
    let mut state = ChatState::empty();
    let older = state.begin_submit("old").unwrap();
    let newer = state.begin_submit("new").unwrap();

    let mut newer_resp = response("new reply");
    newer_resp.images = Some(vec![image(2)]);
    newer_resp.links = Some(vec![link(2)]);
    state.complete_query(newer.request_id, newer_resp);

    let mut older_resp = response("old reply");
    older_resp.images = Some(Vec::new());
    older_resp.links = Some(vec![link(1)]);
    state.complete_query(older.request_id, older_resp);

    assert!(state.images.visible);
    assert_eq!(state.images.items, vec![image(2)]);
    assert_eq!(state.links.items, vec![link(2)]);
    assert_eq!(state.messages().last().map(|m| m.content.as_str()), Some("old reply"));
}

#[test]
fn remove_placeholder_reports_missing() {
    let mut state = ChatState::empty();
    assert!(!state.remove_placeholder(42));
}

// =============================================================
// replace_with_history
// =============================================================

#[test]
fn history_replaces_welcome_in_order() {
    let mut state = ChatState::new();
    let replaced = state.replace_with_history(&[history("user", "hi"), history("assistant", "**hello**")]);
    assert!(replaced);
    assert_eq!(contents(&state), vec![(Role::User, "hi"), (Role::Assistant, "**hello**")]);
}

#[test]
fn history_non_user_roles_render_as_assistant() {
    let mut state = ChatState::new();
    state.replace_with_history(&[history("system", "s"), history("tool", "t")]);
    assert!(state.messages().all(|m| m.role == Role::Assistant));
}

#[test]
fn empty_history_keeps_welcome() {
    let mut state = ChatState::new();
    assert!(!state.replace_with_history(&[]));
    assert_eq!(state, ChatState::new());
}

#[test]
fn history_does_not_touch_panels() {
    let mut state = ChatState::new();
    state.images.display(Some(vec![image(1)]));
    state.links.display(Some(vec![link(1)]));
    state.replace_with_history(&[history("user", "hi")]);
    assert!(state.images.visible);
    assert_eq!(state.links.items, vec![link(1)]);
}
