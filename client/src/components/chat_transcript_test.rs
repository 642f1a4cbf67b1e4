use super::*;

fn message(role: Role, content: &str) -> ChatMessage {
    ChatMessage { id: 1, role, content: content.to_owned() }
}

#[test]
fn user_text_is_escaped_not_parsed() {
    let html = message_bubble(message(Role::User, "<b>x</b> **y**")).to_html();
    assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"), "{html}");
    assert!(!html.contains("<b>"));
    assert!(!html.contains("<strong>"));
    assert!(html.contains("bubble--user"));
}

#[test]
fn assistant_text_is_rendered_as_markdown() {
    let html = message_bubble(message(Role::Assistant, "**hello** [docs](https://a.test)")).to_html();
    assert!(html.contains("<strong>hello</strong>"), "{html}");
    assert!(html.contains("target=\"_blank\""));
    assert!(html.contains("bubble--assistant"));
}

#[test]
fn assistant_script_link_is_neutralized_in_bubble() {
    let html = message_bubble(message(Role::Assistant, "[click](javascript:alert(1))")).to_html();
    assert!(!html.contains("javascript:"), "{html}");
}

#[test]
fn thinking_bubble_shows_placeholder() {
    let html = thinking_bubble().to_html();
    assert!(html.contains(THINKING_TEXT));
    assert!(html.contains("bubble__thinking"));
}
