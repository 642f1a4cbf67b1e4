use super::*;

// =============================================================
// parse_cookies
// =============================================================

#[test]
fn parse_cookies_splits_pairs_and_trims_keys() {
    let cookies = parse_cookies("user_id=u1; conversation_id=abc;theme=dark");
    assert_eq!(cookies.get("user_id").map(String::as_str), Some("u1"));
    assert_eq!(cookies.get("conversation_id").map(String::as_str), Some("abc"));
    assert_eq!(cookies.get("theme").map(String::as_str), Some("dark"));
}

#[test]
fn parse_cookies_splits_on_first_equals_only() {
    let cookies = parse_cookies("token=a=b=c");
    assert_eq!(cookies.get("token").map(String::as_str), Some("a=b=c"));
}

#[test]
fn parse_cookies_skips_pairs_without_equals() {
    let cookies = parse_cookies("flag; x=1");
    assert!(!cookies.contains_key("flag"));
    assert_eq!(cookies.len(), 1);
}

#[test]
fn parse_cookies_empty_string_is_empty() {
    assert!(parse_cookies("").is_empty());
}

// =============================================================
// conversation_id_from_cookie
// =============================================================

#[test]
fn conversation_id_present() {
    assert_eq!(conversation_id_from_cookie("conversation_id=abc"), Some("abc".to_owned()));
}

#[test]
fn conversation_id_missing() {
    assert_eq!(conversation_id_from_cookie("user_id=u1"), None);
    assert_eq!(conversation_id_from_cookie(""), None);
}

#[test]
fn conversation_id_empty_value_counts_as_missing() {
    assert_eq!(conversation_id_from_cookie("conversation_id=; user_id=u1"), None);
}

#[test]
fn conversation_id_requires_exact_name() {
    assert_eq!(conversation_id_from_cookie("old_conversation_id=zzz"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn document_cookie_is_empty_outside_browser() {
    assert!(read_document_cookie().is_empty());
}
