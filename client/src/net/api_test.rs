use super::*;

#[test]
fn history_endpoint_formats_expected_path() {
    assert_eq!(history_endpoint("abc"), "/history/abc");
}

#[test]
fn status_error_formats_endpoint_and_status() {
    assert_eq!(status_error("query", 500).to_string(), "query failed: 500");
    assert_eq!(status_error("reset", 404).to_string(), "reset failed: 404");
}

#[test]
fn fixed_endpoints_match_server_routes() {
    assert_eq!(QUERY_ENDPOINT, "/query");
    assert_eq!(RESET_ENDPOINT, "/reset");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn helpers_are_unavailable_outside_browser() {
    use futures::executor::block_on;

    assert_eq!(block_on(send_query("hi")), Err(ApiError::Unavailable));
    assert_eq!(block_on(reset_conversation()), Err(ApiError::Unavailable));
    assert_eq!(block_on(fetch_history("abc")), Err(ApiError::Unavailable));
}
