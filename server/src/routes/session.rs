//! Session cookies: `conversation_id` and `user_id`.
//!
//! `conversation_id` is readable from script (no `HttpOnly`); the browser
//! client restores history from it on load.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;
use uuid::Uuid;

pub const CONVERSATION_COOKIE_NAME: &str = "conversation_id";
pub const USER_COOKIE_NAME: &str = "user_id";

const CONVERSATION_COOKIE_MAX_AGE: Duration = Duration::days(7);
const USER_COOKIE_MAX_AGE: Duration = Duration::days(30);

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    env_bool("COOKIE_SECURE").unwrap_or(false)
}

#[must_use]
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub(crate) fn conversation_cookie(id: String, secure: bool) -> Cookie<'static> {
    Cookie::build((CONVERSATION_COOKIE_NAME, id))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(CONVERSATION_COOKIE_MAX_AGE)
        .build()
}

pub(crate) fn user_cookie(id: String, secure: bool) -> Cookie<'static> {
    Cookie::build((USER_COOKIE_NAME, id))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(USER_COOKIE_MAX_AGE)
        .build()
}

/// Non-empty cookie value, if present.
pub(crate) fn cookie_value(jar: &CookieJar, name: &str) -> Option<String> {
    jar.get(name)
        .map(Cookie::value)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

/// Add fresh `conversation_id` / `user_id` cookies for whichever is missing.
pub(crate) fn with_session_cookies(jar: CookieJar, secure: bool) -> CookieJar {
    let mut jar = jar;
    if cookie_value(&jar, CONVERSATION_COOKIE_NAME).is_none() {
        jar = jar.add(conversation_cookie(new_id(), secure));
    }
    if cookie_value(&jar, USER_COOKIE_NAME).is_none() {
        jar = jar.add(user_cookie(new_id(), secure));
    }
    jar
}

/// Middleware for page routes: make sure both session cookies exist.
pub async fn ensure_session_cookies(jar: CookieJar, request: Request, next: Next) -> (CookieJar, Response) {
    let jar = with_session_cookies(jar, cookie_secure());
    let response = next.run(request).await;
    (jar, response)
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
