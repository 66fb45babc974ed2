use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use std::sync::{Arc, Mutex};

use super::jwt;

pub const SESSION_COOKIE: &str = "hr_session";

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn cookie_domain() -> Option<String> {
    std::env::var("COOKIE_DOMAIN")
        .ok()
        .filter(|d| !d.is_empty())
}

/// Build a Set-Cookie header value for the session token.
pub fn build_session_cookie(token: &str, max_age_minutes: i64) -> HeaderValue {
    let mut cookie = Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::seconds(max_age_minutes * 60))
        .secure(cookie_secure());

    if let Some(domain) = cookie_domain() {
        cookie = cookie.domain(domain);
    }

    HeaderValue::from_str(&cookie.build().to_string()).expect("cookie header value should be valid")
}

/// Build a Set-Cookie header that clears the session cookie.
pub fn build_clear_cookie() -> HeaderValue {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::ZERO)
        .build();

    HeaderValue::from_str(&cookie.to_string()).expect("clear cookie should be valid")
}

/// Extract the session token from cookies (preferred) or Bearer header (fallback).
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, SESSION_COOKIE) {
        return Some(token);
    }

    // Fallback to Bearer header for non-browser clients
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(token) = auth_str.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
        }
    }

    None
}

/// Parse a specific cookie value from the Cookie header.
fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        if let Ok(cookie_str) = header_value.to_str() {
            for piece in cookie_str.split(';') {
                if let Ok(c) = Cookie::parse(piece.trim().to_string()) {
                    if c.name() == name {
                        return Some(c.value().to_string());
                    }
                }
            }
        }
    }
    None
}

/// Set the session cookie on the response using the current expiry config.
pub fn set_session_cookie(headers: &mut HeaderMap, token: &str) {
    headers.append(
        header::SET_COOKIE,
        build_session_cookie(token, jwt::session_expiry_minutes()),
    );
}

/// Clear the session cookie on the response.
pub fn clear_session_cookie(headers: &mut HeaderMap) {
    headers.append(header::SET_COOKIE, build_clear_cookie());
}

/// Pending cookie action to be picked up by the auth middleware.
/// Stored in request extensions as `Arc<Mutex<>>` so server functions can populate it.
#[derive(Clone, Debug)]
pub enum PendingCookieAction {
    Set { token: String },
    Clear,
}

/// Shared slot for server functions to communicate cookie actions to the middleware.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

/// Schedule the session cookie to be set by the middleware.
/// Called from server functions — reads the CookieSlot from FullstackContext extensions.
pub fn schedule_session_cookie(token: &str) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            *slot.0.lock().unwrap() = Some(PendingCookieAction::Set {
                token: token.to_string(),
            });
        }
    }
}

/// Schedule the session cookie to be cleared by the middleware.
pub fn schedule_clear_cookie() {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            *slot.0.lock().unwrap() = Some(PendingCookieAction::Clear);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_is_http_only_with_path() {
        let value = build_session_cookie("tok123", 60);
        let s = value.to_str().unwrap();
        assert!(s.starts_with("hr_session=tok123"));
        assert!(s.contains("HttpOnly"));
        assert!(s.contains("Path=/"));
    }

    #[test]
    fn extract_finds_token_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; hr_session=abc; lang=en"),
        );
        assert_eq!(extract_session_token(&headers).as_deref(), Some("abc"));
    }

    #[test]
    fn extract_falls_back_to_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer xyz"),
        );
        assert_eq!(extract_session_token(&headers).as_deref(), Some("xyz"));
    }

    #[test]
    fn extract_returns_none_without_credentials() {
        assert!(extract_session_token(&HeaderMap::new()).is_none());
    }

    #[test]
    fn clear_cookie_has_zero_max_age() {
        let value = build_clear_cookie();
        assert!(value.to_str().unwrap().contains("Max-Age=0"));
    }
}
