//! Support-session header accessor.
//!
//! A support session is marked by a token in a fixed request header. The
//! token is copied from an inbound request onto whatever goes out next
//! (a proxied request or the response).

use axum::http::header::InvalidHeaderValue;
use axum::http::{HeaderMap, HeaderName, HeaderValue};

/// Header carrying the support-session token.
pub const SUPPORT_SESSION_HEADER: &str = "x-support-session";

/// Whether the headers carry a non-empty support-session token.
pub fn is_support_session(headers: &HeaderMap) -> bool {
    get_support_session(headers).is_some_and(|token| !token.is_empty())
}

/// The support-session token, if present and valid UTF-8.
pub fn get_support_session(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(SUPPORT_SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
}

/// Set the support-session token, replacing any existing one.
pub fn set_support_session(headers: &mut HeaderMap, token: &str) -> Result<(), InvalidHeaderValue> {
    let value = HeaderValue::from_str(token)?;
    headers.insert(HeaderName::from_static(SUPPORT_SESSION_HEADER), value);
    Ok(())
}

/// Copy the token from `from` to `to`. Returns whether anything was copied.
pub fn propagate_support_session(from: &HeaderMap, to: &mut HeaderMap) -> bool {
    match from.get(SUPPORT_SESSION_HEADER) {
        Some(value) if !value.is_empty() => {
            to.insert(HeaderName::from_static(SUPPORT_SESSION_HEADER), value.clone());
            true
        }
        _ => false,
    }
}
