//! Support-session propagation middleware.
//!
//! Copies the support-session token from the inbound request onto the
//! response so the calling frontend keeps the session across hops.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tracing::debug;

use crate::support_session;

/// Middleware echoing the support-session header back on the response.
pub async fn propagate_support_session(request: Request<Body>, next: Next) -> Response {
    let inbound = request.headers().clone();

    if support_session::is_support_session(&inbound) {
        debug!(path = %request.uri().path(), "support session request");
    }

    let mut response = next.run(request).await;
    support_session::propagate_support_session(&inbound, response.headers_mut());
    response
}
