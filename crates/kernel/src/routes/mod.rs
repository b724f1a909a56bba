//! HTTP route handlers.

pub mod health;
pub mod sidebar;

use axum::Router;

use crate::state::AppState;

/// Build the application router with its request middleware.
///
/// CORS and tracing layers are added by the binary.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(sidebar::router())
        .layer(axum::middleware::from_fn(
            crate::middleware::propagate_support_session,
        ))
        .with_state(state)
}
