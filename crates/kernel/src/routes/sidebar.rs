//! Sidebar resolution endpoint.
//!
//! `POST /api/sidebar` takes a [`SidebarSnapshot`] and returns the resolved
//! menu, using the process-wide feature flags.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::{Json, Router};
use sitenav_sdk::types::ResolvedMenuItem;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::snapshot::SidebarSnapshot;
use crate::state::AppState;
use crate::support_session;

/// Create the sidebar router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/sidebar", post(resolve_sidebar))
}

async fn resolve_sidebar(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<SidebarSnapshot>, JsonRejection>,
) -> AppResult<Json<Vec<ResolvedMenuItem>>> {
    let Json(snapshot) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let items = snapshot.resolve(state.features())?;

    info!(
        site = snapshot.site.as_ref().map(|s| s.id),
        content_types = snapshot.content_types.len(),
        items = items.len(),
        support_session = support_session::is_support_session(&headers),
        "sidebar resolved"
    );

    Ok(Json(items))
}
