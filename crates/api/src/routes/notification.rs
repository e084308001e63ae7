//! Route definitions for the `/notifications` resource.
//!
//! All endpoints require authentication.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// GET  /                 -> list_notifications
/// GET  /counters         -> counters
/// POST /mark-all-read    -> mark_all_read
/// POST /{id}/mark-read   -> mark_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notification::list_notifications))
        .route("/counters", get(notification::counters))
        .route("/mark-all-read", post(notification::mark_all_read))
        .route("/{id}/mark-read", post(notification::mark_read))
}
