//! Route definitions for the `/history` resource.
//!
//! All endpoints require authentication.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::history;
use crate::state::AppState;

/// Routes mounted at `/history`.
///
/// ```text
/// GET  /                       -> list_history
/// GET  /compare                -> compare_versions
/// POST /{kind}/{id}/annotate   -> annotate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(history::list_history))
        .route("/compare", get(history::compare_versions))
        .route("/{kind}/{id}/annotate", post(history::annotate))
}
