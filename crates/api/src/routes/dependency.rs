//! Route definitions for the `/dependencies` resource.
//!
//! All endpoints require authentication.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::dependency;
use crate::state::AppState;

/// Routes mounted at `/dependencies`.
///
/// ```text
/// GET    /         -> list_dependencies
/// POST   /         -> create_dependency
/// POST   /bulk     -> create_dependencies_bulk
/// GET    /recent   -> recent_dependencies
/// PUT    /{id}     -> update_dependency
/// DELETE /{id}     -> delete_dependency
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(dependency::list_dependencies).post(dependency::create_dependency),
        )
        .route("/bulk", post(dependency::create_dependencies_bulk))
        .route("/recent", get(dependency::recent_dependencies))
        .route(
            "/{id}",
            put(dependency::update_dependency).delete(dependency::delete_dependency),
        )
}
