//! Route definitions for the `/insights` dashboard tiles.

use axum::routing::get;
use axum::Router;

use crate::handlers::insights;
use crate::state::AppState;

/// Routes mounted at `/insights`.
///
/// ```text
/// GET /prioridades -> priority_counts
/// GET /{kind}      -> kind_count (sql / report / fv / dependencias)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/prioridades", get(insights::priority_counts))
        .route("/{kind}", get(insights::kind_count))
}
