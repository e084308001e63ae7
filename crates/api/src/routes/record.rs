//! Route definition for the `/records` picker feed.

use axum::routing::get;
use axum::Router;

use crate::handlers::record;
use crate::state::AppState;

/// Routes mounted at `/records`.
///
/// ```text
/// GET / -> list_records (?kind=&search=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(record::list_records))
}
