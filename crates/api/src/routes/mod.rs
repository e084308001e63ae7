pub mod auth;
pub mod dependency;
pub mod health;
pub mod history;
pub mod insights;
pub mod notification;
pub mod record;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
///
/// /dependencies                        list, create
/// /dependencies/bulk                   bulk create (partial success)
/// /dependencies/recent                 newest edges (dashboard)
/// /dependencies/{id}                   update, delete
///
/// /history                             unified ledger listing
/// /history/compare                     version comparison (?kind=&id=&as_of=)
/// /history/{kind}/{id}/annotate        annotate current version (POST)
///
/// /notifications                       derived alert listing
/// /notifications/counters              aggregate counters
/// /notifications/mark-all-read         mark everything read (POST)
/// /notifications/{id}/mark-read        mark one read (POST)
///
/// /records                             record picker feed (?kind=&search=)
///
/// /insights/prioridades                edge counts per priority level
/// /insights/{kind}                     record/edge count for one tile
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/dependencies", dependency::router())
        .nest("/history", history::router())
        .nest("/notifications", notification::router())
        .nest("/records", record::router())
        .nest("/insights", insights::router())
}
