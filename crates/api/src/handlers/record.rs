//! Handler for the `/records` picker feed.

use audhub_core::error::CoreError;
use audhub_core::pagination::normalize_search;
use audhub_db::models::record::RecordSummary;
use audhub_db::repositories::RecordRepo;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::parse_kind_filter;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /records`.
#[derive(Debug, Deserialize)]
pub struct RecordListQuery {
    /// Kind to list: table name or short code. Required.
    pub kind: Option<String>,
    pub search: Option<String>,
}

/// GET /api/v1/records?kind=
///
/// Latest-version summaries of every tracked record of one kind, for
/// the origin/destination picker dialogs.
pub async fn list_records(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<RecordListQuery>,
) -> AppResult<Json<DataResponse<Vec<RecordSummary>>>> {
    let kind = parse_kind_filter(params.kind.as_deref())?.ok_or_else(|| {
        AppError::Core(CoreError::Validation("kind is required".to_string()))
    })?;
    let search = normalize_search(params.search.as_deref());

    let items = RecordRepo::list_summaries(&state.pool, kind, search.as_deref()).await?;
    Ok(Json(DataResponse { data: items }))
}
