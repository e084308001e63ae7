//! Handlers for the `/insights` dashboard tiles.

use audhub_core::entity::EntityKind;
use audhub_core::error::CoreError;
use audhub_db::models::dependency::PriorityCounts;
use audhub_db::repositories::{DependencyRepo, RecordRepo};
use axum::extract::{Path, State};
use axum::Json;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/insights/{kind}
///
/// `kind` is a short code (`sql` / `report` / `fv`) or `dependencias`
/// for the edge count; record counts are distinct records, not ledger
/// rows.
pub async fn kind_count(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let count = if kind.eq_ignore_ascii_case("dependencias") {
        DependencyRepo::priority_counts(&state.pool).await?.total
    } else {
        let kind = EntityKind::parse(&kind)
            .map_err(|_| AppError::Core(CoreError::Validation(format!("Unknown kind: {kind}"))))?;
        RecordRepo::count(&state.pool, kind).await?
    };

    Ok(Json(json!({ "data": { "count": count } })))
}

/// GET /api/v1/insights/prioridades
pub async fn priority_counts(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<PriorityCounts>>> {
    let counts = DependencyRepo::priority_counts(&state.pool).await?;
    Ok(Json(DataResponse { data: counts }))
}
