//! Handlers for the `/dependencies` resource.
//!
//! All endpoints require authentication via [`AuthUser`].

use audhub_core::pagination::{normalize_search, PageParams};
use audhub_core::priority::PriorityLevel;
use audhub_core::types::DbId;
use audhub_db::models::dependency::{
    BulkEdgeOutcome, CreateDependency, CreateDependencyBulk, DependencyFilter, DependencyRow,
    DependencyView, UpdateDependency,
};
use audhub_db::repositories::DependencyRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::parse_kind_filter;
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, PageEnvelope};
use crate::state::AppState;

/// Query parameters for `GET /dependencies`.
#[derive(Debug, Deserialize)]
pub struct DependencyListQuery {
    /// Origin kind filter: table name or short code.
    pub origem_tabela: Option<String>,
    /// Priority level filter ("Alta" / "Média" / "Baixa").
    pub prioridade: Option<String>,
    /// When `true`, select edges with no priority set; wins over
    /// `prioridade`.
    pub sem_prioridade: Option<bool>,
    pub search: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// Number of edges in the dashboard's recent-activity strip.
const DEFAULT_RECENT_LIMIT: i64 = 3;

/// GET /api/v1/dependencies
pub async fn list_dependencies(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<DependencyListQuery>,
) -> AppResult<Json<DataResponse<PageEnvelope<DependencyView>>>> {
    let filter = DependencyFilter {
        origem_tabela: parse_kind_filter(params.origem_tabela.as_deref())?,
        prioridade: PriorityLevel::parse_opt(params.prioridade.as_deref())?,
        sem_prioridade: params.sem_prioridade.unwrap_or(false),
        search: normalize_search(params.search.as_deref()),
    };
    let page_params = PageParams::clamped(params.page, params.page_size);

    let page = DependencyRepo::list(&state.pool, &filter, &page_params).await?;

    Ok(Json(DataResponse {
        data: PageEnvelope::new(page, &page_params),
    }))
}

/// GET /api/v1/dependencies/recent
pub async fn recent_dependencies(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<DependencyView>>>> {
    let items = DependencyRepo::recent(&state.pool, DEFAULT_RECENT_LIMIT).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/dependencies
pub async fn create_dependency(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateDependency>,
) -> AppResult<impl IntoResponse> {
    let row = DependencyRepo::create(&state.pool, &payload, Some(auth.user_id)).await?;

    tracing::info!(edge_id = row.id, user_id = auth.user_id, "Dependency created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// POST /api/v1/dependencies/bulk
///
/// Per-destination independent attempts; the batch itself never fails
/// once the origin is validated. The breakdown names every destination
/// that could not be attached.
pub async fn create_dependencies_bulk(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateDependencyBulk>,
) -> AppResult<Json<DataResponse<BulkEdgeOutcome>>> {
    let outcome = DependencyRepo::create_bulk(&state.pool, &payload, Some(auth.user_id)).await?;

    tracing::info!(
        user_id = auth.user_id,
        created = outcome.criadas.len(),
        failed = outcome.falhas.len(),
        "Bulk dependency creation finished"
    );

    Ok(Json(DataResponse { data: outcome }))
}

/// PUT /api/v1/dependencies/{id}
pub async fn update_dependency(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<UpdateDependency>,
) -> AppResult<Json<DataResponse<DependencyRow>>> {
    let row = DependencyRepo::update(&state.pool, id, &payload).await?;

    tracing::info!(edge_id = id, user_id = auth.user_id, "Dependency updated");

    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/v1/dependencies/{id}
pub async fn delete_dependency(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    DependencyRepo::delete(&state.pool, id).await?;

    tracing::info!(edge_id = id, user_id = auth.user_id, "Dependency deleted");

    Ok(StatusCode::NO_CONTENT)
}
