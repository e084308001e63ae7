//! Handlers for the `/history` resource.
//!
//! All endpoints require authentication via [`AuthUser`].

use audhub_core::compare::{is_different, select_versions};
use audhub_core::entity::{EntityKind, EntityRef};
use audhub_core::pagination::{normalize_search, Page, PageParams};
use audhub_core::schema;
use audhub_core::types::Timestamp;
use audhub_db::models::history::{HistoryEntry, HistoryQuery};
use audhub_db::repositories::HistoryRepo;
use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppResult;
use crate::handlers::parse_kind_filter;
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, PageEnvelope};
use crate::state::AppState;

/// Query parameters for `GET /history`.
#[derive(Debug, Deserialize)]
pub struct HistoryListQuery {
    /// Kind filter: table name or short code; absent means all kinds.
    pub tabela: Option<String>,
    /// Inclusive calendar-day lower bound on the modification timestamp.
    pub data_inicio: Option<NaiveDate>,
    /// Inclusive calendar-day upper bound.
    pub data_fim: Option<NaiveDate>,
    pub search: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// Query parameters for `GET /history/compare`.
#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    pub kind: String,
    pub id: String,
    /// Compare as of this instant; absent means the latest version.
    pub as_of: Option<Timestamp>,
}

/// Body for `POST /history/{kind}/{id}/annotate`.
#[derive(Debug, Deserialize)]
pub struct AnnotateRequest {
    pub observacao: String,
    /// Optimistic-concurrency guard: the modification timestamp the
    /// client believes is current.
    pub data_modificacao: Option<Timestamp>,
}

/// Listing payload: the shared paging envelope plus the
/// column-visibility flags.
#[derive(Debug, Serialize)]
pub struct HistoryListResponse {
    #[serde(flatten)]
    pub page: PageEnvelope<HistoryEntry>,
    pub any_prioridade: bool,
    pub any_observacao: bool,
}

/// GET /api/v1/history
pub async fn list_history(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<HistoryListQuery>,
) -> AppResult<Json<DataResponse<HistoryListResponse>>> {
    let query = HistoryQuery {
        tabela: parse_kind_filter(params.tabela.as_deref())?,
        data_inicio: params.data_inicio,
        data_fim: params.data_fim,
        search: normalize_search(params.search.as_deref()),
    };
    let page_params = PageParams::clamped(params.page, params.page_size);

    let page = HistoryRepo::list(&state.pool, &query, &page_params).await?;

    Ok(Json(DataResponse {
        data: HistoryListResponse {
            any_prioridade: page.any_prioridade,
            any_observacao: page.any_observacao,
            page: PageEnvelope::new(
                Page {
                    items: page.items,
                    total_count: page.total_count,
                },
                &page_params,
            ),
        },
    }))
}

/// GET /api/v1/history/compare?kind=&id=&as_of=
///
/// A record with no version at or before `as_of` (or never tracked at
/// all) yields an empty comparison, not an error.
pub async fn compare_versions(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<CompareQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let kind = parse_kind(&params.kind)?;
    let record = EntityRef::new(kind, &params.id);

    let snapshots = HistoryRepo::snapshots(&state.pool, &record)
        .await?
        .into_iter()
        .map(|row| row.into_snapshot())
        .collect::<Result<Vec<_>, _>>()?;

    let cmp = select_versions(&snapshots, params.as_of);

    let campos: Vec<_> = schema::fields(kind)
        .iter()
        .map(|field| {
            json!({
                "name": field,
                "label": schema::field_label(field),
                "different": is_different(cmp.current.as_ref(), cmp.previous.as_ref(), field),
            })
        })
        .collect();

    Ok(Json(json!({
        "data": {
            "registro_atual": cmp.current,
            "registro_anterior": cmp.previous,
            "campos": campos,
        }
    })))
}

/// POST /api/v1/history/{kind}/{id}/annotate
pub async fn annotate(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
    Json(payload): Json<AnnotateRequest>,
) -> AppResult<Json<DataResponse<HistoryEntry>>> {
    let kind = parse_kind(&kind)?;
    let record = EntityRef::new(kind, id);

    let entry = HistoryRepo::annotate(
        &state.pool,
        &record,
        &payload.observacao,
        payload.data_modificacao,
    )
    .await?;

    tracing::info!(user_id = auth.user_id, record = %record, "Annotation saved");

    Ok(Json(DataResponse { data: entry }))
}

/// Here the kind names the record's namespace, so an unrecognised one is
/// a missing record (404), unlike the listing filters where it is a bad
/// parameter.
fn parse_kind(value: &str) -> Result<EntityKind, crate::error::AppError> {
    Ok(EntityKind::parse(value)?)
}
