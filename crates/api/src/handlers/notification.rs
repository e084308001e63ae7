//! Handlers for the `/notifications` resource.
//!
//! Alerts are derived on every request from the ledgers plus the
//! read-state set; nothing alert-shaped is ever stored. All endpoints
//! require authentication via [`AuthUser`].

use audhub_core::alert::{derive_alert, Alert, AlertCounters};
use audhub_core::types::DbId;
use audhub_db::repositories::NotificationRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationQuery {
    /// Maximum number of results. Defaults to 50, capped at 100.
    pub limit: Option<i64>,
}

/// Maximum page size for the alert listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for the alert listing.
const DEFAULT_LIMIT: i64 = 50;

/// GET /api/v1/notifications
pub async fn list_notifications(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<NotificationQuery>,
) -> AppResult<Json<DataResponse<Vec<Alert>>>> {
    let alerts = fetch_alerts(&state, params.limit).await?;
    Ok(Json(DataResponse { data: alerts }))
}

/// GET /api/v1/notifications/counters
///
/// Counters are recomputed from the current alert set on every call;
/// they are never cached between mutations.
pub async fn counters(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<AlertCounters>>> {
    let alerts = fetch_alerts(&state, None).await?;
    Ok(Json(DataResponse {
        data: AlertCounters::from_alerts(&alerts),
    }))
}

/// POST /api/v1/notifications/{id}/mark-read
///
/// Idempotent; 204 whether the alert was unread or already read. 404
/// for a row id no ledger knows.
pub async fn mark_read(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(row_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    NotificationRepo::mark_read(&state.pool, row_id).await?;

    tracing::info!(user_id = auth.user_id, row_id, "Alert marked read");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/notifications/mark-all-read
///
/// Returns the number of alerts newly marked.
pub async fn mark_all_read(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let count = NotificationRepo::mark_all_read(&state.pool).await?;

    tracing::info!(user_id = auth.user_id, count, "All alerts marked read");

    Ok(Json(serde_json::json!({
        "data": { "marked_read": count }
    })))
}

async fn fetch_alerts(state: &AppState, limit: Option<i64>) -> AppResult<Vec<Alert>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let now = chrono::Utc::now();

    let alerts = NotificationRepo::list_sources(&state.pool, limit)
        .await?
        .into_iter()
        .map(|row| derive_alert(&row.into_alert_source(), now))
        .collect();
    Ok(alerts)
}
