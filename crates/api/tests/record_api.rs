//! HTTP-level integration tests for the record picker and insight tiles.

mod common;

use axum::http::StatusCode;
use chrono::{DateTime, TimeZone, Utc};
use common::{body_json, get_auth};
use sqlx::PgPool;

fn ts(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, day, 9, 0, 0).unwrap()
}

async fn seed_sql(pool: &PgPool, codsentenca: &str, titulo: &str, modified_at: DateTime<Utc>) {
    sqlx::query(
        "INSERT INTO aud_sql \
            (codsentenca, titulo, sentenca, aplicacao, tamanho, \
             reccreatedby, reccreatedon, recmodifiedon, recmodifiedby, prioridade) \
         VALUES ($1, $2, 'SELECT 1', 'GLOBAL', 42, 'mario', $3, $3, 'mario', NULL)",
    )
    .bind(codsentenca)
    .bind(titulo)
    .bind(modified_at)
    .execute(pool)
    .await
    .expect("seed aud_sql row");
}

/// The picker lists one summary per record, using its latest version.
#[sqlx::test(migrations = "../../db/migrations")]
async fn picker_lists_latest_version_per_record(pool: PgPool) {
    seed_sql(&pool, "GLB0001", "Consulta mensal", ts(1)).await;
    seed_sql(&pool, "GLB0001", "Consulta mensal v2", ts(2)).await;
    seed_sql(&pool, "GLB0002", "Consulta anual", ts(3)).await;
    let (user, _) = common::create_test_user(&pool, "mario").await;
    let token = common::auth_token(&user);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/records?kind=sql", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let records = json["data"].as_array().unwrap();
    assert_eq!(records.len(), 2);

    let first = records
        .iter()
        .find(|r| r["id"] == "GLB0001")
        .expect("GLB0001 in picker");
    assert_eq!(first["nome"], "Consulta mensal v2");
}

/// The picker's search narrows by id or descriptive name.
#[sqlx::test(migrations = "../../db/migrations")]
async fn picker_search_narrows_results(pool: PgPool) {
    seed_sql(&pool, "GLB0001", "Consulta mensal", ts(1)).await;
    seed_sql(&pool, "GLB0002", "Consulta anual", ts(2)).await;
    let (user, _) = common::create_test_user(&pool, "mario").await;
    let token = common::auth_token(&user);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/records?kind=sql&search=anual", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let records = json["data"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], "GLB0002");
}

/// Insight tiles count distinct records, not ledger versions.
#[sqlx::test(migrations = "../../db/migrations")]
async fn insight_tile_counts_distinct_records(pool: PgPool) {
    seed_sql(&pool, "GLB0001", "Consulta mensal", ts(1)).await;
    seed_sql(&pool, "GLB0001", "Consulta mensal v2", ts(2)).await;
    seed_sql(&pool, "GLB0002", "Consulta anual", ts(3)).await;
    let (user, _) = common::create_test_user(&pool, "mario").await;
    let token = common::auth_token(&user);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/insights/sql", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["count"], 2);
}

/// The priorities tile breaks edge counts down per level.
#[sqlx::test(migrations = "../../db/migrations")]
async fn priorities_tile_breaks_down_edge_counts(pool: PgPool) {
    let (user, _) = common::create_test_user(&pool, "mario").await;
    let token = common::auth_token(&user);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/insights/prioridades", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 0);
    assert_eq!(json["data"]["alta"], 0);
    assert_eq!(json["data"]["sem_prioridade"], 0);
}
