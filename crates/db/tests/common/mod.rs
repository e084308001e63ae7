//! Shared fixtures for db integration tests: seeding ledger rows.

#![allow(dead_code)]

use audhub_db::DbPool;
use chrono::{DateTime, TimeZone, Utc};

pub fn ts(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap()
}

/// Insert one `aud_sql` ledger row; returns its global `row_id`.
pub async fn seed_sql(
    pool: &DbPool,
    codsentenca: &str,
    titulo: &str,
    modified_at: DateTime<Utc>,
    prioridade: Option<&str>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO aud_sql \
            (codsentenca, titulo, sentenca, aplicacao, tamanho, \
             reccreatedby, reccreatedon, recmodifiedon, recmodifiedby, prioridade) \
         VALUES ($1, $2, 'SELECT 1', 'GLOBAL', 42, 'mario', $3, $3, 'mario', $4) \
         RETURNING row_id",
    )
    .bind(codsentenca)
    .bind(titulo)
    .bind(modified_at)
    .bind(prioridade)
    .fetch_one(pool)
    .await
    .expect("seed aud_sql row")
}

/// Insert one `aud_report` ledger row; returns its global `row_id`.
pub async fn seed_report(
    pool: &DbPool,
    id: i64,
    descricao: &str,
    modified_at: DateTime<Utc>,
    prioridade: Option<&str>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO aud_report \
            (id, codigo, descricao, codaplicacao, \
             reccreatedby, reccreatedon, dataultalteracao, usrultalteracao, prioridade) \
         VALUES ($1, 'REL', $2, 'FOLHA', 'joana', $3, $3, 'joana', $4) \
         RETURNING row_id",
    )
    .bind(id)
    .bind(descricao)
    .bind(modified_at)
    .bind(prioridade)
    .fetch_one(pool)
    .await
    .expect("seed aud_report row")
}

/// Insert one `aud_fv` ledger row; returns its global `row_id`.
pub async fn seed_fv(
    pool: &DbPool,
    id: i64,
    nome: &str,
    modified_at: DateTime<Utc>,
    prioridade: Option<&str>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO aud_fv \
            (id, nome, descricao, idcategoria, ativo, \
             reccreatedby, reccreatedon, recmodifiedon, recmodifiedby, prioridade) \
         VALUES ($1, $2, 'formula', 3, TRUE, 'carla', $3, $3, 'carla', $4) \
         RETURNING row_id",
    )
    .bind(id)
    .bind(nome)
    .bind(modified_at)
    .bind(prioridade)
    .fetch_one(pool)
    .await
    .expect("seed aud_fv row")
}
