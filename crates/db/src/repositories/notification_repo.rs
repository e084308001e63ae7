//! Repository for the alert read-state.
//!
//! Alerts themselves are never stored: the listing projects ledger rows
//! joined with `notification_reads`, and the only mutations are
//! idempotent inserts into that read-state set.

use audhub_core::error::CoreError;
use audhub_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::notification::AlertSourceRow;

/// Ledger projection for alerts: modification actor and timestamp per
/// kind (reports use the divergent `usrultalteracao`/`dataultalteracao`
/// columns).
const ALERT_UNION: &str = "\
    SELECT row_id, 'AUD_SQL' AS tabela, codsentenca AS campo1, \
           recmodifiedby AS usuario, prioridade, recmodifiedon AS data_modificacao \
    FROM aud_sql \
    UNION ALL \
    SELECT row_id, 'AUD_REPORT', id::TEXT, usrultalteracao, prioridade, dataultalteracao \
    FROM aud_report \
    UNION ALL \
    SELECT row_id, 'AUD_FV', id::TEXT, recmodifiedby, prioridade, recmodifiedon \
    FROM aud_fv";

pub struct NotificationRepo;

impl NotificationRepo {
    /// Newest ledger rows with their read flags, one per alert.
    pub async fn list_sources(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<AlertSourceRow>, sqlx::Error> {
        let query = format!(
            "SELECT l.row_id, l.tabela, l.campo1, l.usuario, l.prioridade, \
                    l.data_modificacao, (nr.row_id IS NOT NULL) AS lida \
             FROM ({ALERT_UNION}) l \
             LEFT JOIN notification_reads nr ON nr.row_id = l.row_id \
             ORDER BY l.data_modificacao DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, AlertSourceRow>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Mark one alert read. Idempotent: marking an already-read alert
    /// succeeds without effect. Unknown row ids are rejected.
    pub async fn mark_read(pool: &PgPool, row_id: DbId) -> DbResult<()> {
        if !Self::row_exists(pool, row_id).await? {
            return Err(CoreError::NotFound {
                entity: "alert",
                id: row_id.to_string(),
            }
            .into());
        }

        sqlx::query(
            "INSERT INTO notification_reads (row_id) VALUES ($1) \
             ON CONFLICT (row_id) DO NOTHING",
        )
        .bind(row_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Mark every ledger row read in one set-based statement; returns
    /// the number of rows newly marked.
    pub async fn mark_all_read(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let query = format!(
            "INSERT INTO notification_reads (row_id) \
             SELECT l.row_id FROM ({ALERT_UNION}) l \
             ON CONFLICT (row_id) DO NOTHING"
        );
        let result = sqlx::query(&query).execute(pool).await?;
        Ok(result.rows_affected())
    }

    async fn row_exists(pool: &PgPool, row_id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("SELECT EXISTS (SELECT 1 FROM ({ALERT_UNION}) l WHERE l.row_id = $1)");
        sqlx::query_scalar(&query).bind(row_id).fetch_one(pool).await
    }
}
