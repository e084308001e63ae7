//! Repository for the unified change-history ledger.
//!
//! The three `aud_*` tables are projected into one shape with a UNION
//! ALL; `row_id` comes from a shared sequence, so it is unique across
//! the union and can address any ledger row directly.

use audhub_core::annotation::validate_annotation_text;
use audhub_core::entity::{EntityKind, EntityRef};
use audhub_core::error::CoreError;
use audhub_core::pagination::PageParams;
use audhub_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::history::{HistoryEntry, HistoryPage, HistoryQuery, HistorySummary, SnapshotRow};

/// The unified ledger projection. `usuario` carries the creating actor
/// shown by the listing; the per-kind modification actor only appears
/// in snapshots and alerts.
const LEDGER_UNION: &str = "\
    SELECT row_id, 'AUD_SQL' AS tabela, codsentenca AS record_id, \
           codsentenca AS campo1, titulo AS campo2, reccreatedby AS usuario, \
           prioridade, observacao, reccreatedon AS data_criacao, \
           recmodifiedon AS data_modificacao \
    FROM aud_sql \
    UNION ALL \
    SELECT row_id, 'AUD_REPORT', id::TEXT, id::TEXT, descricao, reccreatedby, \
           prioridade, observacao, reccreatedon, dataultalteracao \
    FROM aud_report \
    UNION ALL \
    SELECT row_id, 'AUD_FV', id::TEXT, id::TEXT, nome, reccreatedby, \
           prioridade, observacao, reccreatedon, recmodifiedon \
    FROM aud_fv";

pub struct HistoryRepo;

impl HistoryRepo {
    /// Filtered, paginated listing plus the whole-set column-visibility
    /// flags, computed with aggregates in one extra query.
    pub async fn list(
        pool: &PgPool,
        query: &HistoryQuery,
        page: &PageParams,
    ) -> Result<HistoryPage, sqlx::Error> {
        let (where_clause, binds, bind_idx) = build_history_filter(query);

        let items_query = format!(
            "SELECT l.* FROM ({LEDGER_UNION}) l {where_clause} \
             ORDER BY l.data_modificacao DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );
        let summary_query = format!(
            "SELECT COUNT(*)::BIGINT AS total_count, \
                    COALESCE(BOOL_OR(l.prioridade IS NOT NULL AND l.prioridade <> ''), FALSE) \
                        AS any_prioridade, \
                    COALESCE(BOOL_OR(l.observacao IS NOT NULL AND l.observacao <> ''), FALSE) \
                        AS any_observacao \
             FROM ({LEDGER_UNION}) l {where_clause}"
        );

        let mut items_q = sqlx::query_as::<_, HistoryEntry>(&items_query);
        let mut summary_q = sqlx::query_as::<_, HistorySummary>(&summary_query);
        for value in &binds {
            items_q = bind_history_value(items_q, value);
            summary_q = bind_history_value(summary_q, value);
        }

        let items = items_q
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await?;
        let summary = summary_q.fetch_one(pool).await?;

        Ok(HistoryPage {
            items,
            total_count: summary.total_count,
            any_prioridade: summary.any_prioridade,
            any_observacao: summary.any_observacao,
        })
    }

    /// Look up one ledger entry by its global row id.
    pub async fn find_by_row_id(
        pool: &PgPool,
        row_id: DbId,
    ) -> Result<Option<HistoryEntry>, sqlx::Error> {
        let query = format!("SELECT l.* FROM ({LEDGER_UNION}) l WHERE l.row_id = $1");
        sqlx::query_as::<_, HistoryEntry>(&query)
            .bind(row_id)
            .fetch_optional(pool)
            .await
    }

    /// All versions of one record, schema fields packed as JSONB.
    ///
    /// Bookkeeping columns (`row_id`, `prioridade`, `observacao`, the
    /// modification actor) are stripped so the snapshot carries exactly
    /// the kind's compared fields.
    pub async fn snapshots(
        pool: &PgPool,
        record: &EntityRef,
    ) -> Result<Vec<SnapshotRow>, sqlx::Error> {
        let query = match record.kind {
            EntityKind::SqlQuery => {
                "SELECT row_id, recmodifiedon AS modified_at, \
                        to_jsonb(t) - 'row_id' - 'recmodifiedby' - 'prioridade' - 'observacao' \
                            AS fields \
                 FROM aud_sql t WHERE codsentenca = $1 \
                 ORDER BY recmodifiedon DESC"
            }
            EntityKind::Report => {
                "SELECT row_id, dataultalteracao AS modified_at, \
                        to_jsonb(t) - 'row_id' - 'usrultalteracao' - 'prioridade' - 'observacao' \
                            AS fields \
                 FROM aud_report t WHERE id::TEXT = $1 \
                 ORDER BY dataultalteracao DESC"
            }
            EntityKind::VisualFormula => {
                "SELECT row_id, recmodifiedon AS modified_at, \
                        to_jsonb(t) - 'row_id' - 'recmodifiedby' - 'prioridade' - 'observacao' \
                            AS fields \
                 FROM aud_fv t WHERE id::TEXT = $1 \
                 ORDER BY recmodifiedon DESC"
            }
        };
        sqlx::query_as::<_, SnapshotRow>(query)
            .bind(&record.id)
            .fetch_all(pool)
            .await
    }

    /// Annotate the current version of a record.
    ///
    /// `expected_modified_at`, when given, must match the current
    /// version's timestamp; a newer version having appeared in between
    /// fails with `Conflict` and leaves the ledger untouched.
    pub async fn annotate(
        pool: &PgPool,
        record: &EntityRef,
        texto: &str,
        expected_modified_at: Option<Timestamp>,
    ) -> DbResult<HistoryEntry> {
        let texto = validate_annotation_text(texto)?;

        let (row_id, modified_at) = Self::current_version(pool, record)
            .await?
            .ok_or_else(|| CoreError::NotFound {
                entity: record.kind.table_name(),
                id: record.id.clone(),
            })?;

        if let Some(expected) = expected_modified_at {
            if expected != modified_at {
                return Err(CoreError::Conflict(format!(
                    "{record} was modified at {modified_at}, expected {expected}"
                ))
                .into());
            }
        }

        let update = match record.kind {
            EntityKind::SqlQuery => "UPDATE aud_sql SET observacao = $2 WHERE row_id = $1",
            EntityKind::Report => "UPDATE aud_report SET observacao = $2 WHERE row_id = $1",
            EntityKind::VisualFormula => "UPDATE aud_fv SET observacao = $2 WHERE row_id = $1",
        };
        sqlx::query(update)
            .bind(row_id)
            .bind(texto)
            .execute(pool)
            .await?;

        let entry = Self::find_by_row_id(pool, row_id)
            .await?
            .ok_or_else(|| CoreError::Internal(format!("ledger row {row_id} disappeared")))?;
        Ok(entry)
    }

    /// The record's current version: greatest modification timestamp.
    async fn current_version(
        pool: &PgPool,
        record: &EntityRef,
    ) -> Result<Option<(DbId, Timestamp)>, sqlx::Error> {
        let query = match record.kind {
            EntityKind::SqlQuery => {
                "SELECT row_id, recmodifiedon FROM aud_sql \
                 WHERE codsentenca = $1 ORDER BY recmodifiedon DESC LIMIT 1"
            }
            EntityKind::Report => {
                "SELECT row_id, dataultalteracao FROM aud_report \
                 WHERE id::TEXT = $1 ORDER BY dataultalteracao DESC LIMIT 1"
            }
            EntityKind::VisualFormula => {
                "SELECT row_id, recmodifiedon FROM aud_fv \
                 WHERE id::TEXT = $1 ORDER BY recmodifiedon DESC LIMIT 1"
            }
        };
        sqlx::query_as::<_, (DbId, Timestamp)>(query)
            .bind(&record.id)
            .fetch_optional(pool)
            .await
    }
}

/// Typed bind value for dynamically-built history queries.
enum HistoryBindValue {
    Text(String),
    Date(NaiveDate),
}

/// Build the history WHERE clause.
///
/// Returns `(where_clause, bind_values, next_bind_index)`; the clause
/// is empty when no filter is active. Date bounds compare against the
/// modification timestamp's calendar day, both ends inclusive.
fn build_history_filter(query: &HistoryQuery) -> (String, Vec<HistoryBindValue>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut binds: Vec<HistoryBindValue> = Vec::new();

    if let Some(kind) = query.tabela {
        conditions.push(format!("l.tabela = ${bind_idx}"));
        bind_idx += 1;
        binds.push(HistoryBindValue::Text(kind.table_name().to_string()));
    }

    if let Some(from) = query.data_inicio {
        conditions.push(format!("l.data_modificacao::date >= ${bind_idx}"));
        bind_idx += 1;
        binds.push(HistoryBindValue::Date(from));
    }

    if let Some(to) = query.data_fim {
        conditions.push(format!("l.data_modificacao::date <= ${bind_idx}"));
        bind_idx += 1;
        binds.push(HistoryBindValue::Date(to));
    }

    if let Some(ref term) = query.search {
        conditions.push(format!(
            "(l.tabela ILIKE ${bind_idx} OR l.campo1 ILIKE ${bind_idx} \
              OR l.campo2 ILIKE ${bind_idx} OR l.usuario ILIKE ${bind_idx})"
        ));
        bind_idx += 1;
        binds.push(HistoryBindValue::Text(format!("%{term}%")));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, binds, bind_idx)
}

/// Bind one `HistoryBindValue` to a sqlx `QueryAs`.
fn bind_history_value<'q, O>(
    q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    value: &'q HistoryBindValue,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    match value {
        HistoryBindValue::Text(v) => q.bind(v.as_str()),
        HistoryBindValue::Date(v) => q.bind(*v),
    }
}
