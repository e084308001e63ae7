//! Read-side queries over the tracked records themselves (latest
//! versions, existence, counts), backing the picker dialogs and the
//! dashboard tiles.

use audhub_core::entity::{EntityKind, EntityRef};
use sqlx::PgPool;

use crate::models::record::RecordSummary;

pub struct RecordRepo;

impl RecordRepo {
    /// Whether at least one ledger version of the record exists.
    pub async fn exists(pool: &PgPool, record: &EntityRef) -> Result<bool, sqlx::Error> {
        let query = match record.kind {
            EntityKind::SqlQuery => "SELECT EXISTS (SELECT 1 FROM aud_sql WHERE codsentenca = $1)",
            EntityKind::Report => "SELECT EXISTS (SELECT 1 FROM aud_report WHERE id::TEXT = $1)",
            EntityKind::VisualFormula => "SELECT EXISTS (SELECT 1 FROM aud_fv WHERE id::TEXT = $1)",
        };
        sqlx::query_scalar(query)
            .bind(&record.id)
            .fetch_one(pool)
            .await
    }

    /// Number of distinct tracked records of a kind (not ledger rows).
    pub async fn count(pool: &PgPool, kind: EntityKind) -> Result<i64, sqlx::Error> {
        let query = match kind {
            EntityKind::SqlQuery => "SELECT COUNT(DISTINCT codsentenca) FROM aud_sql",
            EntityKind::Report => "SELECT COUNT(DISTINCT id) FROM aud_report",
            EntityKind::VisualFormula => "SELECT COUNT(DISTINCT id) FROM aud_fv",
        };
        sqlx::query_scalar::<_, i64>(query).fetch_one(pool).await
    }

    /// Latest-version summaries of every tracked record of a kind,
    /// optionally narrowed by a search term over the display fields.
    pub async fn list_summaries(
        pool: &PgPool,
        kind: EntityKind,
        search: Option<&str>,
    ) -> Result<Vec<RecordSummary>, sqlx::Error> {
        let (base, filter, order) = match kind {
            EntityKind::SqlQuery => (
                "SELECT DISTINCT ON (codsentenca) codsentenca AS id, titulo AS nome, \
                 reccreatedby AS usuario FROM aud_sql",
                "(codsentenca ILIKE $1 OR titulo ILIKE $1)",
                "ORDER BY codsentenca, recmodifiedon DESC",
            ),
            EntityKind::Report => (
                "SELECT DISTINCT ON (id) id::TEXT AS id, descricao AS nome, \
                 reccreatedby AS usuario FROM aud_report",
                "(id::TEXT ILIKE $1 OR descricao ILIKE $1)",
                "ORDER BY id, dataultalteracao DESC",
            ),
            EntityKind::VisualFormula => (
                "SELECT DISTINCT ON (id) id::TEXT AS id, nome, \
                 reccreatedby AS usuario FROM aud_fv",
                "(id::TEXT ILIKE $1 OR nome ILIKE $1)",
                "ORDER BY id, recmodifiedon DESC",
            ),
        };

        let query = match search {
            Some(_) => format!("{base} WHERE {filter} {order}"),
            None => format!("{base} {order}"),
        };

        let mut q = sqlx::query_as::<_, RecordSummary>(&query);
        if let Some(term) = search {
            q = q.bind(format!("%{term}%"));
        }
        q.fetch_all(pool).await
    }
}
