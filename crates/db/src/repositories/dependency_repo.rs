//! Repository for the `dependencies` table.
//!
//! Slot encoding and decoding never happen here: rows go in and out as
//! the triple produced by `EdgeSlots::encode`, and the listing view
//! resolves both endpoints in SQL from the stored orientation.

use audhub_core::edge::EdgeSlots;
use audhub_core::entity::{EntityKind, EntityRef};
use audhub_core::error::CoreError;
use audhub_core::pagination::{Page, PageParams};
use audhub_core::priority::PriorityLevel;
use audhub_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::dependency::{
    BulkEdgeFailure, BulkEdgeOutcome, CreateDependency, CreateDependencyBulk, DependencyFilter,
    DependencyRow, DependencyView, PriorityCounts, UpdateDependency,
};
use crate::repositories::record_repo::RecordRepo;

/// Column list for `dependencies` SELECT queries.
const COLUMNS: &str = "\
    id, id_aud_sql, id_aud_report, id_aud_fv, origem_kind, \
    prioridade, created_by, created_at";

/// Inner view resolving each row into (origin, destination) display
/// columns. The origin id lives in the slot named by `origem_kind`; the
/// destination is the other populated slot.
const VIEW_SOURCE: &str = "\
    SELECT d.id, d.prioridade, d.created_at AS data_criacao, \
           u.display_name AS criado_por, \
           d.origem_kind AS origem_tabela, \
           CASE d.origem_kind \
               WHEN 'AUD_SQL' THEN d.id_aud_sql \
               WHEN 'AUD_REPORT' THEN d.id_aud_report \
               ELSE d.id_aud_fv \
           END AS origem_id, \
           CASE \
               WHEN d.origem_kind <> 'AUD_SQL' AND d.id_aud_sql IS NOT NULL THEN 'AUD_SQL' \
               WHEN d.origem_kind <> 'AUD_REPORT' AND d.id_aud_report IS NOT NULL THEN 'AUD_REPORT' \
               ELSE 'AUD_FV' \
           END AS destino_tabela, \
           CASE \
               WHEN d.origem_kind <> 'AUD_SQL' AND d.id_aud_sql IS NOT NULL THEN d.id_aud_sql \
               WHEN d.origem_kind <> 'AUD_REPORT' AND d.id_aud_report IS NOT NULL THEN d.id_aud_report \
               ELSE d.id_aud_fv \
           END AS destino_id \
    FROM dependencies d \
    LEFT JOIN users u ON u.id = d.created_by";

/// Scalar subquery resolving an endpoint's display name: the
/// descriptive field of the referenced record's latest ledger version.
fn display_name_expr(tabela_col: &str, id_col: &str) -> String {
    format!(
        "CASE e.{tabela_col} \
            WHEN 'AUD_SQL' THEN (SELECT s.titulo FROM aud_sql s \
                WHERE s.codsentenca = e.{id_col} ORDER BY s.recmodifiedon DESC LIMIT 1) \
            WHEN 'AUD_REPORT' THEN (SELECT r.descricao FROM aud_report r \
                WHERE r.id::TEXT = e.{id_col} ORDER BY r.dataultalteracao DESC LIMIT 1) \
            ELSE (SELECT f.nome FROM aud_fv f \
                WHERE f.id::TEXT = e.{id_col} ORDER BY f.recmodifiedon DESC LIMIT 1) \
        END"
    )
}

pub struct DependencyRepo;

impl DependencyRepo {
    /// Create a single edge after validating both endpoints.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateDependency,
        created_by: Option<DbId>,
    ) -> DbResult<DependencyRow> {
        Self::ensure_tracked(pool, &dto.origem).await?;
        Self::attach(pool, &dto.origem, &dto.destino, dto.prioridade, created_by).await
    }

    /// Create one edge per destination, each attempt independent: a
    /// failed destination is reported and the rest still go through.
    /// Only an unknown origin fails the whole call.
    pub async fn create_bulk(
        pool: &PgPool,
        dto: &CreateDependencyBulk,
        created_by: Option<DbId>,
    ) -> DbResult<BulkEdgeOutcome> {
        Self::ensure_tracked(pool, &dto.origem).await?;

        let mut outcome = BulkEdgeOutcome::default();
        for destino in &dto.destinos {
            match Self::attach(pool, &dto.origem, destino, dto.prioridade, created_by).await {
                Ok(row) => outcome.criadas.push(row),
                Err(err) => outcome.falhas.push(BulkEdgeFailure {
                    destino: destino.clone(),
                    motivo: err.to_string(),
                }),
            }
        }
        Ok(outcome)
    }

    pub async fn find(pool: &PgPool, id: DbId) -> DbResult<DependencyRow> {
        let query = format!("SELECT {COLUMNS} FROM dependencies WHERE id = $1");
        sqlx::query_as::<_, DependencyRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: "dependency",
                    id: id.to_string(),
                }
                .into()
            })
    }

    /// Replace an edge's endpoints and priority. The slot triple is
    /// re-derived from the new pair, so a kind collision fails with
    /// `InvalidEdge` instead of silently dropping a slot.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateDependency,
    ) -> DbResult<DependencyRow> {
        Self::find(pool, id).await?;

        let slots = EdgeSlots::encode(&dto.origem, &dto.destino)?;
        Self::ensure_tracked(pool, &dto.origem).await?;
        Self::ensure_tracked(pool, &dto.destino).await?;

        let query = format!(
            "UPDATE dependencies \
             SET id_aud_sql = $2, id_aud_report = $3, id_aud_fv = $4, \
                 origem_kind = $5, prioridade = $6 \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, DependencyRow>(&query)
            .bind(id)
            .bind(&slots.id_aud_sql)
            .bind(&slots.id_aud_report)
            .bind(&slots.id_aud_fv)
            .bind(dto.origem.kind.table_name())
            .bind(dto.prioridade.map(|p| p.as_str()))
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM dependencies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: "dependency",
                id: id.to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Filtered, paginated listing with both endpoints resolved.
    pub async fn list(
        pool: &PgPool,
        filter: &DependencyFilter,
        page: &PageParams,
    ) -> DbResult<Page<DependencyView>> {
        let origem_nome = display_name_expr("origem_tabela", "origem_id");
        let destino_nome = display_name_expr("destino_tabela", "destino_id");
        let (where_clause, binds, bind_idx) = build_edge_filter(filter, &origem_nome, &destino_nome);

        let items_query = format!(
            "SELECT e.id, e.origem_tabela, e.origem_id, {origem_nome} AS origem_nome, \
                    e.destino_tabela, e.destino_id, {destino_nome} AS destino_nome, \
                    e.prioridade, e.criado_por, e.data_criacao \
             FROM ({VIEW_SOURCE}) e {where_clause} \
             ORDER BY e.data_criacao DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );
        let count_query =
            format!("SELECT COUNT(*)::BIGINT FROM ({VIEW_SOURCE}) e {where_clause}");

        let mut items_q = sqlx::query_as::<_, DependencyView>(&items_query);
        let mut count_q = sqlx::query_scalar::<_, i64>(&count_query);
        for value in &binds {
            items_q = items_q.bind(value.as_str());
            count_q = count_q.bind(value.as_str());
        }

        let items = items_q
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await?;
        let total_count = count_q.fetch_one(pool).await?;

        Ok(Page { items, total_count })
    }

    /// Newest edges for the dashboard's recent-activity strip.
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<DependencyView>, sqlx::Error> {
        let origem_nome = display_name_expr("origem_tabela", "origem_id");
        let destino_nome = display_name_expr("destino_tabela", "destino_id");
        let query = format!(
            "SELECT e.id, e.origem_tabela, e.origem_id, {origem_nome} AS origem_nome, \
                    e.destino_tabela, e.destino_id, {destino_nome} AS destino_nome, \
                    e.prioridade, e.criado_por, e.data_criacao \
             FROM ({VIEW_SOURCE}) e \
             ORDER BY e.data_criacao DESC LIMIT $1"
        );
        sqlx::query_as::<_, DependencyView>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Edge counts per priority level for the insights tiles.
    pub async fn priority_counts(pool: &PgPool) -> Result<PriorityCounts, sqlx::Error> {
        sqlx::query_as::<_, PriorityCounts>(
            "SELECT \
                COUNT(*) FILTER (WHERE prioridade = 'Alta') AS alta, \
                COUNT(*) FILTER (WHERE prioridade = 'Média') AS media, \
                COUNT(*) FILTER (WHERE prioridade = 'Baixa') AS baixa, \
                COUNT(*) FILTER (WHERE prioridade IS NULL OR prioridade = '') AS sem_prioridade, \
                COUNT(*) AS total \
             FROM dependencies",
        )
        .fetch_one(pool)
        .await
    }

    /// Encode and insert one edge; the origin must already be verified.
    async fn attach(
        pool: &PgPool,
        origem: &EntityRef,
        destino: &EntityRef,
        prioridade: Option<PriorityLevel>,
        created_by: Option<DbId>,
    ) -> DbResult<DependencyRow> {
        let slots = EdgeSlots::encode(origem, destino)?;
        Self::ensure_tracked(pool, destino).await?;

        let query = format!(
            "INSERT INTO dependencies \
                (id_aud_sql, id_aud_report, id_aud_fv, origem_kind, prioridade, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, DependencyRow>(&query)
            .bind(&slots.id_aud_sql)
            .bind(&slots.id_aud_report)
            .bind(&slots.id_aud_fv)
            .bind(origem.kind.table_name())
            .bind(prioridade.map(|p| p.as_str()))
            .bind(created_by)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    async fn ensure_tracked(pool: &PgPool, record: &EntityRef) -> DbResult<()> {
        if RecordRepo::exists(pool, record).await? {
            Ok(())
        } else {
            Err(CoreError::NotFound {
                entity: record.kind.table_name(),
                id: record.id.clone(),
            }
            .into())
        }
    }
}

/// Build the listing WHERE clause over the resolved view columns.
///
/// Returns `(where_clause, text_binds, next_bind_index)`. All bind
/// values here are TEXT. The search term matches derived display fields
/// only, never the raw slot identifiers.
fn build_edge_filter(
    filter: &DependencyFilter,
    origem_nome: &str,
    destino_nome: &str,
) -> (String, Vec<String>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut binds: Vec<String> = Vec::new();

    if let Some(kind) = filter.origem_tabela {
        conditions.push(format!("e.origem_tabela = ${bind_idx}"));
        bind_idx += 1;
        binds.push(kind.table_name().to_string());
    }

    if filter.sem_prioridade {
        conditions.push("(e.prioridade IS NULL OR e.prioridade = '')".to_string());
    } else if let Some(level) = filter.prioridade {
        conditions.push(format!("e.prioridade = ${bind_idx}"));
        bind_idx += 1;
        binds.push(level.as_str().to_string());
    }

    if let Some(ref term) = filter.search {
        conditions.push(format!(
            "(e.origem_tabela ILIKE ${bind_idx} OR e.destino_tabela ILIKE ${bind_idx} \
              OR {origem_nome} ILIKE ${bind_idx} OR {destino_nome} ILIKE ${bind_idx} \
              OR e.criado_por ILIKE ${bind_idx})"
        ));
        bind_idx += 1;
        binds.push(format!("%{term}%"));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, binds, bind_idx)
}
