//! Dependency edge rows, listing views, and edge DTOs.

use audhub_core::entity::{EntityKind, EntityRef};
use audhub_core::priority::PriorityLevel;
use audhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A `dependencies` row as stored: the raw slot triple plus orientation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DependencyRow {
    pub id: DbId,
    pub id_aud_sql: Option<String>,
    pub id_aud_report: Option<String>,
    pub id_aud_fv: Option<String>,
    pub origem_kind: String,
    pub prioridade: Option<String>,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
}

/// A listing row with both endpoints resolved to display values.
///
/// `origem_nome`/`destino_nome` are the descriptive field of each
/// endpoint's latest ledger version; absent when the referenced record
/// has no tracked versions anymore.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DependencyView {
    pub id: DbId,
    pub origem_tabela: String,
    pub origem_id: String,
    pub origem_nome: Option<String>,
    pub destino_tabela: String,
    pub destino_id: String,
    pub destino_nome: Option<String>,
    pub prioridade: Option<String>,
    pub criado_por: Option<String>,
    pub data_criacao: Timestamp,
}

/// Payload for creating a single edge.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDependency {
    pub origem: EntityRef,
    pub destino: EntityRef,
    pub prioridade: Option<PriorityLevel>,
}

/// Payload for bulk edge creation: one origin, many destinations.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDependencyBulk {
    pub origem: EntityRef,
    pub destinos: Vec<EntityRef>,
    pub prioridade: Option<PriorityLevel>,
}

/// Full-replacement payload for editing an edge. The slot triple is
/// re-derived from the pair; it is never patched in place.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDependency {
    pub origem: EntityRef,
    pub destino: EntityRef,
    pub prioridade: Option<PriorityLevel>,
}

/// One failed destination of a bulk create.
#[derive(Debug, Clone, Serialize)]
pub struct BulkEdgeFailure {
    pub destino: EntityRef,
    pub motivo: String,
}

/// Outcome of a bulk create: the batch itself never fails, each
/// destination succeeds or lands in `falhas`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BulkEdgeOutcome {
    pub criadas: Vec<DependencyRow>,
    pub falhas: Vec<BulkEdgeFailure>,
}

/// Filter for the dependency listing. `sem_prioridade` selects edges
/// with no priority set and wins over `prioridade` when both arrive.
#[derive(Debug, Clone, Default)]
pub struct DependencyFilter {
    pub origem_tabela: Option<EntityKind>,
    pub prioridade: Option<PriorityLevel>,
    pub sem_prioridade: bool,
    pub search: Option<String>,
}

/// Per-level edge counts for the dashboard insights tiles.
#[derive(Debug, Clone, Copy, Default, FromRow, Serialize)]
pub struct PriorityCounts {
    pub alta: i64,
    pub media: i64,
    pub baixa: i64,
    pub sem_prioridade: i64,
    pub total: i64,
}
