//! Unified ledger entries and version snapshots.

use audhub_core::compare::Snapshot;
use audhub_core::entity::EntityKind;
use audhub_core::error::CoreError;
use audhub_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// One ledger entry, projected into the shape shared by all three
/// `aud_*` tables. `campo1` is the identifying value, `campo2` the
/// descriptive field of the kind.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HistoryEntry {
    pub row_id: DbId,
    pub tabela: String,
    pub record_id: String,
    pub campo1: String,
    pub campo2: Option<String>,
    pub usuario: Option<String>,
    pub prioridade: Option<String>,
    pub observacao: Option<String>,
    pub data_criacao: Option<Timestamp>,
    pub data_modificacao: Timestamp,
}

/// Filter for the unified history listing. Date bounds are inclusive
/// calendar days against the modification timestamp.
#[derive(Debug, Clone, Default)]
pub struct HistoryQuery {
    pub tabela: Option<EntityKind>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
    pub search: Option<String>,
}

/// One page of history plus the column-visibility flags, which are
/// aggregates over the whole filtered set, not just the page.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryPage {
    pub items: Vec<HistoryEntry>,
    pub total_count: i64,
    pub any_prioridade: bool,
    pub any_observacao: bool,
}

/// Aggregate row backing [`HistoryPage`]'s totals and flags.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct HistorySummary {
    pub total_count: i64,
    pub any_prioridade: bool,
    pub any_observacao: bool,
}

/// One version of a record with its schema fields packed as JSONB.
#[derive(Debug, Clone, FromRow)]
pub struct SnapshotRow {
    pub row_id: DbId,
    pub modified_at: Timestamp,
    pub fields: serde_json::Value,
}

impl SnapshotRow {
    /// Convert into the comparison engine's snapshot shape.
    pub fn into_snapshot(self) -> Result<Snapshot, CoreError> {
        match self.fields {
            serde_json::Value::Object(fields) => Ok(Snapshot {
                fields,
                modified_at: self.modified_at,
            }),
            other => Err(CoreError::Internal(format!(
                "ledger snapshot for row {} is not a JSON object: {other}",
                self.row_id
            ))),
        }
    }
}
