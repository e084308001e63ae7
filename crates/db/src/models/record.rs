//! Latest-version record summaries for the picker dialogs.

use serde::Serialize;
use sqlx::FromRow;

/// The latest version of one tracked record: identifying value,
/// descriptive field, and creating actor.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecordSummary {
    pub id: String,
    pub nome: Option<String>,
    pub usuario: Option<String>,
}
