//! Ledger rows joined with read-state, input to alert derivation.

use audhub_core::alert::AlertSource;
use audhub_core::priority::PriorityLevel;
use audhub_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// One ledger row with its read flag, as fetched for the alert listing.
///
/// `usuario` is the modifying actor (`recmodifiedby`, or
/// `usrultalteracao` for reports).
#[derive(Debug, Clone, FromRow)]
pub struct AlertSourceRow {
    pub row_id: DbId,
    pub tabela: String,
    pub campo1: String,
    pub usuario: Option<String>,
    pub prioridade: Option<String>,
    pub data_modificacao: Timestamp,
    pub lida: bool,
}

impl AlertSourceRow {
    /// Project into the derivation input. A stored priority that matches
    /// none of the three levels classifies as unset, which the
    /// derivation maps to an informational alert.
    pub fn into_alert_source(self) -> AlertSource {
        let descricao = match &self.usuario {
            Some(usuario) => format!("Registro {} alterado por {}", self.campo1, usuario),
            None => format!("Registro {} alterado", self.campo1),
        };
        AlertSource {
            row_id: self.row_id,
            titulo: format!("Alteração em {}", self.tabela),
            descricao,
            priority: PriorityLevel::parse_opt(self.prioridade.as_deref())
                .ok()
                .flatten(),
            modified_at: self.data_modificacao,
            read: self.lida,
        }
    }
}
