//! Per-kind field schemas for the comparison view and listings.
//!
//! Each tracked kind snapshots a fixed, ordered set of columns. The schema
//! is non-negotiable: it mirrors the legacy source tables, including the
//! Report table's divergent modification-metadata column names.

use crate::entity::EntityKind;

/// Ordered field names snapshotted for a kind, as stored and compared.
pub fn fields(kind: EntityKind) -> &'static [&'static str] {
    match kind {
        // AUD_SQL has no separate numeric id; codsentenca identifies the record.
        EntityKind::SqlQuery => &[
            "codsentenca",
            "titulo",
            "sentenca",
            "aplicacao",
            "tamanho",
            "reccreatedby",
            "reccreatedon",
            "recmodifiedon",
        ],
        EntityKind::Report => &[
            "id",
            "codigo",
            "descricao",
            "codaplicacao",
            "reccreatedby",
            "reccreatedon",
            "dataultalteracao",
        ],
        EntityKind::VisualFormula => &[
            "id",
            "nome",
            "descricao",
            "idcategoria",
            "ativo",
            "reccreatedby",
            "reccreatedon",
            "recmodifiedon",
        ],
    }
}

/// The column that identifies a record of this kind within its ledger.
pub fn identifying_field(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::SqlQuery => "codsentenca",
        EntityKind::Report | EntityKind::VisualFormula => "id",
    }
}

/// The column holding a snapshot's modification timestamp.
pub fn modified_at_field(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::SqlQuery | EntityKind::VisualFormula => "recmodifiedon",
        EntityKind::Report => "dataultalteracao",
    }
}

/// Display label for a field, uppercased per the comparison view.
pub fn field_label(field: &str) -> String {
    match field {
        "codsentenca" => "CODSENTENCA".to_string(),
        "titulo" => "TÍTULO".to_string(),
        "sentenca" => "SENTENCA".to_string(),
        "aplicacao" => "APLICAÇÃO".to_string(),
        "tamanho" => "TAMANHO".to_string(),
        "id" => "ID".to_string(),
        "codigo" => "CÓDIGO".to_string(),
        "descricao" => "DESCRIÇÃO".to_string(),
        "codaplicacao" => "CODAPLICAÇÃO".to_string(),
        "nome" => "NOME".to_string(),
        "idcategoria" => "IDCATEGORIA".to_string(),
        "ativo" => "ATIVO".to_string(),
        "reccreatedby" => "USUÁRIO".to_string(),
        "reccreatedon" => "DATA CRIAÇÃO".to_string(),
        "recmodifiedon" | "dataultalteracao" => "DATA MODIFICAÇÃO".to_string(),
        other => other.to_uppercase(),
    }
}

/// Label for the first display column of a listing row of this kind.
pub fn primary_display_label(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::SqlQuery => "CODSENTENCA",
        EntityKind::Report | EntityKind::VisualFormula => "ID",
    }
}

/// Label for the second display column (the descriptive field).
pub fn secondary_display_label(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::SqlQuery => "TÍTULO",
        EntityKind::Report => "DESCRIÇÃO",
        EntityKind::VisualFormula => "NOME",
    }
}

/// The descriptive field backing the second display column.
pub fn secondary_display_field(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::SqlQuery => "titulo",
        EntityKind::Report => "descricao",
        EntityKind::VisualFormula => "nome",
    }
}

/// Label for the actor column, which the legacy tables name differently.
pub fn actor_label(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Report => "USRULTALTERACAO",
        EntityKind::SqlQuery | EntityKind::VisualFormula => "RECMODIFIEDBY",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_an_identifying_field_in_its_schema() {
        for kind in EntityKind::ALL {
            assert!(fields(kind).contains(&identifying_field(kind)), "{kind}");
        }
    }

    #[test]
    fn every_kind_has_its_modified_at_field_in_its_schema() {
        for kind in EntityKind::ALL {
            assert!(fields(kind).contains(&modified_at_field(kind)), "{kind}");
        }
    }

    #[test]
    fn sql_query_schema_matches_legacy_columns() {
        assert_eq!(
            fields(EntityKind::SqlQuery),
            &[
                "codsentenca",
                "titulo",
                "sentenca",
                "aplicacao",
                "tamanho",
                "reccreatedby",
                "reccreatedon",
                "recmodifiedon"
            ]
        );
    }

    #[test]
    fn report_uses_divergent_modification_columns() {
        assert_eq!(modified_at_field(EntityKind::Report), "dataultalteracao");
        assert_eq!(actor_label(EntityKind::Report), "USRULTALTERACAO");
    }

    #[test]
    fn labels_cover_all_schema_fields() {
        for kind in EntityKind::ALL {
            for field in fields(kind) {
                // Must not fall through to the raw-uppercase default.
                assert_ne!(field_label(field), String::new());
            }
        }
        assert_eq!(field_label("titulo"), "TÍTULO");
        assert_eq!(field_label("dataultalteracao"), "DATA MODIFICAÇÃO");
    }

    #[test]
    fn secondary_display_fields_per_kind() {
        assert_eq!(secondary_display_field(EntityKind::SqlQuery), "titulo");
        assert_eq!(secondary_display_field(EntityKind::Report), "descricao");
        assert_eq!(secondary_display_field(EntityKind::VisualFormula), "nome");
    }
}
